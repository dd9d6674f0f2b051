//! Interest communities
//!
//! A community is the set of users holding a given interest. Every interest
//! node forms one candidate group; groups below the membership threshold are
//! dropped and the rest are ordered largest first.

use crate::graph::{EdgeKind, GraphStore, NodeId, NodeKind};
use tracing::debug;

/// Users sharing one interest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestCommunity {
    /// Interest name
    pub interest: String,
    /// Member user ids, in the order they picked up the interest
    pub members: Vec<NodeId>,
}

impl InterestCommunity {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Interest communities with at least `min_members` users
///
/// Ordered by size descending, then interest name ascending.
pub fn interest_communities(store: &GraphStore, min_members: usize) -> Vec<InterestCommunity> {
    let interests = store.nodes_of_kind(NodeKind::Interest);
    let total = interests.len();

    let mut communities: Vec<InterestCommunity> = interests
        .into_iter()
        .filter_map(|interest| {
            let members: Vec<NodeId> = store
                .in_neighbors(interest.id.as_str(), EdgeKind::InterestedIn)
                .filter(|id| store.get_node_of_kind(id.as_str(), NodeKind::User).is_some())
                .cloned()
                .collect();
            (members.len() >= min_members).then(|| InterestCommunity {
                interest: interest.name().to_string(),
                members,
            })
        })
        .collect();

    communities.sort_by(|a, b| {
        b.size()
            .cmp(&a.size())
            .then_with(|| a.interest.cmp(&b.interest))
    });

    debug!(
        "Community grouping: {} of {} interests have >= {} members",
        communities.len(),
        total,
        min_members
    );
    communities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Node, PropertyMap};

    fn build(memberships: &[(&str, &[&str])]) -> GraphStore {
        let mut store = GraphStore::new();
        for (user, interests) in memberships {
            store.insert_node(Node::user(*user, *user, 30, "Boston")).unwrap();
            for interest in interests.iter() {
                let id = store.upsert_interest(interest).unwrap();
                store
                    .create_edge(EdgeKind::InterestedIn, user, id.as_str(), PropertyMap::new())
                    .unwrap();
            }
        }
        store
    }

    #[test]
    fn test_threshold_and_order() {
        let store = build(&[
            ("a", &["music", "yoga"]),
            ("b", &["music", "chess"]),
            ("c", &["music", "chess"]),
            ("d", &["yoga"]),
        ]);

        let communities = interest_communities(&store, 2);
        let summary: Vec<(&str, usize)> = communities
            .iter()
            .map(|c| (c.interest.as_str(), c.size()))
            .collect();
        assert_eq!(summary, vec![("music", 3), ("chess", 2), ("yoga", 2)]);

        assert_eq!(
            communities[0].members,
            vec![NodeId::new("a"), NodeId::new("b"), NodeId::new("c")]
        );
    }

    #[test]
    fn test_threshold_boundary() {
        let store = build(&[("a", &["go"]), ("b", &["go"])]);
        assert!(interest_communities(&store, 3).is_empty());
        assert_eq!(interest_communities(&store, 2).len(), 1);
    }

    #[test]
    fn test_zero_threshold_includes_everything() {
        let mut store = build(&[("a", &["go"])]);
        store.upsert_interest("unused").unwrap();

        let communities = interest_communities(&store, 0);
        assert_eq!(communities.len(), 2);
        assert_eq!(communities[1].interest, "unused");
        assert_eq!(communities[1].size(), 0);
    }

    #[test]
    fn test_empty_graph() {
        let store = GraphStore::new();
        assert!(interest_communities(&store, 1).is_empty());
    }
}
