//! Bounded friendship expansion and interest matching
//!
//! Both traversals here have a fixed depth: exactly two `FRIENDS_WITH` hops
//! for second-degree discovery, and user -> interest -> user for interest
//! matching. Results come back sorted by candidate id.

use crate::graph::{EdgeKind, GraphStore, NodeId, NodeKind};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// A user exactly two friendship hops away
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondDegreeConnection {
    pub id: NodeId,
    /// Distinct direct friends of the source that are also friends of `id`, sorted
    pub mutual_friends: Vec<NodeId>,
}

impl SecondDegreeConnection {
    pub fn mutual_friend_count(&self) -> usize {
        self.mutual_friends.len()
    }
}

/// A non-friend user holding at least one interest in common with the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestMatch {
    pub id: NodeId,
    /// Names of the shared interests, sorted
    pub shared_interests: Vec<String>,
}

impl InterestMatch {
    pub fn shared_interest_count(&self) -> usize {
        self.shared_interests.len()
    }
}

fn direct_friends<'a>(store: &'a GraphStore, user: &str) -> FxHashSet<&'a NodeId> {
    store.out_neighbors(user, EdgeKind::FriendsWith).collect()
}

/// Second-degree connections of `user`
///
/// Expands the one-hop friend set H1, expands each member of H1 once more,
/// and drops `user` itself and every member of H1. Each survivor records the
/// members of H1 it was reached through. Adjacency holds no parallel edges
/// and each member of H1 is expanded once, so every intermediate is counted
/// once per candidate regardless of how many paths exist.
///
/// Unknown users (or non-user ids) yield an empty list.
pub fn second_degree(store: &GraphStore, user: &str) -> Vec<SecondDegreeConnection> {
    if store.get_node_of_kind(user, NodeKind::User).is_none() {
        return Vec::new();
    }

    let direct = direct_friends(store, user);
    let mut candidates: FxHashMap<&NodeId, Vec<&NodeId>> = FxHashMap::default();

    for friend in store.out_neighbors(user, EdgeKind::FriendsWith) {
        for candidate in store.out_neighbors(friend.as_str(), EdgeKind::FriendsWith) {
            if candidate.as_str() == user || direct.contains(candidate) {
                continue;
            }
            candidates.entry(candidate).or_default().push(friend);
        }
    }

    let mut result: Vec<SecondDegreeConnection> = candidates
        .into_iter()
        .map(|(id, mut via)| {
            via.sort();
            SecondDegreeConnection {
                id: id.clone(),
                mutual_friends: via.into_iter().cloned().collect(),
            }
        })
        .collect();
    result.sort_by(|a, b| a.id.cmp(&b.id));

    debug!(
        "Second-degree expansion for {}: {} direct friends, {} candidates",
        user,
        direct.len(),
        result.len()
    );
    result
}

/// Users sharing at least one interest with `user`, excluding the user and
/// their direct friends
///
/// Unknown users (or non-user ids) yield an empty list.
pub fn shared_interest_candidates(store: &GraphStore, user: &str) -> Vec<InterestMatch> {
    if store.get_node_of_kind(user, NodeKind::User).is_none() {
        return Vec::new();
    }

    let direct = direct_friends(store, user);
    let mut candidates: FxHashMap<&NodeId, Vec<&str>> = FxHashMap::default();
    let mut interest_count = 0usize;

    for interest in store.out_neighbors(user, EdgeKind::InterestedIn) {
        interest_count += 1;
        let name = store.get_node(interest.as_str()).map_or("", |node| node.name());

        for other in store.in_neighbors(interest.as_str(), EdgeKind::InterestedIn) {
            if other.as_str() == user || direct.contains(other) {
                continue;
            }
            candidates.entry(other).or_default().push(name);
        }
    }

    let mut result: Vec<InterestMatch> = candidates
        .into_iter()
        .map(|(id, mut names)| {
            names.sort_unstable();
            InterestMatch {
                id: id.clone(),
                shared_interests: names.into_iter().map(str::to_string).collect(),
            }
        })
        .collect();
    result.sort_by(|a, b| a.id.cmp(&b.id));

    debug!(
        "Interest matching for {}: {} interests, {} candidates",
        user,
        interest_count,
        result.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Node, PropertyMap};

    fn store_with_users(ids: &[&str]) -> GraphStore {
        let mut store = GraphStore::new();
        for id in ids {
            store.insert_node(Node::user(*id, *id, 30, "Chicago")).unwrap();
        }
        store
    }

    fn befriend(store: &mut GraphStore, a: &str, b: &str) {
        store
            .create_edge(EdgeKind::FriendsWith, a, b, PropertyMap::new())
            .unwrap();
    }

    fn like(store: &mut GraphStore, user: &str, interest: &str) {
        let id = store.upsert_interest(interest).unwrap();
        store
            .create_edge(EdgeKind::InterestedIn, user, id.as_str(), PropertyMap::new())
            .unwrap();
    }

    #[test]
    fn test_second_degree_simple() {
        let mut store = store_with_users(&["alice", "bob", "carol"]);
        befriend(&mut store, "alice", "bob");
        befriend(&mut store, "bob", "carol");

        let result = second_degree(&store, "alice");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "carol");
        assert_eq!(result[0].mutual_friend_count(), 1);
        assert_eq!(result[0].mutual_friends, vec![NodeId::new("bob")]);
    }

    #[test]
    fn test_second_degree_counts_distinct_intermediates() {
        // alice - bob - dave, alice - carol - dave
        let mut store = store_with_users(&["alice", "bob", "carol", "dave"]);
        befriend(&mut store, "alice", "bob");
        befriend(&mut store, "alice", "carol");
        befriend(&mut store, "bob", "dave");
        befriend(&mut store, "carol", "dave");

        let result = second_degree(&store, "alice");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "dave");
        assert_eq!(
            result[0].mutual_friends,
            vec![NodeId::new("bob"), NodeId::new("carol")]
        );
    }

    #[test]
    fn test_second_degree_excludes_direct_friends() {
        // Triangle: alice, bob, carol all friends. bob also knows dave.
        let mut store = store_with_users(&["alice", "bob", "carol", "dave"]);
        befriend(&mut store, "alice", "bob");
        befriend(&mut store, "alice", "carol");
        befriend(&mut store, "bob", "carol");
        befriend(&mut store, "bob", "dave");

        let result = second_degree(&store, "alice");
        let ids: Vec<&str> = result.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["dave"]);
        assert_eq!(result[0].mutual_friend_count(), 1);
    }

    #[test]
    fn test_second_degree_unknown_user() {
        let mut store = store_with_users(&["alice"]);
        assert!(second_degree(&store, "ghost").is_empty());

        let music = store.upsert_interest("music").unwrap();
        assert!(second_degree(&store, music.as_str()).is_empty());
    }

    #[test]
    fn test_second_degree_sorted_by_id() {
        let mut store = store_with_users(&["hub", "me", "zoe", "adam", "mia"]);
        befriend(&mut store, "me", "hub");
        befriend(&mut store, "hub", "zoe");
        befriend(&mut store, "hub", "adam");
        befriend(&mut store, "hub", "mia");

        let ids: Vec<String> = second_degree(&store, "me")
            .into_iter()
            .map(|c| c.id.to_string())
            .collect();
        assert_eq!(ids, vec!["adam", "mia", "zoe"]);
    }

    #[test]
    fn test_shared_interest_candidates() {
        let mut store = store_with_users(&["alice", "bob", "carol", "dave"]);
        befriend(&mut store, "alice", "bob");
        like(&mut store, "alice", "hiking");
        like(&mut store, "alice", "cooking");
        like(&mut store, "bob", "hiking");
        like(&mut store, "carol", "hiking");
        like(&mut store, "carol", "cooking");
        like(&mut store, "dave", "cooking");
        like(&mut store, "dave", "music");

        let result = shared_interest_candidates(&store, "alice");
        assert_eq!(result.len(), 2);

        assert_eq!(result[0].id.as_str(), "carol");
        assert_eq!(result[0].shared_interests, vec!["cooking", "hiking"]);
        assert_eq!(result[0].shared_interest_count(), 2);

        assert_eq!(result[1].id.as_str(), "dave");
        assert_eq!(result[1].shared_interests, vec!["cooking"]);
    }

    #[test]
    fn test_shared_interest_no_interests() {
        let store = store_with_users(&["alice", "bob"]);
        assert!(shared_interest_candidates(&store, "alice").is_empty());
        assert!(shared_interest_candidates(&store, "ghost").is_empty());
    }
}
