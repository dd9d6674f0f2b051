//! Pathfinding algorithms
//!
//! Unweighted breadth-first search with parent pointers. Expansion is
//! levelled, every node is enqueued at most once, and the search stops as
//! soon as the target is discovered, so the first path found is a shortest
//! one.

use crate::graph::{Direction, EdgeKind, GraphStore, NodeId, NodeKind};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use tracing::debug;

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    /// Every node on the path, `source` first and `target` last
    pub path: Vec<NodeId>,
}

impl PathResult {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// Follows `kind` edges in `direction`. Returns `None` when either node is
/// unknown or no path exists.
pub fn bfs(
    store: &GraphStore,
    source: &str,
    target: &str,
    kind: EdgeKind,
    direction: Direction,
) -> Option<PathResult> {
    let source = &store.get_node(source)?.id;
    let target = &store.get_node(target)?.id;

    if source == target {
        return Some(PathResult {
            source: source.clone(),
            target: target.clone(),
            path: vec![source.clone()],
        });
    }

    let mut queue = VecDeque::new();
    let mut parents: FxHashMap<&NodeId, Option<&NodeId>> = FxHashMap::default();

    queue.push_back(source);
    parents.insert(source, None);

    while let Some(current) = queue.pop_front() {
        for next in store.neighbors(current.as_str(), kind, direction) {
            if parents.contains_key(next) {
                continue;
            }
            parents.insert(next, Some(current));

            if next == target {
                let path = reconstruct(&parents, target);
                debug!(
                    "BFS {} -> {}: {} hops, {} nodes visited",
                    source,
                    target,
                    path.len() - 1,
                    parents.len()
                );
                return Some(PathResult {
                    source: source.clone(),
                    target: target.clone(),
                    path,
                });
            }
            queue.push_back(next);
        }
    }

    debug!("BFS {} -> {}: no path, {} nodes visited", source, target, parents.len());
    None
}

fn reconstruct(parents: &FxHashMap<&NodeId, Option<&NodeId>>, target: &NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut curr = Some(target);
    while let Some(node) = curr {
        path.push(node.clone());
        curr = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

/// Shortest friendship chain between two users
///
/// Friendships are stored symmetrically, so edge direction is ignored.
/// Returns `None` when either id is not a known user or the users sit in
/// different components.
pub fn shortest_friend_path(store: &GraphStore, source: &str, target: &str) -> Option<PathResult> {
    store.get_node_of_kind(source, NodeKind::User)?;
    store.get_node_of_kind(target, NodeKind::User)?;
    bfs(store, source, target, EdgeKind::FriendsWith, Direction::Both)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Node, PropertyMap};

    fn chain(ids: &[&str]) -> GraphStore {
        let mut store = GraphStore::new();
        for id in ids {
            store.insert_node(Node::user(*id, *id, 30, "Chicago")).unwrap();
        }
        for pair in ids.windows(2) {
            store
                .create_edge(EdgeKind::FriendsWith, pair[0], pair[1], PropertyMap::new())
                .unwrap();
        }
        store
    }

    fn ids(path: &PathResult) -> Vec<&str> {
        path.path.iter().map(NodeId::as_str).collect()
    }

    #[test]
    fn test_bfs_chain() {
        let store = chain(&["a", "b", "c", "d"]);

        let result = shortest_friend_path(&store, "a", "d").unwrap();
        assert_eq!(ids(&result), vec!["a", "b", "c", "d"]);
        assert_eq!(result.hops(), 3);

        // Reverse direction works too
        let result = shortest_friend_path(&store, "d", "a").unwrap();
        assert_eq!(ids(&result), vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn test_bfs_prefers_shortcut() {
        let mut store = chain(&["a", "b", "c", "d"]);
        store
            .create_edge(EdgeKind::FriendsWith, "a", "d", PropertyMap::new())
            .unwrap();

        let result = shortest_friend_path(&store, "a", "d").unwrap();
        assert_eq!(ids(&result), vec!["a", "d"]);
        assert_eq!(result.hops(), 1);
    }

    #[test]
    fn test_bfs_disconnected() {
        let mut store = chain(&["a", "b"]);
        store.insert_node(Node::user("z", "Z", 40, "Boston")).unwrap();

        assert!(shortest_friend_path(&store, "a", "z").is_none());
    }

    #[test]
    fn test_bfs_unknown_ids() {
        let store = chain(&["a", "b"]);
        assert!(shortest_friend_path(&store, "a", "ghost").is_none());
        assert!(shortest_friend_path(&store, "ghost", "a").is_none());
    }

    #[test]
    fn test_bfs_same_node() {
        let store = chain(&["a", "b"]);
        let result = shortest_friend_path(&store, "a", "a").unwrap();
        assert_eq!(ids(&result), vec!["a"]);
        assert_eq!(result.hops(), 0);
    }

    #[test]
    fn test_bfs_handles_cycles() {
        // a - b - c - a triangle plus tail c - d
        let mut store = chain(&["a", "b", "c", "d"]);
        store
            .create_edge(EdgeKind::FriendsWith, "c", "a", PropertyMap::new())
            .unwrap();

        let result = shortest_friend_path(&store, "b", "d").unwrap();
        assert_eq!(ids(&result), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_interest_nodes_are_not_users() {
        let mut store = chain(&["a", "b"]);
        let hiking = store.upsert_interest("hiking").unwrap();
        assert!(shortest_friend_path(&store, "a", hiking.as_str()).is_none());
    }

    #[test]
    fn test_directed_bfs_over_interests() {
        let mut store = chain(&["a"]);
        let hiking = store.upsert_interest("hiking").unwrap();
        store
            .create_edge(EdgeKind::InterestedIn, "a", hiking.as_str(), PropertyMap::new())
            .unwrap();

        let forward = bfs(&store, "a", hiking.as_str(), EdgeKind::InterestedIn, Direction::Outgoing);
        assert_eq!(forward.unwrap().hops(), 1);

        let backward = bfs(&store, hiking.as_str(), "a", EdgeKind::InterestedIn, Direction::Outgoing);
        assert!(backward.is_none());
    }
}
