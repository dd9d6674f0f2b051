//! Per-user network statistics

use crate::algo::second_degree;
use crate::graph::{Direction, EdgeKind, GraphStore, NodeId, NodeKind};

/// Connectivity summary for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStatistics {
    pub id: NodeId,
    pub friend_count: usize,
    pub interest_count: usize,
    /// Size of the full second-degree candidate set (never truncated)
    pub potential_connections: usize,
}

/// Statistics for `user`, or `None` if it is not a known user
pub fn user_statistics(store: &GraphStore, user: &str) -> Option<UserStatistics> {
    let node = store.get_node_of_kind(user, NodeKind::User)?;

    Some(UserStatistics {
        id: node.id.clone(),
        friend_count: store.degree(user, EdgeKind::FriendsWith, Direction::Outgoing),
        interest_count: store.degree(user, EdgeKind::InterestedIn, Direction::Outgoing),
        potential_connections: second_degree(store, user).len(),
    })
}
