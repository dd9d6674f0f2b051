//! Traversal engine
//!
//! Read-only algorithms over a borrowed [`GraphStore`](crate::graph::GraphStore).
//! None of them copy adjacency out of the store; callers hold whatever lock
//! guards the store for the duration of a call.

pub mod pathfinding;
pub mod traversal;

pub use pathfinding::{bfs, shortest_friend_path, PathResult};
pub use traversal::{
    second_degree, shared_interest_candidates, InterestMatch, SecondDegreeConnection,
};
