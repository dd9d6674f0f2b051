//! Aggregation engine
//!
//! Ranking, grouping and per-user statistics computed from traversal results.

pub mod community;
pub mod ranking;
pub mod statistics;

pub use community::{interest_communities, InterestCommunity};
pub use ranking::{rank_top, Scored};
pub use statistics::{user_statistics, UserStatistics};
