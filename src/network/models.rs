//! Result models returned by the query facade
//!
//! Field names are the snake_case record keys clients see in JSON output.

use serde::{Deserialize, Serialize};

/// A second-degree connection suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendOfFriend {
    pub user_id: String,
    pub name: String,
    pub location: Option<String>,
    /// Number of distinct direct friends linking to this user
    pub mutual_friends: usize,
}

/// A suggestion based on shared interests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestRecommendation {
    pub user_id: String,
    pub name: String,
    pub location: Option<String>,
    /// Number of shared interests
    pub shared_interests: usize,
    /// Shared interest names, sorted
    pub common_interests: Vec<String>,
}

/// Users grouped by a common interest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    pub interest: String,
    pub size: usize,
    /// Member names, sorted
    pub members: Vec<String>,
}

/// Connectivity summary for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStatistics {
    pub name: String,
    pub friend_count: usize,
    pub interest_count: usize,
    pub potential_connections: usize,
}
