//! Social Graph Engine
//!
//! An embeddable, in-memory property graph for social-network analytics:
//! second-degree discovery with mutual-friend counts, shortest friendship
//! paths, interest-based recommendations and interest communities.
//!
//! # Architecture
//!
//! - [`graph`]: the Graph Store. Owns nodes, edges and adjacency indices.
//! - [`algo`]: the Traversal Engine. BFS and bounded two-hop expansion over a
//!   borrowed store.
//! - [`analytics`]: the Aggregation Engine. Ranking, grouping and statistics.
//! - [`network`]: the Query Facade. Locking, validation and result shaping.
//!
//! The store is owned by a [`SocialNetwork`] instance; there is no global
//! graph. Writers are serialized through an `RwLock`, readers run in
//! parallel against a consistent snapshot.
//!
//! ## Example Usage
//!
//! ```rust
//! use social_graph::SocialNetwork;
//!
//! let network = SocialNetwork::new();
//! network.create_user("alice", "Alice", 28, "New York").unwrap();
//! network.create_user("bob", "Bob", 32, "San Francisco").unwrap();
//! network.create_user("carol", "Carol", 25, "New York").unwrap();
//!
//! network.add_friendship("alice", "bob", None).unwrap();
//! network.add_friendship("bob", "carol", None).unwrap();
//!
//! let suggestions = network.find_friends_of_friends("alice");
//! assert_eq!(suggestions.len(), 1);
//! assert_eq!(suggestions[0].name, "Carol");
//! assert_eq!(suggestions[0].mutual_friends, 1);
//!
//! let path = network.find_shortest_connection_path("alice", "carol").unwrap();
//! assert_eq!(path, vec!["Alice", "Bob", "Carol"]);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod analytics;
pub mod config;
pub mod demo;
pub mod graph;
pub mod network;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, EngineConfig};
pub use graph::{
    Direction, Edge, EdgeId, EdgeKind, GraphError, GraphResult, GraphStore, Node, NodeId,
    NodeKind, PropertyMap, PropertyValue,
};
pub use network::{
    Community, FriendOfFriend, InterestRecommendation, NetworkStatistics, SocialNetwork,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
