//! Core graph store
//!
//! This module implements the social property graph:
//! - `User` and `Interest` nodes with immutable attributes
//! - Directed, typed edges (`FRIENDS_WITH`, `INTERESTED_IN`)
//! - Symmetric friendship pairs and name-deduplicated interests
//! - In-memory adjacency indices for both edge directions

pub mod edge;
pub mod node;
pub mod property;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use node::Node;
pub use property::{PropertyMap, PropertyValue};
pub use store::{is_valid_id, GraphError, GraphResult, GraphStore, MAX_INITIAL_CAPACITY};
pub use types::{Direction, EdgeId, EdgeKind, NodeId, NodeKind};
