//! Core type definitions for the social graph

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a node
///
/// Identities are caller-supplied strings and are unique across every node
/// kind: a user and an interest can never share an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id under which the interest with the given name is stored
    pub fn for_interest(name: &str) -> Self {
        NodeId(format!("interest:{}", name))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a directed edge (index into the edge arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

/// Node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum NodeKind {
    User,
    Interest,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::User => "User",
            NodeKind::Interest => "Interest",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Relationship type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum EdgeKind {
    /// User to user, always stored as a symmetric pair
    FriendsWith,
    /// User to interest
    InterestedIn,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::FriendsWith => "FRIENDS_WITH",
            EdgeKind::InterestedIn => "INTERESTED_IN",
        }
    }

    /// Required (source, target) node kinds
    pub fn endpoint_kinds(&self) -> (NodeKind, NodeKind) {
        match self {
            EdgeKind::FriendsWith => (NodeKind::User, NodeKind::User),
            EdgeKind::InterestedIn => (NodeKind::User, NodeKind::Interest),
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which side of a node's adjacency to follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Outgoing,
    Incoming,
    Both,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_node_id() {
        let id = NodeId::new("alice");
        assert_eq!(id.as_str(), "alice");
        assert_eq!(format!("{}", id), "alice");

        let id2: NodeId = "bob".into();
        assert_eq!(id2.as_str(), "bob");
    }

    #[test]
    fn test_node_id_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(NodeId::new("alice"), 1);
        assert_eq!(map.get("alice"), Some(&1));
    }

    #[test]
    fn test_interest_id() {
        assert_eq!(NodeId::for_interest("hiking").as_str(), "interest:hiking");
    }

    #[test]
    fn test_edge_kind() {
        assert_eq!(EdgeKind::FriendsWith.to_string(), "FRIENDS_WITH");
        assert_eq!(
            EdgeKind::InterestedIn.endpoint_kinds(),
            (NodeKind::User, NodeKind::Interest)
        );
    }

    #[test]
    fn test_id_ordering() {
        assert!(NodeId::new("a") < NodeId::new("b"));
        assert!(EdgeId::new(1) < EdgeId::new(2));
    }
}
