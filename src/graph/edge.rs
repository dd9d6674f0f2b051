//! Edge implementation for the social graph

use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, EdgeKind, NodeId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directed, typed edge
///
/// A logical friendship is two `Edge` values (A->B and B->A) that share the
/// same attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Source node (edge goes FROM this node)
    pub source: NodeId,

    /// Target node (edge goes TO this node)
    pub target: NodeId,

    /// Type of relationship
    pub kind: EdgeKind,

    /// Attributes associated with this edge
    pub properties: PropertyMap,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(
        id: EdgeId,
        source: NodeId,
        target: NodeId,
        kind: EdgeKind,
        properties: PropertyMap,
    ) -> Self {
        Edge {
            id,
            source,
            target,
            kind,
            properties,
        }
    }

    /// Get an attribute value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// `since` attribute of a friendship edge
    pub fn since(&self) -> Option<DateTime<Utc>> {
        self.get_property("since").and_then(PropertyValue::as_datetime)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let since = Utc::now();
        let mut props = PropertyMap::new();
        props.insert("since".to_string(), since.into());

        let edge = Edge::new(
            EdgeId::new(0),
            NodeId::new("alice"),
            NodeId::new("bob"),
            EdgeKind::FriendsWith,
            props,
        );

        assert_eq!(edge.kind, EdgeKind::FriendsWith);
        assert_eq!(edge.since(), Some(since));
        assert_eq!(edge.source.as_str(), "alice");
        assert_eq!(edge.target.as_str(), "bob");
    }

    #[test]
    fn test_interest_edge_has_no_since() {
        let edge = Edge::new(
            EdgeId::new(1),
            NodeId::new("alice"),
            NodeId::for_interest("hiking"),
            EdgeKind::InterestedIn,
            PropertyMap::new(),
        );
        assert_eq!(edge.since(), None);
    }
}
