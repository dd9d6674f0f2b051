//! Node implementation for the social graph

use super::property::{PropertyMap, PropertyValue};
use super::types::{NodeId, NodeKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A node in the social graph
///
/// Nodes have:
/// - A unique ID
/// - A kind (`User` or `Interest`)
/// - Attributes (key-value pairs), immutable once the node is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Kind of entity this node represents
    pub kind: NodeKind,

    /// Attributes associated with this node
    pub properties: PropertyMap,
}

impl Node {
    /// Create a new node with attributes
    pub fn new_with_properties(id: impl Into<NodeId>, kind: NodeKind, properties: PropertyMap) -> Self {
        Node {
            id: id.into(),
            kind,
            properties,
        }
    }

    /// Build a `User` node, stamping `created_at` with the current instant
    pub fn user(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        age: u32,
        location: impl Into<String>,
    ) -> Self {
        let mut properties = PropertyMap::with_capacity(4);
        properties.insert("name".to_string(), PropertyValue::String(name.into()));
        properties.insert("age".to_string(), age.into());
        properties.insert("location".to_string(), PropertyValue::String(location.into()));
        properties.insert("created_at".to_string(), Utc::now().into());
        Node::new_with_properties(id, NodeKind::User, properties)
    }

    /// Build an `Interest` node keyed by its name
    pub fn interest(name: &str) -> Self {
        let mut properties = PropertyMap::with_capacity(1);
        properties.insert("name".to_string(), name.into());
        Node::new_with_properties(NodeId::for_interest(name), NodeKind::Interest, properties)
    }

    /// Check the node kind
    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    /// Get an attribute value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// `name` attribute, or the empty string when absent
    pub fn name(&self) -> &str {
        self.get_property("name")
            .and_then(PropertyValue::as_string)
            .unwrap_or_default()
    }

    /// `location` attribute, if any
    pub fn location(&self) -> Option<&str> {
        self.get_property("location").and_then(PropertyValue::as_string)
    }

    /// `created_at` attribute, if any
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.get_property("created_at").and_then(PropertyValue::as_datetime)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
