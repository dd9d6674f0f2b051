//! In-memory graph storage implementation
//!
//! The store is a plain single-owner structure: every mutating method takes
//! `&mut self` and validates all of its inputs before writing anything, so a
//! failed call leaves the graph untouched. Shared access across threads is
//! layered on top by [`crate::network::SocialNetwork`], which wraps the store
//! in a reader/writer lock.

use super::edge::Edge;
use super::node::Node;
use super::property::PropertyMap;
use super::types::{Direction, EdgeId, EdgeKind, NodeId, NodeKind};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} already exists")]
    DuplicateKey(NodeId),

    #[error("Node {0} not found")]
    NotFound(NodeId),

    #[error("Node {0} cannot be connected to itself")]
    SelfLoop(NodeId),

    #[error("Invalid edge endpoint: node {id} is not a {expected}")]
    InvalidEndpoint { id: NodeId, expected: NodeKind },

    #[error("Invalid identifier: {0:?}")]
    InvalidId(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Largest node count a store will pre-allocate for
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// Returns true when `id` is usable as a node id or interest name
pub fn is_valid_id(id: &str) -> bool {
    !id.trim().is_empty()
}

/// Per-node adjacency, one insertion-ordered map per edge kind
///
/// Keying by the neighbour id is what rules out parallel edges of the same
/// kind between the same ordered pair.
#[derive(Debug, Default)]
struct AdjacencyList {
    by_kind: FxHashMap<EdgeKind, IndexMap<NodeId, EdgeId>>,
}

impl AdjacencyList {
    fn get(&self, kind: EdgeKind) -> Option<&IndexMap<NodeId, EdgeId>> {
        self.by_kind.get(&kind)
    }

    fn insert(&mut self, kind: EdgeKind, neighbor: NodeId, edge: EdgeId) {
        self.by_kind.entry(kind).or_default().insert(neighbor, edge);
    }
}

/// In-memory graph storage
///
/// - nodes: NodeId -> Node (insertion ordered)
/// - edges: arena indexed by EdgeId
/// - outgoing / incoming: NodeId -> per-kind adjacency
/// - kind_index: NodeKind -> NodeIds, for kind scans
/// - interest_index: interest name -> NodeId, for deduplication
#[derive(Debug)]
pub struct GraphStore {
    nodes: IndexMap<NodeId, Node>,
    edges: Vec<Edge>,
    outgoing: FxHashMap<NodeId, AdjacencyList>,
    incoming: FxHashMap<NodeId, AdjacencyList>,
    kind_index: FxHashMap<NodeKind, IndexSet<NodeId>>,
    interest_index: FxHashMap<String, NodeId>,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a new empty graph store sized for `nodes` nodes
    ///
    /// The pre-allocation is capped at [`MAX_INITIAL_CAPACITY`]; the store
    /// still grows past it on demand.
    pub fn with_capacity(nodes: usize) -> Self {
        let nodes = nodes.min(MAX_INITIAL_CAPACITY);
        GraphStore {
            nodes: IndexMap::with_capacity(nodes),
            edges: Vec::with_capacity(nodes.saturating_mul(2)),
            outgoing: FxHashMap::default(),
            incoming: FxHashMap::default(),
            kind_index: FxHashMap::default(),
            interest_index: FxHashMap::default(),
        }
    }

    /// Create a node with a caller-supplied id
    pub fn create_node(
        &mut self,
        kind: NodeKind,
        id: impl Into<NodeId>,
        properties: PropertyMap,
    ) -> GraphResult<NodeId> {
        self.insert_node(Node::new_with_properties(id, kind, properties))
    }

    /// Insert a fully built node
    ///
    /// An `Interest` node must carry a non-blank `name`, be stored under
    /// `interest:<name>`, and be the only interest with that name.
    pub fn insert_node(&mut self, node: Node) -> GraphResult<NodeId> {
        if !is_valid_id(node.id.as_str()) {
            return Err(GraphError::InvalidId(node.id.as_str().to_string()));
        }
        if node.kind == NodeKind::Interest {
            let name = node.name();
            if !is_valid_id(name) || node.id != NodeId::for_interest(name) {
                return Err(GraphError::InvalidId(node.id.as_str().to_string()));
            }
            if let Some(existing) = self.interest_index.get(name) {
                return Err(GraphError::DuplicateKey(existing.clone()));
            }
        }
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::DuplicateKey(node.id));
        }

        let id = node.id.clone();
        if node.kind == NodeKind::Interest {
            self.interest_index.insert(node.name().to_string(), id.clone());
        }
        self.kind_index.entry(node.kind).or_default().insert(id.clone());
        debug!("Created {} node {}", node.kind, id);
        self.nodes.insert(id.clone(), node);
        Ok(id)
    }

    /// Return the interest node for `name`, creating it on first use
    ///
    /// Callers sharing the store across threads must hold the write lock for
    /// the whole call so the existence check and the insert cannot interleave.
    pub fn upsert_interest(&mut self, name: &str) -> GraphResult<NodeId> {
        if !is_valid_id(name) {
            return Err(GraphError::InvalidId(name.to_string()));
        }
        if let Some(id) = self.interest_index.get(name) {
            debug!("Reusing interest node {}", id);
            return Ok(id.clone());
        }
        self.insert_node(Node::interest(name))
    }

    /// Create an edge between two existing nodes
    ///
    /// `FriendsWith` inserts both directions with the same attributes.
    /// Returns `Ok(false)` without touching the store when the edge already
    /// exists.
    pub fn create_edge(
        &mut self,
        kind: EdgeKind,
        source: &str,
        target: &str,
        properties: PropertyMap,
    ) -> GraphResult<bool> {
        let (source_kind, target_kind) = kind.endpoint_kinds();
        let source = self.require_node(source, source_kind)?.id.clone();
        let target = self.require_node(target, target_kind)?.id.clone();

        if source == target {
            return Err(GraphError::SelfLoop(source));
        }
        if self.get_edge(source.as_str(), target.as_str(), kind).is_some() {
            debug!("{} edge {} -> {} already exists", kind, source, target);
            return Ok(false);
        }

        if kind == EdgeKind::FriendsWith {
            self.link(kind, target.clone(), source.clone(), properties.clone());
        }
        self.link(kind, source, target, properties);
        Ok(true)
    }

    fn require_node(&self, id: &str, expected: NodeKind) -> GraphResult<&Node> {
        if !is_valid_id(id) {
            return Err(GraphError::InvalidId(id.to_string()));
        }
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| GraphError::NotFound(NodeId::new(id)))?;
        if node.kind != expected {
            return Err(GraphError::InvalidEndpoint {
                id: node.id.clone(),
                expected,
            });
        }
        Ok(node)
    }

    fn link(&mut self, kind: EdgeKind, source: NodeId, target: NodeId, properties: PropertyMap) {
        let edge_id = EdgeId::new(self.edges.len() as u64);

        self.outgoing
            .entry(source.clone())
            .or_default()
            .insert(kind, target.clone(), edge_id);
        self.incoming
            .entry(target.clone())
            .or_default()
            .insert(kind, source.clone(), edge_id);

        debug!("Created {} edge {} -> {}", kind, source, target);
        self.edges.push(Edge::new(edge_id, source, target, kind, properties));
    }

    /// Get a node by ID
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a node by ID if it has the given kind
    pub fn get_node_of_kind(&self, id: &str, kind: NodeKind) -> Option<&Node> {
        self.get_node(id).filter(|node| node.is(kind))
    }

    /// Check if a node exists
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get the edge of `kind` going from `source` to `target`
    pub fn get_edge(&self, source: &str, target: &str, kind: EdgeKind) -> Option<&Edge> {
        let edge_id = self.outgoing.get(source)?.get(kind)?.get(target)?;
        self.edges.get(edge_id.as_u64() as usize)
    }

    /// Get the interest node for a name
    pub fn interest_by_name(&self, name: &str) -> Option<&Node> {
        self.interest_index.get(name).and_then(|id| self.get_node(id.as_str()))
    }

    /// Targets of outgoing `kind` edges, in insertion order
    pub fn out_neighbors<'a>(&'a self, id: &str, kind: EdgeKind) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.outgoing
            .get(id)
            .and_then(|adj| adj.get(kind))
            .into_iter()
            .flat_map(|targets| targets.keys())
    }

    /// Sources of incoming `kind` edges, in insertion order
    pub fn in_neighbors<'a>(&'a self, id: &str, kind: EdgeKind) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.incoming
            .get(id)
            .and_then(|adj| adj.get(kind))
            .into_iter()
            .flat_map(|sources| sources.keys())
    }

    /// Nodes one `kind` edge away in the given direction
    ///
    /// Unknown ids yield an empty list. `Both` keeps first-seen order and
    /// drops duplicates.
    pub fn neighbors(&self, id: &str, kind: EdgeKind, direction: Direction) -> Vec<&NodeId> {
        match direction {
            Direction::Outgoing => self.out_neighbors(id, kind).collect(),
            Direction::Incoming => self.in_neighbors(id, kind).collect(),
            Direction::Both => {
                let set: IndexSet<&NodeId> = self
                    .out_neighbors(id, kind)
                    .chain(self.in_neighbors(id, kind))
                    .collect();
                set.into_iter().collect()
            }
        }
    }

    /// Number of `kind` edges on one side of a node
    pub fn degree(&self, id: &str, kind: EdgeKind, direction: Direction) -> usize {
        let count = |adj: &FxHashMap<NodeId, AdjacencyList>| {
            adj.get(id).and_then(|a| a.get(kind)).map_or(0, |m| m.len())
        };
        match direction {
            Direction::Outgoing => count(&self.outgoing),
            Direction::Incoming => count(&self.incoming),
            Direction::Both => self.neighbors(id, kind, Direction::Both).len(),
        }
    }

    /// Get all nodes of a kind, in creation order
    pub fn nodes_of_kind(&self, kind: NodeKind) -> Vec<&Node> {
        self.kind_index
            .get(&kind)
            .map(|ids| ids.iter().filter_map(|id| self.get_node(id.as_str())).collect())
            .unwrap_or_default()
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of directed edges (a friendship counts twice)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Clear all data from the graph
    pub fn clear(&mut self) {
        let (nodes, edges) = (self.node_count(), self.edge_count());
        self.nodes.clear();
        self.edges.clear();
        self.outgoing.clear();
        self.incoming.clear();
        self.kind_index.clear();
        self.interest_index.clear();
        info!("Cleared graph ({} nodes, {} edges removed)", nodes, edges);
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
