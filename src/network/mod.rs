//! Query facade
//!
//! [`SocialNetwork`] owns a [`GraphStore`] behind a reader/writer lock and
//! exposes the social analytics operations. Every mutation runs entirely
//! under the write lock, so readers never see half of a friendship pair or a
//! partially cleared graph. Queries share the read lock and see a consistent
//! snapshot for their whole duration.
//!
//! Queries are exploratory: a blank or unknown user id yields an empty result
//! (or `None`) rather than an error.

pub mod models;

pub use models::{Community, FriendOfFriend, InterestRecommendation, NetworkStatistics};

use crate::algo::{second_degree, shared_interest_candidates, shortest_friend_path};
use crate::analytics::{interest_communities, rank_top, user_statistics};
use crate::config::EngineConfig;
use crate::graph::{
    is_valid_id, Direction, EdgeKind, GraphError, GraphResult, GraphStore, Node, NodeId,
    NodeKind, PropertyMap, PropertyValue,
};
use chrono::{DateTime, Utc};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

/// Embeddable social graph with concurrent readers and serialized writers
#[derive(Debug)]
pub struct SocialNetwork {
    store: RwLock<GraphStore>,
    config: EngineConfig,
}

impl SocialNetwork {
    /// Create an empty network with default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an empty network with the given configuration
    pub fn with_config(config: EngineConfig) -> Self {
        info!(
            "Social network initialized (result_limit={}, default_min_connections={})",
            config.result_limit, config.default_min_connections
        );
        Self {
            store: RwLock::new(GraphStore::with_capacity(config.initial_capacity)),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Acquire a read lock on the store
    ///
    /// Every mutation validates before it writes, so a writer that panicked
    /// cannot have left the store half-updated and a poisoned lock is safe to
    /// reuse.
    pub fn snapshot(&self) -> RwLockReadGuard<'_, GraphStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GraphStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn accepts(operation: &str, ids: &[&str]) -> bool {
        match ids.iter().find(|id| !is_valid_id(id)) {
            Some(bad) => {
                warn!("{}: rejected malformed user id {:?}", operation, bad);
                false
            }
            None => true,
        }
    }

    // ============================================================
    // Mutations
    // ============================================================

    /// Create a user; fails with `DuplicateKey` if the id is taken
    pub fn create_user(&self, id: &str, name: &str, age: u32, location: &str) -> GraphResult<()> {
        self.write().insert_node(Node::user(id, name, age, location))?;
        Ok(())
    }

    /// Create a symmetric friendship; `since` defaults to now
    ///
    /// Adding an existing friendship again is a no-op that keeps the
    /// original `since`.
    pub fn add_friendship(
        &self,
        user1: &str,
        user2: &str,
        since: Option<DateTime<Utc>>,
    ) -> GraphResult<()> {
        let mut properties = PropertyMap::with_capacity(1);
        properties.insert(
            "since".to_string(),
            PropertyValue::DateTime(since.unwrap_or_else(Utc::now)),
        );
        self.write()
            .create_edge(EdgeKind::FriendsWith, user1, user2, properties)?;
        Ok(())
    }

    /// Attach an interest to a user, creating the interest on first use
    pub fn add_interest(&self, user_id: &str, interest: &str) -> GraphResult<()> {
        let mut store = self.write();

        // Check the user first so a failed call never leaves an orphan interest
        match store.get_node(user_id) {
            None if !is_valid_id(user_id) => return Err(GraphError::InvalidId(user_id.to_string())),
            None => return Err(GraphError::NotFound(NodeId::new(user_id))),
            Some(node) if node.kind != NodeKind::User => {
                return Err(GraphError::InvalidEndpoint {
                    id: node.id.clone(),
                    expected: NodeKind::User,
                })
            }
            Some(_) => {}
        }

        let interest_id = store.upsert_interest(interest)?;
        store.create_edge(
            EdgeKind::InterestedIn,
            user_id,
            interest_id.as_str(),
            PropertyMap::new(),
        )?;
        Ok(())
    }

    /// Remove every node and edge
    pub fn clear_all(&self) {
        self.write().clear();
    }

    // ============================================================
    // Queries
    // ============================================================

    /// Second-degree connections ranked by mutual friend count
    pub fn find_friends_of_friends(&self, user_id: &str) -> Vec<FriendOfFriend> {
        if !Self::accepts("find_friends_of_friends", &[user_id]) {
            return Vec::new();
        }
        let store = self.snapshot();
        let ranked = rank_top(second_degree(&store, user_id), self.config.result_limit);

        ranked
            .into_iter()
            .filter_map(|candidate| {
                let node = store.get_node(candidate.id.as_str())?;
                Some(FriendOfFriend {
                    user_id: candidate.id.to_string(),
                    name: node.name().to_string(),
                    location: node.location().map(str::to_string),
                    mutual_friends: candidate.mutual_friend_count(),
                })
            })
            .collect()
    }

    /// Names along a shortest friendship chain, or `None` if there is none
    pub fn find_shortest_connection_path(&self, user1: &str, user2: &str) -> Option<Vec<String>> {
        if !Self::accepts("find_shortest_connection_path", &[user1, user2]) {
            return None;
        }
        let store = self.snapshot();
        let result = shortest_friend_path(&store, user1, user2)?;

        Some(
            result
                .path
                .iter()
                .filter_map(|id| store.get_node(id.as_str()))
                .map(|node| node.name().to_string())
                .collect(),
        )
    }

    /// Non-friends ranked by number of shared interests
    pub fn recommend_friends_by_interests(&self, user_id: &str) -> Vec<InterestRecommendation> {
        if !Self::accepts("recommend_friends_by_interests", &[user_id]) {
            return Vec::new();
        }
        let store = self.snapshot();
        let ranked = rank_top(
            shared_interest_candidates(&store, user_id),
            self.config.result_limit,
        );

        ranked
            .into_iter()
            .filter_map(|candidate| {
                let node = store.get_node(candidate.id.as_str())?;
                Some(InterestRecommendation {
                    user_id: candidate.id.to_string(),
                    name: node.name().to_string(),
                    location: node.location().map(str::to_string),
                    shared_interests: candidate.shared_interest_count(),
                    common_interests: candidate.shared_interests,
                })
            })
            .collect()
    }

    /// Interests held by at least `min_connections` users, largest first
    pub fn find_communities(&self, min_connections: usize) -> Vec<Community> {
        let store = self.snapshot();

        interest_communities(&store, min_connections)
            .into_iter()
            .map(|community| {
                let mut members: Vec<String> = community
                    .members
                    .iter()
                    .filter_map(|id| store.get_node(id.as_str()))
                    .map(|node| node.name().to_string())
                    .collect();
                members.sort();
                Community {
                    size: community.size(),
                    interest: community.interest,
                    members,
                }
            })
            .collect()
    }

    /// [`find_communities`](Self::find_communities) with the configured default threshold
    pub fn find_communities_default(&self) -> Vec<Community> {
        self.find_communities(self.config.default_min_connections)
    }

    /// Friend, interest and potential-connection counts for a user
    pub fn get_network_statistics(&self, user_id: &str) -> Option<NetworkStatistics> {
        if !Self::accepts("get_network_statistics", &[user_id]) {
            return None;
        }
        let store = self.snapshot();
        let stats = user_statistics(&store, user_id)?;
        let name = store.get_node(user_id).map(|node| node.name().to_string())?;

        Some(NetworkStatistics {
            name,
            friend_count: stats.friend_count,
            interest_count: stats.interest_count,
            potential_connections: stats.potential_connections,
        })
    }

    // ============================================================
    // Direct reads
    // ============================================================

    /// Node ids one `kind` edge away; empty for unknown ids
    pub fn neighbors(&self, id: &str, kind: EdgeKind, direction: Direction) -> Vec<NodeId> {
        self.snapshot()
            .neighbors(id, kind, direction)
            .into_iter()
            .cloned()
            .collect()
    }

    /// `since` of the friendship from `user1` to `user2`
    pub fn friendship_since(&self, user1: &str, user2: &str) -> Option<DateTime<Utc>> {
        self.snapshot()
            .get_edge(user1, user2, EdgeKind::FriendsWith)
            .and_then(|edge| edge.since())
    }

    pub fn node_count(&self) -> usize {
        self.snapshot().node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.snapshot().edge_count()
    }
}

impl Default for SocialNetwork {
    fn default() -> Self {
        Self::new()
    }
}
