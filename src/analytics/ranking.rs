//! Score ranking with a stable tie-break

use crate::algo::{InterestMatch, SecondDegreeConnection};
use crate::graph::NodeId;

/// A traversal candidate that can be ranked
pub trait Scored {
    /// Candidate identity, used as the tie-break
    fn key(&self) -> &NodeId;

    /// Ranking score, higher first
    fn score(&self) -> usize;
}

impl Scored for SecondDegreeConnection {
    fn key(&self) -> &NodeId {
        &self.id
    }

    fn score(&self) -> usize {
        self.mutual_friend_count()
    }
}

impl Scored for InterestMatch {
    fn key(&self) -> &NodeId {
        &self.id
    }

    fn score(&self) -> usize {
        self.shared_interest_count()
    }
}

/// Order by score descending, then by key ascending, and keep the first `limit`
pub fn rank_top<T: Scored>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.sort_by(|a, b| b.score().cmp(&a.score()).then_with(|| a.key().cmp(b.key())));
    items.truncate(limit);
    items
}
