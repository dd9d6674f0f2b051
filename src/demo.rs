//! Reference social network
//!
//! Eight users across four cities, nine friendships and three interests per
//! user. Used by the CLI and by tests that want a realistic small graph.

use crate::graph::GraphResult;
use crate::network::SocialNetwork;

pub const USERS: [(&str, &str, u32, &str); 8] = [
    ("alice", "Alice Johnson", 28, "New York"),
    ("bob", "Bob Smith", 32, "San Francisco"),
    ("carol", "Carol White", 25, "New York"),
    ("david", "David Brown", 30, "Boston"),
    ("eve", "Eve Davis", 27, "San Francisco"),
    ("frank", "Frank Miller", 35, "Chicago"),
    ("grace", "Grace Wilson", 29, "New York"),
    ("henry", "Henry Moore", 31, "Boston"),
];

pub const FRIENDSHIPS: [(&str, &str); 9] = [
    ("alice", "bob"),
    ("alice", "carol"),
    ("alice", "grace"),
    ("bob", "david"),
    ("bob", "eve"),
    ("carol", "grace"),
    ("david", "henry"),
    ("eve", "frank"),
    ("frank", "henry"),
];

pub const INTERESTS: [(&str, [&str; 3]); 8] = [
    ("alice", ["photography", "hiking", "cooking"]),
    ("bob", ["hiking", "technology", "gaming"]),
    ("carol", ["cooking", "photography", "travel"]),
    ("david", ["technology", "gaming", "music"]),
    ("eve", ["travel", "photography", "yoga"]),
    ("frank", ["music", "cooking", "gaming"]),
    ("grace", ["yoga", "cooking", "travel"]),
    ("henry", ["music", "technology", "hiking"]),
];

/// Load the reference network into `network`
///
/// Fails with `DuplicateKey` if any of the demo users already exist.
pub fn populate(network: &SocialNetwork) -> GraphResult<()> {
    for (id, name, age, location) in USERS {
        network.create_user(id, name, age, location)?;
    }
    for (a, b) in FRIENDSHIPS {
        network.add_friendship(a, b, None)?;
    }
    for (user, interests) in INTERESTS {
        for interest in interests {
            network.add_interest(user, interest)?;
        }
    }
    Ok(())
}

/// A fresh network holding the reference data
pub fn demo_network() -> GraphResult<SocialNetwork> {
    let network = SocialNetwork::new();
    populate(&network)?;
    Ok(network)
}
