//! Players taking part in a balancing run

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Skill rating of a single player (1-10 in the default club setup)
pub type Rating = u32;

/// Players present for one session, keyed by name.
///
/// Names are kept sorted, so a seeded run always sees the ratings in the
/// same order no matter how the roster was assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: BTreeMap<String, Rating>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            players: BTreeMap::new(),
        }
    }

    /// Add or replace a player, returning the previous rating if any
    pub fn insert(&mut self, name: impl Into<String>, rating: Rating) -> Option<Rating> {
        self.players.insert(name.into(), rating)
    }

    pub fn remove(&mut self, name: &str) -> Option<Rating> {
        self.players.remove(name)
    }

    pub fn rating(&self, name: &str) -> Option<Rating> {
        self.players.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rating)> {
        self.players.iter().map(|(name, &rating)| (name.as_str(), rating))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.keys().map(String::as_str)
    }

    /// Rating values in name order, duplicates preserved
    pub fn ratings(&self) -> Vec<Rating> {
        self.players.values().copied().collect()
    }

    /// Average rating of the whole roster
    pub fn mean_rating(&self) -> Option<f64> {
        if self.players.is_empty() {
            return None;
        }
        let total: u64 = self.players.values().map(|&r| u64::from(r)).sum();
        Some(total as f64 / self.players.len() as f64)
    }
}

impl<S: Into<String>> FromIterator<(S, Rating)> for Roster {
    fn from_iter<I: IntoIterator<Item = (S, Rating)>>(iter: I) -> Self {
        Self {
            players: iter
                .into_iter()
                .map(|(name, rating)| (name.into(), rating))
                .collect(),
        }
    }
}

impl<S: Into<String>, const N: usize> From<[(S, Rating); N]> for Roster {
    fn from(players: [(S, Rating); N]) -> Self {
        players.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;
