//! Pairing generated teams into matches

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use team_core::TeamSet;

/// A match between two teams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub home: String,
    pub away: String,
}

/// Shuffle the teams and pair them two by two.
///
/// Four teams give two matches. Two teams also get their single match,
/// which the club's four-team draw never covered. An odd number of teams
/// has no fair pairing, so no fixtures are drawn.
pub fn draw_fixtures<R: Rng + ?Sized>(teams: &TeamSet, rng: &mut R) -> Vec<Fixture> {
    if teams.len() % 2 != 0 {
        debug!(teams = teams.len(), "odd team count, no fixtures drawn");
        return Vec::new();
    }

    let mut labels: Vec<&str> = teams.labels().collect();
    labels.shuffle(rng);

    labels
        .chunks_exact(2)
        .map(|pair| Fixture {
            home: pair[0].to_string(),
            away: pair[1].to_string(),
        })
        .collect()
}

#[cfg(test)]
#[path = "fixtures_tests.rs"]
mod fixtures_tests;
