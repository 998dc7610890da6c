//! Final teams returned to the caller

use serde::{Deserialize, Serialize};

/// Label for the team at `index` in enumeration order ("Team A", "Team B", ...)
pub fn team_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => format!("Team {}", char::from(b'A' + i)),
        _ => format!("Team {}", index + 1),
    }
}

/// One team and its players, in the order they were dealt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub label: String,
    pub members: Vec<String>,
}

/// Teams produced by a balancing run.
///
/// Teams keep their enumeration order; when the roster does not split
/// evenly the first teams are the larger ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSet {
    pub teams: Vec<Team>,
    /// Balance score of the winning trial
    pub score: f64,
}

impl TeamSet {
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    pub fn get(&self, label: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.teams.iter().map(|t| t.label.as_str())
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.teams.iter().map(|t| t.members.len()).collect()
    }

    /// Total number of players across all teams
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(|t| t.members.len()).sum()
    }

    /// Label of the team a player was assigned to
    pub fn team_of(&self, name: &str) -> Option<&str> {
        self.teams
            .iter()
            .find(|t| t.members.iter().any(|m| m == name))
            .map(|t| t.label.as_str())
    }
}
