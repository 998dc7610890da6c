//! Session report: teams, their averages and the fixtures

use serde::{Deserialize, Serialize};
use std::path::Path;

use team_core::{average, Rating, Roster, TeamSet};

use crate::error::{ClubError, Result};
use crate::fixtures::Fixture;

/// A team with each member's rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub label: String,
    pub members: Vec<(String, Rating)>,
    pub average: f64,
}

/// Everything produced for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Seed that reproduces this session
    pub seed: u64,
    /// Balance score of the chosen split
    pub score: f64,
    pub teams: Vec<TeamSummary>,
    pub fixtures: Vec<Fixture>,
}

impl SessionReport {
    pub fn new(roster: &Roster, teams: &TeamSet, fixtures: Vec<Fixture>, seed: u64) -> Self {
        let summaries = teams
            .iter()
            .map(|team| {
                let members: Vec<(String, Rating)> = team
                    .members
                    .iter()
                    .map(|name| {
                        let rating = roster
                            .rating(name)
                            .expect("team member comes from the roster");
                        (name.clone(), rating)
                    })
                    .collect();
                let ratings: Vec<Rating> = members.iter().map(|(_, r)| *r).collect();
                TeamSummary {
                    label: team.label.clone(),
                    average: average(&ratings),
                    members,
                }
            })
            .collect();

        Self {
            seed,
            score: teams.score,
            teams: summaries,
            fixtures,
        }
    }

    /// Save report to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ClubError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load report from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ClubError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ClubError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== Teams ===\n\n");

        for team in &self.teams {
            report.push_str(&format!(
                "{} ({} players, average {:.2})\n",
                team.label,
                team.members.len(),
                team.average
            ));
            for (name, rating) in &team.members {
                report.push_str(&format!("  - {:<26} {:>3}\n", name, rating));
            }
            report.push('\n');
        }

        report.push_str(&format!("Balance score: {:.4}\n", self.score));
        report.push_str(&format!("Seed: {}\n", self.seed));

        if !self.fixtures.is_empty() {
            report.push_str("\n=== Matches ===\n");
            for (i, fixture) in self.fixtures.iter().enumerate() {
                report.push_str(&format!(
                    "Match {}: {} vs {}\n",
                    i + 1,
                    fixture.home,
                    fixture.away
                ));
            }
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
