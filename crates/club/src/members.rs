//! Member registry backed by a JSON file.
//!
//! The file is a flat object mapping member name to rating, e.g.
//! `{"Adam": 6, "Nadia": 8}`. Members are kept sorted by name.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

use team_core::{Rating, Roster};

use crate::error::{ClubError, Result};

/// Default location of the registry file
pub const DEFAULT_MEMBERS_PATH: &str = "members.json";

/// Inclusive range of ratings a member may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RatingBounds {
    pub min: Rating,
    pub max: Rating,
}

impl Default for RatingBounds {
    fn default() -> Self {
        Self { min: 1, max: 10 }
    }
}

impl RatingBounds {
    pub fn new(min: Rating, max: Rating) -> Result<Self> {
        if min > max {
            return Err(ClubError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, rating: Rating) -> bool {
        (self.min..=self.max).contains(&rating)
    }

    fn check(&self, name: &str, rating: Rating) -> Result<()> {
        if self.contains(rating) {
            Ok(())
        } else {
            Err(ClubError::RatingOutOfRange {
                name: name.to_string(),
                rating,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// All club members and their ratings
#[derive(Debug, Clone, Default)]
pub struct MemberRegistry {
    members: Roster,
    bounds: RatingBounds,
}

impl MemberRegistry {
    pub fn new(bounds: RatingBounds) -> Self {
        Self {
            members: Roster::new(),
            bounds,
        }
    }

    /// Wrap an existing set of members, checking every rating
    pub fn with_members(members: Roster, bounds: RatingBounds) -> Result<Self> {
        for (name, rating) in members.iter() {
            bounds.check(name, rating)?;
        }
        Ok(Self { members, bounds })
    }

    /// Load the registry from a JSON file; a missing file is an empty registry
    pub fn load(path: &Path, bounds: RatingBounds) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "no member file yet, starting empty");
            return Ok(Self::new(bounds));
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ClubError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let members: Roster = serde_json::from_str(&contents).map_err(|source| ClubError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        // Keep out-of-range entries so an edited file is not silently truncated
        for (name, rating) in members.iter().filter(|(_, r)| !bounds.contains(*r)) {
            warn!(member = name, rating, "rating outside configured bounds");
        }

        debug!(path = %path.display(), members = members.len(), "loaded members");
        Ok(Self { members, bounds })
    }

    /// Save the registry to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.members)?;
        std::fs::write(path, json).map_err(|source| ClubError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), members = self.members.len(), "saved members");
        Ok(())
    }

    pub fn bounds(&self) -> RatingBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<Rating> {
        self.members.rating(name.trim())
    }

    /// Members in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rating)> {
        self.members.iter()
    }

    /// Register a new member
    pub fn add(&mut self, name: &str, rating: Rating) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClubError::EmptyName);
        }
        if self.members.contains(name) {
            return Err(ClubError::DuplicateMember(name.to_string()));
        }
        self.bounds.check(name, rating)?;

        self.members.insert(name, rating);
        info!(member = name, rating, "added member");
        Ok(())
    }

    /// Change an existing member's rating, returning the previous one
    pub fn rate(&mut self, name: &str, rating: Rating) -> Result<Rating> {
        let name = name.trim();
        if !self.members.contains(name) {
            return Err(ClubError::UnknownMember(name.to_string()));
        }
        self.bounds.check(name, rating)?;

        let previous = self.members.insert(name, rating).unwrap_or(rating);
        info!(member = name, previous, rating, "updated rating");
        Ok(previous)
    }

    /// Remove a member, returning their rating
    pub fn remove(&mut self, name: &str) -> Result<Rating> {
        let name = name.trim();
        let rating = self
            .members
            .remove(name)
            .ok_or_else(|| ClubError::UnknownMember(name.to_string()))?;
        info!(member = name, "removed member");
        Ok(rating)
    }

    /// Roster of the members present today
    pub fn select<I, S>(&self, names: I) -> Result<Roster>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Roster::new();
        for name in names {
            let name = name.as_ref().trim();
            let rating = self
                .members
                .rating(name)
                .ok_or_else(|| ClubError::UnknownMember(name.to_string()))?;
            roster.insert(name, rating);
        }
        Ok(roster)
    }

    /// Every member as a roster
    pub fn all(&self) -> &Roster {
        &self.members
    }

    /// Print the registry to stdout
    pub fn print_members(&self) {
        println!("\n=== Members ({}) ===", self.members.len());
        println!("{:<30} {:>6}", "Name", "Rating");
        println!("{}", "-".repeat(37));
        for (name, rating) in self.members.iter() {
            println!("{:<30} {:>6}", name, rating);
        }
        println!();
    }
}

#[cfg(test)]
#[path = "members_tests.rs"]
mod members_tests;
