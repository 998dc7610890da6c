//! `club.toml` configuration.
//!
//! Every key is optional:
//!
//! ```toml
//! members_path = "members.json"
//!
//! [ratings]
//! min = 1
//! max = 10
//!
//! [balance]
//! trials = 10000
//! seed = 42
//! parallel = false
//!
//! [[balance.groups]]
//! min = 10
//! max = 12
//! groups = 2
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use team_core::{BalancerConfig, GroupRange, GroupTable, DEFAULT_TRIALS};

use crate::error::{ClubError, Result};
use crate::members::{RatingBounds, DEFAULT_MEMBERS_PATH};

/// Default location of the config file
pub const DEFAULT_CONFIG_PATH: &str = "club.toml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClubConfig {
    /// JSON file holding the member registry
    pub members_path: PathBuf,
    pub ratings: RatingBounds,
    pub balance: BalanceSettings,
}

impl Default for ClubConfig {
    fn default() -> Self {
        Self {
            members_path: PathBuf::from(DEFAULT_MEMBERS_PATH),
            ratings: RatingBounds::default(),
            balance: BalanceSettings::default(),
        }
    }
}

/// Settings for balancing runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BalanceSettings {
    /// Number of random trials per run
    pub trials: usize,
    /// Fixed seed for reproducible sessions (random when unset)
    pub seed: Option<u64>,
    /// Spread trials over all cores
    pub parallel: bool,
    /// Custom roster size to team count table (club default when unset)
    pub groups: Option<Vec<GroupRange>>,
}

impl Default for BalanceSettings {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            parallel: false,
            groups: None,
        }
    }
}

impl BalanceSettings {
    /// Build the balancer configuration, validating any custom table
    pub fn balancer_config(&self) -> Result<BalancerConfig> {
        let table = match &self.groups {
            Some(ranges) => GroupTable::new(ranges.clone())?,
            None => GroupTable::default(),
        };
        Ok(BalancerConfig {
            trials: self.trials,
            table,
        })
    }
}

impl ClubConfig {
    /// Parse a config from TOML text
    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load config from a file; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ClubError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents).map_err(|source| ClubError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        RatingBounds::new(self.ratings.min, self.ratings.max)?;
        self.balance.balancer_config()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
