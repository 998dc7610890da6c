//! Error types for balancing runs and group tables

use thiserror::Error;

/// Errors returned by a balancing run.
///
/// Raised before any trial is generated; once the roster size is accepted
/// the run always produces a full [`crate::TeamSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    #[error("roster has {size} players, expected between {min} and {max}")]
    InvalidRosterSize { size: usize, min: usize, max: usize },
}

/// Errors raised while building a custom [`crate::GroupTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("group table has no ranges")]
    Empty,

    #[error("range {min}..={max} is inverted")]
    InvertedRange { min: usize, max: usize },

    #[error("range {min}..={max} asks for {groups} groups, at least 2 are needed")]
    TooFewGroups { min: usize, max: usize, groups: usize },

    #[error("range {min}..={max} cannot fill {groups} groups")]
    NotEnoughPlayers { min: usize, max: usize, groups: usize },

    #[error("ranges {first:?} and {second:?} overlap")]
    Overlap {
        first: (usize, usize),
        second: (usize, usize),
    },
}
