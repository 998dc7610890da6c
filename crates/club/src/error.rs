//! Error types for the club registry and sessions

use std::path::PathBuf;

use team_core::{BalanceError, Rating, TableError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClubError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("member name is empty")]
    EmptyName,

    #[error("{0} is already a member")]
    DuplicateMember(String),

    #[error("unknown member: {0}")]
    UnknownMember(String),

    #[error("rating {rating} for {name} is outside {min}..={max}")]
    RatingOutOfRange {
        name: String,
        rating: Rating,
        min: Rating,
        max: Rating,
    },

    #[error("invalid rating bounds {min}..={max}")]
    InvalidBounds { min: Rating, max: Rating },

    #[error(transparent)]
    Balance(#[from] BalanceError),

    #[error(transparent)]
    Table(#[from] TableError),
}

pub type Result<T> = std::result::Result<T, ClubError>;
