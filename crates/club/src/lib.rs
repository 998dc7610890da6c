//! Club session tooling around the team balancer
//!
//! This crate provides:
//! - A member registry stored as a JSON file
//! - `club.toml` configuration
//! - Balancing sessions for the members present today
//! - Match fixtures and session reports
//!
//! # Usage
//!
//! ```bash
//! # Register members
//! cargo run -p club -- members add "Nadia" 8
//!
//! # Build teams for today's players
//! cargo run -p club -- teams Adam Bilal Chloe Dina Elias Farah Gael Hugo Ines Jade
//! ```

mod config;
mod error;
mod fixtures;
mod members;
mod report;
mod session;

pub use config::*;
pub use error::*;
pub use fixtures::*;
pub use members::*;
pub use report::*;
pub use session::*;
