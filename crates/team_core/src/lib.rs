//! Balanced team generation for club sessions
//!
//! This crate provides the balancing core:
//! - Validating the roster of players present today
//! - Choosing how many teams to build from the roster size
//! - Searching random deals for the most even split of ratings
//! - Binding the winning deal back to player names
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use team_core::{Balancer, Roster};
//!
//! let roster: Roster = (1..=12).map(|i| (format!("player{}", i), i % 10 + 1)).collect();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let teams = Balancer::default().balance(&roster, &mut rng).unwrap();
//! assert_eq!(teams.sizes(), vec![6, 6]);
//! ```

mod balancer;
mod error;
mod resolve;
mod roster;
mod table;
mod team_set;
mod trial;

pub use balancer::*;
pub use error::*;
pub use resolve::*;
pub use roster::*;
pub use table::*;
pub use team_set::*;
pub use trial::*;
