//! Monte Carlo search for balanced teams.
//!
//! Exact partitioning is combinatorially expensive for up to 20 players, so
//! the balancer samples a fixed number of random deals, keeps the one with
//! the smallest spread of team averages and then binds names to it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::BalanceError;
use crate::resolve::bind_players;
use crate::roster::{Rating, Roster};
use crate::table::GroupTable;
use crate::team_set::TeamSet;
use crate::trial::{select_best, Trial};

/// Default number of random deals per run
pub const DEFAULT_TRIALS: usize = 10_000;

/// Configuration for a balancing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancerConfig {
    /// Number of trials to generate (at least one is always run)
    pub trials: usize,
    /// Roster size to team count mapping
    pub table: GroupTable,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            table: GroupTable::default(),
        }
    }
}

/// Splits a roster into teams with averages as close as possible
#[derive(Debug, Clone, Default)]
pub struct Balancer {
    config: BalancerConfig,
}

impl Balancer {
    pub fn new(config: BalancerConfig) -> Self {
        Self { config }
    }

    /// Balancer with the default table and `trials` trials
    pub fn with_trials(trials: usize) -> Self {
        Self::new(BalancerConfig {
            trials,
            ..Default::default()
        })
    }

    pub fn config(&self) -> &BalancerConfig {
        &self.config
    }

    fn trial_count(&self) -> usize {
        self.config.trials.max(1)
    }

    /// Number of teams for this roster, or why it cannot be balanced
    pub fn group_count(&self, roster: &Roster) -> Result<usize, BalanceError> {
        self.config.table.group_count(roster.len())
    }

    /// The trial sequence a run would generate from `rng`
    pub fn trials<'a, R: Rng + ?Sized>(
        &self,
        ratings: &'a [Rating],
        groups: usize,
        rng: &'a mut R,
    ) -> impl Iterator<Item = Trial> + 'a {
        (0..self.trial_count()).map(move |seq| Trial::run(seq, ratings, groups, &mut *rng))
    }

    /// Balance `roster`, drawing all randomness from `rng`.
    ///
    /// The same roster and the same generator state always give the same
    /// teams.
    pub fn balance<R: Rng + ?Sized>(&self, roster: &Roster, rng: &mut R) -> Result<TeamSet, BalanceError> {
        let groups = self.group_count(roster)?;
        let ratings = roster.ratings();
        debug!(
            players = roster.len(),
            groups,
            trials = self.trial_count(),
            "balancing roster"
        );

        let best = select_best(self.trials(&ratings, groups, rng))
            .expect("at least one trial is generated");

        Ok(self.finish(roster, best, rng))
    }

    /// Balance `roster` with trials spread over the rayon thread pool.
    ///
    /// Each trial draws from its own generator seeded from `seed` and its
    /// sequence number, so the result depends only on `seed` and the roster,
    /// never on thread scheduling.
    pub fn balance_par(&self, roster: &Roster, seed: u64) -> Result<TeamSet, BalanceError> {
        let groups = self.group_count(roster)?;
        let ratings = roster.ratings();
        debug!(
            players = roster.len(),
            groups,
            trials = self.trial_count(),
            threads = rayon::current_num_threads(),
            "balancing roster in parallel"
        );

        let best = (0..self.trial_count())
            .into_par_iter()
            .map(|seq| Trial::run(seq, &ratings, groups, &mut trial_rng(seed, seq)))
            .min_by(|a, b| a.rank(b))
            .expect("at least one trial is generated");

        Ok(self.finish(roster, best, &mut StdRng::seed_from_u64(seed)))
    }

    fn finish<R: Rng + ?Sized>(&self, roster: &Roster, best: Trial, rng: &mut R) -> TeamSet {
        info!(
            trial = best.seq,
            score = best.score,
            sizes = ?best.candidate.sizes(),
            "selected best trial"
        );

        TeamSet {
            teams: bind_players(roster, &best.candidate, rng),
            score: best.score,
        }
    }
}

/// Per-trial generator for parallel runs
fn trial_rng(seed: u64, seq: usize) -> StdRng {
    const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
    StdRng::seed_from_u64(seed.wrapping_add((seq as u64 + 1).wrapping_mul(GOLDEN_GAMMA)))
}

/// Balance `roster` with the default configuration
pub fn balance<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> Result<TeamSet, BalanceError> {
    Balancer::default().balance(roster, rng)
}

#[cfg(test)]
#[path = "balancer_tests.rs"]
mod balancer_tests;
