//! One club session: select the members present, balance, draw fixtures

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use team_core::{Balancer, Roster};

use crate::config::BalanceSettings;
use crate::error::Result;
use crate::fixtures::draw_fixtures;
use crate::members::MemberRegistry;
use crate::report::SessionReport;

/// Runs balancing sessions with fixed settings
#[derive(Debug, Clone)]
pub struct SessionRunner {
    balancer: Balancer,
    parallel: bool,
    seed: Option<u64>,
}

impl SessionRunner {
    pub fn new(settings: &BalanceSettings) -> Result<Self> {
        Ok(Self {
            balancer: Balancer::new(settings.balancer_config()?),
            parallel: settings.parallel,
            seed: settings.seed,
        })
    }

    /// Build teams for the named members of `registry`
    pub fn run_for<I, S>(&self, registry: &MemberRegistry, names: I) -> Result<SessionReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roster = registry.select(names)?;
        self.run(&roster)
    }

    /// Build teams for `roster`.
    ///
    /// Without a configured seed a fresh one is drawn; it is logged and
    /// stored in the report so the session can be replayed.
    pub fn run(&self, roster: &Roster) -> Result<SessionReport> {
        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        info!(players = roster.len(), seed, parallel = self.parallel, "generating teams");

        let mut rng = StdRng::seed_from_u64(seed);
        let teams = if self.parallel {
            // Trial generators are derived from the seed, the shared rng only draws fixtures
            self.balancer.balance_par(roster, seed)?
        } else {
            self.balancer.balance(roster, &mut rng)?
        };
        let fixtures = draw_fixtures(&teams, &mut rng);

        Ok(SessionReport::new(roster, &teams, fixtures, seed))
    }
}
