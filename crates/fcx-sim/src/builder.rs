//! Fluent builder for constructing a [`Sim`].

use std::collections::HashMap;

use fcx_agent::AgentRoster;
use fcx_core::{Commodity, SimConfig};
use fcx_exchange::{GreedyMatcher, Matcher};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<M>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — duration, start date, …
/// - [`AgentRoster`] — the fully registered agent tree
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                          |
/// |-------------------|----------------------------------|
/// | `.priorities(m)`  | Empty map (all commodities = 1)  |
/// | `.matcher(m)`     | [`GreedyMatcher`]                |
pub struct SimBuilder<M: Matcher = GreedyMatcher> {
    config: SimConfig,
    roster: AgentRoster,
    priorities: HashMap<Commodity, f64>,
    matcher: M,
}

impl SimBuilder<GreedyMatcher> {
    /// Create a builder with all required inputs and default collaborators.
    pub fn new(config: SimConfig, roster: AgentRoster) -> Self {
        Self {
            config,
            roster,
            priorities: HashMap::new(),
            matcher: GreedyMatcher,
        }
    }
}

impl<M: Matcher> SimBuilder<M> {
    /// Supply commodity solution priorities (higher trades earlier).
    pub fn priorities(mut self, priorities: HashMap<Commodity, f64>) -> Self {
        self.priorities = priorities;
        self
    }

    /// Substitute the matcher implementation.
    pub fn matcher<N: Matcher>(self, matcher: N) -> SimBuilder<N> {
        SimBuilder {
            config: self.config,
            roster: self.roster,
            priorities: self.priorities,
            matcher,
        }
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<M>> {
        if !(1..=12).contains(&self.config.start_month) {
            return Err(SimError::Config(format!(
                "start month {} out of range 1-12",
                self.config.start_month
            )));
        }

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            roster: self.roster,
            priorities: self.priorities,
            matcher: self.matcher,
        })
    }
}
