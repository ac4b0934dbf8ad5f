//! The `Sim` struct and its tick loop.

use std::collections::HashMap;

use fcx_agent::{AgentRoster, TickContext};
use fcx_core::{AgentId, Commodity, SimClock, SimConfig, Tick};
use fcx_exchange::{ExchangeContext, ExchangeTranslator, GreedyMatcher, Matcher, Trade};

use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<M>` holds all simulation state and drives the four-phase tick loop
/// described in the [crate docs](crate).  The matcher is a type parameter so
/// tests can substitute instrumented solvers; production runs use the
/// default [`GreedyMatcher`].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim<M: Matcher = GreedyMatcher> {
    /// Global configuration (duration, start date, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps to calendar time.
    pub clock: SimClock,

    /// All agents and their traders.
    pub roster: AgentRoster,

    /// Commodity solution priorities from the scenario; commodities absent
    /// here default to priority 1.
    pub priorities: HashMap<Commodity, f64>,

    pub(crate) matcher: M,
}

impl<M: Matcher> Sim<M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            observer.on_tick_start(now);
            let traded = self.process_tick(now, observer)?;
            observer.on_tick_end(now, traded);
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let traded = self.process_tick(now, observer)?;
            observer.on_tick_end(now, traded);
            self.clock.advance();
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(
        &mut self,
        now: Tick,
        observer: &mut O,
    ) -> SimResult<usize> {
        let ctx = TickContext { tick: now };
        let active = self.roster.active_at(now);
        let facilities = self.roster.active_facilities(now);

        // ── Phase 2: tick hooks ───────────────────────────────────────────
        for &agent in &active {
            self.roster.trader_mut(agent)?.tick(agent, &ctx);
        }

        // ── Phase 3: dynamic resource exchange ────────────────────────────
        let trades = self.resolve_exchange(&facilities, &ctx)?;
        for trade in &trades {
            let resource = self.roster.trader_mut(trade.bidder)?.offer(trade);
            self.roster.trader_mut(trade.requester)?.accept(trade, resource);
        }
        observer.on_trades(now, &trades);

        // ── Phase 4: tock hooks ───────────────────────────────────────────
        for &agent in &active {
            self.roster.trader_mut(agent)?.tock(agent, &ctx);
        }

        Ok(trades.len())
    }

    /// One full gather → translate → match → back-translate pass.
    ///
    /// The exchange context, graph, and translator all live and die inside
    /// this call — nothing is shared across ticks.
    fn resolve_exchange(
        &mut self,
        facilities: &[AgentId],
        ctx: &TickContext,
    ) -> SimResult<Vec<Trade>> {
        let mut requests = ExchangeContext::new();
        for &agent in facilities {
            for portfolio in self.roster.trader_mut(agent)?.request_portfolios(agent, ctx)? {
                requests.add_portfolio(portfolio);
            }
        }

        let mut bid_portfolios = Vec::new();
        for &agent in facilities {
            bid_portfolios.extend(
                self.roster
                    .trader_mut(agent)?
                    .bid_portfolios(agent, &requests, ctx)?,
            );
        }

        let mut translator = ExchangeTranslator::new(&self.priorities);
        let mut graph = translator.translate(&requests, &bid_portfolios)?;
        self.matcher.solve(&mut graph)?;
        Ok(translator.back_translate(&requests, &graph))
    }
}
