//! Integration tests for fcx-sim.

use std::sync::{Arc, Mutex};

use fcx_agent::{
    AgentKind, AgentMeta, AgentRoster, NullTrader, Sink, Source, TickContext, Trader,
};
use fcx_core::{AgentId, RequestId, SimConfig, Tick};
use fcx_exchange::{BidPortfolio, ExchangeContext, ExchangeResult, Trade};
use fcx_resource::{Basis, Composition, Nuclide, Resource};

use crate::{NoopObserver, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(duration: u64) -> SimConfig {
    SimConfig {
        duration,
        ..SimConfig::default()
    }
}

fn natural_u() -> Composition {
    Composition::new(
        Basis::Mass,
        vec![(Nuclide(922350000), 0.007), (Nuclide(922380000), 0.993)],
    )
    .unwrap()
}

fn meta(name: &str, kind: AgentKind, parent: Option<AgentId>) -> AgentMeta {
    AgentMeta {
        name: name.to_owned(),
        prototype: name.to_owned(),
        kind,
        parent,
        enter_tick: Tick::ZERO,
        lifetime: None,
    }
}

/// Region → institution scaffolding shared by most tests.
fn scaffold(roster: &mut AgentRoster) -> AgentId {
    let region = roster
        .register(meta("region", AgentKind::Region, None), Box::new(NullTrader))
        .unwrap();
    roster
        .register(
            meta("inst", AgentKind::Institution, Some(region)),
            Box::new(NullTrader),
        )
        .unwrap()
}

/// Observer that records every tick's trades.
#[derive(Default)]
struct Ledger {
    trades: Vec<(Tick, Vec<Trade>)>,
}

impl SimObserver for Ledger {
    fn on_trades(&mut self, tick: Tick, trades: &[Trade]) {
        self.trades.push((tick, trades.to_vec()));
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(test_config(10), AgentRoster::new())
            .build()
            .unwrap();
        assert_eq!(sim.config.duration, 10);
        assert_eq!(sim.clock.current_tick, Tick(0));
    }

    #[test]
    fn bad_start_month_errors() {
        let config = SimConfig {
            start_month: 13,
            ..test_config(10)
        };
        let result = SimBuilder::new(config, AgentRoster::new()).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}

// ── Basic run ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn empty_roster_runs_to_end_tick() {
        let mut sim = SimBuilder::new(test_config(10), AgentRoster::new())
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(10));
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut sim = SimBuilder::new(test_config(100), AgentRoster::new())
            .build()
            .unwrap();
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(5));
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(8));
    }

    /// Observer that counts hook invocations.
    #[derive(Default)]
    struct TickCounter {
        starts: usize,
        ends: usize,
        trade_batches: usize,
        sim_ends: usize,
    }
    impl SimObserver for TickCounter {
        fn on_tick_start(&mut self, _t: Tick) {
            self.starts += 1;
        }
        fn on_trades(&mut self, _t: Tick, _trades: &[Trade]) {
            self.trade_batches += 1;
        }
        fn on_tick_end(&mut self, _t: Tick, _n: usize) {
            self.ends += 1;
        }
        fn on_sim_end(&mut self, _t: Tick) {
            self.sim_ends += 1;
        }
    }

    #[test]
    fn observer_called_once_per_tick() {
        let mut sim = SimBuilder::new(test_config(7), AgentRoster::new())
            .build()
            .unwrap();
        let mut obs = TickCounter::default();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.starts, 7);
        assert_eq!(obs.ends, 7);
        assert_eq!(obs.trade_batches, 7, "on_trades fires even with no trades");
        assert_eq!(obs.sim_ends, 1);
    }
}

// ── Source → sink exchange ────────────────────────────────────────────────────

#[cfg(test)]
mod exchange_tests {
    use super::*;

    #[test]
    fn supply_limited_market_clears_every_tick() {
        let mut roster = AgentRoster::new();
        let inst = scaffold(&mut roster);
        let source = roster
            .register(
                meta("mine", AgentKind::Facility, Some(inst)),
                Box::new(Source::new("fuel", natural_u(), 3.0)),
            )
            .unwrap();
        let sink = roster
            .register(
                meta("reactor", AgentKind::Facility, Some(inst)),
                Box::new(Sink::new("fuel", None, 5.0)),
            )
            .unwrap();

        let mut sim = SimBuilder::new(test_config(4), roster).build().unwrap();
        let mut ledger = Ledger::default();
        sim.run(&mut ledger).unwrap();

        assert_eq!(ledger.trades.len(), 4);
        for (tick, trades) in &ledger.trades {
            assert_eq!(trades.len(), 1, "one trade expected at {tick}");
            let t = &trades[0];
            assert_eq!(t.requester, sink);
            assert_eq!(t.bidder, source);
            assert_eq!(t.commodity.as_str(), "fuel");
            assert_eq!(t.qty, 3.0, "throughput-limited quantity at {tick}");
        }
    }

    #[test]
    fn demand_limited_market_clears_at_capacity() {
        let mut roster = AgentRoster::new();
        let inst = scaffold(&mut roster);
        roster
            .register(
                meta("mine", AgentKind::Facility, Some(inst)),
                Box::new(Source::new("fuel", natural_u(), 50.0)),
            )
            .unwrap();
        roster
            .register(
                meta("reactor", AgentKind::Facility, Some(inst)),
                Box::new(Sink::new("fuel", None, 5.0)),
            )
            .unwrap();

        let mut sim = SimBuilder::new(test_config(3), roster).build().unwrap();
        let mut ledger = Ledger::default();
        sim.run(&mut ledger).unwrap();

        let total: f64 = ledger
            .trades
            .iter()
            .flat_map(|(_, ts)| ts.iter().map(|t| t.qty))
            .sum();
        assert_eq!(total, 15.0, "3 ticks x 5 capacity");
    }

    #[test]
    fn unmatched_commodities_trade_nothing() {
        let mut roster = AgentRoster::new();
        let inst = scaffold(&mut roster);
        roster
            .register(
                meta("mine", AgentKind::Facility, Some(inst)),
                Box::new(Source::new("fuel", natural_u(), 3.0)),
            )
            .unwrap();
        roster
            .register(
                meta("dump", AgentKind::Facility, Some(inst)),
                Box::new(Sink::new("waste", None, 5.0)),
            )
            .unwrap();

        let mut sim = SimBuilder::new(test_config(2), roster).build().unwrap();
        let mut ledger = Ledger::default();
        sim.run(&mut ledger).unwrap();
        assert!(ledger.trades.iter().all(|(_, ts)| ts.is_empty()));
    }

    #[test]
    fn inactive_agents_do_not_trade() {
        let mut roster = AgentRoster::new();
        let inst = scaffold(&mut roster);
        roster
            .register(
                meta("mine", AgentKind::Facility, Some(inst)),
                Box::new(Source::new("fuel", natural_u(), 3.0)),
            )
            .unwrap();
        let mut late = meta("reactor", AgentKind::Facility, Some(inst));
        late.enter_tick = Tick(2);
        roster
            .register(late, Box::new(Sink::new("fuel", None, 5.0)))
            .unwrap();

        let mut sim = SimBuilder::new(test_config(4), roster).build().unwrap();
        let mut ledger = Ledger::default();
        sim.run(&mut ledger).unwrap();

        let per_tick: Vec<usize> = ledger.trades.iter().map(|(_, ts)| ts.len()).collect();
        assert_eq!(per_tick, vec![0, 0, 1, 1], "sink only trades once active");
    }

    #[test]
    fn trade_execution_moves_resources() {
        // A recording trader wired as the requester: captures what accept()
        // receives so we can check the offer/accept plumbing end to end.
        #[derive(Default)]
        struct Recording {
            received: Arc<Mutex<Vec<Resource>>>,
        }
        impl Trader for Recording {
            fn request_portfolios(
                &mut self,
                agent: AgentId,
                _ctx: &TickContext,
            ) -> ExchangeResult<Vec<fcx_exchange::RequestPortfolio>> {
                let mut p = fcx_exchange::RequestPortfolio::new(agent, 2.0);
                p.add_request(fcx_exchange::Request::new(
                    "fuel",
                    Resource::Product(fcx_resource::Product::clamped(2.0, "fuel")),
                ));
                Ok(vec![p])
            }
            fn accept(&mut self, _trade: &Trade, resource: Resource) {
                self.received.lock().unwrap().push(resource);
            }
        }

        let received = Arc::new(Mutex::new(Vec::new()));
        let mut roster = AgentRoster::new();
        let inst = scaffold(&mut roster);
        roster
            .register(
                meta("mine", AgentKind::Facility, Some(inst)),
                Box::new(Source::new("fuel", natural_u(), 10.0)),
            )
            .unwrap();
        roster
            .register(
                meta("reactor", AgentKind::Facility, Some(inst)),
                Box::new(Recording {
                    received: Arc::clone(&received),
                }),
            )
            .unwrap();

        let mut sim = SimBuilder::new(test_config(1), roster).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let got = received.lock().unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].quantity(), 2.0);
        assert!(
            matches!(got[0], Resource::Material(_)),
            "source ships material, not the product exemplar"
        );
    }

    #[test]
    fn malformed_bids_abort_the_run() {
        // A bidder that answers a request that was never registered.
        struct RogueBidder;
        impl Trader for RogueBidder {
            fn bid_portfolios(
                &mut self,
                agent: AgentId,
                _requests: &ExchangeContext,
                _ctx: &TickContext,
            ) -> ExchangeResult<Vec<BidPortfolio>> {
                let mut p = BidPortfolio::new();
                p.add_bid(
                    RequestId(99),
                    Resource::Product(fcx_resource::Product::clamped(1.0, "x")),
                    agent,
                )?;
                Ok(vec![p])
            }
        }

        let mut roster = AgentRoster::new();
        let inst = scaffold(&mut roster);
        roster
            .register(
                meta("rogue", AgentKind::Facility, Some(inst)),
                Box::new(RogueBidder),
            )
            .unwrap();

        let mut sim = SimBuilder::new(test_config(3), roster).build().unwrap();
        let err = sim.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Exchange(_)));
    }
}
