//! Unit tests for the agent crate.

use fcx_core::{AgentId, Tick};
use fcx_resource::{Basis, Composition, Nuclide};

use crate::{
    AgentError, AgentKind, AgentMeta, AgentRoster, NullTrader, Sink, Source, TickContext, Trader,
};

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

fn natural_u() -> Composition {
    Composition::new(
        Basis::Mass,
        vec![(Nuclide(922350000), 0.007), (Nuclide(922380000), 0.993)],
    )
    .unwrap()
}

// ── Roster ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod roster {
    use super::*;

    #[test]
    fn builds_a_three_level_tree() {
        let mut roster = AgentRoster::new();
        let region = roster
            .register(meta("usa", AgentKind::Region, None), Box::new(NullTrader))
            .unwrap();
        let inst = roster
            .register(
                meta("utility", AgentKind::Institution, Some(region)),
                Box::new(NullTrader),
            )
            .unwrap();
        let fac = roster
            .register(
                meta("reactor", AgentKind::Facility, Some(inst)),
                Box::new(NullTrader),
            )
            .unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.meta(fac).unwrap().parent, Some(inst));
        assert_eq!(roster.meta(inst).unwrap().parent, Some(region));
    }

    #[test]
    fn facility_under_region_is_rejected() {
        let mut roster = AgentRoster::new();
        let region = roster
            .register(meta("usa", AgentKind::Region, None), Box::new(NullTrader))
            .unwrap();
        let err = roster
            .register(
                meta("reactor", AgentKind::Facility, Some(region)),
                Box::new(NullTrader),
            )
            .unwrap_err();
        assert!(matches!(err, AgentError::BadNesting { .. }));
    }

    #[test]
    fn orphan_facility_is_rejected() {
        let mut roster = AgentRoster::new();
        let err = roster
            .register(meta("reactor", AgentKind::Facility, None), Box::new(NullTrader))
            .unwrap_err();
        assert!(matches!(err, AgentError::MissingParent(_)));
    }

    #[test]
    fn unknown_parent_is_rejected() {
        let mut roster = AgentRoster::new();
        let err = roster
            .register(
                meta("inst", AgentKind::Institution, Some(AgentId(7))),
                Box::new(NullTrader),
            )
            .unwrap_err();
        assert!(matches!(err, AgentError::UnknownParent(_)));
    }

    #[test]
    fn activity_window_respects_lifetime() {
        let mut roster = AgentRoster::new();
        let mut m = meta("usa", AgentKind::Region, None);
        m.enter_tick = Tick(2);
        m.lifetime = Some(3);
        let id = roster.register(m, Box::new(NullTrader)).unwrap();

        assert!(!roster.is_active(id, Tick(1)), "before entry");
        assert!(roster.is_active(id, Tick(2)));
        assert!(roster.is_active(id, Tick(4)));
        assert!(!roster.is_active(id, Tick(5)), "lifetime expired");
    }

    #[test]
    fn active_facilities_excludes_other_kinds() {
        let mut roster = AgentRoster::new();
        let region = roster
            .register(meta("usa", AgentKind::Region, None), Box::new(NullTrader))
            .unwrap();
        let inst = roster
            .register(
                meta("utility", AgentKind::Institution, Some(region)),
                Box::new(NullTrader),
            )
            .unwrap();
        let fac = roster
            .register(
                meta("mine", AgentKind::Facility, Some(inst)),
                Box::new(NullTrader),
            )
            .unwrap();

        assert_eq!(roster.active_facilities(Tick(0)), vec![fac]);
        assert_eq!(roster.active_at(Tick(0)).len(), 3);
    }
}

// ── Archetypes ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod archetypes {
    use super::*;
    use fcx_exchange::{ExchangeContext, Request, RequestPortfolio};
    use fcx_resource::{Product, Resource};

    #[test]
    fn sink_publishes_its_capacity() {
        let mut sink = Sink::new("fuel", None, 10.0);
        let ctx = TickContext { tick: Tick(0) };
        let ports = sink.request_portfolios(AgentId(0), &ctx).unwrap();
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].qty(), 10.0);
        assert_eq!(ports[0].requests().len(), 1);
        assert_eq!(ports[0].requests()[0].target.quantity(), 10.0);
    }

    #[test]
    fn zero_capacity_sink_stays_silent() {
        let mut sink = Sink::new("fuel", None, 0.0);
        let ctx = TickContext { tick: Tick(0) };
        assert!(sink.request_portfolios(AgentId(0), &ctx).unwrap().is_empty());
    }

    #[test]
    fn source_answers_matching_requests_only() {
        let mut requests = ExchangeContext::new();
        let mut p = RequestPortfolio::new(AgentId(1), 5.0);
        p.add_request(Request::new(
            "fuel",
            Resource::Product(Product::clamped(5.0, "fuel")),
        ));
        p.add_request(Request::new(
            "waste",
            Resource::Product(Product::clamped(2.0, "waste")),
        ));
        requests.add_portfolio(p);

        let mut source = Source::new("fuel", natural_u(), 3.0);
        let ctx = TickContext { tick: Tick(0) };
        let ports = source
            .bid_portfolios(AgentId(2), &requests, &ctx)
            .unwrap();

        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].bids().len(), 1, "only the fuel request is answered");
        // Offer is clipped to throughput.
        assert_eq!(ports[0].bids()[0].offer.quantity(), 3.0);
        assert_eq!(ports[0].constraints().len(), 1);
        assert_eq!(ports[0].constraints()[0].capacity(), 3.0);
    }

    #[test]
    fn source_with_no_matching_demand_bids_nothing() {
        let requests = ExchangeContext::new();
        let mut source = Source::new("fuel", natural_u(), 3.0);
        let ctx = TickContext { tick: Tick(0) };
        assert!(source
            .bid_portfolios(AgentId(2), &requests, &ctx)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn sink_merges_same_kind_deliveries() {
        let mut sink = Sink::new("fuel", None, 10.0);
        let trade = fcx_exchange::Trade {
            requester: AgentId(0),
            bidder: AgentId(1),
            commodity: "fuel".into(),
            qty: 4.0,
        };
        sink.accept(&trade, Resource::Product(Product::clamped(4.0, "fuel")));
        sink.accept(&trade, Resource::Product(Product::clamped(2.5, "fuel")));
        assert_eq!(sink.inventory().len(), 1, "same-kind deliveries absorb");
        assert_eq!(sink.inventory_quantity(), 6.5);
    }

    #[test]
    fn sink_starts_a_new_entry_on_kind_change() {
        let mut sink = Sink::new("fuel", None, 10.0);
        let trade = fcx_exchange::Trade {
            requester: AgentId(0),
            bidder: AgentId(1),
            commodity: "fuel".into(),
            qty: 1.0,
        };
        sink.accept(&trade, Resource::Product(Product::clamped(1.0, "fuel")));
        sink.accept(
            &trade,
            Resource::Material(fcx_resource::Material::clamped(2.0, natural_u())),
        );
        assert_eq!(sink.inventory().len(), 2);
        assert_eq!(sink.inventory_quantity(), 3.0);
    }

    #[test]
    fn source_ledger_tracks_offers() {
        let mut source = Source::new("fuel", natural_u(), 3.0);
        let trade = fcx_exchange::Trade {
            requester: AgentId(0),
            bidder: AgentId(1),
            commodity: "fuel".into(),
            qty: 2.0,
        };
        let rsrc = source.offer(&trade);
        assert_eq!(rsrc.quantity(), 2.0);
        assert_eq!(source.total_supplied(), 2.0);
    }
}
