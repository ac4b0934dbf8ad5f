//! `Source` — an infinite producer of one commodity.

use fcx_core::{AgentId, Commodity};
use fcx_exchange::{BidPortfolio, CapacityConstraint, ExchangeContext, ExchangeResult, Trade};
use fcx_resource::{Composition, Material, Resource};

use crate::{TickContext, Trader};

/// Offers `commodity` as material of a fixed recipe, up to `throughput`
/// units per tick.
///
/// Each tick the source answers every live request for its commodity,
/// offering the lesser of the requested amount and its throughput; a single
/// portfolio-wide constraint caps the *total* outflow at `throughput`
/// regardless of how many requests it answered.
pub struct Source {
    commodity: Commodity,
    recipe: Composition,
    throughput: f64,
    total_supplied: f64,
}

impl Source {
    pub fn new(commodity: impl Into<Commodity>, recipe: Composition, throughput: f64) -> Self {
        Self {
            commodity: commodity.into(),
            recipe,
            throughput,
            total_supplied: 0.0,
        }
    }

    /// Cumulative quantity shipped over the simulation so far.
    pub fn total_supplied(&self) -> f64 {
        self.total_supplied
    }
}

impl Trader for Source {
    fn bid_portfolios(
        &mut self,
        agent: AgentId,
        requests: &ExchangeContext,
        _ctx: &TickContext,
    ) -> ExchangeResult<Vec<BidPortfolio>> {
        let mut portfolio = BidPortfolio::new();
        for (id, request) in requests.requests_for(&self.commodity) {
            let qty = request.target.quantity().min(self.throughput);
            if qty <= 0.0 {
                continue;
            }
            let offer = Resource::Material(Material::clamped(qty, self.recipe.clone()));
            portfolio.add_bid(id, offer, agent)?;
        }
        if portfolio.bids().is_empty() {
            return Ok(vec![]);
        }
        portfolio.add_constraint(CapacityConstraint::trivial(self.throughput));
        Ok(vec![portfolio])
    }

    fn offer(&mut self, trade: &Trade) -> Resource {
        self.total_supplied += trade.qty;
        Resource::Material(Material::clamped(trade.qty, self.recipe.clone()))
    }
}
