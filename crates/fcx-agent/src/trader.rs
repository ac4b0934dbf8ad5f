//! The `Trader` trait — the main extension point for archetype code.

use fcx_core::{AgentId, Tick};
use fcx_exchange::{
    BidPortfolio, ExchangeContext, ExchangeResult, RequestPortfolio, Trade,
};
use fcx_resource::Resource;

/// Read-only per-tick state passed to every trader callback.
#[derive(Clone, Copy, Debug)]
pub struct TickContext {
    /// Current simulation tick.
    pub tick: Tick,
}

/// Pluggable trading behavior.
///
/// All methods have defaults, so an archetype only implements the sides of
/// the exchange it participates in.  A pure consumer overrides
/// [`request_portfolios`][Self::request_portfolios] and
/// [`accept`][Self::accept]; a pure producer overrides
/// [`bid_portfolios`][Self::bid_portfolios] and [`offer`][Self::offer].
///
/// Portfolio construction can fail (key errors from
/// [`BidPortfolio::add_bid`]); returning `Err` aborts the timestep, so
/// archetypes should propagate rather than swallow those.
pub trait Trader {
    /// Called at the start of each tick, before the exchange.
    fn tick(&mut self, _agent: AgentId, _ctx: &TickContext) {}

    /// Called at the end of each tick, after trades have executed.
    fn tock(&mut self, _agent: AgentId, _ctx: &TickContext) {}

    /// Publish this tick's demand.
    fn request_portfolios(
        &mut self,
        _agent: AgentId,
        _ctx: &TickContext,
    ) -> ExchangeResult<Vec<RequestPortfolio>> {
        Ok(vec![])
    }

    /// Answer the live demand registered in `requests`.
    fn bid_portfolios(
        &mut self,
        _agent: AgentId,
        _requests: &ExchangeContext,
        _ctx: &TickContext,
    ) -> ExchangeResult<Vec<BidPortfolio>> {
        Ok(vec![])
    }

    /// Produce the resource for a trade this agent won as bidder.
    ///
    /// The default hands over an untracked product of the traded quantity;
    /// producing archetypes override this to move real inventory.
    fn offer(&mut self, trade: &Trade) -> Resource {
        Resource::Product(fcx_resource::Product::clamped(
            trade.qty,
            trade.commodity.as_str(),
        ))
    }

    /// Receive the resource for a trade this agent won as requester.
    ///
    /// The default drops it on the floor.
    fn accept(&mut self, _trade: &Trade, _resource: Resource) {}
}
