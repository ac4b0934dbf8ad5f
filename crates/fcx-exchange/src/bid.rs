//! Supply-side portfolios.

use fcx_core::{AgentId, RequestId};
use fcx_resource::Resource;

use crate::{CapacityConstraint, ExchangeError, ExchangeResult};

// ── Bid ───────────────────────────────────────────────────────────────────────

/// An offer to supply `offer` against one specific request.
#[derive(Debug)]
pub struct Bid {
    pub request: RequestId,
    pub offer: Resource,
}

// ── BidPortfolio ──────────────────────────────────────────────────────────────

/// A group of bids from a single bidder, sharing a set of capacity
/// constraints.
///
/// Two identity rules are enforced at construction time (key errors):
/// every bid must come from the same bidder, and a request may be answered
/// by at most one bid per portfolio.
#[derive(Default)]
pub struct BidPortfolio {
    bidder: Option<AgentId>,
    bids: Vec<Bid>,
    constraints: Vec<CapacityConstraint>,
}

impl BidPortfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bid from `bidder` answering `request` with `offer`.
    ///
    /// The first bid establishes the portfolio's bidder; later bids must
    /// match it.  Answering the same request twice is rejected.
    pub fn add_bid(
        &mut self,
        request: RequestId,
        offer: Resource,
        bidder: AgentId,
    ) -> ExchangeResult<()> {
        match self.bidder {
            None => self.bidder = Some(bidder),
            Some(expected) if expected != bidder => {
                return Err(ExchangeError::BidderMismatch {
                    expected,
                    got: bidder,
                });
            }
            Some(_) => {}
        }
        if self.bids.iter().any(|b| b.request == request) {
            return Err(ExchangeError::DuplicateBid(request));
        }
        self.bids.push(Bid { request, offer });
        Ok(())
    }

    pub fn add_constraint(&mut self, constraint: CapacityConstraint) {
        self.constraints.push(constraint);
    }

    /// The bidder identity, once the first bid has been added.
    pub fn bidder(&self) -> Option<AgentId> {
        self.bidder
    }

    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn constraints(&self) -> &[CapacityConstraint] {
        &self.constraints
    }
}
