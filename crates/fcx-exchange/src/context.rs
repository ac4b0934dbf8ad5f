//! The per-tick request registry.
//!
//! Bidders don't see request portfolios directly — the simulator collects
//! every portfolio submitted this tick into an `ExchangeContext`, which
//! assigns each request a global `RequestId` (in submission order) and
//! indexes requests by commodity.  Bid portfolios then reference requests by
//! ID, and the translator resolves IDs back to portfolios when it builds the
//! graph.
//!
//! A context lives for exactly one timestep, like the graph built from it.

use std::collections::HashMap;

use fcx_core::{AgentId, Commodity, RequestId};

use crate::{Request, RequestPortfolio};

#[derive(Default)]
pub struct ExchangeContext {
    portfolios: Vec<RequestPortfolio>,
    /// `RequestId` → (portfolio index, request index within it).
    locations: Vec<(usize, usize)>,
    /// Reverse of `locations`, used by the translator.
    ids: HashMap<(usize, usize), RequestId>,
    by_commodity: HashMap<Commodity, Vec<RequestId>>,
}

impl ExchangeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a portfolio, assigning a `RequestId` to each of its requests
    /// in order.  Returns the assigned IDs.
    pub fn add_portfolio(&mut self, portfolio: RequestPortfolio) -> Vec<RequestId> {
        let pidx = self.portfolios.len();
        let mut assigned = Vec::with_capacity(portfolio.requests().len());

        for (ridx, request) in portfolio.requests().iter().enumerate() {
            let id = RequestId(self.locations.len() as u32);
            self.locations.push((pidx, ridx));
            self.ids.insert((pidx, ridx), id);
            self.by_commodity
                .entry(request.commodity.clone())
                .or_default()
                .push(id);
            assigned.push(id);
        }

        self.portfolios.push(portfolio);
        assigned
    }

    /// All registered portfolios in submission order.
    pub fn portfolios(&self) -> &[RequestPortfolio] {
        &self.portfolios
    }

    /// The request behind `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this context.
    pub fn request(&self, id: RequestId) -> &Request {
        let (pidx, ridx) = self.locations[id.index()];
        &self.portfolios[pidx].requests()[ridx]
    }

    /// The portfolio that submitted `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this context.
    pub fn portfolio_of(&self, id: RequestId) -> &RequestPortfolio {
        let (pidx, _) = self.locations[id.index()];
        &self.portfolios[pidx]
    }

    /// The agent that requested `id`.
    pub fn requester_of(&self, id: RequestId) -> AgentId {
        self.portfolio_of(id).requester()
    }

    /// The ID assigned to request `ridx` of portfolio `pidx`, if registered.
    pub(crate) fn id_at(&self, pidx: usize, ridx: usize) -> Option<RequestId> {
        self.ids.get(&(pidx, ridx)).copied()
    }

    /// Live requests for `commodity`, in submission order.
    pub fn requests_for<'a>(
        &'a self,
        commodity: &Commodity,
    ) -> impl Iterator<Item = (RequestId, &'a Request)> + 'a {
        self.by_commodity
            .get(commodity)
            .into_iter()
            .flatten()
            .map(|&id| (id, self.request(id)))
    }

    /// Total number of registered requests.
    pub fn request_count(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
