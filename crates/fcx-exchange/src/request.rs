//! Demand-side portfolios.

use fcx_core::{AgentId, Commodity};
use fcx_resource::Resource;

use crate::CapacityConstraint;

// ── Request ───────────────────────────────────────────────────────────────────

/// One demand for a resource of a given commodity.
///
/// `target` is an exemplar of what is wanted — its quantity bounds the
/// request node, and bidders inspect it to decide what to offer.
#[derive(Debug)]
pub struct Request {
    pub commodity: Commodity,
    pub target: Resource,
    /// Relative preference within the portfolio; higher is satisfied first.
    pub preference: f64,
    /// All-or-nothing: this request trades its full quantity or not at all.
    pub exclusive: bool,
}

impl Request {
    pub fn new(commodity: impl Into<Commodity>, target: Resource) -> Self {
        Self {
            commodity: commodity.into(),
            target,
            preference: 1.0,
            exclusive: false,
        }
    }

    pub fn with_preference(mut self, preference: f64) -> Self {
        self.preference = preference;
        self
    }

    pub fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }
}

// ── RequestPortfolio ──────────────────────────────────────────────────────────

/// A group of requests sharing one requester and one overall quantity.
///
/// The portfolio's `qty` bounds total flow across *all* its requests — the
/// individual requests are alternatives drawing on a common demand, not
/// independent demands.  Constraints (optional) add pooled budget dimensions
/// on top of the quantity bound.
pub struct RequestPortfolio {
    requester: AgentId,
    qty: f64,
    requests: Vec<Request>,
    constraints: Vec<CapacityConstraint>,
    exclusive: bool,
}

impl RequestPortfolio {
    pub fn new(requester: AgentId, qty: f64) -> Self {
        Self {
            requester,
            qty,
            requests: Vec::new(),
            constraints: Vec::new(),
            exclusive: false,
        }
    }

    pub fn add_request(&mut self, request: Request) {
        self.requests.push(request);
    }

    pub fn add_constraint(&mut self, constraint: CapacityConstraint) {
        self.constraints.push(constraint);
    }

    /// Mark every request in this portfolio all-or-nothing.
    pub fn make_exclusive(&mut self) {
        self.exclusive = true;
    }

    pub fn requester(&self) -> AgentId {
        self.requester
    }

    /// Total quantity this portfolio may receive across all requests.
    pub fn qty(&self) -> f64 {
        self.qty
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn constraints(&self) -> &[CapacityConstraint] {
        &self.constraints
    }

    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }
}
