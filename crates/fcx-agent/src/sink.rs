//! `Sink` — an infinite consumer of one commodity.

use fcx_core::{AgentId, Commodity};
use fcx_exchange::{ExchangeResult, Request, RequestPortfolio, Trade};
use fcx_resource::{Composition, Material, Product, Resource};

use crate::{TickContext, Trader};

/// Requests up to `capacity` units of `commodity` per tick and accumulates
/// whatever arrives in an inventory.
///
/// If a recipe is given, the sink requests material of that composition;
/// otherwise it requests an untracked product.  Either way bidders only see
/// the exemplar — what actually arrives is whatever they offered.
pub struct Sink {
    commodity: Commodity,
    recipe: Option<Composition>,
    capacity: f64,
    inventory: Vec<Resource>,
}

impl Sink {
    pub fn new(commodity: impl Into<Commodity>, recipe: Option<Composition>, capacity: f64) -> Self {
        Self {
            commodity: commodity.into(),
            recipe,
            capacity,
            inventory: Vec::new(),
        }
    }

    /// Received inventory, in arrival order.  Consecutive deliveries of the
    /// same resource kind are merged into one entry.
    pub fn inventory(&self) -> &[Resource] {
        &self.inventory
    }

    /// Total quantity received so far.
    pub fn inventory_quantity(&self) -> f64 {
        self.inventory.iter().map(Resource::quantity).sum()
    }
}

impl Trader for Sink {
    fn request_portfolios(
        &mut self,
        agent: AgentId,
        _ctx: &TickContext,
    ) -> ExchangeResult<Vec<RequestPortfolio>> {
        if self.capacity <= 0.0 {
            return Ok(vec![]);
        }
        let target = match &self.recipe {
            Some(recipe) => Resource::Material(Material::clamped(self.capacity, recipe.clone())),
            None => Resource::Product(Product::clamped(self.capacity, self.commodity.as_str())),
        };
        let mut portfolio = RequestPortfolio::new(agent, self.capacity);
        portfolio.add_request(Request::new(self.commodity.clone(), target));
        Ok(vec![portfolio])
    }

    fn accept(&mut self, _trade: &Trade, resource: Resource) {
        // Deliveries of the same kind merge into the newest inventory entry;
        // a kind change starts a new entry.
        match self.inventory.last_mut() {
            Some(existing) if existing.is_same_kind(&resource) => {
                // Same-kind absorb does not fail.
                let _ = existing.absorb(resource);
            }
            _ => self.inventory.push(resource),
        }
    }
}
