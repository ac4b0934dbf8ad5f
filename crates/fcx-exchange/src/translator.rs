//! Translation between portfolios and the exchange graph.
//!
//! # Forward (portfolios → graph)
//!
//! - Each request portfolio becomes one request set; its constraints'
//!   capacities become the set's capacity vector; each request becomes one
//!   node.
//! - Each bid portfolio becomes one supply set; each bid becomes one node
//!   and one arc to the node of the request it answers.
//! - Unit capacities per arc come from applying each portfolio's converters
//!   to the arc's resource candidate: the request's target on the demand
//!   side, the bid's offer on the supply side.
//!
//! # Ordering
//!
//! The matcher visits in insertion order, so ordering decisions live here:
//! request portfolios are translated in descending commodity
//! `solution_priority` (stable — ties keep submission order), requests
//! within a portfolio in descending preference (stable), and arcs in bid
//! submission order.  Commodities absent from the priority table default to
//! priority 1.
//!
//! # Backward (match log → trades)
//!
//! Each `(arc, qty)` match becomes a [`Trade`] naming the requester, the
//! bidder, the commodity, and the quantity, in match-log order.

use std::cmp::Ordering;
use std::collections::HashMap;

use fcx_core::{AgentId, Commodity, NodeId, RequestId};

use crate::graph::{Arc, ExchangeGraph};
use crate::{BidPortfolio, ExchangeContext, ExchangeError, ExchangeResult, Trade};

/// Builds the graph from a tick's portfolios and maps matches back to trades.
///
/// The translator remembers which graph node each request and bid became, so
/// it must outlive the graph it produced.
pub struct ExchangeTranslator<'a> {
    priorities: &'a HashMap<Commodity, f64>,
    request_nodes: HashMap<RequestId, NodeId>,
    node_requests: HashMap<NodeId, RequestId>,
    node_bidders: HashMap<NodeId, AgentId>,
}

impl<'a> ExchangeTranslator<'a> {
    /// `priorities` maps commodity names to their solution priority; missing
    /// entries default to 1.
    pub fn new(priorities: &'a HashMap<Commodity, f64>) -> Self {
        Self {
            priorities,
            request_nodes: HashMap::new(),
            node_requests: HashMap::new(),
            node_bidders: HashMap::new(),
        }
    }

    /// Build the exchange graph for one tick.
    pub fn translate(
        &mut self,
        ctx: &ExchangeContext,
        bid_portfolios: &[BidPortfolio],
    ) -> ExchangeResult<ExchangeGraph> {
        let mut graph = ExchangeGraph::new();
        self.translate_requests(ctx, &mut graph)?;
        self.translate_bids(ctx, bid_portfolios, &mut graph)?;
        Ok(graph)
    }

    fn translate_requests(
        &mut self,
        ctx: &ExchangeContext,
        graph: &mut ExchangeGraph,
    ) -> ExchangeResult<()> {
        // Stable sort: equal priorities keep submission order.
        let mut order: Vec<usize> = (0..ctx.portfolios().len()).collect();
        order.sort_by(|&a, &b| {
            let pa = self.portfolio_priority(&ctx.portfolios()[a]);
            let pb = self.portfolio_priority(&ctx.portfolios()[b]);
            pb.partial_cmp(&pa).unwrap_or(Ordering::Equal)
        });

        for pidx in order {
            let portfolio = &ctx.portfolios()[pidx];
            let set = graph.new_request_set(portfolio.qty());
            graph.set_capacities(
                set,
                portfolio.constraints().iter().map(|c| c.capacity()).collect(),
            );

            let mut request_order: Vec<usize> = (0..portfolio.requests().len()).collect();
            request_order.sort_by(|&a, &b| {
                let pa = portfolio.requests()[a].preference;
                let pb = portfolio.requests()[b].preference;
                pb.partial_cmp(&pa).unwrap_or(Ordering::Equal)
            });

            for ridx in request_order {
                let request = &portfolio.requests()[ridx];
                let node = graph.new_node_with(
                    request.target.quantity(),
                    request.exclusive || portfolio.is_exclusive(),
                );
                graph.add_to_set(set, node)?;

                if let Some(id) = ctx.id_at(pidx, ridx) {
                    self.request_nodes.insert(id, node);
                    self.node_requests.insert(node, id);
                }
            }
        }
        Ok(())
    }

    fn translate_bids(
        &mut self,
        ctx: &ExchangeContext,
        bid_portfolios: &[BidPortfolio],
        graph: &mut ExchangeGraph,
    ) -> ExchangeResult<()> {
        for portfolio in bid_portfolios {
            let bidder = match portfolio.bidder() {
                Some(b) => b,
                None => continue, // no bids, nothing to translate
            };

            let set = graph.new_supply_set();
            graph.set_capacities(
                set,
                portfolio.constraints().iter().map(|c| c.capacity()).collect(),
            );

            for bid in portfolio.bids() {
                let &req_node = self
                    .request_nodes
                    .get(&bid.request)
                    .ok_or(ExchangeError::UnknownRequest(bid.request))?;

                let bid_node = graph.new_node_with(bid.offer.quantity(), false);
                graph.add_to_set(set, bid_node)?;
                self.node_bidders.insert(bid_node, bidder);

                let arc = Arc::new(req_node, bid_node);
                let request = ctx.request(bid.request);
                graph.set_unit_capacities(
                    req_node,
                    arc,
                    ctx.portfolio_of(bid.request)
                        .constraints()
                        .iter()
                        .map(|c| c.convert(&request.target))
                        .collect(),
                );
                graph.set_unit_capacities(
                    bid_node,
                    arc,
                    portfolio
                        .constraints()
                        .iter()
                        .map(|c| c.convert(&bid.offer))
                        .collect(),
                );
                graph.add_arc(arc);
            }
        }
        Ok(())
    }

    /// Map the match log back to trade records, in log order.
    pub fn back_translate(&self, ctx: &ExchangeContext, graph: &ExchangeGraph) -> Vec<Trade> {
        graph
            .matches()
            .iter()
            .filter_map(|m| {
                let id = *self.node_requests.get(&m.arc.req)?;
                let bidder = *self.node_bidders.get(&m.arc.bid)?;
                Some(Trade {
                    requester: ctx.requester_of(id),
                    bidder,
                    commodity: ctx.request(id).commodity.clone(),
                    qty: m.qty,
                })
            })
            .collect()
    }

    /// A portfolio's priority: the highest solution priority among its
    /// requests' commodities.
    fn portfolio_priority(&self, portfolio: &crate::RequestPortfolio) -> f64 {
        portfolio
            .requests()
            .iter()
            .map(|r| self.priorities.get(&r.commodity).copied().unwrap_or(1.0))
            .reduce(f64::max)
            .unwrap_or(1.0)
    }
}
