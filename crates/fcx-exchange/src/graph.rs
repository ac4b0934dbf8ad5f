//! The exchange graph arena: nodes, node sets, arcs, and the match log.
//!
//! # Design
//!
//! The graph owns everything.  Nodes and node sets live in arena `Vec`s
//! addressed by the typed handles `NodeId` / `SetId`, and a node's
//! back-reference to its owning set is just the set's handle — no shared
//! ownership, no reference cycles.  [`Arc`] is a plain `Copy` value keyed on
//! its endpoint handles, so arcs can be copied freely through the match log
//! and used as map keys.
//!
//! A graph is built once per timestep, consumed by the matcher, and dropped.
//! Topology is append-only: there is no node or arc removal.
//!
//! # Ordering
//!
//! Every collection here preserves insertion order — request sets, set
//! members, and each node's incident-arc list.  The matcher's visit order
//! (and with it the exact match log) is defined by these orders, so callers
//! encode priority by choosing them.

use std::collections::HashMap;

use fcx_core::{NodeId, SetId};

use crate::{ExchangeError, ExchangeResult};

// ── Arc ───────────────────────────────────────────────────────────────────────

/// A potential flow from a bid node to a request node.
///
/// Value-typed: two arcs with the same endpoints are the same arc.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Arc {
    /// Request-side (demand) endpoint.
    pub req: NodeId,
    /// Bid-side (supply) endpoint.
    pub bid: NodeId,
}

impl Arc {
    pub fn new(req: NodeId, bid: NodeId) -> Self {
        Arc { req, bid }
    }
}

// ── Match ─────────────────────────────────────────────────────────────────────

/// A committed `(arc, quantity)` assignment in the match log.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Match {
    pub arc: Arc,
    pub qty: f64,
}

// ── Node ──────────────────────────────────────────────────────────────────────

/// One participant on one side of a potential trade.
///
/// A node carries, per incident arc, the vector of unit-capacity
/// coefficients — "units of constraint dimension *k* consumed per unit of
/// flow on that arc".  The pooled capacities those coefficients draw down
/// live on the owning [`NodeSet`].
#[derive(Debug, Default)]
pub struct Node {
    pub(crate) set: Option<SetId>,
    pub(crate) qty: f64,
    pub(crate) exclusive: bool,
    pub(crate) unit_capacities: HashMap<Arc, Vec<f64>>,
    pub(crate) arcs: Vec<Arc>,
}

impl Node {
    /// Handle of the owning set, if the node has been attached.
    pub fn set(&self) -> Option<SetId> {
        self.set
    }

    /// Quantity hint: for request nodes, the amount requested.  Exclusive
    /// nodes trade exactly this amount or nothing.
    pub fn qty(&self) -> f64 {
        self.qty
    }

    /// All-or-nothing flag.
    pub fn exclusive(&self) -> bool {
        self.exclusive
    }

    /// Incident arcs in `add_arc` order.
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Unit-capacity coefficients for `arc`, if set.
    pub fn unit_capacities(&self, arc: Arc) -> Option<&[f64]> {
        self.unit_capacities.get(&arc).map(Vec::as_slice)
    }
}

// ── NodeSet ───────────────────────────────────────────────────────────────────

/// A group of nodes sharing a pool of constraint capacities.
///
/// Request sets additionally carry the total quantity the group may receive
/// across all member arcs ([`NodeSet::qty`]).
#[derive(Debug, Default)]
pub struct NodeSet {
    pub(crate) capacities: Vec<f64>,
    pub(crate) members: Vec<NodeId>,
    pub(crate) qty: Option<f64>,
}

impl NodeSet {
    /// Residual pooled capacities, one entry per constraint dimension.
    /// Empty means unconstrained.
    pub fn capacities(&self) -> &[f64] {
        &self.capacities
    }

    /// Member nodes in attachment order.
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    /// Total request quantity for request sets; `None` for supply sets.
    pub fn qty(&self) -> Option<f64> {
        self.qty
    }

    pub fn is_request_set(&self) -> bool {
        self.qty.is_some()
    }
}

// ── ExchangeGraph ─────────────────────────────────────────────────────────────

/// The bipartite exchange graph for one timestep's trade resolution.
#[derive(Debug, Default)]
pub struct ExchangeGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) sets: Vec<NodeSet>,
    request_sets: Vec<SetId>,
    supply_sets: Vec<SetId>,
    matches: Vec<Match>,
}

impl ExchangeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Allocate an unattached node with no quantity bound.
    pub fn new_node(&mut self) -> NodeId {
        self.new_node_with(f64::INFINITY, false)
    }

    /// Allocate an unattached node with a quantity hint and exclusivity flag.
    pub fn new_node_with(&mut self, qty: f64, exclusive: bool) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            set: None,
            qty,
            exclusive,
            unit_capacities: HashMap::new(),
            arcs: Vec::new(),
        });
        id
    }

    /// Allocate a supply-side node set with no capacities yet.
    pub fn new_supply_set(&mut self) -> SetId {
        let id = self.push_set(None);
        self.supply_sets.push(id);
        id
    }

    /// Allocate a request set bounded to `qty` units of total flow.
    pub fn new_request_set(&mut self, qty: f64) -> SetId {
        let id = self.push_set(Some(qty));
        self.request_sets.push(id);
        id
    }

    fn push_set(&mut self, qty: Option<f64>) -> SetId {
        let id = SetId(self.sets.len() as u32);
        self.sets.push(NodeSet {
            capacities: Vec::new(),
            members: Vec::new(),
            qty,
        });
        id
    }

    /// Replace a set's pooled capacity vector.
    pub fn set_capacities(&mut self, set: SetId, capacities: Vec<f64>) {
        self.sets[set.index()].capacities = capacities;
    }

    /// Attach `node` to `set`.
    ///
    /// Fails with a state error if the node already belongs to a set; group
    /// membership is permanent once assigned.
    pub fn add_to_set(&mut self, set: SetId, node: NodeId) -> ExchangeResult<()> {
        let entry = &mut self.nodes[node.index()];
        if let Some(existing) = entry.set {
            return Err(ExchangeError::AlreadyGrouped {
                node,
                set: existing,
            });
        }
        entry.set = Some(set);
        self.sets[set.index()].members.push(node);
        Ok(())
    }

    /// Record `node`'s unit-capacity coefficients for `arc`.
    ///
    /// Must have the same cardinality as the owning set's capacity vector by
    /// the time the capacity engine is consulted; the mismatch is reported
    /// there as a state error.
    pub fn set_unit_capacities(&mut self, node: NodeId, arc: Arc, coefficients: Vec<f64>) {
        self.nodes[node.index()]
            .unit_capacities
            .insert(arc, coefficients);
    }

    /// Register an arc, appending it to both endpoints' incident lists.
    ///
    /// Insertion order is preserved and is part of the observable contract:
    /// the matcher visits each node's arcs in exactly this order.
    pub fn add_arc(&mut self, arc: Arc) {
        self.nodes[arc.req.index()].arcs.push(arc);
        self.nodes[arc.bid.index()].arcs.push(arc);
    }

    /// Append a committed match to the log.
    ///
    /// Capacity bookkeeping is not performed here — the matcher debits
    /// capacities through the capacity engine before logging.
    pub fn add_match(&mut self, arc: Arc, qty: f64) {
        self.matches.push(Match { arc, qty });
    }

    // ── Access ────────────────────────────────────────────────────────────

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_set(&self, id: SetId) -> &NodeSet {
        &self.sets[id.index()]
    }

    /// Request sets in insertion order — the matcher's outer visit order.
    pub fn request_sets(&self) -> &[SetId] {
        &self.request_sets
    }

    /// Supply sets in insertion order.
    pub fn supply_sets(&self) -> &[SetId] {
        &self.supply_sets
    }

    /// The match log, in the order matches were committed.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
