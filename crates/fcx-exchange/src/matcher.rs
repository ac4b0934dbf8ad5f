//! Greedy, priority-ordered constrained flow assignment.
//!
//! # Algorithm
//!
//! ```text
//! for each request set (insertion order):
//!   rem ← set quantity
//!   for each member node (insertion order):
//!     for each incident arc (add_arc order):
//!       stop the set when rem is exhausted
//!       cap ← arc_capacity(arc); skip arcs with no residual
//!       q   ← min(cap, rem)          (exclusive nodes: full node qty or skip)
//!       debit both endpoints, rem ← rem − q, log (arc, q)
//! ```
//!
//! The walk is single-threaded and deterministic: identical construction
//! order yields a bit-identical match log.  Under-fulfilled request sets are
//! legal and silent — the matcher reports matches, not gaps.
//!
//! The matcher fails only when the graph is malformed (state errors from the
//! capacity engine).  It performs no rollback; on error the graph is
//! undefined and must be discarded.

use fcx_core::{num, NodeId, SetId};

use crate::graph::{Arc, ExchangeGraph};
use crate::ExchangeResult;

/// The solver seam: consumes a graph, appends to its match log.
pub trait Matcher {
    fn solve(&self, graph: &mut ExchangeGraph) -> ExchangeResult<()>;
}

/// The production matcher: greedy in the graph's insertion order.
///
/// Callers encode commodity priority and request preference by construction
/// order (see the translator); the matcher itself never reorders anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyMatcher;

impl Matcher for GreedyMatcher {
    fn solve(&self, graph: &mut ExchangeGraph) -> ExchangeResult<()> {
        let request_sets: Vec<SetId> = graph.request_sets().to_vec();
        for set in request_sets {
            match_request_set(graph, set)?;
        }
        Ok(())
    }
}

fn match_request_set(graph: &mut ExchangeGraph, set: SetId) -> ExchangeResult<()> {
    let mut rem = graph.node_set(set).qty().unwrap_or(f64::INFINITY);
    let members: Vec<NodeId> = graph.node_set(set).members().to_vec();

    'members: for node in members {
        let arcs: Vec<Arc> = graph.node(node).arcs().to_vec();
        let exclusive = graph.node(node).exclusive();
        let node_qty = graph.node(node).qty();

        for arc in arcs {
            if !num::is_pos(rem) {
                break 'members;
            }
            let cap = graph.arc_capacity(arc)?;
            if !num::is_pos(cap) {
                continue;
            }

            let qty = if exclusive {
                // All-or-nothing: the node's full quantity must fit within
                // both the arc capacity and the outstanding request quantity.
                if !node_qty.is_finite()
                    || num::is_pos(node_qty - cap)
                    || num::is_pos(node_qty - rem)
                {
                    continue;
                }
                node_qty
            } else {
                cap.min(rem)
            };
            if !num::is_pos(qty) {
                continue;
            }

            graph.update_capacity(arc.req, arc, qty)?;
            graph.update_capacity(arc.bid, arc, qty)?;
            rem -= qty;
            graph.add_match(arc, qty);

            if exclusive {
                // An exclusive node trades at most once.
                continue 'members;
            }
        }
    }
    Ok(())
}
