//! The capacity engine: residual-capacity queries and updates.
//!
//! # The min-ratio rule
//!
//! Each constraint dimension is an independent physical budget (mass,
//! throughput, …) pooled on the node's set.  A node's unit-capacity
//! coefficients are *rates* — budget consumed per unit of flow on an arc —
//! so the flow an arc can still carry through one endpoint is the tightest
//! `budget / rate` over all dimensions.  A zero rate means the dimension
//! doesn't constrain that arc and contributes `+∞` to the minimum.
//!
//! All sign tests on residuals go through the signed-epsilon predicates in
//! `fcx_core::num`; updates clamp values inside the tolerance band to zero so
//! rounding noise never accumulates into a phantom negative budget.

use fcx_core::{num, NodeId};

use crate::graph::{Arc, ExchangeGraph};
use crate::{ExchangeError, ExchangeResult};

impl ExchangeGraph {
    /// The flow `node` can still pass on `arc`, given its set's residual
    /// capacities.
    ///
    /// Errors with a state error if the node has no set or its coefficient
    /// vector for `arc` doesn't match the set's dimension count.  A set with
    /// no capacities imposes no constraint: the result is `+∞`.
    pub fn capacity(&self, node: NodeId, arc: Arc) -> ExchangeResult<f64> {
        let n = &self.nodes[node.index()];
        let set = n.set.ok_or(ExchangeError::UnattachedNode(node))?;
        let caps = &self.sets[set.index()].capacities;
        if caps.is_empty() {
            return Ok(f64::INFINITY);
        }

        let ucaps = n
            .unit_capacities
            .get(&arc)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        if ucaps.len() != caps.len() {
            return Err(ExchangeError::DimensionMismatch {
                node,
                got: ucaps.len(),
                expected: caps.len(),
            });
        }

        let mut min = f64::INFINITY;
        for (c, u) in caps.iter().zip(ucaps) {
            let ratio = if *u == 0.0 { f64::INFINITY } else { c / u };
            min = min.min(ratio);
        }
        Ok(min)
    }

    /// The flow `arc` can still carry given *both* endpoints: the minimum of
    /// the request-side and bid-side capacities, evaluated in that order.
    pub fn arc_capacity(&self, arc: Arc) -> ExchangeResult<f64> {
        let ucap = self.capacity(arc.req, arc)?;
        let vcap = self.capacity(arc.bid, arc)?;
        Ok(ucap.min(vcap))
    }

    /// Debit `qty` units of flow on `arc` from `node`'s set capacities.
    ///
    /// Each dimension is reduced by `rate × qty`.  A dimension that would go
    /// negative beyond tolerance fails with a value error; dimensions already
    /// written stay written (no rollback — callers size flows with
    /// [`arc_capacity`][Self::arc_capacity] first, so a failure here is a
    /// bug, not a recoverable condition).  Residuals inside the tolerance
    /// band are clamped to zero.
    pub fn update_capacity(&mut self, node: NodeId, arc: Arc, qty: f64) -> ExchangeResult<()> {
        if qty < 0.0 {
            return Err(ExchangeError::NegativeQuantity(qty));
        }
        let n = &self.nodes[node.index()];
        let set = n.set.ok_or(ExchangeError::UnattachedNode(node))?;
        if self.sets[set.index()].capacities.is_empty() {
            return Ok(());
        }

        let ucaps = n.unit_capacities.get(&arc).cloned().unwrap_or_default();
        let caps = &mut self.sets[set.index()].capacities;
        if ucaps.len() != caps.len() {
            return Err(ExchangeError::DimensionMismatch {
                node,
                got: ucaps.len(),
                expected: caps.len(),
            });
        }

        for (dim, (c, u)) in caps.iter_mut().zip(&ucaps).enumerate() {
            let val = *c - qty * u;
            if num::is_neg(val) {
                return Err(ExchangeError::InsufficientCapacity {
                    node,
                    dim,
                    residual: val,
                });
            }
            *c = val.max(0.0);
        }
        Ok(())
    }

    /// Debit `qty` from both endpoints of `arc`, request side first.
    pub fn update_arc_capacity(&mut self, arc: Arc, qty: f64) -> ExchangeResult<()> {
        self.update_capacity(arc.req, arc, qty)?;
        self.update_capacity(arc.bid, arc, qty)
    }
}
