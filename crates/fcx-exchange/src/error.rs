//! Exchange error type.
//!
//! Three kinds of failure cross the exchange boundary, distinguished by
//! [`ExchangeError::kind`]:
//!
//! - **State** — a graph invariant was violated (node without a set,
//!   mismatched constraint dimensions).  Indicates a construction bug; the
//!   graph must be discarded.
//! - **Value** — a numeric argument was out of range (negative flow, flow
//!   beyond residual capacity).  The matcher never produces these in correct
//!   use.
//! - **Key** — a portfolio identity rule was broken (duplicate bid on a
//!   request, mixed bidders in one portfolio, bid on an unknown request).
//!
//! None of these are caught internally; the matcher performs no rollback and
//! callers abort the timestep on any of them.

use fcx_core::{AgentId, NodeId, RequestId, SetId};
use thiserror::Error;

/// Which boundary contract an [`ExchangeError`] broke.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    State,
    Value,
    Key,
}

#[derive(Debug, Error)]
pub enum ExchangeError {
    // ── State errors ──────────────────────────────────────────────────────
    #[error("node {0} does not belong to any node set")]
    UnattachedNode(NodeId),

    #[error("node {node} already belongs to set {set}")]
    AlreadyGrouped { node: NodeId, set: SetId },

    #[error("node {node} carries {got} unit capacities but its set has {expected} constraint dimensions")]
    DimensionMismatch {
        node: NodeId,
        got: usize,
        expected: usize,
    },

    // ── Value errors ──────────────────────────────────────────────────────
    #[error("negative quantity {0} passed to a capacity update")]
    NegativeQuantity(f64),

    #[error("insufficient capacity on node {node}: dimension {dim} would drop to {residual}")]
    InsufficientCapacity {
        node: NodeId,
        dim: usize,
        residual: f64,
    },

    // ── Key errors ────────────────────────────────────────────────────────
    #[error("request {0} already has a bid in this portfolio")]
    DuplicateBid(RequestId),

    #[error("bid from agent {got} added to a portfolio owned by bidder {expected}")]
    BidderMismatch { expected: AgentId, got: AgentId },

    #[error("bid references unknown request {0}")]
    UnknownRequest(RequestId),
}

impl ExchangeError {
    pub fn kind(&self) -> ErrorKind {
        use ExchangeError::*;
        match self {
            UnattachedNode(_) | AlreadyGrouped { .. } | DimensionMismatch { .. } => ErrorKind::State,
            NegativeQuantity(_) | InsufficientCapacity { .. } => ErrorKind::Value,
            DuplicateBid(_) | BidderMismatch { .. } | UnknownRequest(_) => ErrorKind::Key,
        }
    }
}

pub type ExchangeResult<T> = Result<T, ExchangeError>;
