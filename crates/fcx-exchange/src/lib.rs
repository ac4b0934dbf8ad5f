//! `fcx-exchange` — the dynamic resource exchange (DRE).
//!
//! Once per timestep the simulator collects request and bid portfolios from
//! every trading facility, pairs them into a bipartite graph, and assigns
//! flows greedily under multidimensional capacity constraints:
//!
//! ```text
//! ① Gather    — facilities submit RequestPortfolios; bidders answer the
//!               live demand in an ExchangeContext with BidPortfolios.
//! ② Translate — ExchangeTranslator builds an ExchangeGraph: one request
//!               set per request portfolio (priority-ordered), one supply
//!               set per bid portfolio, one arc per (request, bid) pair.
//! ③ Match     — GreedyMatcher walks the graph in insertion order and
//!               appends (arc, qty) matches, debiting residual capacity
//!               through the capacity engine.
//! ④ Emit      — the translator maps the match log back to Trade records.
//! ```
//!
//! # Module map
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`graph`]      | `ExchangeGraph` arena: nodes, node sets, arcs, match log |
//! | [`capacity`]   | Residual-capacity queries and updates                |
//! | [`matcher`]    | `Matcher` trait and the greedy implementation        |
//! | [`constraint`] | `CapacityConstraint` and the `Converter` trait       |
//! | [`request`]    | `Request`, `RequestPortfolio`                        |
//! | [`bid`]        | `Bid`, `BidPortfolio`                                |
//! | [`context`]    | `ExchangeContext` — the per-tick request registry    |
//! | [`translator`] | Portfolios → graph → trades                          |
//! | [`trade`]      | The `Trade` record handed back to the simulator      |
//!
//! # Ordering as contract
//!
//! The match log is deterministic: request sets are visited in insertion
//! order, member nodes in insertion order, arcs in [`ExchangeGraph::add_arc`]
//! order.  The translator encodes commodity solution priority and request
//! preference purely by choosing that insertion order, so reproducing a run
//! only requires reproducing its inputs.

pub mod bid;
pub mod capacity;
pub mod constraint;
pub mod context;
pub mod error;
pub mod graph;
pub mod matcher;
pub mod request;
pub mod trade;
pub mod translator;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bid::{Bid, BidPortfolio};
pub use constraint::{CapacityConstraint, Converter, TrivialConverter};
pub use context::ExchangeContext;
pub use error::{ErrorKind, ExchangeError, ExchangeResult};
pub use graph::{Arc, ExchangeGraph, Match, Node, NodeSet};
pub use matcher::{GreedyMatcher, Matcher};
pub use request::{Request, RequestPortfolio};
pub use trade::Trade;
pub use translator::ExchangeTranslator;
