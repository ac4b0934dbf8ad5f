//! `fcx-agent` — the agent hierarchy and the trading seam.
//!
//! Agents form a region → institution → facility tree.  Only facilities
//! trade; regions and institutions exist for grouping, deployment, and
//! reporting.  The [`Trader`] trait is the main extension point — archetypes
//! implement it to publish demand ([`Trader::request_portfolios`]), answer
//! demand ([`Trader::bid_portfolios`]), and move resources when trades
//! execute ([`Trader::offer`] / [`Trader::accept`]).
//!
//! # Provided archetypes
//!
//! | Type          | Behavior                                              |
//! |---------------|-------------------------------------------------------|
//! | [`NullTrader`]| Does nothing.  Used for regions and institutions.     |
//! | [`Source`]    | Offers a recipe'd material, up to a per-tick throughput |
//! | [`Sink`]      | Requests a commodity up to a per-tick capacity        |

pub mod error;
pub mod null;
pub mod roster;
pub mod sink;
pub mod source;
pub mod trader;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AgentError, AgentResult};
pub use null::NullTrader;
pub use roster::{AgentKind, AgentMeta, AgentRoster};
pub use sink::Sink;
pub use source::Source;
pub use trader::{TickContext, Trader};
