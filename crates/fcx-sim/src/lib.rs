//! `fcx-sim` — the timestep orchestrator.
//!
//! # Four-phase tick loop
//!
//! ```text
//! for tick in 0..config.duration:
//!   ① Lifecycle — agents whose enter tick has arrived are active; agents
//!                 past their lifetime are not.
//!   ② Tick      — Trader::tick for every active agent.
//!   ③ Exchange  — gather request portfolios into an ExchangeContext,
//!                 gather bid portfolios, translate, match, back-translate,
//!                 then execute each trade (bidder offer → requester accept).
//!   ④ Tock      — Trader::tock for every active agent.
//! ```
//!
//! Exactly one exchange resolution runs per tick and the graph built for it
//! is dropped before the tick ends.  Any core error aborts the run and
//! surfaces to the caller — the simulator performs no partial recovery.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fcx_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config, roster)
//!     .priorities(priorities)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
