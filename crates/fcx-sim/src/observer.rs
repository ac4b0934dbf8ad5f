//! Simulation observer trait for progress reporting and data collection.

use fcx_core::Tick;
use fcx_exchange::Trade;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The matcher itself has no logging
/// dependency — everything observable flows through these hooks.
///
/// # Example — trade printer
///
/// ```rust,ignore
/// struct TradePrinter;
///
/// impl SimObserver for TradePrinter {
///     fn on_trades(&mut self, tick: Tick, trades: &[Trade]) {
///         for t in trades {
///             println!("{tick}: {} -> {} {} x{}", t.bidder, t.requester, t.commodity, t.qty);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per tick with the tick's full trade ledger, in match
    /// order.  Called even when no trades occurred (empty slice).
    fn on_trades(&mut self, _tick: Tick, _trades: &[Trade]) {}

    /// Called at the end of each tick with the number of trades executed.
    fn on_tick_end(&mut self, _tick: Tick, _trade_count: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
