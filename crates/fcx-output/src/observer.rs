//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use fcx_core::Tick;
use fcx_exchange::Trade;
use fcx_sim::SimObserver;

use crate::row::{TickSummaryRow, TradeRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes trade ledgers and tick summaries to any
/// [`OutputWriter`] backend (CSV, SQLite, Parquet, …).
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_trades(&mut self, tick: Tick, trades: &[Trade]) {
        let rows: Vec<TradeRow> = trades
            .iter()
            .map(|t| TradeRow {
                tick: tick.0,
                requester: t.requester.0,
                bidder: t.bidder.0,
                commodity: t.commodity.as_str().to_owned(),
                qty: t.qty,
            })
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_trades(&rows);
            self.store_err(result);
        }

        let summary = TickSummaryRow {
            tick: tick.0,
            trade_count: trades.len() as u64,
            total_qty: trades.iter().map(|t| t.qty).sum(),
        };
        let result = self.writer.write_tick_summary(&summary);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
