//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trades.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, TickSummaryRow, TradeRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    trades: Writer<File>,
    summaries: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trades = Writer::from_path(dir.join("trades.csv"))?;
        trades.write_record(["tick", "requester", "bidder", "commodity", "qty"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "trade_count", "total_qty"])?;

        Ok(Self {
            trades,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trades(&mut self, rows: &[TradeRow]) -> OutputResult<()> {
        for row in rows {
            self.trades.write_record(&[
                row.tick.to_string(),
                row.requester.to_string(),
                row.bidder.to_string(),
                row.commodity.clone(),
                row.qty.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.trade_count.to_string(),
            row.total_qty.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trades.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
