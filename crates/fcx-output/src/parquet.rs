//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `trades.parquet`
//! - `tick_summaries.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Builder, StringBuilder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{OutputResult, TickSummaryRow, TradeRow};

fn trade_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick", DataType::UInt64, false),
        Field::new("requester", DataType::UInt32, false),
        Field::new("bidder", DataType::UInt32, false),
        Field::new("commodity", DataType::Utf8, false),
        Field::new("qty", DataType::Float64, false),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick", DataType::UInt64, false),
        Field::new("trade_count", DataType::UInt64, false),
        Field::new("total_qty", DataType::Float64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes simulation output to two Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    trades: Option<ArrowWriter<File>>,
    summaries: Option<ArrowWriter<File>>,
    trade_schema: Arc<Schema>,
    summ_schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let trade_schema = trade_schema();
        let summ_schema = summary_schema();

        let trade_file = File::create(dir.join("trades.parquet"))?;
        let trades = ArrowWriter::try_new(
            trade_file,
            Arc::clone(&trade_schema),
            Some(snappy_props()),
        )?;

        let summ_file = File::create(dir.join("tick_summaries.parquet"))?;
        let summaries = ArrowWriter::try_new(
            summ_file,
            Arc::clone(&summ_schema),
            Some(snappy_props()),
        )?;

        Ok(Self {
            trades: Some(trades),
            summaries: Some(summaries),
            trade_schema,
            summ_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_trades(&mut self, rows: &[TradeRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.trades.as_mut() else {
            return Ok(());
        };

        let mut ticks = UInt64Builder::new();
        let mut requesters = UInt32Builder::new();
        let mut bidders = UInt32Builder::new();
        let mut commodities = StringBuilder::new();
        let mut qtys = Float64Builder::new();

        for row in rows {
            ticks.append_value(row.tick);
            requesters.append_value(row.requester);
            bidders.append_value(row.bidder);
            commodities.append_value(&row.commodity);
            qtys.append_value(row.qty);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.trade_schema),
            vec![
                Arc::new(ticks.finish()),
                Arc::new(requesters.finish()),
                Arc::new(bidders.finish()),
                Arc::new(commodities.finish()),
                Arc::new(qtys.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        let Some(writer) = self.summaries.as_mut() else {
            return Ok(());
        };

        let mut ticks = UInt64Builder::new();
        let mut counts = UInt64Builder::new();
        let mut totals = Float64Builder::new();

        ticks.append_value(row.tick);
        counts.append_value(row.trade_count);
        totals.append_value(row.total_qty);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.summ_schema),
            vec![
                Arc::new(ticks.finish()),
                Arc::new(counts.finish()),
                Arc::new(totals.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.trades.take() {
            w.close()?;
        }
        if let Some(w) = self.summaries.take() {
            w.close()?;
        }
        Ok(())
    }
}
