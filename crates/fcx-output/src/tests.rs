//! Writer and observer tests (against temp directories).

use fcx_core::{AgentId, Tick};
use fcx_exchange::Trade;
use fcx_sim::SimObserver;

use crate::{
    CsvWriter, OutputWriter, SimOutputObserver, TickSummaryRow, TradeRow,
};

fn trade_row(tick: u64, qty: f64) -> TradeRow {
    TradeRow {
        tick,
        requester: 1,
        bidder: 2,
        commodity: "fuel".to_owned(),
        qty,
    }
}

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn writes_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trades(&[trade_row(0, 3.0), trade_row(0, 1.5)]).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick: 0,
            trade_count: 2,
            total_qty: 4.5,
        })
        .unwrap();
        w.finish().unwrap();

        let trades = std::fs::read_to_string(dir.path().join("trades.csv")).unwrap();
        let mut lines = trades.lines();
        assert_eq!(lines.next(), Some("tick,requester,bidder,commodity,qty"));
        assert_eq!(lines.next(), Some("0,1,2,fuel,3"));
        assert_eq!(lines.next(), Some("0,1,2,fuel,1.5"));

        let summaries = std::fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        assert!(summaries.contains("0,2,4.5"));
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use super::*;

    fn trade(qty: f64) -> Trade {
        Trade {
            requester: AgentId(1),
            bidder: AgentId(2),
            commodity: "fuel".into(),
            qty,
        }
    }

    #[test]
    fn observer_writes_ledger_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);

        obs.on_trades(Tick(0), &[trade(3.0)]);
        obs.on_trades(Tick(1), &[]);
        obs.on_sim_end(Tick(2));
        assert!(obs.take_error().is_none());

        let trades = std::fs::read_to_string(dir.path().join("trades.csv")).unwrap();
        assert_eq!(trades.lines().count(), 2, "header plus one trade");

        let summaries = std::fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
        // Header plus one summary per tick, including the tradeless tick.
        assert_eq!(summaries.lines().count(), 3);
        assert!(summaries.contains("1,0,0"));
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::SqliteWriter;

    #[test]
    fn writes_queryable_tables() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_trades(&[trade_row(0, 3.0), trade_row(1, 2.0)]).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick: 0,
            trade_count: 1,
            total_qty: 3.0,
        })
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM trades", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);
        let total: f64 = conn
            .query_row("SELECT SUM(qty) FROM trades", [], |r| r.get(0))
            .unwrap();
        assert_eq!(total, 5.0);
    }
}

#[cfg(all(test, feature = "parquet"))]
mod parquet_tests {
    use super::*;
    use crate::ParquetWriter;

    #[test]
    fn produces_readable_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_trades(&[trade_row(0, 3.0)]).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick: 0,
            trade_count: 1,
            total_qty: 3.0,
        })
        .unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("trades.parquet")).unwrap();
        let reader = parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder::try_new(file)
            .unwrap()
            .build()
            .unwrap();
        let rows: usize = reader.map(|b| b.unwrap().num_rows()).sum();
        assert_eq!(rows, 1);
    }
}
