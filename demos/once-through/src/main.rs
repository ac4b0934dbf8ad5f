//! once-through — smallest end-to-end fcx scenario.
//!
//! One uranium mine (`Source`) feeds one reactor (`Sink`) for two simulated
//! years.  The mine can ship 3 t/month, the reactor wants 5 t/month, so the
//! market clears supply-limited at 3 t/month every tick.

use std::path::Path;

use anyhow::Result;

use fcx_core::Tick;
use fcx_exchange::Trade;
use fcx_output::{CsvWriter, SimOutputObserver};
use fcx_scenario::{build_sim, parse_str, ArchetypeRegistry};
use fcx_sim::SimObserver;

// ── Scenario ──────────────────────────────────────────────────────────────────

const SCENARIO: &str = r#"
<simulation>
  <control>
    <duration>24</duration>
    <startmonth>1</startmonth>
    <startyear>2030</startyear>
    <simhandle>once-through</simhandle>
  </control>

  <commodity><name>nat_u_fuel</name><solution_priority>1.0</solution_priority></commodity>

  <archetypes>
    <spec><name>NullRegion</name></spec>
    <spec><name>NullInst</name></spec>
    <spec><name>Source</name></spec>
    <spec><name>Sink</name></spec>
  </archetypes>

  <prototype><name>region</name><config><NullRegion/></config></prototype>
  <prototype><name>utility</name><config><NullInst/></config></prototype>
  <prototype>
    <name>mine</name>
    <config><Source>
      <commodity>nat_u_fuel</commodity>
      <recipe>nat_u</recipe>
      <throughput>3.0</throughput>
    </Source></config>
  </prototype>
  <prototype>
    <name>reactor</name>
    <config><Sink>
      <commodity>nat_u_fuel</commodity>
      <capacity>5.0</capacity>
    </Sink></config>
  </prototype>

  <agent><name>usa</name><prototype>region</prototype></agent>
  <agent><name>exelon</name><prototype>utility</prototype><parent>usa</parent></agent>
  <agent><name>mine_a</name><prototype>mine</prototype><parent>exelon</parent></agent>
  <agent><name>reactor_a</name><prototype>reactor</prototype><parent>exelon</parent></agent>

  <recipe>
    <name>nat_u</name>
    <basis>mass</basis>
    <nuclide><id>922350000</id><comp>0.00711</comp></nuclide>
    <nuclide><id>922380000</id><comp>0.99289</comp></nuclide>
  </recipe>
</simulation>
"#;

// ── Observer wrapper that also tallies totals ─────────────────────────────────

struct TallyObserver<W: fcx_output::OutputWriter> {
    inner: SimOutputObserver<W>,
    trades: usize,
    total_qty: f64,
}

impl<W: fcx_output::OutputWriter> TallyObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self {
            inner,
            trades: 0,
            total_qty: 0.0,
        }
    }
}

impl<W: fcx_output::OutputWriter> SimObserver for TallyObserver<W> {
    fn on_trades(&mut self, tick: Tick, trades: &[Trade]) {
        self.trades += trades.len();
        self.total_qty += trades.iter().map(|t| t.qty).sum::<f64>();
        self.inner.on_trades(tick, trades);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== once-through — fcx fuel-cycle simulator ===");

    let scenario = parse_str(SCENARIO)?;
    println!(
        "Scenario: {} months from {}-{:02}, {} agents",
        scenario.control.duration,
        scenario.control.start_year,
        scenario.control.start_month,
        scenario.agents.len()
    );

    let registry = ArchetypeRegistry::with_defaults();
    let mut sim = build_sim(&scenario, &registry)?;

    std::fs::create_dir_all("output/once-through")?;
    let writer = CsvWriter::new(Path::new("output/once-through"))?;
    let mut obs = TallyObserver::new(SimOutputObserver::new(writer));

    sim.run(&mut obs)?;

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    let (year, month) = sim.clock.date();
    println!("Simulation complete at {year}-{month:02}");
    println!("  trades executed : {}", obs.trades);
    println!("  total shipped   : {:.1} t", obs.total_qty);
    println!("  ledger          : output/once-through/trades.csv");

    Ok(())
}
