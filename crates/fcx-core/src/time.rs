//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter, one tick
//! per simulated month.  The mapping to calendar dates is held in `SimClock`:
//!
//!   (year, month) = start_year/start_month + tick months
//!
//! Using an integer tick as the canonical time unit means all schedule
//! arithmetic is exact and comparisons are O(1).  Facilities that care about
//! calendar dates (seasonal demand, reporting) convert through the clock;
//! everything else counts ticks.

use std::fmt;
use std::str::FromStr;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter (one tick = one month).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and calendar (year, month) pairs.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Calendar month (1–12) of tick 0.
    pub start_month: u32,
    /// Calendar year of tick 0.
    pub start_year: i32,
    /// The current tick — advanced by `SimClock::advance()` each timestep.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock starting at `start_year`-`start_month`.
    pub fn new(start_month: u32, start_year: i32) -> Self {
        Self {
            start_month,
            start_year,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Calendar (year, month) corresponding to `current_tick`.
    pub fn date(&self) -> (i32, u32) {
        self.date_at(self.current_tick)
    }

    /// Calendar (year, month) corresponding to an arbitrary tick.
    pub fn date_at(&self, tick: Tick) -> (i32, u32) {
        let months = (self.start_month as u64 - 1) + tick.0;
        let year = self.start_year + (months / 12) as i32;
        let month = (months % 12) as u32 + 1;
        (year, month)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m) = self.date();
        write!(f, "{} ({y}-{m:02})", self.current_tick)
    }
}

// ── DecayMode ─────────────────────────────────────────────────────────────────

/// When radioactive decay is applied to material inventories.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecayMode {
    /// Compositions are never decayed.
    #[default]
    Never,
    /// Facilities trigger decay explicitly.
    Manual,
    /// Compositions decay on observation.
    Lazy,
}

impl FromStr for DecayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "never" => Ok(DecayMode::Never),
            "manual" => Ok(DecayMode::Manual),
            "lazy" => Ok(DecayMode::Lazy),
            other => Err(format!(
                "invalid decay mode {other:?}: expected \"never\", \"manual\", or \"lazy\""
            )),
        }
    }
}

impl fmt::Display for DecayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecayMode::Never => "never",
            DecayMode::Manual => "manual",
            DecayMode::Lazy => "lazy",
        };
        f.write_str(s)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically populated from a scenario file's `control` block and passed to
/// the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks (months) to simulate.
    pub duration: u64,

    /// Calendar month (1–12) of the first tick.
    pub start_month: u32,

    /// Calendar year of the first tick.
    pub start_year: i32,

    /// Free-form run label carried into output.  `None` for unlabeled runs.
    pub handle: Option<String>,

    /// Decay handling for material compositions.
    pub decay: DecayMode,

    /// Write summary output every N ticks.  1 = every tick.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.duration)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_month, self.start_year)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            duration: 0,
            start_month: 1,
            start_year: 2000,
            handle: None,
            decay: DecayMode::Never,
            output_interval_ticks: 1,
        }
    }
}
