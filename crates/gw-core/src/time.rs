//! Engine time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to wall-clock time is held in `TickClock`:
//!
//!   elapsed_ms = tick * tick_duration_ms
//!
//! Using an integer tick as the canonical time unit means all interval
//! arithmetic (obstacle expiry, spawn cadence, traveler movement) is exact
//! and comparisons are O(1).  The engine itself never sleeps; an external
//! driver — a render loop, a test harness — calls `tick()` at whatever pace
//! the tick duration is meant to represent.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute engine tick counter.
///
/// Stored as `u64` to avoid overflow: at 500 ms per tick a u64 lasts ~290
/// billion years, far longer than any conceivable run.
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

// ── TickClock ─────────────────────────────────────────────────────────────────

/// Converts between tick counts and elapsed milliseconds.
///
/// `TickClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickClock {
    /// How many milliseconds one tick represents.  Default: 500.
    pub tick_duration_ms: u32,
    /// The current tick — advanced by `TickClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl TickClock {
    /// Create a clock at tick zero with the given resolution.
    pub fn new(tick_duration_ms: u32) -> Self {
        Self {
            tick_duration_ms,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed milliseconds since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0 * self.tick_duration_ms as u64
    }

    /// Elapsed whole seconds since tick 0 (truncated).
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ms() / 1_000
    }

    // ── Tick-count helpers ────────────────────────────────────────────────

    /// How many ticks span `ms` milliseconds? (rounds up — events never fire early)
    #[inline]
    pub fn ticks_for_ms(&self, ms: u64) -> u64 {
        ms.div_ceil(self.tick_duration_ms as u64)
    }

    #[inline]
    pub fn ticks_for_secs(&self, secs: u64) -> u64 {
        self.ticks_for_ms(secs * 1_000)
    }
}

impl fmt::Display for TickClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.elapsed_ms();
        write!(f, "{} ({}.{:01} s)", self.current_tick, ms / 1_000, (ms % 1_000) / 100)
    }
}

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Top-level engine configuration.
///
/// Plain parameters, not a config framework: the original knobs are grid
/// dimensions, default edge cost, obstacle spawn interval, obstacle duration,
/// and traveler movement cadence, all expressed in ticks.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Grid width in cells.  Must be positive (checked at grid build time).
    pub width: i32,

    /// Grid height in cells.  Must be positive (checked at grid build time).
    pub height: i32,

    /// Edge weight every adjacent pair starts with (and reverts to).
    pub default_cost: f32,

    /// Milliseconds per tick.  Display-only; interval arithmetic stays in ticks.
    pub tick_duration_ms: u32,

    /// Spawn a random obstacle every N ticks while a journey is in progress.
    /// 0 disables spawning entirely.
    pub spawn_interval_ticks: u64,

    /// How many ticks a spawned obstacle lasts before its costs revert.
    pub obstacle_duration_ticks: u64,

    /// Advance the traveler one cell every N ticks.
    pub advance_interval_ticks: u64,

    /// Hard stop for `run()` — the engine never drives past this tick.
    pub max_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl EngineConfig {
    /// Check interval and clock parameters.
    ///
    /// Grid dimensions and the default cost are validated by the grid
    /// constructor, which owns those rules; this only covers the knobs the
    /// engine consumes directly.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_duration_ms == 0 {
            return Err(CoreError::Config("tick_duration_ms must be positive".into()));
        }
        if self.advance_interval_ticks == 0 {
            return Err(CoreError::Config("advance_interval_ticks must be positive".into()));
        }
        if self.spawn_interval_ticks > 0 && self.obstacle_duration_ticks == 0 {
            return Err(CoreError::Config(
                "obstacle_duration_ticks must be positive when spawning is enabled".into(),
            ));
        }
        if self.max_ticks == 0 {
            return Err(CoreError::Config("max_ticks must be positive".into()));
        }
        Ok(())
    }

    /// The tick at which `run()` gives up (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }

    /// Construct a `TickClock` pre-configured for this run.
    pub fn make_clock(&self) -> TickClock {
        TickClock::new(self.tick_duration_ms)
    }
}
