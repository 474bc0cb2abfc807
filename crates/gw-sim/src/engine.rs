//! The `Engine` struct and its tick loop.

use log::info;

use gw_core::{EngineConfig, GridCoord, SimRng, Tick, TickClock};
use gw_grid::{Grid, Planner};
use gw_incident::{Obstacle, ObstacleBoard, ScenarioTable, pick_spawn_cell};
use gw_journey::{Advance, JourneyPhase, JourneyTracker};

use crate::{EngineObserver, SimResult};

/// The navigation engine.
///
/// `Engine<P>` is the single logical owner of grid, obstacle, and journey
/// state — the `&mut self` methods are what make cost writes and planner
/// reads mutually exclusive.  It performs no sleeping and no scheduling:
/// an external driver calls [`tick`](Self::tick) (or [`run`](Self::run))
/// at whatever cadence a tick represents.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine<P: Planner> {
    /// Global configuration (intervals, tick budget, seed, …).
    pub config: EngineConfig,

    /// Engine clock — tracks the current tick and maps to elapsed time.
    pub clock: TickClock,

    /// The weighted grid all components share.
    pub grid: Grid,

    /// Incident catalogue sampled at spawn time.  `None` only when
    /// spawning is disabled (`spawn_interval_ticks == 0`).
    pub scenarios: Option<ScenarioTable>,

    /// Active obstacles and their expiry queue.
    pub board: ObstacleBoard,

    /// The traveler.
    pub tracker: JourneyTracker<P>,

    /// Deterministic RNG for scenario sampling and spawn placement.
    pub(crate) rng: SimRng,
}

impl<P: Planner> Engine<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Start a journey, discarding any previous one.
    ///
    /// Obstacles already on the grid stay in force and their expiries keep
    /// their schedule — incidents are grid-global, not journey-scoped.
    pub fn start_journey<O: EngineObserver>(
        &mut self,
        origin:      GridCoord,
        destination: GridCoord,
        observer:    &mut O,
    ) -> SimResult<()> {
        let now = self.clock.current_tick;
        let journey = self.tracker.start(&self.grid, origin, destination, now)?;
        info!("journey {origin} -> {destination} started at {now}");
        observer.on_journey_started(now, &journey.route);
        Ok(())
    }

    /// Place an obstacle by hand (the tutorial's editable `changeCost`).
    ///
    /// Replans immediately if a journey is in progress, like any other cost
    /// change.
    pub fn apply_obstacle<O: EngineObserver>(
        &mut self,
        at:             GridCoord,
        cost:           f32,
        duration_ticks: u64,
        observer:       &mut O,
    ) -> SimResult<Obstacle> {
        let now = self.clock.current_tick;
        let obstacle = self.board.apply(&mut self.grid, at, cost, now, duration_ticks)?;
        observer.on_obstacle_applied(now, &obstacle, None);
        self.replan_live(observer)?;
        Ok(obstacle)
    }

    /// Revert an obstacle by hand, ahead of its schedule.  Idempotent.
    pub fn revert_obstacle<O: EngineObserver>(
        &mut self,
        at:       GridCoord,
        observer: &mut O,
    ) -> SimResult<Option<Obstacle>> {
        let now = self.clock.current_tick;
        let cleared = self.board.revert(&mut self.grid, at)?;
        if let Some(ob) = cleared {
            observer.on_obstacle_cleared(now, &ob);
        }
        self.replan_live(observer)?;
        Ok(cleared)
    }

    /// Drive ticks until the traveler arrives or the tick budget runs out.
    ///
    /// Returns the final journey phase.
    pub fn run<O: EngineObserver>(&mut self, observer: &mut O) -> SimResult<JourneyPhase> {
        while self.clock.current_tick < self.config.end_tick() {
            let phase = self.tick(observer)?;
            if phase == JourneyPhase::Arrived {
                break;
            }
        }
        let phase = self.tracker.phase();
        observer.on_run_end(self.clock.current_tick, phase);
        Ok(phase)
    }

    /// Run exactly `n` ticks from the current position (ignores arrival and
    /// the tick budget).  Useful for tests and incremental stepping.
    pub fn run_ticks<O: EngineObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<JourneyPhase> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(self.tracker.phase())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// One cooperative step.  See the crate docs for the phase order.
    pub fn tick<O: EngineObserver>(&mut self, observer: &mut O) -> SimResult<JourneyPhase> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        // ── Phase 1: expire due obstacles ─────────────────────────────────
        //
        // Runs unconditionally: obstacles outlive journeys, and an expiry
        // scheduled during a finished journey still fires.
        let cleared = self.board.expire_due(&mut self.grid, now)?;
        for ob in &cleared {
            observer.on_obstacle_cleared(now, ob);
        }
        let mut costs_changed = !cleared.is_empty();

        // ── Phase 2: spawn a random obstacle ──────────────────────────────
        if self.spawn_due(now) {
            // Scenario table presence is validated at build time whenever
            // spawning is enabled.
            if let Some(table) = &self.scenarios {
                let scenario = table.sample(&mut self.rng);
                let remaining = self.tracker.remaining_cells();
                let at = pick_spawn_cell(&mut self.rng, &self.grid, &remaining);
                let obstacle = self.board.apply(
                    &mut self.grid,
                    at,
                    scenario.cost as f32,
                    now,
                    self.config.obstacle_duration_ticks,
                )?;
                observer.on_obstacle_applied(now, &obstacle, Some(scenario));
                costs_changed = true;
            }
        }

        // ── Phase 3: replan once after all cost changes ───────────────────
        if costs_changed {
            self.replan_live(observer)?;
        }

        // ── Phase 4: advance the traveler ─────────────────────────────────
        if interval_due(now, self.config.advance_interval_ticks) {
            match self.tracker.advance(now) {
                Advance::Moved(position) => {
                    let remaining = self.tracker.journey().map_or(0, |j| j.remaining_len());
                    observer.on_moved(now, position, remaining);
                }
                Advance::Arrived(position) => {
                    info!("arrived at {position} at {now}");
                    observer.on_arrived(now, position);
                }
                Advance::Idle => {}
            }
        }

        observer.on_tick_end(now, self.tracker.phase());
        self.clock.advance();
        Ok(self.tracker.phase())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Replan the live journey after a cost change and report the new route.
    /// No-op when idle or arrived.
    fn replan_live<O: EngineObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        if let Some(route) = self.tracker.replan(&self.grid)? {
            observer.on_route_updated(now, route);
        }
        Ok(())
    }

    /// Spawning happens while a journey is in progress, every
    /// `spawn_interval_ticks`.  Arrival stops the spawner; expiry keeps
    /// running.
    fn spawn_due(&self, now: Tick) -> bool {
        self.tracker.phase() == JourneyPhase::InProgress
            && interval_due(now, self.config.spawn_interval_ticks)
    }
}

/// `true` on every `interval`-th tick after tick 0.  Interval 0 disables.
#[inline]
fn interval_due(now: Tick, interval: u64) -> bool {
    interval > 0 && now.0 > 0 && now.0.is_multiple_of(interval)
}
