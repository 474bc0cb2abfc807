//! Engine observer trait for progress reporting and data collection.
//!
//! The engine has no rendering dependency: everything a renderer draws —
//! the route, the traveler's position, obstacle pins, the arrival banner —
//! flows out through these hooks.

use gw_core::{GridCoord, Tick};
use gw_grid::Route;
use gw_incident::{Obstacle, Scenario};
use gw_journey::JourneyPhase;

/// Callbacks invoked by [`Engine`][crate::Engine] at key points in the tick
/// loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — arrival banner
///
/// ```rust,ignore
/// struct Banner;
///
/// impl EngineObserver for Banner {
///     fn on_arrived(&mut self, tick: Tick, at: GridCoord) {
///         println!("[{tick}] You've arrived at your destination ({at})");
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A journey was started; `route` is the initial plan.
    fn on_journey_started(&mut self, _tick: Tick, _route: &Route) {}

    /// Costs changed and the route was replanned; `route` replaces any
    /// previous plan wholesale.
    fn on_route_updated(&mut self, _tick: Tick, _route: &Route) {}

    /// An obstacle was placed.  `scenario` is `Some` for spawned incidents
    /// and `None` for manual `apply_obstacle` calls.
    fn on_obstacle_applied(&mut self, _tick: Tick, _obstacle: &Obstacle, _scenario: Option<&Scenario>) {}

    /// An obstacle's costs were reverted (expiry or manual revert).
    fn on_obstacle_cleared(&mut self, _tick: Tick, _obstacle: &Obstacle) {}

    /// The traveler reached `position`; `remaining` cells are still ahead.
    fn on_moved(&mut self, _tick: Tick, _position: GridCoord, _remaining: usize) {}

    /// The traveler reached the destination.  Fires exactly once per journey.
    fn on_arrived(&mut self, _tick: Tick, _position: GridCoord) {}

    /// Called at the end of each tick with the journey phase after it.
    fn on_tick_end(&mut self, _tick: Tick, _phase: JourneyPhase) {}

    /// Called once when `run()` stops (arrival or tick budget).
    fn on_run_end(&mut self, _final_tick: Tick, _phase: JourneyPhase) {}
}

/// An [`EngineObserver`] that does nothing.  Use when you need to call
/// `run` but don't want progress callbacks.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
