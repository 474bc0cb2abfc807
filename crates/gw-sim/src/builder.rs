//! Fluent builder for constructing an [`Engine`].

use gw_core::{EngineConfig, SimRng};
use gw_grid::{Grid, Planner};
use gw_incident::{ObstacleBoard, ScenarioTable};
use gw_journey::JourneyTracker;

use crate::{Engine, SimError, SimResult};

/// Fluent builder for [`Engine<P>`].
///
/// # Required inputs
///
/// - [`EngineConfig`] — dimensions, intervals, tick budget, seed
/// - `P: Planner` — the planning algorithm (e.g. [`gw_grid::DijkstraPlanner`])
///
/// # Optional inputs
///
/// | Method           | Default                                            |
/// |------------------|----------------------------------------------------|
/// | `.scenarios(t)`  | None — required iff `spawn_interval_ticks > 0`     |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(config, DijkstraPlanner)
///     .scenarios(table)
///     .build()?;
/// ```
pub struct EngineBuilder<P: Planner> {
    config:    EngineConfig,
    planner:   P,
    scenarios: Option<ScenarioTable>,
}

impl<P: Planner> EngineBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(config: EngineConfig, planner: P) -> Self {
        Self {
            config,
            planner,
            scenarios: None,
        }
    }

    /// Supply the incident catalogue the spawner samples from.
    ///
    /// Required when `spawn_interval_ticks > 0`; pointless (but harmless)
    /// otherwise.
    pub fn scenarios(mut self, scenarios: ScenarioTable) -> Self {
        self.scenarios = Some(scenarios);
        self
    }

    /// Validate inputs, build the grid and clock, and return a ready
    /// [`Engine`] at tick 0 with no journey and no obstacles.
    pub fn build(self) -> SimResult<Engine<P>> {
        self.config.validate()?;
        if self.config.spawn_interval_ticks > 0 && self.scenarios.is_none() {
            return Err(SimError::MissingScenarios);
        }

        // The grid constructor owns the dimension and default-cost rules.
        let grid = Grid::with_default_cost(
            self.config.width,
            self.config.height,
            self.config.default_cost,
        )?;

        let rng = SimRng::new(self.config.seed);

        Ok(Engine {
            clock:     self.config.make_clock(),
            config:    self.config,
            grid,
            scenarios: self.scenarios,
            board:     ObstacleBoard::new(),
            tracker:   JourneyTracker::new(self.planner),
            rng,
        })
    }
}
