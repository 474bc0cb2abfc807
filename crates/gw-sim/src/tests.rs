//! Integration tests for gw-sim.

use gw_core::{EngineConfig, GridCoord, Tick};
use gw_grid::DijkstraPlanner;
use gw_incident::{Scenario, ScenarioTable};
use gw_journey::JourneyPhase;

use crate::{Engine, EngineBuilder, EngineObserver, NoopObserver, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn c(x: i32, y: i32) -> GridCoord {
    GridCoord::new(x, y)
}

/// 9×9 grid, 500 ms ticks, spawning disabled, one step per tick.
fn quiet_config(max_ticks: u64) -> EngineConfig {
    EngineConfig {
        width: 9,
        height: 9,
        default_cost: 1.0,
        tick_duration_ms: 500,
        spawn_interval_ticks: 0,
        obstacle_duration_ticks: 32,
        advance_interval_ticks: 1,
        max_ticks,
        seed: 42,
    }
}

fn single_scenario_table(cost: u32) -> ScenarioTable {
    ScenarioTable::new(vec![Scenario {
        label: "Construction".to_string(),
        cost,
        icon: "🚧".to_string(),
    }])
    .unwrap()
}

fn quiet_engine(max_ticks: u64) -> Engine<DijkstraPlanner> {
    EngineBuilder::new(quiet_config(max_ticks), DijkstraPlanner)
        .build()
        .unwrap()
}

/// Records every observer callback as a `(tick, label)` pair.
#[derive(Default)]
struct Recorder {
    events: Vec<(u64, String)>,
}

impl Recorder {
    fn labels(&self) -> Vec<&str> {
        self.events.iter().map(|(_, l)| l.as_str()).collect()
    }

    fn count(&self, prefix: &str) -> usize {
        self.events.iter().filter(|(_, l)| l.starts_with(prefix)).count()
    }

    fn at_tick(&self, tick: u64) -> Vec<&str> {
        self.events
            .iter()
            .filter(|(t, _)| *t == tick)
            .map(|(_, l)| l.as_str())
            .collect()
    }
}

impl EngineObserver for Recorder {
    fn on_journey_started(&mut self, tick: Tick, route: &gw_grid::Route) {
        self.events.push((tick.0, format!("started len={}", route.len())));
    }
    fn on_route_updated(&mut self, tick: Tick, route: &gw_grid::Route) {
        self.events.push((tick.0, format!("replanned from={}", route.origin())));
    }
    fn on_obstacle_applied(
        &mut self,
        tick: Tick,
        obstacle: &gw_incident::Obstacle,
        scenario: Option<&Scenario>,
    ) {
        let label = scenario.map_or("manual", |s| s.label.as_str());
        self.events.push((tick.0, format!("applied {label} at={}", obstacle.at)));
    }
    fn on_obstacle_cleared(&mut self, tick: Tick, obstacle: &gw_incident::Obstacle) {
        self.events.push((tick.0, format!("cleared at={}", obstacle.at)));
    }
    fn on_moved(&mut self, tick: Tick, position: GridCoord, remaining: usize) {
        self.events.push((tick.0, format!("moved to={position} left={remaining}")));
    }
    fn on_arrived(&mut self, tick: Tick, position: GridCoord) {
        self.events.push((tick.0, format!("arrived at={position}")));
    }
    fn on_run_end(&mut self, tick: Tick, phase: JourneyPhase) {
        self.events.push((tick.0, format!("end phase={}", phase.as_str())));
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let engine = quiet_engine(100);
        assert_eq!(engine.grid.width(), 9);
        assert_eq!(engine.clock.current_tick, Tick::ZERO);
        assert_eq!(engine.tracker.phase(), JourneyPhase::Idle);
        assert!(engine.board.is_empty());
    }

    #[test]
    fn invalid_dimensions_surface_as_grid_error() {
        let mut config = quiet_config(100);
        config.width = 0;
        let result = EngineBuilder::new(config, DijkstraPlanner).build();
        assert!(matches!(result, Err(SimError::Grid(_))));
    }

    #[test]
    fn invalid_interval_surfaces_as_config_error() {
        let mut config = quiet_config(100);
        config.advance_interval_ticks = 0;
        let result = EngineBuilder::new(config, DijkstraPlanner).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn spawning_requires_scenarios() {
        let mut config = quiet_config(100);
        config.spawn_interval_ticks = 6;
        let result = EngineBuilder::new(config.clone(), DijkstraPlanner).build();
        assert!(matches!(result, Err(SimError::MissingScenarios)));

        let ok = EngineBuilder::new(config, DijkstraPlanner)
            .scenarios(single_scenario_table(4))
            .build();
        assert!(ok.is_ok());
    }

    #[test]
    fn scenarios_optional_without_spawning() {
        assert!(EngineBuilder::new(quiet_config(100), DijkstraPlanner).build().is_ok());
    }
}

// ── Basic runs ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod runs {
    use super::*;

    #[test]
    fn run_without_journey_exhausts_tick_budget() {
        let mut engine = quiet_engine(10);
        let phase = engine.run(&mut NoopObserver).unwrap();
        assert_eq!(phase, JourneyPhase::Idle);
        assert_eq!(engine.clock.current_tick, Tick(10));
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut engine = quiet_engine(100);
        engine.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(engine.clock.current_tick, Tick(5));
        engine.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(engine.clock.current_tick, Tick(8));
    }

    #[test]
    fn journey_arrives_after_one_step_per_tick() {
        let mut engine = quiet_engine(100);
        let mut rec = Recorder::default();
        engine.start_journey(c(0, 0), c(3, 0), &mut rec).unwrap();

        let phase = engine.run(&mut rec).unwrap();
        assert_eq!(phase, JourneyPhase::Arrived);

        // 3 route edges, advancing from tick 1: moved, moved, arrived.
        assert_eq!(
            rec.labels(),
            vec![
                "started len=3",
                "moved to=(1, 0) left=2",
                "moved to=(2, 0) left=1",
                "arrived at=(3, 0)",
                "end phase=arrived",
            ]
        );
        assert_eq!(engine.tracker.journey().unwrap().arrived_at, Some(Tick(3)));
    }

    #[test]
    fn advance_interval_paces_movement() {
        let mut config = quiet_config(100);
        config.advance_interval_ticks = 3;
        let mut engine = EngineBuilder::new(config, DijkstraPlanner).build().unwrap();
        engine.start_journey(c(0, 0), c(2, 0), &mut NoopObserver).unwrap();

        engine.run(&mut NoopObserver).unwrap();
        // Steps land on ticks 3 and 6.
        assert_eq!(engine.tracker.journey().unwrap().arrived_at, Some(Tick(6)));
    }

    #[test]
    fn run_stops_at_max_ticks_mid_journey() {
        let mut engine = quiet_engine(2);
        engine.start_journey(c(0, 0), c(8, 8), &mut NoopObserver).unwrap();
        let phase = engine.run(&mut NoopObserver).unwrap();
        assert_eq!(phase, JourneyPhase::InProgress);
        assert_eq!(engine.clock.current_tick, Tick(2));
    }

    #[test]
    fn trivial_journey_arrives_without_moving() {
        let mut engine = quiet_engine(100);
        let mut rec = Recorder::default();
        engine.start_journey(c(4, 4), c(4, 4), &mut rec).unwrap();
        let phase = engine.run(&mut rec).unwrap();
        assert_eq!(phase, JourneyPhase::Arrived);
        assert_eq!(rec.count("moved"), 0);
        assert_eq!(rec.count("arrived at=(4, 4)"), 1);
    }
}

// ── Manual obstacle passthroughs ──────────────────────────────────────────────

#[cfg(test)]
mod manual_obstacles {
    use super::*;

    #[test]
    fn apply_triggers_immediate_replan() {
        let mut engine = quiet_engine(100);
        let mut rec = Recorder::default();
        engine.start_journey(c(0, 0), c(8, 0), &mut rec).unwrap();

        engine.apply_obstacle(c(4, 0), 1000.0, 32, &mut rec).unwrap();
        assert_eq!(rec.count("applied manual"), 1);
        assert_eq!(rec.count("replanned"), 1);

        // The live route now dodges the blocked cell.
        let route = &engine.tracker.journey().unwrap().route;
        assert!(!route.cells.contains(&c(4, 0)));
    }

    #[test]
    fn apply_without_journey_skips_replan() {
        let mut engine = quiet_engine(100);
        let mut rec = Recorder::default();
        engine.apply_obstacle(c(4, 4), 10.0, 32, &mut rec).unwrap();
        assert_eq!(rec.count("applied"), 1);
        assert_eq!(rec.count("replanned"), 0);
        assert_eq!(engine.board.len(), 1);
    }

    #[test]
    fn revert_restores_and_replans() {
        let mut engine = quiet_engine(100);
        let mut rec = Recorder::default();
        engine.start_journey(c(0, 0), c(8, 0), &mut rec).unwrap();
        let straight = engine.tracker.journey().unwrap().route.total_cost;

        engine.apply_obstacle(c(4, 0), 1000.0, 32, &mut rec).unwrap();
        let detour = engine.tracker.journey().unwrap().route.total_cost;
        assert!(detour > straight);

        let cleared = engine.revert_obstacle(c(4, 0), &mut rec).unwrap();
        assert!(cleared.is_some());
        assert_eq!(rec.count("cleared"), 1);
        let restored = engine.tracker.journey().unwrap().route.total_cost;
        assert_eq!(restored, straight);
    }

    #[test]
    fn revert_is_idempotent_through_the_engine() {
        let mut engine = quiet_engine(100);
        engine.apply_obstacle(c(4, 4), 10.0, 32, &mut NoopObserver).unwrap();
        assert!(engine.revert_obstacle(c(4, 4), &mut NoopObserver).unwrap().is_some());
        assert!(engine.revert_obstacle(c(4, 4), &mut NoopObserver).unwrap().is_none());
        assert!(engine.board.is_empty());
    }

    #[test]
    fn obstacle_at_current_position_is_allowed() {
        let mut engine = quiet_engine(100);
        engine.start_journey(c(0, 0), c(8, 0), &mut NoopObserver).unwrap();

        // Prices the edges around the traveler without stranding it.
        engine.apply_obstacle(c(0, 0), 500.0, 32, &mut NoopObserver).unwrap();
        let journey = engine.tracker.journey().unwrap();
        assert_eq!(journey.position, c(0, 0));
        assert_eq!(journey.route.origin(), c(0, 0));
        assert!(journey.remaining_len() > 0);
    }
}

// ── Tick-loop obstacle lifecycle ──────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    fn spawning_config(spawn: u64, duration: u64, advance: u64, max: u64) -> EngineConfig {
        EngineConfig {
            spawn_interval_ticks: spawn,
            obstacle_duration_ticks: duration,
            advance_interval_ticks: advance,
            max_ticks: max,
            ..quiet_config(max)
        }
    }

    #[test]
    fn no_spawns_while_idle() {
        let config = spawning_config(2, 8, 1, 20);
        let mut engine = EngineBuilder::new(config, DijkstraPlanner)
            .scenarios(single_scenario_table(4))
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        engine.run_ticks(20, &mut rec).unwrap();
        assert_eq!(rec.count("applied"), 0);
        assert!(engine.board.is_empty());
    }

    #[test]
    fn spawns_on_interval_and_replans() {
        // Big advance interval: the traveler never moves, spawns keep coming.
        let config = spawning_config(2, 100, 1000, 9);
        let mut engine = EngineBuilder::new(config, DijkstraPlanner)
            .scenarios(single_scenario_table(4))
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        engine.start_journey(c(0, 0), c(8, 0), &mut rec).unwrap();
        engine.run_ticks(9, &mut rec).unwrap();

        // Spawn ticks: 2, 4, 6, 8.
        assert_eq!(rec.count("applied Construction"), 4);
        assert_eq!(rec.count("replanned"), 4);
        for tick in [2u64, 4, 6, 8] {
            let labels = rec.at_tick(tick);
            assert!(labels.iter().any(|l| l.starts_with("applied")), "tick {tick}");
            assert!(labels.iter().any(|l| l.starts_with("replanned")), "tick {tick}");
        }
    }

    #[test]
    fn spawned_obstacles_expire_on_schedule() {
        // Lifetime shorter than the spawn gap: each obstacle is gone before
        // the next appears, so spawns and clears pair up exactly.
        let config = spawning_config(5, 2, 1000, 23);
        let mut engine = EngineBuilder::new(config, DijkstraPlanner)
            .scenarios(single_scenario_table(4))
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        engine.start_journey(c(0, 0), c(8, 0), &mut rec).unwrap();
        engine.run_ticks(23, &mut rec).unwrap();

        // Spawns at 5, 10, 15, 20; clears 2 ticks after each.
        assert_eq!(rec.count("applied"), 4);
        assert_eq!(rec.count("cleared"), 4);
        let spawn_ticks: Vec<u64> = rec
            .events
            .iter()
            .filter(|(_, l)| l.starts_with("applied"))
            .map(|(t, _)| *t)
            .collect();
        let clear_ticks: Vec<u64> = rec
            .events
            .iter()
            .filter(|(_, l)| l.starts_with("cleared"))
            .map(|(t, _)| *t)
            .collect();
        assert_eq!(spawn_ticks, vec![5, 10, 15, 20]);
        assert_eq!(clear_ticks, vec![7, 12, 17, 22]);
    }

    #[test]
    fn same_tick_expiry_and_spawn_replan_once() {
        // Spawn every 4 ticks, lifetime 4 ticks: from tick 8 onward every
        // spawn tick also drains the previous obstacle.
        let config = spawning_config(4, 4, 1000, 13);
        let mut engine = EngineBuilder::new(config, DijkstraPlanner)
            .scenarios(single_scenario_table(4))
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        engine.start_journey(c(0, 0), c(8, 0), &mut rec).unwrap();
        engine.run_ticks(13, &mut rec).unwrap();

        let at_eight = rec.at_tick(8);
        assert!(at_eight.iter().any(|l| l.starts_with("cleared")));
        assert!(at_eight.iter().any(|l| l.starts_with("applied")));
        let replans = at_eight.iter().filter(|l| l.starts_with("replanned")).count();
        assert_eq!(replans, 1, "updates applied in order, then one replan");
    }

    #[test]
    fn expiry_keeps_firing_after_arrival() {
        let mut engine = quiet_engine(100);
        let mut rec = Recorder::default();

        engine.apply_obstacle(c(4, 4), 10.0, 6, &mut rec).unwrap();
        engine.start_journey(c(0, 0), c(1, 0), &mut rec).unwrap();
        engine.run_ticks(10, &mut rec).unwrap();

        // Arrived on tick 1; the obstacle still cleared at its tick-6 expiry.
        assert_eq!(rec.count("arrived"), 1);
        let cleared: Vec<_> = rec.events.iter().filter(|(_, l)| l.starts_with("cleared")).collect();
        assert_eq!(cleared.len(), 1);
        assert_eq!(cleared[0].0, 6);
        assert!(engine.board.is_empty());
    }

    #[test]
    fn arrival_stops_spawning() {
        let config = spawning_config(2, 100, 1, 40);
        let mut engine = EngineBuilder::new(config, DijkstraPlanner)
            .scenarios(single_scenario_table(2))
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        engine.start_journey(c(0, 0), c(1, 0), &mut rec).unwrap();
        engine.run_ticks(40, &mut rec).unwrap();

        // Arrived at tick 1, before the first spawn tick.
        assert_eq!(rec.count("arrived"), 1);
        assert_eq!(rec.count("applied"), 0);
    }

    #[test]
    fn new_journey_discards_queue_but_keeps_obstacles() {
        let mut engine = quiet_engine(100);
        let mut rec = Recorder::default();

        engine.start_journey(c(0, 0), c(8, 0), &mut rec).unwrap();
        engine.apply_obstacle(c(4, 4), 10.0, 50, &mut rec).unwrap();
        engine.run_ticks(2, &mut rec).unwrap();

        // Restart elsewhere: the old queue is gone, the obstacle is not.
        engine.start_journey(c(8, 8), c(0, 8), &mut rec).unwrap();
        assert_eq!(engine.tracker.journey().unwrap().origin, c(8, 8));
        assert_eq!(engine.board.len(), 1);
        assert!(engine.board.get(c(4, 4)).is_some());
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use super::*;

    fn eventful_run(seed: u64) -> Vec<(u64, String)> {
        let config = EngineConfig {
            spawn_interval_ticks: 3,
            obstacle_duration_ticks: 7,
            advance_interval_ticks: 2,
            seed,
            ..quiet_config(200)
        };
        let mut engine = EngineBuilder::new(config, DijkstraPlanner)
            .scenarios(single_scenario_table(6))
            .build()
            .unwrap();

        let mut rec = Recorder::default();
        engine.start_journey(c(1, 7), c(7, 1), &mut rec).unwrap();
        engine.run(&mut rec).unwrap();
        rec.events
    }

    #[test]
    fn same_seed_reproduces_the_whole_run() {
        assert_eq!(eventful_run(42), eventful_run(42));
    }

    #[test]
    fn different_seed_changes_the_run() {
        // Obstacle placement differs, so the event stream does too.
        assert_ne!(eventful_run(1), eventful_run(2));
    }

    #[test]
    fn eventful_run_still_arrives() {
        let events = eventful_run(42);
        let arrived = events.iter().filter(|(_, l)| l.starts_with("arrived")).count();
        assert_eq!(arrived, 1);
    }
}
