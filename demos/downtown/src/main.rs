//! downtown — full example for the gridway engine.
//!
//! A traveler crosses a 9×9 downtown map between two named places while
//! random traffic incidents land on the road ahead, raise costs for a few
//! seconds, and force reroutes.  Everything a renderer would draw — routes,
//! moves, incidents, the arrival — is printed to the terminal and logged to
//! CSV through the observer seam.

mod places;

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;

use gw_core::{EngineConfig, GridCoord, Tick};
use gw_grid::{DijkstraPlanner, Route};
use gw_incident::{Obstacle, Scenario, load_scenarios_reader};
use gw_journey::JourneyPhase;
use gw_output::{CsvWriter, EngineOutputObserver, OutputWriter};
use gw_sim::{EngineBuilder, EngineObserver};

use places::{PLACES, resolve_query};

// ── Constants ─────────────────────────────────────────────────────────────────

/// The routing query for this map.  The list of places is in `places.rs`.
const QUERY: &str = "Cafe from Library";

const WIDTH:  i32 = 9;
const HEIGHT: i32 = 9;
const SEED:   u64 = 42;

/// One tick represents half a second of map time.
const TICK_DURATION_MS: u32 = 500;

/// Milliseconds between new incidents (3 s).
const NEW_OBSTACLE_MS: u64 = 3_000;
/// Milliseconds an incident lasts before its costs revert (16 s).
const OBSTACLE_DURATION_MS: u64 = 16_000;
/// Milliseconds per traveler step (1.5 s).
const MOVE_INTERVAL_MS: u64 = 1_500;

const MAX_TICKS: u64 = 2_000;

// ── Scenario table ────────────────────────────────────────────────────────────

/// The incidents that can land on the map, with the cost each writes onto
/// the edges around its cell.  "Road closed" is expensive, not impassable.
const SCENARIO_CSV: &str = "\
label,cost,icon
Heavy traffic,4,🚦
Ambulance,2,🚑
Police activity,3,🚔
School bus,2,🚌
Train crossing,3,🚂
Car accident,6,💥
Fire truck,2,🚒
School zone,3,🚸
Construction,3,🚧
Road closed,1000,🚫
";

// ── Terminal observer ─────────────────────────────────────────────────────────

/// Prints the journey as it unfolds and forwards everything to the CSV
/// observer, counting rows for the end-of-run summary.
struct TerminalObserver<W: OutputWriter> {
    inner:      EngineOutputObserver<W>,
    moves:      usize,
    obstacles:  usize,
    replans:    usize,
}

impl<W: OutputWriter> TerminalObserver<W> {
    fn new(inner: EngineOutputObserver<W>) -> Self {
        Self { inner, moves: 0, obstacles: 0, replans: 0 }
    }
}

impl<W: OutputWriter> EngineObserver for TerminalObserver<W> {
    fn on_journey_started(&mut self, tick: Tick, route: &Route) {
        println!("[{tick}] route planned: {} steps, cost {}", route.len(), route.total_cost);
        self.inner.on_journey_started(tick, route);
    }

    fn on_route_updated(&mut self, tick: Tick, route: &Route) {
        self.replans += 1;
        println!(
            "[{tick}] rerouted from {}: {} steps left, cost {}",
            route.origin(),
            route.len(),
            route.total_cost
        );
        self.inner.on_route_updated(tick, route);
    }

    fn on_obstacle_applied(&mut self, tick: Tick, obstacle: &Obstacle, scenario: Option<&Scenario>) {
        self.obstacles += 1;
        match scenario {
            Some(s) => println!("[{tick}] {} {} at {} (cost {})", s.icon, s.label, obstacle.at, s.cost),
            None    => println!("[{tick}] obstacle at {} (cost {})", obstacle.at, obstacle.cost),
        }
        self.inner.on_obstacle_applied(tick, obstacle, scenario);
    }

    fn on_obstacle_cleared(&mut self, tick: Tick, obstacle: &Obstacle) {
        println!("[{tick}] incident at {} cleared", obstacle.at);
        self.inner.on_obstacle_cleared(tick, obstacle);
    }

    fn on_moved(&mut self, tick: Tick, position: GridCoord, remaining: usize) {
        self.moves += 1;
        println!("[{tick}] moved to {position}, {remaining} corners left");
        self.inner.on_moved(tick, position, remaining);
    }

    fn on_arrived(&mut self, tick: Tick, position: GridCoord) {
        println!("[{tick}] You've arrived at your destination ({position})");
        self.inner.on_arrived(tick, position);
    }

    fn on_run_end(&mut self, final_tick: Tick, phase: JourneyPhase) {
        self.inner.on_run_end(final_tick, phase);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== downtown — gridway live rerouting ===");
    println!("Query: {QUERY:?}  |  Seed: {SEED}");
    println!();

    // 1. Resolve the query against the place directory.  No endpoints, no
    //    journey — this is the caller's hard stop, not the engine's.
    let Some((origin, destination)) = resolve_query(QUERY, &PLACES) else {
        println!("Could not detect a destination and origin from your query");
        return Ok(());
    };
    println!(
        "Getting directions from {} {} to {} {}",
        origin.name, origin.at, destination.name, destination.at
    );

    // 2. Load the scenario table embedded above.
    let scenarios = load_scenarios_reader(Cursor::new(SCENARIO_CSV))?;
    println!("Loaded {} incident scenarios", scenarios.len());

    // 3. Engine config: second-based knobs converted to ticks.
    let config = EngineConfig {
        width:  WIDTH,
        height: HEIGHT,
        default_cost: 1.0,
        tick_duration_ms: TICK_DURATION_MS,
        spawn_interval_ticks: NEW_OBSTACLE_MS / TICK_DURATION_MS as u64,
        obstacle_duration_ticks: OBSTACLE_DURATION_MS / TICK_DURATION_MS as u64,
        advance_interval_ticks: MOVE_INTERVAL_MS / TICK_DURATION_MS as u64,
        max_ticks: MAX_TICKS,
        seed: SEED,
    };
    let mut engine = EngineBuilder::new(config, DijkstraPlanner)
        .scenarios(scenarios)
        .build()?;

    // 4. Output: CSV logs plus terminal narration.
    std::fs::create_dir_all("output/downtown")?;
    let writer = CsvWriter::new(Path::new("output/downtown"))?;
    let mut obs = TerminalObserver::new(EngineOutputObserver::new(writer));
    println!();

    // 5. Run to arrival (or the tick budget).
    engine.start_journey(origin.at, destination.at, &mut obs)?;
    let phase = engine.run(&mut obs)?;
    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }
    println!();

    // 6. Summary.
    println!("Finished {} after {}", phase.as_str(), engine.clock);
    println!("  moves     : {}", obs.moves);
    println!("  incidents : {}", obs.obstacles);
    println!("  reroutes  : {}", obs.replans);
    println!("  logs      : output/downtown/journey_snapshots.csv, obstacle_events.csv");

    Ok(())
}
