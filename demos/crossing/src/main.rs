//! crossing — smallest example for the gridway engine.
//!
//! A 3×3 grid with a few hand-raised corner costs, one shortest-path query,
//! and a printed map.  Edit the costs or the endpoints below and rerun to
//! see the route move.

use anyhow::Result;

use gw_core::GridCoord;
use gw_grid::{DijkstraPlanner, Grid, Planner};

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:  i32 = 3;
const HEIGHT: i32 = 3;

/// Corners made expensive to pass through: (cell, cost written onto every
/// edge touching it).
const RAISED: [((i32, i32), f32); 3] = [((0, 0), 3.0), ((1, 2), 10.0), ((2, 1), 4.0)];

const ORIGIN:      (i32, i32) = (0, 0);
const DESTINATION: (i32, i32) = (2, 2);

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== crossing — gridway shortest paths ===");
    println!();

    let mut grid = Grid::new(WIDTH, HEIGHT)?;
    for ((x, y), cost) in RAISED {
        grid.set_incident_edges(GridCoord::new(x, y), cost)?;
        println!("raised corner ({x}, {y}) to cost {cost}");
    }
    println!();

    let origin = GridCoord::from(ORIGIN);
    let destination = GridCoord::from(DESTINATION);
    let route = DijkstraPlanner.plan(&grid, origin, destination)?;

    println!(
        "route {} -> {}: {} steps, total cost {}",
        origin,
        destination,
        route.len(),
        route.total_cost
    );
    for window in route.cells.windows(2) {
        let cost = grid.edge_cost(window[0], window[1])?;
        println!("  {} -> {}  (edge cost {cost})", window[0], window[1]);
    }
    println!();

    // Map: S = origin, D = destination, * = route, . = untouched.
    for y in 0..HEIGHT {
        let row: Vec<&str> = (0..WIDTH)
            .map(|x| {
                let cell = GridCoord::new(x, y);
                if cell == origin {
                    "S"
                } else if cell == destination {
                    "D"
                } else if route.cells.contains(&cell) {
                    "*"
                } else {
                    "."
                }
            })
            .collect();
        println!("  {}", row.join(" "));
    }

    Ok(())
}
