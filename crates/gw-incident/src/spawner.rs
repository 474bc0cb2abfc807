//! Spawn placement for random obstacles.
//!
//! Mirrors the tutorial's placement rule: incidents prefer to land *on the
//! road ahead* so the traveler actually has to reroute.  When enough route
//! remains, a random interior cell of the remaining queue is chosen —
//! skipping the cell being approached and the last two before the
//! destination, so the incident is neither instantly reached nor pointless.
//! With little route left (or none), placement falls back to a uniform
//! random non-border cell.

use gw_core::{GridCoord, SimRng};
use gw_grid::Grid;

/// Remaining-route length above which placement is biased onto the route.
const ROUTE_BIAS_MIN_LEN: usize = 4;

/// Cells skipped at the head of the remaining route.
const SKIP_HEAD: usize = 1;
/// Cells skipped at the tail (destination end) of the remaining route.
const SKIP_TAIL: usize = 2;

/// Choose the cell for the next spawned obstacle.
pub fn pick_spawn_cell(rng: &mut SimRng, grid: &Grid, remaining: &[GridCoord]) -> GridCoord {
    if remaining.len() > ROUTE_BIAS_MIN_LEN {
        let interior = &remaining[SKIP_HEAD..remaining.len() - SKIP_TAIL];
        if let Some(cell) = rng.choose(interior) {
            return *cell;
        }
    }

    // Fallback: anywhere off the border (the original rolled 1..=width-2),
    // or anywhere at all on grids too small to have an interior.
    if grid.width() > 2 && grid.height() > 2 {
        GridCoord::new(
            rng.gen_range(1..grid.width() - 1),
            rng.gen_range(1..grid.height() - 1),
        )
    } else {
        GridCoord::new(
            rng.gen_range(0..grid.width()),
            rng.gen_range(0..grid.height()),
        )
    }
}
