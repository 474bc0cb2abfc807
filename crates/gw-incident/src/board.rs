//! `ObstacleBoard` — active obstacles and their expiry queue.
//!
//! # Why this exists
//!
//! Obstacles are transient: each one overwrites the edges touching its cell
//! and must revert on its own schedule, independent of whatever journey is
//! running.  Scanning every cell each tick to ask "has anything expired?"
//! would cost O(cells) regardless of how many obstacles exist.
//!
//! The board inverts the problem: expiry ticks are queued in a
//! `BTreeMap<Tick, Vec<GridCoord>>`, and each tick the engine drains only
//! the entries that have come due — O(active) work instead of O(cells).
//!
//! # Stale entries
//!
//! Re-applying an obstacle to an occupied cell replaces its cost and expiry
//! (last-writer-wins), leaving the superseded queue entry in place.  Drains
//! check the recorded expiry before reverting and skip entries that no
//! longer match — the same trick Dijkstra uses for stale heap entries.

use std::collections::BTreeMap;

use log::debug;
use rustc_hash::FxHashMap;

use gw_core::{GridCoord, Tick};
use gw_grid::{Grid, GridResult};

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// A live cost mutation: the affected cell, the weight written onto its
/// incident edges, and its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub at:         GridCoord,
    pub cost:       f32,
    pub placed_at:  Tick,
    pub expires_at: Tick,
}

// ── ObstacleBoard ─────────────────────────────────────────────────────────────

/// All currently active obstacles, with scheduled reverts.
///
/// The board owns no grid: every operation takes `&mut Grid` explicitly, so
/// a single caller sequences cost writes and planner reads.
#[derive(Default)]
pub struct ObstacleBoard {
    /// Active obstacle per cell.  At most one — reapplication replaces.
    active: FxHashMap<GridCoord, Obstacle>,
    /// Expiry queue: tick → cells scheduled to revert at that tick.
    /// May contain stale entries for replaced obstacles (skipped at drain).
    expirations: BTreeMap<Tick, Vec<GridCoord>>,
}

impl ObstacleBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place (or replace) an obstacle at `at`.
    ///
    /// Overwrites — never adds to — the weight of every edge touching `at`,
    /// and schedules a revert at `now + duration_ticks`.  An obstacle at the
    /// traveler's current cell is fine: it prices the edges around that cell
    /// without touching anything already traversed.
    pub fn apply(
        &mut self,
        grid:           &mut Grid,
        at:             GridCoord,
        cost:           f32,
        now:            Tick,
        duration_ticks: u64,
    ) -> GridResult<Obstacle> {
        grid.set_incident_edges(at, cost)?;

        let obstacle = Obstacle {
            at,
            cost,
            placed_at:  now,
            expires_at: now.offset(duration_ticks),
        };
        self.active.insert(at, obstacle);
        self.expirations.entry(obstacle.expires_at).or_default().push(at);

        debug!("obstacle cost {cost} at {at}, reverts at {}", obstacle.expires_at);
        Ok(obstacle)
    }

    /// Revert the cell's incident edges to the grid default and drop any
    /// active obstacle record.
    ///
    /// Idempotent: reverting a cell with no active obstacle resets
    /// already-default edges and returns `None`.  Any queued expiry entry
    /// for the removed obstacle goes stale and is skipped at drain time.
    pub fn revert(&mut self, grid: &mut Grid, at: GridCoord) -> GridResult<Option<Obstacle>> {
        grid.reset_incident_edges(at)?;
        Ok(self.active.remove(&at))
    }

    /// Drain every expiry scheduled at or before `now`, reverting each
    /// still-current obstacle.  Returns the cleared obstacles in queue
    /// (arrival) order.
    pub fn expire_due(&mut self, grid: &mut Grid, now: Tick) -> GridResult<Vec<Obstacle>> {
        let mut cleared = Vec::new();

        while let Some(entry) = self.expirations.first_entry() {
            if *entry.key() > now {
                break;
            }
            let cells = entry.remove();
            for cell in cells {
                // Skip stale entries: the obstacle was replaced (new expiry)
                // or manually reverted since this entry was queued.
                match self.active.get(&cell) {
                    Some(ob) if ob.expires_at <= now => {
                        grid.reset_incident_edges(cell)?;
                        let ob = *ob;
                        self.active.remove(&cell);
                        debug!("obstacle at {cell} expired at {now}");
                        cleared.push(ob);
                    }
                    _ => {}
                }
            }
        }

        Ok(cleared)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The active obstacle at `at`, if any.
    pub fn get(&self, at: GridCoord) -> Option<&Obstacle> {
        self.active.get(&at)
    }

    /// Iterator over all active obstacles (unspecified order).
    pub fn active(&self) -> impl Iterator<Item = &Obstacle> {
        self.active.values()
    }

    /// Number of active obstacles.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// The earliest scheduled expiry tick, if any obstacle is pending.
    /// May point at a stale entry; only `expire_due` decides what reverts.
    pub fn next_expiry(&self) -> Option<Tick> {
        self.expirations.keys().next().copied()
    }
}
