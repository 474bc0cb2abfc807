//! The journey tracker: start, advance, replan.

use std::collections::VecDeque;

use gw_core::{GridCoord, Tick};
use gw_grid::{Grid, Planner, Route};

use crate::{Journey, JourneyPhase, JourneyResult};

/// What one movement step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// No journey in progress — nothing happened.
    Idle,
    /// The traveler reached the given cell; more cells remain.
    Moved(GridCoord),
    /// The traveler reached the given cell and it was the destination.
    /// Emitted exactly once per journey.
    Arrived(GridCoord),
}

/// Tracks a single traveler over a [`Planner`].
///
/// # Type parameter
///
/// `P` is the planning algorithm (e.g. [`gw_grid::DijkstraPlanner`]).
/// Swap it at compile time with no runtime overhead.
pub struct JourneyTracker<P: Planner> {
    /// The planning algorithm.
    pub planner: P,

    /// The current journey, if one has been started.
    journey: Option<Journey>,
}

impl<P: Planner> JourneyTracker<P> {
    /// Create a tracker with no journey (`Idle`).
    pub fn new(planner: P) -> Self {
        Self { planner, journey: None }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn phase(&self) -> JourneyPhase {
        self.journey.as_ref().map_or(JourneyPhase::Idle, Journey::phase)
    }

    pub fn journey(&self) -> Option<&Journey> {
        self.journey.as_ref()
    }

    /// The traveler's current cell, if a journey exists.
    pub fn position(&self) -> Option<GridCoord> {
        self.journey.as_ref().map(|j| j.position)
    }

    /// Snapshot of the cells still ahead (front first).
    pub fn remaining_cells(&self) -> Vec<GridCoord> {
        self.journey
            .as_ref()
            .map(|j| j.remaining.iter().copied().collect())
            .unwrap_or_default()
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Start a journey from `origin` to `destination`, planning against the
    /// current grid costs.
    ///
    /// Any journey already tracked — in progress or arrived — is discarded
    /// wholesale; obstacles are grid-global and unaffected by the swap.
    pub fn start(
        &mut self,
        grid:        &Grid,
        origin:      GridCoord,
        destination: GridCoord,
        now:         Tick,
    ) -> JourneyResult<&Journey> {
        let route = self.planner.plan(grid, origin, destination)?;
        let remaining: VecDeque<GridCoord> = route.cells[1..].iter().copied().collect();

        let journey = self.journey.insert(Journey {
            origin,
            destination,
            position: origin,
            route,
            remaining,
            started_at: now,
            arrived_at: None,
        });
        Ok(journey)
    }

    /// Take one movement step: the queue's front cell is now reached.
    ///
    /// Popping the last cell transitions to `Arrived` and reports it; any
    /// call after that (or before `start`) is a no-op returning
    /// [`Advance::Idle`].
    pub fn advance(&mut self, now: Tick) -> Advance {
        let Some(journey) = self.journey.as_mut() else {
            return Advance::Idle;
        };
        if journey.arrived_at.is_some() {
            return Advance::Idle;
        }

        match journey.remaining.pop_front() {
            Some(cell) => {
                journey.position = cell;
                if journey.remaining.is_empty() {
                    journey.arrived_at = Some(now);
                    Advance::Arrived(cell)
                } else {
                    Advance::Moved(cell)
                }
            }
            // Degenerate start (origin == destination): the queue was born
            // empty, so the first step is already the arrival.
            None => {
                journey.arrived_at = Some(now);
                Advance::Arrived(journey.position)
            }
        }
    }

    /// Replan from the current position against live grid costs and replace
    /// the remaining queue wholesale.
    ///
    /// Returns the fresh route, or `None` as a no-op when there is no
    /// journey in progress (`Idle` or `Arrived`).  Cells already visited
    /// can never reappear: the plan starts *at* `position`, and the queue
    /// excludes it.
    pub fn replan(&mut self, grid: &Grid) -> JourneyResult<Option<&Route>> {
        let Some(journey) = self.journey.as_mut() else {
            return Ok(None);
        };
        if journey.arrived_at.is_some() {
            return Ok(None);
        }

        let route = self.planner.plan(grid, journey.position, journey.destination)?;
        journey.remaining = route.cells[1..].iter().copied().collect();
        journey.route = route;
        Ok(Some(&journey.route))
    }
}
