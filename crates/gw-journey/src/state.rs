//! Journey state.

use std::collections::VecDeque;

use gw_core::{GridCoord, Tick};
use gw_grid::Route;

/// Where a journey is in its lifecycle.
///
/// `Idle → InProgress → Arrived`; `Arrived` is terminal.  A new journey
/// replaces the old state entirely rather than rewinding it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JourneyPhase {
    /// No journey has been started (or the previous one was discarded).
    #[default]
    Idle,
    /// The traveler is between origin and destination.
    InProgress,
    /// The destination was reached.  Terminal.
    Arrived,
}

impl JourneyPhase {
    /// Stable lowercase label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            JourneyPhase::Idle       => "idle",
            JourneyPhase::InProgress => "in_progress",
            JourneyPhase::Arrived    => "arrived",
        }
    }
}

/// The live state of one journey.
///
/// `route` is the planner's latest answer, always planned from `position`;
/// `remaining` is the queue of cells still ahead — `route.cells` minus the
/// position itself.  Both are replaced wholesale on replan, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    /// Where the journey began.  Fixed for the journey's lifetime.
    pub origin: GridCoord,

    /// Where the journey ends.  Fixed for the journey's lifetime.
    pub destination: GridCoord,

    /// The cell the traveler currently occupies (the origin until the first
    /// advance, the destination after arrival).
    pub position: GridCoord,

    /// The latest planned route, from `position` to `destination` inclusive.
    pub route: Route,

    /// Cells still to be visited, front first.  Never contains `position`
    /// or any cell already visited.
    pub remaining: VecDeque<GridCoord>,

    /// Tick at which the journey started.
    pub started_at: Tick,

    /// Tick of arrival; `None` while in progress.
    pub arrived_at: Option<Tick>,
}

impl Journey {
    /// `InProgress` or `Arrived` — a constructed journey is never idle.
    #[inline]
    pub fn phase(&self) -> JourneyPhase {
        if self.arrived_at.is_some() {
            JourneyPhase::Arrived
        } else {
            JourneyPhase::InProgress
        }
    }

    /// Cells left to visit (0 once arrived).
    #[inline]
    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }

    /// The cell the traveler will reach on the next advance, if any.
    #[inline]
    pub fn next_cell(&self) -> Option<GridCoord> {
        self.remaining.front().copied()
    }
}
