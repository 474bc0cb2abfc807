//! `gw-journey` — journey state machine and route tracking.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`state`]   | `JourneyPhase`, `Journey` (origin, position, queue)       |
//! | [`tracker`] | `JourneyTracker<P>` — start / advance / replan            |
//! | [`error`]   | `JourneyError`, `JourneyResult<T>`                        |
//!
//! # Movement model (tick-paced queue pop)
//!
//! A journey is a queue of cells still to be visited:
//!
//! 1. `JourneyTracker::start` plans a route via a pluggable
//!    [`Planner`][gw_grid::Planner] and queues every cell after the origin.
//! 2. Each movement step, `advance` pops the queue's front — the traveler
//!    is now *at* that cell.  Popping the last cell is the arrival.
//! 3. When costs change, `replan` asks the planner for a fresh route from
//!    the current position and **replaces** the queue wholesale; visited
//!    cells never reappear.
//!
//! The tracker owns no grid and no clock: the engine passes the live grid
//! in and decides when steps happen.

pub mod error;
pub mod state;
pub mod tracker;


pub use error::{JourneyError, JourneyResult};
pub use state::{Journey, JourneyPhase};
pub use tracker::{Advance, JourneyTracker};
