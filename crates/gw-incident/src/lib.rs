//! `gw-incident` — obstacle scenarios and time-limited cost mutation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`scenario`] | `Scenario`, `ScenarioTable` (weighted-incident catalogue)  |
//! | [`loader`]   | `load_scenarios_csv`, `load_scenarios_reader`              |
//! | [`board`]    | `Obstacle`, `ObstacleBoard` (apply / revert / expiry)      |
//! | [`spawner`]  | `pick_spawn_cell` (route-biased placement)                 |
//! | [`error`]    | `IncidentError`, `IncidentResult<T>`                       |
//!
//! # Mutation model
//!
//! An obstacle at a cell **overwrites** the weight of every edge touching
//! that cell (repeated obstacles replace rather than stack), and schedules
//! its own revert.  The board drains due expirations each tick and restores
//! the grid's default cost on the affected edges — obstacles are grid-global
//! state, independent of any journey.

pub mod board;
pub mod error;
pub mod loader;
pub mod scenario;
pub mod spawner;


pub use board::{Obstacle, ObstacleBoard};
pub use error::{IncidentError, IncidentResult};
pub use loader::{load_scenarios_csv, load_scenarios_reader};
pub use scenario::{Scenario, ScenarioTable};
pub use spawner::pick_spawn_cell;
