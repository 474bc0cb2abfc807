//! `gw-core` — foundational types for the `gridway` navigation engine.
//!
//! This crate is a dependency of every other `gw-*` crate.  It intentionally
//! has no `gw-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`coord`]   | `GridCoord`, `Direction` (the 4-neighborhood)         |
//! | [`ids`]     | `NodeIndex`, `EdgeIndex`                              |
//! | [`time`]    | `Tick`, `TickClock`, `EngineConfig`                   |
//! | [`rng`]     | `SimRng` (seeded, deterministic)                      |
//! | [`error`]   | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::{Direction, GridCoord};
pub use error::{CoreError, CoreResult};
pub use ids::{EdgeIndex, NodeIndex};
pub use rng::SimRng;
pub use time::{EngineConfig, Tick, TickClock};
