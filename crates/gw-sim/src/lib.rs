//! `gw-sim` — tick loop orchestrator for the gridway framework.
//!
//! # Tick phases
//!
//! ```text
//! for each tick while running:
//!   ① Expire   — drain due obstacle reverts (grid-global; runs even after
//!                arrival).
//!   ② Spawn    — while a journey is in progress, every spawn interval:
//!                sample a scenario, pick a cell, apply the obstacle.
//!   ③ Replan   — if ① or ② changed any cost: one replan from the current
//!                position, queue replaced wholesale.
//!   ④ Advance  — every advance interval: pop the next cell; arrival stops
//!                future spawning.
//! ```
//!
//! Updates apply in arrival order, then the engine replans once — two
//! timers firing on the same tick never cause a double replan.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gw_core::GridCoord;
//! use gw_grid::DijkstraPlanner;
//! use gw_sim::{EngineBuilder, NoopObserver};
//!
//! let mut engine = EngineBuilder::new(config, DijkstraPlanner)
//!     .scenarios(table)
//!     .build()?;
//! engine.start_journey(GridCoord::new(1, 7), GridCoord::new(7, 1), &mut NoopObserver)?;
//! engine.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::{SimError, SimResult};
pub use observer::{EngineObserver, NoopObserver};
