//! `gw-output` — engine run logging for the gridway framework.
//!
//! Rows are plain structs, the backend is a trait, and the bridge from the
//! engine is an [`EngineObserver`][gw_sim::EngineObserver] implementation —
//! so alternative backends slot in without the engine knowing.
//!
//! | File                    | Contents                                      |
//! |-------------------------|-----------------------------------------------|
//! | `journey_snapshots.csv` | One row per traveler movement (and arrival)   |
//! | `obstacle_events.csv`   | One row per obstacle apply / clear            |
//!
//! # Usage
//!
//! ```rust,ignore
//! use gw_output::{CsvWriter, EngineOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = EngineOutputObserver::new(writer);
//! engine.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EngineOutputObserver;
pub use row::{JourneySnapshotRow, ObstacleEventRow};
pub use writer::OutputWriter;
