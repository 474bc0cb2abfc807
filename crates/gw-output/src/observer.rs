//! `EngineOutputObserver<W>` — bridges `EngineObserver` to an `OutputWriter`.

use gw_core::{GridCoord, Tick};
use gw_incident::{Obstacle, Scenario};
use gw_journey::JourneyPhase;
use gw_sim::EngineObserver;

use crate::row::{JourneySnapshotRow, ObstacleEventRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// An [`EngineObserver`] that writes traveler snapshots and obstacle events
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct EngineOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> EngineOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run ends.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> EngineObserver for EngineOutputObserver<W> {
    fn on_moved(&mut self, tick: Tick, position: GridCoord, remaining: usize) {
        let row = JourneySnapshotRow {
            tick:      tick.0,
            phase:     JourneyPhase::InProgress.as_str(),
            x:         position.x,
            y:         position.y,
            remaining: remaining as u64,
        };
        let result = self.writer.write_snapshot(&row);
        self.store_err(result);
    }

    fn on_arrived(&mut self, tick: Tick, position: GridCoord) {
        let row = JourneySnapshotRow {
            tick:      tick.0,
            phase:     JourneyPhase::Arrived.as_str(),
            x:         position.x,
            y:         position.y,
            remaining: 0,
        };
        let result = self.writer.write_snapshot(&row);
        self.store_err(result);
    }

    fn on_obstacle_applied(&mut self, tick: Tick, obstacle: &Obstacle, scenario: Option<&Scenario>) {
        let row = ObstacleEventRow {
            tick:  tick.0,
            event: "applied",
            x:     obstacle.at.x,
            y:     obstacle.at.y,
            cost:  obstacle.cost,
            label: scenario.map(|s| s.label.clone()).unwrap_or_default(),
        };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn on_obstacle_cleared(&mut self, tick: Tick, obstacle: &Obstacle) {
        let row = ObstacleEventRow {
            tick:  tick.0,
            event: "cleared",
            x:     obstacle.at.x,
            y:     obstacle.at.y,
            cost:  obstacle.cost,
            label: String::new(),
        };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_tick: Tick, _phase: JourneyPhase) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
