//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `journey_snapshots.csv`
//! - `obstacle_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{JourneySnapshotRow, ObstacleEventRow, OutputResult};

/// Writes engine run logs to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("journey_snapshots.csv"))?;
        snapshots.write_record(["tick", "phase", "x", "y", "remaining"])?;

        let mut events = Writer::from_path(dir.join("obstacle_events.csv"))?;
        events.write_record(["tick", "event", "x", "y", "cost", "label"])?;

        Ok(Self {
            snapshots,
            events,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, row: &JourneySnapshotRow) -> OutputResult<()> {
        self.snapshots.write_record(&[
            row.tick.to_string(),
            row.phase.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.remaining.to_string(),
        ])?;
        Ok(())
    }

    fn write_event(&mut self, row: &ObstacleEventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            row.event.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.cost.to_string(),
            row.label.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
