//! CSV scenario loader.
//!
//! # CSV format
//!
//! One row per scenario:
//!
//! ```csv
//! label,cost,icon
//! Heavy traffic,4,🚦
//! Ambulance,2,🚑
//! Road closed,1000,🚫
//! ```
//!
//! The cost column is an integer; "Road closed" is deliberately a very large
//! *finite* cost — the planner treats every edge as traversable, so a closed
//! road is avoided whenever any alternative is cheaper, never a hard wall.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::scenario::{Scenario, ScenarioTable};
use crate::{IncidentError, IncidentResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScenarioRecord {
    label: String,
    cost:  u32,
    icon:  String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`ScenarioTable`] from a CSV file.
pub fn load_scenarios_csv(path: &Path) -> IncidentResult<ScenarioTable> {
    let file = std::fs::File::open(path).map_err(IncidentError::Io)?;
    load_scenarios_reader(file)
}

/// Like [`load_scenarios_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for tables embedded in
/// the binary.
pub fn load_scenarios_reader<R: Read>(reader: R) -> IncidentResult<ScenarioTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut scenarios = Vec::new();
    for result in csv_reader.deserialize::<ScenarioRecord>() {
        let row = result.map_err(|e| IncidentError::Parse(e.to_string()))?;
        scenarios.push(Scenario {
            label: row.label,
            cost:  row.cost,
            icon:  row.icon,
        });
    }

    ScenarioTable::new(scenarios)
}
