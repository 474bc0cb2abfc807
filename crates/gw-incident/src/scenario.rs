//! Incident scenario catalogue.
//!
//! A scenario is one kind of transient incident — "Heavy traffic", cost 4,
//! "🚦" — drawn at random each time the engine spawns an obstacle.  The cost
//! is the only field the engine consumes; label and icon flow unchanged to
//! observers for display.

use gw_core::SimRng;

use crate::{IncidentError, IncidentResult};

/// One incident kind: display label, the cost it writes onto every edge
/// touching the affected cell, and a display icon.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub label: String,
    pub cost:  u32,
    pub icon:  String,
}

/// A validated, non-empty set of scenarios to sample from.
#[derive(Debug, Clone)]
pub struct ScenarioTable {
    scenarios: Vec<Scenario>,
}

impl ScenarioTable {
    /// Wrap a scenario list.
    ///
    /// # Errors
    ///
    /// `EmptyTable` for an empty list; `Parse` if any scenario's cost is
    /// zero (a free obstacle would be invisible to the planner and would
    /// fail the grid's positive-weight rule).
    pub fn new(scenarios: Vec<Scenario>) -> IncidentResult<Self> {
        if scenarios.is_empty() {
            return Err(IncidentError::EmptyTable);
        }
        for s in &scenarios {
            if s.cost == 0 {
                return Err(IncidentError::Parse(format!(
                    "scenario {:?} has cost 0; costs must be at least 1",
                    s.label
                )));
            }
        }
        Ok(Self { scenarios })
    }

    /// Draw a uniformly random scenario.  The table is non-empty by
    /// construction, so there is always something to draw.
    pub fn sample(&self, rng: &mut SimRng) -> &Scenario {
        &self.scenarios[rng.gen_range(0..self.scenarios.len())]
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
