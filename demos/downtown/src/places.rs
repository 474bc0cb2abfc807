//! The demo's place directory and routing-query resolution.
//!
//! The production version of this demo sits behind a natural-language
//! tagger that marks which token is the origin and which the destination;
//! here a keyword heuristic stands in: `"school to cafe"` reads
//! origin-first, `"cafe from library"` destination-first, and place names
//! match case-insensitively as substrings.  Absence of either endpoint is
//! reported to the caller — the engine is simply never started.

use gw_core::GridCoord;

/// A named cell on the map that queries can refer to.
pub struct Place {
    pub name: &'static str,
    pub at:   GridCoord,
}

/// Everywhere the demo can route between.
pub const PLACES: [Place; 4] = [
    Place { name: "School",  at: GridCoord { x: 1, y: 1 } },
    Place { name: "Cafe",    at: GridCoord { x: 7, y: 1 } },
    Place { name: "Bakery",  at: GridCoord { x: 3, y: 3 } },
    Place { name: "Library", at: GridCoord { x: 1, y: 7 } },
];

/// Resolve a routing query to `(origin, destination)`.
///
/// Returns `None` unless both endpoints are detected — a partial match is
/// treated the same as no match, never guessed at.
pub fn resolve_query<'p>(query: &str, places: &'p [Place]) -> Option<(&'p Place, &'p Place)> {
    let lowered = query.to_lowercase();

    let (origin_part, destination_part) = if let Some(ix) = lowered.find(" from ") {
        // "<destination> from <origin>"
        (&lowered[ix + " from ".len()..], &lowered[..ix])
    } else if let Some(ix) = lowered.find(" to ") {
        // "<origin> to <destination>"
        (&lowered[..ix], &lowered[ix + " to ".len()..])
    } else {
        return None;
    };

    let origin = find_place(origin_part, places)?;
    let destination = find_place(destination_part, places)?;
    Some((origin, destination))
}

fn find_place<'p>(segment: &str, places: &'p [Place]) -> Option<&'p Place> {
    places
        .iter()
        .find(|p| segment.contains(&p.name.to_lowercase()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
