//! `gw-grid` — weighted grid graph and shortest-path planning.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`grid`]    | `Grid` (flat SoA edge-cost storage), `GridNode`             |
//! | [`planner`] | `Planner` trait, `Route`, `DijkstraPlanner`                 |
//! | [`error`]   | `GridError`, `GridResult<T>`                                |
//!
//! # Data layout
//!
//! Topology is implicit: every cell of the `width × height` grid is a node,
//! and edges exist exactly between 4-adjacent cells.  Only the weights are
//! stored — once per undirected edge, in a single flat array (horizontal
//! block first, then vertical), indexed by `EdgeIndex`.  Symmetry of
//! `cost(a, b)` and `cost(b, a)` therefore holds by construction, and a
//! cost change never touches topology.

pub mod error;
pub mod grid;
pub mod planner;


pub use error::{GridError, GridResult};
pub use grid::{Grid, GridNode, DEFAULT_EDGE_COST};
pub use planner::{DijkstraPlanner, Planner, Route};
