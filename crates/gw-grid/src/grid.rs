//! Grid representation and edge-cost storage.
//!
//! # Data layout
//!
//! Weights live in one flat `Vec<f32>`, one slot per **undirected** edge:
//!
//! ```text
//! [ horizontal edges: (x,y)–(x+1,y), index y*(width-1)+x          ]
//! [ vertical edges:   (x,y)–(x,y+1), index h_count + y*width + x  ]
//! ```
//!
//! Storing each edge once makes the symmetry invariant structural — there is
//! no second direction to keep in sync — and lets an obstacle overwrite the
//! up-to-4 slots touching a cell in O(1) each without losing topology.
//! Node lookup is arithmetic (`y * width + x`); nothing is recomputed when
//! costs change.

use gw_core::{Direction, EdgeIndex, GridCoord, NodeIndex};

use crate::{GridError, GridResult};

/// Weight every adjacent pair starts with unless configured otherwise.
pub const DEFAULT_EDGE_COST: f32 = 1.0;

// ── GridNode ──────────────────────────────────────────────────────────────────

/// A point-in-time snapshot of one cell: its position and the cost of each
/// edge to an in-bounds neighbor, in N/E/S/W scan order.
///
/// Materialized on demand by [`Grid::node`]; not a live view.
#[derive(Debug, Clone, PartialEq)]
pub struct GridNode {
    pub position: GridCoord,
    pub edges:    Vec<(GridCoord, f32)>,
}

impl GridNode {
    /// The cost of the edge toward `neighbor`, if it is one.
    pub fn cost_to(&self, neighbor: GridCoord) -> Option<f32> {
        self.edges
            .iter()
            .find(|(c, _)| *c == neighbor)
            .map(|(_, cost)| *cost)
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// An immutable-topology orthogonal grid with mutable symmetric edge weights.
///
/// Width and height are fixed at construction; all cells exist for the
/// grid's lifetime.  No interior mutability: the single owner hands out
/// `&`/`&mut` explicitly, which is what keeps planner reads and cost writes
/// mutually exclusive.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width:        i32,
    height:       i32,
    default_cost: f32,
    /// One weight per undirected edge; see the module docs for the layout.
    edge_cost:    Vec<f32>,
}

impl Grid {
    /// Build a `width × height` grid with every edge at [`DEFAULT_EDGE_COST`].
    pub fn new(width: i32, height: i32) -> GridResult<Self> {
        Self::with_default_cost(width, height, DEFAULT_EDGE_COST)
    }

    /// Build a grid with every edge at `default_cost`.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if either dimension is ≤ 0; `InvalidCost` if
    /// `default_cost` is not finite and positive.
    pub fn with_default_cost(width: i32, height: i32, default_cost: f32) -> GridResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        check_cost(default_cost)?;

        let h_count = (width - 1) as usize * height as usize;
        let v_count = width as usize * (height - 1) as usize;

        Ok(Self {
            width,
            height,
            default_cost,
            edge_cost: vec![default_cost; h_count + v_count],
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_cost.len()
    }

    #[inline]
    pub fn default_cost(&self) -> f32 {
        self.default_cost
    }

    /// `true` if `coord` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        (0..self.width).contains(&coord.x) && (0..self.height).contains(&coord.y)
    }

    // ── Index mapping ─────────────────────────────────────────────────────

    /// Flat node index of `coord` (`y * width + x`).
    pub fn node_index(&self, coord: GridCoord) -> GridResult<NodeIndex> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds(coord));
        }
        Ok(NodeIndex((coord.y * self.width + coord.x) as u32))
    }

    /// Bounds-unchecked variant of [`node_index`](Self::node_index) for the
    /// planner's inner loop.
    #[inline]
    pub(crate) fn node_index_unchecked(&self, coord: GridCoord) -> NodeIndex {
        debug_assert!(self.contains(coord));
        NodeIndex((coord.y * self.width + coord.x) as u32)
    }

    /// Inverse of [`node_index`](Self::node_index).
    ///
    /// # Panics
    /// Panics in debug mode if `ix` does not belong to this grid.
    #[inline]
    pub fn coord_of(&self, ix: NodeIndex) -> GridCoord {
        debug_assert!(ix.index() < self.node_count());
        GridCoord::new(ix.0 as i32 % self.width, ix.0 as i32 / self.width)
    }

    /// Flat edge index of the undirected edge between two 4-adjacent cells.
    pub fn edge_index(&self, a: GridCoord, b: GridCoord) -> GridResult<EdgeIndex> {
        if !self.contains(a) {
            return Err(GridError::OutOfBounds(a));
        }
        if !self.contains(b) {
            return Err(GridError::OutOfBounds(b));
        }
        if !a.is_adjacent(b) {
            return Err(GridError::NotAdjacent { a, b });
        }

        Ok(EdgeIndex(self.edge_slot(a, b) as u32))
    }

    /// Slot of the undirected edge `a`–`b` in the flat cost array.
    ///
    /// Callers must have verified bounds and adjacency.
    #[inline]
    fn edge_slot(&self, a: GridCoord, b: GridCoord) -> usize {
        debug_assert!(self.contains(a) && self.contains(b) && a.is_adjacent(b));
        let slot = if a.y == b.y {
            // Horizontal: keyed by the left endpoint.
            a.y * (self.width - 1) + a.x.min(b.x)
        } else {
            // Vertical: keyed by the top endpoint.
            (self.width - 1) * self.height + a.y.min(b.y) * self.width + a.x
        };
        slot as usize
    }

    // ── Neighbors and node views ──────────────────────────────────────────

    /// The up-to-4 in-bounds axis-aligned neighbors of `coord`, in N/E/S/W
    /// scan order.
    pub fn neighbors(&self, coord: GridCoord) -> GridResult<impl Iterator<Item = GridCoord> + '_> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds(coord));
        }
        Ok(Direction::ALL
            .into_iter()
            .map(move |dir| coord.step(dir))
            .filter(|c| self.contains(*c)))
    }

    /// Snapshot of `coord` and its per-neighbor edge costs.
    pub fn node(&self, coord: GridCoord) -> GridResult<GridNode> {
        let edges = self
            .neighbors(coord)?
            .map(|n| (n, self.edge_cost[self.edge_slot(coord, n)]))
            .collect();
        Ok(GridNode { position: coord, edges })
    }

    // ── Edge costs ────────────────────────────────────────────────────────

    /// Current weight of the edge between `a` and `b`.
    ///
    /// Symmetric: `edge_cost(a, b)` and `edge_cost(b, a)` read the same slot.
    pub fn edge_cost(&self, a: GridCoord, b: GridCoord) -> GridResult<f32> {
        let ix = self.edge_index(a, b)?;
        Ok(self.edge_cost[ix.index()])
    }

    /// Fast-path cost read for the planner's inner loop; callers must have
    /// verified bounds and adjacency.
    #[inline]
    pub(crate) fn edge_cost_unchecked(&self, a: GridCoord, b: GridCoord) -> f32 {
        self.edge_cost[self.edge_slot(a, b)]
    }

    /// Set the weight of the edge between `a` and `b` — both directions at
    /// once, since the edge is stored exactly once.
    pub fn set_edge_cost(&mut self, a: GridCoord, b: GridCoord, cost: f32) -> GridResult<()> {
        check_cost(cost)?;
        let ix = self.edge_index(a, b)?;
        self.edge_cost[ix.index()] = cost;
        Ok(())
    }

    /// Overwrite the weight of every edge touching `coord`.
    ///
    /// This is the obstacle primitive: a transient incident at a cell makes
    /// *entering or leaving* that cell expensive, without touching topology
    /// or any non-incident edge.
    pub fn set_incident_edges(&mut self, coord: GridCoord, cost: f32) -> GridResult<()> {
        check_cost(cost)?;
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds(coord));
        }
        for neighbor in Direction::ALL.map(|d| coord.step(d)) {
            if self.contains(neighbor) {
                let slot = self.edge_slot(coord, neighbor);
                self.edge_cost[slot] = cost;
            }
        }
        Ok(())
    }

    /// Restore every edge touching `coord` to the grid's default cost.
    ///
    /// Idempotent: resetting an already-default cell changes nothing.
    pub fn reset_incident_edges(&mut self, coord: GridCoord) -> GridResult<()> {
        self.set_incident_edges(coord, self.default_cost)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Weights must be finite and positive: zero or negative edges would break
/// Dijkstra's optimality argument, and NaN would poison the cost ordering.
fn check_cost(cost: f32) -> GridResult<()> {
    if !cost.is_finite() || cost <= 0.0 {
        return Err(GridError::InvalidCost(cost));
    }
    Ok(())
}
