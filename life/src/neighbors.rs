// neighbors.rs - Toroidal neighbor counting

use crate::{CellKind, Grid};

/// Relative positions of the 8 neighbors, row by row.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Live neighbors around one cell, in total and per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighborCensus {
    by_kind: [u8; 5],
}

impl NeighborCensus {
    /// Total live neighbors (0..=8).
    #[inline]
    pub fn live(&self) -> u8 {
        self.by_kind[1..].iter().sum()
    }

    /// Neighbors of one kind. For `Empty` this is the number of empty neighbors.
    #[inline]
    pub fn of(&self, kind: CellKind) -> u8 {
        self.by_kind[kind.tag()]
    }

    fn record(&mut self, kind: CellKind) {
        self.by_kind[kind.tag()] += 1;
    }
}

#[inline]
fn wrap(index: usize, offset: isize, len: usize) -> usize {
    (index + len).wrapping_add_signed(offset) % len
}

/// Walks the 8 wrapped neighbors of `(row, col)`.
///
/// On grids with a single row or column the same physical cell is visited
/// more than once, and a 1x1 grid visits the cell itself 8 times.
pub fn neighbor_census(grid: &Grid, row: usize, col: usize) -> NeighborCensus {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut census = NeighborCensus::default();
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        census.record(grid.get(wrap(row, dr, rows), wrap(col, dc, cols)));
    }
    census
}

/// Number of live cells among the 8 wrapped neighbors of `(row, col)`.
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> usize {
    usize::from(neighbor_census(grid, row, col).live())
}
