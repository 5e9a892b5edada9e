// grid.rs - Grid snapshot for the toroidal automaton

use crate::{CellKind, LifeError, ShapeError};
use std::fmt;

pub type TRow = Vec<CellKind>;

/// Rectangular, non-empty grid of cell kinds. Edges wrap around.
///
/// A `Grid` is a snapshot: nothing mutates it in place once it is handed out.
/// Builders such as [`Grid::with_cell`] consume the grid and return a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: Vec<TRow>,
    cols: usize,
}

impl Grid {
    /// Builds a grid from rows of kinds, checking that it is non-empty and rectangular.
    pub fn new(rows: Vec<TRow>) -> Result<Self, ShapeError> {
        let cols = rows.first().map_or(0, |row| row.len());
        if cols == 0 {
            return Err(ShapeError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(|r| r.len())
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(ShapeError::Ragged { row, expected: cols, found });
        }
        Ok(Self { rows, cols })
    }

    /// Builds a grid from integer tags (0 = empty).
    pub fn from_tags(tags: Vec<Vec<usize>>) -> Result<Self, LifeError> {
        let mut rows = Vec::with_capacity(tags.len());
        for (row, tag_row) in tags.into_iter().enumerate() {
            let kinds = tag_row
                .into_iter()
                .enumerate()
                .map(|(col, tag)| CellKind::from_tag(tag).ok_or(LifeError::UnknownTag { tag, row, col }))
                .collect::<Result<TRow, _>>()?;
            rows.push(kinds);
        }
        Ok(Self::new(rows)?)
    }

    /// An all-empty grid.
    pub fn empty(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        Self::new(vec![vec![CellKind::Empty; cols]; rows])
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> CellKind {
        self.rows[row][col]
    }

    /// Returns a copy of the grid with one cell replaced. Coordinates wrap.
    pub fn with_cell(mut self, row: usize, col: usize, kind: CellKind) -> Self {
        let (r, c) = (row % self.rows(), col % self.cols);
        self.rows[r][c] = kind;
        self
    }

    pub fn row_slice(&self, row: usize) -> &[CellKind] {
        &self.rows[row]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|kind| kind.is_live()).count())
            .sum()
    }

    /// The grid as rows of integer tags.
    pub fn to_tags(&self) -> Vec<Vec<usize>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|kind| kind.tag()).collect())
            .collect()
    }

    /// Reassembles a grid from rows produced by the transition. Rows must match `cols`.
    pub(crate) fn from_rows_unchecked(rows: Vec<TRow>, cols: usize) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == cols));
        Self { rows, cols }
    }
}

impl TryFrom<Vec<Vec<usize>>> for Grid {
    type Error = LifeError;

    fn try_from(tags: Vec<Vec<usize>>) -> Result<Self, Self::Error> {
        Grid::from_tags(tags)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for kind in row {
                write!(f, "{kind}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
