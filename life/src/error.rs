// error.rs - Error types for grid construction and rule configuration

/// Shape violations in a grid handed to the simulation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid is {found_rows}x{found_cols}, expected {rows}x{cols}")]
    Mismatch {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("unknown cell tag {tag} at [{row}, {col}]")]
    UnknownTag { tag: usize, row: usize, col: usize },

    #[error("neighbor count {0} is out of range (0..=8)")]
    NeighborCount(u8),

    #[error("birth rule #{0} produces an empty cell")]
    EmptyBirth(usize),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}
