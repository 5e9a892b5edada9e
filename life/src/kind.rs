// kind.rs - Cell kinds and their integer tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// What occupies a grid position. Tags are the values callers read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    #[default]
    Empty,
    Standard,
    Immortal,
    HyperReproductive,
    Lazy,
}

impl CellKind {
    /// Live kinds in declaration order.
    pub const LIVE: [CellKind; 4] = [
        CellKind::Standard,
        CellKind::Immortal,
        CellKind::HyperReproductive,
        CellKind::Lazy,
    ];

    pub fn from_tag(tag: usize) -> Option<CellKind> {
        match tag {
            0 => Some(CellKind::Empty),
            1 => Some(CellKind::Standard),
            2 => Some(CellKind::Immortal),
            3 => Some(CellKind::HyperReproductive),
            4 => Some(CellKind::Lazy),
            _ => None,
        }
    }

    pub fn tag(self) -> usize {
        match self {
            CellKind::Empty             => 0,
            CellKind::Standard          => 1,
            CellKind::Immortal          => 2,
            CellKind::HyperReproductive => 3,
            CellKind::Lazy              => 4,
        }
    }

    #[inline]
    pub fn is_live(self) -> bool {
        self != CellKind::Empty
    }

    /// Single character used when printing a grid.
    pub fn symbol(self) -> char {
        match self {
            CellKind::Empty             => '.',
            CellKind::Standard          => 'o',
            CellKind::Immortal          => 'I',
            CellKind::HyperReproductive => 'H',
            CellKind::Lazy              => 'L',
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
