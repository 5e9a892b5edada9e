//! Multi-kind Game of Life on a toroidal grid.
//!
//! Cells are tagged with a [`CellKind`]. Each live kind has its own survival
//! counts, and empty positions are filled by an ordered list of birth rules.
//! [`iterate`] computes one synchronous generation. [`Simulation`] holds the
//! current grid and advances it.

pub mod engine;
pub mod error;
pub mod grid;
pub mod kind;
pub mod neighbors;
pub mod patterns;
pub mod rules;

pub use engine::{Simulation, iterate, next_row};
pub use error::{LifeError, ShapeError};
pub use grid::{Grid, TRow};
pub use kind::CellKind;
pub use neighbors::{NEIGHBOR_OFFSETS, NeighborCensus, count_neighbors, neighbor_census};
pub use patterns::{PATTERNS, Pattern, random_grid};
pub use rules::{BirthRule, NeighborSet, RuleSet, SurvivalTable, next_kind};
