// engine.rs - Synchronous generation step and the simulation driver

use crate::{CellKind, Grid, LifeError, RuleSet, ShapeError, neighbor_census, next_kind};
use tracing::debug;

/// Computes one row of the next generation. Reads only from `grid`.
pub fn next_row(grid: &Grid, rules: &RuleSet, row: usize) -> Vec<CellKind> {
    grid.row_slice(row)
        .iter()
        .enumerate()
        .map(|(col, &kind)| next_kind(rules, kind, &neighbor_census(grid, row, col)))
        .collect()
}

/// Builds the next generation. Every cell is evaluated against the input grid,
/// so no cell ever observes an already-updated neighbor.
pub fn iterate(grid: &Grid, rules: &RuleSet) -> Grid {
    let rows = (0..grid.rows()).map(|row| next_row(grid, rules, row)).collect();
    Grid::from_rows_unchecked(rows, grid.cols())
}

/// A grid plus the rules that advance it.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    rules: RuleSet,
    generation: u64,
}

impl Simulation {
    /// Starts from integer tags using the default multi-kind rules.
    pub fn new(tags: Vec<Vec<usize>>) -> Result<Self, LifeError> {
        Self::with_rules(tags, RuleSet::default())
    }

    pub fn with_rules(tags: Vec<Vec<usize>>, rules: RuleSet) -> Result<Self, LifeError> {
        Self::from_grid(Grid::from_tags(tags)?, rules)
    }

    pub fn from_grid(grid: Grid, rules: RuleSet) -> Result<Self, LifeError> {
        rules.validate()?;
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            population = grid.population(),
            "simulation created"
        );
        Ok(Self { grid, rules, generation: 0 })
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        let next = iterate(&self.grid, &self.rules);
        self.install(next);
    }

    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Replaces the held grid with an already computed next generation.
    /// The grid must have the same dimensions as the current one.
    pub fn advance(&mut self, next: Grid) -> Result<(), ShapeError> {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        if (next.rows(), next.cols()) != (rows, cols) {
            return Err(ShapeError::Mismatch {
                rows,
                cols,
                found_rows: next.rows(),
                found_cols: next.cols(),
            });
        }
        self.install(next);
        Ok(())
    }

    fn install(&mut self, next: Grid) {
        self.grid = next;
        self.generation += 1;
        debug!(generation = self.generation, population = self.grid.population(), "step");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tags(&self) -> Vec<Vec<usize>> {
        self.grid.to_tags()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }
}
