// lib.rs - Generation step with one tokio coroutine per row
//
// Every row task reads the same shared snapshot and yields between cells,
// so rows interleave freely. Joining all handles is the only barrier.

use life::{CellKind, Grid, RuleSet, ShapeError, Simulation, neighbor_census, next_kind};
use std::sync::Arc;
use tracing::trace;

#[derive(Debug, thiserror::Error)]
pub enum CoroError {
    #[error("row task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Row coroutine: computes one row of the next generation.
/// Same per-cell evaluation as [`life::next_row`], with a yield after each cell.
async fn process_row(row_index: usize, grid: Arc<Grid>, rules: Arc<RuleSet>) -> (usize, Vec<CellKind>) {
    let mut row_result = Vec::with_capacity(grid.cols());
    for col in 0..grid.cols() {
        let census = neighbor_census(&grid, row_index, col);
        row_result.push(next_kind(&rules, grid.get(row_index, col), &census));

        tokio::task::yield_now().await;
    }
    trace!(row = row_index, "row finished");
    (row_index, row_result)
}

/// Computes the next generation with a task per row. Same result as [`life::iterate`].
pub async fn iterate_rows(grid: Arc<Grid>, rules: Arc<RuleSet>) -> Result<Grid, CoroError> {
    let handles: Vec<_> = (0..grid.rows())
        .map(|row| tokio::spawn(process_row(row, Arc::clone(&grid), Arc::clone(&rules))))
        .collect();

    let mut rows = vec![Vec::new(); grid.rows()];
    for handle in handles {
        let (row_index, completed_row) = handle.await?;
        rows[row_index] = completed_row;
    }
    Ok(Grid::new(rows)?)
}

/// Advances `sim` one generation through [`iterate_rows`].
pub async fn step(sim: &mut Simulation) -> Result<(), CoroError> {
    let grid = Arc::new(sim.grid().clone());
    let rules = Arc::new(sim.rules().clone());
    let next = iterate_rows(grid, rules).await?;
    sim.advance(next)?;
    Ok(())
}

/// Owns a runtime so synchronous callers can step with row coroutines.
pub struct RowStepper {
    runtime: tokio::runtime::Runtime,
}

impl RowStepper {
    pub fn new() -> Result<Self, CoroError> {
        Ok(Self { runtime: tokio::runtime::Runtime::new()? })
    }

    pub fn step(&self, sim: &mut Simulation) -> Result<(), CoroError> {
        self.runtime.block_on(step(sim))
    }

    pub fn run(&self, sim: &mut Simulation, generations: u64) -> Result<(), CoroError> {
        self.runtime.block_on(async {
            for _ in 0..generations {
                step(sim).await?;
            }
            Ok::<_, CoroError>(())
        })
    }
}
