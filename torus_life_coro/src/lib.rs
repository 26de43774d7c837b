// lib.rs - Row coroutines for torus_life
//
// Each row of the next generation is computed by its own tokio task. All tasks
// read the same Arc'd snapshot and own only their output row, so the result
// is identical to torus_life::update_grid.

use std::sync::Arc;

use thiserror::Error;
use tokio::runtime::Runtime;
use tokio::task::JoinError;
use tracing::debug;
use torus_life::{Grid, LifeError, Stepper, cell_status};

#[derive(Debug, Error)]
pub enum CoroError {
    #[error(transparent)]
    Life(#[from] LifeError),

    /// A row task panicked or was cancelled
    #[error("row task failed: {0}")]
    Join(#[from] JoinError),

    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Row coroutine: next-generation cells of `row_index`, yielding after each.
async fn process_row(row_index: usize, snapshot: Arc<Grid>) -> Result<(usize, Vec<bool>), LifeError> {
    let mut row_result = Vec::with_capacity(snapshot.width());
    for col in 0..snapshot.width() {
        row_result.push(cell_status(&snapshot, col, row_index)?);
        tokio::task::yield_now().await;  // Cooperative yielding
    }
    Ok((row_index, row_result))
}

/// Next generation of `snapshot`, one spawned task per row.
///
/// Must be called from within a tokio runtime.
pub async fn update_grid_by_rows(snapshot: Arc<Grid>) -> Result<Grid, CoroError> {
    let (width, height) = snapshot.dimensions();
    debug!(width, height, tasks = height, "spawning row coroutines");

    // Spawn every row up front so they time-slice against each other
    let handles: Vec<_> = (0..height)
        .map(|row| tokio::spawn(process_row(row, Arc::clone(&snapshot))))
        .collect();

    // Collect results by row index; completion order does not matter
    let mut cells = vec![false; width * height];
    for handle in handles {
        let (row_index, completed_row) = handle.await??;
        let start = row_index * width;
        cells[start..start + width].copy_from_slice(&completed_row);
    }

    Ok(Grid::from_cells(width, height, cells)?)
}

/// Blocking front end for synchronous drivers. Owns its runtime.
pub struct RowStepper {
    runtime: Runtime,
}

impl RowStepper {
    pub fn new() -> Result<Self, CoroError> {
        Ok(Self { runtime: Runtime::new()? })
    }

    /// Must not be called from inside another tokio runtime.
    pub fn step_blocking(&self, grid: &Grid) -> Result<Grid, CoroError> {
        let snapshot = Arc::new(grid.clone());
        self.runtime.block_on(update_grid_by_rows(snapshot))
    }
}

impl Stepper for RowStepper {
    type Error = CoroError;

    /// Blocks on the owned runtime, so like [`RowStepper::step_blocking`] it
    /// must not be called (directly or through [`Stepper::run`]) from inside
    /// another tokio runtime; tokio panics with "Cannot start a runtime from
    /// within a runtime".
    fn step(&self, grid: &Grid) -> Result<Grid, CoroError> {
        self.step_blocking(grid)
    }
}
