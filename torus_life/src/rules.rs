// rules.rs - Neighbor counting with wraparound and the B3/S23 transition

use crate::error::LifeResult;
use crate::grid::Grid;

/// Left, right, top, bottom, then the four diagonals.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0), (1, 0), (0, -1), (0, 1),
    (-1, -1), (-1, 1), (1, -1), (1, 1),
];

/// Next state of a cell given its current state and live neighbor count.
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Under/overpopulation or stays dead
    }
}

/// Live cells among the eight wrapped neighbors of (col, row).
///
/// On grids narrower than 3 the same cell can appear several times in the
/// neighborhood (or be its own neighbor); each appearance counts.
pub fn live_neighbors(grid: &Grid, col: usize, row: usize) -> LifeResult<u8> {
    grid.get(col, row)?;
    Ok(count_live_neighbors(grid, col, row))
}

/// Next-generation state of one cell, read from `grid` without touching it.
pub fn cell_status(grid: &Grid, col: usize, row: usize) -> LifeResult<bool> {
    let alive = grid.get(col, row)?;
    Ok(next_state(alive, count_live_neighbors(grid, col, row)))
}

/// Caller guarantees (col, row) is in range.
pub(crate) fn next_cell(grid: &Grid, col: usize, row: usize) -> bool {
    let alive = grid.get_wrapped(col as isize, row as isize);
    next_state(alive, count_live_neighbors(grid, col, row))
}

fn count_live_neighbors(grid: &Grid, col: usize, row: usize) -> u8 {
    let (col, row) = (col as isize, row as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dc, dr)| grid.get_wrapped(col + dc, row + dr))
        .count() as u8
}
