// step.rs - Whole-grid advancement
//
// Every cell of the next generation is computed from the same snapshot, so no
// cell ever observes a neighbor that was already updated this generation.

use std::convert::Infallible;

use tracing::trace;

use crate::grid::Grid;
use crate::rules;

/// Next generation of `grid`. The input is left untouched.
pub fn update_grid(grid: &Grid) -> Grid {
    let (width, height) = grid.dimensions();
    let cells = (0..height)
        .flat_map(|row| (0..width).map(move |col| (col, row)))
        .map(|(col, row)| rules::next_cell(grid, col, row))
        .collect();
    let next = Grid::from_parts(width, height, cells);
    trace!(width, height, population = next.population(), "stepped grid");
    next
}

/// Advance `grid` by `generations` steps.
pub fn step_n(grid: &Grid, generations: usize) -> Grid {
    let mut current = grid.clone();
    for _ in 0..generations {
        current = update_grid(&current);
    }
    current
}

/// Endless iterator over successive generations, starting with the one
/// after the seed.
#[derive(Clone, Debug)]
pub struct Generations {
    current: Grid,
}

impl Iterator for Generations {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        self.current = update_grid(&self.current);
        Some(self.current.clone())
    }
}

impl Grid {
    pub fn generations(&self) -> Generations {
        Generations { current: self.clone() }
    }

    /// Shorthand for [`update_grid`].
    pub fn next_generation(&self) -> Grid {
        update_grid(self)
    }
}

/// Anything that can turn one generation into the next.
pub trait Stepper {
    type Error;

    fn step(&self, grid: &Grid) -> Result<Grid, Self::Error>;

    /// Apply `step` `generations` times.
    fn run(&self, grid: &Grid, generations: usize) -> Result<Grid, Self::Error> {
        let mut current = grid.clone();
        for _ in 0..generations {
            current = self.step(&current)?;
        }
        Ok(current)
    }
}

/// The plain single-threaded stepper.
#[derive(Clone, Copy, Debug, Default)]
pub struct SyncStepper;

impl Stepper for SyncStepper {
    type Error = Infallible;

    fn step(&self, grid: &Grid) -> Result<Grid, Infallible> {
        Ok(update_grid(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_cell_dies() {
        let mut grid = Grid::new(5, 5).expect("grid");
        grid.set(2, 2, true).expect("in range");
        assert_eq!(update_grid(&grid).population(), 0);
    }

    #[test]
    fn input_is_not_modified() {
        let grid = Grid::from_rows(&[".....", ".###.", "....."]).expect("parse");
        let before = grid.clone();
        let _ = update_grid(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn update_is_synchronous() {
        // In-place row-major evaluation would keep (1,2) alive through the
        // freshly born (2,1).
        let grid = Grid::from_rows(&[".....", ".....", ".###.", ".....", "....."]).expect("parse");
        let next = update_grid(&grid);
        let expected = Grid::from_rows(&[".....", "..#..", "..#..", "..#..", "....."]).expect("parse");
        assert_eq!(next, expected);
    }

    #[test]
    fn generations_iterator_matches_step_n() {
        let grid = Grid::from_rows(&[
            "......",
            "..#...",
            "...#..",
            ".###..",
            "......",
            "......",
        ])
        .expect("parse");
        let via_iter = grid.generations().nth(3).expect("endless");
        assert_eq!(via_iter, step_n(&grid, 4));
        assert_eq!(step_n(&grid, 0), grid);
    }

    #[test]
    fn sync_stepper_runs() {
        let grid = Grid::from_rows(&[".....", ".....", ".###.", ".....", "....."]).expect("parse");
        let Ok(after_two) = SyncStepper.run(&grid, 2);
        assert_eq!(after_two, grid);
        let Ok(after_one) = SyncStepper.step(&grid);
        assert_eq!(after_one, grid.next_generation());
    }
}
