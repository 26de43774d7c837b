// grid.rs - Grid type for Conway's Game of Life on a torus
//
// Cells are stored row-major in a single Vec<bool>. Every coordinate pair in
// the public API is (col, row), with col in [0, width) and row in [0, height).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, LifeResult};

/// A fixed-size rectangle of live/dead cells whose opposite edges touch.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridRepr", into = "GridRepr")]
pub struct Grid {
    width  : usize,
    height : usize,
    cells  : Vec<bool>,
}

/// Serialized form. Validated on the way in so a deserialized grid is
/// always rectangular.
#[derive(Serialize, Deserialize)]
struct GridRepr {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = LifeError;

    fn try_from(repr: GridRepr) -> LifeResult<Self> {
        Grid::from_cells(repr.width, repr.height, repr.cells)
    }
}

impl From<Grid> for GridRepr {
    fn from(grid: Grid) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            cells: grid.cells,
        }
    }
}

/// Build an all-dead grid. Same as [`Grid::new`].
pub fn create_grid(width: usize, height: usize) -> LifeResult<Grid> {
    Grid::new(width, height)
}

impl Grid {
    /// All-dead grid of the given extents. Both must be at least 1; grids
    /// narrower than 3 are allowed and simply see the same neighbor more
    /// than once through the wrap.
    pub fn new(width: usize, height: usize) -> LifeResult<Self> {
        let count = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; count],
        })
    }

    /// Grid from row-major cells.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> LifeResult<Self> {
        let count = cell_count(width, height)?;
        if cells.len() != count {
            return Err(LifeError::CellCount {
                expected: count,
                found: cells.len(),
            });
        }
        Ok(Self { width, height, cells })
    }

    /// Parse rows of text. `#`, `O` and `*` are alive; `.` and `_` are dead.
    ///
    /// ```
    /// use torus_life::Grid;
    ///
    /// let grid = Grid::from_rows(&["...", "###", "..."]).unwrap();
    /// assert_eq!(grid.population(), 3);
    /// assert!(grid.get(0, 1).unwrap());
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> LifeResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let count = cell_count(width, height)?;

        let mut cells = Vec::with_capacity(count);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len != width {
                return Err(LifeError::ShapeMismatch {
                    expected: (width, height),
                    found: (len, height),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let alive = match ch {
                    '#' | 'O' | '*' => true,
                    '.' | '_'       => false,
                    _ => return Err(LifeError::InvalidCell { ch, col, row }),
                };
                cells.push(alive);
            }
        }
        Ok(Self { width, height, cells })
    }

    /// Internal constructor for callers that already hold `width * height` cells.
    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn same_shape(&self, other: &Grid) -> bool {
        self.dimensions() == other.dimensions()
    }

    fn index(&self, col: usize, row: usize) -> LifeResult<usize> {
        if col < self.width && row < self.height {
            Ok(row * self.width + col)
        } else {
            Err(LifeError::OutOfRange {
                col,
                row,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Current state of one cell.
    pub fn get(&self, col: usize, row: usize) -> LifeResult<bool> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Replace one cell.
    pub fn set(&mut self, col: usize, row: usize, alive: bool) -> LifeResult<()> {
        let idx = self.index(col, row)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flip one cell and return its new state.
    pub fn toggle(&mut self, col: usize, row: usize) -> LifeResult<bool> {
        let idx = self.index(col, row)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// State at a signed coordinate, wrapped onto the torus.
    pub fn get_wrapped(&self, col: isize, row: isize) -> bool {
        let col = wrap(col, self.width);
        let row = wrap(row, self.height);
        self.cells[row * self.width + col]
    }

    /// Set a cell at a signed coordinate, wrapped onto the torus.
    pub fn set_wrapped(&mut self, col: isize, row: isize, alive: bool) {
        let col = wrap(col, self.width);
        let row = wrap(row, self.height);
        self.cells[row * self.width + col] = alive;
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(idx, _)| (idx % width, idx / width))
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// A fresh all-dead grid with new extents. Resizing never keeps cells.
    pub fn resized(&self, width: usize, height: usize) -> LifeResult<Grid> {
        Grid::new(width, height)
    }

    /// Same extents, every cell dead.
    pub fn cleared(&self) -> Grid {
        Grid::from_parts(self.width, self.height, vec![false; self.cells.len()])
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.rows().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for &alive in cells {
                f.write_str(if alive { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Number of cells in a `width` x `height` grid. Zero extents and products
/// that overflow `usize` are both invalid dimensions.
pub(crate) fn cell_count(width: usize, height: usize) -> LifeResult<usize> {
    match width.checked_mul(height) {
        Some(count) if count > 0 => Ok(count),
        _ => Err(LifeError::InvalidDimension { width, height }),
    }
}

/// Map a signed coordinate onto [0, extent).
pub(crate) fn wrap(coord: isize, extent: usize) -> usize {
    coord.rem_euclid(extent as isize) as usize
}
