//! Conway's Game of Life on a torus.
//!
//! A [`Grid`] is a fixed rectangle of live/dead cells whose left edge touches
//! its right edge and whose top touches its bottom. [`update_grid`] computes
//! the next generation from one snapshot; [`randomize_cell_status`] and
//! [`Randomizer`] produce random boards; [`is_settled`] and [`History`] tell a
//! driver when a run has stopped changing.
//!
//! Every operation returns a new grid. Nothing here renders, schedules or
//! loops; that is left to whoever drives the simulation.
//!
//! ```
//! use torus_life::{Grid, is_settled, update_grid};
//!
//! let blinker = Grid::from_rows(&[".....", ".....", ".###.", ".....", "....."]).unwrap();
//! let next = update_grid(&blinker);
//! assert_eq!(next.to_string(), ".....\n..#..\n..#..\n..#..\n.....");
//! assert!(!is_settled(&blinker, &next).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod random;
pub mod rules;
pub mod step;

pub use config::{LifeConfig, RandomConfig, clamp_dimension, clamp_interval_ms};
pub use error::{LifeError, LifeResult};
pub use grid::{Grid, create_grid};
pub use history::{History, Verdict, fingerprint, is_settled};
pub use patterns::{PATTERNS, Pattern, pattern_by_name};
pub use random::{Randomizer, randomize_cell_status};
pub use rules::{cell_status, live_neighbors, next_state};
pub use step::{Generations, Stepper, SyncStepper, step_n, update_grid};
