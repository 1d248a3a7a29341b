//! A grid puzzle where every cell climbs the Fibonacci sequence.
//!
//! Toggling a row/column pair pokes each of its cells once. Any run of
//! neighbouring cells whose values line up as consecutive Fibonacci numbers,
//! at least `fib_len` long, is cleared back to zero.
//!
//! ```
//! use fib_grid::Grid;
//!
//! let mut grid = Grid::new(10, 10, 3)?;
//! let toggle = grid.toggle(0, 0)?;
//! assert_eq!(toggle.advanced.len(), 19);
//! assert_eq!(grid.get(0, 0)?.value(), 1);
//! # Ok::<(), fib_grid::GridError>(())
//! ```

mod cell;      // Per-cell Fibonacci state
mod config;    // Grid shape and threshold
mod error;     // Caller errors
mod grid;      // Toggle orchestration
pub mod succession;

pub use cell::{Cell, Position};
pub use config::{GridConfig, DEFAULT_FIB_LEN, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_DIMENSION, MIN_FIB_LEN};
pub use error::{GridError, Result};
pub use grid::{Grid, Toggle};
