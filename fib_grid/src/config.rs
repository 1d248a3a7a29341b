// config.rs - Grid dimensions and run-length threshold

use crate::error::{GridError, Result};

pub const MIN_DIMENSION: usize = 1;    // Smallest allowed width/height
pub const MIN_FIB_LEN: usize = 3;      // Shortest run that can trigger a reset
pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;
pub const DEFAULT_FIB_LEN: usize = 5;

/// Shape of a grid: `width` columns, `height` rows, and the run length
/// (`fib_len`) at which a Fibonacci succession is cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub fib_len: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fib_len: DEFAULT_FIB_LEN,
        }
    }
}

impl GridConfig {
    pub fn new(width: usize, height: usize, fib_len: usize) -> Self {
        Self { width, height, fib_len }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION || self.fib_len < MIN_FIB_LEN {
            return Err(GridError::InvalidDimension {
                width: self.width,
                height: self.height,
                fib_len: self.fib_len,
            });
        }
        Ok(())
    }

    /// Number of cells a grid of this shape holds.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}
