// error.rs - Errors surfaced to callers of the grid

/// Caller errors rejected before the grid is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Width or height below 1, or a run length below 3
    #[error("invalid grid shape {width}x{height} with run length {fib_len} (need width, height >= 1 and run length >= 3)")]
    InvalidDimension {
        width: usize,
        height: usize,
        fib_len: usize,
    },

    /// Toggle coordinates outside the grid
    #[error("toggle at row {row}, column {col} is outside a {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// Lookup coordinates outside the grid
    #[error("cell ({x}, {y}) is outside a {width}x{height} grid")]
    CellOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
