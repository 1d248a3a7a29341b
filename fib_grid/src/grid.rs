// grid.rs - A width x height array of Fibonacci cells and the toggle mechanic

use std::fmt;

use indexmap::IndexSet;

use crate::cell::{Cell, Position};
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::succession::flagged_for_reset;

/// Outcome of a single toggle, as snapshots taken once the toggle completed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toggle {
    /// Every cell poked by the toggle: the toggled row left to right, then the
    /// toggled column top to bottom without the crossing cell.
    pub advanced: Vec<Cell>,
    /// Every cell cleared because it joined a long enough succession.
    pub reset: Vec<Cell>,
}

/// The Fibonacci grid. Cells are stored row-major; the cell at `(x, y)` sits
/// in column `x` of row `y`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    config: GridConfig,
    cells: Vec<Cell>,
}

fn build_cells(config: &GridConfig) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(config.cell_count());
    for y in 0..config.height {
        for x in 0..config.width {
            cells.push(Cell::new(x, y));
        }
    }
    cells
}

impl Grid {
    pub fn new(width: usize, height: usize, fib_len: usize) -> Result<Self> {
        Self::with_config(GridConfig::new(width, height, fib_len))
    }

    pub fn with_config(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            cells: build_cells(&config),
            config,
        })
    }

    /// Throw away every cell and rebuild the grid at a new shape.
    ///
    /// The grid is left untouched if the shape is rejected.
    pub fn reset(&mut self, width: usize, height: usize, fib_len: usize) -> Result<()> {
        self.reset_with_config(GridConfig::new(width, height, fib_len))
    }

    pub fn reset_with_config(&mut self, config: GridConfig) -> Result<()> {
        config.validate()?;
        self.cells = build_cells(&config);
        self.config = config;
        tracing::debug!(
            width = config.width,
            height = config.height,
            fib_len = config.fib_len,
            "grid rebuilt"
        );
        Ok(())
    }

    pub fn config(&self) -> GridConfig { self.config }
    pub fn width(&self) -> usize { self.config.width }
    pub fn height(&self) -> usize { self.config.height }
    pub fn fib_len(&self) -> usize { self.config.fib_len }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.config.width + x
    }

    /// Snapshot of the cell at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell> {
        if x >= self.width() || y >= self.height() {
            return Err(GridError::CellOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(self.cells[self.index(x, y)])
    }

    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height() {
            return None;
        }
        let start = self.index(0, row);
        Some(&self.cells[start..start + self.width()])
    }

    pub fn column(&self, col: usize) -> Option<Vec<Cell>> {
        if col >= self.width() {
            return None;
        }
        Some(self.column_series(col).into_iter().copied().collect())
    }

    fn row_series(&self, row: usize) -> Vec<&Cell> {
        self.row_window_span(row, 0, self.width())
    }

    fn column_series(&self, col: usize) -> Vec<&Cell> {
        self.column_window_span(col, 0, self.height())
    }

    fn row_window_span(&self, row: usize, from: usize, to: usize) -> Vec<&Cell> {
        (from..to).map(|x| &self.cells[self.index(x, row)]).collect()
    }

    fn column_window_span(&self, col: usize, from: usize, to: usize) -> Vec<&Cell> {
        (from..to).map(|y| &self.cells[self.index(col, y)]).collect()
    }

    /// Stretch of column `x` reaching `fib_len` cells above and below row `y`,
    /// clipped to the grid.
    fn column_window(&self, x: usize, y: usize) -> Vec<&Cell> {
        let reach = self.fib_len();
        let to = (y + reach + 1).min(self.height());
        self.column_window_span(x, y.saturating_sub(reach), to)
    }

    /// Stretch of row `y` reaching `fib_len` cells left and right of column `x`,
    /// clipped to the grid.
    fn row_window(&self, x: usize, y: usize) -> Vec<&Cell> {
        let reach = self.fib_len();
        let to = (x + reach + 1).min(self.width());
        self.row_window_span(y, x.saturating_sub(reach), to)
    }

    /// Poke every cell of row `row` and column `col` once, then clear every
    /// succession of at least `fib_len` cells the pokes could have completed.
    ///
    /// The cell where the row and column cross is advanced only once.
    /// Out-of-range coordinates are rejected before any cell changes.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Toggle> {
        if row >= self.height() || col >= self.width() {
            return Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width(),
                height: self.height(),
            });
        }

        let advanced: Vec<Position> = (0..self.width())
            .map(|x| Position::new(x, row))
            .chain((0..self.height()).filter(|&y| y != row).map(|y| Position::new(col, y)))
            .collect();
        for pos in &advanced {
            let i = self.index(pos.x, pos.y);
            self.cells[i].advance();
        }

        let flagged = self.flagged_after_toggle(row, col);
        for pos in &flagged {
            let i = self.index(pos.x, pos.y);
            self.cells[i].reset();
        }

        tracing::debug!(
            row,
            col,
            advanced = advanced.len(),
            reset = flagged.len(),
            "toggled"
        );

        Ok(Toggle {
            advanced: advanced.iter().map(|p| self.cells[self.index(p.x, p.y)]).collect(),
            reset: flagged.iter().map(|p| self.cells[self.index(p.x, p.y)]).collect(),
        })
    }

    /// Every series a toggle at (`row`, `col`) could have changed: the column
    /// window through each cell of the row, the row window through each cell
    /// of the column, then the full row and the full column.
    fn flagged_after_toggle(&self, row: usize, col: usize) -> IndexSet<Position> {
        let fib_len = self.fib_len();
        let mut flagged = IndexSet::new();
        let mut scan = |series: Vec<&Cell>| {
            flagged.extend(flagged_for_reset(&series, fib_len).into_iter().map(Cell::position));
        };

        for x in 0..self.width() {
            scan(self.column_window(x, row));
        }
        for y in 0..self.height() {
            scan(self.row_window(col, y));
        }
        scan(self.row_series(row));
        scan(self.column_series(col));

        flagged
    }
}

impl Default for Grid {
    fn default() -> Self {
        let config = GridConfig::default();
        Self {
            cells: build_cells(&config),
            config,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width()).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
