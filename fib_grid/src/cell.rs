// cell.rs - A single grid position tracking its progress through the Fibonacci sequence

use std::fmt;

/// Identity of a cell: its column (`x`) and row (`y`) in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One cell of a Fibonacci grid.
///
/// The cell sits between the Fibonacci numbers `prev` and `cur`, and `value`
/// counts the pokes it has received since the last reset. Once `value`
/// reaches `cur` the interval rolls forward to the next Fibonacci pair.
///
/// Cells are `Copy`, so every value handed out by the grid is a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    position: Position,
    prev: u64,
    cur: u64,
    value: u64,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            position: Position::new(x, y),
            prev: 0,
            cur: 1,
            value: 0,
        }
    }

    pub fn position(&self) -> Position { self.position }
    pub fn x(&self) -> usize { self.position.x }
    pub fn y(&self) -> usize { self.position.y }

    /// Lower Fibonacci bound of the current interval.
    pub fn prev(&self) -> u64 { self.prev }

    /// Upper Fibonacci bound of the current interval.
    pub fn cur(&self) -> u64 { self.cur }

    pub fn value(&self) -> u64 { self.value }

    /// Poke the cell once, rolling the interval when `value` reaches `cur`.
    pub fn advance(&mut self) {
        self.value += 1;
        if self.value >= self.cur {
            self.roll();
        }
    }

    fn roll(&mut self) {
        let next = self.successor();
        self.prev = self.cur;
        self.cur = next;
    }

    pub fn reset(&mut self) {
        self.prev = 0;
        self.cur = 1;
        self.value = 0;
    }

    /// The upper bound that follows `cur`.
    ///
    /// When `value` sits exactly on `prev` (and is not the repeated 1 at the
    /// start of the sequence) the interval has already widened, so `cur` is
    /// returned unchanged.
    pub fn successor(&self) -> u64 {
        if self.value == self.prev && self.value != 1 {
            return self.cur;
        }
        self.cur + self.prev
    }

    /// The value a neighbouring cell must hold to precede this one in a
    /// Fibonacci succession.
    pub fn predecessor(&self) -> u64 {
        if self.value == self.prev {
            return self.cur - self.prev;
        }
        self.prev
    }

    /// True when the cell is in the state produced by `new` or `reset`.
    pub fn is_fresh(&self) -> bool {
        self.prev == 0 && self.cur == 1 && self.value == 0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
pub(crate) fn cell_with_value(x: usize, y: usize, value: u64) -> Cell {
    let mut cell = Cell::new(x, y);
    for _ in 0..value {
        cell.advance();
    }
    cell
}
