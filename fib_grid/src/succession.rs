// succession.rs - Detection of Fibonacci successions along a series of cells
//
// A series is any ordered run of cells: a full row, a full column, or a
// window clipped out of one. Nothing here mutates a cell.

use crate::cell::Cell;

/// Is `cur` the Fibonacci successor of `next`?
///
/// Reading a series left to right, `cur` holds the larger number and `next`
/// the one before it in the sequence. `before` is the cell preceding `cur` in
/// the series, or `None` at the start of the series. Two 1's in a row form a
/// valid pair, but a third 1 breaks the chain.
pub fn is_successor(cur: &Cell, next: &Cell, before: Option<&Cell>) -> bool {
    if cur.value() == 0 || next.value() == 0 {
        return false;
    }
    let chained = cur.value() == next.successor() && cur.predecessor() == next.value();
    let repeated_one =
        cur.value() == 1 && next.value() == 1 && before.is_none_or(|cell| cell.value() != 1);
    chained || repeated_one
}

/// Length of the succession each cell belongs to.
///
/// The series is split greedily, left to right, into maximal disjoint runs;
/// every cell of a run is assigned that run's length. A cell that chains with
/// nothing forms a run of 1.
pub fn succession_lengths(cells: &[&Cell]) -> Vec<usize> {
    let mut lengths = vec![0; cells.len()];
    let mut start = 0;
    while start < cells.len() {
        let mut end = start;
        while end + 1 < cells.len() {
            let before = end.checked_sub(1).map(|i| cells[i]);
            if !is_successor(cells[end], cells[end + 1], before) {
                break;
            }
            end += 1;
        }
        lengths[start..=end].fill(end - start + 1);
        start = end + 1;
    }
    lengths
}

/// Cells of the series that belong to a succession of at least `fib_len`.
///
/// The series is scanned forwards and reversed, since the greedy split can cut
/// a trailing run short in one direction only. Flagged cells come back in
/// series order, each at most once.
pub fn flagged_for_reset<'a>(cells: &[&'a Cell], fib_len: usize) -> Vec<&'a Cell> {
    let forward = succession_lengths(cells);
    let reversed: Vec<&Cell> = cells.iter().rev().copied().collect();
    let backward = succession_lengths(&reversed);

    let last = cells.len().saturating_sub(1);
    let flagged: Vec<&Cell> = cells
        .iter()
        .enumerate()
        .filter(|&(i, _)| forward[i] >= fib_len || backward[last - i] >= fib_len)
        .map(|(_, &cell)| cell)
        .collect();

    if !flagged.is_empty() {
        tracing::trace!(
            series_len = cells.len(),
            flagged = flagged.len(),
            "succession reached run length {fib_len}"
        );
    }
    flagged
}
