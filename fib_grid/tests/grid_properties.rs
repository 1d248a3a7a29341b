use fib_grid::succession::{flagged_for_reset, is_successor, succession_lengths};
use fib_grid::{Cell, Grid, GridConfig, GridError, Position};
use proptest::prelude::*;

fn cell_with_value(x: usize, value: u64) -> Cell {
    let mut cell = Cell::new(x, 0);
    for _ in 0..value {
        cell.advance();
    }
    cell
}

fn series(values: &[u64]) -> Vec<Cell> {
    values.iter().enumerate().map(|(x, &v)| cell_with_value(x, v)).collect()
}

fn grid_and_toggles() -> impl Strategy<Value = (GridConfig, Vec<(usize, usize)>)> {
    (1usize..8, 1usize..8, 3usize..6).prop_flat_map(|(width, height, fib_len)| {
        (
            Just(GridConfig::new(width, height, fib_len)),
            prop::collection::vec((0..height, 0..width), 0..40),
        )
    })
}

#[test]
fn repeated_toggle_at_origin_only_touches_row_and_column() {
    let mut grid = Grid::new(10, 10, 3).unwrap();
    let intervals = [(1, 1), (1, 2), (2, 3), (3, 5), (5, 8), (5, 8), (5, 8), (8, 13)];
    for (n, &(prev, cur)) in intervals.iter().enumerate() {
        let toggle = grid.toggle(0, 0).unwrap();
        assert!(toggle.reset.is_empty());
        assert_eq!(toggle.advanced.len(), 19);

        let origin = grid.get(0, 0).unwrap();
        assert_eq!(origin.value(), n as u64 + 1);
        assert_eq!((origin.prev(), origin.cur()), (prev, cur));
        assert_eq!(grid.get(9, 0).unwrap().value(), n as u64 + 1);
        assert_eq!(grid.get(0, 9).unwrap().value(), n as u64 + 1);
        assert_eq!(grid.get(1, 1).unwrap().value(), 0);
        assert_eq!(grid.get(9, 9).unwrap().value(), 0);
    }
}

#[test]
fn one_one_two_series_is_flagged_whole() {
    let cells = series(&[1, 1, 2]);
    let refs: Vec<&Cell> = cells.iter().collect();
    let flagged: Vec<Position> = flagged_for_reset(&refs, 3).into_iter().map(Cell::position).collect();
    assert_eq!(flagged, vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]);
}

#[test]
fn invalid_reset_and_toggle_are_rejected() {
    let mut grid = Grid::new(10, 10, 3).unwrap();
    assert!(matches!(grid.reset(10, 10, 2), Err(GridError::InvalidDimension { .. })));
    assert!(matches!(grid.toggle(10, 0), Err(GridError::OutOfBounds { .. })));
    assert!(matches!(Grid::new(0, 10, 3), Err(GridError::InvalidDimension { .. })));
}

#[test]
fn errors_render_for_the_caller() {
    let err = Grid::new(10, 10, 2).unwrap_err();
    assert!(err.to_string().contains("run length 2"));
    let err = Grid::new(3, 3, 3).unwrap().toggle(0, 7).unwrap_err();
    assert_eq!(err.to_string(), "toggle at row 0, column 7 is outside a 3x3 grid");
}

proptest! {
    #[test]
    fn run_lengths_partition_the_series(values in prop::collection::vec(0u64..15, 0..30)) {
        let cells = series(&values);
        let refs: Vec<&Cell> = cells.iter().collect();
        let lengths = succession_lengths(&refs);
        prop_assert_eq!(lengths.len(), values.len());

        let mut i = 0;
        while i < lengths.len() {
            let run = lengths[i];
            prop_assert!(run >= 1 && run <= values.len());
            prop_assert!(i + run <= lengths.len());
            prop_assert!(lengths[i..i + run].iter().all(|&l| l == run));
            i += run;
        }
        prop_assert_eq!(i, lengths.len());
    }

    #[test]
    fn zero_valued_cells_never_chain(a in 0u64..15, b in 0u64..15, before in prop::option::of(0u64..15)) {
        let cur = cell_with_value(0, a);
        let next = cell_with_value(1, b);
        let before = before.map(|v| cell_with_value(2, v));
        if a == 0 || b == 0 {
            prop_assert!(!is_successor(&cur, &next, before.as_ref()));
        }
    }

    #[test]
    fn ones_pair_only_without_a_preceding_one(before in prop::option::of(0u64..4)) {
        let one = cell_with_value(0, 1);
        let before_cell = before.map(|v| cell_with_value(2, v));
        let expected = before != Some(1);
        prop_assert_eq!(is_successor(&one, &one, before_cell.as_ref()), expected);
    }

    #[test]
    fn toggles_keep_cells_ordered_and_in_place((config, toggles) in grid_and_toggles()) {
        let mut grid = Grid::with_config(config).unwrap();
        for (row, col) in toggles {
            let toggle = grid.toggle(row, col).unwrap();
            prop_assert_eq!(toggle.advanced.len(), config.width + config.height - 1);
            prop_assert!(toggle.reset.iter().all(Cell::is_fresh));
        }
        for y in 0..config.height {
            for x in 0..config.width {
                let cell = grid.get(x, y).unwrap();
                prop_assert_eq!(cell.position(), Position::new(x, y));
                prop_assert!(cell.prev() <= cell.cur());
                prop_assert!(cell.value() <= cell.cur());
            }
        }
    }

    #[test]
    fn single_toggle_advances_the_crossing_once((config, toggles) in grid_and_toggles()) {
        prop_assume!(!toggles.is_empty());
        let mut grid = Grid::with_config(config).unwrap();
        let (row, col) = toggles[0];
        grid.toggle(row, col).unwrap();
        prop_assert!(grid.get(col, row).unwrap().value() <= 1);
    }

    #[test]
    fn reset_leaves_every_cell_fresh((config, toggles) in grid_and_toggles(), width in 1usize..8, height in 1usize..8) {
        let mut grid = Grid::with_config(config).unwrap();
        for (row, col) in toggles {
            grid.toggle(row, col).unwrap();
        }
        grid.reset(width, height, 3).unwrap();
        prop_assert_eq!(grid.cells().count(), width * height);
        prop_assert!(grid.cells().all(Cell::is_fresh));
    }

    #[test]
    fn reads_do_not_mutate((config, toggles) in grid_and_toggles()) {
        let mut grid = Grid::with_config(config).unwrap();
        for (row, col) in toggles {
            grid.toggle(row, col).unwrap();
        }
        let before = grid.clone();
        for y in 0..config.height {
            for x in 0..config.width {
                prop_assert_eq!(grid.get(x, y).unwrap(), grid.get(x, y).unwrap());
            }
        }
        prop_assert_eq!(grid, before);
    }
}
