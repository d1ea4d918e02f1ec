//! Hand-built situations with exactly known outcomes.
//!
//! Radius-0 spawns place a single particle at an exact cell, which is how the boards below
//! are laid out.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sand_grid::{ColorCursor, Grid, GridError};

fn board(width: u32, height: u32) -> Grid<StdRng> {
    Grid::new(width, height, 1.0, 1.0, 0, 1)
        .unwrap()
        .with_rng(StdRng::seed_from_u64(42))
}

fn only_particle(grid: &Grid<StdRng>) -> (usize, usize) {
    let cells: Vec<_> = grid.cells_snapshot().occupied().collect();
    assert_eq!(cells.len(), 1);
    (cells[0].0, cells[0].1)
}

#[test]
fn single_grain_accelerates_to_the_floor() {
    let mut grid = board(10, 10);
    grid.spawn(5, 0);

    let mut rows = Vec::new();
    for _ in 0..9 {
        grid.step();
        let (row, col) = only_particle(&grid);
        assert_eq!(col, 5);
        rows.push(row);
    }
    assert_eq!(rows, vec![1, 3, 6, 9, 9, 9, 9, 9, 9]);
}

#[test]
fn grain_settles_on_a_packed_floor() {
    let mut grid = board(7, 12);
    for col in 0..7 {
        grid.spawn(col, 11);
    }
    grid.spawn(3, 0);

    let mut last_row = 0;
    for _ in 0..12 {
        grid.step();
        let above_floor: Vec<_> = grid
            .cells_snapshot()
            .occupied()
            .filter(|&(row, _, _)| row < 11)
            .collect();
        assert_eq!(above_floor.len(), 1);
        let (row, col, _) = above_floor[0];
        assert_eq!(col, 3);
        assert!(row >= last_row, "grain moved up from {} to {}", last_row, row);
        last_row = row;
    }
    assert_eq!(last_row, 10);
    assert_eq!(grid.occupied_count(), 8);
}

#[test]
fn blocked_grain_with_no_diagonal_stays() {
    let mut grid = board(10, 10);
    for col in 4..=6 {
        grid.spawn(col, 9);
    }
    grid.spawn(5, 8);

    grid.step();
    let snapshot = grid.cells_snapshot();
    assert!(snapshot.is_occupied(8, 5));
    assert_eq!(grid.occupied_count(), 4);
}

#[test]
fn grain_topples_to_the_only_open_diagonal() {
    let mut grid = board(10, 10);
    for col in 4..=5 {
        grid.spawn(col, 9);
    }
    grid.spawn(5, 8);

    grid.step();
    let snapshot = grid.cells_snapshot();
    assert!(!snapshot.is_occupied(8, 5));
    assert!(snapshot.is_occupied(9, 6));
}

#[test]
fn both_diagonals_are_used_over_many_topples() {
    let mut went_left = false;
    let mut went_right = false;
    for seed in 0..32 {
        let mut grid = Grid::new(3, 2, 1.0, 1.0, 0, 1)
            .unwrap()
            .with_rng(StdRng::seed_from_u64(seed));
        grid.spawn(1, 1);
        grid.spawn(1, 0);
        grid.step();
        let snapshot = grid.cells_snapshot();
        went_left |= snapshot.is_occupied(1, 0);
        went_right |= snapshot.is_occupied(1, 2);
        assert!(!snapshot.is_occupied(0, 1));
    }
    assert!(went_left && went_right);
}

#[test]
fn opposite_topples_do_not_share_a_cell() {
    let mut grid = board(5, 2);
    for col in [0, 1, 3, 4] {
        grid.spawn(col, 1);
    }
    grid.spawn(1, 0);
    grid.spawn(3, 0);

    grid.step();
    let snapshot = grid.cells_snapshot();
    assert_eq!(grid.occupied_count(), 6);
    assert!((0..5).all(|col| snapshot.is_occupied(1, col)));
    assert!(!snapshot.is_occupied(0, 1));
    assert!(snapshot.is_occupied(0, 3));
}

#[test]
fn leap_stops_above_an_obstruction() {
    // a single column has no diagonals, so grains only stack
    let mut grid = board(1, 10);
    grid.spawn(0, 9);
    grid.spawn(0, 5);
    grid.step();
    grid.step();
    let stacked: Vec<_> = grid.cells_snapshot().occupied().map(|(r, _, _)| r).collect();
    assert_eq!(stacked, vec![8, 9]);

    grid.spawn(0, 0);
    let mut top_rows = Vec::new();
    for _ in 0..4 {
        grid.step();
        let (top, _, _) = grid.cells_snapshot().occupied().next().unwrap();
        top_rows.push(top);
    }
    // the last leap would reach the floor but stops on the stack
    assert_eq!(top_rows, vec![1, 3, 6, 7]);
    assert_eq!(grid.occupied_count(), 3);
}

#[test]
fn spawned_colors_follow_the_grid_cursor() {
    let mut grid = board(4, 4).with_color_cursor(ColorCursor::new(30.0));
    grid.spawn(0, 0);
    grid.spawn(1, 0);

    let mut expected = ColorCursor::new(30.0);
    let snapshot = grid.cells_snapshot();
    assert_eq!(snapshot.get(0, 0), Some(expected.next_color()));
    assert_eq!(snapshot.get(0, 1), Some(expected.next_color()));
}

#[test]
fn degenerate_grids_are_rejected() {
    assert!(matches!(
        Grid::new(0, 0, 4.0, 1.0, 10, 20),
        Err(GridError::EmptyGrid { .. })
    ));
    assert!(matches!(
        Grid::new(100, 100, -2.0, 1.0, 10, 20),
        Err(GridError::InvalidCellSize(_))
    ));
}
