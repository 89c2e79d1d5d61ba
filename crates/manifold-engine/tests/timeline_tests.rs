//! Counting behavior on hand-built grids

use manifold_engine::{count_divisions, count_timelines, count_timelines_with, Strategy};
use manifold_grid::Grid;
use std::io::Write;

fn grid(lines: &[&str]) -> Grid {
    Grid::from_lines(lines).unwrap()
}

fn both(g: &Grid) -> (u64, u64) {
    (
        count_timelines_with(g, Strategy::Dense).unwrap(),
        count_timelines_with(g, Strategy::Sparse).unwrap(),
    )
}

#[test]
fn test_no_splitters_single_timeline() {
    let g = grid(&["S....", ".....", ".....", ".....", "....."]);
    assert_eq!(both(&g), (1, 1));
    assert_eq!(count_divisions(&g).unwrap(), 0);
}

#[test]
fn test_start_on_last_row_counts_zero() {
    let g = grid(&["...", ".S."]);
    assert_eq!(both(&g), (0, 0));
    assert_eq!(count_divisions(&g).unwrap(), 0);

    let single = grid(&["S"]);
    assert_eq!(both(&single), (0, 0));
}

#[test]
fn test_single_splitter_forks_two() {
    let g = grid(&[".S.", ".^.", "..."]);
    assert_eq!(both(&g), (2, 2));
    assert_eq!(count_divisions(&g).unwrap(), 1);
}

#[test]
fn test_left_edge_splitter_keeps_right_branch_only() {
    let g = grid(&["S.", "^.", ".."]);
    assert_eq!(both(&g), (1, 1));
    // The division still happened; only the branch was lost.
    assert_eq!(count_divisions(&g).unwrap(), 1);
}

#[test]
fn test_adjacent_edge_splitters() {
    let g = grid(&["S..", "^.^", "..."]);
    assert_eq!(both(&g), (1, 1));
}

#[test]
fn test_single_column_splitter_loses_everything() {
    // Both diagonals of a width-one grid are out of bounds.
    let g = grid(&["S", "^", "."]);
    assert_eq!(both(&g), (0, 0));
    assert_eq!(count_divisions(&g).unwrap(), 1);
}

#[test]
fn test_cascade_multiplies() {
    let g = grid(&["..S..", "..^..", ".^.^.", "....."]);
    assert_eq!(both(&g), (4, 4));
    assert_eq!(count_divisions(&g).unwrap(), 3);
}

#[test]
fn test_converging_branches_accumulate() {
    // The two inner branches land on the same column and travel on with a
    // combined count.
    let g = grid(&["..S..", "..^..", ".^.^.", ".....", "....."]);
    assert_eq!(both(&g), (4, 4));
}

#[test]
fn test_counting_is_idempotent() {
    let g = grid(&["..S..", "..^..", ".^.^.", "....."]);
    assert_eq!(count_timelines(&g).unwrap(), count_timelines(&g).unwrap());
    assert_eq!(count_divisions(&g).unwrap(), count_divisions(&g).unwrap());
}

#[test]
fn test_default_strategy_is_dense() {
    let g = grid(&[".S.", ".^.", "..."]);
    assert_eq!(
        count_timelines(&g).unwrap(),
        count_timelines_with(&g, Strategy::Dense).unwrap()
    );
}

#[test]
fn test_ragged_rows_terminate_paths() {
    // The middle row is short; the start column falls on padding there.
    let g = grid(&["..S", "..", "..."]);
    assert_eq!(both(&g), (0, 0));
}

#[test]
fn test_cells_above_start_are_ignored() {
    // Splitters above or beside the start never receive a count.
    let g = grid(&["^^S", "...", "..."]);
    assert_eq!(both(&g), (1, 1));
    assert_eq!(count_divisions(&g).unwrap(), 0);
}

#[test]
fn test_counting_a_grid_loaded_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "..S..").unwrap();
    writeln!(file, "..^..").unwrap();
    writeln!(file, ".^.^.").unwrap();
    writeln!(file, ".....").unwrap();

    let g = Grid::from_path(file.path()).unwrap();
    assert_eq!(both(&g), (4, 4));
    assert_eq!(count_divisions(&g).unwrap(), 3);
}
