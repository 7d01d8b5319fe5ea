use astarviz::waypoint::parse_overlay;
use astarviz::{CellState, Grid};

#[test]
fn parses_declared_dimension_exactly() {
    let text = "3\n1 1 0\n0 1 1\n1 0 1\n";
    let grid = Grid::from_text(text).unwrap();

    assert_eq!(grid.rows, 3);
    assert_eq!(grid.cols, 3);
    for row in 0..3 {
        for col in 0..3 {
            let state = grid.get(row, col);
            assert!(state == CellState::Free || state == CellState::Obstacle);
        }
    }
}

#[test]
fn two_by_two_example() {
    let grid = Grid::from_text("2\n1 0\n0 1\n").unwrap();

    assert_eq!(grid.get(0, 0), CellState::Free);
    assert_eq!(grid.get(0, 1), CellState::Obstacle);
    assert_eq!(grid.get(1, 0), CellState::Obstacle);
    assert_eq!(grid.get(1, 1), CellState::Free);
}

#[test]
fn overlay_sets_exactly_the_listed_cells() {
    let mut grid = Grid::from_text("2\n1 0\n0 1\n").unwrap();
    let overlay = parse_overlay("path len 2\n(0,1) (1,0)\n").unwrap();
    grid.apply_overlay(&overlay).unwrap();

    assert_eq!(grid.get(0, 1), CellState::Path);
    assert_eq!(grid.get(1, 0), CellState::Path);
    // untouched cells keep their state from the grid file
    assert_eq!(grid.get(0, 0), CellState::Free);
    assert_eq!(grid.get(1, 1), CellState::Free);
}

#[test]
fn overlay_out_of_bounds_is_an_error_and_changes_nothing() {
    let mut grid = Grid::from_text("2\n1 1\n1 1\n").unwrap();
    let before = grid.clone();

    assert!(grid.apply_overlay(&[(0, 0), (2, 0)]).is_err());
    assert_eq!(grid, before);
}

#[test]
fn rejects_short_grid_file() {
    assert!(Grid::from_text("3\n1 1 1\n1 1 1\n").is_err());
}

#[test]
fn rejects_short_row() {
    assert!(Grid::from_text("3\n1 1 1\n1 1\n1 1 1\n").is_err());
}

#[test]
fn rejects_non_numeric_cell() {
    assert!(Grid::from_text("2\n1 x\n0 1\n").is_err());
}

#[test]
fn rejects_cell_digit_outside_zero_one() {
    assert!(Grid::from_text("2\n1 3\n0 1\n").is_err());
}

#[test]
fn rejects_missing_dimension() {
    assert!(Grid::from_text("").is_err());
    assert!(Grid::from_text("abc\n1 1\n").is_err());
}

#[test]
fn ascii_dump_matches_cell_states() {
    let mut grid = Grid::from_text("2\n1 0\n0 1\n").unwrap();
    grid.apply_overlay(&[(1, 1)]).unwrap();

    assert_eq!(grid.to_ascii(), "□■\n■o\n");
}
