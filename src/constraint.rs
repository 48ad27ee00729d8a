//! This module contains the conflict checks applied during puzzle
//! generation: digit uniqueness in each row, each column, and each 3x3
//! sub-grid.
//!
//! The checks are independent, read-only predicates over the current grid
//! state. [has_conflict] combines them with a short-circuiting logical OR,
//! which is what the [generator](crate::generator) uses to prune its
//! backtracking search. None of the checks ever mutates the grid, so they
//! are safe to call repeatedly and from shared references.

use crate::{BLOCK_SIZE, SIZE, SudokuGrid};
use crate::error::{SudokuError, SudokuResult};
use crate::util::DigitSet;

/// Indicates whether any cell in the given row already holds the given
/// number.
///
/// # Arguments
///
/// * `grid`: The grid whose row to scan.
/// * `row`: The row (y-coordinate) to scan. Must be in the range `[0, 9)`.
/// * `number`: The number to look for.
///
/// # Errors
///
/// If `row` is not in the specified range. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn is_in_row(grid: &SudokuGrid, row: usize, number: usize)
        -> SudokuResult<bool> {
    if row >= SIZE {
        return Err(SudokuError::OutOfBounds);
    }

    for column in 0..SIZE {
        if grid.has_number(column, row, number)? {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Indicates whether any cell in the given column already holds the given
/// number.
///
/// # Arguments
///
/// * `grid`: The grid whose column to scan.
/// * `column`: The column (x-coordinate) to scan. Must be in the range
/// `[0, 9)`.
/// * `number`: The number to look for.
///
/// # Errors
///
/// If `column` is not in the specified range. In that case,
/// `SudokuError::OutOfBounds` is returned.
pub fn is_in_column(grid: &SudokuGrid, column: usize, number: usize)
        -> SudokuResult<bool> {
    if column >= SIZE {
        return Err(SudokuError::OutOfBounds);
    }

    for row in 0..SIZE {
        if grid.has_number(column, row, number)? {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Indicates whether any cell within the 3x3 sub-grid containing the given
/// position already holds the given number. The sub-grid is derived from
/// the coordinates; it is anchored at `((column / 3) * 3, (row / 3) * 3)`.
///
/// # Arguments
///
/// * `grid`: The grid whose sub-grid to scan.
/// * `column`: The column (x-coordinate) of a cell in the scanned sub-grid.
/// Must be in the range `[0, 9)`.
/// * `row`: The row (y-coordinate) of a cell in the scanned sub-grid. Must
/// be in the range `[0, 9)`.
/// * `number`: The number to look for.
///
/// # Errors
///
/// If either `column` or `row` are not in the specified range. In that
/// case, `SudokuError::OutOfBounds` is returned.
pub fn is_in_sub_grid(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> SudokuResult<bool> {
    if column >= SIZE || row >= SIZE {
        return Err(SudokuError::OutOfBounds);
    }

    let block_column = (column / BLOCK_SIZE) * BLOCK_SIZE;
    let block_row = (row / BLOCK_SIZE) * BLOCK_SIZE;

    for other_row in block_row..(block_row + BLOCK_SIZE) {
        for other_column in block_column..(block_column + BLOCK_SIZE) {
            if grid.has_number(other_column, other_row, number)? {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

/// Indicates whether placing the given number at the given position would
/// collide with a digit already present in the same row, column, or 3x3
/// sub-grid. This is the logical OR of [is_in_row], [is_in_column], and
/// [is_in_sub_grid], evaluated against the current grid state before any
/// placement. The check never mutates the grid.
///
/// Note that the cell at the queried position itself is part of its row,
/// column, and sub-grid, so querying a number that is already placed at
/// that exact position reports a conflict.
///
/// # Arguments
///
/// * `grid`: The grid to check against.
/// * `column`: The column (x-coordinate) of the prospective placement. Must
/// be in the range `[0, 9)`.
/// * `row`: The row (y-coordinate) of the prospective placement. Must be in
/// the range `[0, 9)`.
/// * `number`: The number whose placement is being considered.
///
/// # Errors
///
/// If either `column` or `row` are not in the specified range. In that
/// case, `SudokuError::OutOfBounds` is returned.
pub fn has_conflict(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> SudokuResult<bool> {
    Ok(is_in_row(grid, row, number)? ||
        is_in_column(grid, column, number)? ||
        is_in_sub_grid(grid, column, row, number)?)
}

fn all_groups_free_of_duplicates(grid: &SudokuGrid,
        cell_at: impl Fn(usize, usize) -> (usize, usize)) -> bool {
    let mut set = DigitSet::new();

    for group in 0..SIZE {
        set.clear();

        for element in 0..SIZE {
            let (column, row) = cell_at(group, element);

            if let Some(number) = grid.get_cell(column, row).unwrap() {
                if !set.insert(number).unwrap() {
                    return false;
                }
            }
        }
    }

    true
}

fn sub_grid_cell(block: usize, element: usize) -> (usize, usize) {
    let base_column = (block % BLOCK_SIZE) * BLOCK_SIZE;
    let base_row = (block / BLOCK_SIZE) * BLOCK_SIZE;
    (base_column + element % BLOCK_SIZE, base_row + element / BLOCK_SIZE)
}

/// Indicates whether the given grid is free of duplicates, that is, no two
/// filled cells in the same row, column, or 3x3 sub-grid hold the same
/// digit. Empty cells are permitted.
pub fn is_valid(grid: &SudokuGrid) -> bool {
    all_groups_free_of_duplicates(grid, |row, column| (column, row)) &&
        all_groups_free_of_duplicates(grid, |column, row| (column, row)) &&
        all_groups_free_of_duplicates(grid, sub_grid_cell)
}

/// Indicates whether the given grid is a complete, valid solution, that is,
/// it is full and every row, column, and 3x3 sub-grid holds a permutation
/// of the digits 1 to 9.
pub fn is_solved(grid: &SudokuGrid) -> bool {
    grid.is_full() && is_valid(grid)
}

#[cfg(test)]
mod tests {

    use super::*;

    fn grid_with(entries: &[(usize, usize, usize)]) -> SudokuGrid {
        let mut grid = SudokuGrid::new();

        for &(column, row, number) in entries {
            grid.set_cell(column, row, number).unwrap();
        }

        grid
    }

    #[test]
    fn empty_grid_has_no_conflicts() {
        let grid = SudokuGrid::new();

        for number in 1..=9 {
            assert!(!is_in_row(&grid, 0, number).unwrap());
            assert!(!is_in_column(&grid, 0, number).unwrap());
            assert!(!is_in_sub_grid(&grid, 4, 4, number).unwrap());
            assert!(!has_conflict(&grid, 8, 8, number).unwrap());
        }
    }

    #[test]
    fn row_check_only_sees_its_row() {
        let grid = grid_with(&[(0, 0, 5)]);

        assert!(is_in_row(&grid, 0, 5).unwrap());
        assert!(!is_in_row(&grid, 1, 5).unwrap());
        assert!(!is_in_row(&grid, 0, 6).unwrap());
    }

    #[test]
    fn column_check_only_sees_its_column() {
        let grid = grid_with(&[(0, 0, 5)]);

        assert!(is_in_column(&grid, 0, 5).unwrap());
        assert!(!is_in_column(&grid, 1, 5).unwrap());
        assert!(!is_in_column(&grid, 0, 6).unwrap());
    }

    #[test]
    fn sub_grid_check_only_sees_its_block() {
        let grid = grid_with(&[(0, 0, 5)]);

        assert!(is_in_sub_grid(&grid, 0, 0, 5).unwrap());
        assert!(is_in_sub_grid(&grid, 2, 2, 5).unwrap());
        assert!(!is_in_sub_grid(&grid, 3, 3, 5).unwrap());
        assert!(!is_in_sub_grid(&grid, 0, 3, 5).unwrap());
    }

    #[test]
    fn conflict_covers_row_column_and_sub_grid() {
        // A single 5 in the top-left corner blocks its row, column, and
        // block, but nothing beyond.
        let grid = grid_with(&[(0, 0, 5)]);

        assert!(has_conflict(&grid, 1, 0, 5).unwrap());
        assert!(has_conflict(&grid, 0, 1, 5).unwrap());
        assert!(has_conflict(&grid, 1, 1, 5).unwrap());
        assert!(has_conflict(&grid, 2, 2, 5).unwrap());
        assert!(!has_conflict(&grid, 3, 3, 5).unwrap());
    }

    #[test]
    fn conflict_is_or_of_individual_checks() {
        let grid = grid_with(&[(0, 0, 5), (4, 4, 5), (8, 2, 3)]);

        for row in 0..SIZE {
            for column in 0..SIZE {
                for number in 1..=9 {
                    let expected = is_in_row(&grid, row, number).unwrap() ||
                        is_in_column(&grid, column, number).unwrap() ||
                        is_in_sub_grid(&grid, column, row, number).unwrap();
                    assert_eq!(expected,
                        has_conflict(&grid, column, row, number).unwrap());
                }
            }
        }
    }

    #[test]
    fn checks_reject_out_of_bounds() {
        let grid = SudokuGrid::new();

        assert_eq!(Err(SudokuError::OutOfBounds),
            is_in_row(&grid, 9, 1));
        assert_eq!(Err(SudokuError::OutOfBounds),
            is_in_column(&grid, 9, 1));
        assert_eq!(Err(SudokuError::OutOfBounds),
            is_in_sub_grid(&grid, 9, 0, 1));
        assert_eq!(Err(SudokuError::OutOfBounds),
            has_conflict(&grid, 0, 9, 1));
    }

    #[test]
    fn valid_partial_grid_accepted() {
        let grid = grid_with(&[(0, 0, 1), (1, 0, 2), (0, 1, 3), (5, 5, 1)]);

        assert!(is_valid(&grid));
        assert!(!is_solved(&grid));
    }

    #[test]
    fn duplicate_in_row_detected() {
        let grid = grid_with(&[(0, 0, 7), (8, 0, 7)]);
        assert!(!is_valid(&grid));
    }

    #[test]
    fn duplicate_in_column_detected() {
        let grid = grid_with(&[(3, 1, 2), (3, 8, 2)]);
        assert!(!is_valid(&grid));
    }

    #[test]
    fn duplicate_in_sub_grid_detected() {
        let grid = grid_with(&[(6, 0, 4), (8, 2, 4)]);
        assert!(!is_valid(&grid));
    }

    #[test]
    fn solved_grid_recognized() {
        let grid = SudokuGrid::parse("
            1,2,3,4,5,6,7,8,9,\
            4,5,6,7,8,9,1,2,3,\
            7,8,9,1,2,3,4,5,6,\
            2,3,4,5,6,7,8,9,1,\
            5,6,7,8,9,1,2,3,4,\
            8,9,1,2,3,4,5,6,7,\
            3,4,5,6,7,8,9,1,2,\
            6,7,8,9,1,2,3,4,5,\
            9,1,2,3,4,5,6,7,8").unwrap();

        assert!(is_valid(&grid));
        assert!(is_solved(&grid));
    }

    #[test]
    fn almost_solved_grid_not_solved() {
        let mut grid = SudokuGrid::parse("
            1,2,3,4,5,6,7,8,9,\
            4,5,6,7,8,9,1,2,3,\
            7,8,9,1,2,3,4,5,6,\
            2,3,4,5,6,7,8,9,1,\
            5,6,7,8,9,1,2,3,4,\
            8,9,1,2,3,4,5,6,7,\
            3,4,5,6,7,8,9,1,2,\
            6,7,8,9,1,2,3,4,5,\
            9,1,2,3,4,5,6,7,8").unwrap();
        grid.clear_cell(4, 4).unwrap();

        assert!(is_valid(&grid));
        assert!(!is_solved(&grid));
    }
}
