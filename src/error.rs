//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html) and the [generator](crate::generator) module.
/// This does not exclude errors that occur when parsing grid codes, see
/// [SudokuParseError](enum.SudokuParseError.html) for that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some number is invalid for a Sudoku cell, that is, it
    /// is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the Sudoku grid. This is the case if either is greater than or equal
    /// to the grid size.
    OutOfBounds,

    /// Indicates that a bounded random draw was requested with a lower bound
    /// that is greater than the upper bound.
    InvalidRange,

    /// Indicates that more holes were requested than can be dug, that is,
    /// more than the total number of cells or more than the number of cells
    /// that currently contain a digit.
    InvalidHoleCount,

    /// An error that is raised whenever the backtracking filler exhausts its
    /// entire search space without finding a complete grid. This cannot
    /// happen for a grid that contains nothing but a diagonal seed, but may
    /// happen for grids pre-filled with contradictory digits.
    UnsatisfiableGrid
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a `SudokuGrid`
/// from a code.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the 81 cells of a 9x9 grid.
    WrongNumberOfCells,

    /// Indicates that one of the cell contents could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than 9).
    InvalidNumber
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "code does not contain exactly 81 cells"),
            SudokuParseError::NumberFormatError =>
                write!(f, "cell content is not a number"),
            SudokuParseError::InvalidNumber =>
                write!(f, "cell contains a number outside [1, 9]")
        }
    }
}
