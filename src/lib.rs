// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements an easy-to-understand engine for generating and
//! validating classic 9x9 Sudoku puzzles. It supports the following key
//! features:
//!
//! * A grid of cells that track both their digit and whether they are a
//! fixed clue
//! * Conflict checks for rows, columns, and 3x3 sub-grids
//! * Random generation of full grids by seeding the three diagonal
//! sub-grids and completing the rest with a backtracking search
//! * Digging a requested number of holes into a full grid to obtain a
//! playable puzzle
//! * Parsing and printing grids
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and
//! display a grid is provided below.
//!
//! ```
//! use sudoku_forge::SudokuGrid;
//!
//! let code = format!("5{}", ",".repeat(80));
//! let grid = SudokuGrid::parse(&code).unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking conflicts
//!
//! The [constraint] module contains predicates that determine whether
//! placing a digit in a cell would collide with a digit already present in
//! the same row, column, or sub-grid. The checks are read-only and never
//! change the grid.
//!
//! ```
//! use sudoku_forge::SudokuGrid;
//! use sudoku_forge::constraint;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 0, 5).unwrap();
//!
//! // A 5 in the same row, column, or sub-grid collides, elsewhere it is
//! // fine.
//! assert!(constraint::has_conflict(&grid, 1, 0, 5).unwrap());
//! assert!(!constraint::has_conflict(&grid, 3, 3, 5).unwrap());
//! ```
//!
//! # Generating puzzles
//!
//! Probably the most interesting feature of this crate is the generation of
//! random puzzles. This is done in three steps: seeding the three diagonal
//! 3x3 sub-grids with random permutations, completing the grid with a
//! backtracking search, and finally digging a requested number of holes.
//! All three steps are orchestrated by [Generator::generate](generator::Generator::generate).
//!
//! The generator uses a random number generator to decide the content, for
//! which we use the `Rng` trait from the
//! [rand](https://rust-random.github.io/rand/rand/index.html) crate. By
//! default a [ThreadRng](rand::rngs::ThreadRng) is used, which makes
//! generation non-deterministic across runs; tests can instead supply a
//! seeded RNG to obtain reproducible puzzles.
//!
//! ```
//! use sudoku_forge::generator::Generator;
//!
//! // new_default yields a generator with rand::thread_rng()
//! let mut generator = Generator::new_default();
//!
//! // Generate a puzzle with 40 empty cells.
//! let grid = generator.generate(40).unwrap();
//!
//! assert_eq!(41, grid.count_clues());
//! ```
//!
//! Cells that survive the digging phase are marked as fixed clues, which a
//! rendering or play collaborator can use to distinguish givens from cells
//! the player may edit.
//!
//! # Note regarding performance
//!
//! Generating a single puzzle is doable within a few milliseconds, since
//! the diagonal seed removes most of the backtracking cost. It is still
//! strongly recommended to use at least `opt-level = 2` in tests that
//! generate many puzzles.

pub mod constraint;
pub mod error;
pub mod generator;
pub mod util;

use error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as _;

use std::fmt::{self, Display, Formatter};

/// The number of cells in each row, column, and sub-grid of a Sudoku grid.
pub const SIZE: usize = 9;

/// The number of cells on each side of one of the nine 3x3 sub-grids.
pub const BLOCK_SIZE: usize = 3;

/// The total number of cells in a Sudoku grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// The lowest digit that may occupy a Sudoku cell.
pub const MIN_DIGIT: usize = 1;

/// The highest digit that may occupy a Sudoku cell.
pub const MAX_DIGIT: usize = 9;

/// One of the 81 positions of a [SudokuGrid]. A cell may be empty or hold a
/// digit from 1 to 9, and additionally tracks whether that digit is a fixed
/// clue, that is, a given that must not be altered or removed by a player.
///
/// Empty cells are never fixed. This invariant is maintained by all
/// operations of this crate.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Cell {
    value: Option<usize>,
    fixed: bool
}

impl Cell {

    /// A cell that holds no digit and is not fixed. Every cell of a newly
    /// created [SudokuGrid] is in this state.
    pub const EMPTY: Cell = Cell {
        value: None,
        fixed: false
    };

    /// The digit held by this cell, or `None` if it is empty.
    pub fn value(&self) -> Option<usize> {
        self.value
    }

    /// Indicates whether the digit held by this cell is a fixed clue. If
    /// this returns `true`, [Cell::value] is guaranteed to return a digit.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }
}

/// A 9x9 Sudoku grid composed of [Cell]s that are organized into nine 3x3
/// sub-grids. Cells are addressed by `(column, row)` coordinates, each in
/// the range `[0, 9)`, with `(0, 0)` in the top-left corner.
///
/// A grid is created in an all-empty, all-unfixed state by
/// [SudokuGrid::new] and mutated in place by the operations of the
/// [generator](crate::generator) module. Its storage is a single owned
/// value, so the grid lives exactly as long as its owner; see
/// [SudokuGrid::clear] for explicit release.
///
/// `SudokuGrid` implements `Display`, rendering the grid with box-drawing
/// characters. [SudokuGrid::display] additionally allows highlighting of
/// fixed clues.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SudokuGrid {
    cells: [Cell; CELL_COUNT]
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

fn to_char(cell: &Cell) -> char {
    if let Some(n) = cell.value {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char, fill: char, end: char)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        for _ in 0..3 {
            result.push(fill);
        }
    }

    result.push(end);
    result.push('\n');
    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', '═', '╗')
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', '─', '╢')
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', '═', '╣')
}

fn bottom_row() -> String {
    let mut result = line('╚', '╩', '╧', '═', '╝');
    result.pop();
    result
}

fn content_row(grid: &SudokuGrid, y: usize, highlight_fixed: bool) -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push('║');
        }
        else if x % BLOCK_SIZE == 0 {
            result.push('║');
        }
        else {
            result.push('│');
        }

        let cell = &grid.cells[index(x, y)];
        let (left_pad, right_pad) =
            if highlight_fixed && cell.fixed {
                ('(', ')')
            }
            else {
                (' ', ' ')
            };

        result.push(left_pad);
        result.push(to_char(cell));
        result.push(right_pad);
    }

    result.push('║');
    result.push('\n');
    result
}

/// A displayable view of a [SudokuGrid] created by [SudokuGrid::display],
/// which optionally highlights fixed clues by wrapping them in parentheses.
pub struct GridDisplay<'a> {
    grid: &'a SudokuGrid,
    highlight_fixed: bool
}

impl Display for GridDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(
                content_row(self.grid, y, self.highlight_fixed).as_str())?;
        }

        f.write_str(bottom_row().as_str())
    }
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.display(false), f)
    }
}

fn to_string(cell: &Cell) -> String {
    if let Some(number) = cell.value {
        number.to_string()
    }
    else {
        String::from("")
    }
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid in which every cell holds no digit
    /// and is not fixed. As the grid has a fixed size, this never fails.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: [Cell::EMPTY; CELL_COUNT]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of exactly 81 entries, which are either empty or a digit from 1
    /// to 9. The entries are assigned left-to-right, top-to-bottom, where
    /// each row is completed before the next one is started. Whitespace in
    /// the entries is ignored to allow for more intuitive formatting.
    ///
    /// All parsed cells are entered as ordinary, non-fixed digits; fixed
    /// flags are assigned by the seeding and digging operations of the
    /// [generator](crate::generator) module.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<usize>()?;

            if number < MIN_DIGIT || number > MAX_DIGIT {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i].value = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string
    /// and parsed again will contain the same digits, as is illustrated
    /// below. Fixed flags are not part of the code.
    ///
    /// ```
    /// use sudoku_forge::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Creates a displayable view of this grid. If `highlight_fixed` is
    /// `true`, fixed clues are wrapped in parentheses, allowing a rendering
    /// collaborator to distinguish givens from digits entered later.
    pub fn display(&self, highlight_fixed: bool) -> GridDisplay<'_> {
        GridDisplay {
            grid: self,
            highlight_fixed
        }
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9)`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9)`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)].value)
        }
    }

    /// Indicates whether the cell at the specified position holds a fixed
    /// clue.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9)`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9)`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn is_fixed(&self, column: usize, row: usize) -> SudokuResult<bool> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)].fixed)
        }
    }

    /// Indicates whether the cell at the specified position holds the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9)`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9)`.
    /// * `number`: The number to check whether it is in the specified cell.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten. The fixed flag of the cell is not changed.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9)`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9)`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number < MIN_DIGIT || number > MAX_DIGIT {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)].value = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is,
    /// if it contains a number, that number is removed. The fixed flag of
    /// the cell is reset as well, since empty cells are never fixed. If the
    /// cell is already empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9)`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9)`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        let cell = &mut self.cells[index(column, row)];
        cell.value = None;
        cell.fixed = false;
        Ok(())
    }

    /// Sets the content of the cell at the specified position to the given
    /// number and marks it as a fixed clue.
    pub(crate) fn set_clue(&mut self, column: usize, row: usize,
            number: usize) -> SudokuResult<()> {
        self.set_cell(column, row, number)?;
        self.cells[index(column, row)].fixed = true;
        Ok(())
    }

    /// Marks every cell that currently holds a digit as a fixed clue.
    pub(crate) fn fix_all_digits(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.value.is_some() {
                cell.fixed = true;
            }
        }
    }

    /// Gets a read-only, row-major view of the cells of this grid. Rows are
    /// stored together, so the cell at `(column, row)` has the index
    /// `row * 9 + column`.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Counts the number of cells of this grid that hold a digit. While on
    /// average puzzles with fewer clues are harder, this is *not* a
    /// reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.value.is_some()).count()
    }

    /// Counts the number of empty cells of this grid. This is always equal
    /// to `81 - count_clues()`.
    pub fn count_empty(&self) -> usize {
        CELL_COUNT - self.count_clues()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with
    /// a digit. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.value.is_some())
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.value.is_none())
    }

    /// Releases this grid. As the grid is a single owned value, taking it
    /// by value makes any further access a compile-time error, so a stale
    /// handle to a released grid cannot exist. The underlying storage is
    /// freed when the value is dropped.
    ///
    /// This is the last operation that can be performed on a grid instance.
    pub fn clear(self) { }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl Serialize for SudokuGrid {
    fn serialize<S: Serializer>(&self, serializer: S)
            -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_parseable_string().as_str())
    }
}

impl<'de> Deserialize<'de> for SudokuGrid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D)
            -> Result<SudokuGrid, D::Error> {
        let code = String::deserialize(deserializer)?;
        SudokuGrid::parse(code.as_str()).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_grid_is_empty_and_unfixed() {
        let grid = SudokuGrid::new();

        for row in 0..SIZE {
            for column in 0..SIZE {
                assert_eq!(None, grid.get_cell(column, row).unwrap());
                assert!(!grid.is_fixed(column, row).unwrap());
            }
        }

        assert!(grid.is_empty());
        assert!(!grid.is_full());
        assert_eq!(0, grid.count_clues());
        assert_eq!(CELL_COUNT, grid.count_empty());
    }

    #[test]
    fn clear_consumes_the_grid() {
        // Releasing a freshly created grid is a no-op; after this call the
        // grid handle no longer exists.
        SudokuGrid::new().clear();
    }

    #[test]
    fn parse_ok() {
        let mut code = String::from("1,,3");
        code.push_str(&",".repeat(78));
        code.push('9');
        let grid = SudokuGrid::parse(code.as_str())
            .expect("parsing valid grid failed");

        assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
        assert_eq!(None, grid.get_cell(1, 0).unwrap());
        assert_eq!(Some(3), grid.get_cell(2, 0).unwrap());
        assert_eq!(Some(9), grid.get_cell(8, 8).unwrap());
        assert_eq!(3, grid.count_clues());
    }

    #[test]
    fn parse_ignores_whitespace() {
        let mut code = String::from(" 2 , ,7");
        code.push_str(&",".repeat(78));
        let grid = SudokuGrid::parse(code.as_str()).unwrap();

        assert_eq!(Some(2), grid.get_cell(0, 0).unwrap());
        assert_eq!(Some(7), grid.get_cell(2, 0).unwrap());
    }

    #[test]
    fn parse_leaves_cells_unfixed() {
        let mut code = String::from("4");
        code.push_str(&",".repeat(80));
        let grid = SudokuGrid::parse(code.as_str()).unwrap();

        assert!(!grid.is_fixed(0, 0).unwrap());
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse("1,2,3"));
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse(&",".repeat(81)));
    }

    #[test]
    fn parse_number_format_error() {
        let mut code = String::from("#");
        code.push_str(&",".repeat(80));
        assert_eq!(Err(SudokuParseError::NumberFormatError),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn parse_invalid_number() {
        let mut code = String::from("0");
        code.push_str(&",".repeat(80));
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse(code.as_str()));

        let mut code = String::from("10");
        code.push_str(&",".repeat(80));
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(4, 4, 5).unwrap();
        grid.set_cell(8, 8, 9).unwrap();

        let code = grid.to_parseable_string();
        let parsed = SudokuGrid::parse(code.as_str()).unwrap();

        assert_eq!(grid, parsed);
    }

    #[test]
    fn set_cell_rejects_invalid_input() {
        let mut grid = SudokuGrid::new();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(9, 0, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(0, 9, 1));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 10));
        assert!(grid.is_empty());
    }

    #[test]
    fn get_cell_rejects_out_of_bounds() {
        let grid = SudokuGrid::new();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(0, 9));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.is_fixed(10, 10));
    }

    #[test]
    fn clear_cell_resets_fixed_flag() {
        let mut grid = SudokuGrid::new();
        grid.set_clue(3, 4, 7).unwrap();

        assert!(grid.is_fixed(3, 4).unwrap());

        grid.clear_cell(3, 4).unwrap();

        assert_eq!(None, grid.get_cell(3, 4).unwrap());
        assert!(!grid.is_fixed(3, 4).unwrap());
    }

    #[test]
    fn fix_all_digits_skips_empty_cells() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(5, 2, 8).unwrap();
        grid.fix_all_digits();

        assert!(grid.is_fixed(0, 0).unwrap());
        assert!(grid.is_fixed(5, 2).unwrap());
        assert!(!grid.is_fixed(1, 0).unwrap());
    }

    #[test]
    fn has_number_distinguishes_content() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(2, 6, 4).unwrap();

        assert!(grid.has_number(2, 6, 4).unwrap());
        assert!(!grid.has_number(2, 6, 5).unwrap());
        assert!(!grid.has_number(3, 6, 4).unwrap());
        assert_eq!(Err(SudokuError::OutOfBounds), grid.has_number(9, 9, 1));
    }

    #[test]
    fn display_renders_digits_and_highlights() {
        let mut grid = SudokuGrid::new();
        grid.set_clue(0, 0, 5).unwrap();
        grid.set_cell(1, 0, 3).unwrap();

        let plain = format!("{}", grid);
        let highlighted = format!("{}", grid.display(true));

        assert!(plain.contains(" 5 "));
        assert!(!plain.contains("(5)"));
        assert!(highlighted.contains("(5)"));
        assert!(highlighted.contains(" 3 "));
    }

    #[test]
    fn serde_round_trip() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 2).unwrap();
        grid.set_cell(7, 3, 6).unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        let deserialized: SudokuGrid = serde_json::from_str(&json).unwrap();

        assert_eq!(grid, deserialized);
    }

    #[test]
    fn serde_rejects_invalid_code() {
        let result = serde_json::from_str::<SudokuGrid>("\"1,2,3\"");
        assert!(result.is_err());
    }
}
