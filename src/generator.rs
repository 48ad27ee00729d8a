//! This module contains the logic for generating random Sudoku puzzles.
//!
//! Generation is done in three steps: the three diagonal 3x3 sub-grids are
//! seeded with random permutations, the remaining cells are completed by a
//! backtracking search, and finally a requested number of holes is dug into
//! the full grid. All three steps are orchestrated by [Generator::generate].

use crate::{BLOCK_SIZE, CELL_COUNT, MAX_DIGIT, MIN_DIGIT, SIZE, SudokuGrid};
use crate::constraint;
use crate::error::{SudokuError, SudokuResult};

use log::{debug, trace};

use rand::Rng;
use rand::rngs::ThreadRng;

/// A generator randomly creates full and reduced Sudoku grids. It uses a
/// random number generator to decide the content. For most cases, sensible
/// defaults are provided by [Generator::new_default].
///
/// The generator drives all random decisions through the wrapped
/// [Rng](rand::Rng), so supplying a seeded generator such as
/// `rand_chacha::ChaCha8Rng` makes every operation reproducible, which is
/// useful for tests. The default [ThreadRng] reseeds itself from the
/// operating system, making generation non-deterministic across runs.
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    if len < 2 {
        return vec;
    }

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    /// Draws a number uniformly distributed in the inclusive range
    /// `[low, high]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidRange` If `low` is greater than `high`.
    pub fn between(&mut self, low: usize, high: usize) -> SudokuResult<usize> {
        if low > high {
            return Err(SudokuError::InvalidRange);
        }

        Ok(self.rng.gen_range(low..=high))
    }

    /// Draws a digit uniformly distributed in the inclusive range `[1, 9]`,
    /// i.e. a random Sudoku digit.
    pub fn random_digit(&mut self) -> usize {
        self.rng.gen_range(MIN_DIGIT..=MAX_DIGIT)
    }

    /// Fills the 3x3 sub-grid anchored at (`start_column`, `start_row`)
    /// with a random permutation of the digits 1 to 9, marking each placed
    /// cell as a fixed clue. The sub-grid is expected to be empty prior to
    /// this call.
    ///
    /// Digits are drawn repeatedly and tested against the sub-grid until a
    /// placement is free of duplicates. The search space per block is tiny
    /// (9 cells, 9 digits), so this converges quickly.
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid whose sub-grid to fill.
    /// * `start_column`: The column of the top-left cell of the sub-grid.
    /// Must be a multiple of 3 less than 9.
    /// * `start_row`: The row of the top-left cell of the sub-grid. Must be
    /// a multiple of 3 less than 9.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If `start_column` or `start_row` is not
    /// the origin of a sub-grid, i.e. not a multiple of 3 less than 9.
    pub fn fill_sub_grid(&mut self, grid: &mut SudokuGrid,
            start_column: usize, start_row: usize) -> SudokuResult<()> {
        if start_column >= SIZE || start_row >= SIZE ||
                start_column % BLOCK_SIZE != 0 || start_row % BLOCK_SIZE != 0 {
            return Err(SudokuError::OutOfBounds);
        }

        for row in start_row..(start_row + BLOCK_SIZE) {
            for column in start_column..(start_column + BLOCK_SIZE) {
                loop {
                    let digit = self.random_digit();

                    if !constraint::is_in_sub_grid(grid, column, row, digit)? {
                        grid.set_clue(column, row, digit)?;
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Fills the three sub-grids on the main diagonal, anchored at (0, 0),
    /// (3, 3), and (6, 6), with random permutations of the digits 1 to 9,
    /// marking every placed cell as a fixed clue.
    ///
    /// The diagonal blocks share no row, column, or sub-grid, so seeding
    /// them independently can never create a conflict. This guarantees a
    /// valid partial start and greatly reduces the cost of the subsequent
    /// backtracking search.
    ///
    /// # Errors
    ///
    /// Currently none; the signature allows future preconditions on the
    /// state of the grid. See [Generator::fill_sub_grid] for the underlying
    /// operation.
    pub fn seed_diagonals(&mut self, grid: &mut SudokuGrid)
            -> SudokuResult<()> {
        for origin in (0..SIZE).step_by(BLOCK_SIZE) {
            self.fill_sub_grid(grid, origin, origin)?;
        }

        Ok(())
    }

    fn fill_from(&mut self, grid: &mut SudokuGrid, column: usize, row: usize)
            -> bool {
        if row == SIZE {
            return true;
        }

        let next_column = (column + 1) % SIZE;
        let next_row =
            if next_column == 0 { row + 1 } else { row };

        if grid.get_cell(column, row).unwrap().is_some() {
            return self.fill_from(grid, next_column, next_row);
        }

        for number in shuffle(&mut self.rng, MIN_DIGIT..=MAX_DIGIT) {
            if !constraint::has_conflict(grid, column, row, number).unwrap() {
                grid.set_cell(column, row, number).unwrap();
                trace!("placed {} at column {}, row {}", number, column, row);

                if self.fill_from(grid, next_column, next_row) {
                    return true;
                }

                grid.clear_cell(column, row).unwrap();
                trace!("backtracked at column {}, row {}", column, row);
            }
        }

        false
    }

    /// Completes the given grid with random digits such that every row,
    /// column, and 3x3 sub-grid holds a permutation of the digits 1 to 9,
    /// keeping all digits that are already present.
    ///
    /// Cells are visited in row-major order. Occupied cells are skipped;
    /// empty cells try the digits in a random order, place the first one
    /// free of conflicts, and recurse. If no digit leads to a full
    /// solution, the placement is undone and the previous cell continues
    /// with its next candidate, so on failure the grid is left unchanged.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnsatisfiableGrid` If the entire search space is
    /// exhausted without completing the grid, which can only happen if the
    /// digits already present admit no solution. A grid holding nothing but
    /// a diagonal seed always admits one.
    pub fn fill(&mut self, grid: &mut SudokuGrid) -> SudokuResult<()> {
        if self.fill_from(grid, 0, 0) {
            Ok(())
        }
        else {
            Err(SudokuError::UnsatisfiableGrid)
        }
    }

    /// Removes the digits of `count` distinct cells, chosen uniformly at
    /// random without replacement from the cells that currently hold a
    /// digit. Before digging, every filled cell is marked as a fixed clue;
    /// cells that are dug out are emptied and lose their fixed flag, while
    /// all untouched cells keep theirs. Afterwards the grid holds exactly
    /// `count` more empty cells than before, every one of them unfixed.
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid to dig holes into. Usually the output of
    /// [Generator::fill].
    /// * `count`: The number of cells to empty. Must not exceed the number
    /// of currently filled cells.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidHoleCount` If `count` is greater than 81 or
    /// greater than the number of cells that currently hold a digit. In
    /// that case, the grid is not changed.
    pub fn dig_holes(&mut self, grid: &mut SudokuGrid, count: usize)
            -> SudokuResult<()> {
        if count > CELL_COUNT {
            return Err(SudokuError::InvalidHoleCount);
        }

        let mut filled = Vec::new();

        for row in 0..SIZE {
            for column in 0..SIZE {
                if grid.get_cell(column, row)?.is_some() {
                    filled.push((column, row));
                }
            }
        }

        if count > filled.len() {
            return Err(SudokuError::InvalidHoleCount);
        }

        debug!("digging {} holes out of {} filled cells", count,
            filled.len());
        grid.fix_all_digits();

        let order = shuffle(&mut self.rng, filled.into_iter());

        for &(column, row) in order.iter().take(count) {
            grid.clear_cell(column, row)?;
        }

        Ok(())
    }

    /// Generates a new random Sudoku puzzle with `holes` empty cells. The
    /// grid is seeded on its diagonal sub-grids, completed by the
    /// backtracking filler, and finally `holes` digits are dug out. Every
    /// remaining digit is a fixed clue, so the result holds exactly
    /// `81 - holes` fixed, non-empty cells.
    ///
    /// There is no guarantee that the resulting puzzle has a unique
    /// solution.
    ///
    /// # Arguments
    ///
    /// * `holes`: The number of cells of the puzzle that are left empty.
    /// Must be in the range `[0, 81]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidHoleCount` If `holes` is greater than 81.
    pub fn generate(&mut self, holes: usize) -> SudokuResult<SudokuGrid> {
        if holes > CELL_COUNT {
            return Err(SudokuError::InvalidHoleCount);
        }

        let mut grid = SudokuGrid::new();
        self.seed_diagonals(&mut grid)?;
        self.fill(&mut grid)?;
        self.dig_holes(&mut grid, holes)?;
        Ok(grid)
    }
}
