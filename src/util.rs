//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used for
//! duplicate detection in rows, columns, and sub-grids.

use crate::{MAX_DIGIT, MIN_DIGIT};
use crate::error::{SudokuError, SudokuResult};

/// A set of Sudoku digits (1 to 9) that is implemented as a bit mask. Each
/// digit is represented by one bit in a `u16`. This generally has better
/// performance than a `HashSet` and makes permutation checks a single
/// comparison.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitSet {
    bits: u16
}

const FULL_BITS: u16 = 0b1_1111_1111 << MIN_DIGIT;

impl DigitSet {

    /// Creates a new, empty digit set.
    pub fn new() -> DigitSet {
        DigitSet {
            bits: 0
        }
    }

    /// Creates a digit set that contains every digit from 1 to 9.
    pub fn full() -> DigitSet {
        DigitSet {
            bits: FULL_BITS
        }
    }

    /// Removes all digits from this set.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Indicates whether the given digit is contained in this set. Numbers
    /// outside the range `[1, 9]` are never contained.
    pub fn contains(&self, digit: usize) -> bool {
        digit >= MIN_DIGIT && digit <= MAX_DIGIT &&
            self.bits & (1u16 << digit) != 0
    }

    /// Inserts the given digit into this set. Returns `true` if the digit was
    /// newly inserted and `false` if it was already present.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `SudokuError::InvalidNumber` is returned.
    pub fn insert(&mut self, digit: usize) -> SudokuResult<bool> {
        if digit < MIN_DIGIT || digit > MAX_DIGIT {
            return Err(SudokuError::InvalidNumber);
        }

        let mask = 1u16 << digit;
        let newly_inserted = self.bits & mask == 0;
        self.bits |= mask;
        Ok(newly_inserted)
    }

    /// The number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Indicates whether this set contains no digits.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Indicates whether this set contains every digit from 1 to 9, i.e. its
    /// content is a permutation of the digits.
    pub fn is_full(&self) -> bool {
        self.bits == FULL_BITS
    }

    /// Returns an iterator over the digits contained in this set, in
    /// ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let bits = self.bits;
        (MIN_DIGIT..=MAX_DIGIT).filter(move |digit| bits & (1u16 << digit) != 0)
    }
}

impl Default for DigitSet {
    fn default() -> DigitSet {
        DigitSet::new()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_set_is_empty() {
        let set = DigitSet::new();

        assert!(set.is_empty());
        assert!(!set.is_full());
        assert_eq!(0, set.len());

        for digit in 1..=9 {
            assert!(!set.contains(digit));
        }
    }

    #[test]
    fn insert_reports_newly_inserted() {
        let mut set = DigitSet::new();

        assert_eq!(Ok(true), set.insert(5));
        assert_eq!(Ok(false), set.insert(5));
        assert_eq!(Ok(true), set.insert(1));
        assert_eq!(2, set.len());
        assert!(set.contains(5));
        assert!(set.contains(1));
        assert!(!set.contains(2));
    }

    #[test]
    fn insert_rejects_out_of_range_digits() {
        let mut set = DigitSet::new();

        assert_eq!(Err(SudokuError::InvalidNumber), set.insert(0));
        assert_eq!(Err(SudokuError::InvalidNumber), set.insert(10));
        assert!(set.is_empty());
    }

    #[test]
    fn full_set_is_permutation() {
        let mut set = DigitSet::new();

        for digit in 1..=9 {
            set.insert(digit).unwrap();
        }

        assert!(set.is_full());
        assert_eq!(DigitSet::full(), set);
        assert_eq!(9, set.len());
    }

    #[test]
    fn clear_removes_all_digits() {
        let mut set = DigitSet::full();
        set.clear();

        assert!(set.is_empty());
        assert!(!set.contains(3));
    }

    #[test]
    fn iterator_yields_ascending_digits() {
        let mut set = DigitSet::new();
        set.insert(7).unwrap();
        set.insert(2).unwrap();
        set.insert(9).unwrap();

        let digits: Vec<usize> = set.iter().collect();

        assert_eq!(vec![2, 7, 9], digits);
    }
}
