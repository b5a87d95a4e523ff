//! Core grid type and the magic-square-of-squares verifier

use crate::grid::squares::sum_of_squares;
use std::fmt;

/// Largest cell value the random generator may produce (2^63 - 1).
///
/// Keeping cells below 2^63 means a single square fits in 126 bits and a
/// sum of three squares always fits in a `u128`.
pub const MAX_CELL_VALUE: u64 = i64::MAX as u64;

/// Grid side length
pub const SIZE: usize = 3;

/// A 3x3 grid of unsigned integers, indexed `[row][column]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[u64; SIZE]; SIZE],
}

impl Grid {
    /// Create a grid from its three rows
    #[cfg(test)]
    pub fn from_rows(cells: [[u64; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// All-zero grid
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u64) {
        self.cells[row][col] = value;
    }

    pub fn rows(&self) -> &[[u64; SIZE]; SIZE] {
        &self.cells
    }

    /// Sum of squares of each row. `None` marks a sum that overflowed `u128`.
    pub fn row_sums(&self) -> [Option<u128>; SIZE] {
        let c = &self.cells;
        [
            sum_of_squares(c[0][0], c[0][1], c[0][2]),
            sum_of_squares(c[1][0], c[1][1], c[1][2]),
            sum_of_squares(c[2][0], c[2][1], c[2][2]),
        ]
    }

    /// Sum of squares of each column.
    pub fn column_sums(&self) -> [Option<u128>; SIZE] {
        let c = &self.cells;
        [
            sum_of_squares(c[0][0], c[1][0], c[2][0]),
            sum_of_squares(c[0][1], c[1][1], c[2][1]),
            sum_of_squares(c[0][2], c[1][2], c[2][2]),
        ]
    }

    /// Sum of squares of the main diagonal and the anti-diagonal.
    pub fn diagonal_sums(&self) -> [Option<u128>; 2] {
        let c = &self.cells;
        [
            sum_of_squares(c[0][0], c[1][1], c[2][2]),
            sum_of_squares(c[0][2], c[1][1], c[2][0]),
        ]
    }

    /// Check whether all rows, columns and both diagonals have the same
    /// sum of squares.
    ///
    /// Comparison order is rows, then columns, then diagonals, stopping at
    /// the first mismatch. An overflowed sum never matches.
    pub fn is_magic_square_of_squares(&self) -> bool {
        let [r0, r1, r2] = self.row_sums();
        let Some(target) = r0 else {
            return false;
        };
        if r1 != r0 || r2 != r0 {
            return false;
        }

        if self.column_sums().iter().any(|&s| s != Some(target)) {
            return false;
        }

        self.diagonal_sums().iter().all(|&s| s == Some(target))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}, {}, {}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
