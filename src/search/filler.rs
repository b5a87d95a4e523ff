//! Constructive filling of the last four cells
//!
//! Rows 0 and 1 come from the generator. The row-0 sum of squares is the
//! target every other line must reach, so four cells can be solved for
//! directly:
//!
//! ```text
//! [1][2]^2 = target - [1][0]^2 - [1][1]^2   (row 1)
//! [2][0]^2 = target - [0][0]^2 - [1][0]^2   (column 0)
//! [2][1]^2 = target - [0][1]^2 - [1][1]^2   (column 1)
//! [2][2]^2 = target - [2][0]^2 - [2][1]^2   (row 2)
//! ```
//!
//! Column 2 and both diagonals are not forced by these steps, so a filled
//! grid still goes through the full verifier.

use crate::grid::Grid;
use crate::grid::squares::{exact_sqrt, square, sum_of_squares};
use std::fmt;

/// Why a derivation step gave up. Rejections are the common case, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The required square at `(row, col)` was zero or negative
    NonPositive { row: usize, col: usize },
    /// The required square at `(row, col)` has no integer root
    NotSquare { row: usize, col: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NonPositive { row, col } => {
                write!(f, "cell [{}][{}] would need a non-positive square", row, col)
            }
            Rejection::NotSquare { row, col } => {
                write!(f, "cell [{}][{}] would need a non-square value", row, col)
            }
        }
    }
}

/// Order in which cells are derived, with the two known cells each one
/// is solved against.
const STEPS: [((usize, usize), (usize, usize), (usize, usize)); 4] = [
    ((1, 2), (1, 0), (1, 1)),
    ((2, 0), (0, 0), (1, 0)),
    ((2, 1), (0, 1), (1, 1)),
    ((2, 2), (2, 0), (2, 1)),
];

/// Derive cells `[1][2]`, `[2][0]`, `[2][1]` and `[2][2]` in place.
///
/// Stops at the first cell whose required square is non-positive or not a
/// perfect square. Cells already written stay in the grid on rejection.
pub fn derive_cells(grid: &mut Grid) -> Result<(), Rejection> {
    let target = sum_of_squares(grid.get(0, 0), grid.get(0, 1), grid.get(0, 2))
        .unwrap_or(u128::MAX);

    for ((row, col), (ar, ac), (br, bc)) in STEPS {
        let known = square(grid.get(ar, ac)).checked_add(square(grid.get(br, bc)));
        let remainder = match known.and_then(|k| target.checked_sub(k)) {
            Some(r) if r > 0 => r,
            _ => return Err(Rejection::NonPositive { row, col }),
        };
        let root = exact_sqrt(remainder).ok_or(Rejection::NotSquare { row, col })?;
        grid.set(row, col, root);
    }

    Ok(())
}

/// Derive the missing cells and run the full verifier.
///
/// Returns `true` only when every derivation succeeds and the resulting grid
/// is a magic square of squares.
pub fn fill_grid(grid: &mut Grid) -> bool {
    match derive_cells(grid) {
        Ok(()) => grid.is_magic_square_of_squares(),
        Err(rejection) => {
            log::trace!("fill rejected: {}", rejection);
            false
        }
    }
}
