//! 3x3 grid representation and sum-of-squares checks

pub mod squares;
pub mod types;

pub use types::{Grid, MAX_CELL_VALUE, SIZE};
