//! Widened square arithmetic shared by the verifier and the filler

/// Square of a cell value, widened to 128 bits. Never overflows.
#[inline]
pub fn square(value: u64) -> u128 {
    let v = value as u128;
    v * v
}

/// Sum of the squares of three cells, or `None` if it does not fit in `u128`.
///
/// Generator output (cells below 2^63) always fits; only filler-derived
/// cells can push a sum past the limit.
#[inline]
pub fn sum_of_squares(a: u64, b: u64, c: u64) -> Option<u128> {
    square(a).checked_add(square(b))?.checked_add(square(c))
}

/// Exact integer square root: `Some(r)` iff `r * r == n` and `r` fits a cell.
#[inline]
pub fn exact_sqrt(n: u128) -> Option<u64> {
    let root = n.isqrt();
    if root * root != n {
        return None;
    }
    u64::try_from(root).ok()
}
