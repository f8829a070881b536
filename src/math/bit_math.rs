use crate::error::MathError;
use alloy_primitives::U256;

/// Index (0-255) of the most significant set bit of `x`.
///
/// Fails with `MathError::ZeroValue` for zero, which has no set bit.
pub fn most_significant_bit(x: U256) -> Result<u8, MathError> {
    match x.bit_len() {
        0 => Err(MathError::ZeroValue),
        len => Ok((len - 1) as u8),
    }
}

/// Index (0-255) of the least significant set bit of `x`.
///
/// Used by the bitmap scan to find the first initialized tick to the
/// right of a position.
pub fn least_significant_bit(x: U256) -> Result<u8, MathError> {
    if x.is_zero() {
        return Err(MathError::ZeroValue);
    }
    Ok(x.trailing_zeros() as u8)
}
