use crate::error::MathError;
use alloy_primitives::U256;

/// Returns the Q64.64 sqrt price of the ratio `amount1 / amount0`, i.e.
/// `floor(sqrt((amount1 << 128) / amount0))`.
///
/// Used to seed a pool price from a reserve ratio. Fails with
/// `MathError::DivisionByZero` when `amount0` is zero and
/// `MathError::Overflow` when `amount1 << 128` does not fit 256 bits.
pub fn encode_sqrt_ratio_x64(amount1: U256, amount0: U256) -> Result<U256, MathError> {
    if amount0.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    if amount1.bit_len() > 128 {
        return Err(MathError::Overflow);
    }

    Ok(((amount1 << 128usize) / amount0).root(2))
}
