use crate::error::MathError;
use alloy_primitives::U256;

const U256_TWO: U256 = U256::from_limbs([2, 0, 0, 0]);
const U256_THREE: U256 = U256::from_limbs([3, 0, 0, 0]);

/// Full 512-bit product of `a` and `b`, returned as `(low, high)` words.
#[inline(always)]
fn full_mul(a: U256, b: U256) -> (U256, U256) {
    // mulmod by 2^256 - 1 recovers the high word through the CRT
    let mm = a.mul_mod(b, U256::MAX);
    let low = a.wrapping_mul(b);
    let (mut high, borrow) = mm.overflowing_sub(low);
    if borrow {
        high = high.wrapping_sub(U256::ONE);
    }
    (low, high)
}

/// Computes `floor(a * b / denominator)` with a full 512-bit
/// intermediate product.
///
/// Fails with `MathError::DivisionByZero` for a zero denominator and
/// `MathError::Overflow` when the quotient does not fit 256 bits. The
/// result is identical to the on-chain `FullMath.mulDiv`.
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let (mut low, mut high) = full_mul(a, b);

    if high.is_zero() {
        return Ok(low / denominator);
    }

    if denominator <= high {
        return Err(MathError::Overflow);
    }

    // Make the division exact by removing the remainder from the 512-bit product
    let remainder = a.mul_mod(b, denominator);
    let (new_low, borrow) = low.overflowing_sub(remainder);
    low = new_low;
    if borrow {
        high = high.wrapping_sub(U256::ONE);
    }

    // Factor powers of two out of the denominator
    let twos = denominator & denominator.wrapping_neg();
    let denominator = denominator.wrapping_div(twos);
    low = low.wrapping_div(twos);

    // Shift the high bits into the low word: flip = 2^256 / twos
    let flip = twos
        .wrapping_neg()
        .wrapping_div(twos)
        .wrapping_add(U256::ONE);
    low |= high.wrapping_mul(flip);

    // Modular inverse of the (now odd) denominator mod 2^256. Seed correct
    // to 4 bits, every Newton-Raphson round doubles the precision.
    let mut inverse = U256_THREE.wrapping_mul(denominator) ^ U256_TWO;
    for _ in 0..6 {
        inverse = inverse.wrapping_mul(U256_TWO.wrapping_sub(denominator.wrapping_mul(inverse)));
    }

    Ok(low.wrapping_mul(inverse))
}

/// Like [`mul_div`], but rounds the quotient up when the division leaves
/// a remainder.
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    let result = mul_div(a, b, denominator)?;

    if a.mul_mod(b, denominator).is_zero() {
        Ok(result)
    } else {
        result.checked_add(U256::ONE).ok_or(MathError::Overflow)
    }
}

/// Divides `a` by `b`, rounding up when there is a non-zero remainder.
pub fn div_rounding_up(a: U256, b: U256) -> Result<U256, MathError> {
    if b.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let (quotient, remainder) = a.div_rem(b);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        // quotient < U256::MAX whenever b > 1, and b == 1 never leaves a remainder
        Ok(quotient + U256::ONE)
    }
}
