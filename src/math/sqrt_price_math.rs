use crate::math::math_helpers::{div_rounding_up, mul_div, mul_div_rounding_up};
use crate::{
    Q64, RESOLUTION, U128_MAX,
    error::{Error, MathError, StateError},
};
use alloy_primitives::U256;

/// Computes the next sqrt price after adding or removing `amount` of
/// token0, rounding the resulting price up.
///
/// The add path reproduces 256-bit wrapping of `amount * price`: when the
/// product wraps, or the denominator would, it falls back to the
/// `L / (L / price + amount)` form.
fn get_next_sqrt_price_from_amount_0_rounding_up(
    sqrt_p_x64: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256, Error> {
    if amount.is_zero() {
        return Ok(sqrt_p_x64);
    }

    let numerator1: U256 = U256::from(liquidity) << RESOLUTION;
    let product: U256 = amount.wrapping_mul(sqrt_p_x64);

    if add {
        if product / amount == sqrt_p_x64 {
            let (denominator, wrapped) = numerator1.overflowing_add(product);
            if !wrapped {
                return mul_div_rounding_up(numerator1, sqrt_p_x64, denominator)
                    .map_err(Error::from);
            }
        }
        match (numerator1 / sqrt_p_x64).checked_add(amount) {
            Some(denominator) => Ok(div_rounding_up(numerator1, denominator)?),
            // the price cannot go lower
            None => Ok(U256::ONE),
        }
    } else {
        if product / amount != sqrt_p_x64 {
            return Err(StateError::InvariantViolation("amount0 output product overflows").into());
        }
        if numerator1 <= product {
            return Err(
                StateError::InvariantViolation("amount0 output exceeds virtual reserves").into(),
            );
        }
        let denominator = numerator1 - product;
        mul_div_rounding_up(numerator1, sqrt_p_x64, denominator).map_err(Error::from)
    }
}

/// Computes the next sqrt price after adding or removing `amount` of
/// token1, rounding the resulting price down.
fn get_next_sqrt_price_from_amount_1_rounding_down(
    sqrt_p_x64: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256, Error> {
    let liquidity = U256::from(liquidity);
    if add {
        let quotient: U256 = if amount <= U128_MAX {
            (amount << RESOLUTION) / liquidity
        } else {
            mul_div(amount, Q64, liquidity)?
        };

        sqrt_p_x64
            .checked_add(quotient)
            .ok_or(MathError::Overflow.into())
    } else {
        // a quotient past 256 bits exceeds any sqrt price as well
        let quotient = mul_div_rounding_up(amount, Q64, liquidity).map_err(|_| {
            StateError::InvariantViolation("amount1 output exceeds virtual reserves")
        })?;

        if sqrt_p_x64 <= quotient {
            return Err(
                StateError::InvariantViolation("amount1 output exceeds virtual reserves").into(),
            );
        }
        Ok(sqrt_p_x64 - quotient)
    }
}

/// Amount of token0 between two sqrt prices for the given liquidity:
/// `L * 2^64 * (b - a) / b / a`.
///
/// Prices may be given in either order. With `round_up` both divisions
/// round up (the amount is owed to the pool), otherwise both truncate.
pub fn get_amount_0_delta(
    mut sqrt_ratio_a_x64: U256,
    mut sqrt_ratio_b_x64: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, Error> {
    if sqrt_ratio_a_x64 > sqrt_ratio_b_x64 {
        (sqrt_ratio_a_x64, sqrt_ratio_b_x64) = (sqrt_ratio_b_x64, sqrt_ratio_a_x64)
    };

    if sqrt_ratio_a_x64.is_zero() {
        return Err(StateError::NonPositivePrice.into());
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let numerator2 = sqrt_ratio_b_x64 - sqrt_ratio_a_x64;

    if round_up {
        Ok(div_rounding_up(
            mul_div_rounding_up(numerator1, numerator2, sqrt_ratio_b_x64)?,
            sqrt_ratio_a_x64,
        )?)
    } else {
        Ok(mul_div(numerator1, numerator2, sqrt_ratio_b_x64)? / sqrt_ratio_a_x64)
    }
}

/// Amount of token1 between two sqrt prices for the given liquidity:
/// `L * (b - a) / 2^64`, rounded up or truncated.
pub fn get_amount_1_delta(
    mut sqrt_ratio_a_x64: U256,
    mut sqrt_ratio_b_x64: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, MathError> {
    if sqrt_ratio_a_x64 > sqrt_ratio_b_x64 {
        (sqrt_ratio_a_x64, sqrt_ratio_b_x64) = (sqrt_ratio_b_x64, sqrt_ratio_a_x64)
    };
    let liquidity = U256::from(liquidity);

    if round_up {
        mul_div_rounding_up(liquidity, sqrt_ratio_b_x64 - sqrt_ratio_a_x64, Q64)
    } else {
        mul_div(liquidity, sqrt_ratio_b_x64 - sqrt_ratio_a_x64, Q64)
    }
}

/// Computes the next sqrt price when swapping *into* the pool
/// (`amount_in`), choosing the correct branch for token0/token1
/// depending on `zero_for_one`.
///
/// The returned price never overshoots what `amount_in` pays for.
pub fn get_next_sqrt_price_from_input(
    sqrt_p_x64: U256,
    liquidity: u128,
    amount_in: U256,
    zero_for_one: bool,
) -> Result<U256, Error> {
    if sqrt_p_x64.is_zero() {
        return Err(StateError::NonPositivePrice.into());
    }
    if liquidity == 0 {
        return Err(StateError::NonPositiveLiquidity.into());
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount_0_rounding_up(sqrt_p_x64, liquidity, amount_in, true)
    } else {
        get_next_sqrt_price_from_amount_1_rounding_down(sqrt_p_x64, liquidity, amount_in, true)
    }
}

/// Computes the next sqrt price when swapping *out of* the pool
/// (`amount_out`), choosing the correct branch for token0/token1
/// depending on `zero_for_one`.
///
/// Fails with `StateError::InvariantViolation` when the pool cannot
/// supply `amount_out`.
pub fn get_next_sqrt_price_from_output(
    sqrt_p_x64: U256,
    liquidity: u128,
    amount_out: U256,
    zero_for_one: bool,
) -> Result<U256, Error> {
    if sqrt_p_x64.is_zero() {
        return Err(StateError::NonPositivePrice.into());
    }
    if liquidity == 0 {
        return Err(StateError::NonPositiveLiquidity.into());
    }

    if zero_for_one {
        get_next_sqrt_price_from_amount_1_rounding_down(sqrt_p_x64, liquidity, amount_out, false)
    } else {
        get_next_sqrt_price_from_amount_0_rounding_up(sqrt_p_x64, liquidity, amount_out, false)
    }
}
