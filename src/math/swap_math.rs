use crate::U256_E6;
use crate::error::{Error, PoolError, StateError};
use crate::math::math_helpers::{mul_div, mul_div_rounding_up};
use crate::math::sqrt_price_math::{
    get_amount_0_delta, get_amount_1_delta, get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
};
use alloy_primitives::{I256, U256};

/// Computes the result of swapping some amount in or out, given the
/// parameters of the swap.
///
/// The price moves from `sqrt_ratio_current_x64` towards
/// `sqrt_ratio_target_x64` and stops there, or earlier once
/// `amount_remaining` is used up. A non-negative `amount_remaining` is an
/// exact input (fee included), a negative one an exact output.
///
/// Returns `(sqrt_ratio_next_x64, amount_in, amount_out, fee_amount)`.
/// `fee_pips` is in hundredths of a bip and must be below `1_000_000`.
pub fn compute_swap_step(
    sqrt_ratio_current_x64: U256,
    sqrt_ratio_target_x64: U256,
    liquidity: u128,
    amount_remaining: I256,
    fee_pips: u32,
) -> Result<(U256, U256, U256, U256), Error> {
    let fee = U256::from(fee_pips);
    if fee >= U256_E6 {
        return Err(PoolError::FeeTooHigh.into());
    }
    let fee_complement = U256_E6 - fee;

    let zero_for_one = sqrt_ratio_current_x64 >= sqrt_ratio_target_x64;
    let exact_in = !amount_remaining.is_negative();
    let amount_remaining_abs = amount_remaining.unsigned_abs();

    let mut amount_in = U256::ZERO;
    let mut amount_out = U256::ZERO;

    let sqrt_ratio_next_x64 = if exact_in {
        let amount_remaining_less_fee = mul_div(amount_remaining_abs, fee_complement, U256_E6)?;
        amount_in = if zero_for_one {
            get_amount_0_delta(sqrt_ratio_target_x64, sqrt_ratio_current_x64, liquidity, true)?
        } else {
            get_amount_1_delta(sqrt_ratio_current_x64, sqrt_ratio_target_x64, liquidity, true)?
        };
        if amount_remaining_less_fee >= amount_in {
            sqrt_ratio_target_x64
        } else {
            get_next_sqrt_price_from_input(
                sqrt_ratio_current_x64,
                liquidity,
                amount_remaining_less_fee,
                zero_for_one,
            )?
        }
    } else {
        amount_out = if zero_for_one {
            get_amount_1_delta(sqrt_ratio_target_x64, sqrt_ratio_current_x64, liquidity, false)?
        } else {
            get_amount_0_delta(sqrt_ratio_current_x64, sqrt_ratio_target_x64, liquidity, false)?
        };
        if amount_remaining_abs >= amount_out {
            sqrt_ratio_target_x64
        } else {
            get_next_sqrt_price_from_output(
                sqrt_ratio_current_x64,
                liquidity,
                amount_remaining_abs,
                zero_for_one,
            )?
        }
    };

    let max = sqrt_ratio_target_x64 == sqrt_ratio_next_x64;

    // get the input/output amounts
    if zero_for_one {
        if !(max && exact_in) {
            amount_in =
                get_amount_0_delta(sqrt_ratio_next_x64, sqrt_ratio_current_x64, liquidity, true)?;
        }
        if !(max && !exact_in) {
            amount_out =
                get_amount_1_delta(sqrt_ratio_next_x64, sqrt_ratio_current_x64, liquidity, false)?;
        }
    } else {
        if !(max && exact_in) {
            amount_in =
                get_amount_1_delta(sqrt_ratio_current_x64, sqrt_ratio_next_x64, liquidity, true)?;
        }
        if !(max && !exact_in) {
            amount_out =
                get_amount_0_delta(sqrt_ratio_current_x64, sqrt_ratio_next_x64, liquidity, false)?;
        }
    }

    // cap the output amount to not exceed the remaining output amount
    if !exact_in && amount_out > amount_remaining_abs {
        amount_out = amount_remaining_abs;
    }

    let fee_amount = if exact_in && sqrt_ratio_next_x64 != sqrt_ratio_target_x64 {
        // we didn't reach the target, so take the remainder of the maximum input as fee
        amount_remaining_abs
            .checked_sub(amount_in)
            .ok_or(StateError::InvariantViolation("step input exceeds remaining amount"))?
    } else {
        mul_div_rounding_up(amount_in, fee, fee_complement)?
    };

    Ok((sqrt_ratio_next_x64, amount_in, amount_out, fee_amount))
}
