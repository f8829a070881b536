use crate::error::{Error, MathError, StateError};

/// Applies a signed liquidity delta to an unsigned liquidity amount.
///
/// Active liquidity can never go negative: a delta that would take it
/// below zero is an `InvariantViolation`, one that exceeds `u128::MAX`
/// is a `MathError::Overflow`.
pub fn add_delta(x: u128, y: i128) -> Result<u128, Error> {
    if y < 0 {
        x.checked_sub(y.unsigned_abs())
            .ok_or(StateError::InvariantViolation("liquidity delta underflows").into())
    } else {
        x.checked_add(y as u128)
            .ok_or(MathError::Overflow.into())
    }
}
