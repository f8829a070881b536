use crate::entities::tick_data_provider::TickDataProvider;
use crate::entities::token::{Currency, CurrencyAmount, Token};
use crate::error::{Error, MathError, PoolError, StateError};
use crate::pool::clmm_pool::ClmmPool;
use crate::pool::swap::{SwapParams, SwapResult};
use alloy_primitives::{I256, U256};
use std::sync::Arc;
use tracing::debug;

/// Reinterprets a raw amount as a signed one, rejecting amounts that do not
/// fit in 255 bits.
fn to_signed(amount: U256) -> Result<I256, MathError> {
    if amount.bit(255) {
        return Err(MathError::Overflow);
    }
    Ok(I256::from_raw(amount))
}

fn to_amount(value: I256) -> Result<U256, StateError> {
    if value.is_negative() {
        return Err(StateError::InvariantViolation("quoted amount is negative"));
    }
    Ok(value.into_raw())
}

impl<P: TickDataProvider> ClmmPool<P> {
    /// Returns the amount of the other token received for `input_amount`,
    /// and the pool as it would be after the trade.
    ///
    /// The swap stops early at `sqrt_price_limit_x64` if given; the input
    /// is then only partially used.
    pub fn quote_output(
        &self,
        input_amount: &CurrencyAmount,
        sqrt_price_limit_x64: Option<U256>,
    ) -> Result<(CurrencyAmount, ClmmPool<P>), Error> {
        let input_token = self.pool_token(input_amount.currency())?;
        let zero_for_one = *input_token == *self.token0();
        debug!(
            "Quoting output for {} in of {:?} (zero_for_one: {})",
            input_amount.quotient(),
            input_token.symbol(),
            zero_for_one
        );

        let amount_specified = to_signed(input_amount.quotient())?;
        let result = self.swap(SwapParams::new(
            zero_for_one,
            amount_specified,
            sqrt_price_limit_x64,
        ))?;

        let output = result
            .amount_calculated
            .checked_neg()
            .ok_or(MathError::Overflow)?;
        let output_token = if zero_for_one {
            self.token1()
        } else {
            self.token0()
        };
        let output_amount =
            CurrencyAmount::from_raw_amount(output_token.clone().into(), to_amount(output)?);
        debug!(
            "Quoted {} out, pool moves to tick {}",
            output_amount.quotient(),
            result.tick_current
        );

        Ok((output_amount, self.after_swap(&result)?))
    }

    /// Returns the amount of the other token needed to receive
    /// `output_amount`, and the pool as it would be after the trade.
    ///
    /// If `sqrt_price_limit_x64` stops the swap early, less than
    /// `output_amount` is bought and the returned input covers only that.
    pub fn quote_input(
        &self,
        output_amount: &CurrencyAmount,
        sqrt_price_limit_x64: Option<U256>,
    ) -> Result<(CurrencyAmount, ClmmPool<P>), Error> {
        let output_token = self.pool_token(output_amount.currency())?;
        let zero_for_one = *output_token == *self.token1();
        debug!(
            "Quoting input for {} out of {:?} (zero_for_one: {})",
            output_amount.quotient(),
            output_token.symbol(),
            zero_for_one
        );

        let amount_specified = -to_signed(output_amount.quotient())?;
        let result = self.swap(SwapParams::new(
            zero_for_one,
            amount_specified,
            sqrt_price_limit_x64,
        ))?;

        let input_token = if zero_for_one {
            self.token0()
        } else {
            self.token1()
        };
        let input_amount = CurrencyAmount::from_raw_amount(
            input_token.clone().into(),
            to_amount(result.amount_calculated)?,
        );
        debug!(
            "Quoted {} in, pool moves to tick {}",
            input_amount.quotient(),
            result.tick_current
        );

        Ok((input_amount, self.after_swap(&result)?))
    }

    /// The pool token matching `currency`. Native currencies are not traded
    /// directly and have to be wrapped by the caller first.
    fn pool_token<'a>(&'a self, currency: &'a Currency) -> Result<&'a Token, PoolError> {
        match currency {
            Currency::Token(token) if self.involves_token(token) => Ok(token),
            _ => Err(PoolError::TokenNotInvolved),
        }
    }

    fn after_swap(&self, result: &SwapResult) -> Result<ClmmPool<P>, Error> {
        ClmmPool::new(
            self.token0().clone(),
            self.token1().clone(),
            self.fee(),
            self.tick_spacing(),
            result.sqrt_ratio_x64,
            result.liquidity,
            result.tick_current,
            Arc::clone(self.tick_data_provider()),
        )
    }
}
