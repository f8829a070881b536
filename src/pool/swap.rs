use crate::entities::tick_data_provider::TickDataProvider;
use crate::error::{Error, PoolError};
use crate::math::liquidity_math::add_delta;
use crate::math::swap_math::compute_swap_step;
use crate::math::tick_math::{
    MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, get_sqrt_ratio_at_tick,
    get_tick_at_sqrt_ratio,
};
use crate::pool::clmm_pool::ClmmPool;
use alloy_primitives::{I256, U256};
use tracing::trace;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SwapParams {
    /// Swap direction: `true` for token0 → token1, `false` for token1 → token0.
    pub zero_for_one: bool,
    /// Signed amount being swapped. Non-negative means exact in, negative means exact out.
    pub amount_specified: I256,
    /// Q64.64 sqrt-price the swap may not move past. Defaults to the
    /// extreme price in the swap direction.
    pub sqrt_price_limit_x64: Option<U256>,
}

impl SwapParams {
    #[inline]
    pub fn new(
        zero_for_one: bool,
        amount_specified: I256,
        sqrt_price_limit_x64: Option<U256>,
    ) -> Self {
        Self {
            zero_for_one,
            amount_specified,
            sqrt_price_limit_x64,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SwapResult {
    /// Amount of the unspecified token: negative when paid out by the
    /// pool (exact in), positive when owed to it (exact out).
    pub amount_calculated: I256,
    /// Part of the specified amount left unswapped once the price limit
    /// was reached.
    pub amount_specified_remaining: I256,
    pub sqrt_ratio_x64: U256,
    pub liquidity: u128,
    pub tick_current: i32,
    /// Total fee charged, in the input token.
    pub fee_amount: U256,
}

// the running state of the swap, returned as the new pool state at the end
struct SwapState {
    // the amount remaining to be swapped in/out of the input/output asset
    amount_specified_remaining: I256,
    // the amount already swapped out/in of the output/input asset
    amount_calculated: I256,
    // current sqrt(price)
    sqrt_price_x64: U256,
    // the tick associated with the current price
    tick: i32,
    // the current liquidity in range
    liquidity: u128,
    // accumulated swap fees
    fee_amount: U256,
}

#[derive(Default)]
struct StepComputations {
    // the price at the beginning of the step
    sqrt_price_start_x64: U256,
    // the next tick to swap to from the current tick in the swap direction
    tick_next: i32,
    // whether tick_next is initialized or not
    initialized: bool,
    // sqrt(price) for the next tick (1/0)
    sqrt_price_next_x64: U256,
    // how much is being swapped in this step
    amount_in: U256,
    // how much is being swapped out
    amount_out: U256,
    // how much fee is being paid in
    fee_amount: U256,
}

/// Resolves the default price limit and checks it lies strictly on the
/// trading side of `sqrt_price_x64` and within the global bounds.
fn resolve_price_limit(
    zero_for_one: bool,
    sqrt_price_limit_x64: Option<U256>,
    sqrt_price_x64: U256,
) -> Result<U256, PoolError> {
    if zero_for_one {
        let limit = sqrt_price_limit_x64.unwrap_or(MIN_SQRT_RATIO + U256::ONE);
        if limit < MIN_SQRT_RATIO {
            return Err(PoolError::PriceLimitTooLow);
        }
        if limit >= sqrt_price_x64 {
            return Err(PoolError::PriceLimitTooHigh);
        }
        Ok(limit)
    } else {
        let limit = sqrt_price_limit_x64.unwrap_or(MAX_SQRT_RATIO - U256::ONE);
        if limit > MAX_SQRT_RATIO {
            return Err(PoolError::PriceLimitTooHigh);
        }
        if limit <= sqrt_price_x64 {
            return Err(PoolError::PriceLimitTooLow);
        }
        Ok(limit)
    }
}

impl<P: TickDataProvider> ClmmPool<P> {
    /// Simulates a swap against this snapshot, walking initialized ticks
    /// until the specified amount is used up or the price limit is hit.
    ///
    /// The snapshot is left untouched; the returned [`SwapResult`] holds
    /// the price, liquidity and tick the pool would end up with.
    pub fn swap(&self, params: SwapParams) -> Result<SwapResult, Error> {
        let zero_for_one = params.zero_for_one;
        let amount_specified = params.amount_specified;
        let sqrt_price_limit_x64 = resolve_price_limit(
            zero_for_one,
            params.sqrt_price_limit_x64,
            self.sqrt_ratio_x64(),
        )?;

        let exact_input = !amount_specified.is_negative();

        let mut state = SwapState {
            amount_specified_remaining: amount_specified,
            amount_calculated: I256::ZERO,
            sqrt_price_x64: self.sqrt_ratio_x64(),
            tick: self.tick_current(),
            liquidity: self.liquidity(),
            fee_amount: U256::ZERO,
        };

        let provider = self.tick_data_provider();

        while !state.amount_specified_remaining.is_zero()
            && state.sqrt_price_x64 != sqrt_price_limit_x64
        {
            let mut step = StepComputations {
                sqrt_price_start_x64: state.sqrt_price_x64,
                ..StepComputations::default()
            };

            (step.tick_next, step.initialized) = provider.next_initialized_tick_within_one_word(
                state.tick,
                zero_for_one,
                self.tick_spacing(),
            )?;

            step.tick_next = step.tick_next.clamp(MIN_TICK, MAX_TICK);

            step.sqrt_price_next_x64 = get_sqrt_ratio_at_tick(step.tick_next)?;

            let sqrt_price_target_x64 = if zero_for_one {
                step.sqrt_price_next_x64.max(sqrt_price_limit_x64)
            } else {
                step.sqrt_price_next_x64.min(sqrt_price_limit_x64)
            };

            (
                state.sqrt_price_x64,
                step.amount_in,
                step.amount_out,
                step.fee_amount,
            ) = compute_swap_step(
                state.sqrt_price_x64,
                sqrt_price_target_x64,
                state.liquidity,
                state.amount_specified_remaining,
                self.fee(),
            )?;

            trace!(
                "Step to tick {} (initialized: {}): price {} -> {}, in {}, out {}, fee {}",
                step.tick_next,
                step.initialized,
                step.sqrt_price_start_x64,
                state.sqrt_price_x64,
                step.amount_in,
                step.amount_out,
                step.fee_amount
            );

            state.fee_amount += step.fee_amount;

            if exact_input {
                state.amount_specified_remaining -=
                    I256::from_raw(step.amount_in + step.fee_amount);
                state.amount_calculated -= I256::from_raw(step.amount_out);
            } else {
                state.amount_specified_remaining += I256::from_raw(step.amount_out);
                state.amount_calculated += I256::from_raw(step.amount_in + step.fee_amount);
            }

            if state.sqrt_price_x64 == step.sqrt_price_next_x64 {
                if step.initialized {
                    let mut liquidity_net = provider.get_tick(step.tick_next)?.liquidity_net;
                    // liquidity_net is defined for crossing upwards
                    if zero_for_one {
                        liquidity_net = -liquidity_net;
                    }
                    state.liquidity = add_delta(state.liquidity, liquidity_net)?;
                }
                state.tick = if zero_for_one {
                    step.tick_next - 1
                } else {
                    step.tick_next
                };
            } else if state.sqrt_price_x64 != step.sqrt_price_start_x64 {
                state.tick = get_tick_at_sqrt_ratio(state.sqrt_price_x64)?;
            }
        }

        Ok(SwapResult {
            amount_calculated: state.amount_calculated,
            amount_specified_remaining: state.amount_specified_remaining,
            sqrt_ratio_x64: state.sqrt_price_x64,
            liquidity: state.liquidity,
            tick_current: state.tick,
            fee_amount: state.fee_amount,
        })
    }
}
