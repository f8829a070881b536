use crate::constants::MAX_FEE;
use crate::entities::tick_data_provider::TickDataProvider;
use crate::entities::token::Token;
use crate::error::{Error, PoolError};
use crate::math::tick_bitmap::check_tick_spacing;
use crate::math::tick_math::get_sqrt_ratio_at_tick;
use alloy_primitives::U256;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Immutable snapshot of a concentrated-liquidity pool.
///
/// Quoting never mutates a snapshot; it returns the amount together with a
/// new snapshot describing the pool after the trade. The tick data is
/// shared between snapshots through an `Arc`.
pub struct ClmmPool<P> {
    token0: Token,
    token1: Token,
    fee: u32,
    tick_spacing: i32,
    sqrt_ratio_x64: U256,
    liquidity: u128,
    tick_current: i32,
    tick_data_provider: Arc<P>,
}

impl<P: TickDataProvider> ClmmPool<P> {
    /// Creates a pool snapshot, ordering the two tokens by address.
    ///
    /// `sqrt_ratio_x64` must lie within the price band of `tick_current`,
    /// i.e. between the prices of `tick_current` and `tick_current + 1`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        token_a: Token,
        token_b: Token,
        fee: u32,
        tick_spacing: i32,
        sqrt_ratio_x64: U256,
        liquidity: u128,
        tick_current: i32,
        tick_data_provider: Arc<P>,
    ) -> Result<Self, Error> {
        if fee >= MAX_FEE {
            debug!("Rejecting pool with fee {} pips", fee);
            return Err(PoolError::FeeTooHigh.into());
        }
        check_tick_spacing(tick_spacing)?;

        let (token0, token1) = if token_a.sorts_before(&token_b)? {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        let lower = get_sqrt_ratio_at_tick(tick_current)?;
        let upper = get_sqrt_ratio_at_tick(tick_current.saturating_add(1))?;
        if sqrt_ratio_x64 < lower || sqrt_ratio_x64 > upper {
            debug!(
                "Price {} outside band [{}, {}] of tick {}",
                sqrt_ratio_x64, lower, upper, tick_current
            );
            return Err(PoolError::InvalidInitialPrice.into());
        }

        Ok(Self {
            token0,
            token1,
            fee,
            tick_spacing,
            sqrt_ratio_x64,
            liquidity,
            tick_current,
            tick_data_provider,
        })
    }
}

impl<P> ClmmPool<P> {
    pub fn token0(&self) -> &Token {
        &self.token0
    }

    pub fn token1(&self) -> &Token {
        &self.token1
    }

    /// Fee in hundredths of a bip.
    pub fn fee(&self) -> u32 {
        self.fee
    }

    pub fn tick_spacing(&self) -> i32 {
        self.tick_spacing
    }

    pub fn sqrt_ratio_x64(&self) -> U256 {
        self.sqrt_ratio_x64
    }

    pub fn liquidity(&self) -> u128 {
        self.liquidity
    }

    pub fn tick_current(&self) -> i32 {
        self.tick_current
    }

    pub fn tick_data_provider(&self) -> &Arc<P> {
        &self.tick_data_provider
    }

    /// Returns true if `token` is one of the two pool tokens.
    pub fn involves_token(&self, token: &Token) -> bool {
        *token == self.token0 || *token == self.token1
    }
}

impl<P> Clone for ClmmPool<P> {
    fn clone(&self) -> Self {
        Self {
            token0: self.token0.clone(),
            token1: self.token1.clone(),
            fee: self.fee,
            tick_spacing: self.tick_spacing,
            sqrt_ratio_x64: self.sqrt_ratio_x64,
            liquidity: self.liquidity,
            tick_current: self.tick_current,
            tick_data_provider: Arc::clone(&self.tick_data_provider),
        }
    }
}

impl<P> fmt::Debug for ClmmPool<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClmmPool")
            .field("token0", &self.token0)
            .field("token1", &self.token1)
            .field("fee", &self.fee)
            .field("tick_spacing", &self.tick_spacing)
            .field("sqrt_ratio_x64", &self.sqrt_ratio_x64)
            .field("liquidity", &self.liquidity)
            .field("tick_current", &self.tick_current)
            .finish_non_exhaustive()
    }
}
