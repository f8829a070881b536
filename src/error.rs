use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("Math error - overflow")]
    Overflow,
    #[error("Math error - division by zero")]
    DivisionByZero,
    #[error("BitMath error - zero input value")]
    ZeroValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("State error - tick out of bounds")]
    InvalidTick,
    #[error("State error - sqrt ratio out of bounds")]
    InvalidSqrtRatio,
    #[error("State error - sqrt price is not positive")]
    NonPositivePrice,
    #[error("State error - liquidity is not positive")]
    NonPositiveLiquidity,
    #[error("State error - invariant violation: {0}")]
    InvariantViolation(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("Pool error - fee too high")]
    FeeTooHigh,
    #[error("Pool error - invalid sqrt ratio: price outside the current tick band")]
    InvalidInitialPrice,
    #[error("Pool error - token not involved in pool")]
    TokenNotInvolved,
    #[error("Pool error - sqrt price limit too low")]
    PriceLimitTooLow,
    #[error("Pool error - sqrt price limit too high")]
    PriceLimitTooHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token error - tokens live on different chains")]
    DifferentChain,
    #[error("Token error - tokens share the same address")]
    SameAddress,
    #[error("Token error - decimals must be less than 255")]
    InvalidDecimals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TickDataError {
    #[error("Tick data error - no tick stored at index {0}")]
    TickNotFound(i32),
    #[error("Tick data error - tick spacing must lie in [1, MAX_TICK]")]
    InvalidTickSpacing,
    #[error("Tick data error - tick {0} is not a multiple of the tick spacing")]
    TickNotAligned(i32),
    #[error("Tick data error - ticks must be strictly ascending")]
    UnsortedTicks,
    #[error("Tick data error - net liquidity of the tick list is not zero")]
    NonZeroNetLiquidity,
    #[error("Tick data error - tick is below the smallest initialized tick")]
    BelowSmallest,
    #[error("Tick data error - tick is at or above the largest initialized tick")]
    AtOrAboveLargest,
    #[error("Tick data error - query spacing differs from the provider spacing")]
    SpacingMismatch,
    #[error("Tick data error - no tick data available")]
    NoTickData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    MathError(#[from] MathError),

    #[error(transparent)]
    StateError(#[from] StateError),

    #[error(transparent)]
    PoolError(#[from] PoolError),

    #[error(transparent)]
    TokenError(#[from] TokenError),

    #[error(transparent)]
    TickDataError(#[from] TickDataError),
}
