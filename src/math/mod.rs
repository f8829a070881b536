pub mod bit_math;
pub mod encode;
pub mod liquidity_math;
pub mod math_helpers;
pub mod sqrt_price_math;
pub mod swap_math;
pub mod tick_bitmap;
pub mod tick_math;
