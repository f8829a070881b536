//! Bit-exact Q64.64 concentrated-liquidity swap math and pool quoting in
//! pure Rust.
//!
//! This crate exposes:
//! - Low-level math primitives (`math::*`) for ticks, prices, amounts and
//!   bitmaps, reproducing the on-chain fixed-point rounding exactly.
//! - Entities (`entities::*`) for tokens, ticks and tick data providers.
//! - An immutable [`ClmmPool`] snapshot that quotes exact-input and
//!   exact-output swaps, returning the amount and the post-trade pool.
//!
//! # Examples
//!
//! ## Pure math
//! ```
//! use clmm_quote::{math::tick_math, Q64, RESOLUTION};
//!
//! let sqrt_price = tick_math::get_sqrt_ratio_at_tick(0).unwrap();
//! assert_eq!(sqrt_price, Q64);
//! assert_eq!(RESOLUTION, 64);
//! ```
//!
//! ## Quoting a swap
//! ```
//! use std::sync::Arc;
//! use clmm_quote::{
//!     entities::{nearest_usable_tick, CurrencyAmount, Tick, TickListDataProvider, Token},
//!     constants::FeeAmount,
//!     math::tick_math::{MAX_TICK, MIN_TICK},
//!     Address, ClmmPool, Q64, U256,
//! };
//!
//! let dai = Token::new(1, Address::repeat_byte(0x11), 18, Some("DAI"), None).unwrap();
//! let usdc = Token::new(1, Address::repeat_byte(0x22), 6, Some("USDC"), None).unwrap();
//!
//! let fee = FeeAmount::Low;
//! let spacing = fee.tick_spacing();
//! let liquidity = 1_000_000_000_000_000_000u128;
//! let ticks = vec![
//!     Tick::new(nearest_usable_tick(MIN_TICK, spacing).unwrap(), liquidity, liquidity as i128).unwrap(),
//!     Tick::new(nearest_usable_tick(MAX_TICK, spacing).unwrap(), liquidity, -(liquidity as i128)).unwrap(),
//! ];
//! let provider = Arc::new(TickListDataProvider::new(ticks, spacing).unwrap());
//!
//! let pool = ClmmPool::new(dai.clone(), usdc, fee.fee_pips(), spacing, Q64, liquidity, 0, provider).unwrap();
//!
//! let amount_in = CurrencyAmount::from_raw_amount(dai.into(), U256::from(100u8));
//! let (amount_out, pool_after) = pool.quote_output(&amount_in, None).unwrap();
//! assert_eq!(amount_out.quotient(), U256::from(98u8));
//! assert!(pool_after.sqrt_ratio_x64() < Q64);
//! ```

pub use alloy_primitives::{Address, I256, U256};

pub mod constants;
pub mod entities;
pub mod error;
mod hash;
pub mod math;
pub mod pool;

pub use hash::FastMap;
pub use pool::clmm_pool::ClmmPool;

const U128_MAX: U256 = U256::from_limbs([u64::MAX, u64::MAX, 0, 0]);
const U256_E6: U256 = U256::from_limbs([1000000, 0, 0, 0]);

pub const RESOLUTION: u8 = 64;
pub const Q64: U256 = U256::from_limbs([0, 1, 0, 0]);
