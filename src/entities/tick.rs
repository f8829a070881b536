use crate::error::{Error, StateError};
use crate::math::tick_bitmap::check_tick_spacing;
use crate::math::tick_math::{MAX_TICK, MIN_TICK};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An initialized tick and the liquidity referencing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tick {
    pub index: i32,
    /// Total liquidity of the positions using this tick as a boundary.
    pub liquidity_gross: u128,
    /// Liquidity added to the active range when the price crosses this
    /// tick upwards.
    pub liquidity_net: i128,
}

impl Tick {
    pub fn new(index: i32, liquidity_gross: u128, liquidity_net: i128) -> Result<Self, StateError> {
        if !(MIN_TICK..=MAX_TICK).contains(&index) {
            return Err(StateError::InvalidTick);
        }
        Ok(Self {
            index,
            liquidity_gross,
            liquidity_net,
        })
    }
}

/// Returns the closest tick that is usable with `tick_spacing`, rounding
/// half-way values up and staying inside `[MIN_TICK, MAX_TICK]`.
pub fn nearest_usable_tick(tick: i32, tick_spacing: i32) -> Result<i32, Error> {
    check_tick_spacing(tick_spacing)?;
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(StateError::InvalidTick.into());
    }

    let spacing = i64::from(tick_spacing);
    // floor(tick / spacing + 1/2) * spacing
    let rounded = (2 * i64::from(tick) + spacing).div_euclid(2 * spacing) * spacing;

    let usable = if rounded < i64::from(MIN_TICK) {
        rounded + spacing
    } else if rounded > i64::from(MAX_TICK) {
        rounded - spacing
    } else {
        rounded
    };
    Ok(usable as i32)
}
