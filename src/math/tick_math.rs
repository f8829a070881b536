use crate::error::{Error, StateError};
use crate::math::bit_math::most_significant_bit;
use crate::U128_MAX;
use alloy_primitives::{I256, U256};

pub const MIN_TICK: i32 = -443636;
pub const MAX_TICK: i32 = -MIN_TICK;

/// `get_sqrt_ratio_at_tick(MIN_TICK)`
pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4295048016, 0, 0, 0]);
/// `get_sqrt_ratio_at_tick(MAX_TICK)`
pub const MAX_SQRT_RATIO: U256 = U256::from_limbs([3871828160200520623, 4294886577, 0, 0]);

pub const SQRT_10001: I256 = I256::from_raw(U256::from_limbs([11745905768312294533, 13863, 0, 0]));
pub const TICK_LOW: I256 = I256::from_raw(U256::from_limbs([
    6552757943157144234,
    184476617836266586,
    0,
    0,
]));
pub const TICK_HIGH: I256 = I256::from_raw(U256::from_limbs([
    4998474450511881007,
    15793544031827761793,
    0,
    0,
]));

const SHIFT_64: usize = 64;
const SHIFT_96: usize = 96;
const SHIFT_128: usize = 128;

/// `floor(2^96 * sqrt(1.0001))`, the starting ratio for odd positive ticks.
const POSITIVE_ODD_BASE: U256 = U256::from_limbs([18379584988209926159, 4295182038, 0, 0]);
/// `2^96`
const POSITIVE_EVEN_BASE: U256 = U256::from_limbs([0, 4294967296, 0, 0]);

/// `floor(2^96 * sqrt(1.0001)^(2^i))` for bits `0x2..=0x40000` of the tick.
const POSITIVE_RATIOS: [U256; 18] = [
    U256::from_limbs([13458744476178488859, 4295396792, 0, 0]),
    U256::from_limbs([7542374851780082549, 4295826332, 0, 0]),
    U256::from_limbs([11688190168964099665, 4296685540, 0, 0]),
    U256::from_limbs([12325950504610477152, 4298404472, 0, 0]),
    U256::from_limbs([743749799984496066, 4301844400, 0, 0]),
    U256::from_limbs([12976902672507316901, 4308732515, 0, 0]),
    U256::from_limbs([8371584169514950494, 4322541852, 0, 0]),
    U256::from_limbs([2262161228410220004, 4350293443, 0, 0]),
    U256::from_limbs([14459650751607002531, 4406332280, 0, 0]),
    U256::from_limbs([7840076245800284593, 4520584868, 0, 0]),
    U256::from_limbs([7174944039344897962, 4758054286, 0, 0]),
    U256::from_limbs([358097327435643877, 5271071706, 0, 0]),
    U256::from_limbs([11388944843577404226, 6469012454, 0, 0]),
    U256::from_limbs([1754717824462694519, 9743525213, 0, 0]),
    U256::from_limbs([11498634451058391528, 22104076011, 0, 0]),
    U256::from_limbs([5866026427582439525, 113758765237, 0, 0]),
    U256::from_limbs([17854934707512043213, 3013074553645, 0, 0]),
    U256::from_limbs([10158072769176329423, 2113780534320708, 0, 0]),
];

/// `floor(2^64 / sqrt(1.0001))`, the starting ratio for odd negative ticks.
const NEGATIVE_ODD_BASE: U256 = U256::from_limbs([18445821805675392311, 0, 0, 0]);
/// `2^64`
const NEGATIVE_EVEN_BASE: U256 = U256::from_limbs([0, 1, 0, 0]);

/// `floor(2^64 / sqrt(1.0001)^(2^i))` for bits `0x2..=0x40000` of `|tick|`.
const NEGATIVE_RATIOS: [U256; 18] = [
    U256::from_limbs([18444899583751176498, 0, 0, 0]),
    U256::from_limbs([18443055278223354162, 0, 0, 0]),
    U256::from_limbs([18439367220385604838, 0, 0, 0]),
    U256::from_limbs([18431993317065449817, 0, 0, 0]),
    U256::from_limbs([18417254355718160513, 0, 0, 0]),
    U256::from_limbs([18387811781193591352, 0, 0, 0]),
    U256::from_limbs([18329067761203520168, 0, 0, 0]),
    U256::from_limbs([18212142134806087854, 0, 0, 0]),
    U256::from_limbs([17980523815641551639, 0, 0, 0]),
    U256::from_limbs([17526086738831147013, 0, 0, 0]),
    U256::from_limbs([16651378430235024244, 0, 0, 0]),
    U256::from_limbs([15030750278693429944, 0, 0, 0]),
    U256::from_limbs([12247334978882834399, 0, 0, 0]),
    U256::from_limbs([8131365268884726200, 0, 0, 0]),
    U256::from_limbs([3584323654723342297, 0, 0, 0]),
    U256::from_limbs([696457651847595233, 0, 0, 0]),
    U256::from_limbs([26294789957452057, 0, 0, 0]),
    U256::from_limbs([37481735321082, 0, 0, 0]),
];

/// Multiplies `ratio` by the table entry of every set bit of `abs_tick`
/// above bit 0, renormalising by `shift` after each product.
#[inline(always)]
fn accumulate(mut ratio: U256, abs_tick: u32, table: &[U256; 18], shift: usize) -> U256 {
    for (i, multiplier) in table.iter().enumerate() {
        if abs_tick & (2 << i) != 0 {
            ratio = ratio.wrapping_mul(*multiplier) >> shift;
        }
    }
    ratio
}

/// Returns the sqrt price (Q64.64 fixed-point) at the given tick, or
/// `StateError::InvalidTick` if the tick is outside `[MIN_TICK, MAX_TICK]`.
///
/// Positive ticks are evaluated in Q96 and brought down to Q64; the rest
/// are evaluated directly in Q64 from the reciprocal table. The result is
/// strictly increasing in `tick`.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U256, StateError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(StateError::InvalidTick);
    }

    let abs_tick = tick.unsigned_abs();
    let odd = abs_tick & 1 != 0;

    if tick > 0 {
        let base = if odd { POSITIVE_ODD_BASE } else { POSITIVE_EVEN_BASE };
        let ratio = accumulate(base, abs_tick, &POSITIVE_RATIOS, SHIFT_96);
        Ok((ratio >> 32) & U128_MAX)
    } else {
        let base = if odd { NEGATIVE_ODD_BASE } else { NEGATIVE_EVEN_BASE };
        Ok(accumulate(base, abs_tick, &NEGATIVE_RATIOS, SHIFT_64))
    }
}

/// Computes the greatest tick whose sqrt price is `<= sqrt_price_x64`.
///
/// Fails with `StateError::InvalidSqrtRatio` unless
/// `MIN_SQRT_RATIO <= sqrt_price_x64 < MAX_SQRT_RATIO`.
pub fn get_tick_at_sqrt_ratio(sqrt_price_x64: U256) -> Result<i32, Error> {
    if sqrt_price_x64 < MIN_SQRT_RATIO || sqrt_price_x64 >= MAX_SQRT_RATIO {
        return Err(StateError::InvalidSqrtRatio.into());
    }

    // Q64.64 -> Q128.128
    let ratio = sqrt_price_x64 << SHIFT_64;
    let msb = most_significant_bit(ratio)? as usize;

    let mut r = if msb >= 128 {
        ratio >> (msb - 127)
    } else {
        ratio << (127 - msb)
    };

    let mut log_2: I256 = I256::from_raw(U256::from(msb)).wrapping_sub(I256::from_raw(U256::from(128u8))) << 64;

    macro_rules! log2_step {
        ($shift:expr) => {{
            r = r.wrapping_mul(r) >> 127;
            if r.bit(128) {
                log_2 |= I256::from_raw(U256::ONE << $shift);
                r >>= 1;
            }
        }};
    }

    log2_step!(63);
    log2_step!(62);
    log2_step!(61);
    log2_step!(60);
    log2_step!(59);
    log2_step!(58);
    log2_step!(57);
    log2_step!(56);
    log2_step!(55);
    log2_step!(54);
    log2_step!(53);
    log2_step!(52);
    log2_step!(51);
    log2_step!(50);

    let log_sqrt10001 = log_2.wrapping_mul(SQRT_10001);
    let tick_low = (log_sqrt10001.wrapping_sub(TICK_LOW) >> SHIFT_128).low_i32();
    let tick_high = (log_sqrt10001.wrapping_add(TICK_HIGH) >> SHIFT_128).low_i32();

    Ok(if tick_low == tick_high {
        tick_low
    } else if get_sqrt_ratio_at_tick(tick_high)? <= sqrt_price_x64 {
        tick_high
    } else {
        tick_low
    })
}
