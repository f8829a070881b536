use crate::FastMap;
use crate::error::{Error, TickDataError};
use crate::math::bit_math::{least_significant_bit, most_significant_bit};
use crate::math::tick_math::MAX_TICK;
use alloy_primitives::U256;

/// Accepts spacings in `[1, MAX_TICK]`; wider spacings overflow the `i32`
/// word boundary arithmetic.
pub fn check_tick_spacing(tick_spacing: i32) -> Result<(), TickDataError> {
    if (1..=MAX_TICK).contains(&tick_spacing) {
        Ok(())
    } else {
        Err(TickDataError::InvalidTickSpacing)
    }
}

/// Computes the bitmap word index and bit position for a compressed tick
/// (`tick / tick_spacing`).
pub fn position(compressed: i32) -> (i16, u8) {
    ((compressed >> 8) as i16, compressed.rem_euclid(256) as u8)
}

/// Returns the bitmap word stored at `word`, or zero if absent.
pub fn get_word(bitmap: &FastMap<i16, U256>, word: i16) -> U256 {
    bitmap.get(&word).copied().unwrap_or(U256::ZERO)
}

/// Toggles the initialized status of a tick in the bitmap.
///
/// `tick` must be a multiple of `tick_spacing`.
pub fn flip_tick(
    tick_bitmap: &mut FastMap<i16, U256>,
    tick: i32,
    tick_spacing: i32,
) -> Result<(), TickDataError> {
    check_tick_spacing(tick_spacing)?;
    if tick % tick_spacing != 0 {
        return Err(TickDataError::TickNotAligned(tick));
    }

    let (word_pos, bit_pos) = position(tick / tick_spacing);
    let mask = U256::ONE << bit_pos;
    let word = tick_bitmap.entry(word_pos).or_insert(U256::ZERO);
    *word ^= mask;
    Ok(())
}

/// Searches a single 256-bit bitmap word for the next initialized tick
/// to the left (`lte`, inclusive) or right (exclusive) of `tick`.
///
/// Returns the tick index of the next candidate and whether that tick is
/// actually initialized. When the word holds nothing in the search
/// direction the word boundary is returned with `false`.
pub fn next_initialized_tick_within_one_word(
    bitmap: &FastMap<i16, U256>,
    tick: i32,
    tick_spacing: i32,
    lte: bool,
) -> Result<(i32, bool), Error> {
    check_tick_spacing(tick_spacing)?;

    let mut compressed: i32 = tick / tick_spacing;
    // round towards negative infinity
    if tick < 0 && tick % tick_spacing != 0 {
        compressed -= 1;
    }

    if lte {
        let (word_pos, bit_pos) = position(compressed);

        // all the 1s at or to the right of the current bit_pos
        let mask: U256 = (U256::ONE << bit_pos) - U256::ONE + (U256::ONE << bit_pos);
        let masked: U256 = get_word(bitmap, word_pos) & mask;

        let initialized = !masked.is_zero();

        let next: i32 = if initialized {
            (compressed - (bit_pos - most_significant_bit(masked)?) as i32) * tick_spacing
        } else {
            (compressed - bit_pos as i32) * tick_spacing
        };
        Ok((next, initialized))
    } else {
        // start from the word of the next tick
        let (word_pos, bit_pos) = position(compressed + 1);

        // all the 1s at or to the left of bit_pos
        let mask: U256 = !((U256::ONE << bit_pos) - U256::ONE);
        let masked: U256 = get_word(bitmap, word_pos) & mask;

        let initialized = !masked.is_zero();

        let next: i32 = if initialized {
            (compressed + 1 + (least_significant_bit(masked)? - bit_pos) as i32) * tick_spacing
        } else {
            (compressed + 1 + (255u8 - bit_pos) as i32) * tick_spacing
        };
        Ok((next, initialized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub fn init_test_ticks() -> FastMap<i16, U256> {
        let ticks = vec![-200, -55, -4, 70, 78, 84, 139, 240, 535];
        let mut bitmap = FastMap::default();
        for t in ticks {
            flip_tick(&mut bitmap, t, 1).unwrap();
        }
        bitmap
    }

    fn next(bitmap: &FastMap<i16, U256>, tick: i32, spacing: i32, lte: bool) -> (i32, bool) {
        next_initialized_tick_within_one_word(bitmap, tick, spacing, lte).unwrap()
    }

    #[test]
    pub fn test_position_simple() {
        assert_eq!(position(0), (0, 0));
        assert_eq!(position(1), (0, 1));
        assert_eq!(position(255), (0, 255));
        assert_eq!(position(256), (1, 0));
        assert_eq!(position(300), (1, 44));
    }

    #[test]
    pub fn test_position_negative() {
        assert_eq!(position(-1), (-1, 255));
        assert_eq!(position(-256), (-1, 0));
        assert_eq!(position(-257), (-2, 255));
    }

    // -----------------------------------------------------------------------------
    // TESTS: flip_tick correctness
    // -----------------------------------------------------------------------------
    #[test]
    pub fn test_flip_tick_roundtrip() {
        let mut bm = FastMap::default();
        flip_tick(&mut bm, 78, 1).unwrap();
        let (word, bit) = position(78);
        assert_eq!(get_word(&bm, word), U256::ONE << bit);
        flip_tick(&mut bm, 78, 1).unwrap();
        assert_eq!(get_word(&bm, word), U256::ZERO);
    }

    #[test]
    pub fn test_flip_tick_rejects_misaligned_tick() {
        let mut bm = FastMap::default();
        assert_eq!(
            flip_tick(&mut bm, 61, 60),
            Err(TickDataError::TickNotAligned(61))
        );
        assert_eq!(
            flip_tick(&mut bm, 60, 0),
            Err(TickDataError::InvalidTickSpacing)
        );
        assert!(bm.is_empty());
    }

    #[test]
    pub fn test_tick_spacing_bounds() {
        assert_eq!(check_tick_spacing(1), Ok(()));
        assert_eq!(check_tick_spacing(MAX_TICK), Ok(()));
        assert_eq!(
            check_tick_spacing(MAX_TICK + 1),
            Err(TickDataError::InvalidTickSpacing)
        );
        assert_eq!(check_tick_spacing(-60), Err(TickDataError::InvalidTickSpacing));

        // the widest spacing still lands word boundaries inside i32
        let bm = FastMap::default();
        assert_eq!(next(&bm, 0, MAX_TICK, false), (255 * MAX_TICK, false));
        assert_eq!(next(&bm, -1, MAX_TICK, true), (-256 * MAX_TICK, false));
        assert!(matches!(
            next_initialized_tick_within_one_word(&bm, 0, 10_000_000, false),
            Err(Error::TickDataError(TickDataError::InvalidTickSpacing))
        ));
    }

    // -----------------------------------------------------------------------------
    // TESTS: Right Search (lte = false)
    // -----------------------------------------------------------------------------
    #[test]
    pub fn test_right_exact_match() {
        let bm = init_test_ticks();
        assert_eq!(next(&bm, 78, 1, false), (84, true));
    }

    #[test]
    pub fn test_right_between_ticks() {
        let bm = init_test_ticks();
        assert_eq!(next(&bm, 77, 1, false), (78, true));
    }

    #[test]
    pub fn test_right_negative_between() {
        let bm = init_test_ticks();
        assert_eq!(next(&bm, -56, 1, false), (-55, true));
        assert_eq!(next(&bm, -5, 1, false), (-4, true));
    }

    #[test]
    pub fn test_right_cross_to_next_word() {
        let bm = init_test_ticks();
        assert_eq!(next(&bm, 255, 1, false), (511, false));
    }

    #[test]
    pub fn test_right_find_in_next_word() {
        let mut bm = init_test_ticks();
        flip_tick(&mut bm, 340, 1).unwrap();
        assert_eq!(next(&bm, 328, 1, false), (340, true));
    }

    // -----------------------------------------------------------------------------
    // TESTS: Left Search (lte = true)
    // -----------------------------------------------------------------------------
    #[test]
    pub fn test_left_exact_match() {
        let bm = init_test_ticks();
        assert_eq!(next(&bm, 78, 1, true), (78, true));
        assert_eq!(next(&bm, -55, 1, true), (-55, true));
    }

    #[test]
    pub fn test_left_between_ticks() {
        let bm = init_test_ticks();
        assert_eq!(next(&bm, 79, 1, true), (78, true));
        assert_eq!(next(&bm, -54, 1, true), (-55, true));
    }

    #[test]
    pub fn test_left_stops_at_word_boundary() {
        let bm = init_test_ticks();
        // -4 lives in word -1
        assert_eq!(next(&bm, 2, 1, true), (0, false));
        assert_eq!(next(&bm, -257, 1, true), (-512, false));
    }

    // -----------------------------------------------------------------------------
    // TESTS: Tick spacing
    // -----------------------------------------------------------------------------
    #[test]
    pub fn test_spacing_compresses_ticks() {
        let mut bm = FastMap::default();
        flip_tick(&mut bm, -120, 60).unwrap();
        flip_tick(&mut bm, 120, 60).unwrap();

        assert_eq!(next(&bm, 0, 60, true), (0, false));
        assert_eq!(next(&bm, -1, 60, true), (-120, true));
        assert_eq!(next(&bm, 0, 60, false), (120, true));
        assert_eq!(next(&bm, 120, 60, false), (255 * 60, false));
    }
}
