use crate::entities::tick::Tick;
use crate::entities::tick_data_provider::TickDataProvider;
use crate::error::{Error, TickDataError};
use crate::math::tick_bitmap::check_tick_spacing;

/// Tick data held as a sorted list of initialized ticks.
///
/// Word boundaries are reported exactly as the on-chain bitmap would
/// report them, so a swap walks the same steps over either provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickListDataProvider {
    ticks: Vec<Tick>,
    tick_spacing: i32,
}

impl TickListDataProvider {
    /// Validates and wraps `ticks`.
    ///
    /// The list must be strictly ascending, every index a multiple of
    /// `tick_spacing`, and the net liquidity must sum to zero.
    pub fn new(ticks: Vec<Tick>, tick_spacing: i32) -> Result<Self, TickDataError> {
        validate_list(&ticks, tick_spacing)?;
        Ok(Self {
            ticks,
            tick_spacing,
        })
    }

    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn tick_spacing(&self) -> i32 {
        self.tick_spacing
    }

    fn is_below_smallest(&self, tick: i32) -> Result<bool, TickDataError> {
        let first = self.ticks.first().ok_or(TickDataError::NoTickData)?;
        Ok(tick < first.index)
    }

    fn is_at_or_above_largest(&self, tick: i32) -> Result<bool, TickDataError> {
        let last = self.ticks.last().ok_or(TickDataError::NoTickData)?;
        Ok(tick >= last.index)
    }

    /// Index of the largest tick with `index <= tick`. The caller has
    /// checked that `tick` is not below the smallest tick.
    fn binary_search(&self, tick: i32) -> usize {
        self.ticks.partition_point(|t| t.index <= tick) - 1
    }

    /// The next initialized tick at or left of `tick` (`lte`), or strictly
    /// right of it.
    pub fn next_initialized_tick(&self, tick: i32, lte: bool) -> Result<&Tick, TickDataError> {
        if lte {
            if self.is_below_smallest(tick)? {
                return Err(TickDataError::BelowSmallest);
            }
            if self.is_at_or_above_largest(tick)? {
                return self.ticks.last().ok_or(TickDataError::NoTickData);
            }
            Ok(&self.ticks[self.binary_search(tick)])
        } else {
            if self.is_at_or_above_largest(tick)? {
                return Err(TickDataError::AtOrAboveLargest);
            }
            if self.is_below_smallest(tick)? {
                return self.ticks.first().ok_or(TickDataError::NoTickData);
            }
            Ok(&self.ticks[self.binary_search(tick) + 1])
        }
    }
}

fn validate_list(ticks: &[Tick], tick_spacing: i32) -> Result<(), TickDataError> {
    check_tick_spacing(tick_spacing)?;
    if let Some(tick) = ticks.iter().find(|t| t.index % tick_spacing != 0) {
        return Err(TickDataError::TickNotAligned(tick.index));
    }
    if ticks.windows(2).any(|pair| pair[0].index >= pair[1].index) {
        return Err(TickDataError::UnsortedTicks);
    }

    let net = ticks
        .iter()
        .try_fold(0i128, |sum, t| sum.checked_add(t.liquidity_net));
    if net != Some(0) {
        return Err(TickDataError::NonZeroNetLiquidity);
    }
    Ok(())
}

impl TickDataProvider for TickListDataProvider {
    fn get_tick(&self, index: i32) -> Result<Tick, Error> {
        self.ticks
            .binary_search_by_key(&index, |t| t.index)
            .map(|i| self.ticks[i])
            .map_err(|_| TickDataError::TickNotFound(index).into())
    }

    fn next_initialized_tick_within_one_word(
        &self,
        tick: i32,
        lte: bool,
        tick_spacing: i32,
    ) -> Result<(i32, bool), Error> {
        if tick_spacing != self.tick_spacing {
            return Err(TickDataError::SpacingMismatch.into());
        }

        let compressed = tick.div_euclid(tick_spacing);

        if lte {
            let word_pos = compressed >> 8;
            let minimum = (word_pos << 8) * tick_spacing;

            if self.is_below_smallest(tick)? {
                return Ok((minimum, false));
            }

            let index = self.next_initialized_tick(tick, lte)?.index;
            let next_initialized_tick = minimum.max(index);
            Ok((next_initialized_tick, next_initialized_tick == index))
        } else {
            let word_pos = (compressed + 1) >> 8;
            let maximum = (((word_pos + 1) << 8) - 1) * tick_spacing;

            if self.is_at_or_above_largest(tick)? {
                return Ok((maximum, false));
            }

            let index = self.next_initialized_tick(tick, lte)?.index;
            let next_initialized_tick = maximum.min(index);
            Ok((next_initialized_tick, next_initialized_tick == index))
        }
    }
}
