use crate::FastMap;
use crate::entities::tick::Tick;
use crate::entities::tick_data_provider::TickDataProvider;
use crate::error::{Error, TickDataError};
use crate::math::tick_bitmap::{
    check_tick_spacing, flip_tick, next_initialized_tick_within_one_word,
};
use alloy_primitives::U256;

/// Tick data laid out the way the pool stores it on chain: a sparse map
/// of 256-bit words flagging initialized ticks, plus the tick records.
#[derive(Debug, Clone)]
pub struct TickBitmapProvider {
    bitmap: FastMap<i16, U256>,
    ticks: FastMap<i32, Tick>,
    tick_spacing: i32,
}

impl TickBitmapProvider {
    pub fn new(tick_spacing: i32) -> Result<Self, TickDataError> {
        check_tick_spacing(tick_spacing)?;
        Ok(Self {
            bitmap: FastMap::default(),
            ticks: FastMap::default(),
            tick_spacing,
        })
    }

    /// Builds a provider holding every tick of `ticks`.
    pub fn from_ticks(
        ticks: impl IntoIterator<Item = Tick>,
        tick_spacing: i32,
    ) -> Result<Self, TickDataError> {
        let mut provider = Self::new(tick_spacing)?;
        for tick in ticks {
            provider.set_tick(tick)?;
        }
        Ok(provider)
    }

    pub fn tick_spacing(&self) -> i32 {
        self.tick_spacing
    }

    /// Stores `tick`, marking it initialized if it was not already.
    pub fn set_tick(&mut self, tick: Tick) -> Result<(), TickDataError> {
        if !self.ticks.contains_key(&tick.index) {
            flip_tick(&mut self.bitmap, tick.index, self.tick_spacing)?;
        }
        self.ticks.insert(tick.index, tick);
        Ok(())
    }

    /// Removes the tick at `index` and clears its bitmap flag.
    pub fn remove_tick(&mut self, index: i32) -> Result<Tick, TickDataError> {
        let tick = self
            .ticks
            .remove(&index)
            .ok_or(TickDataError::TickNotFound(index))?;
        flip_tick(&mut self.bitmap, index, self.tick_spacing)?;
        Ok(tick)
    }
}

impl TickDataProvider for TickBitmapProvider {
    fn get_tick(&self, index: i32) -> Result<Tick, Error> {
        self.ticks
            .get(&index)
            .copied()
            .ok_or(TickDataError::TickNotFound(index).into())
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
        next_initialized_tick_within_one_word(&self.bitmap, tick, tick_spacing, lte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::tick_list::TickListDataProvider;

    fn ticks() -> Vec<Tick> {
        vec![
            Tick::new(-443580, 1_000, 1_000).unwrap(),
            Tick::new(-120, 500, 500).unwrap(),
            Tick::new(120, 500, -500).unwrap(),
            Tick::new(443580, 1_000, -1_000).unwrap(),
        ]
    }

    #[test]
    fn rejects_bad_spacing_and_misaligned_ticks() {
        assert!(matches!(
            TickBitmapProvider::new(0),
            Err(TickDataError::InvalidTickSpacing)
        ));
        assert!(matches!(
            TickBitmapProvider::new(10_000_000),
            Err(TickDataError::InvalidTickSpacing)
        ));
        let misaligned = vec![Tick::new(61, 1, 1).unwrap()];
        assert!(matches!(
            TickBitmapProvider::from_ticks(misaligned, 60),
            Err(TickDataError::TickNotAligned(61))
        ));
    }

    #[test]
    fn set_and_remove_keep_bitmap_in_sync() {
        let mut provider = TickBitmapProvider::new(60).unwrap();
        let tick = Tick::new(120, 5, 5).unwrap();

        provider.set_tick(tick).unwrap();
        // updating an initialized tick must not clear its flag
        provider.set_tick(Tick::new(120, 7, 7).unwrap()).unwrap();
        assert_eq!(provider.get_tick(120).unwrap().liquidity_net, 7);
        assert_eq!(
            provider
                .next_initialized_tick_within_one_word(0, false, 60)
                .unwrap(),
            (120, true)
        );

        assert_eq!(provider.remove_tick(120).unwrap().liquidity_gross, 7);
        assert_eq!(
            provider
                .next_initialized_tick_within_one_word(0, false, 60)
                .unwrap(),
            (255 * 60, false)
        );
        assert!(matches!(
            provider.get_tick(120),
            Err(Error::TickDataError(TickDataError::TickNotFound(120)))
        ));
        assert_eq!(
            provider.remove_tick(120),
            Err(TickDataError::TickNotFound(120))
        );
    }

    #[test]
    fn agrees_with_tick_list_provider() {
        let bitmap = TickBitmapProvider::from_ticks(ticks(), 60).unwrap();
        let list = TickListDataProvider::new(ticks(), 60).unwrap();

        let mut tick = -443636;
        while tick <= 443636 {
            for lte in [true, false] {
                assert_eq!(
                    bitmap
                        .next_initialized_tick_within_one_word(tick, lte, 60)
                        .unwrap(),
                    list.next_initialized_tick_within_one_word(tick, lte, 60)
                        .unwrap(),
                    "tick {tick}, lte {lte}"
                );
            }
            tick += 37;
        }
    }

    #[test]
    fn rejects_other_spacing() {
        let provider = TickBitmapProvider::from_ticks(ticks(), 60).unwrap();
        assert!(matches!(
            provider.next_initialized_tick_within_one_word(0, true, 10),
            Err(Error::TickDataError(TickDataError::SpacingMismatch))
        ));
    }
}
