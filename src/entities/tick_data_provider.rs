use crate::entities::tick::Tick;
use crate::error::{Error, TickDataError};

/// Read-only source of tick data consulted by the swap loop.
///
/// Implementations must be safe to query from several quotes at once;
/// no method may change observable state.
pub trait TickDataProvider {
    /// Returns the tick stored at `index`, failing if there is none.
    fn get_tick(&self, index: i32) -> Result<Tick, Error>;

    /// Returns the next initialized tick contained in the same word as
    /// `tick`, searching left (inclusive) when `lte` and right otherwise.
    ///
    /// When the word holds no initialized tick in that direction the word
    /// boundary is returned with `false`, so the caller always advances.
    fn next_initialized_tick_within_one_word(
        &self,
        tick: i32,
        lte: bool,
        tick_spacing: i32,
    ) -> Result<(i32, bool), Error>;
}

/// Provider for pools without tick data; every query fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTickDataProvider;

impl TickDataProvider for NoTickDataProvider {
    fn get_tick(&self, _index: i32) -> Result<Tick, Error> {
        Err(TickDataError::NoTickData.into())
    }

    fn next_initialized_tick_within_one_word(
        &self,
        _tick: i32,
        _lte: bool,
        _tick_spacing: i32,
    ) -> Result<(i32, bool), Error> {
        Err(TickDataError::NoTickData.into())
    }
}
