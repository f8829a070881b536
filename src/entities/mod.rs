pub mod tick;
pub mod tick_bitmap_provider;
pub mod tick_data_provider;
pub mod tick_list;
pub mod token;

pub use tick::{Tick, nearest_usable_tick};
pub use tick_bitmap_provider::TickBitmapProvider;
pub use tick_data_provider::{NoTickDataProvider, TickDataProvider};
pub use tick_list::TickListDataProvider;
pub use token::{Currency, CurrencyAmount, NativeCurrency, Token};
