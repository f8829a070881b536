#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fees are denominated in hundredths of a bip; this is 100%.
pub const MAX_FEE: u32 = 1_000_000;

/// The default factory enabled fee amounts, denominated in hundredths of
/// bips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FeeAmount {
    Lowest = 100,
    Low = 500,
    Medium = 2500,
    High = 10000,
}

impl FeeAmount {
    pub const fn fee_pips(self) -> u32 {
        self as u32
    }

    /// The default factory tick spacing for this fee tier.
    pub const fn tick_spacing(self) -> i32 {
        match self {
            FeeAmount::Lowest => 1,
            FeeAmount::Low => 10,
            FeeAmount::Medium => 60,
            FeeAmount::High => 200,
        }
    }

    pub const fn from_fee_pips(fee_pips: u32) -> Option<Self> {
        match fee_pips {
            100 => Some(FeeAmount::Lowest),
            500 => Some(FeeAmount::Low),
            2500 => Some(FeeAmount::Medium),
            10000 => Some(FeeAmount::High),
            _ => None,
        }
    }
}

impl From<FeeAmount> for u32 {
    fn from(fee: FeeAmount) -> Self {
        fee.fee_pips()
    }
}
