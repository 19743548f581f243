//! Fixed-point exchange rates.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Exchange rate in units of the output asset per one unit of the input
/// asset, as an unsigned fixed-point number with [`Price::DECIMALS`]
/// fractional digits.
///
/// The raw value of `1.0` is [`Price::SCALE`] (`10^18`).
///
/// # Examples
///
/// ```
/// use hydra_exchange::domain::Price;
///
/// assert_eq!(Price::ONE.raw(), Price::SCALE);
/// assert_eq!(Price::from_raw(2_500_000_000_000_000_000).to_string(), "2.500000000000000000");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u128);

impl Price {
    /// Number of fractional decimal digits.
    pub const DECIMALS: u32 = 18;

    /// Raw representation of `1.0`.
    pub const SCALE: u128 = 10u128.pow(Self::DECIMALS);

    /// A 1:1 rate.
    pub const ONE: Self = Self(Self::SCALE);

    /// Zero rate.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw fixed-point value.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Returns the raw fixed-point value.
    #[must_use]
    pub const fn raw(&self) -> u128 {
        self.0
    }

    /// Returns the integer part, truncating the fraction.
    #[must_use]
    pub const fn trunc(&self) -> u128 {
        self.0 / Self::SCALE
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = Self::DECIMALS as usize;
        write!(f, "{}.{:0width$}", self.0 / Self::SCALE, self.0 % Self::SCALE)
    }
}
