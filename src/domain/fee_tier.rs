//! Swap fee tiers built on [`BasisPoints`].

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, BasisPoints, Rounding};
use crate::error::AmmError;
use crate::math::mul_div;

/// The proportional swap fee retained by a pool.
///
/// The fee is taken out of the input before pricing: only
/// `floor(amount_in × (10 000 − bps) / 10 000)` reaches the curve and the
/// remainder stays in the reserves. With the default 30 bp tier this is
/// exactly `floor(amount_in × 997 / 1000)`.
///
/// # Examples
///
/// ```
/// use hydra_exchange::domain::{Amount, FeeTier};
///
/// let tier = FeeTier::TIER_0_30_PERCENT;
/// assert_eq!(tier.net_input(Amount::new(10)), Ok(Amount::new(9)));
/// assert_eq!(tier.retained(Amount::new(10)), Ok(Amount::new(1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// 0.05% fee (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% fee (30 bp), the engine default.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    #[must_use]
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Checks that the tier leaves a non-zero share of every input.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] for fees of 100% or more.
    pub const fn validate(&self) -> crate::error::Result<()> {
        if self.0.get() >= BasisPoints::MAX_PERCENT.get() {
            return Err(AmmError::InvalidFee("fee must be below 100%"));
        }
        Ok(())
    }

    /// The part of `amount_in` that reaches the pricing curve, rounded down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if the tier exceeds 100%.
    /// - [`AmmError::Overflow`] if the result does not fit an [`Amount`].
    pub fn net_input(&self, amount_in: Amount) -> crate::error::Result<Amount> {
        let complement = self
            .0
            .complement()
            .ok_or(AmmError::InvalidFee("fee exceeds 100%"))?;
        mul_div(
            amount_in.get(),
            u128::from(complement.get()),
            u128::from(BasisPoints::MAX_PERCENT.get()),
            Rounding::Down,
        )
        .map(Amount::new)
    }

    /// The part of `amount_in` retained by the pool as fee.
    ///
    /// # Errors
    ///
    /// Same as [`net_input`](Self::net_input).
    pub fn retained(&self, amount_in: Amount) -> crate::error::Result<Amount> {
        let net = self.net_input(amount_in)?;
        amount_in
            .checked_sub(&net)
            .ok_or(AmmError::Underflow("fee exceeds input"))
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::TIER_0_30_PERCENT
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
