//! Swap constraints.

use serde::{Deserialize, Serialize};

use super::Amount;

/// What drives a swap and the caller's slippage bound.
///
/// # Examples
///
/// ```
/// use hydra_exchange::domain::{Amount, SwapSpec};
///
/// let spec = SwapSpec::exact_in(Amount::new(1_000), Amount::new(900));
/// assert!(matches!(spec, SwapSpec::ExactIn { .. }));
/// assert_eq!(spec.amount(), Amount::new(1_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapSpec {
    /// Sell exactly `amount_in`; receive at least `min_out`.
    ExactIn {
        /// The fixed input amount.
        amount_in: Amount,
        /// Smallest acceptable output.
        min_out: Amount,
    },
    /// Buy exactly `amount_out`; pay at most `max_in`.
    ExactOut {
        /// The fixed output amount.
        amount_out: Amount,
        /// Largest acceptable input.
        max_in: Amount,
    },
}

impl SwapSpec {
    /// Creates an exact-input specification.
    pub const fn exact_in(amount_in: Amount, min_out: Amount) -> Self {
        Self::ExactIn { amount_in, min_out }
    }

    /// Creates an exact-output specification.
    pub const fn exact_out(amount_out: Amount, max_in: Amount) -> Self {
        Self::ExactOut { amount_out, max_in }
    }

    /// The fixed side of the swap regardless of variant.
    pub const fn amount(&self) -> Amount {
        match self {
            Self::ExactIn { amount_in, .. } => *amount_in,
            Self::ExactOut { amount_out, .. } => *amount_out,
        }
    }
}

/// Outcome of a committed swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapResult {
    /// Input pulled from the caller.
    pub amount_in: Amount,
    /// Output sent to the recipient.
    pub amount_out: Amount,
    /// Part of the input retained by the pool.
    pub fee: Amount,
}
