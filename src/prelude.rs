//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use hydra_exchange::prelude::*;
//! ```

// Domain types
pub use crate::domain::{
    AccountId, AddLiquidity, Amount, BasisPoints, Deposit, FeeTier, PoolId, Price,
    RemoveLiquidity, Rounding, Shares, SwapResult, SwapSpec, Timestamp, TokenAddress, TokenPair,
    Withdrawal,
};

// Engine
pub use crate::exchange::Exchange;
pub use crate::pools::PoolInfo;

// Core traits
pub use crate::traits::{AssetLedger, Clock, FromConfig, ManualClock, SystemClock};

// Assets
pub use crate::assets::MemoryLedger;

// Math utilities
pub use crate::math::CheckedArithmetic;

// Configuration
pub use crate::config::ExchangeConfig;

// Events
pub use crate::events::ExchangeEvent;

// Error types
pub use crate::error::{AmmError, Result};
