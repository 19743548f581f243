//! Unified error types for the Hydra exchange engine.
//!
//! All fallible operations across the crate return `AmmError` as their
//! error type, ensuring a consistent error handling experience for consumers.
//! A failed operation leaves reserves, share balances and the event log
//! as they were before the call. The exception is a withdrawal whose
//! second payout fails after the first has settled; see
//! [`Exchange::remove_liquidity`](crate::exchange::Exchange::remove_liquidity).

use thiserror::Error;

use crate::domain::TokenAddress;

/// Every failure the exchange engine can report.
///
/// The variants mirror the engine's validation steps. None of them are
/// transient, so callers should never retry a failed call unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// The caller-supplied deadline has already passed.
    #[error("deadline expired")]
    Expired,

    /// Both sides of a pair name the same asset.
    #[error("identical assets")]
    IdenticalAssets,

    /// An asset identifier is the null (all-zero) address.
    #[error("zero asset address")]
    ZeroAddress,

    /// The recipient account is the null (all-zero) account.
    #[error("zero recipient")]
    ZeroRecipient,

    /// No pool exists for the requested pair.
    #[error("pool not found")]
    PoolNotFound,

    /// The deposit is too small to mint a single share.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// The amount of the first asset is outside the caller's bounds.
    #[error("insufficient A amount")]
    InsufficientAAmount,

    /// The amount of the second asset is below the caller's minimum.
    #[error("insufficient B amount")]
    InsufficientBAmount,

    /// The provider holds fewer shares than requested.
    #[error("insufficient shares")]
    InsufficientShares,

    /// The swap output is zero or below the caller's minimum.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// The input is zero or exceeds the caller's maximum.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// The pool cannot pay out the requested amount.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A reserve involved in the calculation is zero.
    #[error("empty reserve")]
    EmptyReserve,

    /// A swap was quoted with a zero input amount.
    #[error("zero input")]
    ZeroInput,

    /// A share issuance or redemption of zero was requested.
    #[error("zero shares")]
    ZeroShares,

    /// The swap path does not contain exactly two assets.
    #[error("invalid path length")]
    InvalidPathLength,

    /// The asset ledger refused or failed a transfer.
    #[error("asset transfer failed for {0}")]
    AssetTransferFailed(TokenAddress),

    /// No asset ledger is registered for the asset.
    #[error("unknown asset {0}")]
    UnknownAsset(TokenAddress),

    /// A nested call tried to enter a pool that is already mid-operation.
    #[error("reentrancy detected")]
    ReentrancyDetected,

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The engine configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The fee tier is outside the supported range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// The configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(AmmError::Expired.to_string(), "deadline expired");
        assert_eq!(
            AmmError::Overflow("reserve").to_string(),
            "arithmetic overflow: reserve"
        );
    }

    #[test]
    fn transfer_failure_names_asset() {
        let asset = TokenAddress::from_bytes([0xab; 32]);
        let msg = AmmError::AssetTransferFailed(asset).to_string();
        assert!(msg.starts_with("asset transfer failed for 0x"));
        assert!(msg.contains("abab"));
    }
}
