//! The external asset ledgers the exchange moves value through.

use thiserror::Error;

use crate::domain::{AccountId, Amount};

/// Why an asset ledger refused an operation.
///
/// The exchange does not branch on the reason; every variant surfaces as
/// [`AmmError::AssetTransferFailed`](crate::error::AmmError::AssetTransferFailed)
/// for the asset involved. The reason is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetLedgerError {
    /// The source account holds less than the amount.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// The spender is not approved for the amount.
    #[error("insufficient allowance")]
    InsufficientAllowance,

    /// The destination balance would overflow.
    #[error("balance overflow")]
    Overflow,

    /// The ledger rejected the operation for its own reasons.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

/// A fungible asset ledger with ERC-20 style operations.
///
/// The exchange holds all pooled assets in its custody account. Deposits
/// and swap inputs are pulled with [`transfer_from`](Self::transfer_from),
/// using the custody account as spender; withdrawals and swap outputs are
/// pushed with [`transfer`](Self::transfer) from custody.
///
/// Implementations may call back into the exchange from inside a transfer.
/// Such nested calls are rejected for any pool that is mid-operation.
pub trait AssetLedger: Send + Sync {
    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Any [`AssetLedgerError`]; a failed transfer must not move funds.
    fn transfer(&self, from: AccountId, to: AccountId, amount: Amount) -> Result<(), AssetLedgerError>;

    /// Moves `amount` from `from` to `to` on the strength of an allowance
    /// `from` granted to `spender`.
    ///
    /// # Errors
    ///
    /// Any [`AssetLedgerError`]; a failed transfer must not move funds.
    fn transfer_from(
        &self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), AssetLedgerError>;

    /// Balance held by `account`.
    fn balance_of(&self, account: AccountId) -> Amount;

    /// Total units in existence.
    fn total_supply(&self) -> Amount;
}
