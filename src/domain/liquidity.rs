//! Liquidity requests and receipts.

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, Shares, Timestamp, TokenAddress};

/// Parameters of a deposit, in the caller's own asset order.
///
/// `token_x`/`token_y` may be given in either order; every amount field
/// follows the order chosen here, never the canonical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddLiquidity {
    /// First asset as named by the caller.
    pub token_x: TokenAddress,
    /// Second asset as named by the caller.
    pub token_y: TokenAddress,
    /// Most of `token_x` the caller is willing to deposit.
    pub amount_x_desired: Amount,
    /// Most of `token_y` the caller is willing to deposit.
    pub amount_y_desired: Amount,
    /// Least of `token_x` the caller accepts to deposit.
    pub amount_x_min: Amount,
    /// Least of `token_y` the caller accepts to deposit.
    pub amount_y_min: Amount,
    /// Account credited with the minted shares.
    pub recipient: AccountId,
    /// Last instant at which the deposit may execute.
    pub deadline: Timestamp,
}

/// Parameters of a withdrawal, in the caller's own asset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoveLiquidity {
    /// First asset as named by the caller.
    pub token_x: TokenAddress,
    /// Second asset as named by the caller.
    pub token_y: TokenAddress,
    /// Shares to burn from the caller's position.
    pub shares: Shares,
    /// Least of `token_x` the caller accepts to receive.
    pub amount_x_min: Amount,
    /// Least of `token_y` the caller accepts to receive.
    pub amount_y_min: Amount,
    /// Account receiving both assets.
    pub recipient: AccountId,
    /// Last instant at which the withdrawal may execute.
    pub deadline: Timestamp,
}

/// What a committed deposit moved and minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deposit {
    /// `token_x` pulled from the caller.
    pub amount_x: Amount,
    /// `token_y` pulled from the caller.
    pub amount_y: Amount,
    /// Shares issued to the recipient.
    pub shares: Shares,
}

/// What a committed withdrawal paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Withdrawal {
    /// `token_x` sent to the recipient.
    pub amount_x: Amount,
    /// `token_y` sent to the recipient.
    pub amount_y: Amount,
}
