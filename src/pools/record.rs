//! A single pool's reserves, stored in canonical slot order.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, PoolId, Shares, TokenAddress, TokenPair};
use crate::error::Result;

/// Reserves held by one pool.
///
/// `reserve0` always belongs to `pair.token0()` and `reserve1` to
/// `pair.token1()`, whatever order a caller names the assets in. Use
/// [`reserves_for`](Self::reserves_for) to read them in caller order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRecord {
    pair: TokenPair,
    pool_id: PoolId,
    reserve0: Amount,
    reserve1: Amount,
}

impl PoolRecord {
    /// Creates an empty pool for `pair`.
    pub fn new(pair: TokenPair) -> Self {
        Self {
            pair,
            pool_id: pair.pool_id(),
            reserve0: Amount::ZERO,
            reserve1: Amount::ZERO,
        }
    }

    /// The canonical pair.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// The pool identifier derived from the pair.
    #[must_use]
    pub const fn pool_id(&self) -> PoolId {
        self.pool_id
    }

    /// Reserves in canonical order.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve0, self.reserve1)
    }

    /// Reserves ordered so that the first element belongs to `first`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolNotFound`](crate::error::AmmError::PoolNotFound) if
    /// `first` is not one of the pool's assets.
    pub fn reserves_for(&self, first: &TokenAddress) -> Result<(Amount, Amount)> {
        self.pair.orient(first, (self.reserve0, self.reserve1))
    }

    /// Overwrites both reserves in canonical order.
    pub fn set_reserves(&mut self, reserves: (Amount, Amount)) {
        (self.reserve0, self.reserve1) = reserves;
    }

    /// Snapshot of the pool joined with its share supply.
    #[must_use]
    pub fn info(&self, total_shares: Shares) -> PoolInfo {
        PoolInfo {
            token0: self.pair.token0(),
            token1: self.pair.token1(),
            pool_id: self.pool_id,
            reserve0: self.reserve0,
            reserve1: self.reserve1,
            total_shares,
            exists: true,
        }
    }
}

/// Read-only view of a pool returned by queries.
///
/// A pair that has no pool yet is reported with `exists == false`, zero
/// reserves and zero shares, but with its canonical tokens and the id the
/// pool will have once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolInfo {
    /// Canonically smaller asset.
    pub token0: TokenAddress,
    /// Canonically larger asset.
    pub token1: TokenAddress,
    /// Pool identifier.
    pub pool_id: PoolId,
    /// Reserve of `token0`.
    pub reserve0: Amount,
    /// Reserve of `token1`.
    pub reserve1: Amount,
    /// Outstanding shares.
    pub total_shares: Shares,
    /// Whether the pool has been created.
    pub exists: bool,
}

impl PoolInfo {
    /// The zeroed view of a pool that does not exist yet.
    #[must_use]
    pub fn absent(pair: &TokenPair) -> Self {
        Self {
            token0: pair.token0(),
            token1: pair.token1(),
            pool_id: pair.pool_id(),
            reserve0: Amount::ZERO,
            reserve1: Amount::ZERO,
            total_shares: Shares::ZERO,
            exists: false,
        }
    }
}
