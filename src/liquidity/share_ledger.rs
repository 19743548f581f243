//! Per-pool share balances and supply.

use std::collections::HashMap;

use crate::domain::{AccountId, PoolId, Shares};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;

/// Share balances for every `(pool, provider)` and the total per pool.
///
/// For each pool the total always equals the sum of its providers'
/// balances. Zero balances are not stored.
///
/// # Examples
///
/// ```
/// use hydra_exchange::domain::{AccountId, PoolId, Shares};
/// use hydra_exchange::liquidity::ShareLedger;
///
/// let pool = PoolId::from_bytes([1; 32]);
/// let alice = AccountId::from_bytes([7; 32]);
///
/// let mut ledger = ShareLedger::new();
/// assert!(ledger.issue(pool, alice, Shares::new(100)).is_ok());
/// assert!(ledger.redeem(pool, alice, Shares::new(40)).is_ok());
/// assert_eq!(ledger.balance_of(&pool, &alice), Shares::new(60));
/// assert_eq!(ledger.total_shares(&pool), Shares::new(60));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShareLedger {
    balances: HashMap<(PoolId, AccountId), Shares>,
    totals: HashMap<PoolId, Shares>,
}

impl ShareLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` new shares of `pool` to `holder`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroShares`] if `amount` is zero.
    /// - [`AmmError::Overflow`] if the balance or total would overflow.
    ///   Nothing is changed in that case.
    pub fn issue(&mut self, pool: PoolId, holder: AccountId, amount: Shares) -> Result<()> {
        if amount.is_zero() {
            return Err(AmmError::ZeroShares);
        }
        let balance = self.balance_of(&pool, &holder).safe_add(&amount)?;
        let total = self.total_shares(&pool).safe_add(&amount)?;

        self.balances.insert((pool, holder), balance);
        self.totals.insert(pool, total);
        Ok(())
    }

    /// Burns `amount` shares of `pool` held by `holder`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroShares`] if `amount` is zero.
    /// - [`AmmError::InsufficientShares`] if `holder` owns fewer than
    ///   `amount`.
    pub fn redeem(&mut self, pool: PoolId, holder: AccountId, amount: Shares) -> Result<()> {
        if amount.is_zero() {
            return Err(AmmError::ZeroShares);
        }
        let balance = self
            .balance_of(&pool, &holder)
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientShares)?;
        let total = self.total_shares(&pool).safe_sub(&amount)?;

        if balance.is_zero() {
            self.balances.remove(&(pool, holder));
        } else {
            self.balances.insert((pool, holder), balance);
        }
        if total.is_zero() {
            self.totals.remove(&pool);
        } else {
            self.totals.insert(pool, total);
        }
        Ok(())
    }

    /// Shares of `pool` held by `holder`; zero if none.
    #[must_use]
    pub fn balance_of(&self, pool: &PoolId, holder: &AccountId) -> Shares {
        self.balances
            .get(&(*pool, *holder))
            .copied()
            .unwrap_or(Shares::ZERO)
    }

    /// Outstanding shares of `pool`; zero if none.
    #[must_use]
    pub fn total_shares(&self, pool: &PoolId) -> Shares {
        self.totals.get(pool).copied().unwrap_or(Shares::ZERO)
    }
}
