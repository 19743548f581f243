//! Per-pool reentrancy guard.
//!
//! A mutating operation marks its pool [`PoolLock::Busy`] before it reads
//! any pool state and clears the mark when the guard is dropped, on success
//! and on every error path. Only busy pools have an entry in the lock map. An asset ledger that calls
//! back into the exchange during a transfer therefore cannot touch the
//! same pool until the outer operation has finished.

use core::cell::RefCell;

use crate::domain::PoolId;
use crate::error::{AmmError, Result};

use super::ExchangeState;

/// Whether a pool is in the middle of a mutating operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PoolLock {
    /// No operation is running against the pool.
    #[default]
    Idle,
    /// An operation holds the pool.
    Busy,
}

/// Holds a pool [`PoolLock::Busy`] for as long as it lives.
#[derive(Debug)]
pub(crate) struct PoolGuard<'a> {
    state: &'a RefCell<ExchangeState>,
    pool_id: PoolId,
}

impl<'a> PoolGuard<'a> {
    /// Marks `pool_id` busy.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ReentrancyDetected`] if the pool is already busy.
    pub(crate) fn acquire(state: &'a RefCell<ExchangeState>, pool_id: PoolId) -> Result<Self> {
        let mut st = state.borrow_mut();
        let lock = st.locks.entry(pool_id).or_default();
        if *lock == PoolLock::Busy {
            tracing::warn!("rejected nested entry into busy pool {}", pool_id);
            return Err(AmmError::ReentrancyDetected);
        }
        *lock = PoolLock::Busy;
        Ok(Self { state, pool_id })
    }
}

impl Drop for PoolGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut st) = self.state.try_borrow_mut() {
            st.locks.remove(&self.pool_id);
        }
    }
}
