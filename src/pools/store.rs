//! Keyed storage for every pool the exchange knows about.

use std::collections::HashMap;

use crate::domain::{Amount, PoolId, TokenAddress, TokenPair};
use crate::error::{AmmError, Result};

use super::PoolRecord;

/// All pools, keyed by [`PoolId`], plus their creation order.
///
/// At most one pool exists per canonical pair: asking for `(x, y)` and
/// `(y, x)` reaches the same record.
#[derive(Debug, Clone, Default)]
pub struct PoolStore {
    pools: HashMap<PoolId, PoolRecord>,
    order: Vec<PoolId>,
}

impl PoolStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pool for `pair`, creating an empty one if needed.
    ///
    /// The flag is `true` when this call created the pool.
    pub fn get_or_create(&mut self, pair: &TokenPair) -> (&mut PoolRecord, bool) {
        let pool_id = pair.pool_id();
        let created = !self.pools.contains_key(&pool_id);
        if created {
            self.order.push(pool_id);
        }
        let record = self
            .pools
            .entry(pool_id)
            .or_insert_with(|| PoolRecord::new(*pair));
        (record, created)
    }

    /// The pool with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if no such pool exists.
    pub fn get(&self, pool_id: &PoolId) -> Result<&PoolRecord> {
        self.pools.get(pool_id).ok_or(AmmError::PoolNotFound)
    }

    /// Mutable access to the pool with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if no such pool exists.
    pub fn get_mut(&mut self, pool_id: &PoolId) -> Result<&mut PoolRecord> {
        self.pools.get_mut(pool_id).ok_or(AmmError::PoolNotFound)
    }

    /// The pool for `pair`, if it exists.
    #[must_use]
    pub fn find(&self, pair: &TokenPair) -> Option<&PoolRecord> {
        self.pools.get(&pair.pool_id())
    }

    /// Reserves of the `(x, y)` pool in caller order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] / [`AmmError::ZeroAddress`] if the
    ///   pair is malformed.
    /// - [`AmmError::PoolNotFound`] if no pool exists.
    pub fn get_reserves(&self, x: TokenAddress, y: TokenAddress) -> Result<(Amount, Amount)> {
        let pair = TokenPair::new(x, y)?;
        self.get(&pair.pool_id())?.reserves_for(&x)
    }

    /// Whether a pool with the given id exists.
    #[must_use]
    pub fn contains(&self, pool_id: &PoolId) -> bool {
        self.pools.contains_key(pool_id)
    }

    /// Pools in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &PoolRecord> {
        self.order.iter().filter_map(|id| self.pools.get(id))
    }

    /// Number of pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store holds no pools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
