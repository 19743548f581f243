//! Canonical, order-independent asset pairs.

use serde::{Deserialize, Serialize};

use super::{PoolId, TokenAddress};
use crate::error::AmmError;

/// A pair of distinct, non-null assets in canonical order.
///
/// The canonical ordering guarantees `token0 < token1`, so `(A, B)` and
/// `(B, A)` build the same pair and resolve to the same [`PoolId`].
///
/// # Examples
///
/// ```
/// use hydra_exchange::domain::{TokenAddress, TokenPair};
///
/// let usdc = TokenAddress::from_bytes([1u8; 32]);
/// let weth = TokenAddress::from_bytes([2u8; 32]);
///
/// let pair = TokenPair::new(weth, usdc).expect("distinct assets");
/// assert_eq!(pair.token0(), usdc);
/// assert_eq!(pair.token1(), weth);
/// assert_eq!(pair, TokenPair::new(usdc, weth).expect("distinct assets"));
/// assert_eq!(pair.pool_id(), TokenPair::new(usdc, weth).expect("ok").pool_id());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair {
    token0: TokenAddress,
    token1: TokenAddress,
}

impl TokenPair {
    /// Canonicalizes two asset identifiers.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if both identifiers are equal.
    /// - [`AmmError::ZeroAddress`] if either identifier is the null asset.
    pub fn new(x: TokenAddress, y: TokenAddress) -> Result<Self, AmmError> {
        if x == y {
            return Err(AmmError::IdenticalAssets);
        }
        let (token0, token1) = if x < y { (x, y) } else { (y, x) };
        // token0 is the smaller one, so a null asset always lands there.
        if token0.is_zero() {
            return Err(AmmError::ZeroAddress);
        }
        Ok(Self { token0, token1 })
    }

    /// Returns the lower asset identifier.
    #[must_use]
    pub const fn token0(&self) -> TokenAddress {
        self.token0
    }

    /// Returns the higher asset identifier.
    #[must_use]
    pub const fn token1(&self) -> TokenAddress {
        self.token1
    }

    /// Returns the pool id for this pair.
    #[must_use]
    pub fn pool_id(&self) -> PoolId {
        PoolId::derive(&self.token0, &self.token1)
    }

    /// Returns `true` if `token` is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &TokenAddress) -> bool {
        self.token0 == *token || self.token1 == *token
    }

    /// Returns `true` when a caller naming `first` first is using the
    /// reverse of canonical order, i.e. `first == token1`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if `first` is not in the pair.
    pub fn is_flipped(&self, first: &TokenAddress) -> Result<bool, AmmError> {
        if *first == self.token0 {
            Ok(false)
        } else if *first == self.token1 {
            Ok(true)
        } else {
            Err(AmmError::PoolNotFound)
        }
    }

    /// Reorders a canonical `(slot0, slot1)` tuple into the caller's order.
    ///
    /// # Errors
    ///
    /// Same as [`is_flipped`](Self::is_flipped).
    pub fn orient<T>(&self, first: &TokenAddress, slots: (T, T)) -> Result<(T, T), AmmError> {
        let (a, b) = slots;
        Ok(if self.is_flipped(first)? { (b, a) } else { (a, b) })
    }
}
