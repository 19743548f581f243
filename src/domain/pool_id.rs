//! Deterministic pool identifiers.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::TokenAddress;

/// Domain separator mixed into every pool id.
const POOL_ID_DOMAIN: &[u8] = b"HYDRA_EXCHANGE_POOL_V1";

/// Identifier of the pool for one canonical asset pair.
///
/// `blake3(POOL_ID_DOMAIN ‖ token0 ‖ token1)` over the canonically ordered
/// pair, so both argument orders resolve to the same id. Obtain one through
/// [`TokenPair::pool_id`](super::TokenPair::pool_id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PoolId([u8; 32]);

impl PoolId {
    pub(crate) fn derive(token0: &TokenAddress, token1: &TokenAddress) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(POOL_ID_DOMAIN);
        hasher.update(token0.as_bytes());
        hasher.update(token1.as_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    /// Wraps raw bytes, e.g. an id read back from an event.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_is_deterministic() {
        let a = TokenAddress::from_bytes([1u8; 32]);
        let b = TokenAddress::from_bytes([2u8; 32]);
        assert_eq!(PoolId::derive(&a, &b), PoolId::derive(&a, &b));
    }

    #[test]
    fn derive_depends_on_slot_order() {
        // Only canonical order is ever hashed; this guards the encoding itself.
        let a = TokenAddress::from_bytes([1u8; 32]);
        let b = TokenAddress::from_bytes([2u8; 32]);
        assert_ne!(PoolId::derive(&a, &b), PoolId::derive(&b, &a));
    }

    #[test]
    fn distinct_pairs_get_distinct_ids() {
        let a = TokenAddress::from_bytes([1u8; 32]);
        let b = TokenAddress::from_bytes([2u8; 32]);
        let c = TokenAddress::from_bytes([3u8; 32]);
        assert_ne!(PoolId::derive(&a, &b), PoolId::derive(&a, &c));
    }
}
