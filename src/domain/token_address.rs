//! Chain-agnostic asset identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a fungible asset.
///
/// Wraps a 32-byte array. Identifiers are totally ordered by their bytes,
/// which is the order the engine uses to canonicalize pairs. The all-zero
/// identifier is the null asset and is rejected wherever an asset is
/// expected.
///
/// # Examples
///
/// ```
/// use hydra_exchange::domain::TokenAddress;
///
/// let usdc = TokenAddress::from_bytes([1u8; 32]);
/// assert!(!usdc.is_zero());
/// assert!(TokenAddress::zero() < usdc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenAddress([u8; 32]);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the null asset.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the null asset.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
