//! Validated single-hop swap paths.

use serde::{Deserialize, Serialize};

use super::{TokenAddress, TokenPair};
use crate::error::AmmError;

/// A single-hop route: sell `token_in`, buy `token_out`.
///
/// Built from a caller-supplied slice, which must name exactly two assets.
/// Multi-hop routing is not supported.
///
/// # Examples
///
/// ```
/// use hydra_exchange::domain::{SwapPath, TokenAddress};
///
/// let a = TokenAddress::from_bytes([1u8; 32]);
/// let b = TokenAddress::from_bytes([2u8; 32]);
/// let c = TokenAddress::from_bytes([3u8; 32]);
///
/// assert!(SwapPath::new(&[a, b]).is_ok());
/// assert!(SwapPath::new(&[a, b, c]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapPath {
    token_in: TokenAddress,
    token_out: TokenAddress,
}

impl SwapPath {
    /// Validates a path slice.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPathLength`] unless `path` has exactly two entries.
    pub fn new(path: &[TokenAddress]) -> Result<Self, AmmError> {
        match path {
            [token_in, token_out] => Ok(Self {
                token_in: *token_in,
                token_out: *token_out,
            }),
            _ => Err(AmmError::InvalidPathLength),
        }
    }

    /// The asset being sold.
    #[must_use]
    pub const fn token_in(&self) -> TokenAddress {
        self.token_in
    }

    /// The asset being bought.
    #[must_use]
    pub const fn token_out(&self) -> TokenAddress {
        self.token_out
    }

    /// Canonicalizes the two hops into a pair.
    ///
    /// # Errors
    ///
    /// Same as [`TokenPair::new`].
    pub fn pair(&self) -> Result<TokenPair, AmmError> {
        TokenPair::new(self.token_in, self.token_out)
    }
}
