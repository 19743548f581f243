//! Lookup from asset address to the ledger that holds it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::domain::TokenAddress;
use crate::error::{AmmError, Result};
use crate::traits::AssetLedger;

/// The asset ledgers an exchange can move value through.
#[derive(Clone, Default)]
pub struct AssetBook {
    ledgers: HashMap<TokenAddress, Arc<dyn AssetLedger>>,
}

impl AssetBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `ledger` for `asset`, replacing any previous registration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroAddress`] for the null asset.
    pub fn register(&mut self, asset: TokenAddress, ledger: Arc<dyn AssetLedger>) -> Result<()> {
        if asset.is_zero() {
            return Err(AmmError::ZeroAddress);
        }
        self.ledgers.insert(asset, ledger);
        Ok(())
    }

    /// The ledger for `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnknownAsset`] if none is registered.
    pub fn ledger(&self, asset: &TokenAddress) -> Result<Arc<dyn AssetLedger>> {
        self.ledgers
            .get(asset)
            .cloned()
            .ok_or(AmmError::UnknownAsset(*asset))
    }

    /// Whether a ledger is registered for `asset`.
    #[must_use]
    pub fn contains(&self, asset: &TokenAddress) -> bool {
        self.ledgers.contains_key(asset)
    }
}

impl fmt::Debug for AssetBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetBook")
            .field("assets", &self.ledgers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::assets::MemoryLedger;

    #[test]
    fn lookup_registered_and_unknown() {
        let asset = TokenAddress::from_bytes([3; 32]);
        let mut book = AssetBook::new();
        let Ok(()) = book.register(asset, Arc::new(MemoryLedger::new())) else {
            panic!("expected Ok");
        };
        assert!(book.contains(&asset));
        assert!(book.ledger(&asset).is_ok());

        let other = TokenAddress::from_bytes([4; 32]);
        assert!(matches!(book.ledger(&other), Err(AmmError::UnknownAsset(a)) if a == other));
    }

    #[test]
    fn null_asset_rejected() {
        let mut book = AssetBook::new();
        assert_eq!(
            book.register(TokenAddress::zero(), Arc::new(MemoryLedger::new())),
            Err(AmmError::ZeroAddress)
        );
    }
}
