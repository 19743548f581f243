//! Configuration for an exchange instance.

use serde::Deserialize;

use crate::domain::{AccountId, BasisPoints, FeeTier};
use crate::error::AmmError;

/// Immutable parameters of an [`Exchange`](crate::exchange::Exchange).
///
/// # Validation
///
/// - The custody account must not be the null account.
/// - The fee tier must be strictly below 100%.
///
/// # Examples
///
/// ```
/// use hydra_exchange::config::ExchangeConfig;
/// use hydra_exchange::domain::{AccountId, FeeTier};
///
/// let custody = AccountId::from_bytes([0xee; 32]);
/// let Ok(cfg) = ExchangeConfig::new(custody, FeeTier::default()) else {
///     panic!("valid config");
/// };
/// assert_eq!(cfg.fee_tier(), FeeTier::TIER_0_30_PERCENT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeConfig {
    custody: AccountId,
    fee_tier: FeeTier,
}

/// On-disk shape: the custody account as 64 hex digits (an optional `0x`
/// prefix is accepted) and the fee in basis points.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawExchangeConfig {
    custody: String,
    #[serde(default = "default_fee_bps")]
    fee_bps: u32,
}

fn default_fee_bps() -> u32 {
    FeeTier::default().basis_points().get()
}

impl ExchangeConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if `custody` is the null account.
    /// - [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn new(custody: AccountId, fee_tier: FeeTier) -> Result<Self, AmmError> {
        let config = Self { custody, fee_tier };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON document such as
    /// `{"custody": "0x…", "fee_bps": 30}`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ConfigParse`] if the document is malformed or the
    ///   custody account is not 32 hex-encoded bytes.
    /// - Any error from [`new`](Self::new).
    pub fn from_json(json: &str) -> Result<Self, AmmError> {
        let raw: RawExchangeConfig =
            serde_json::from_str(json).map_err(|e| AmmError::ConfigParse(e.to_string()))?;

        let digits = raw.custody.strip_prefix("0x").unwrap_or(&raw.custody);
        let bytes = hex::decode(digits).map_err(|e| AmmError::ConfigParse(e.to_string()))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| AmmError::ConfigParse("custody must be 32 bytes".to_owned()))?;

        Self::new(
            AccountId::from_bytes(bytes),
            FeeTier::new(BasisPoints::new(raw.fee_bps)),
        )
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.custody.is_zero() {
            return Err(AmmError::InvalidConfiguration("custody account is null"));
        }
        self.fee_tier.validate()
    }

    /// The account that holds every pool's assets.
    #[must_use]
    pub const fn custody(&self) -> AccountId {
        self.custody
    }

    /// The swap fee.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }
}
