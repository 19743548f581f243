//! Generic construction trait for building components from configuration.
//!
//! [`FromConfig`] gives the exchange a uniform, validating constructor.
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction. A successfully constructed value is in a valid initial
//! state. For the exchange that means:
//!
//! - The custody account is not the null account
//! - The fee tier is strictly below 100%
//!
//! # No Generic Blanket Implementation
//!
//! There is no `impl<T> FromConfig<T>` blanket. Every component-config
//! pairing is written out explicitly.

use crate::error::AmmError;

/// Validating construction from a configuration value.
///
/// # Type Parameters
///
/// - `C`: the configuration type that fully describes the component's
///   immutable parameters.
///
/// # Implementors
///
/// - `impl FromConfig<ExchangeConfig> for Exchange`
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// The configuration is taken by reference so it can be reused, for
    /// example to build several isolated exchanges in tests.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if a parameter is out of range
    ///   or inconsistent.
    /// - [`AmmError::InvalidFee`] if the fee tier is unsupported.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
