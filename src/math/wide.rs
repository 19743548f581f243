//! 256-bit intermediates for products of `u128` quantities.
//!
//! Reserves and amounts are `u128`, so `a × b` routinely exceeds 128 bits
//! (two 18-decimal reserves of a few hundred whole units already do).
//! Every `a × b / c` in the engine goes through [`mul_div`], which keeps
//! the product exact and fails only when the *quotient* does not fit.

#![allow(clippy::all, missing_docs)]

use uint::construct_uint;

use crate::domain::Rounding;
use crate::error::AmmError;

construct_uint! {
    /// Unsigned 256-bit integer for intermediate products.
    pub struct U256(4);
}

/// Narrows a 256-bit value back to `u128`.
fn narrow(value: U256, context: &'static str) -> crate::error::Result<u128> {
    if value > U256::from(u128::MAX) {
        return Err(AmmError::Overflow(context));
    }
    Ok(value.low_u128())
}

/// Exact `a × b` in 256 bits.
#[must_use]
pub fn wide_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Computes `a × b / denominator` with a 256-bit intermediate product.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds `u128`.
///
/// # Examples
///
/// ```
/// use hydra_exchange::domain::Rounding;
/// use hydra_exchange::math::mul_div;
///
/// assert_eq!(mul_div(u128::MAX, 4, 8, Rounding::Down), Ok(u128::MAX / 2));
/// assert_eq!(mul_div(10, 1, 3, Rounding::Up), Ok(4));
/// ```
pub fn mul_div(
    a: u128,
    b: u128,
    denominator: u128,
    rounding: Rounding,
) -> crate::error::Result<u128> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = wide_mul(a, b);
    let d = U256::from(denominator);
    let mut quotient = product / d;
    if rounding.is_up() && !(product % d).is_zero() {
        quotient = quotient + U256::one();
    }
    narrow(quotient, "mul_div quotient exceeds u128")
}

/// `floor(sqrt(a × b))`, the geometric mean of two amounts.
///
/// The square root of a 256-bit value always fits 128 bits, so this
/// cannot fail.
#[must_use]
pub fn sqrt_product(a: u128, b: u128) -> u128 {
    wide_mul(a, b).integer_sqrt().low_u128()
}
