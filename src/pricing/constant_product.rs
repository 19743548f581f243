//! Constant-product quotes (`x × y = k`) with fee retention.
//!
//! # Exact-in (Token In → Token Out)
//!
//! 1. `net = floor(amount_in × (10 000 − fee_bps) / 10 000)`
//! 2. `amount_out = floor(net × reserve_out / (reserve_in + net))`
//!
//! The whole `amount_in` is later added to `reserve_in`; the part that did
//! not reach the curve is the retained fee. Because of that and the floor
//! in step 2, `(reserve_in + amount_in) × (reserve_out − amount_out)` is
//! never smaller than `reserve_in × reserve_out`.

use crate::domain::{Amount, FeeTier, Price, Rounding};
use crate::error::{AmmError, Result};
use crate::math::{mul_div, CheckedArithmetic};

/// Output paid for selling exactly `amount_in`.
///
/// # Errors
///
/// - [`AmmError::ZeroInput`] if `amount_in` is zero.
/// - [`AmmError::EmptyReserve`] if either reserve is zero.
/// - [`AmmError::Overflow`] if `reserve_in + net` exceeds `u128`.
///
/// # Examples
///
/// ```
/// use hydra_exchange::domain::{Amount, FeeTier};
/// use hydra_exchange::pricing::quote_output;
///
/// // net = floor(10 × 997 / 1000) = 9; out = floor(9 × 1000 / 1009) = 8
/// let out = quote_output(
///     Amount::new(10),
///     Amount::new(1_000),
///     Amount::new(1_000),
///     FeeTier::TIER_0_30_PERCENT,
/// );
/// assert_eq!(out, Ok(Amount::new(8)));
/// ```
pub fn quote_output(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount> {
    if amount_in.is_zero() {
        return Err(AmmError::ZeroInput);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::EmptyReserve);
    }

    let net = fee.net_input(amount_in)?;
    let denominator = reserve_in.safe_add(&net)?;

    reserve_out.safe_mul_div(net.get(), denominator.get(), Rounding::Down)
}

/// Input required to receive exactly `amount_out`, rounded up.
///
/// The returned input always quotes (via [`quote_output`]) to at least
/// `amount_out`.
///
/// # Errors
///
/// - [`AmmError::InsufficientOutputAmount`] if `amount_out` is zero.
/// - [`AmmError::EmptyReserve`] if either reserve is zero.
/// - [`AmmError::InsufficientLiquidity`] if `amount_out ≥ reserve_out`.
/// - [`AmmError::InvalidFee`] if the tier leaves nothing for the curve.
/// - [`AmmError::Overflow`] if the required input exceeds `u128`.
pub fn quote_input(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount> {
    if amount_out.is_zero() {
        return Err(AmmError::InsufficientOutputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::EmptyReserve);
    }
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    let remaining = reserve_out.safe_sub(&amount_out)?;
    let net_needed = reserve_in.safe_mul_div(amount_out.get(), remaining.get(), Rounding::Up)?;

    let complement = fee
        .basis_points()
        .complement()
        .filter(|c| c.get() > 0)
        .ok_or(AmmError::InvalidFee("fee leaves no input for the curve"))?;

    mul_div(
        net_needed.get(),
        10_000,
        u128::from(complement.get()),
        Rounding::Up,
    )
    .map(Amount::new)
}

/// Spot price of the input asset in units of the output asset,
/// `reserve_out × 10^18 / reserve_in`.
///
/// # Errors
///
/// - [`AmmError::EmptyReserve`] if `reserve_in` is zero.
/// - [`AmmError::Overflow`] if the price exceeds `u128`.
pub fn quote_price(reserve_in: Amount, reserve_out: Amount) -> Result<Price> {
    if reserve_in.is_zero() {
        return Err(AmmError::EmptyReserve);
    }
    mul_div(reserve_out.get(), Price::SCALE, reserve_in.get(), Rounding::Down).map(Price::from_raw)
}

/// Amount of the other asset worth `amount_a` at the current reserve
/// ratio, `floor(amount_a × reserve_b / reserve_a)`. No fee is applied.
///
/// # Errors
///
/// - [`AmmError::InsufficientInputAmount`] if `amount_a` is zero.
/// - [`AmmError::EmptyReserve`] if either reserve is zero.
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
    if amount_a.is_zero() {
        return Err(AmmError::InsufficientInputAmount);
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::EmptyReserve);
    }
    amount_a.safe_mul_div(reserve_b.get(), reserve_a.get(), Rounding::Down)
}
