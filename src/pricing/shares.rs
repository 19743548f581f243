//! Share issuance and redemption math.

use crate::domain::{Amount, Deposit, Rounding, Shares};
use crate::error::{AmmError, Result};
use crate::math::{sqrt_product, CheckedArithmetic};

/// Shares minted by the first deposit into an empty pool:
/// `floor(sqrt(amount_x × amount_y))`.
///
/// The geometric mean makes a share's value independent of the ratio the
/// first provider happened to choose.
///
/// # Errors
///
/// Returns [`AmmError::InsufficientLiquidityMinted`] if the result is zero.
///
/// # Examples
///
/// ```
/// use hydra_exchange::domain::{Amount, Shares};
/// use hydra_exchange::pricing::initial_shares;
///
/// assert_eq!(initial_shares(Amount::new(100), Amount::new(100)), Ok(Shares::new(100)));
/// ```
pub fn initial_shares(amount_x: Amount, amount_y: Amount) -> Result<Shares> {
    let minted = sqrt_product(amount_x.get(), amount_y.get());
    if minted == 0 {
        return Err(AmmError::InsufficientLiquidityMinted);
    }
    Ok(Shares::new(minted))
}

/// Shares minted by a deposit into a pool that already has `total` shares:
/// `min(amount_x × total / reserve_x, amount_y × total / reserve_y)`.
///
/// # Errors
///
/// - [`AmmError::EmptyReserve`] if either reserve is zero.
/// - [`AmmError::InsufficientLiquidityMinted`] if the result is zero.
pub fn proportional_shares(
    amounts: (Amount, Amount),
    reserves: (Amount, Amount),
    total: Shares,
) -> Result<Shares> {
    let (amount_x, amount_y) = amounts;
    let (reserve_x, reserve_y) = reserves;
    if reserve_x.is_zero() || reserve_y.is_zero() {
        return Err(AmmError::EmptyReserve);
    }

    let by_x = total.safe_mul_div(amount_x.get(), reserve_x.get(), Rounding::Down)?;
    let by_y = total.safe_mul_div(amount_y.get(), reserve_y.get(), Rounding::Down)?;
    let minted = by_x.min(by_y);

    if minted.is_zero() {
        return Err(AmmError::InsufficientLiquidityMinted);
    }
    Ok(minted)
}

/// Sizes a deposit against the current pool state.
///
/// With no shares outstanding the desired amounts are taken as-is. Otherwise
/// the deposit is trimmed to the current reserve ratio: first by keeping
/// all of `x` and computing the matching `y`, and if that asks for more `y`
/// than desired, by keeping all of `y` and computing the matching `x`.
///
/// Both branches return the same [`Deposit`] shape. All pairs are in the
/// caller's `(x, y)` order.
///
/// # Errors
///
/// - [`AmmError::InsufficientBAmount`] if the matching `y` is below `min.1`.
/// - [`AmmError::InsufficientAAmount`] if the matching `x` exceeds
///   `desired.0` or is below `min.0`.
/// - [`AmmError::InsufficientLiquidityMinted`] if no share would be minted.
/// - [`AmmError::EmptyReserve`] if shares exist against a zero reserve.
pub fn plan_deposit(
    desired: (Amount, Amount),
    min: (Amount, Amount),
    reserves: (Amount, Amount),
    total: Shares,
) -> Result<Deposit> {
    let (desired_x, desired_y) = desired;
    let (min_x, min_y) = min;
    let (reserve_x, reserve_y) = reserves;

    if total.is_zero() {
        let shares = initial_shares(desired_x, desired_y)?;
        return Ok(Deposit {
            amount_x: desired_x,
            amount_y: desired_y,
            shares,
        });
    }

    if reserve_x.is_zero() || reserve_y.is_zero() {
        return Err(AmmError::EmptyReserve);
    }

    let y_optimal = desired_x.safe_mul_div(reserve_y.get(), reserve_x.get(), Rounding::Down)?;
    let (amount_x, amount_y) = if y_optimal <= desired_y {
        if y_optimal < min_y {
            return Err(AmmError::InsufficientBAmount);
        }
        (desired_x, y_optimal)
    } else {
        let x_optimal =
            desired_y.safe_mul_div(reserve_x.get(), reserve_y.get(), Rounding::Down)?;
        if x_optimal > desired_x || x_optimal < min_x {
            return Err(AmmError::InsufficientAAmount);
        }
        (x_optimal, desired_y)
    };

    let shares = proportional_shares((amount_x, amount_y), reserves, total)?;
    Ok(Deposit {
        amount_x,
        amount_y,
        shares,
    })
}

/// Amounts paid out for burning `shares` out of `total`:
/// `floor(shares × reserve / total)` per side.
///
/// # Errors
///
/// - [`AmmError::InsufficientShares`] if `shares > total`.
/// - [`AmmError::DivisionByZero`] if `total` is zero.
pub fn redemption_amounts(
    shares: Shares,
    reserves: (Amount, Amount),
    total: Shares,
) -> Result<(Amount, Amount)> {
    if shares > total {
        return Err(AmmError::InsufficientShares);
    }
    let (reserve_x, reserve_y) = reserves;
    let amount_x = reserve_x.safe_mul_div(shares.get(), total.get(), Rounding::Down)?;
    let amount_y = reserve_y.safe_mul_div(shares.get(), total.get(), Rounding::Down)?;
    Ok((amount_x, amount_y))
}
