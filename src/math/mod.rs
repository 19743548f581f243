//! Arithmetic utilities for exchange calculations.
//!
//! [`CheckedArithmetic`] for overflow-safe operations on domain types and
//! 256-bit [`mul_div`] / [`sqrt_product`] for products of two `u128`
//! quantities.
//!
//! # Rounding convention
//!
//! **Always round against the caller**:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output, withdrawal, minted shares | [`Rounding::Down`](crate::domain::Rounding::Down) |
//! | Required swap input | [`Rounding::Up`](crate::domain::Rounding::Up) |

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{mul_div, sqrt_product, wide_mul, U256};
