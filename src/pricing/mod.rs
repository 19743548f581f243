//! Pure pricing and share math.
//!
//! Nothing in this module reads or writes engine state: every function
//! takes reserves and totals as arguments and returns a quote. The
//! controllers in [`exchange`](crate::exchange) call these functions
//! between validation and the external transfers.
//!
//! All divisions round down, except the input required for an exact
//! output, which rounds up. Rounding therefore never favours the caller.

mod constant_product;
mod shares;

pub use constant_product::{quote, quote_input, quote_output, quote_price};
pub use shares::{initial_shares, plan_deposit, proportional_shares, redemption_amounts};

#[cfg(test)]
mod proptest_properties;
