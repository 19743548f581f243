//! Property-based tests for the pricing functions.
//!
//! 1. **Product never shrinks**: exact-in swaps keep `x × y` non-decreasing.
//! 2. **Exact-out covers the request**: the quoted input buys at least the
//!    requested output.
//! 3. **Round trip loses value**: A→B→A returns at most the original.
//! 4. **Deposit then redeem**: a provider never gets back more than they put in.
//! 5. **Output monotonicity**: a larger input never yields a smaller output.

use proptest::prelude::*;

use crate::domain::{Amount, FeeTier, Shares};
use crate::math::wide_mul;

use super::{plan_deposit, quote_input, quote_output, redemption_amounts};

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000_000u128
}

/// Fee tiers up to 10%.
fn fee_strategy() -> impl Strategy<Value = FeeTier> {
    (0u32..=1_000u32).prop_map(|bps| FeeTier::new(crate::domain::BasisPoints::new(bps)))
}

// ---------------------------------------------------------------------------
// Property 1: Product never shrinks
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_product_non_decreasing(
        rin in reserve_strategy(),
        rout in reserve_strategy(),
        amount_in in 1u128..=1_000_000_000u128,
        fee in fee_strategy(),
    ) {
        let Ok(out) = quote_output(Amount::new(amount_in), Amount::new(rin), Amount::new(rout), fee) else {
            return Ok(());
        };
        prop_assert!(out.get() < rout);

        let before = wide_mul(rin, rout);
        let after = wide_mul(rin + amount_in, rout - out.get());
        prop_assert!(after >= before, "product shrank");
    }
}

// ---------------------------------------------------------------------------
// Property 2: Exact-out covers the request
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_quote_input_covers_output(
        rin in reserve_strategy(),
        rout in reserve_strategy(),
        fraction in 1u128..=900u128,
        fee in fee_strategy(),
    ) {
        let amount_out = (rout * fraction / 1_000).max(1);
        let Ok(needed) = quote_input(Amount::new(amount_out), Amount::new(rin), Amount::new(rout), fee) else {
            return Ok(());
        };
        let Ok(received) = quote_output(needed, Amount::new(rin), Amount::new(rout), fee) else {
            return Ok(());
        };
        prop_assert!(
            received.get() >= amount_out,
            "paid {} but received {} < {}", needed, received, amount_out
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: Round trip loses value
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_round_trip_loses_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
    ) {
        let swap_in = (ra / 1_000).max(1);

        let Ok(got_b) = quote_output(Amount::new(swap_in), Amount::new(ra), Amount::new(rb), fee) else {
            return Ok(());
        };
        if got_b.is_zero() { return Ok(()); }

        let ra_after = ra + swap_in;
        let rb_after = rb - got_b.get();
        let Ok(got_a) = quote_output(got_b, Amount::new(rb_after), Amount::new(ra_after), fee) else {
            return Ok(());
        };
        prop_assert!(got_a.get() <= swap_in);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Deposit then redeem
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_deposit_redeem_never_profits(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        total in 10_000u128..=1_000_000_000u128,
        dx in 1u128..=1_000_000u128,
        dy in 1u128..=1_000_000u128,
    ) {
        let reserves = (Amount::new(rx), Amount::new(ry));
        let Ok(plan) = plan_deposit(
            (Amount::new(dx), Amount::new(dy)),
            (Amount::ZERO, Amount::ZERO),
            reserves,
            Shares::new(total),
        ) else {
            return Ok(());
        };
        prop_assert!(plan.amount_x.get() <= dx);
        prop_assert!(plan.amount_y.get() <= dy);

        let after = (
            Amount::new(rx + plan.amount_x.get()),
            Amount::new(ry + plan.amount_y.get()),
        );
        let new_total = Shares::new(total + plan.shares.get());
        let Ok((back_x, back_y)) = redemption_amounts(plan.shares, after, new_total) else {
            return Ok(());
        };
        prop_assert!(back_x <= plan.amount_x);
        prop_assert!(back_y <= plan.amount_y);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Output monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_output_monotonic(
        rin in reserve_strategy(),
        rout in reserve_strategy(),
        small in 1u128..=1_000_000u128,
        extra in 0u128..=1_000_000u128,
    ) {
        let fee = FeeTier::TIER_0_30_PERCENT;
        let lo = quote_output(Amount::new(small), Amount::new(rin), Amount::new(rout), fee);
        let hi = quote_output(Amount::new(small + extra), Amount::new(rin), Amount::new(rout), fee);
        if let (Ok(lo), Ok(hi)) = (lo, hi) {
            prop_assert!(hi >= lo);
        }
    }
}
