//! Single-hop swaps.

use crate::domain::{AccountId, Amount, SwapPath, SwapResult, SwapSpec, Timestamp, TokenAddress};
use crate::error::{AmmError, Result};
use crate::events::ExchangeEvent;
use crate::math::CheckedArithmetic;
use crate::pricing;

use super::guard::PoolGuard;
use super::Exchange;

impl Exchange {
    /// Sells exactly `amount_in` of `path[0]` for at least `amount_out_min`
    /// of `path[1]`, paid to `recipient`. Returns the amount received.
    ///
    /// # Errors
    ///
    /// See [`swap`](Self::swap). A zero output is always
    /// [`AmmError::InsufficientOutputAmount`].
    pub fn swap_exact_in(
        &self,
        caller: AccountId,
        amount_in: Amount,
        amount_out_min: Amount,
        path: &[TokenAddress],
        recipient: AccountId,
        deadline: Timestamp,
    ) -> Result<Amount> {
        let spec = SwapSpec::exact_in(amount_in, amount_out_min);
        self.swap(caller, spec, path, recipient, deadline)
            .map(|result| result.amount_out)
    }

    /// Buys exactly `amount_out` of `path[1]` for at most `amount_in_max`
    /// of `path[0]`. Returns the amount paid.
    ///
    /// # Errors
    ///
    /// See [`swap`](Self::swap).
    pub fn swap_exact_out(
        &self,
        caller: AccountId,
        amount_out: Amount,
        amount_in_max: Amount,
        path: &[TokenAddress],
        recipient: AccountId,
        deadline: Timestamp,
    ) -> Result<Amount> {
        let spec = SwapSpec::exact_out(amount_out, amount_in_max);
        self.swap(caller, spec, path, recipient, deadline)
            .map(|result| result.amount_in)
    }

    /// Swaps along a two-asset `path` as described by `spec`.
    ///
    /// The input is pulled from `caller`, the reserves are updated on the
    /// pool's canonical slots, and only then is the output paid to
    /// `recipient`. If the payout fails the reserves are restored and the
    /// input is refunded.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::InvalidPathLength`] unless `path` has two entries.
    /// - [`AmmError::IdenticalAssets`] / [`AmmError::ZeroAddress`] for a
    ///   malformed path, [`AmmError::ZeroRecipient`] for the null recipient.
    /// - [`AmmError::UnknownAsset`] if an asset has no registered ledger.
    /// - [`AmmError::PoolNotFound`] if the pool does not exist.
    /// - [`AmmError::ReentrancyDetected`] if the pool is mid-operation.
    /// - [`AmmError::ZeroInput`], [`AmmError::EmptyReserve`] and
    ///   [`AmmError::InsufficientLiquidity`] from pricing.
    /// - [`AmmError::InsufficientOutputAmount`] if the output is zero or
    ///   below the minimum.
    /// - [`AmmError::InsufficientInputAmount`] if the required input
    ///   exceeds the maximum.
    /// - [`AmmError::AssetTransferFailed`] if a transfer fails.
    pub fn swap(
        &self,
        caller: AccountId,
        spec: SwapSpec,
        path: &[TokenAddress],
        recipient: AccountId,
        deadline: Timestamp,
    ) -> Result<SwapResult> {
        let op = self.state.lock();
        let state = &*op;

        self.check_deadline(deadline)?;
        let path = SwapPath::new(path)?;
        let pair = path.pair()?;
        if recipient.is_zero() {
            return Err(AmmError::ZeroRecipient);
        }
        let (token_in, token_out) = (path.token_in(), path.token_out());
        let ledger_in = self.ledger(&token_in)?;
        let ledger_out = self.ledger(&token_out)?;

        let pool_id = pair.pool_id();
        if !state.borrow().pools.contains(&pool_id) {
            return Err(AmmError::PoolNotFound);
        }
        let _guard = PoolGuard::acquire(state, pool_id)?;

        let (reserve_in, reserve_out) = state.borrow().pools.get(&pool_id)?.reserves_for(&token_in)?;
        let canonical = pair.orient(&token_in, (reserve_in, reserve_out))?;

        let fee = self.fee_tier();
        let (amount_in, amount_out) = match spec {
            SwapSpec::ExactIn { amount_in, min_out } => {
                let out = pricing::quote_output(amount_in, reserve_in, reserve_out, fee)?;
                if out.is_zero() || out < min_out {
                    tracing::debug!("swap output {} below minimum {}", out, min_out);
                    return Err(AmmError::InsufficientOutputAmount);
                }
                (amount_in, out)
            }
            SwapSpec::ExactOut { amount_out, max_in } => {
                let needed = pricing::quote_input(amount_out, reserve_in, reserve_out, fee)?;
                if needed > max_in {
                    tracing::debug!("swap input {} above maximum {}", needed, max_in);
                    return Err(AmmError::InsufficientInputAmount);
                }
                (needed, amount_out)
            }
        };
        let retained = fee.retained(amount_in)?;
        let new_reserves = pair.orient(
            &token_in,
            (reserve_in.safe_add(&amount_in)?, reserve_out.safe_sub(&amount_out)?),
        )?;

        self.ensure_custody_covers(token_out, ledger_out.as_ref(), amount_out)?;
        self.pull(token_in, ledger_in.as_ref(), caller, amount_in)?;

        state.borrow_mut().pools.get_mut(&pool_id)?.set_reserves(new_reserves);

        if let Err(e) = self.pay(token_out, ledger_out.as_ref(), recipient, amount_out) {
            if let Ok(pool) = state.borrow_mut().pools.get_mut(&pool_id) {
                pool.set_reserves(canonical);
            }
            self.refund(token_in, ledger_in.as_ref(), caller, amount_in);
            return Err(e);
        }

        tracing::info!(
            "swap in pool {}: {} {} for {} {} to {}",
            pool_id,
            amount_in,
            token_in,
            amount_out,
            token_out,
            recipient
        );
        state.borrow_mut().events.push(ExchangeEvent::Swap {
            token_in,
            token_out,
            amount_in,
            amount_out,
        });

        Ok(SwapResult {
            amount_in,
            amount_out,
            fee: retained,
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::math::wide_mul;
    use crate::traits::AssetLedger;

    fn product(f: &Fixture) -> crate::math::U256 {
        let Ok((a, b)) = f.exchange.get_reserves(token(1), token(2)) else {
            panic!("expected Ok");
        };
        wide_mul(a.get(), b.get())
    }

    #[test]
    fn exact_in_matches_quote() {
        let f = fixture();
        seed(&f, token(1), token(2), 1_000, 1_000);
        let Ok(out) = f.exchange.swap_exact_in(
            bob(),
            Amount::new(10),
            Amount::new(8),
            &[token(1), token(2)],
            bob(),
            later(),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::new(8));
        assert_eq!(
            f.exchange.get_reserves(token(2), token(1)),
            Ok((Amount::new(992), Amount::new(1_010)))
        );
        assert_eq!(
            f.exchange.events().last(),
            Some(&ExchangeEvent::Swap {
                token_in: token(1),
                token_out: token(2),
                amount_in: Amount::new(10),
                amount_out: Amount::new(8),
            })
        );
    }

    #[test]
    fn reverse_direction_uses_canonical_slots() {
        let f = fixture();
        seed(&f, token(1), token(2), 1_000, 2_000);
        let before = product(&f);
        let Ok(out) = f.exchange.swap_exact_in(
            bob(),
            Amount::new(100),
            Amount::ZERO,
            &[token(2), token(1)],
            bob(),
            later(),
        ) else {
            panic!("expected Ok");
        };
        // net 99, out = floor(99 * 1000 / 2099) = 47
        assert_eq!(out, Amount::new(47));
        assert_eq!(
            f.exchange.get_reserves(token(1), token(2)),
            Ok((Amount::new(953), Amount::new(2_100)))
        );
        assert!(product(&f) >= before);
    }

    #[test]
    fn exact_out_pays_rounded_up_input() {
        let f = fixture();
        seed(&f, token(1), token(2), 1_000, 1_000);
        let Ok(result) = f.exchange.swap(
            bob(),
            SwapSpec::exact_out(Amount::new(8), Amount::new(10)),
            &[token(1), token(2)],
            bob(),
            later(),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(result.amount_in, Amount::new(10));
        assert_eq!(result.amount_out, Amount::new(8));
        assert_eq!(result.fee, Amount::new(1));

        assert_eq!(
            f.exchange.swap_exact_out(
                bob(),
                Amount::new(8),
                Amount::new(9),
                &[token(1), token(2)],
                bob(),
                later(),
            ),
            Err(AmmError::InsufficientInputAmount)
        );
    }

    #[test]
    fn slippage_and_dust() {
        let f = fixture();
        seed(&f, token(1), token(2), 1_000, 1_000);
        let path = [token(1), token(2)];
        assert_eq!(
            f.exchange
                .swap_exact_in(bob(), Amount::new(10), Amount::new(9), &path, bob(), later()),
            Err(AmmError::InsufficientOutputAmount)
        );
        // net = floor(1 * 0.997) = 0
        assert_eq!(
            f.exchange
                .swap_exact_in(bob(), Amount::new(1), Amount::ZERO, &path, bob(), later()),
            Err(AmmError::InsufficientOutputAmount)
        );
        assert_eq!(
            f.exchange
                .swap_exact_in(bob(), Amount::ZERO, Amount::ZERO, &path, bob(), later()),
            Err(AmmError::ZeroInput)
        );
        assert_eq!(
            f.exchange.swap_exact_out(
                bob(),
                Amount::new(1_000),
                Amount::MAX,
                &path,
                bob(),
                later()
            ),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(f.exchange.events().len(), 2);
    }

    #[test]
    fn path_and_pool_errors() {
        let f = fixture();
        let d = later();
        assert_eq!(
            f.exchange
                .swap_exact_in(bob(), Amount::new(1), Amount::ZERO, &[token(1)], bob(), d),
            Err(AmmError::InvalidPathLength)
        );
        assert_eq!(
            f.exchange.swap_exact_in(
                bob(),
                Amount::new(1),
                Amount::ZERO,
                &[token(1), token(2), token(3)],
                bob(),
                d
            ),
            Err(AmmError::InvalidPathLength)
        );
        assert_eq!(
            f.exchange
                .swap_exact_in(bob(), Amount::new(1), Amount::ZERO, &[token(1), token(2)], bob(), d),
            Err(AmmError::PoolNotFound)
        );
        assert_eq!(
            f.exchange.swap_exact_in(
                bob(),
                Amount::new(1),
                Amount::ZERO,
                &[token(1), token(2)],
                AccountId::zero(),
                d
            ),
            Err(AmmError::ZeroRecipient)
        );
        f.clock.advance(61);
        assert_eq!(
            f.exchange
                .swap_exact_in(bob(), Amount::new(1), Amount::ZERO, &[token(1), token(2)], bob(), d),
            Err(AmmError::Expired)
        );
    }

    #[test]
    fn failed_payout_refunds_input() {
        let f = fixture();
        seed(&f, token(1), token(2), 1_000, 1_000);
        let bob_before = f.ledger(token(1)).balance_of(bob());
        f.ledger(token(2)).fail_transfers(true);

        assert_eq!(
            f.exchange.swap_exact_in(
                bob(),
                Amount::new(100),
                Amount::ZERO,
                &[token(1), token(2)],
                bob(),
                later()
            ),
            Err(AmmError::AssetTransferFailed(token(2)))
        );
        assert_eq!(f.ledger(token(1)).balance_of(bob()), bob_before);
        assert_eq!(
            f.exchange.get_reserves(token(1), token(2)),
            Ok((Amount::new(1_000), Amount::new(1_000)))
        );
        assert_eq!(f.exchange.events().len(), 2);
    }

    #[test]
    fn failed_pull_changes_nothing() {
        let f = fixture();
        seed(&f, token(1), token(2), 1_000, 1_000);
        f.ledger(token(1)).approve(bob(), custody(), Amount::new(5));
        assert_eq!(
            f.exchange.swap_exact_in(
                bob(),
                Amount::new(100),
                Amount::ZERO,
                &[token(1), token(2)],
                bob(),
                later()
            ),
            Err(AmmError::AssetTransferFailed(token(1)))
        );
        assert_eq!(
            f.exchange.get_reserves(token(1), token(2)),
            Ok((Amount::new(1_000), Amount::new(1_000)))
        );
    }
}
