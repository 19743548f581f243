//! Adding and removing liquidity.

use core::cell::RefCell;

use crate::domain::{
    AccountId, AddLiquidity, Amount, Deposit, PoolId, RemoveLiquidity, Shares, TokenPair, Withdrawal,
};
use crate::error::{AmmError, Result};
use crate::events::ExchangeEvent;
use crate::math::CheckedArithmetic;
use crate::pricing;

use super::guard::PoolGuard;
use super::{Exchange, ExchangeState};

impl Exchange {
    /// Deposits a pair of assets and mints pool shares to
    /// `params.recipient`.
    ///
    /// The first deposit into a pair creates its pool and mints
    /// `floor(sqrt(x × y))` shares. Later deposits are trimmed to the
    /// current reserve ratio (see [`pricing::plan_deposit`]) so the caller
    /// never pays more than the desired amounts.
    ///
    /// Both amounts are pulled from `caller` with `transfer_from`, using the
    /// custody account as spender, so `caller` must have approved custody
    /// on both asset ledgers. Returned amounts follow the caller's
    /// `(token_x, token_y)` order.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if the deadline has passed.
    /// - [`AmmError::IdenticalAssets`] / [`AmmError::ZeroAddress`] for a
    ///   malformed pair, [`AmmError::ZeroRecipient`] for the null recipient.
    /// - [`AmmError::UnknownAsset`] if an asset has no registered ledger.
    /// - [`AmmError::ReentrancyDetected`] if the pool is mid-operation.
    /// - [`AmmError::InsufficientAAmount`] / [`AmmError::InsufficientBAmount`]
    ///   if the ratio-adjusted amounts fall outside the caller's bounds.
    /// - [`AmmError::InsufficientLiquidityMinted`] if no share would be minted.
    /// - [`AmmError::AssetTransferFailed`] if either pull fails.
    pub fn add_liquidity(&self, caller: AccountId, params: &AddLiquidity) -> Result<Deposit> {
        let op = self.state.lock();
        let state = &*op;

        self.check_deadline(params.deadline)?;
        let pair = TokenPair::new(params.token_x, params.token_y)?;
        if params.recipient.is_zero() {
            return Err(AmmError::ZeroRecipient);
        }
        let ledger_x = self.ledger(&params.token_x)?;
        let ledger_y = self.ledger(&params.token_y)?;

        let pool_id = pair.pool_id();
        let _guard = PoolGuard::acquire(state, pool_id)?;

        let (reserves, total) = {
            let st = state.borrow();
            let reserves = match st.pools.find(&pair) {
                Some(pool) => pool.reserves_for(&params.token_x)?,
                None => (Amount::ZERO, Amount::ZERO),
            };
            (reserves, st.shares.total_shares(&pool_id))
        };

        let plan = pricing::plan_deposit(
            (params.amount_x_desired, params.amount_y_desired),
            (params.amount_x_min, params.amount_y_min),
            reserves,
            total,
        )?;
        let new_reserves = pair.orient(
            &params.token_x,
            (
                reserves.0.safe_add(&plan.amount_x)?,
                reserves.1.safe_add(&plan.amount_y)?,
            ),
        )?;
        // share supply must not overflow once the pulls have settled
        let _new_total = total.safe_add(&plan.shares)?;
        tracing::debug!(
            "deposit planned for pool {}: {} + {} for {} shares",
            pool_id,
            plan.amount_x,
            plan.amount_y,
            plan.shares
        );

        self.pull(params.token_x, ledger_x.as_ref(), caller, plan.amount_x)?;
        if let Err(e) = self.pull(params.token_y, ledger_y.as_ref(), caller, plan.amount_y) {
            self.refund(params.token_x, ledger_x.as_ref(), caller, plan.amount_x);
            return Err(e);
        }

        let mut st = state.borrow_mut();
        let st = &mut *st;
        st.shares.issue(pool_id, params.recipient, plan.shares)?;
        let (pool, created) = st.pools.get_or_create(&pair);
        pool.set_reserves(new_reserves);

        if created {
            tracing::info!("pool {} created for {} / {}", pool_id, pair.token0(), pair.token1());
            st.events.push(ExchangeEvent::PoolCreated {
                token0: pair.token0(),
                token1: pair.token1(),
                pool_id,
            });
        }
        tracing::info!(
            "liquidity added to pool {}: {} {} + {} {}, {} shares to {}",
            pool_id,
            plan.amount_x,
            params.token_x,
            plan.amount_y,
            params.token_y,
            plan.shares,
            params.recipient
        );
        st.events.push(ExchangeEvent::LiquidityChanged {
            token_a: params.token_x,
            token_b: params.token_y,
            amount_a: plan.amount_x,
            amount_b: plan.amount_y,
            share_delta: plan.shares,
            is_add: true,
        });

        Ok(plan)
    }

    /// Burns `params.shares` of `caller`'s position and pays the matching
    /// part of both reserves to `params.recipient`.
    ///
    /// Each side pays `floor(shares × reserve / total_shares)`. Shares are
    /// burned and reserves reduced before either payout, `token_x` is paid
    /// first. Returned amounts follow the caller's `(token_x, token_y)`
    /// order.
    ///
    /// If the `token_x` payout fails, the withdrawal is undone. If the
    /// `token_y` payout fails after `token_x` has settled, the settled leg
    /// stands: the shares stay burned, only the `token_y` reserve is
    /// restored, and a `LiquidityChanged` event with a zero `amount_b`
    /// records what left custody. Reserves always match what custody holds.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`], [`AmmError::IdenticalAssets`],
    ///   [`AmmError::ZeroAddress`], [`AmmError::ZeroRecipient`] and
    ///   [`AmmError::UnknownAsset`] as for
    ///   [`add_liquidity`](Self::add_liquidity).
    /// - [`AmmError::PoolNotFound`] if the pool does not exist.
    /// - [`AmmError::ReentrancyDetected`] if the pool is mid-operation.
    /// - [`AmmError::ZeroShares`] if `params.shares` is zero.
    /// - [`AmmError::InsufficientShares`] if `caller` holds fewer shares.
    /// - [`AmmError::InsufficientAAmount`] / [`AmmError::InsufficientBAmount`]
    ///   if a payout is below the caller's minimum.
    /// - [`AmmError::AssetTransferFailed`] if custody cannot pay out, see
    ///   above for what a failed second payout leaves behind.
    pub fn remove_liquidity(&self, caller: AccountId, params: &RemoveLiquidity) -> Result<Withdrawal> {
        let op = self.state.lock();
        let state = &*op;

        self.check_deadline(params.deadline)?;
        let pair = TokenPair::new(params.token_x, params.token_y)?;
        if params.recipient.is_zero() {
            return Err(AmmError::ZeroRecipient);
        }
        let ledger_x = self.ledger(&params.token_x)?;
        let ledger_y = self.ledger(&params.token_y)?;

        let pool_id = pair.pool_id();
        if !state.borrow().pools.contains(&pool_id) {
            return Err(AmmError::PoolNotFound);
        }
        let _guard = PoolGuard::acquire(state, pool_id)?;

        let (reserves, canonical, total, held) = {
            let st = state.borrow();
            let pool = st.pools.get(&pool_id)?;
            (
                pool.reserves_for(&params.token_x)?,
                pool.reserves(),
                st.shares.total_shares(&pool_id),
                st.shares.balance_of(&pool_id, &caller),
            )
        };

        if params.shares.is_zero() {
            return Err(AmmError::ZeroShares);
        }
        if held < params.shares {
            return Err(AmmError::InsufficientShares);
        }

        let (amount_x, amount_y) = pricing::redemption_amounts(params.shares, reserves, total)?;
        if amount_x < params.amount_x_min {
            return Err(AmmError::InsufficientAAmount);
        }
        if amount_y < params.amount_y_min {
            return Err(AmmError::InsufficientBAmount);
        }
        let remaining_x = reserves.0.safe_sub(&amount_x)?;
        let new_reserves = pair.orient(&params.token_x, (remaining_x, reserves.1.safe_sub(&amount_y)?))?;
        let x_only_reserves = pair.orient(&params.token_x, (remaining_x, reserves.1))?;

        self.ensure_custody_covers(params.token_x, ledger_x.as_ref(), amount_x)?;
        self.ensure_custody_covers(params.token_y, ledger_y.as_ref(), amount_y)?;

        {
            let mut st = state.borrow_mut();
            let st = &mut *st;
            st.shares.redeem(pool_id, caller, params.shares)?;
            st.pools.get_mut(&pool_id)?.set_reserves(new_reserves);
        }

        if let Err(e) = self.pay(params.token_x, ledger_x.as_ref(), params.recipient, amount_x) {
            restore_position(state, pool_id, canonical, caller, params.shares);
            return Err(e);
        }
        if let Err(e) = self.pay(params.token_y, ledger_y.as_ref(), params.recipient, amount_y) {
            tracing::error!(
                "payout of {} {} to {} already settled, {} shares stay burned and {} {} stays in pool {}",
                amount_x,
                params.token_x,
                params.recipient,
                params.shares,
                amount_y,
                params.token_y,
                pool_id
            );
            let mut st = state.borrow_mut();
            let st = &mut *st;
            if let Ok(pool) = st.pools.get_mut(&pool_id) {
                pool.set_reserves(x_only_reserves);
            }
            st.events.push(ExchangeEvent::LiquidityChanged {
                token_a: params.token_x,
                token_b: params.token_y,
                amount_a: amount_x,
                amount_b: Amount::ZERO,
                share_delta: params.shares,
                is_add: false,
            });
            return Err(e);
        }

        tracing::info!(
            "liquidity removed from pool {}: {} shares for {} {} + {} {} to {}",
            pool_id,
            params.shares,
            amount_x,
            params.token_x,
            amount_y,
            params.token_y,
            params.recipient
        );
        state.borrow_mut().events.push(ExchangeEvent::LiquidityChanged {
            token_a: params.token_x,
            token_b: params.token_y,
            amount_a: amount_x,
            amount_b: amount_y,
            share_delta: params.shares,
            is_add: false,
        });

        Ok(Withdrawal { amount_x, amount_y })
    }
}

/// Undoes the bookkeeping of a withdrawal whose first payout failed.
fn restore_position(
    state: &RefCell<ExchangeState>,
    pool_id: PoolId,
    reserves: (Amount, Amount),
    holder: AccountId,
    shares: Shares,
) {
    let mut st = state.borrow_mut();
    let st = &mut *st;
    if let Ok(pool) = st.pools.get_mut(&pool_id) {
        pool.set_reserves(reserves);
    }
    if let Err(e) = st.shares.issue(pool_id, holder, shares) {
        tracing::error!("could not restore {} shares to {}: {}", shares, holder, e);
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::domain::TokenAddress;
    use crate::traits::AssetLedger;

    fn withdrawal(x: TokenAddress, y: TokenAddress, shares: u128) -> RemoveLiquidity {
        RemoveLiquidity {
            token_x: x,
            token_y: y,
            shares: Shares::new(shares),
            amount_x_min: Amount::ZERO,
            amount_y_min: Amount::ZERO,
            recipient: alice(),
            deadline: later(),
        }
    }

    // -- add_liquidity ------------------------------------------------------

    #[test]
    fn first_deposit_creates_pool() {
        let f = fixture();
        let Ok(dep) = f.exchange.add_liquidity(alice(), &deposit(token(1), token(2), 100, 100)) else {
            panic!("expected Ok");
        };
        assert_eq!(dep.shares, Shares::new(100));
        assert_eq!(
            f.exchange.get_reserves(token(1), token(2)),
            Ok((Amount::new(100), Amount::new(100)))
        );
        assert_eq!(f.ledger(token(1)).balance_of(custody()), Amount::new(100));

        let events = f.exchange.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ExchangeEvent::PoolCreated { .. }));
        assert!(matches!(
            events[1],
            ExchangeEvent::LiquidityChanged { is_add: true, .. }
        ));
    }

    #[test]
    fn second_deposit_is_proportional() {
        let f = fixture();
        seed(&f, token(1), token(2), 100, 100);
        let Ok(dep) = f.exchange.add_liquidity(bob(), &deposit(token(1), token(2), 50, 50)) else {
            panic!("expected Ok");
        };
        assert_eq!(dep.shares, Shares::new(50));
        // only one PoolCreated
        let created = f
            .exchange
            .events()
            .iter()
            .filter(|e| matches!(e, ExchangeEvent::PoolCreated { .. }))
            .count();
        assert_eq!(created, 1);
    }

    #[test]
    fn reversed_order_deposit_lands_on_same_pool() {
        let f = fixture();
        seed(&f, token(1), token(2), 1_000, 4_000);
        let Ok(dep) = f.exchange.add_liquidity(alice(), &deposit(token(2), token(1), 400, 1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!((dep.amount_x, dep.amount_y), (Amount::new(400), Amount::new(100)));
        assert_eq!(f.exchange.pools().len(), 1);
        assert_eq!(
            f.exchange.get_reserves(token(1), token(2)),
            Ok((Amount::new(1_100), Amount::new(4_400)))
        );
    }

    #[test]
    fn validation_errors() {
        let f = fixture();
        let mut bad = deposit(token(1), token(1), 1, 1);
        assert_eq!(f.exchange.add_liquidity(alice(), &bad), Err(AmmError::IdenticalAssets));

        bad = deposit(TokenAddress::zero(), token(1), 1, 1);
        assert_eq!(f.exchange.add_liquidity(alice(), &bad), Err(AmmError::ZeroAddress));

        bad = deposit(token(1), token(2), 1, 1);
        bad.recipient = AccountId::zero();
        assert_eq!(f.exchange.add_liquidity(alice(), &bad), Err(AmmError::ZeroRecipient));

        bad = deposit(token(1), token(9), 1, 1);
        assert_eq!(
            f.exchange.add_liquidity(alice(), &bad),
            Err(AmmError::UnknownAsset(token(9)))
        );

        f.clock.advance(61);
        assert_eq!(
            f.exchange.add_liquidity(alice(), &deposit(token(1), token(2), 1, 1)),
            Err(AmmError::Expired)
        );
        assert!(f.exchange.events().is_empty());
    }

    #[test]
    fn zero_first_deposit_mints_nothing() {
        let f = fixture();
        assert_eq!(
            f.exchange.add_liquidity(alice(), &deposit(token(1), token(2), 0, 100)),
            Err(AmmError::InsufficientLiquidityMinted)
        );
        assert!(!f.exchange.pool_exists(token(1), token(2)));
        assert!(f.exchange.state.lock().borrow().locks.is_empty());
    }

    #[test]
    fn failed_second_pull_refunds_first() {
        let f = fixture();
        f.ledger(token(2)).fail_transfers(true);
        let before = f.ledger(token(1)).balance_of(alice());

        assert_eq!(
            f.exchange.add_liquidity(alice(), &deposit(token(1), token(2), 100, 100)),
            Err(AmmError::AssetTransferFailed(token(2)))
        );
        assert_eq!(f.ledger(token(1)).balance_of(alice()), before);
        assert_eq!(f.ledger(token(1)).balance_of(custody()), Amount::ZERO);
        assert!(!f.exchange.pool_exists(token(1), token(2)));
        assert!(f.exchange.events().is_empty());
    }

    // -- remove_liquidity ---------------------------------------------------

    #[test]
    fn remove_everything_empties_pool() {
        let f = fixture();
        seed(&f, token(1), token(2), 100, 400);
        let Ok(out) = f.exchange.remove_liquidity(alice(), &withdrawal(token(2), token(1), 200)) else {
            panic!("expected Ok");
        };
        assert_eq!((out.amount_x, out.amount_y), (Amount::new(400), Amount::new(100)));
        assert_eq!(
            f.exchange.get_reserves(token(1), token(2)),
            Ok((Amount::ZERO, Amount::ZERO))
        );
        let pool_id = crate::domain::TokenPair::new(token(1), token(2))
            .map(|p| p.pool_id())
            .unwrap_or_else(|_| panic!("valid pair"));
        assert_eq!(f.exchange.total_shares(&pool_id), Shares::ZERO);
        // pool persists once created
        assert!(f.exchange.pool_exists(token(1), token(2)));
    }

    #[test]
    fn remove_errors() {
        let f = fixture();
        assert_eq!(
            f.exchange.remove_liquidity(alice(), &withdrawal(token(1), token(2), 1)),
            Err(AmmError::PoolNotFound)
        );
        seed(&f, token(1), token(2), 100, 100);
        assert_eq!(
            f.exchange.remove_liquidity(alice(), &withdrawal(token(1), token(2), 0)),
            Err(AmmError::ZeroShares)
        );
        assert_eq!(
            f.exchange.remove_liquidity(alice(), &withdrawal(token(1), token(2), 101)),
            Err(AmmError::InsufficientShares)
        );
        assert_eq!(
            f.exchange.remove_liquidity(bob(), &withdrawal(token(1), token(2), 1)),
            Err(AmmError::InsufficientShares)
        );

        let mut greedy = withdrawal(token(1), token(2), 10);
        greedy.amount_x_min = Amount::new(11);
        assert_eq!(
            f.exchange.remove_liquidity(alice(), &greedy),
            Err(AmmError::InsufficientAAmount)
        );
        greedy.amount_x_min = Amount::ZERO;
        greedy.amount_y_min = Amount::new(11);
        assert_eq!(
            f.exchange.remove_liquidity(alice(), &greedy),
            Err(AmmError::InsufficientBAmount)
        );
        assert_eq!(f.exchange.events().len(), 2);
    }

    #[test]
    fn failed_payout_restores_position() {
        let f = fixture();
        seed(&f, token(1), token(2), 100, 100);
        f.ledger(token(1)).fail_transfers(true);

        assert_eq!(
            f.exchange.remove_liquidity(alice(), &withdrawal(token(1), token(2), 50)),
            Err(AmmError::AssetTransferFailed(token(1)))
        );
        let Ok(info) = f.exchange.get_pool_info(token(1), token(2)) else {
            panic!("expected Ok");
        };
        assert_eq!((info.reserve0, info.reserve1), (Amount::new(100), Amount::new(100)));
        assert_eq!(info.total_shares, Shares::new(100));
        assert_eq!(
            f.exchange.get_liquidity_balance(&info.pool_id, &alice()),
            Shares::new(100)
        );
        assert_eq!(f.exchange.events().len(), 2);
    }

    #[test]
    fn failed_second_payout_keeps_settled_leg() {
        let f = fixture();
        seed(&f, token(1), token(2), 100, 100);
        let start = f.ledger(token(1)).balance_of(alice());
        f.ledger(token(2)).fail_transfers(true);

        assert_eq!(
            f.exchange.remove_liquidity(alice(), &withdrawal(token(1), token(2), 50)),
            Err(AmmError::AssetTransferFailed(token(2)))
        );
        let Ok(info) = f.exchange.get_pool_info(token(1), token(2)) else {
            panic!("expected Ok");
        };
        assert_eq!((info.reserve0, info.reserve1), (Amount::new(50), Amount::new(100)));
        assert_eq!(info.reserve0, f.ledger(token(1)).balance_of(custody()));
        assert_eq!(info.reserve1, f.ledger(token(2)).balance_of(custody()));
        assert_eq!(info.total_shares, Shares::new(50));
        assert_eq!(
            f.exchange.get_liquidity_balance(&info.pool_id, &alice()),
            Shares::new(50)
        );
        assert_eq!(f.ledger(token(1)).balance_of(alice()), Amount::new(start.get() + 50));
        assert!(matches!(
            f.exchange.events().last(),
            Some(ExchangeEvent::LiquidityChanged { is_add: false, amount_b, .. }) if amount_b.is_zero()
        ));

        // the rest of the position is still fully redeemable
        f.ledger(token(2)).fail_transfers(false);
        let Ok(out) = f.exchange.remove_liquidity(alice(), &withdrawal(token(1), token(2), 50)) else {
            panic!("expected Ok");
        };
        assert_eq!((out.amount_x, out.amount_y), (Amount::new(50), Amount::new(100)));
        assert_eq!(f.ledger(token(1)).balance_of(custody()), Amount::ZERO);
        assert_eq!(f.ledger(token(2)).balance_of(custody()), Amount::ZERO);
    }
}
