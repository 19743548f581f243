//! The exchange engine: pools, shares and the operations that move them.
//!
//! [`Exchange`] is a shared object. Every public method takes `&self`, so
//! one instance is normally wrapped in an `Arc` and handed to every caller.
//!
//! # Execution model
//!
//! Each public operation holds an operation lock for its whole duration,
//! so calls from different threads run one after another and never
//! interleave. The lock is reentrant: an [`AssetLedger`] may call back
//! into the exchange from inside a transfer. Such a nested call can read
//! anything, but any mutating call against a pool that is mid-operation
//! fails with [`AmmError::ReentrancyDetected`].
//!
//! # Atomicity
//!
//! A failed operation leaves reserves, share balances and the event log
//! exactly as they were. Inbound transfers happen before any state is
//! written; a leg that was already pulled is refunded when a later leg
//! fails. Outbound transfers are pre-flighted against the custody balance
//! and state written ahead of them is rolled back if one still fails.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use hydra_exchange::prelude::*;
//!
//! let custody = AccountId::from_bytes([0xee; 32]);
//! let alice = AccountId::from_bytes([0xa1; 32]);
//! let (usd, eth) = (TokenAddress::from_bytes([1; 32]), TokenAddress::from_bytes([2; 32]));
//!
//! let Ok(config) = ExchangeConfig::new(custody, FeeTier::default()) else { panic!() };
//! let clock = Arc::new(ManualClock::new(Timestamp::from_secs(1_000)));
//! let Ok(exchange) = Exchange::with_clock(&config, clock) else { panic!() };
//!
//! for token in [usd, eth] {
//!     let ledger = Arc::new(MemoryLedger::new());
//!     ledger.mint(alice, Amount::new(1_000_000));
//!     ledger.approve(alice, custody, Amount::MAX);
//!     let Ok(()) = exchange.register_asset(token, ledger) else { panic!() };
//! }
//!
//! let deposit = AddLiquidity {
//!     token_x: usd,
//!     token_y: eth,
//!     amount_x_desired: Amount::new(100),
//!     amount_y_desired: Amount::new(100),
//!     amount_x_min: Amount::ZERO,
//!     amount_y_min: Amount::ZERO,
//!     recipient: alice,
//!     deadline: Timestamp::from_secs(2_000),
//! };
//! let Ok(minted) = exchange.add_liquidity(alice, &deposit) else { panic!() };
//! assert_eq!(minted.shares, Shares::new(100));
//! assert_eq!(exchange.get_reserves(eth, usd), Ok((Amount::new(100), Amount::new(100))));
//! ```

mod guard;
mod liquidity;
mod swap;

use core::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::{ReentrantMutex, RwLock};

use crate::assets::AssetBook;
use crate::config::ExchangeConfig;
use crate::domain::{AccountId, Amount, FeeTier, PoolId, Price, Shares, Timestamp, TokenAddress, TokenPair};
use crate::error::{AmmError, Result};
use crate::events::{EventLog, ExchangeEvent};
use crate::liquidity::ShareLedger;
use crate::pools::{PoolInfo, PoolStore};
use crate::pricing;
use crate::traits::{AssetLedger, AssetLedgerError, Clock, FromConfig, SystemClock};

use guard::PoolLock;

/// Everything an operation may change, behind the operation lock.
#[derive(Debug, Default)]
pub(crate) struct ExchangeState {
    pub(crate) pools: PoolStore,
    pub(crate) shares: ShareLedger,
    pub(crate) locks: HashMap<PoolId, PoolLock>,
    pub(crate) events: EventLog,
}

/// A constant-product exchange over any number of asset pairs.
///
/// Built from an [`ExchangeConfig`] through [`FromConfig`] (wall-clock
/// time) or [`Exchange::with_clock`]. Assets must be registered with
/// [`register_asset`](Self::register_asset) before they can be pooled.
pub struct Exchange {
    config: ExchangeConfig,
    clock: Arc<dyn Clock>,
    assets: RwLock<AssetBook>,
    state: ReentrantMutex<RefCell<ExchangeState>>,
}

impl FromConfig<ExchangeConfig> for Exchange {
    fn from_config(config: &ExchangeConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }
}

impl Exchange {
    /// Creates an exchange that reads time from `clock`.
    ///
    /// # Errors
    ///
    /// Any error from [`ExchangeConfig::validate`].
    pub fn with_clock(config: &ExchangeConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            "exchange created: custody={} fee={}",
            config.custody(),
            config.fee_tier()
        );
        Ok(Self {
            config: *config,
            clock,
            assets: RwLock::new(AssetBook::new()),
            state: ReentrantMutex::new(RefCell::new(ExchangeState::default())),
        })
    }

    /// Attaches the ledger that holds `token`. A later registration for the
    /// same token replaces the earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroAddress`] for the null asset.
    pub fn register_asset(&self, token: TokenAddress, ledger: Arc<dyn AssetLedger>) -> Result<()> {
        self.assets.write().register(token, ledger)?;
        tracing::debug!("asset registered: {}", token);
        Ok(())
    }

    /// The configuration this exchange was built from.
    #[must_use]
    pub const fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// The swap fee.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.config.fee_tier()
    }

    /// The account that holds every pool's assets.
    #[must_use]
    pub const fn custody(&self) -> AccountId {
        self.config.custody()
    }

    // -- Queries ------------------------------------------------------------

    /// Reserves of the `(x, y)` pool, ordered to match the arguments.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] / [`AmmError::ZeroAddress`] for a
    ///   malformed pair.
    /// - [`AmmError::PoolNotFound`] if the pool does not exist.
    pub fn get_reserves(&self, x: TokenAddress, y: TokenAddress) -> Result<(Amount, Amount)> {
        self.read(|st| st.pools.get_reserves(x, y))
    }

    /// Units of `y` per unit of `x` in the `(x, y)` pool, 18-decimal fixed
    /// point.
    ///
    /// # Errors
    ///
    /// Same as [`get_reserves`](Self::get_reserves), plus
    /// [`AmmError::EmptyReserve`] if the `x` reserve is zero.
    pub fn get_price(&self, x: TokenAddress, y: TokenAddress) -> Result<Price> {
        let (reserve_x, reserve_y) = self.get_reserves(x, y)?;
        pricing::quote_price(reserve_x, reserve_y)
    }

    /// Output for selling `amount_in` against the given reserves at this
    /// exchange's fee.
    ///
    /// # Errors
    ///
    /// See [`pricing::quote_output`].
    pub fn get_amount_out(&self, amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
        pricing::quote_output(amount_in, reserve_in, reserve_out, self.fee_tier())
    }

    /// Input needed to buy `amount_out` against the given reserves at this
    /// exchange's fee.
    ///
    /// # Errors
    ///
    /// See [`pricing::quote_input`].
    pub fn get_amount_in(&self, amount_out: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
        pricing::quote_input(amount_out, reserve_in, reserve_out, self.fee_tier())
    }

    /// Amount of the other asset matching `amount_a` at the given reserves.
    ///
    /// # Errors
    ///
    /// See [`pricing::quote`].
    pub fn quote(&self, amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
        pricing::quote(amount_a, reserve_a, reserve_b)
    }

    /// Shares of `pool_id` held by `provider`.
    #[must_use]
    pub fn get_liquidity_balance(&self, pool_id: &PoolId, provider: &AccountId) -> Shares {
        self.read(|st| st.shares.balance_of(pool_id, provider))
    }

    /// Outstanding shares of `pool_id`.
    #[must_use]
    pub fn total_shares(&self, pool_id: &PoolId) -> Shares {
        self.read(|st| st.shares.total_shares(pool_id))
    }

    /// Whether a pool exists for `(x, y)`. A malformed pair has no pool.
    #[must_use]
    pub fn pool_exists(&self, x: TokenAddress, y: TokenAddress) -> bool {
        TokenPair::new(x, y).is_ok_and(|pair| self.read(|st| st.pools.contains(&pair.pool_id())))
    }

    /// Full view of the `(x, y)` pool in canonical order.
    ///
    /// A pair without a pool yields a zeroed view with `exists == false`.
    ///
    /// # Errors
    ///
    /// [`AmmError::IdenticalAssets`] / [`AmmError::ZeroAddress`] for a
    /// malformed pair.
    pub fn get_pool_info(&self, x: TokenAddress, y: TokenAddress) -> Result<PoolInfo> {
        let pair = TokenPair::new(x, y)?;
        Ok(self.read(|st| {
            st.pools.find(&pair).map_or_else(
                || PoolInfo::absent(&pair),
                |pool| pool.info(st.shares.total_shares(&pool.pool_id())),
            )
        }))
    }

    /// Every pool, in creation order.
    #[must_use]
    pub fn pools(&self) -> Vec<PoolInfo> {
        self.read(|st| {
            st.pools
                .iter()
                .map(|pool| pool.info(st.shares.total_shares(&pool.pool_id())))
                .collect()
        })
    }

    /// Committed events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<ExchangeEvent> {
        self.read(|st| st.events.as_slice().to_vec())
    }

    /// Removes and returns every committed event.
    pub fn drain_events(&self) -> Vec<ExchangeEvent> {
        let op = self.state.lock();
        let mut st = op.borrow_mut();
        st.events.drain()
    }

    // -- Internals ----------------------------------------------------------

    fn read<T>(&self, f: impl FnOnce(&ExchangeState) -> T) -> T {
        let op = self.state.lock();
        let st = op.borrow();
        f(&st)
    }

    fn check_deadline(&self, deadline: Timestamp) -> Result<()> {
        let now = self.clock.now();
        if now > deadline {
            tracing::debug!("deadline {} passed at {}", deadline, now);
            return Err(AmmError::Expired);
        }
        Ok(())
    }

    fn ledger(&self, token: &TokenAddress) -> Result<Arc<dyn AssetLedger>> {
        self.assets.read().ledger(token)
    }

    /// Pulls `amount` of `token` from `from` into custody.
    fn pull(&self, token: TokenAddress, ledger: &dyn AssetLedger, from: AccountId, amount: Amount) -> Result<()> {
        let custody = self.custody();
        ledger
            .transfer_from(custody, from, custody, amount)
            .map_err(|e| transfer_failed(token, "pull", &e))
    }

    /// Pays `amount` of `token` out of custody to `to`.
    fn pay(&self, token: TokenAddress, ledger: &dyn AssetLedger, to: AccountId, amount: Amount) -> Result<()> {
        ledger
            .transfer(self.custody(), to, amount)
            .map_err(|e| transfer_failed(token, "payout", &e))
    }

    /// Returns an already pulled leg. A failure here cannot be undone and
    /// is only logged.
    fn refund(&self, token: TokenAddress, ledger: &dyn AssetLedger, to: AccountId, amount: Amount) {
        if let Err(e) = ledger.transfer(self.custody(), to, amount) {
            tracing::error!(
                "refund of {} {} to {} failed, funds remain in custody: {}",
                amount,
                token,
                to,
                e
            );
        }
    }

    /// Checks that custody can cover a payout before any state is written.
    fn ensure_custody_covers(&self, token: TokenAddress, ledger: &dyn AssetLedger, amount: Amount) -> Result<()> {
        let held = ledger.balance_of(self.custody());
        if held < amount {
            tracing::error!(
                "custody holds {} of {} but must pay out {}",
                held,
                token,
                amount
            );
            return Err(AmmError::AssetTransferFailed(token));
        }
        Ok(())
    }
}

fn transfer_failed(token: TokenAddress, leg: &str, cause: &AssetLedgerError) -> AmmError {
    tracing::error!("{} of {} failed: {}", leg, token, cause);
    AmmError::AssetTransferFailed(token)
}

impl fmt::Debug for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exchange")
            .field("config", &self.config)
            .field("assets", &*self.assets.read())
            .finish_non_exhaustive()
    }
}
