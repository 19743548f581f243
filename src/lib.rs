//! # Hydra Exchange
//!
//! Constant-product AMM exchange engine: participants pool pairs of
//! fungible assets, receive proportional share claims, trade one asset for
//! the other at a fee-adjusted `x × y = k` price, and redeem their shares
//! for a proportional part of the current reserves.
//!
//! The engine covers:
//!
//! - **Pair canonicalization**: `(x, y)` and `(y, x)` always name the same
//!   pool and the same [`PoolId`](domain::PoolId).
//! - **Reserve bookkeeping** in canonical slots, reported in caller order.
//! - **Share issuance and redemption**: geometric-mean first deposits,
//!   ratio-preserving later deposits, floor-rounded redemptions.
//! - **Fee-adjusted swaps**: exact-input and exact-output, single hop.
//! - **Reentrancy protection** around every external asset transfer.
//!
//! Every rounding step goes against the caller, so the pool's
//! `reserve0 × reserve1` never shrinks through a swap and no sequence of
//! deposits and withdrawals returns more than was put in.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use hydra_exchange::prelude::*;
//!
//! let custody = AccountId::from_bytes([0xee; 32]);
//! let lp = AccountId::from_bytes([0x01; 32]);
//! let trader = AccountId::from_bytes([0x02; 32]);
//! let usdc = TokenAddress::from_bytes([0xaa; 32]);
//! let weth = TokenAddress::from_bytes([0xbb; 32]);
//!
//! // 1. Build the exchange
//! let Ok(config) = ExchangeConfig::new(custody, FeeTier::TIER_0_30_PERCENT) else {
//!     panic!("valid config");
//! };
//! let Ok(exchange) = Exchange::from_config(&config) else {
//!     panic!("valid exchange");
//! };
//!
//! // 2. Attach one ledger per asset and fund the participants
//! for token in [usdc, weth] {
//!     let ledger = Arc::new(MemoryLedger::new());
//!     for who in [lp, trader] {
//!         ledger.mint(who, Amount::new(1_000_000_000));
//!         ledger.approve(who, custody, Amount::MAX);
//!     }
//!     let Ok(()) = exchange.register_asset(token, ledger) else {
//!         panic!("registered");
//!     };
//! }
//!
//! // 3. Seed the pool
//! let deadline = Timestamp::MAX;
//! let Ok(deposit) = exchange.add_liquidity(lp, &AddLiquidity {
//!     token_x: usdc,
//!     token_y: weth,
//!     amount_x_desired: Amount::new(1_000_000),
//!     amount_y_desired: Amount::new(1_000_000),
//!     amount_x_min: Amount::ZERO,
//!     amount_y_min: Amount::ZERO,
//!     recipient: lp,
//!     deadline,
//! }) else {
//!     panic!("deposit");
//! };
//! assert_eq!(deposit.shares, Shares::new(1_000_000));
//!
//! // 4. Trade
//! let Ok(out) = exchange.swap_exact_in(
//!     trader,
//!     Amount::new(10_000),
//!     Amount::new(9_000),
//!     &[usdc, weth],
//!     trader,
//!     deadline,
//! ) else {
//!     panic!("swap");
//! };
//! assert_eq!(out, Amount::new(9_871));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller    │  add_liquidity / remove_liquidity / swap / queries
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │   Exchange   │  deadline, canonical pair, reentrancy guard, events
//! └──┬────────┬──┘
//!    │        │ pure quotes
//!    │        ▼
//!    │  ┌──────────────┐
//!    │  │   Pricing    │  quote_output, quote_input, plan_deposit, …
//!    │  └──────────────┘
//!    ▼
//! ┌──────────────┐     ┌──────────────┐
//! │  PoolStore   │     │ ShareLedger  │  state, behind the operation lock
//! └──────────────┘     └──────────────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │ AssetLedger  │  external transfers, one ledger per asset
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`TokenPair`](domain::TokenPair), [`PoolId`](domain::PoolId), etc. |
//! | [`pricing`] | Pure constant-product and share math |
//! | [`pools`] | [`PoolStore`](pools::PoolStore) and pool records |
//! | [`liquidity`] | [`ShareLedger`](liquidity::ShareLedger) |
//! | [`exchange`] | [`Exchange`](exchange::Exchange): controllers and queries |
//! | [`traits`] | Seams: [`AssetLedger`](traits::AssetLedger), [`Clock`](traits::Clock), [`FromConfig`](traits::FromConfig) |
//! | [`assets`] | [`AssetBook`](assets::AssetBook) and the in-memory [`MemoryLedger`](assets::MemoryLedger) |
//! | [`events`] | [`ExchangeEvent`](events::ExchangeEvent) |
//! | [`config`] | [`ExchangeConfig`](config::ExchangeConfig) |
//! | [`math`] | Checked arithmetic and 256-bit intermediates |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The engine logs through [`tracing`]: committed state changes at `info`,
//! rejected reentrant calls at `warn`, failed transfers at `error`. It never
//! installs a subscriber.

pub mod assets;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod exchange;
pub mod liquidity;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod pricing;
pub mod traits;
