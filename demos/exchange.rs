//! Exchange walkthrough.
//!
//! Builds an exchange from a JSON configuration, seeds a USDC/WETH pool,
//! trades in both directions, and withdraws, printing reserves, prices and
//! the event log along the way.
//!
//! # Run
//!
//! ```bash
//! cargo run --example exchange
//! ```

use std::sync::Arc;

use hydra_exchange::assets::MemoryLedger;
use hydra_exchange::config::ExchangeConfig;
use hydra_exchange::domain::{
    AccountId, AddLiquidity, Amount, RemoveLiquidity, Shares, SwapSpec, TokenAddress, TokenPair,
};
use hydra_exchange::exchange::Exchange;
use hydra_exchange::traits::{AssetLedger, Clock, FromConfig, SystemClock};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Hydra Exchange (x · y = k) ===\n");

    // ── 1. Configure the exchange ───────────────────────────────────────
    let custody = AccountId::from_bytes([0xee; 32]);
    let json = format!(r#"{{"custody": "{}", "fee_bps": 30}}"#, hex::encode(custody.as_bytes()));
    let config = ExchangeConfig::from_json(&json)?;
    let exchange = Exchange::from_config(&config)?;
    println!("Custody:  {}", exchange.custody());
    println!("Fee tier: {} bps", exchange.fee_tier().basis_points());

    // ── 2. Register assets and fund participants ────────────────────────
    let usdc = TokenAddress::from_bytes([0x01; 32]);
    let weth = TokenAddress::from_bytes([0x02; 32]);
    let lp = AccountId::from_bytes([0xa1; 32]);
    let trader = AccountId::from_bytes([0xb2; 32]);

    let usdc_ledger = Arc::new(MemoryLedger::new());
    let weth_ledger = Arc::new(MemoryLedger::new());
    for ledger in [&usdc_ledger, &weth_ledger] {
        for who in [lp, trader] {
            ledger.mint(who, Amount::new(100_000_000));
            ledger.approve(who, custody, Amount::MAX);
        }
    }
    exchange.register_asset(usdc, usdc_ledger.clone())?;
    exchange.register_asset(weth, weth_ledger.clone())?;

    // ── 3. Seed the pool ────────────────────────────────────────────────
    let deadline = SystemClock.now().plus_secs(300);
    let deposit = exchange.add_liquidity(
        lp,
        &AddLiquidity {
            token_x: usdc,
            token_y: weth,
            amount_x_desired: Amount::new(2_000_000),
            amount_y_desired: Amount::new(1_000),
            amount_x_min: Amount::ZERO,
            amount_y_min: Amount::ZERO,
            recipient: lp,
            deadline,
        },
    )?;
    println!(
        "\nSeeded {} USDC + {} WETH, minted {} shares",
        deposit.amount_x, deposit.amount_y, deposit.shares
    );
    println!("Price (USDC per WETH): {}", exchange.get_price(weth, usdc)?);

    // ── 4. Swap exact in: sell WETH ─────────────────────────────────────
    let out = exchange.swap_exact_in(trader, Amount::new(10), Amount::ZERO, &[weth, usdc], trader, deadline)?;
    println!("\n--- Sold 10 WETH for {out} USDC ---");
    let (r_usdc, r_weth) = exchange.get_reserves(usdc, weth)?;
    println!("Reserves: {r_usdc} USDC / {r_weth} WETH");

    // ── 5. Swap exact out: buy WETH ─────────────────────────────────────
    let result = exchange.swap(
        trader,
        SwapSpec::exact_out(Amount::new(5), Amount::new(20_000)),
        &[usdc, weth],
        trader,
        deadline,
    )?;
    println!(
        "\n--- Bought {} WETH for {} USDC (fee retained: {}) ---",
        result.amount_out, result.amount_in, result.fee
    );
    println!("Price (USDC per WETH): {}", exchange.get_price(weth, usdc)?);

    // ── 6. Withdraw half the position ───────────────────────────────────
    let pool_id = TokenPair::new(usdc, weth)?.pool_id();
    let half = exchange.get_liquidity_balance(&pool_id, &lp).get() / 2;
    let withdrawal = exchange.remove_liquidity(
        lp,
        &RemoveLiquidity {
            token_x: weth,
            token_y: usdc,
            shares: Shares::new(half),
            amount_x_min: Amount::ZERO,
            amount_y_min: Amount::ZERO,
            recipient: lp,
            deadline,
        },
    )?;
    println!(
        "\nWithdrew {} WETH + {} USDC for {half} shares",
        withdrawal.amount_x, withdrawal.amount_y
    );

    // ── 7. Inspect ──────────────────────────────────────────────────────
    let info = exchange.get_pool_info(usdc, weth)?;
    println!("\nPool {}", info.pool_id);
    println!("  reserve0:     {}", info.reserve0);
    println!("  reserve1:     {}", info.reserve1);
    println!("  total shares: {}", info.total_shares);
    println!(
        "  custody:      {} USDC / {} WETH",
        usdc_ledger.balance_of(custody),
        weth_ledger.balance_of(custody)
    );

    println!("\nEvent log:");
    for event in exchange.drain_events() {
        println!("  {}", serde_json::to_string(&event)?);
    }

    Ok(())
}
