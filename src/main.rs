use onlyfunding::{ClientConfig, FundingClient, FundingSource};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::from_env()?;

    let symbol = env::var("SYMBOL")
        .unwrap_or_else(|_| "BTC".to_string())
        .trim()
        .to_uppercase();
    let exchange = env::var("EXCHANGE").unwrap_or_else(|_| "binance_1_perp".to_string());
    let min_spread = match env::var("MIN_SPREAD") {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| anyhow::anyhow!("MIN_SPREAD must be a number, got {raw:?}"))?,
        Err(_) => 0.01,
    };

    tracing::info!(
        "onlyfunding starting: {} (timeout {:?})",
        config.funding_url(),
        config.timeout
    );

    let client = FundingClient::with_config(config)?;

    // ── 1. Full snapshot ───────────────────────────────────────────
    let snapshot = client.fetch_snapshot().await?;
    tracing::info!(
        "Found {} symbols across {} exchanges (ts={})",
        snapshot.symbol_count(),
        snapshot.exchange_count(),
        snapshot.timestamp
    );

    // ── 2. Single rate ─────────────────────────────────────────────
    match client.get_rate(&exchange, &symbol).await? {
        Some(rate) => tracing::info!("[{exchange}] {symbol} funding rate: {rate:.4}%"),
        None => tracing::warn!("[{exchange}] no funding rate for {symbol}"),
    }

    // ── 3. Arbitrage between exchanges ─────────────────────────────
    let opportunities = client
        .find_arbitrage_opportunities(&symbol, min_spread)
        .await?;

    tracing::info!(
        "=== {} OPPORTUNITIES FOR {symbol} (min spread {min_spread}%) ===",
        opportunities.len()
    );
    for opp in opportunities.iter().take(5) {
        tracing::info!("{opp}");
    }

    Ok(())
}
