use crate::arbitrage::{self, ArbitrageOpportunity};
use crate::errors::ClientError;
use crate::models::FundingRatesSnapshot;
use async_trait::async_trait;

pub mod http;

/// Anything that can produce a funding rate snapshot.
///
/// Only `fetch_snapshot` is required. The lookups are built on top of it and
/// fetch a fresh snapshot on every call; nothing is cached between calls.
#[async_trait]
pub trait FundingSource: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<FundingRatesSnapshot, ClientError>;

    /// Funding rate as a percentage. `Ok(None)` if the exchange or symbol is
    /// not in the snapshot.
    async fn get_rate(&self, exchange: &str, symbol: &str) -> Result<Option<f64>, ClientError> {
        let snapshot = self.fetch_snapshot().await?;
        Ok(snapshot.rate(exchange, symbol))
    }

    async fn find_arbitrage_opportunities(
        &self,
        symbol: &str,
        min_spread: f64,
    ) -> Result<Vec<ArbitrageOpportunity>, ClientError> {
        let snapshot = self.fetch_snapshot().await?;
        let opportunities = arbitrage::find_opportunities(&snapshot, symbol, min_spread);

        tracing::debug!(
            "{symbol}: {} opportunities with spread >= {min_spread}%",
            opportunities.len()
        );

        Ok(opportunities)
    }
}
