//! Client for the onlyfunding.fun funding rates API.
//!
//! Fetches a snapshot of perpetual funding rates across exchanges, looks up
//! single rates and finds cross-exchange funding arbitrage for a symbol.
//!
//! ```rust,no_run
//! use onlyfunding::{FundingClient, FundingSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FundingClient::new()?;
//!     if let Some(rate) = client.get_rate("binance_1_perp", "BTC").await? {
//!         println!("BTC on Binance: {rate:.4}%");
//!     }
//!     for opp in client.find_arbitrage_opportunities("BTC", 0.01).await? {
//!         println!("{opp}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod arbitrage;
pub mod config;
pub mod errors;
pub mod models;
pub mod source;

pub use arbitrage::ArbitrageOpportunity;
pub use config::ClientConfig;
pub use errors::{ClientError, ConfigError, ErrorKind};
pub use models::{ExchangeInfo, ExchangeList, ExchangesData, FundingRatesSnapshot, normalize_rate};
pub use source::FundingSource;
pub use source::http::FundingClient;
