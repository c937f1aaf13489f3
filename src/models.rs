use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Raw rates are percentages scaled by this factor.
pub const RATE_SCALE: f64 = 10000.0;

pub const DEFAULT_OI_RANK: &str = "500+";

/// Converts a raw integer rate into a percentage.
pub fn normalize_rate(raw: i64) -> f64 {
    raw as f64 / RATE_SCALE
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display: String,
}

/// The API sends the exchange set either as a plain list of ids or as an
/// object keyed by id with free-form metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExchangeList {
    Ids(Vec<String>),
    Detailed(IndexMap<String, serde_json::Value>),
}

impl Default for ExchangeList {
    fn default() -> Self {
        ExchangeList::Ids(Vec::new())
    }
}

impl ExchangeList {
    pub fn len(&self) -> usize {
        match self {
            ExchangeList::Ids(ids) => ids.len(),
            ExchangeList::Detailed(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> Vec<&str> {
        match self {
            ExchangeList::Ids(ids) => ids.iter().map(String::as_str).collect(),
            ExchangeList::Detailed(map) => map.keys().map(String::as_str).collect(),
        }
    }

    /// `display` field of the metadata object, if the list carries one.
    pub fn display(&self, exchange: &str) -> Option<&str> {
        match self {
            ExchangeList::Ids(_) => None,
            ExchangeList::Detailed(map) => map.get(exchange)?.get("display")?.as_str(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangesData {
    #[serde(default)]
    pub exchange_names: Vec<ExchangeInfo>,
    #[serde(default)]
    pub exchanges: ExchangeList,
}

/// One response from the `/funding` endpoint.
///
/// Every field is optional on the wire. `funding_rates` is keyed
/// exchange id -> symbol -> raw rate and keeps the exchange order of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingRatesSnapshot {
    #[serde(default)]
    pub symbols: Vec<String>,
    #[serde(default)]
    pub exchanges: ExchangesData,
    #[serde(default)]
    pub funding_rates: IndexMap<String, BTreeMap<String, i64>>,
    #[serde(default)]
    pub oi_rankings: HashMap<String, String>,
    #[serde(default = "default_oi_rank")]
    pub default_oi_rank: String,
    #[serde(default)]
    pub timestamp: String,
}

fn default_oi_rank() -> String {
    DEFAULT_OI_RANK.to_string()
}

impl Default for FundingRatesSnapshot {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            exchanges: ExchangesData::default(),
            funding_rates: IndexMap::new(),
            oi_rankings: HashMap::new(),
            default_oi_rank: default_oi_rank(),
            timestamp: String::new(),
        }
    }
}

impl FundingRatesSnapshot {
    pub fn raw_rate(&self, exchange: &str, symbol: &str) -> Option<i64> {
        self.funding_rates.get(exchange)?.get(symbol).copied()
    }

    /// Normalized percentage for one exchange/symbol, `None` if either is missing.
    pub fn rate(&self, exchange: &str, symbol: &str) -> Option<f64> {
        self.raw_rate(exchange, symbol).map(normalize_rate)
    }

    /// Every exchange quoting `symbol`, in payload order.
    pub fn rates_for_symbol(&self, symbol: &str) -> Vec<(&str, i64)> {
        self.funding_rates
            .iter()
            .filter_map(|(exchange, rates)| rates.get(symbol).map(|r| (exchange.as_str(), *r)))
            .collect()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn exchange_count(&self) -> usize {
        self.exchanges.exchanges.len()
    }

    pub fn display_name<'a>(&'a self, exchange: &'a str) -> &'a str {
        self.exchanges
            .exchange_names
            .iter()
            .find(|info| info.name == exchange)
            .map(|info| info.display.as_str())
            .or_else(|| self.exchanges.exchanges.display(exchange))
            .filter(|display| !display.is_empty())
            .unwrap_or(exchange)
    }

    pub fn oi_rank(&self, key: &str) -> &str {
        self.oi_rankings
            .get(key)
            .map(String::as_str)
            .unwrap_or(self.default_oi_rank.as_str())
    }
}
