use crate::models::{FundingRatesSnapshot, RATE_SCALE, normalize_rate};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::Reverse;
use std::fmt;

/// A pair of exchanges quoting different funding rates for the same symbol.
/// Rates and spread are percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArbitrageOpportunity {
    pub symbol: String,
    pub exchange1: String,
    pub rate1: f64,
    pub exchange2: String,
    pub rate2: f64,
    pub spread: f64,
    /// Exchange with the lower funding rate.
    pub long_exchange: String,
    /// Exchange with the higher funding rate.
    pub short_exchange: String,
}

impl ArbitrageOpportunity {
    pub fn long_rate(&self) -> f64 {
        if self.long_exchange == self.exchange1 {
            self.rate1
        } else {
            self.rate2
        }
    }

    pub fn short_rate(&self) -> f64 {
        if self.short_exchange == self.exchange1 {
            self.rate1
        } else {
            self.rate2
        }
    }
}

impl fmt::Display for ArbitrageOpportunity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} spread={:.4}% | long {} @ {:.4}% | short {} @ {:.4}%",
            self.symbol,
            self.spread,
            self.long_exchange,
            self.long_rate(),
            self.short_exchange,
            self.short_rate(),
        )
    }
}

/// Compares every pair of exchanges quoting `symbol` and keeps those whose
/// spread is at least `min_spread`. Sorted by spread descending; equal
/// spreads keep pair enumeration order.
pub fn find_opportunities(
    snapshot: &FundingRatesSnapshot,
    symbol: &str,
    min_spread: f64,
) -> Vec<ArbitrageOpportunity> {
    let rates = snapshot.rates_for_symbol(symbol);
    if rates.len() < 2 {
        return Vec::new();
    }

    let mut opportunities = Vec::new();

    for (i, &(exchange1, rate1)) in rates.iter().enumerate() {
        for &(exchange2, rate2) in &rates[i + 1..] {
            let spread = rate1.abs_diff(rate2) as f64 / RATE_SCALE;
            // NaN thresholds fail this comparison and keep nothing
            if spread >= min_spread {
                let (long_exchange, short_exchange) = if rate1 < rate2 {
                    (exchange1, exchange2)
                } else {
                    (exchange2, exchange1)
                };

                opportunities.push(ArbitrageOpportunity {
                    symbol: symbol.to_string(),
                    exchange1: exchange1.to_string(),
                    rate1: normalize_rate(rate1),
                    exchange2: exchange2.to_string(),
                    rate2: normalize_rate(rate2),
                    spread,
                    long_exchange: long_exchange.to_string(),
                    short_exchange: short_exchange.to_string(),
                });
            }
        }
    }

    // sort_by_key is stable, so ties stay in enumeration order
    opportunities.sort_by_key(|o| Reverse(OrderedFloat(o.spread)));
    opportunities
}
