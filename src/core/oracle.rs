//! Price oracle abstraction
//!
//! The price oracle is the account engine's only external collaborator. It is
//! a pure function of symbol at call time: no caching, market-hours, or
//! retry semantics live in this crate.
//!
//! # Unknown-symbol sentinel
//!
//! The oracle signals "I cannot price this symbol" by returning
//! `Decimal::ZERO`. Any non-positive price is treated as that sentinel.
//! Trading operations turn the sentinel into an `UnknownSymbol` error;
//! valuation treats sentinel-priced holdings as contributing nothing.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// Source of current price-per-share for a symbol
///
/// Implementations return `Decimal::ZERO` (or any non-positive value) when
/// the symbol is unrecognized, and a positive amount otherwise. This is the
/// interface's only failure mode; implementations that can fail internally
/// must map failures to the sentinel themselves.
pub trait PriceOracle {
    /// Current price per share, or the unknown sentinel (zero)
    fn price(&self, symbol: &str) -> Decimal;
}

/// Fixed-table price oracle
///
/// Prices a small set of symbols from an in-memory table and returns the
/// unknown sentinel for everything else. Used by the CLI and throughout the
/// test suite; real deployments would substitute a market-data-backed
/// implementation of [`PriceOracle`].
#[derive(Debug, Clone)]
pub struct StaticPriceOracle {
    prices: HashMap<String, Decimal>,
}

impl StaticPriceOracle {
    /// Create an oracle with the default demo price table
    ///
    /// AAPL at 150.00, TSLA at 700.00, GOOGL at 2800.00.
    pub fn new() -> Self {
        let mut prices = HashMap::new();
        prices.insert("AAPL".to_string(), dec!(150.00));
        prices.insert("TSLA".to_string(), dec!(700.00));
        prices.insert("GOOGL".to_string(), dec!(2800.00));
        StaticPriceOracle { prices }
    }

    /// Create an oracle from an explicit symbol/price table
    pub fn with_prices(prices: HashMap<String, Decimal>) -> Self {
        StaticPriceOracle { prices }
    }
}

impl Default for StaticPriceOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceOracle for StaticPriceOracle {
    fn price(&self, symbol: &str) -> Decimal {
        self.prices.get(symbol).copied().unwrap_or(Decimal::ZERO)
    }
}
