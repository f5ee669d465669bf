//! Quote log record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged observation of a symbol's price at a point in time.
///
/// The quote is kept as the exact text scraped from the page; parsing it to
/// a number would risk locale and precision loss for a value that is only
/// ever displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub symbol: String,
    pub quote: String,
    pub timestamp: DateTime<Utc>,
}

impl QuoteRecord {
    /// Build a record, normalizing the symbol to trimmed uppercase.
    pub fn new(symbol: &str, quote: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            symbol: symbol.trim().to_uppercase(),
            quote: quote.into(),
            timestamp,
        }
    }

    /// Build a record stamped with the moment of retrieval.
    pub fn now(symbol: &str, quote: impl Into<String>) -> Self {
        Self::new(symbol, quote, Utc::now())
    }

    /// Hour and date without sub-second noise, e.g. `14:03:07 on date 2026-08-06`.
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S on date %Y-%m-%d").to_string()
    }
}

impl std::fmt::Display for QuoteRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The stock {} trading at {}$ at {}",
            self.symbol,
            self.quote,
            self.formatted_time()
        )
    }
}
