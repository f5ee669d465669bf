//! Fetch-and-log composition root.

use anyhow::{Context, Result};
use tracing::info;

use crate::scraping::{yahoo, MarkerExtractor, QuoteExtractor};
use crate::store::{QuoteRecord, QuoteStore};

/// Ties the page fetcher, the extractor, and the log store together.
///
/// The extractor is a type parameter so the marker scan can be swapped for
/// another page-reading strategy without touching the store.
pub struct QuoteTracker<E: QuoteExtractor = MarkerExtractor> {
    store: QuoteStore,
    extractor: E,
}

impl QuoteTracker<MarkerExtractor> {
    pub fn new(store: QuoteStore) -> Self {
        Self::with_extractor(store, MarkerExtractor)
    }
}

impl<E: QuoteExtractor> QuoteTracker<E> {
    pub fn with_extractor(store: QuoteStore, extractor: E) -> Self {
        Self { store, extractor }
    }

    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// One fetch, one extract, one append.
    pub async fn fetch_and_log(&self, symbol: &str) -> Result<QuoteRecord> {
        let body = yahoo::fetch_quote_page(symbol).await?;
        self.log_body(&body, symbol)
    }

    /// Extract a quote from an already fetched body and append the record.
    ///
    /// Nothing is appended when extraction fails, so a redesigned page
    /// never puts a bogus record into the log.
    pub fn log_body(&self, body: &str, symbol: &str) -> Result<QuoteRecord> {
        let record = self
            .extractor
            .extract(body, symbol)
            .with_context(|| format!("Failed to extract a quote for '{}'", symbol.trim()))?;
        self.store
            .append(record.clone())
            .context("Quote extracted but could not be logged")?;
        info!("Logged {} at {}", record.symbol, record.quote);
        Ok(record)
    }

    pub fn list_all(&self) -> Vec<QuoteRecord> {
        self.store.read_all()
    }

    pub fn list_by_symbol(&self, symbol: &str) -> Vec<QuoteRecord> {
        self.store.read_by_symbol(symbol)
    }

    pub fn clear_log(&self) -> Result<()> {
        self.store.clear()
    }
}
