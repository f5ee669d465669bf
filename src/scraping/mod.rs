// Quote scraping module - marker-based extraction and the Yahoo page fetcher

pub mod marker;
pub mod yahoo;

use crate::error::ExtractError;
use crate::store::QuoteRecord;

/// Seam between a fetched page body and the quote log.
///
/// Implementations are pure text transformations: they receive the already
/// validated response body plus the requested symbol and either produce a
/// timestamped record or a typed failure. Swapping in a structured HTML
/// parser later means implementing this trait; the log store is untouched.
pub trait QuoteExtractor {
    fn extract(&self, body: &str, symbol: &str) -> Result<QuoteRecord, ExtractError>;
}

pub use marker::MarkerExtractor;
