//! Anchor-based quote extraction.
//!
//! Yahoo's quote page wraps the price in a span carrying a stable test id,
//! and that attribute text is the only anchor reliable enough to scrape
//! against without a DOM parser. Extraction is one forward pass over the
//! body's lines with no backtracking.

use tracing::debug;

use crate::error::ExtractError;
use crate::scraping::QuoteExtractor;
use crate::store::QuoteRecord;

/// Opening anchor for the price value. External contract with the page
/// markup; a site redesign breaks this silently.
pub const PRICE_MARKER: &str = "data-testid=\"qsp-price\">";

/// Closing tag ending the price fragment. The page closes it one character
/// after the numeric text, so extraction must drop exactly one trailing
/// character or the value gains a stray delimiter.
pub const PRICE_END: &str = "</span>";

/// Marker-based extractor for Yahoo quote pages.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkerExtractor;

impl QuoteExtractor for MarkerExtractor {
    fn extract(&self, body: &str, symbol: &str) -> Result<QuoteRecord, ExtractError> {
        let (line, start) = body
            .lines()
            .find_map(|line| {
                line.find(PRICE_MARKER)
                    .map(|at| (line, at + PRICE_MARKER.len()))
            })
            .ok_or(ExtractError::MarkerNotFound)?;

        let fragment = &line[start..];
        let end = fragment
            .find(PRICE_END)
            .ok_or(ExtractError::MalformedFragment)?;

        // One delimiter character sits between the price text and the
        // closing tag; drop it. A closing tag flush against the marker
        // leaves nothing to drop and means the fragment is not a price.
        let raw = &fragment[..end];
        let Some((cut, _)) = raw.char_indices().last() else {
            return Err(ExtractError::MalformedFragment);
        };
        let quote = &raw[..cut];
        if quote.is_empty() {
            return Err(ExtractError::MalformedFragment);
        }

        debug!("Extracted quote '{}' for {}", quote, symbol);
        Ok(QuoteRecord::now(symbol, quote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = concat!(
        "<!DOCTYPE html>\n",
        "<html><head><title>AAPL stock price</title></head>\n",
        "<body><div class=\"container\">\n",
        "<span class=\"price-label\">At close:</span>\n",
        "<fin-streamer><span class=\"base\" data-testid=\"qsp-price\">182.52 </span></fin-streamer>\n",
        "<span data-testid=\"qsp-price-change\">+1.32 </span>\n",
        "</div></body></html>\n",
    );

    #[test]
    fn test_extracts_price_text_only() {
        let record = MarkerExtractor.extract(PAGE, "aapl").unwrap();
        assert_eq!(record.quote, "182.52");
        assert_eq!(record.symbol, "AAPL");
    }

    #[test]
    fn test_marker_mid_line_is_found() {
        let body = format!("prefix {}999.99x{} suffix", PRICE_MARKER, PRICE_END);
        let record = MarkerExtractor.extract(&body, "MSFT").unwrap();
        assert_eq!(record.quote, "999.99");
    }

    #[test]
    fn test_missing_marker_is_reported() {
        let body = "<html><body>nothing to see here</body></html>";
        let err = MarkerExtractor.extract(body, "AAPL").unwrap_err();
        assert_eq!(err, ExtractError::MarkerNotFound);
    }

    #[test]
    fn test_missing_closing_tag_is_malformed() {
        let body = format!("{}182.52 and the line just ends", PRICE_MARKER);
        let err = MarkerExtractor.extract(&body, "AAPL").unwrap_err();
        assert_eq!(err, ExtractError::MalformedFragment);
    }

    #[test]
    fn test_closing_tag_flush_against_marker_is_malformed() {
        let body = format!("{}{}", PRICE_MARKER, PRICE_END);
        let err = MarkerExtractor.extract(&body, "AAPL").unwrap_err();
        assert_eq!(err, ExtractError::MalformedFragment);
    }

    #[test]
    fn test_delimiter_only_fragment_is_malformed() {
        // One character between marker and closing tag trims to nothing
        let body = format!("{} {}", PRICE_MARKER, PRICE_END);
        let err = MarkerExtractor.extract(&body, "AAPL").unwrap_err();
        assert_eq!(err, ExtractError::MalformedFragment);
    }

    #[test]
    fn test_closing_tag_before_marker_is_ignored() {
        let body = format!("</span> noise {}55.10 {}", PRICE_MARKER, PRICE_END);
        let record = MarkerExtractor.extract(&body, "AAPL").unwrap();
        assert_eq!(record.quote, "55.10");
    }

    #[test]
    fn test_first_marker_line_wins() {
        let body = format!(
            "{}11.11 {}\n{}22.22 {}\n",
            PRICE_MARKER, PRICE_END, PRICE_MARKER, PRICE_END
        );
        let record = MarkerExtractor.extract(&body, "AAPL").unwrap();
        assert_eq!(record.quote, "11.11");
    }

    #[test]
    fn test_multibyte_delimiter_is_trimmed_without_panic() {
        let body = format!("{}182.52\u{00a0}{}", PRICE_MARKER, PRICE_END);
        let record = MarkerExtractor.extract(&body, "AAPL").unwrap();
        assert_eq!(record.quote, "182.52");
    }
}
