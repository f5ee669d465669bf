//! Yahoo Finance quote page fetcher.
//!
//! Thin transport layer: builds the page URL, performs the GET, and
//! validates the response status so the extractor downstream only ever sees
//! the body of a successful response.

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, StatusCode};
use tracing::info;

/// Quote pages live under the Canadian Yahoo Finance host; the marker
/// extractor is anchored to this host's markup.
pub const BASE_URL: &str = "https://ca.finance.yahoo.com/quote/";

// The page refuses the default client user agent.
const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; U; Intel Mac OS X 10.4; en-US; rv:1.9.2.2) Gecko/20100316 Firefox/3.6.2";

/// Build the quote page URL for a symbol.
pub fn quote_url(symbol: &str) -> String {
    format!("{}{}", BASE_URL, symbol.trim())
}

/// Fetch the quote page body for a symbol.
///
/// A 404 means the symbol has no quote page; any other non-success status
/// or connection failure is a transport error, fatal for this one fetch
/// only.
pub async fn fetch_quote_page(symbol: &str) -> Result<String> {
    let url = quote_url(symbol);
    info!("Fetching quote page {}", url);

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(&url)
        .send()
        .await
        .context("Failed to connect to Yahoo Finance")?;

    if response.status() == StatusCode::NOT_FOUND {
        return Err(anyhow!(
            "No quote page for '{}', check the symbol spelling",
            symbol.trim()
        ));
    }

    if !response.status().is_success() {
        return Err(anyhow!(
            "Yahoo Finance returned error status: {}",
            response.status()
        ));
    }

    response
        .text()
        .await
        .context("Failed to read quote page body")
}
