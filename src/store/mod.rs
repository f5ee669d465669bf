// Log store module - durable quote log over one JSON artifact

pub mod models;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub use models::QuoteRecord;

/// Get the default log artifact path (~/.quotelog/log.json)
pub fn get_default_log_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let quotelog_dir = PathBuf::from(home).join(".quotelog");

    // Create directory if it doesn't exist
    fs::create_dir_all(&quotelog_dir).context("Failed to create .quotelog directory")?;

    Ok(quotelog_dir.join("log.json"))
}

/// Durable quote log.
///
/// The whole record sequence lives in a single JSON artifact that is
/// rewritten on every mutation; records are only ever appended or discarded
/// wholesale by `clear`. Reads never fail: an absent or unreadable artifact
/// is an empty log. Concurrent writers are not supported.
pub struct QuoteStore {
    path: PathBuf,
}

impl QuoteStore {
    /// Open a store over the given artifact path. The artifact itself is
    /// created lazily on the first append or clear.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open a store at the default location under `$HOME/.quotelog`.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(get_default_log_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, rewriting the whole artifact.
    pub fn append(&self, record: QuoteRecord) -> Result<()> {
        let mut records = self.read_all();
        records.push(record);
        self.write_records(&records)?;
        info!("Appended quote record ({} total)", records.len());
        Ok(())
    }

    /// All records in insertion order. An absent, empty, or
    /// undeserializable artifact reads as an empty log.
    pub fn read_all(&self) -> Vec<QuoteRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        if raw.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "Quote log at {} is unreadable, treating it as empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Records whose symbol matches case-insensitively, in insertion order.
    pub fn read_by_symbol(&self, symbol: &str) -> Vec<QuoteRecord> {
        let wanted = symbol.trim();
        self.read_all()
            .into_iter()
            .filter(|r| r.symbol.eq_ignore_ascii_case(wanted))
            .collect()
    }

    /// Empty the log. The artifact is replaced with an empty sequence, not
    /// deleted, so later reads return empty rather than "missing".
    pub fn clear(&self) -> Result<()> {
        self.write_records(&[])?;
        info!("Quote log cleared");
        Ok(())
    }

    // Writes go through a sibling temp file and a rename, so a failed write
    // leaves the prior artifact intact.
    fn write_records(&self, records: &[QuoteRecord]) -> Result<()> {
        let payload =
            serde_json::to_string_pretty(records).context("Failed to serialize quote log")?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, payload)
            .with_context(|| format!("Failed to write quote log at {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace quote log at {}", self.path.display()))?;
        Ok(())
    }
}
