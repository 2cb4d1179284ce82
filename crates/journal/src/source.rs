use crate::error::JournalError;
use core_types::TradeRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Supplies a complete snapshot of the journal's trades.
///
/// Analytics never fetch trades on their own; callers obtain a snapshot from a
/// `TradeSource` and pass it to the engine.
pub trait TradeSource {
    fn fetch_trades(&self) -> Result<Vec<TradeRecord>, JournalError>;
}

/// Reads trades from a JSON file holding an array of trade records.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TradeSource for JsonFileSource {
    fn fetch_trades(&self) -> Result<Vec<TradeRecord>, JournalError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| JournalError::Io {
            path: self.path.clone(),
            source,
        })?;
        let trades: Vec<TradeRecord> =
            serde_json::from_str(&raw).map_err(|source| JournalError::Parse {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!(path = %self.path.display(), trades = trades.len(), "Loaded journal.");
        Ok(trades)
    }
}

/// A fixed set of trades held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    trades: Vec<TradeRecord>,
}

impl InMemorySource {
    pub fn new(trades: Vec<TradeRecord>) -> Self {
        Self { trades }
    }
}

impl TradeSource for InMemorySource {
    fn fetch_trades(&self) -> Result<Vec<TradeRecord>, JournalError> {
        Ok(self.trades.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::{Outcome, Session};

    #[test]
    fn reads_a_journal_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("trades.json");
        fs::write(
            &path,
            r#"[
                {"entry_date": "2025-01-06", "session_label": "London", "outcome": "Winning",
                 "risk_multiple": 2, "risk_amount": 200, "trader_name": "Ana"},
                {"entry_date": "2025-01-07", "session_label": "New York"}
            ]"#,
        )
        .unwrap();

        let trades = JsonFileSource::new(&path).fetch_trades().unwrap();
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].outcome, Some(Outcome::Winning));
        assert_eq!(trades[1].session(), Some(Session::NewYork));
        assert!(trades[1].is_open());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let source = JsonFileSource::new(dir.path().join("nope.json"));
        assert!(matches!(source.fetch_trades(), Err(JournalError::Io { .. })));
    }

    #[test]
    fn malformed_record_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("trades.json");
        fs::write(&path, r#"[{"session_label": "Asia"}]"#).unwrap();

        let err = JsonFileSource::new(&path).fetch_trades().unwrap_err();
        assert!(matches!(err, JournalError::Parse { .. }));
        assert!(err.to_string().contains("trades.json"));
    }

    #[test]
    fn in_memory_source_returns_a_snapshot() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let source = InMemorySource::new(vec![TradeRecord::new(date, "Asia")]);
        assert_eq!(source.fetch_trades().unwrap().len(), 1);
    }
}
