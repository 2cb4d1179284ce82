use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Failed to read journal file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Journal file {} is not a valid list of trades: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
