use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while loading an export package or computing its statistics
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no conversations found in the export")]
    EmptyInput,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
