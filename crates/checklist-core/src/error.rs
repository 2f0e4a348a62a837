//! Error types.

use thiserror::Error;

/// Import of a line-delimited file failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// No non-blank line in the input
    #[error("File is empty or invalid.")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid checklist config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed item {0} is blank")]
    BlankSeedItem(usize),
}
