//! Error types used throughout the workspace

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Calspan
///
/// The difference engine itself is total over valid timestamps; errors
/// originate from collaborators (a timestamp provider that cannot answer a
/// calendar query) or from malformed caller input, and are propagated
/// unchanged.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CalspanError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Calspan operations
pub type Result<T> = std::result::Result<T, CalspanError>;
