//! Error types for menu model construction

use thiserror::Error;

/// Errors raised while loading or validating a menu model
///
/// Runtime disclosure operations never fail; every variant here is a
/// construction-time failure surfaced before anything is rendered.
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Duplicate group id '{id}' (derived from title '{title}')")]
    DuplicateGroupId { id: String, title: String },

    #[error("Group title '{0}' does not yield a usable id")]
    EmptyGroupId(String),

    #[error("Invalid link in group '{group}': {reason}")]
    InvalidLink { group: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for menu model operations
pub type MenuResult<T> = Result<T, MenuError>;
