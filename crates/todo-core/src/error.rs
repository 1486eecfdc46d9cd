//! List errors

use thiserror::Error;

/// Common result type for list operations
pub type ListResult<T> = Result<T, ListError>;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("item text is empty after trimming")]
    EmptyText,

    #[error("invalid list config: {0}")]
    Config(#[from] serde_json::Error),
}
