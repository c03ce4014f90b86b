use thiserror::Error;

/// Errors from text loading.
#[derive(Debug, Error)]
pub enum TextError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for text results.
pub type TextResult<T> = Result<T, TextError>;
