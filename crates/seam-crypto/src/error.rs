use thiserror::Error;

/// Errors from hashing operations.
///
/// I/O failures are fatal: a partial read never yields a valid-looking
/// digest.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for hashing results.
pub type HashResult<T> = Result<T, HashError>;
