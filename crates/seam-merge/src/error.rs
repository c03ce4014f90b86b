use thiserror::Error;

/// Errors from merge operations.
///
/// Encoding degradation and unresolved conflicts are warnings, not errors;
/// only I/O on file-based entry points can fail. Output is never partial:
/// callers get full merged bytes or an error.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("text loading failed: {0}")]
    Text(#[from] seam_text::TextError),
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
