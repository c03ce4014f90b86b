//! Text handling for Seam.
//!
//! Guesses the encoding and end-of-line style of raw byte buffers and turns
//! them into line sequences the diff and merge crates operate on. Detection
//! is a documented heuristic, not a correctness guarantee: decoding always
//! succeeds, degrading to replacement characters rather than failing.
//!
//! # Key Types
//!
//! - [`TextEncoding`] — Detected text encoding, with decode/encode support
//! - [`Eol`] — End-of-line style (CRLF, LF, CR, or indeterminate)
//! - [`load_text`] / [`load_text_file`] — Decode bytes into lines
//! - [`TextError`] — I/O errors from file loading

pub mod encoding;
pub mod eol;
pub mod error;
pub mod loader;

pub use encoding::TextEncoding;
pub use eol::{detect_eol, Eol};
pub use error::{TextError, TextResult};
pub use loader::{join_lines, load_text, load_text_file};
