//! Content hashing for Seam.
//!
//! Streams files through SHA-256 in fixed-size chunks so memory use stays
//! O(1), optionally tee-writing each chunk to a destination (raw or
//! zstd-compressed). The digest doubles as the storage key for the
//! surrounding system; this crate never decides where content is stored.
//!
//! All crypto operations wrap established libraries — no custom
//! cryptography.
//!
//! # Key Types
//!
//! - [`ContentHasher`] — Streaming SHA-256 hasher with tee support
//! - [`HashError`] — I/O failures (fatal, propagated, never retried)

pub mod error;
pub mod hasher;

pub use error::{HashError, HashResult};
pub use hasher::ContentHasher;
