//! Foundation types for Seam.
//!
//! This crate provides the identity and snapshot types shared by the diff,
//! hash, and merge crates. Every other Seam crate depends on `seam-types`.
//!
//! # Key Types
//!
//! - [`Digest`] — Content digest (SHA-256 hash) used as a storage key
//! - [`PathInfo`] — Snapshot record of a tracked file's identity at a point in time
//! - [`TypeError`] — Errors from digest parsing

pub mod digest;
pub mod error;
pub mod path_info;

pub use digest::Digest;
pub use error::TypeError;
pub use path_info::PathInfo;
