//! Merge engine for Seam.
//!
//! Folds a tagged line diff into classified contiguous blocks, then
//! reduces the block sequence into merged output under a chosen operation
//! and conflict policy. Single-threaded and synchronous: the only
//! suspension point is the injected [`ConflictDecider`], so embedders
//! control blocking semantics themselves.
//!
//! # Key Types
//!
//! - [`MergeBlock`] / [`build_blocks`] — Classified contiguous line runs
//! - [`ChangeRange`] — Parsed intra-line marker row
//! - [`MergeResolver`] / [`MergeOperation`] / [`ConflictPolicy`] — Block reduction
//! - [`ConflictDecider`] / [`Resolution`] — Injected conflict decisions
//! - [`merge_bytes`] / [`diff_blocks`] — Top-level entry points

pub mod block;
pub mod builder;
pub mod error;
pub mod marker;
pub mod merge;
pub mod resolver;

pub use block::{BlockKind, MergeBlock};
pub use builder::build_blocks;
pub use error::{MergeError, MergeResult};
pub use marker::{ChangeRange, RangeKind};
pub use merge::{diff_blocks, merge_bytes, merge_files};
pub use resolver::{ConflictDecider, ConflictPolicy, MergeOperation, MergeResolver, Resolution};
