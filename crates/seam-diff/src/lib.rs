//! Diff engine for Seam.
//!
//! Computes classified differences between two snapshots of a file tree,
//! and tagged line-by-line diffs between two text versions for the merge
//! crate to consume.
//!
//! # Key Types
//!
//! - [`ChangeSet`] / [`compute_changes`] — Snapshot diff (additions/deletions/modifications)
//! - [`DiffLine`] / [`diff_lines`] — Tagged line diff with intra-line marker rows

pub mod line_diff;
pub mod snapshot_diff;

pub use line_diff::{diff_lines, DiffLine};
pub use snapshot_diff::{compute_changes, ChangeSet};
