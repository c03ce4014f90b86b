use serde::{Deserialize, Serialize};

use crate::digest::Digest;

/// Snapshot record of a tracked file's identity at a point in time.
///
/// Produced by the surrounding tree-walker, consumed by change detection.
/// A record with `size == None` is a tombstone: it marks the path as
/// deleted in the snapshot it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathInfo {
    /// Opaque path identifier supplied by the tree-walker.
    pub namehash: String,
    /// File size in bytes. `None` marks a deletion tombstone.
    pub size: Option<u64>,
    /// Last modification time (seconds since the epoch).
    pub mtime: i64,
    /// Content digest, when the walker has computed one.
    pub hash: Option<Digest>,
}

impl PathInfo {
    /// Create a record for a live file.
    pub fn new(namehash: impl Into<String>, size: u64, mtime: i64, hash: Option<Digest>) -> Self {
        Self {
            namehash: namehash.into(),
            size: Some(size),
            mtime,
            hash,
        }
    }

    /// Create a deletion tombstone for a path.
    pub fn tombstone(namehash: impl Into<String>, mtime: i64) -> Self {
        Self {
            namehash: namehash.into(),
            size: None,
            mtime,
            hash: None,
        }
    }

    /// Returns `true` if this record marks a deletion.
    pub fn is_tombstone(&self) -> bool {
        self.size.is_none()
    }
}
