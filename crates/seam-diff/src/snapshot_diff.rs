//! Snapshot-level diff: classify two path maps into a change set.
//!
//! Pure and total over two `path -> PathInfo` maps; no I/O. The hash
//! fields are opaque here — whoever built the snapshots decided how they
//! were computed.

use std::collections::BTreeMap;

use seam_types::PathInfo;
use serde::{Deserialize, Serialize};

/// Classified difference between two snapshots.
///
/// The three key sets are pairwise disjoint; [`compute_changes`] checks
/// this and panics on violation, since a breach means the classification
/// logic itself is broken.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    /// Paths new in the snapshot, or resurrected from a tombstone.
    pub additions: BTreeMap<String, PathInfo>,
    /// Paths whose new record is a tombstone.
    pub deletions: BTreeMap<String, PathInfo>,
    /// Paths whose size, mtime, or hash changed.
    pub modifications: BTreeMap<String, PathInfo>,
}

impl ChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no changes of any kind.
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty() && self.modifications.is_empty()
    }

    /// Total number of changed paths.
    pub fn len(&self) -> usize {
        self.additions.len() + self.deletions.len() + self.modifications.len()
    }

    /// Panic if any path appears in more than one category.
    pub fn assert_disjoint(&self) {
        for path in self.additions.keys() {
            assert!(
                !self.deletions.contains_key(path) && !self.modifications.contains_key(path),
                "change set invariant violated: {path} classified more than once"
            );
        }
        for path in self.deletions.keys() {
            assert!(
                !self.modifications.contains_key(path),
                "change set invariant violated: {path} classified more than once"
            );
        }
    }
}

/// Compare two snapshots and classify every changed path.
///
/// - A path in `new` whose record is a tombstone is a deletion.
/// - A path whose `old` record is a tombstone but whose `new` record is
///   concrete is an addition (resurrection).
/// - A path present in both with differing size, mtime, or hash is a
///   modification; the new record is kept as the value.
/// - A path in `new` absent from `old` is an addition.
/// - A path in `old` entirely absent from `new` is skipped: deletions are
///   expected to arrive as tombstone records, not missing keys.
pub fn compute_changes(
    old: &BTreeMap<String, PathInfo>,
    new: &BTreeMap<String, PathInfo>,
) -> ChangeSet {
    let mut changes = ChangeSet::new();

    for (path, old_info) in old {
        let Some(new_info) = new.get(path) else {
            continue;
        };
        if new_info.is_tombstone() {
            changes.deletions.insert(path.clone(), new_info.clone());
        } else if old_info.is_tombstone() {
            changes.additions.insert(path.clone(), new_info.clone());
        } else if old_info.size != new_info.size
            || old_info.mtime != new_info.mtime
            || old_info.hash != new_info.hash
        {
            changes.modifications.insert(path.clone(), new_info.clone());
        }
    }

    for (path, new_info) in new {
        if !old.contains_key(path) {
            changes.additions.insert(path.clone(), new_info.clone());
        }
    }

    changes.assert_disjoint();
    changes
}
