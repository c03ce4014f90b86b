//! Merge block model.

use serde::{Deserialize, Serialize};

use crate::marker::ChangeRange;

/// Classification of a contiguous run of lines in a merge block sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// Lines present in both versions.
    Keep,
    /// Lines present only in the new version.
    Insert,
    /// Lines present only in the old version.
    Remove,
    /// New lines superseding an equal-length removed run.
    Replace,
    /// A single-line replacement carrying intra-line change detail.
    Modify,
    /// Reserved for rename/move detection; never produced.
    Move,
}

/// A contiguous, classified run of lines produced while diffing two texts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeBlock {
    /// The block classification.
    pub kind: BlockKind,
    /// The lines this block contributes.
    pub lines: Vec<String>,
    /// Starting output line number.
    pub line: usize,
    /// For `Replace`/`Modify`: the removed block this one supersedes.
    pub replaces: Option<Box<MergeBlock>>,
    /// For `Modify`: intra-line change detail from the marker row.
    pub changes: Option<ChangeRange>,
}

impl MergeBlock {
    /// Create a plain block with no supersession or intra-line detail.
    pub fn new(kind: BlockKind, lines: Vec<String>, line: usize) -> Self {
        Self {
            kind,
            lines,
            line,
            replaces: None,
            changes: None,
        }
    }

    /// Number of lines in this block.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the block carries no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines of the superseded block, if any.
    pub fn replaced_lines(&self) -> &[String] {
        self.replaces.as_ref().map(|b| b.lines.as_slice()).unwrap_or(&[])
    }
}
