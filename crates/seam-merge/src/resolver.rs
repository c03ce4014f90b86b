//! Reduces a merge block sequence into final merged output.

use seam_text::{Eol, TextEncoding};
use serde::{Deserialize, Serialize};

use crate::block::{BlockKind, MergeBlock};
use crate::marker::RangeKind;

/// Which sides of the diff a merge applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeOperation {
    /// Apply insertions only; removed content survives.
    InsertOnly,
    /// Apply removals only; inserted content is dropped.
    RemoveOnly,
    /// Apply both sides.
    Both,
}

impl MergeOperation {
    /// Returns `true` if insertions are applied.
    pub fn permits_insert(self) -> bool {
        matches!(self, MergeOperation::InsertOnly | MergeOperation::Both)
    }

    /// Returns `true` if removals are applied.
    pub fn permits_remove(self) -> bool {
        matches!(self, MergeOperation::RemoveOnly | MergeOperation::Both)
    }
}

/// Rule for picking a winner when both sides modified the same line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictPolicy {
    /// Keep the replaced (old/their) lines.
    PreferTheirs,
    /// Keep the new (mine) lines.
    PreferMine,
    /// Suspend on the injected [`ConflictDecider`].
    Ask,
    /// Recurse into a finer-grained merge. Not implemented: degrades to a
    /// warning plus their lines.
    RecurseNextLevel,
}

/// A decision returned by a [`ConflictDecider`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Mine,
    Theirs,
    /// Requests a finer-grained merge; degrades to theirs.
    Recurse,
    /// Requests manual editing; degrades to theirs.
    Manual,
}

/// Externally injected conflict decision.
///
/// The resolver stays a pure synchronous reducer; whoever implements this
/// trait controls suspension semantics (console prompt, GUI dialog, async
/// bridge). There is no timeout or cancellation here.
pub trait ConflictDecider {
    /// Pick a side for a conflicting line pair.
    fn decide(&mut self, theirs: &[String], mine: &[String]) -> Resolution;
}

/// Reduces merge blocks under an operation and a conflict policy.
pub struct MergeResolver<'a> {
    operation: MergeOperation,
    policy: ConflictPolicy,
    decider: Option<&'a mut dyn ConflictDecider>,
}

impl<'a> MergeResolver<'a> {
    /// Create a resolver with no injected decider.
    ///
    /// Under [`ConflictPolicy::Ask`] this degrades every conflict to a
    /// warning plus their lines.
    pub fn new(operation: MergeOperation, policy: ConflictPolicy) -> Self {
        Self {
            operation,
            policy,
            decider: None,
        }
    }

    /// Create a resolver that consults `decider` under [`ConflictPolicy::Ask`].
    pub fn with_decider(
        operation: MergeOperation,
        policy: ConflictPolicy,
        decider: &'a mut dyn ConflictDecider,
    ) -> Self {
        Self {
            operation,
            policy,
            decider: Some(decider),
        }
    }

    /// Reduce a block sequence to the merged line sequence.
    pub fn resolve_lines(&mut self, blocks: &[MergeBlock]) -> Vec<String> {
        let mut out = Vec::new();
        for block in blocks {
            self.resolve_block(block, &mut out);
        }
        out
    }

    /// Reduce a block sequence to merged bytes.
    ///
    /// Lines are rejoined with mine's EOL when known, else theirs', else
    /// LF, and re-encoded with the detected encoding.
    pub fn resolve(
        &mut self,
        blocks: &[MergeBlock],
        encoding: TextEncoding,
        my_eol: Eol,
        their_eol: Eol,
    ) -> Vec<u8> {
        let lines = self.resolve_lines(blocks);
        let eol = if my_eol.is_known() {
            my_eol
        } else if their_eol.is_known() {
            their_eol
        } else {
            Eol::Lf
        };
        encoding.encode(&lines.join(eol.as_str()))
    }

    fn resolve_block(&mut self, block: &MergeBlock, out: &mut Vec<String>) {
        match block.kind {
            BlockKind::Keep => out.extend_from_slice(&block.lines),
            BlockKind::Insert => {
                if self.operation.permits_insert() {
                    out.extend_from_slice(&block.lines);
                }
            }
            // Removed runs are their content; they survive whenever the
            // operation carries insertions.
            BlockKind::Remove => {
                if self.operation.permits_insert() {
                    out.extend_from_slice(&block.lines);
                }
            }
            // Replaced lines surface when inserting, replacement lines
            // unless removal is excluded. Under `Both` this emits both
            // sides, replaced first.
            BlockKind::Replace => {
                if self.operation.permits_insert() {
                    out.extend_from_slice(block.replaced_lines());
                }
                if self.operation.permits_remove() {
                    out.extend_from_slice(&block.lines);
                }
            }
            BlockKind::Modify => self.resolve_modify(block, out),
            // Reserved; passes its lines through untouched.
            BlockKind::Move => out.extend_from_slice(&block.lines),
        }
    }

    fn resolve_modify(&mut self, block: &MergeBlock, out: &mut Vec<String>) {
        let theirs = block.replaced_lines();
        let mine = &block.lines;
        let kind = block
            .changes
            .as_ref()
            .map(|c| c.kind)
            .unwrap_or(RangeKind::Keep);

        let pick_mine = match kind {
            RangeKind::Keep => true,
            RangeKind::Insert => self.operation.permits_insert(),
            RangeKind::Remove => self.operation.permits_remove(),
            RangeKind::Modify => self.resolve_conflict(theirs, mine),
        };

        if pick_mine {
            out.extend_from_slice(mine);
        } else {
            out.extend_from_slice(theirs);
        }
    }

    /// Returns `true` when mine wins the conflict.
    fn resolve_conflict(&mut self, theirs: &[String], mine: &[String]) -> bool {
        match self.policy {
            ConflictPolicy::PreferTheirs => false,
            ConflictPolicy::PreferMine => true,
            ConflictPolicy::Ask => match &mut self.decider {
                Some(decider) => match decider.decide(theirs, mine) {
                    Resolution::Mine => true,
                    Resolution::Theirs => false,
                    Resolution::Recurse | Resolution::Manual => {
                        tracing::warn!(
                            "finer-grained conflict resolution is not implemented, keeping their lines"
                        );
                        false
                    }
                },
                None => {
                    tracing::warn!("no conflict decider injected, keeping their lines");
                    false
                }
            },
            ConflictPolicy::RecurseNextLevel => {
                tracing::warn!("recursive merge is not implemented, keeping their lines");
                false
            }
        }
    }
}
