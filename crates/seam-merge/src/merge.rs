//! Top-level merge entry points.
//!
//! Wires the text loader, line differ, block builder, and resolver
//! together. Old/their text is the diff baseline; new/mine text supplies
//! the changes being merged onto it.

use std::path::Path;

use seam_diff::diff_lines;
use seam_text::{load_text, load_text_file};

use crate::block::MergeBlock;
use crate::builder::build_blocks;
use crate::error::MergeResult;
use crate::resolver::{ConflictDecider, ConflictPolicy, MergeOperation, MergeResolver};

/// Merge two text buffers into final merged bytes.
///
/// Pure and synchronous; the only suspension point is `decider`, consulted
/// under [`ConflictPolicy::Ask`]. Output uses mine's EOL style when known
/// (theirs', then LF, otherwise) and mine's detected encoding.
pub fn merge_bytes(
    theirs: &[u8],
    mine: &[u8],
    operation: MergeOperation,
    policy: ConflictPolicy,
    decider: Option<&mut dyn ConflictDecider>,
) -> Vec<u8> {
    let (_, their_eol, their_lines) = load_text(theirs);
    let (my_encoding, my_eol, my_lines) = load_text(mine);

    let diff = diff_lines(&their_lines, &my_lines);
    let blocks = build_blocks(&diff);

    let mut resolver = match decider {
        Some(decider) => MergeResolver::with_decider(operation, policy, decider),
        None => MergeResolver::new(operation, policy),
    };
    resolver.resolve(&blocks, my_encoding, my_eol, their_eol)
}

/// Compute the raw block sequence without resolving it.
///
/// For callers that want to render a diff without committing to a
/// resolution.
pub fn diff_blocks(theirs: &[u8], mine: &[u8]) -> Vec<MergeBlock> {
    let (_, _, their_lines) = load_text(theirs);
    let (_, _, my_lines) = load_text(mine);
    build_blocks(&diff_lines(&their_lines, &my_lines))
}

/// Merge two files by path. I/O failures propagate; output is never
/// partial.
pub fn merge_files(
    their_path: impl AsRef<Path>,
    my_path: impl AsRef<Path>,
    operation: MergeOperation,
    policy: ConflictPolicy,
    decider: Option<&mut dyn ConflictDecider>,
) -> MergeResult<Vec<u8>> {
    let (_, their_eol, their_lines) = load_text_file(their_path)?;
    let (my_encoding, my_eol, my_lines) = load_text_file(my_path)?;

    let diff = diff_lines(&their_lines, &my_lines);
    let blocks = build_blocks(&diff);

    let mut resolver = match decider {
        Some(decider) => MergeResolver::with_decider(operation, policy, decider),
        None => MergeResolver::new(operation, policy),
    };
    Ok(resolver.resolve(&blocks, my_encoding, my_eol, their_eol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;

    #[test]
    fn their_insertion_survives_under_both() {
        let theirs = b"a\nx\nb\n";
        let mine = b"a\nb\n";
        let merged = merge_bytes(
            theirs,
            mine,
            MergeOperation::Both,
            ConflictPolicy::PreferMine,
            None,
        );
        assert_eq!(merged, b"a\nx\nb\n");
    }

    #[test]
    fn my_insertion_survives_under_both() {
        let theirs = b"a\nb\n";
        let mine = b"a\nx\nb\n";
        let merged = merge_bytes(
            theirs,
            mine,
            MergeOperation::Both,
            ConflictPolicy::PreferMine,
            None,
        );
        assert_eq!(merged, b"a\nx\nb\n");
    }

    #[test]
    fn conflicting_line_edit_follows_policy() {
        let theirs = b"v2\n";
        let mine = b"v1\n";
        let merged = merge_bytes(
            theirs,
            mine,
            MergeOperation::Both,
            ConflictPolicy::PreferTheirs,
            None,
        );
        assert_eq!(merged, b"v2\n");
        let merged = merge_bytes(
            theirs,
            mine,
            MergeOperation::Both,
            ConflictPolicy::PreferMine,
            None,
        );
        assert_eq!(merged, b"v1\n");
    }

    #[test]
    fn identical_inputs_roundtrip_for_every_operation_and_policy() {
        let text = b"alpha\nbeta\ngamma\n";
        for operation in [
            MergeOperation::InsertOnly,
            MergeOperation::RemoveOnly,
            MergeOperation::Both,
        ] {
            for policy in [
                ConflictPolicy::PreferTheirs,
                ConflictPolicy::PreferMine,
                ConflictPolicy::Ask,
                ConflictPolicy::RecurseNextLevel,
            ] {
                let merged = merge_bytes(text, text, operation, policy, None);
                assert_eq!(merged, text, "{operation:?}/{policy:?}");
            }
        }
    }

    #[test]
    fn replace_under_both_emits_both_sides() {
        let theirs = b"p\nq\ntail\n";
        let mine = b"r\ns\ntail\n";
        let merged = merge_bytes(
            theirs,
            mine,
            MergeOperation::Both,
            ConflictPolicy::PreferMine,
            None,
        );
        assert_eq!(merged, b"p\nq\nr\ns\ntail\n");
    }

    #[test]
    fn merged_output_uses_my_eol() {
        let theirs = b"a\nv2\n";
        let mine = b"a\r\nv1\r\n";
        let merged = merge_bytes(
            theirs,
            mine,
            MergeOperation::Both,
            ConflictPolicy::PreferMine,
            None,
        );
        assert_eq!(merged, b"a\r\nv1\r\n");
    }

    #[test]
    fn empty_inputs_merge_to_empty_output() {
        let merged = merge_bytes(
            b"",
            b"",
            MergeOperation::Both,
            ConflictPolicy::PreferTheirs,
            None,
        );
        assert!(merged.is_empty());
    }

    #[test]
    fn diff_blocks_exposes_raw_sequence() {
        let blocks = diff_blocks(b"a\nv2\nb\n", b"a\nv1\nb\n");
        let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![BlockKind::Keep, BlockKind::Modify, BlockKind::Keep]
        );
        assert_eq!(blocks[1].lines, vec!["v1"]);
        assert_eq!(blocks[1].replaced_lines(), ["v2"]);
    }

    #[test]
    fn merge_files_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let their_path = dir.path().join("theirs.txt");
        let my_path = dir.path().join("mine.txt");
        std::fs::write(&their_path, b"a\nx\nb\n").unwrap();
        std::fs::write(&my_path, b"a\nb\n").unwrap();
        let merged = merge_files(
            &their_path,
            &my_path,
            MergeOperation::Both,
            ConflictPolicy::PreferMine,
            None,
        )
        .unwrap();
        assert_eq!(merged, b"a\nx\nb\n");
    }

    #[test]
    fn merge_files_propagates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.txt");
        std::fs::write(&present, b"x\n").unwrap();
        let missing = dir.path().join("missing.txt");
        let result = merge_files(
            &missing,
            &present,
            MergeOperation::Both,
            ConflictPolicy::PreferTheirs,
            None,
        );
        assert!(result.is_err());
    }
}
