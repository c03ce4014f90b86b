//! Folds a tagged line diff into classified merge blocks.

use seam_diff::DiffLine;

use crate::block::{BlockKind, MergeBlock};
use crate::marker::ChangeRange;

/// Fold a tagged line diff into a block sequence.
///
/// Consecutive same-tag lines accumulate into one block, flushed on tag
/// change as `Keep`, `Remove`, or `Insert`. An `Insert` flush directly
/// after a `Remove` block of equal length folds the pair: into `Modify`
/// when the block is a single line with a trailing marker row, otherwise
/// into `Replace`. Either way `replaces` points at the removed block.
/// End of input forces a final flush.
pub fn build_blocks(diff: &[DiffLine]) -> Vec<MergeBlock> {
    let mut builder = Builder::default();
    for entry in diff {
        match entry {
            DiffLine::Same(line) => builder.push_line(BlockKind::Keep, line),
            DiffLine::OldOnly(line) => builder.push_line(BlockKind::Remove, line),
            DiffLine::NewOnly(line) => builder.push_line(BlockKind::Insert, line),
            DiffLine::Marker(row) => builder.pending_marker = Some(row.clone()),
        }
    }
    builder.flush();
    builder.blocks
}

#[derive(Default)]
struct Builder {
    blocks: Vec<MergeBlock>,
    buf: Vec<String>,
    tag: Option<BlockKind>,
    pending_marker: Option<String>,
    next_line: usize,
}

impl Builder {
    fn push_line(&mut self, kind: BlockKind, line: &str) {
        if self.tag != Some(kind) {
            self.flush();
            self.tag = Some(kind);
        }
        self.buf.push(line.to_owned());
    }

    fn flush(&mut self) {
        let marker = self.pending_marker.take();
        let Some(kind) = self.tag.take() else {
            return;
        };
        let lines = std::mem::take(&mut self.buf);
        if lines.is_empty() {
            return;
        }

        if kind == BlockKind::Insert && self.previous_is_equal_length_remove(lines.len()) {
            if let Some(removed) = self.blocks.pop() {
                self.next_line = removed.line;
                let folded = match marker {
                    Some(row) if lines.len() == 1 => MergeBlock {
                        kind: BlockKind::Modify,
                        lines,
                        line: 0,
                        replaces: Some(Box::new(removed)),
                        changes: Some(ChangeRange::parse(&row)),
                    },
                    _ => MergeBlock {
                        kind: BlockKind::Replace,
                        lines,
                        line: 0,
                        replaces: Some(Box::new(removed)),
                        changes: None,
                    },
                };
                self.push_block(folded);
                return;
            }
        }

        self.push_block(MergeBlock::new(kind, lines, 0));
    }

    fn previous_is_equal_length_remove(&self, len: usize) -> bool {
        matches!(
            self.blocks.last(),
            Some(prev) if prev.kind == BlockKind::Remove && prev.lines.len() == len
        )
    }

    fn push_block(&mut self, mut block: MergeBlock) {
        block.line = self.next_line;
        self.next_line += block.lines.len();
        tracing::debug!(
            kind = ?block.kind,
            line = block.line,
            len = block.lines.len(),
            "flushed merge block"
        );
        self.blocks.push(block);
    }
}
