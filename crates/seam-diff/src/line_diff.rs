//! Line-level diff: tagged line stream with intra-line marker rows.
//!
//! Built on the `similar` crate (Myers diff) at line granularity, with a
//! second char-granularity pass over single-line replacements to produce
//! the `^`/`+`/`-` marker rows the merge block builder consumes.

use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, DiffOp};

/// One element of a tagged line diff, in output order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffLine {
    /// Line present in both versions.
    Same(String),
    /// Line present only in the old version.
    OldOnly(String),
    /// Line present only in the new version.
    NewOnly(String),
    /// Intra-line marker row for the preceding line pair: `^` over
    /// changed columns, `+` over inserted columns, `-` over removed ones.
    Marker(String),
}

/// Compute a tagged line diff between two line sequences.
///
/// Deterministic and order-preserving. A replacement of exactly one old
/// line by one new line is followed by a [`DiffLine::Marker`] row; larger
/// replacements emit plain `OldOnly`/`NewOnly` runs. The marker is emitted
/// even for wholly dissimilar line pairs, so a conflicting one-line
/// rewrite carries intra-line detail downstream.
pub fn diff_lines(old: &[String], new: &[String]) -> Vec<DiffLine> {
    let ops = capture_diff_slices(Algorithm::Myers, old, new);
    let mut out = Vec::new();

    for op in ops {
        match op {
            DiffOp::Equal { old_index, len, .. } => {
                for line in &old[old_index..old_index + len] {
                    out.push(DiffLine::Same(line.clone()));
                }
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                for line in &old[old_index..old_index + old_len] {
                    out.push(DiffLine::OldOnly(line.clone()));
                }
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                for line in &new[new_index..new_index + new_len] {
                    out.push(DiffLine::NewOnly(line.clone()));
                }
            }
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                for line in &old[old_index..old_index + old_len] {
                    out.push(DiffLine::OldOnly(line.clone()));
                }
                for line in &new[new_index..new_index + new_len] {
                    out.push(DiffLine::NewOnly(line.clone()));
                }
                if old_len == 1 && new_len == 1 {
                    out.push(DiffLine::Marker(marker_row(
                        &old[old_index],
                        &new[new_index],
                    )));
                }
            }
        }
    }

    out
}

/// Build the marker row for a single-line replacement.
///
/// Columns index the new line: `^` over replaced chars, `+` over inserted
/// ones. A change that only deletes chars has nothing to mark on the new
/// line, so the row indexes the old line's deleted columns with `-`.
fn marker_row(old: &str, new: &str) -> String {
    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();
    let ops = capture_diff_slices(Algorithm::Myers, &old_chars, &new_chars);

    let mut marker = vec![' '; new_chars.len()];
    let mut deleted = Vec::new();
    for op in &ops {
        match *op {
            DiffOp::Equal { .. } => {}
            DiffOp::Insert {
                new_index, new_len, ..
            } => marker[new_index..new_index + new_len].fill('+'),
            DiffOp::Replace {
                new_index, new_len, ..
            } => marker[new_index..new_index + new_len].fill('^'),
            DiffOp::Delete {
                old_index, old_len, ..
            } => deleted.extend(old_index..old_index + old_len),
        }
    }

    if marker.iter().all(|&c| c == ' ') && !deleted.is_empty() {
        let mut old_marker = vec![' '; old_chars.len()];
        for idx in deleted {
            old_marker[idx] = '-';
        }
        return trim_row(old_marker);
    }
    trim_row(marker)
}

fn trim_row(row: Vec<char>) -> String {
    let text: String = row.into_iter().collect();
    text.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn identical_sequences_are_all_same() {
        let text = lines(&["a", "b", "c"]);
        let diff = diff_lines(&text, &text);
        assert_eq!(
            diff,
            vec![
                DiffLine::Same("a".into()),
                DiffLine::Same("b".into()),
                DiffLine::Same("c".into()),
            ]
        );
    }

    #[test]
    fn pure_insertion_tags_new_only() {
        let old = lines(&["a", "b"]);
        let new = lines(&["a", "x", "b"]);
        let diff = diff_lines(&old, &new);
        assert_eq!(
            diff,
            vec![
                DiffLine::Same("a".into()),
                DiffLine::NewOnly("x".into()),
                DiffLine::Same("b".into()),
            ]
        );
    }

    #[test]
    fn pure_deletion_tags_old_only() {
        let old = lines(&["a", "x", "b"]);
        let new = lines(&["a", "b"]);
        let diff = diff_lines(&old, &new);
        assert_eq!(
            diff,
            vec![
                DiffLine::Same("a".into()),
                DiffLine::OldOnly("x".into()),
                DiffLine::Same("b".into()),
            ]
        );
    }

    #[test]
    fn single_line_replacement_gets_marker() {
        let old = lines(&["keep", "v2", "keep2"]);
        let new = lines(&["keep", "v1", "keep2"]);
        let diff = diff_lines(&old, &new);
        assert_eq!(diff[0], DiffLine::Same("keep".into()));
        assert_eq!(diff[1], DiffLine::OldOnly("v2".into()));
        assert_eq!(diff[2], DiffLine::NewOnly("v1".into()));
        assert_eq!(diff[3], DiffLine::Marker(" ^".into()));
        assert_eq!(diff[4], DiffLine::Same("keep2".into()));
    }

    #[test]
    fn marker_for_intra_line_insertion_uses_plus() {
        let old = lines(&["abc"]);
        let new = lines(&["abXc"]);
        let diff = diff_lines(&old, &new);
        assert_eq!(diff.last(), Some(&DiffLine::Marker("  +".into())));
    }

    #[test]
    fn marker_for_intra_line_deletion_uses_minus() {
        let old = lines(&["abXc"]);
        let new = lines(&["abc"]);
        let diff = diff_lines(&old, &new);
        assert_eq!(diff.last(), Some(&DiffLine::Marker("  -".into())));
    }

    #[test]
    fn dissimilar_single_lines_still_get_marker() {
        let old = lines(&["completely"]);
        let new = lines(&["different!"]);
        let diff = diff_lines(&old, &new);
        assert!(matches!(diff.last(), Some(DiffLine::Marker(_))));
    }

    #[test]
    fn multi_line_replacement_has_no_marker() {
        let old = lines(&["p", "q"]);
        let new = lines(&["r", "s"]);
        let diff = diff_lines(&old, &new);
        assert!(diff.iter().all(|d| !matches!(d, DiffLine::Marker(_))));
        assert_eq!(
            diff,
            vec![
                DiffLine::OldOnly("p".into()),
                DiffLine::OldOnly("q".into()),
                DiffLine::NewOnly("r".into()),
                DiffLine::NewOnly("s".into()),
            ]
        );
    }

    #[test]
    fn empty_inputs_produce_empty_diff() {
        assert!(diff_lines(&[], &[]).is_empty());
    }
}
