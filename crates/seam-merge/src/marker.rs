//! Intra-line marker parsing.
//!
//! A marker row flags which columns of the preceding line pair changed:
//! `^` for modified columns, `+` for inserted, `-` for removed.

use serde::{Deserialize, Serialize};

/// Category of an intra-line change range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeKind {
    Keep,
    Insert,
    Remove,
    Modify,
}

/// Intra-line change detail parsed from a marker row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRange {
    /// What kind of change the marked columns represent.
    pub kind: RangeKind,
    /// Column positions carrying the marker character.
    pub indexes: Vec<usize>,
}

impl ChangeRange {
    /// Parse a marker row into a change range.
    ///
    /// Only the first matching category is reported: `^` wins over `+`,
    /// which wins over `-`, even when several marker characters co-occur
    /// on one row. A row with no marker characters parses as `Keep` with
    /// no indexes.
    pub fn parse(marker: &str) -> Self {
        for (ch, kind) in [
            ('^', RangeKind::Modify),
            ('+', RangeKind::Insert),
            ('-', RangeKind::Remove),
        ] {
            let indexes: Vec<usize> = marker
                .chars()
                .enumerate()
                .filter(|&(_, c)| c == ch)
                .map(|(idx, _)| idx)
                .collect();
            if !indexes.is_empty() {
                return Self { kind, indexes };
            }
        }
        Self {
            kind: RangeKind::Keep,
            indexes: Vec::new(),
        }
    }
}
