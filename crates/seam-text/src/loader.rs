use std::path::Path;

use crate::encoding::TextEncoding;
use crate::eol::{detect_eol, Eol};
use crate::error::TextResult;

/// Decode a byte buffer into lines.
///
/// Splits on the EOL style detected from the decoded text (LF when
/// indeterminate). A buffer ending in a terminator yields a trailing empty
/// segment, so [`join_lines`] with the same EOL round-trips the text
/// exactly. Empty input yields an empty line vector.
pub fn load_text(bytes: &[u8]) -> (TextEncoding, Eol, Vec<String>) {
    let encoding = TextEncoding::detect(bytes);
    let text = encoding.decode(bytes);
    let eol = detect_eol(text.as_bytes());
    let lines = if text.is_empty() {
        Vec::new()
    } else {
        text.split(eol.as_str()).map(str::to_owned).collect()
    };
    (encoding, eol, lines)
}

/// Read a file and decode it into lines. I/O failures propagate.
pub fn load_text_file(path: impl AsRef<Path>) -> TextResult<(TextEncoding, Eol, Vec<String>)> {
    let bytes = std::fs::read(path)?;
    Ok(load_text(&bytes))
}

/// Rejoin lines with the given EOL style.
pub fn join_lines(lines: &[String], eol: Eol) -> String {
    lines.join(eol.as_str())
}
