use serde::{Deserialize, Serialize};

/// End-of-line style of a text buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eol {
    /// Windows-style `\r\n`.
    CrLf,
    /// Unix-style `\n`.
    Lf,
    /// Classic-Mac-style `\r`.
    Cr,
    /// No line terminator found.
    Indeterminate,
}

impl Eol {
    /// The terminator bytes for this style. Indeterminate maps to LF.
    pub fn as_str(&self) -> &'static str {
        match self {
            Eol::CrLf => "\r\n",
            Eol::Lf => "\n",
            Eol::Cr => "\r",
            Eol::Indeterminate => "\n",
        }
    }

    /// Returns `true` unless no terminator was detected.
    pub fn is_known(&self) -> bool {
        !matches!(self, Eol::Indeterminate)
    }
}

/// Detect the dominant end-of-line style of a byte buffer.
///
/// Any CRLF at all wins, with a warning when bare LF or CR also appear
/// (mixed styles). Otherwise LF wins when its count is at least CR's,
/// then CR, then [`Eol::Indeterminate`] for buffers with no newlines.
pub fn detect_eol(bytes: &[u8]) -> Eol {
    let mut crlf = 0usize;
    let mut lf = 0usize;
    let mut cr = 0usize;

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    crlf += 1;
                    i += 2;
                    continue;
                }
                cr += 1;
            }
            b'\n' => lf += 1,
            _ => {}
        }
        i += 1;
    }

    if crlf > 0 {
        if lf > 0 || cr > 0 {
            tracing::warn!(crlf, lf, cr, "mixed line endings, preferring CRLF");
        }
        Eol::CrLf
    } else if lf > 0 && lf >= cr {
        Eol::Lf
    } else if cr > 0 {
        Eol::Cr
    } else {
        Eol::Indeterminate
    }
}
