use std::fmt;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

/// A detected text encoding.
///
/// Wraps an [`encoding_rs::Encoding`] reference. Detection order:
/// BOM sniffing, a NUL-byte-pattern UTF-16 heuristic, strict UTF-8
/// validation, then a statistical guess via `chardetng`. The statistical
/// guess always returns an encoding from the windows-1252 family of
/// single-byte codecs, which accept any byte sequence — so detection never
/// fails, it only degrades.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(&'static Encoding);

impl TextEncoding {
    /// UTF-8.
    pub fn utf8() -> Self {
        Self(UTF_8)
    }

    /// Guess the encoding of a byte buffer.
    pub fn detect(bytes: &[u8]) -> Self {
        if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
            return Self(encoding);
        }
        // UTF-16 before UTF-8: NUL bytes are valid UTF-8, so mostly-ASCII
        // UTF-16 would otherwise pass the strict UTF-8 check.
        if let Some(utf16) = sniff_utf16(bytes) {
            return Self(utf16);
        }
        if std::str::from_utf8(bytes).is_ok() {
            return Self(UTF_8);
        }
        let mut detector = chardetng::EncodingDetector::new();
        detector.feed(bytes, true);
        let guess = detector.guess(None, true);
        tracing::warn!(encoding = guess.name(), "statistical encoding guess");
        Self(guess)
    }

    /// The WHATWG name of this encoding.
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Decode bytes into a string.
    ///
    /// Never fails: malformed sequences become replacement characters. A
    /// leading BOM matching this encoding is stripped.
    pub fn decode(&self, bytes: &[u8]) -> String {
        let (text, had_errors) = self.0.decode_with_bom_removal(bytes);
        if had_errors {
            tracing::warn!(
                encoding = self.name(),
                "malformed input replaced during decode"
            );
        }
        text.into_owned()
    }

    /// Encode a string into this encoding's bytes.
    ///
    /// UTF-16 is encoded directly; `encoding_rs` output-encoding rules
    /// would substitute UTF-8 for it.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        if self.0 == UTF_16LE {
            return text.encode_utf16().flat_map(u16::to_le_bytes).collect();
        }
        if self.0 == UTF_16BE {
            return text.encode_utf16().flat_map(u16::to_be_bytes).collect();
        }
        let (bytes, _, _) = self.0.encode(text);
        bytes.into_owned()
    }
}

impl fmt::Debug for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextEncoding({})", self.name())
    }
}

/// BOM-less UTF-16 sniffing: mostly-ASCII UTF-16 text has a NUL in every
/// other byte. Big-endian puts them at even offsets, little-endian at odd.
fn sniff_utf16(bytes: &[u8]) -> Option<&'static Encoding> {
    if bytes.len() < 4 || bytes.len() % 2 != 0 {
        return None;
    }
    let half = bytes.len() / 2;
    let even_nuls = bytes.iter().step_by(2).filter(|&&b| b == 0).count();
    let odd_nuls = bytes.iter().skip(1).step_by(2).filter(|&&b| b == 0).count();
    if even_nuls * 3 > half * 2 && odd_nuls * 10 < half {
        Some(UTF_16BE)
    } else if odd_nuls * 3 > half * 2 && even_nuls * 10 < half {
        Some(UTF_16LE)
    } else {
        None
    }
}
