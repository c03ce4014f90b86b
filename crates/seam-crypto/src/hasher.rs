use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use seam_types::Digest;
use sha2::{Digest as _, Sha256};

use crate::error::HashResult;

/// Default streaming chunk size: 1 MiB.
const CHUNK_SIZE: usize = 1024 * 1024;

/// Streaming SHA-256 content hasher.
///
/// Reads files in fixed-size chunks, so memory use is independent of file
/// size. Each chunk can be tee-written to a destination while hashing,
/// optionally through a zstd compressor.
pub struct ContentHasher {
    chunk_size: usize,
}

impl Default for ContentHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentHasher {
    /// Create a hasher with the default 1 MiB chunk size.
    pub fn new() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
        }
    }

    /// Create a hasher with a custom chunk size.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Hash an in-memory buffer.
    pub fn hash_bytes(data: &[u8]) -> Digest {
        Digest::from_hash(Sha256::digest(data).into())
    }

    /// Verify that data produces the expected digest.
    pub fn verify(data: &[u8], expected: &Digest) -> bool {
        Self::hash_bytes(data) == *expected
    }

    /// Hash a file, returning the digest and the number of bytes read.
    pub fn hash_file(&self, path: impl AsRef<Path>) -> HashResult<(Digest, u64)> {
        self.stream(path.as_ref(), None)
    }

    /// Hash a file while copying its content to `dest`.
    ///
    /// Returns the digest and the number of bytes written to `dest`.
    pub fn hash_copy<W: Write>(&self, path: impl AsRef<Path>, dest: W) -> HashResult<(Digest, u64)> {
        let mut counter = CountingWriter::new(dest);
        let (digest, _) = self.stream(path.as_ref(), Some(&mut counter))?;
        Ok((digest, counter.count))
    }

    /// Hash a file while writing a zstd-compressed copy to `dest`.
    ///
    /// Returns the digest of the *uncompressed* content and the number of
    /// compressed bytes written to `dest`.
    pub fn hash_compress<W: Write>(
        &self,
        path: impl AsRef<Path>,
        dest: W,
        level: i32,
    ) -> HashResult<(Digest, u64)> {
        let counter = CountingWriter::new(dest);
        let mut encoder = zstd::Encoder::new(counter, level)?;
        let (digest, _) = self.stream(path.as_ref(), Some(&mut encoder))?;
        let counter = encoder.finish()?;
        Ok((digest, counter.count))
    }

    fn stream(&self, path: &Path, mut sink: Option<&mut dyn Write>) -> HashResult<(Digest, u64)> {
        let mut file = File::open(path)?;
        let mut hasher = Sha256::new();
        let mut buf = vec![0u8; self.chunk_size];
        let mut total = 0u64;

        loop {
            let n = file.read(&mut buf)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
            if let Some(writer) = sink.as_deref_mut() {
                writer.write_all(&buf[..n])?;
            }
            total += n as u64;
        }

        Ok((Digest::from_hash(hasher.finalize().into()), total))
    }
}

/// Writer wrapper that counts bytes passing through.
struct CountingWriter<W: Write> {
    inner: W,
    count: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(content: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.bin");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn hash_file_is_deterministic() {
        let (_dir, path) = write_temp(b"the same bytes");
        let hasher = ContentHasher::new();
        let (d1, n1) = hasher.hash_file(&path).unwrap();
        let (d2, n2) = hasher.hash_file(&path).unwrap();
        assert_eq!(d1, d2);
        assert_eq!(n1, n2);
    }

    #[test]
    fn hash_file_matches_hash_bytes() {
        let content = b"streamed or not, same digest";
        let (_dir, path) = write_temp(content);
        let (digest, read) = ContentHasher::new().hash_file(&path).unwrap();
        assert_eq!(digest, ContentHasher::hash_bytes(content));
        assert_eq!(read, content.len() as u64);
    }

    #[test]
    fn small_chunks_produce_same_digest() {
        let content = vec![0xA5u8; 10_000];
        let (_dir, path) = write_temp(&content);
        let (digest, _) = ContentHasher::with_chunk_size(7).hash_file(&path).unwrap();
        assert_eq!(digest, ContentHasher::hash_bytes(&content));
    }

    #[test]
    fn hash_copy_tees_content() {
        let content = b"tee me";
        let (_dir, path) = write_temp(content);
        let mut copy = Vec::new();
        let (digest, written) = ContentHasher::new().hash_copy(&path, &mut copy).unwrap();
        assert_eq!(copy, content);
        assert_eq!(written, content.len() as u64);
        assert_eq!(digest, ContentHasher::hash_bytes(content));
    }

    #[test]
    fn hash_compress_roundtrips_through_zstd() {
        let content = vec![b'z'; 4096];
        let (_dir, path) = write_temp(&content);
        let mut compressed = Vec::new();
        let (digest, written) = ContentHasher::new()
            .hash_compress(&path, &mut compressed, 3)
            .unwrap();
        assert_eq!(written, compressed.len() as u64);
        assert!(written > 0);
        assert!(written < content.len() as u64);
        let restored = zstd::decode_all(compressed.as_slice()).unwrap();
        assert_eq!(restored, content);
        // Digest covers the uncompressed content.
        assert_eq!(digest, ContentHasher::hash_bytes(&content));
    }

    #[test]
    fn missing_file_propagates_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.bin");
        assert!(ContentHasher::new().hash_file(&missing).is_err());
    }

    #[test]
    fn verify_detects_tampering() {
        let digest = ContentHasher::hash_bytes(b"original");
        assert!(ContentHasher::verify(b"original", &digest));
        assert!(!ContentHasher::verify(b"tampered", &digest));
    }
}
