//! Pull-based input sources.
//!
//! The parser never reads bytes itself; it asks a [`ChunkSource`] for the next
//! buffer whenever the current one runs out. Chunk boundaries are arbitrary
//! (an escape sequence, a number, or a multi-byte UTF-8 sequence may be split
//! anywhere) and have no effect on the emitted events.

use std::{fs::File, io, path::Path};

/// One unit of input returned by a [`ChunkSource`].
///
/// The in-memory [`SliceSource`] hands its whole buffer out as a single
/// borrowed chunk, so parsing a slice never copies the input. Stateful sources
/// (readers, iterators, closures) yield owned chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk<'src> {
    /// A chunk borrowed from the caller's buffer.
    Borrowed(&'src [u8]),
    /// A chunk produced by the source itself.
    Owned(Vec<u8>),
}

impl Chunk<'_> {
    /// The bytes of this chunk.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Chunk::Borrowed(bytes) => bytes,
            Chunk::Owned(bytes) => bytes,
        }
    }

    /// Length of the chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the chunk contains no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// A pull-based provider of input chunks.
///
/// `pull` returns the next chunk of bytes, or `None` once the input is
/// exhausted. After reporting exhaustion a source must keep returning `None`.
/// A zero-length chunk is also treated as a terminal end-of-stream signal by
/// the parser, so sources should not use empty chunks to mean "try again".
///
/// A stateful source owns whatever resource backs it (an open file, a
/// channel receiver) and is responsible for releasing it when it first reports
/// exhaustion; [`ReadSource`] drops its reader at that point.
pub trait ChunkSource<'src> {
    /// Pulls the next chunk, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the underlying resource. The parser
    /// surfaces it as [`ErrorKind::Io`](crate::ErrorKind::Io).
    fn pull(&mut self) -> io::Result<Option<Chunk<'src>>>;
}

/// A one-shot source over a complete in-memory buffer.
///
/// The first `pull` returns the entire input as a borrowed chunk; every
/// subsequent call returns `None`.
#[derive(Debug)]
pub struct SliceSource<'src> {
    data: Option<&'src [u8]>,
}

impl<'src> SliceSource<'src> {
    /// Creates a source over `data`.
    #[must_use]
    pub fn new(data: &'src [u8]) -> Self {
        Self { data: Some(data) }
    }
}

impl<'src> ChunkSource<'src> for SliceSource<'src> {
    fn pull(&mut self) -> io::Result<Option<Chunk<'src>>> {
        Ok(self.data.take().filter(|d| !d.is_empty()).map(Chunk::Borrowed))
    }
}

/// A source drawing chunks from an iterator of byte vectors.
///
/// Useful for tests that replay a document in a fixed partition, and for
/// inputs arriving through a channel. Empty items are skipped rather than
/// treated as end of stream, so partitions may contain zero-length pieces.
#[derive(Debug)]
pub struct IterSource<I> {
    inner: I,
}

impl<I: Iterator<Item = Vec<u8>>> IterSource<I> {
    /// Creates a source over `chunks`.
    pub fn new<T>(chunks: T) -> Self
    where
        T: IntoIterator<IntoIter = I, Item = Vec<u8>>,
    {
        Self {
            inner: chunks.into_iter(),
        }
    }
}

impl<'src, I: Iterator<Item = Vec<u8>>> ChunkSource<'src> for IterSource<I> {
    fn pull(&mut self) -> io::Result<Option<Chunk<'src>>> {
        Ok(self.inner.by_ref().find(|c| !c.is_empty()).map(Chunk::Owned))
    }
}

/// A source backed by a zero-argument closure.
///
/// The closure is invoked once per `pull`; returning `None` or an empty
/// vector ends the stream.
pub struct FnSource<F> {
    next: F,
}

impl<F: FnMut() -> Option<Vec<u8>>> FnSource<F> {
    /// Creates a source that calls `next` for every chunk.
    pub fn new(next: F) -> Self {
        Self { next }
    }
}

impl<'src, F: FnMut() -> Option<Vec<u8>>> ChunkSource<'src> for FnSource<F> {
    fn pull(&mut self) -> io::Result<Option<Chunk<'src>>> {
        Ok((self.next)().map(Chunk::Owned))
    }
}

const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// A source reading chunks from any [`io::Read`] implementation.
///
/// Each `pull` performs one `read` call and returns whatever became
/// available, retrying reads interrupted by a signal. The inner reader is
/// dropped as soon as it reports end of file, so a file descriptor is
/// released exactly once and before parsing finishes consuming buffered
/// chunks.
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: Option<R>,
    chunk_size: usize,
}

impl<R: io::Read> ReadSource<R> {
    /// Creates a source reading chunks of a default size (8 KiB).
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
    }

    /// Creates a source reading chunks of at most `chunk_size` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be non-zero");
        Self {
            reader: Some(reader),
            chunk_size,
        }
    }
}

impl ReadSource<File> {
    /// Opens the file at `path` for incremental reading.
    ///
    /// The file is closed automatically once it has been read to the end.
    ///
    /// # Errors
    ///
    /// Returns the error from [`File::open`].
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<'src, R: io::Read> ChunkSource<'src> for ReadSource<R> {
    fn pull(&mut self) -> io::Result<Option<Chunk<'src>>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };
        let mut buf = vec![0_u8; self.chunk_size];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => {
                    // End of file: release the underlying resource now.
                    self.reader = None;
                    return Ok(None);
                }
                Ok(n) => {
                    buf.truncate(n);
                    return Ok(Some(Chunk::Owned(buf)));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_source_is_one_shot() {
        let data = b"[1,2]";
        let mut source = SliceSource::new(data);
        assert_eq!(source.pull().unwrap(), Some(Chunk::Borrowed(b"[1,2]")));
        assert_eq!(source.pull().unwrap(), None);
        assert_eq!(source.pull().unwrap(), None);
    }

    #[test]
    fn empty_slice_is_end() {
        let mut source = SliceSource::new(b"");
        assert_eq!(source.pull().unwrap(), None);
    }

    #[test]
    fn iter_source_skips_empty_chunks() {
        let mut source = IterSource::new(vec![b"[1".to_vec(), Vec::new(), b",2]".to_vec()]);
        assert_eq!(source.pull().unwrap(), Some(Chunk::Owned(b"[1".to_vec())));
        assert_eq!(source.pull().unwrap(), Some(Chunk::Owned(b",2]".to_vec())));
        assert_eq!(source.pull().unwrap(), None);
    }
}
