//! Cursor over a pull-based chunk stream.
//!
//! This is the only place chunk boundaries are crossed. Everything above it
//! (literals, numbers, strings, containers) reads through `peek`/`bump` or
//! scans `remaining_in_chunk` and therefore never has to know where one chunk
//! ends and the next begins.

use std::io;

use crate::source::{Chunk, ChunkSource};

/// Returns `true` for the four whitespace bytes JSON permits between tokens.
pub(crate) fn is_json_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Tracks the current chunk, the position inside it, and the total length of
/// all chunks already discarded. The sum `discarded + pos` is the global byte
/// offset used for error reporting, and stays meaningful after earlier chunks
/// are gone.
#[derive(Debug)]
pub(crate) struct Cursor<'src, S> {
    source: S,
    chunk: Chunk<'src>,
    pos: usize,
    discarded: usize,
    exhausted: bool,
}

impl<'src, S: ChunkSource<'src>> Cursor<'src, S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            chunk: Chunk::Borrowed(&[]),
            pos: 0,
            discarded: 0,
            exhausted: false,
        }
    }

    /// Total number of bytes consumed since parsing began.
    pub(crate) fn offset(&self) -> usize {
        self.discarded + self.pos
    }

    /// The unread tail of the current chunk. May be empty at a chunk
    /// boundary; call [`refill`](Self::refill) to fetch more input.
    pub(crate) fn remaining_in_chunk(&self) -> &[u8] {
        &self.chunk.as_bytes()[self.pos..]
    }

    /// Ensures at least one unread byte is buffered, pulling new chunks from
    /// the source as needed. Returns `false` once the source is exhausted.
    ///
    /// An empty chunk from the source is treated as a terminal end-of-stream
    /// signal, matching the "empty or absent means end" source contract.
    pub(crate) fn refill(&mut self) -> io::Result<bool> {
        loop {
            if self.pos < self.chunk.len() {
                return Ok(true);
            }
            if self.exhausted {
                return Ok(false);
            }
            match self.source.pull()? {
                Some(next) if !next.is_empty() => {
                    self.discarded += self.chunk.len();
                    self.pos = 0;
                    self.chunk = next;
                }
                _ => self.exhausted = true,
            }
        }
    }

    /// The byte at the cursor, or `None` once the source is exhausted.
    pub(crate) fn peek(&mut self) -> io::Result<Option<u8>> {
        if self.refill()? {
            Ok(Some(self.chunk.as_bytes()[self.pos]))
        } else {
            Ok(None)
        }
    }

    /// Consumes the byte last returned by [`peek`](Self::peek).
    pub(crate) fn bump(&mut self) {
        debug_assert!(self.pos < self.chunk.len());
        self.pos += 1;
    }

    /// Consumes `n` bytes known to lie within the current chunk.
    pub(crate) fn consume_in_chunk(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.chunk.len());
        self.pos += n;
    }

    /// Consumes a maximal run of JSON whitespace, crossing chunk boundaries
    /// transparently. Exhaustion while only whitespace has been seen is not
    /// an error here; the caller decides whether a value was required.
    pub(crate) fn skip_whitespace(&mut self) -> io::Result<()> {
        loop {
            let tail = self.remaining_in_chunk();
            match tail.iter().position(|&b| !is_json_whitespace(b)) {
                Some(i) => {
                    self.pos += i;
                    return Ok(());
                }
                None => {
                    self.pos = self.chunk.len();
                    if !self.refill()? {
                        return Ok(());
                    }
                }
            }
        }
    }
}
