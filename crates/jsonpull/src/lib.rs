//! An incremental, pull-based, SAX-style JSON parser.
//!
//! The parser consumes a byte stream, possibly delivered in arbitrarily
//! sized chunks from a pull [`ChunkSource`], and emits structural and value
//! events through a caller-supplied [`Handler`]. It never materializes a
//! document tree; the caller decides what to do with the events (build a DOM,
//! filter, stream-transform).
//!
//! Chunk boundaries are invisible to the grammar: an escape sequence, a
//! numeric literal, a structural token, or a UTF-16 surrogate pair may be
//! split anywhere and the parser fetches more input and resumes without
//! losing state. Parsing is fail-fast; the first grammar violation halts the
//! run with a [`ParseError`] carrying a global byte offset.
//!
//! # Examples
//!
//! Parse a complete buffer:
//!
//! ```rust
//! use jsonpull::{Event, EventCollector, parse_slice};
//!
//! let mut collector = EventCollector::new();
//! parse_slice(br#"{"a": [1, 2]}"#, &mut collector).unwrap();
//! assert_eq!(
//!     collector.into_events(),
//!     vec![
//!         Event::StartObject,
//!         Event::Key("a".into()),
//!         Event::StartArray,
//!         Event::Number(1.0),
//!         Event::Number(2.0),
//!         Event::EndArray,
//!         Event::EndObject,
//!     ]
//! );
//! ```
//!
//! Implement only the callbacks you need; the rest default to no-ops:
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use jsonpull::{Handler, parse_slice};
//!
//! #[derive(Default)]
//! struct KeyCounter(usize);
//!
//! impl Handler for KeyCounter {
//!     type Error = Infallible;
//!
//!     fn key(&mut self, _key: &str) -> Result<(), Self::Error> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! let mut counter = KeyCounter::default();
//! parse_slice(br#"{"a": {"b": 1}, "c": 2}"#, &mut counter).unwrap();
//! assert_eq!(counter.0, 3);
//! ```

mod cursor;
mod error;
mod event;
mod handler;
mod options;
mod parser;
mod source;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ParseError, SyntaxError};
pub use event::{Event, EventCollector};
pub use handler::Handler;
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
pub use parser::{Parser, parse_path, parse_reader, parse_slice};
pub use source::{Chunk, ChunkSource, FnSource, IterSource, ReadSource, SliceSource};
