//! Parse errors.
//!
//! Every failure carries the global byte offset at which it was detected,
//! computed as the sum of all discarded chunk lengths plus the position in
//! the current chunk, so locations stay accurate for streamed input.

use std::{convert::Infallible, io};

use thiserror::Error;

/// A terminating parse failure.
///
/// Parsing is fail-fast: the first violation halts the run and no partial
/// document state is exposed. Retrying the same input is pointless for a
/// syntax error; a caller that wants to retry a transient source failure can
/// distinguish it through [`ErrorKind::Io`].
#[derive(Debug, Error)]
#[error("{kind} at byte offset {offset}")]
pub struct ParseError<E = Infallible> {
    /// Number of bytes consumed before the violation was detected.
    pub offset: usize,
    /// What went wrong.
    pub kind: ErrorKind<E>,
}

impl<E> ParseError<E> {
    /// The syntax error, if this failure was a grammar violation.
    pub fn syntax(&self) -> Option<&SyntaxError> {
        match &self.kind {
            ErrorKind::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

/// The cause of a [`ParseError`].
#[derive(Debug, Error)]
pub enum ErrorKind<E> {
    /// The input violated the JSON grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The chunk source failed to produce input.
    #[error("source error: {0}")]
    Io(#[from] io::Error),
    /// A callback aborted the parse.
    #[error("handler error: {0}")]
    Handler(E),
}

/// A violation of the JSON grammar, detected at a specific byte.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntaxError {
    /// A byte that cannot begin a JSON value appeared in value position.
    #[error("expected a value, found {0:?}")]
    ExpectedValue(char),
    /// The source ran out while a byte was still required.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A `true`, `false` or `null` literal was misspelled.
    #[error("invalid character in literal {0:?}")]
    InvalidLiteral(&'static str),
    /// A numeric literal violated the number grammar.
    #[error("invalid number: {0}")]
    InvalidNumber(&'static str),
    /// An unsupported character followed a backslash in a string.
    #[error("invalid escape character {0:?}")]
    InvalidEscape(char),
    /// A non-hexadecimal character appeared inside a `\uXXXX` escape.
    #[error("invalid character {0:?} in unicode escape")]
    InvalidUnicodeEscape(char),
    /// A UTF-16 surrogate escape had no valid partner.
    #[error("unpaired surrogate \\u{0:04X}")]
    UnpairedSurrogate(u32),
    /// An unescaped control character appeared inside a string.
    #[error("control character 0x{0:02X} in string")]
    ControlCharacter(u8),
    /// The raw bytes of a string were not valid UTF-8.
    #[error("string is not valid UTF-8")]
    InvalidUtf8,
    /// An object member did not begin with a quoted key.
    #[error("expected a string key, found {0:?}")]
    ExpectedKey(char),
    /// The `:` separating a key from its value was missing.
    #[error("expected ':' after object key, found {0:?}")]
    ExpectedColon(char),
    /// Neither a `,` nor the closing bracket followed a container element.
    #[error("expected ',' or {expected:?}, found {found:?}")]
    ExpectedCommaOrClose {
        /// The bracket that would close the open container.
        expected: char,
        /// The byte actually found.
        found: char,
    },
    /// Containers were nested deeper than the configured limit.
    #[error("depth limit of {0} exceeded")]
    DepthLimitExceeded(usize),
    /// Input remained after the top-level value (raised by `expect_end`).
    #[error("trailing characters after value, found {0:?}")]
    TrailingCharacters(char),
}
