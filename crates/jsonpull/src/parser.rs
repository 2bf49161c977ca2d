//! The pull-based JSON parser implementation.
//!
//! This module provides [`Parser`], a recursive-descent state machine that
//! consumes bytes from a [`ChunkSource`] and emits events into a [`Handler`].
//! Correctness is independent of how the input is chunked: every token may be
//! split at any byte position and the parser transparently fetches more input
//! and resumes.
//!
//! # Examples
//!
//! ```rust
//! use jsonpull::{Event, EventCollector, IterSource, Parser};
//!
//! // The document arrives in three arbitrary chunks.
//! let chunks = vec![b"{\"ok\":tr".to_vec(), b"ue".to_vec(), b"}".to_vec()];
//! let mut collector = EventCollector::new();
//! let mut parser = Parser::new(IterSource::new(chunks), &mut collector);
//! parser.run().unwrap();
//! assert_eq!(
//!     collector.into_events(),
//!     vec![
//!         Event::StartObject,
//!         Event::Key("ok".into()),
//!         Event::Boolean(true),
//!         Event::EndObject,
//!     ]
//! );
//! ```

use std::{io, path::Path, str};

use bstr::ByteSlice;

use crate::{
    cursor::Cursor,
    error::{ErrorKind, ParseError, SyntaxError},
    handler::Handler,
    options::ParserOptions,
    source::{ChunkSource, ReadSource, SliceSource},
};

/// Bytes that interrupt a raw string run: the closing quote, the escape
/// introducer, and the control characters RFC 8259 forbids unescaped.
const STRING_STOP: [u8; 34] = {
    let mut set = [0_u8; 34];
    let mut i = 0;
    while i < 32 {
        set[i] = i as u8;
        i += 1;
    }
    set[32] = b'"';
    set[33] = b'\\';
    set
};

fn hex_val(b: u8) -> Option<u16> {
    match b {
        b'0'..=b'9' => Some(u16::from(b - b'0')),
        b'a'..=b'f' => Some(u16::from(b - b'a') + 10),
        b'A'..=b'F' => Some(u16::from(b - b'A') + 10),
        _ => None,
    }
}

// ------------------------------------------------------------------------
// Number tokenizer
// ------------------------------------------------------------------------

/// One state per position in the number grammar
/// `'-'? ('0' | [1-9][0-9]*) ('.' [0-9]+)? ([eE] [+-]? [0-9]+)?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Start,
    Sign,
    Zero,
    Integer,
    Point,
    Fraction,
    Exponent,
    ExponentSign,
    ExponentInteger,
}

impl NumberState {
    /// States at which end of input legally terminates the token.
    fn is_accepting(self) -> bool {
        matches!(
            self,
            Self::Zero | Self::Integer | Self::Fraction | Self::ExponentInteger
        )
    }
}

enum NumberStep {
    Continue(NumberState),
    /// The byte is not part of the number; the token ends before it.
    End,
    Reject(&'static str),
}

fn number_step(state: NumberState, b: u8) -> NumberStep {
    use NumberState::*;

    match state {
        Start => match b {
            b'-' => NumberStep::Continue(Sign),
            b'0' => NumberStep::Continue(Zero),
            b'1'..=b'9' => NumberStep::Continue(Integer),
            _ => NumberStep::Reject("expected a digit"),
        },
        Sign => match b {
            b'0' => NumberStep::Continue(Zero),
            b'1'..=b'9' => NumberStep::Continue(Integer),
            _ => NumberStep::Reject("expected a digit after the minus sign"),
        },
        Zero => match b {
            b'.' => NumberStep::Continue(Point),
            b'e' | b'E' => NumberStep::Continue(Exponent),
            b'0'..=b'9' => NumberStep::Reject("leading zeros are not allowed"),
            _ => NumberStep::End,
        },
        Integer => match b {
            b'0'..=b'9' => NumberStep::Continue(Integer),
            b'.' => NumberStep::Continue(Point),
            b'e' | b'E' => NumberStep::Continue(Exponent),
            _ => NumberStep::End,
        },
        Point => match b {
            b'0'..=b'9' => NumberStep::Continue(Fraction),
            _ => NumberStep::Reject("expected a digit after the decimal point"),
        },
        Fraction => match b {
            b'0'..=b'9' => NumberStep::Continue(Fraction),
            b'e' | b'E' => NumberStep::Continue(Exponent),
            _ => NumberStep::End,
        },
        Exponent => match b {
            b'+' | b'-' => NumberStep::Continue(ExponentSign),
            b'0'..=b'9' => NumberStep::Continue(ExponentInteger),
            _ => NumberStep::Reject("expected a digit in the exponent"),
        },
        ExponentSign => match b {
            b'0'..=b'9' => NumberStep::Continue(ExponentInteger),
            _ => NumberStep::Reject("expected a digit in the exponent"),
        },
        ExponentInteger => match b {
            b'0'..=b'9' => NumberStep::Continue(ExponentInteger),
            _ => NumberStep::End,
        },
    }
}

fn convert_number(token: &[u8]) -> f64 {
    // The grammar admits only ASCII bytes that `f64::from_str` accepts, and
    // that conversion is locale-independent: the radix point is always '.'.
    // Out-of-range magnitudes saturate to infinity rather than failing.
    let text = str::from_utf8(token).unwrap();
    text.parse().unwrap()
}

// ------------------------------------------------------------------------
// Parser
// ------------------------------------------------------------------------

/// An incremental, event-driven JSON parser.
///
/// The parser owns a [`ChunkSource`] it pulls bytes from and a [`Handler`] it
/// emits events into. One [`run`](Self::run) call parses exactly one
/// top-level JSON value; call it repeatedly to consume concatenated values
/// (NDJSON-style streams), or follow it with
/// [`expect_end`](Self::expect_end) to require that the input is fully
/// consumed.
///
/// All parser state is explicit in this one object; nothing is shared, so
/// independent parsers can run side by side.
#[derive(Debug)]
pub struct Parser<'src, S, H> {
    cursor: Cursor<'src, S>,
    handler: H,
    /// Scratch buffer reused across string decodes and slow-path number
    /// tokenizing to avoid reallocation pressure.
    scratch: Vec<u8>,
    depth: usize,
    max_depth: usize,
}

impl<'src, S: ChunkSource<'src>, H: Handler> Parser<'src, S, H> {
    /// Creates a parser with default options.
    pub fn new(source: S, handler: H) -> Self {
        Self::with_options(source, handler, ParserOptions::default())
    }

    /// Creates a parser with the given options.
    pub fn with_options(source: S, handler: H, options: ParserOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            scratch: Vec::new(),
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Parses exactly one top-level JSON value, invoking callbacks as values
    /// and structure are recognized.
    ///
    /// Trailing content after the value is left unconsumed; use
    /// [`expect_end`](Self::expect_end) to reject it.
    ///
    /// # Errors
    ///
    /// Fails fast on malformed input, a failing source, a handler abort, or
    /// premature end of stream. After an error the parser is left at the
    /// point of detection and should be discarded.
    pub fn run(&mut self) -> Result<(), ParseError<H::Error>> {
        self.skip_whitespace()?;
        self.parse_value()
    }

    /// Requires that nothing but whitespace remains in the input.
    ///
    /// # Errors
    ///
    /// Fails with [`SyntaxError::TrailingCharacters`] if any byte remains,
    /// or with the source's error if pulling the next chunk fails.
    pub fn expect_end(&mut self) -> Result<(), ParseError<H::Error>> {
        self.skip_whitespace()?;
        match self.peek()? {
            None => Ok(()),
            Some(b) => Err(self.syntax_error(SyntaxError::TrailingCharacters(char::from(b)))),
        }
    }

    /// Total number of bytes consumed since parsing began.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// A shared reference to the handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// A mutable reference to the handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consumes the parser, returning the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    // --------------------------------------------------------------------
    // Cursor access with error wrapping
    // --------------------------------------------------------------------

    fn peek(&mut self) -> Result<Option<u8>, ParseError<H::Error>> {
        match self.cursor.peek() {
            Ok(b) => Ok(b),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Like [`peek`](Self::peek), but a byte is required.
    fn must_peek(&mut self) -> Result<u8, ParseError<H::Error>> {
        match self.peek()? {
            Some(b) => Ok(b),
            None => Err(self.syntax_error(SyntaxError::UnexpectedEndOfInput)),
        }
    }

    fn refill(&mut self) -> Result<bool, ParseError<H::Error>> {
        match self.cursor.refill() {
            Ok(available) => Ok(available),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn skip_whitespace(&mut self) -> Result<(), ParseError<H::Error>> {
        match self.cursor.skip_whitespace() {
            Ok(()) => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    // --------------------------------------------------------------------
    // Errors
    // --------------------------------------------------------------------

    fn io_error(&self, error: io::Error) -> ParseError<H::Error> {
        ParseError {
            offset: self.cursor.offset(),
            kind: ErrorKind::Io(error),
        }
    }

    fn syntax_error(&self, error: SyntaxError) -> ParseError<H::Error> {
        self.syntax_error_at(self.cursor.offset(), error)
    }

    fn syntax_error_at(&self, offset: usize, error: SyntaxError) -> ParseError<H::Error> {
        ParseError {
            offset,
            kind: ErrorKind::Syntax(error),
        }
    }

    fn handler_abort(&self, error: H::Error) -> ParseError<H::Error> {
        ParseError {
            offset: self.cursor.offset(),
            kind: ErrorKind::Handler(error),
        }
    }

    // --------------------------------------------------------------------
    // Value dispatch
    // --------------------------------------------------------------------

    /// Parses one value; the cursor must already be on its first byte.
    fn parse_value(&mut self) -> Result<(), ParseError<H::Error>> {
        match self.must_peek()? {
            b'{' => {
                self.cursor.bump();
                self.parse_object()
            }
            b'[' => {
                self.cursor.bump();
                self.parse_array()
            }
            b'"' => {
                self.cursor.bump();
                self.decode_string()?;
                self.emit_scratch_string(false)
            }
            b'-' | b'0'..=b'9' => self.parse_number(),
            b't' => {
                self.parse_literal("true")?;
                self.handler.boolean(true).map_err(|e| self.handler_abort(e))
            }
            b'f' => {
                self.parse_literal("false")?;
                self.handler.boolean(false).map_err(|e| self.handler_abort(e))
            }
            b'n' => {
                self.parse_literal("null")?;
                self.handler.null().map_err(|e| self.handler_abort(e))
            }
            other => Err(self.syntax_error(SyntaxError::ExpectedValue(char::from(other)))),
        }
    }

    /// Matches the remainder of `true`/`false`/`null` byte by byte; the
    /// dispatcher already matched the first byte.
    fn parse_literal(&mut self, literal: &'static str) -> Result<(), ParseError<H::Error>> {
        self.cursor.bump();
        for expected in literal.bytes().skip(1) {
            if self.must_peek()? != expected {
                return Err(self.syntax_error(SyntaxError::InvalidLiteral(literal)));
            }
            self.cursor.bump();
        }
        Ok(())
    }

    // --------------------------------------------------------------------
    // Numbers
    // --------------------------------------------------------------------

    fn parse_number(&mut self) -> Result<(), ParseError<H::Error>> {
        // Fast path: the whole token lies within the current chunk, so it
        // can be converted straight from the chunk with no copying.
        let mut state = NumberState::Start;
        let mut outcome = None;
        for (i, &b) in self.cursor.remaining_in_chunk().iter().enumerate() {
            match number_step(state, b) {
                NumberStep::Continue(next) => state = next,
                NumberStep::End => {
                    outcome = Some(Ok(i));
                    break;
                }
                NumberStep::Reject(msg) => {
                    outcome = Some(Err((i, msg)));
                    break;
                }
            }
        }
        let value = match outcome {
            Some(Ok(len)) => {
                let value = convert_number(&self.cursor.remaining_in_chunk()[..len]);
                self.cursor.consume_in_chunk(len);
                value
            }
            Some(Err((i, msg))) => {
                self.cursor.consume_in_chunk(i);
                return Err(self.syntax_error(SyntaxError::InvalidNumber(msg)));
            }
            // The chunk ended before the token did; fall back to
            // accumulating fragments across chunk boundaries.
            None => self.parse_number_slow(state)?,
        };
        self.handler.number(value).map_err(|e| self.handler_abort(e))
    }

    fn parse_number_slow(&mut self, mut state: NumberState) -> Result<f64, ParseError<H::Error>> {
        self.scratch.clear();
        self.scratch.extend_from_slice(self.cursor.remaining_in_chunk());
        let copied = self.scratch.len();
        self.cursor.consume_in_chunk(copied);
        loop {
            let Some(b) = self.peek()? else {
                if !state.is_accepting() {
                    return Err(self.syntax_error(SyntaxError::UnexpectedEndOfInput));
                }
                break;
            };
            match number_step(state, b) {
                NumberStep::Continue(next) => {
                    state = next;
                    self.scratch.push(b);
                    self.cursor.bump();
                }
                NumberStep::End => break,
                NumberStep::Reject(msg) => {
                    return Err(self.syntax_error(SyntaxError::InvalidNumber(msg)));
                }
            }
        }
        Ok(convert_number(&self.scratch))
    }

    // --------------------------------------------------------------------
    // Strings
    // --------------------------------------------------------------------

    /// Decodes a string body into the scratch buffer; the opening quote has
    /// already been consumed, and the closing quote is consumed here.
    fn decode_string(&mut self) -> Result<(), ParseError<H::Error>> {
        self.scratch.clear();
        // A high surrogate waiting for its low half. Scoped to this one
        // string decode: it can never leak into the next token.
        let mut pending_surrogate: Option<u16> = None;
        loop {
            let tail = self.cursor.remaining_in_chunk();
            let (run, stop) = match tail.find_byteset(STRING_STOP) {
                Some(i) => (i, Some(tail[i])),
                None => (tail.len(), None),
            };
            if let Some(high) = pending_surrogate {
                // Only another `\uXXXX` escape can complete the pair; raw
                // content or the closing quote leaves the high half dangling.
                if run > 0 || !matches!(stop, Some(b'\\') | None) {
                    return Err(self.syntax_error(SyntaxError::UnpairedSurrogate(u32::from(high))));
                }
            }
            self.scratch.extend_from_slice(&tail[..run]);
            match stop {
                Some(b'"') => {
                    self.cursor.consume_in_chunk(run + 1);
                    return Ok(());
                }
                Some(b'\\') => {
                    self.cursor.consume_in_chunk(run + 1);
                    self.decode_escape(&mut pending_surrogate)?;
                }
                Some(ctrl) => {
                    self.cursor.consume_in_chunk(run);
                    return Err(self.syntax_error(SyntaxError::ControlCharacter(ctrl)));
                }
                None => {
                    self.cursor.consume_in_chunk(run);
                    if !self.refill()? {
                        return Err(self.syntax_error(SyntaxError::UnexpectedEndOfInput));
                    }
                }
            }
        }
    }

    /// Decodes one escape sequence; the backslash has already been consumed.
    fn decode_escape(
        &mut self,
        pending: &mut Option<u16>,
    ) -> Result<(), ParseError<H::Error>> {
        let escape_offset = self.cursor.offset() - 1;
        let selector = self.must_peek()?;
        if let Some(high) = *pending {
            if selector != b'u' {
                return Err(self.syntax_error(SyntaxError::UnpairedSurrogate(u32::from(high))));
            }
        }
        match selector {
            b'"' | b'\\' | b'/' => {
                self.scratch.push(selector);
                self.cursor.bump();
            }
            b'b' => {
                self.scratch.push(0x08);
                self.cursor.bump();
            }
            b'f' => {
                self.scratch.push(0x0C);
                self.cursor.bump();
            }
            b'n' => {
                self.scratch.push(b'\n');
                self.cursor.bump();
            }
            b'r' => {
                self.scratch.push(b'\r');
                self.cursor.bump();
            }
            b't' => {
                self.scratch.push(b'\t');
                self.cursor.bump();
            }
            b'u' => {
                self.cursor.bump();
                let code = self.read_hex4()?;
                self.decode_code_unit(code, pending, escape_offset)?;
            }
            other => {
                return Err(self.syntax_error(SyntaxError::InvalidEscape(char::from(other))));
            }
        }
        Ok(())
    }

    fn read_hex4(&mut self) -> Result<u16, ParseError<H::Error>> {
        let mut code: u16 = 0;
        for _ in 0..4 {
            let b = self.must_peek()?;
            let Some(digit) = hex_val(b) else {
                return Err(self.syntax_error(SyntaxError::InvalidUnicodeEscape(char::from(b))));
            };
            self.cursor.bump();
            code = (code << 4) | digit;
        }
        Ok(code)
    }

    /// Classifies one decoded UTF-16 code unit and re-encodes it (or the
    /// combined surrogate pair) as UTF-8 into the scratch buffer.
    fn decode_code_unit(
        &mut self,
        code: u16,
        pending: &mut Option<u16>,
        escape_offset: usize,
    ) -> Result<(), ParseError<H::Error>> {
        if let Some(high) = pending.take() {
            if !(0xDC00..=0xDFFF).contains(&code) {
                return Err(
                    self.syntax_error_at(escape_offset, SyntaxError::UnpairedSurrogate(u32::from(code)))
                );
            }
            let combined =
                0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(code) - 0xDC00);
            // A combined pair always lands in 0x10000..=0x10FFFF, which is a
            // valid scalar range.
            self.push_char(char::from_u32(combined).unwrap());
        } else {
            match code {
                0xD800..=0xDBFF => *pending = Some(code),
                0xDC00..=0xDFFF => {
                    return Err(self.syntax_error_at(
                        escape_offset,
                        SyntaxError::UnpairedSurrogate(u32::from(code)),
                    ));
                }
                // Any other 16-bit value is a valid scalar.
                _ => self.push_char(char::from_u32(u32::from(code)).unwrap()),
            }
        }
        Ok(())
    }

    fn push_char(&mut self, ch: char) {
        let mut buf = [0_u8; 4];
        self.scratch.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    }

    /// Validates the decoded scratch buffer as UTF-8 once and hands it to
    /// the handler as a key or a string value.
    fn emit_scratch_string(&mut self, is_key: bool) -> Result<(), ParseError<H::Error>> {
        let Ok(text) = str::from_utf8(&self.scratch) else {
            return Err(self.syntax_error(SyntaxError::InvalidUtf8));
        };
        let result = if is_key {
            self.handler.key(text)
        } else {
            self.handler.string(text)
        };
        result.map_err(|e| self.handler_abort(e))
    }

    // --------------------------------------------------------------------
    // Containers
    // --------------------------------------------------------------------

    fn enter_container(&mut self) -> Result<(), ParseError<H::Error>> {
        if self.depth >= self.max_depth {
            return Err(self.syntax_error(SyntaxError::DepthLimitExceeded(self.max_depth)));
        }
        self.depth += 1;
        Ok(())
    }

    /// Parses an array body; the `[` has already been consumed.
    fn parse_array(&mut self) -> Result<(), ParseError<H::Error>> {
        self.enter_container()?;
        self.handler.start_array().map_err(|e| self.handler_abort(e))?;
        self.skip_whitespace()?;
        if self.must_peek()? == b']' {
            self.cursor.bump();
        } else {
            loop {
                self.parse_value()?;
                self.skip_whitespace()?;
                match self.must_peek()? {
                    b',' => {
                        self.cursor.bump();
                        self.skip_whitespace()?;
                    }
                    b']' => {
                        self.cursor.bump();
                        break;
                    }
                    other => {
                        return Err(self.syntax_error(SyntaxError::ExpectedCommaOrClose {
                            expected: ']',
                            found: char::from(other),
                        }));
                    }
                }
            }
        }
        self.depth -= 1;
        self.handler.end_array().map_err(|e| self.handler_abort(e))
    }

    /// Parses an object body; the `{` has already been consumed.
    fn parse_object(&mut self) -> Result<(), ParseError<H::Error>> {
        self.enter_container()?;
        self.handler.start_object().map_err(|e| self.handler_abort(e))?;
        self.skip_whitespace()?;
        if self.must_peek()? == b'}' {
            self.cursor.bump();
        } else {
            loop {
                match self.must_peek()? {
                    b'"' => self.cursor.bump(),
                    other => {
                        return Err(self.syntax_error(SyntaxError::ExpectedKey(char::from(other))));
                    }
                }
                self.decode_string()?;
                self.emit_scratch_string(true)?;
                self.skip_whitespace()?;
                match self.must_peek()? {
                    b':' => self.cursor.bump(),
                    other => {
                        return Err(self.syntax_error(SyntaxError::ExpectedColon(char::from(other))));
                    }
                }
                self.skip_whitespace()?;
                self.parse_value()?;
                self.skip_whitespace()?;
                match self.must_peek()? {
                    b',' => {
                        self.cursor.bump();
                        self.skip_whitespace()?;
                    }
                    b'}' => {
                        self.cursor.bump();
                        break;
                    }
                    other => {
                        return Err(self.syntax_error(SyntaxError::ExpectedCommaOrClose {
                            expected: '}',
                            found: char::from(other),
                        }));
                    }
                }
            }
        }
        self.depth -= 1;
        self.handler.end_object().map_err(|e| self.handler_abort(e))
    }
}

// ------------------------------------------------------------------------
// Conveniences over the run/callback contract
// ------------------------------------------------------------------------

/// Parses one complete JSON document from an in-memory buffer.
///
/// Equivalent to [`Parser::run`] followed by [`Parser::expect_end`] over a
/// [`SliceSource`]; the input is handed to the parser as a single borrowed
/// chunk, so nothing is copied.
///
/// # Errors
///
/// See [`Parser::run`].
pub fn parse_slice<H: Handler>(input: &[u8], handler: &mut H) -> Result<(), ParseError<H::Error>> {
    let mut parser = Parser::new(SliceSource::new(input), handler);
    parser.run()?;
    parser.expect_end()
}

/// Parses one complete JSON document from a reader, pulling chunks
/// incrementally.
///
/// # Errors
///
/// See [`Parser::run`]; read failures surface as
/// [`ErrorKind::Io`](crate::ErrorKind::Io).
pub fn parse_reader<R, H>(reader: R, handler: &mut H) -> Result<(), ParseError<H::Error>>
where
    R: io::Read,
    H: Handler,
{
    let mut parser = Parser::new(ReadSource::new(reader), handler);
    parser.run()?;
    parser.expect_end()
}

/// Parses one complete JSON document from a file, reading it incrementally
/// and closing it once exhausted.
///
/// # Errors
///
/// See [`parse_reader`]; the open failure is reported at offset zero.
pub fn parse_path<P, H>(path: P, handler: &mut H) -> Result<(), ParseError<H::Error>>
where
    P: AsRef<Path>,
    H: Handler,
{
    let source = ReadSource::open(path).map_err(|e| ParseError {
        offset: 0,
        kind: ErrorKind::Io(e),
    })?;
    let mut parser = Parser::new(source, handler);
    parser.run()?;
    parser.expect_end()
}

#[cfg(test)]
mod tests {
    use super::{NumberState, NumberStep, number_step};

    fn scan(input: &str) -> Result<usize, &'static str> {
        let mut state = NumberState::Start;
        for (i, &b) in input.as_bytes().iter().enumerate() {
            match number_step(state, b) {
                NumberStep::Continue(next) => state = next,
                NumberStep::End => return Ok(i),
                NumberStep::Reject(msg) => return Err(msg),
            }
        }
        if state.is_accepting() {
            Ok(input.len())
        } else {
            Err("unexpected end")
        }
    }

    #[test]
    fn accepts_the_number_grammar() {
        for ok in ["0", "-0", "1", "-42", "10.5", "0.0001", "1e10", "1E+2", "1.5e-3"] {
            assert_eq!(scan(ok), Ok(ok.len()), "{ok}");
        }
    }

    #[test]
    fn stops_at_the_first_non_number_byte() {
        assert_eq!(scan("12,"), Ok(2));
        assert_eq!(scan("1.5]"), Ok(3));
        assert_eq!(scan("0 "), Ok(1));
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(scan("01").is_err());
        assert!(scan("1.").is_err());
        assert!(scan("1.e5").is_err());
        assert!(scan("1e").is_err());
        assert!(scan("1e+").is_err());
        assert!(scan("-").is_err());
        assert!(scan("-x").is_err());
    }
}
