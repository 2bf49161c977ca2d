//! Shared helpers for the test suite.

use crate::{Event, EventCollector, IterSource, ParseError, Parser, SliceSource, SyntaxError};

/// Parses a complete document from one borrowed chunk.
pub fn parse_events(input: &[u8]) -> Result<Vec<Event>, ParseError> {
    let mut collector = EventCollector::new();
    let mut parser = Parser::new(SliceSource::new(input), &mut collector);
    parser.run().and_then(|()| parser.expect_end())?;
    Ok(collector.into_events())
}

/// Parses a complete document delivered in the given chunks.
pub fn parse_events_chunked(chunks: Vec<Vec<u8>>) -> Result<Vec<Event>, ParseError> {
    let mut collector = EventCollector::new();
    let mut parser = Parser::new(IterSource::new(chunks), &mut collector);
    parser.run().and_then(|()| parser.expect_end())?;
    Ok(collector.into_events())
}

/// Splits `input` into two chunks at `at`.
pub fn split_at(input: &[u8], at: usize) -> Vec<Vec<u8>> {
    vec![input[..at].to_vec(), input[at..].to_vec()]
}

/// One chunk per byte.
pub fn byte_at_a_time(input: &[u8]) -> Vec<Vec<u8>> {
    input.iter().map(|&b| vec![b]).collect()
}

/// Asserts that parsing `input` whole, split in two at every boundary, and
/// one byte at a time all yield exactly `expected`.
pub fn assert_partition_invariant(input: &str, expected: &[Event]) {
    let bytes = input.as_bytes();
    assert_eq!(parse_events(bytes).unwrap(), expected, "whole: {input}");
    for at in 0..=bytes.len() {
        assert_eq!(
            parse_events_chunked(split_at(bytes, at)).unwrap(),
            expected,
            "split at {at}: {input}"
        );
    }
    assert_eq!(
        parse_events_chunked(byte_at_a_time(bytes)).unwrap(),
        expected,
        "byte at a time: {input}"
    );
}

/// The offset and syntax error produced by a failing input.
pub fn parse_error(input: &[u8]) -> (usize, SyntaxError) {
    let err = parse_events(input).unwrap_err();
    let syntax = err
        .syntax()
        .cloned()
        .unwrap_or_else(|| panic!("expected a syntax error, got: {err}"));
    (err.offset, syntax)
}

/// Same as [`parse_error`], for chunked input.
pub fn parse_error_chunked(chunks: Vec<Vec<u8>>) -> (usize, SyntaxError) {
    let err = parse_events_chunked(chunks).unwrap_err();
    let syntax = err
        .syntax()
        .cloned()
        .unwrap_or_else(|| panic!("expected a syntax error, got: {err}"));
    (err.offset, syntax)
}
