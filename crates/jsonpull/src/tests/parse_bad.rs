//! Malformed documents: the error kind and the exact byte offset.

use std::io;

use rstest::rstest;

use super::utils::{parse_error, parse_error_chunked, parse_events};
use crate::{
    ErrorKind, EventCollector, Handler, Parser, ParserOptions, SliceSource, SyntaxError,
};

#[test]
fn empty_input_is_premature_end() {
    assert_eq!(parse_error(b""), (0, SyntaxError::UnexpectedEndOfInput));
}

#[test]
fn unknown_leading_byte() {
    assert_eq!(parse_error(b"@"), (0, SyntaxError::ExpectedValue('@')));
}

#[test]
fn trailing_comma_is_rejected_as_a_value_byte() {
    assert_eq!(parse_error(b"[1,]"), (3, SyntaxError::ExpectedValue(']')));
}

#[test]
fn missing_colon() {
    assert_eq!(parse_error(br#"{"a" 1}"#), (5, SyntaxError::ExpectedColon('1')));
}

#[test]
fn missing_comma_between_elements() {
    assert_eq!(
        parse_error(b"[1 2]"),
        (
            3,
            SyntaxError::ExpectedCommaOrClose {
                expected: ']',
                found: '2',
            }
        )
    );
}

#[test]
fn missing_closing_brace() {
    assert_eq!(
        parse_error(br#"{"a":1 "b":2}"#),
        (
            7,
            SyntaxError::ExpectedCommaOrClose {
                expected: '}',
                found: '"',
            }
        )
    );
}

#[test]
fn unquoted_key() {
    assert_eq!(parse_error(b"{1: 2}"), (1, SyntaxError::ExpectedKey('1')));
}

#[rstest]
#[case::object(b"{".as_slice(), 1)]
#[case::array(b"[".as_slice(), 1)]
#[case::after_value(br#"{"a":1"#.as_slice(), 6)]
#[case::after_comma(b"[1,".as_slice(), 3)]
#[case::after_colon(br#"{"a":"#.as_slice(), 5)]
fn premature_end_inside_containers(#[case] input: &[u8], #[case] offset: usize) {
    assert_eq!(parse_error(input), (offset, SyntaxError::UnexpectedEndOfInput));
}

#[rstest]
#[case::true_misspelled("truth", 3, "true")]
#[case::false_misspelled("falze", 3, "false")]
#[case::null_misspelled("nole", 1, "null")]
fn misspelled_literals(#[case] input: &str, #[case] offset: usize, #[case] literal: &'static str) {
    assert_eq!(
        parse_error(input.as_bytes()),
        (offset, SyntaxError::InvalidLiteral(literal))
    );
}

#[test]
fn truncated_literal_is_premature_end() {
    assert_eq!(parse_error(b"tru"), (3, SyntaxError::UnexpectedEndOfInput));
}

#[test]
fn error_offset_is_global_after_chunks_are_discarded() {
    let chunks = vec![b"[1,".to_vec(), b"2,".to_vec(), b"xyz]".to_vec()];
    assert_eq!(
        parse_error_chunked(chunks),
        (5, SyntaxError::ExpectedValue('x'))
    );
}

#[test]
fn error_offset_counts_discarded_whitespace_chunks() {
    let chunks = vec![b"   ".to_vec(), b"  ".to_vec(), b"@".to_vec()];
    assert_eq!(
        parse_error_chunked(chunks),
        (5, SyntaxError::ExpectedValue('@'))
    );
}

#[test]
fn default_depth_limit_stops_runaway_nesting() {
    let input = "[".repeat(200);
    assert_eq!(
        parse_error(input.as_bytes()),
        (129, SyntaxError::DepthLimitExceeded(128))
    );
}

#[test]
fn configured_depth_limit_is_enforced() {
    let mut collector = EventCollector::new();
    let mut parser = Parser::with_options(
        SliceSource::new(b"[[[]]]"),
        &mut collector,
        ParserOptions { max_depth: 2 },
    );
    let err = parser.run().unwrap_err();
    assert_eq!(err.offset, 3);
    assert_eq!(err.syntax(), Some(&SyntaxError::DepthLimitExceeded(2)));
}

#[test]
fn expect_end_rejects_trailing_content() {
    let mut collector = EventCollector::new();
    let mut parser = Parser::new(SliceSource::new(b"1 x"), &mut collector);
    parser.run().unwrap();
    let err = parser.expect_end().unwrap_err();
    assert_eq!(err.offset, 2);
    assert_eq!(err.syntax(), Some(&SyntaxError::TrailingCharacters('x')));
}

struct AbortOnNumber;

impl Handler for AbortOnNumber {
    type Error = io::Error;

    fn number(&mut self, _value: f64) -> Result<(), Self::Error> {
        Err(io::Error::other("no numbers here"))
    }
}

#[test]
fn handler_error_aborts_the_parse() {
    let mut handler = AbortOnNumber;
    let mut parser = Parser::new(SliceSource::new(b"[1]"), &mut handler);
    let err = parser.run().unwrap_err();
    assert_eq!(err.offset, 2);
    assert!(matches!(err.kind, ErrorKind::Handler(_)));
}

#[test]
fn errors_render_with_their_offset() {
    let err = parse_events(b"[1,]").unwrap_err();
    assert_eq!(err.to_string(), "expected a value, found ']' at byte offset 3");
}
