#![no_main]

use jsonpull::{Event, EventCollector, IterSource, ParseError, Parser, SliceSource};
use libfuzzer_sys::fuzz_target;

/// Parses `input` as one chunk, collecting either the events or the error's
/// rendered form.
fn parse_whole(input: &[u8]) -> Result<Vec<Event>, (usize, String)> {
    let mut collector = EventCollector::new();
    let mut parser = Parser::new(SliceSource::new(input), &mut collector);
    match parser.run().and_then(|()| parser.expect_end()) {
        Ok(()) => Ok(collector.into_events()),
        Err(e) => Err(describe(&e)),
    }
}

/// Parses `input` delivered in fixed-size chunks.
fn parse_chunked(input: &[u8], chunk_size: usize) -> Result<Vec<Event>, (usize, String)> {
    let chunks: Vec<Vec<u8>> = input.chunks(chunk_size).map(<[u8]>::to_vec).collect();
    let mut collector = EventCollector::new();
    let mut parser = Parser::new(IterSource::new(chunks), &mut collector);
    match parser.run().and_then(|()| parser.expect_end()) {
        Ok(()) => Ok(collector.into_events()),
        Err(e) => Err(describe(&e)),
    }
}

fn describe(error: &ParseError) -> (usize, String) {
    (error.offset, error.to_string())
}

// The first two bytes pick the chunk size; the rest is the document. Parsing
// must never panic, and the outcome (events or error) must not depend on the
// chunking.
fuzz_target!(|data: &[u8]| {
    let Some((header, document)) = data.split_at_checked(2) else {
        return;
    };
    let chunk_size = 1 + usize::from(u16::from_le_bytes([header[0], header[1]]) % 64);

    let whole = parse_whole(document);
    let chunked = parse_chunked(document, chunk_size);
    assert_eq!(whole, chunked);
});
