//! Benchmark: whole-buffer parsing versus chunked delivery.
#![allow(missing_docs)]

use std::{convert::Infallible, hint::black_box};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use jsonpull::{Handler, IterSource, Parser, parse_slice};

/// Counts events without allocating, so the measurement stays on the parser.
#[derive(Default)]
struct CountingHandler {
    events: usize,
}

impl Handler for CountingHandler {
    type Error = Infallible;

    fn start_object(&mut self) -> Result<(), Self::Error> {
        self.events += 1;
        Ok(())
    }

    fn key(&mut self, _key: &str) -> Result<(), Self::Error> {
        self.events += 1;
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Self::Error> {
        self.events += 1;
        Ok(())
    }

    fn start_array(&mut self) -> Result<(), Self::Error> {
        self.events += 1;
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Self::Error> {
        self.events += 1;
        Ok(())
    }

    fn string(&mut self, _value: &str) -> Result<(), Self::Error> {
        self.events += 1;
        Ok(())
    }

    fn number(&mut self, _value: f64) -> Result<(), Self::Error> {
        self.events += 1;
        Ok(())
    }

    fn boolean(&mut self, _value: bool) -> Result<(), Self::Error> {
        self.events += 1;
        Ok(())
    }

    fn null(&mut self) -> Result<(), Self::Error> {
        self.events += 1;
        Ok(())
    }
}

/// A deterministic document mixing objects, arrays, strings with escapes, and
/// numbers, roughly `target_len` bytes long.
fn make_payload(target_len: usize) -> String {
    let mut s = String::with_capacity(target_len + 64);
    s.push('[');
    let mut i = 0usize;
    while s.len() < target_len {
        if i > 0 {
            s.push(',');
        }
        s.push_str(&format!(
            r#"{{"id":{i},"name":"item-{i}\n","score":{}.{:03},"tags":["a","b"],"ok":true}}"#,
            i % 997,
            i % 1000,
        ));
        i += 1;
    }
    s.push(']');
    s
}

fn parse_whole(payload: &[u8]) -> usize {
    let mut handler = CountingHandler::default();
    parse_slice(black_box(payload), &mut handler).unwrap();
    handler.events
}

fn parse_chunked(payload: &[u8], chunk_size: usize) -> usize {
    let chunks: Vec<Vec<u8>> = payload.chunks(chunk_size).map(<[u8]>::to_vec).collect();
    let mut handler = CountingHandler::default();
    let mut parser = Parser::new(IterSource::new(black_box(chunks)), &mut handler);
    parser.run().unwrap();
    parser.expect_end().unwrap();
    handler.events
}

fn bench_parse(c: &mut Criterion) {
    let payload = make_payload(64 * 1024);

    let mut group = c.benchmark_group("parse_throughput");
    group.throughput(Throughput::Bytes(payload.len() as u64));

    group.bench_function("whole_slice", |b| {
        b.iter(|| parse_whole(payload.as_bytes()));
    });

    for &chunk_size in &[16usize, 256, 4096] {
        group.bench_with_input(
            BenchmarkId::new("chunked", chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| parse_chunked(payload.as_bytes(), chunk_size));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
