//! Benchmark utilities and performance testing
//!
//! This module provides simple benchmarking functions for measuring
//! encoding and decoding performance. Only available with std feature.

#[cfg(feature = "std")]
use std::time::{Duration, Instant};

#[cfg(feature = "std")]
use alloc::string::String;

use crate::codec::DynamicBuffer;

/// Simple benchmark statistics
#[derive(Debug, Clone)]
pub struct BenchStats {
    /// Number of operations
    pub count: usize,
    /// Total duration
    pub total_duration: Duration,
    /// Average time per operation
    pub avg_ns_per_op: u64,
    /// Operations per second
    pub ops_per_sec: f64,
}

impl BenchStats {
    /// Create new stats from measurements
    pub fn new(count: usize, total_duration: Duration) -> Self {
        let total_ns = total_duration.as_nanos() as u64;
        let avg_ns_per_op = if count > 0 {
            total_ns / count as u64
        } else {
            0
        };
        let ops_per_sec = if total_ns > 0 {
            (count as f64) * 1_000_000_000.0 / (total_ns as f64)
        } else {
            0.0
        };

        Self {
            count,
            total_duration,
            avg_ns_per_op,
            ops_per_sec,
        }
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for BenchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ops, {:.2}ms total, {} ns/op, {:.0} ops/sec",
            self.count,
            self.total_duration.as_secs_f64() * 1000.0,
            self.avg_ns_per_op,
            self.ops_per_sec
        )
    }
}

/// Write one representative mixed record at the default cursor
#[cfg(feature = "std")]
fn encode_record(buf: &mut DynamicBuffer, i: usize) {
    buf.put_u32(i as u32, None); // seq
    buf.put_u64(1_700_000_000_000_000_000 + i as u64, None); // ts_ns (2023-11-15)
    buf.put_f64(50_000.0 + (i % 1000) as f64 / 100.0, None); // price with variation
    buf.put_u16((100 + i % 900) as u16, None); // qty with variation
    buf.put_bool(i % 3 == 0, None); // tagged flag
    buf.put_str(if i % 3 == 0 { "AAPL" } else { "order note" }, None);
}

/// Read the record back in field order
#[cfg(feature = "std")]
fn decode_record(buf: &mut DynamicBuffer) -> (u32, u64, f64, u16, bool, String) {
    (
        buf.get_u32(None),
        buf.get_u64(None),
        buf.get_f64(None),
        buf.get_u16(None),
        buf.get_bool(None),
        buf.get_string(None),
    )
}

/// Benchmark mixed record encoding
#[cfg(feature = "std")]
pub fn bench_mixed_encode(count: usize) -> BenchStats {
    let mut buf = DynamicBuffer::new();
    let start = Instant::now();

    for i in 0..count {
        buf.rewind();
        encode_record(&mut buf, i);
        std::hint::black_box(buf.len());
    }

    let duration = start.elapsed();
    BenchStats::new(count, duration)
}

/// Benchmark mixed record decoding
#[cfg(feature = "std")]
pub fn bench_mixed_decode(count: usize) -> BenchStats {
    // Pre-encode test buffers
    let mut payloads = std::vec::Vec::new();
    let mut buf = DynamicBuffer::new();

    for i in 0..count {
        buf.import(&[]);
        encode_record(&mut buf, i);
        payloads.push(buf.export());
    }

    let start = Instant::now();

    for payload in &payloads {
        buf.import(payload);
        let record = decode_record(&mut buf);
        std::hint::black_box(record);
    }

    let duration = start.elapsed();
    BenchStats::new(count, duration)
}

/// Benchmark encode + decode roundtrip
#[cfg(feature = "std")]
pub fn bench_mixed_roundtrip(count: usize) -> BenchStats {
    let mut buf = DynamicBuffer::new();
    let start = Instant::now();

    for i in 0..count {
        buf.import(&[]);
        encode_record(&mut buf, i);
        buf.rewind();
        let record = decode_record(&mut buf);
        std::hint::black_box(record);
    }

    let duration = start.elapsed();
    BenchStats::new(count, duration)
}

/// Run simple performance test suite
#[cfg(feature = "std")]
pub fn run_perf_test() {
    std::println!("dynbuf Performance Test Suite");
    std::println!("=================================");

    const TEST_COUNT: usize = 100_000;

    std::println!("\nTesting with {} operations...", TEST_COUNT);

    let encode_stats = bench_mixed_encode(TEST_COUNT);
    std::println!("Mixed encode: {}", encode_stats);

    let decode_stats = bench_mixed_decode(TEST_COUNT);
    std::println!("Mixed decode: {}", decode_stats);

    let roundtrip_stats = bench_mixed_roundtrip(TEST_COUNT);
    std::println!("Mixed roundtrip: {}", roundtrip_stats);

    // Smaller count for more detailed timing
    const DETAILED_COUNT: usize = 10_000;
    std::println!("\nDetailed timing with {} operations:", DETAILED_COUNT);

    let detailed_roundtrip = bench_mixed_roundtrip(DETAILED_COUNT);
    std::println!("Mixed roundtrip: {}", detailed_roundtrip);

    // Record size analysis
    let mut buf = DynamicBuffer::new();
    encode_record(&mut buf, 0);
    let record_size = buf.len();

    std::println!("\nRecord size analysis:");
    std::println!("Test record size: {} bytes", record_size);
    std::println!(
        "Throughput at {} rec/s: {:.2} MB/s",
        roundtrip_stats.ops_per_sec,
        roundtrip_stats.ops_per_sec * record_size as f64 / 1_000_000.0
    );
}
