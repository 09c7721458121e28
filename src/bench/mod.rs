//! Benchmark module
//! Sequential round-trip timing for the msgpack upsert command and HSET

pub mod commands;
pub mod latency;
pub mod response;

pub use commands::{clear_keys, Counter, KeyCommand, HSET, UPSERT_I64};
pub use latency::{Benchmarker, Measurement};
pub use response::{AcceptedReplies, Response};

use std::io::Write;

use redis::ConnectionLike;
use tracing::info;

use crate::error::Result;

/// Commands timed by [`run_suite`], in order
pub const SUITE: [KeyCommand; 2] = [UPSERT_I64, HSET];

/// Clear the suite's keys, then time each command for `iterations` round-trips
pub fn run_suite<C, W>(bench: &mut Benchmarker<C, W>, iterations: u64) -> Result<Vec<Measurement>>
where
    C: ConnectionLike,
    W: Write,
{
    let keys: Vec<&str> = SUITE.iter().map(|c| c.key).collect();
    let removed = bench.setup(|conn| clear_keys(conn, &keys))?;
    info!(removed, "cleared benchmark keys");

    let mut results = Vec::with_capacity(SUITE.len());
    for command in SUITE {
        let mut counter = Counter::new();
        let measurement = bench.run_timed(command.name, iterations, &mut counter, |conn, counter| {
            command.invoke(conn, counter).map(|_| ())
        })?;
        results.push(measurement);
    }

    Ok(results)
}
