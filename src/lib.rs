//! redis-bench
//!
//! Synchronous latency benchmark comparing the msgpack module's
//! `MSGPACK.UPSERTI64` with a plain `HSET`.
//!
//! ## Layout
//! - Config: target port from `REDIS_PORT` (and `.env`)
//! - Bench: the timed runner, reply classification, command catalogue
//! - Error: the crate's error enum

pub mod bench;
pub mod config;
pub mod error;

pub use bench::{run_suite, Benchmarker, Counter, KeyCommand, Measurement};
pub use config::Config;
pub use error::{BenchError, Result};

/// Round-trips per benchmarked command
pub const ITERATIONS: u64 = 100_000;
