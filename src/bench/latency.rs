//! Wall-clock latency runner
//! Times a fixed number of sequential round-trips over one owned connection

use std::fmt;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::{BenchError, Result};

/// Outcome of one completed timed run
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub iterations: u64,
    pub total: Duration,
}

impl Measurement {
    pub fn total_secs(&self) -> f64 {
        self.total.as_secs_f64()
    }

    /// Total time divided by iteration count
    pub fn per_iteration_secs(&self) -> f64 {
        self.total_secs() / self.iterations as f64
    }

    pub fn per_iteration_millis(&self) -> f64 {
        self.per_iteration_secs() * 1000.0
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "Took total of: {} s", self.total_secs())?;
        writeln!(
            f,
            "Per iteration: {} s ({} ms)",
            self.per_iteration_secs(),
            self.per_iteration_millis()
        )?;
        writeln!(f)
    }
}

/// Runs benchmarks one after another against a single connection.
///
/// Reports go to `out` (stdout unless built with [`Benchmarker::with_output`]).
pub struct Benchmarker<C, W = io::Stdout> {
    conn: C,
    out: W,
}

impl<C> Benchmarker<C> {
    pub fn new(conn: C) -> Self {
        Self::with_output(conn, io::stdout())
    }
}

impl<C, W: Write> Benchmarker<C, W> {
    pub fn with_output(conn: C, out: W) -> Self {
        Self { conn, out }
    }

    /// Run `op` exactly `iterations` times and print the report.
    ///
    /// The first failing call ends the run: the error is returned as is and
    /// nothing is printed.
    pub fn run_timed<X, F>(
        &mut self,
        name: &str,
        iterations: u64,
        ctx: &mut X,
        mut op: F,
    ) -> Result<Measurement>
    where
        F: FnMut(&mut C, &mut X) -> Result<()>,
    {
        if iterations == 0 {
            return Err(BenchError::ZeroIterations);
        }

        debug!(name, iterations, "starting timed run");

        let start = Instant::now();
        for _ in 0..iterations {
            op(&mut self.conn, &mut *ctx)?;
        }
        let total = start.elapsed();

        let measurement = Measurement {
            name: name.to_string(),
            iterations,
            total,
        };

        write!(self.out, "{}", measurement)?;
        self.out.flush()?;

        info!(
            name,
            iterations,
            total_secs = measurement.total_secs(),
            per_iteration_ms = measurement.per_iteration_millis(),
            "timed run complete"
        );

        Ok(measurement)
    }

    /// Run `op` once, untimed
    pub fn setup<T, F>(&mut self, op: F) -> Result<T>
    where
        F: FnOnce(&mut C) -> Result<T>,
    {
        op(&mut self.conn)
    }

    pub fn connection(&self) -> &C {
        &self.conn
    }

    pub fn output(&self) -> &W {
        &self.out
    }
}
