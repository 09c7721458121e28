//! Throughput benchmark CLI
//! MSGPACK.UPSERTI64 vs HSET, one blocking connection

use anyhow::Context;
use redis_bench::{run_suite, Benchmarker, Config, ITERATIONS};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(url = %config.redis_url(), iterations = ITERATIONS, "connecting");

    let conn = config
        .connect()
        .with_context(|| format!("Failed to connect to {}", config.redis_url()))?;

    let mut bench = Benchmarker::new(conn);
    let results = run_suite(&mut bench, ITERATIONS).context("Benchmark aborted")?;

    info!(benchmarks = results.len(), "done");
    Ok(())
}
