//! Benchmark errors
//!
//! Every variant is fatal to the run that produced it.

use thiserror::Error;

/// Errors raised while configuring or running a benchmark
#[derive(Debug, Error)]
pub enum BenchError {
    /// Connection failed or dropped
    #[error("redis connection error: {0}")]
    Connection(#[from] redis::RedisError),

    /// Server rejected the command with an error reply
    #[error("{command} rejected by server: {message}")]
    ErrorReply { command: String, message: String },

    /// Reply fell outside the command's accepted set
    #[error("unexpected response to {command}: {reply:?}")]
    UnexpectedResponse {
        command: String,
        reply: redis::Value,
    },

    /// run_timed was asked for zero iterations
    #[error("iteration count must be at least 1")]
    ZeroIterations,

    /// Report could not be written
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),

    /// REDIS_PORT is not a valid port number
    #[error("REDIS_PORT must be a port number, got: {0}")]
    InvalidPort(String),
}

impl BenchError {
    /// Classify a client error raised while running `command`.
    ///
    /// Error replies (`WRONGTYPE`, unknown command, module errors) are
    /// responses, not link failures.
    pub fn from_redis(command: &str, err: redis::RedisError) -> Self {
        let server_reply = matches!(
            err.kind(),
            redis::ErrorKind::ResponseError | redis::ErrorKind::ExtensionError
        ) || err.code().is_some();

        if server_reply {
            BenchError::ErrorReply {
                command: command.to_string(),
                message: err.to_string(),
            }
        } else {
            BenchError::Connection(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
