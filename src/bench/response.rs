//! Reply classification
//!
//! Each benchmarked command declares which integer replies count as success.
//! Everything else, including non-integer replies, is unexpected.

use redis::Value;

use crate::error::{BenchError, Result};

/// Classified server reply
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Expected(i64),
    Unexpected(Value),
}

/// Integer replies a command is allowed to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedReplies(&'static [i64]);

impl AcceptedReplies {
    /// "Added" (1) or "already present / updated" (0)
    pub const ADDED_OR_UPDATED: AcceptedReplies = AcceptedReplies(&[0, 1]);

    pub const fn new(values: &'static [i64]) -> Self {
        Self(values)
    }

    pub fn classify(&self, reply: Value) -> Response {
        match reply {
            Value::Int(n) if self.0.contains(&n) => Response::Expected(n),
            other => Response::Unexpected(other),
        }
    }

    /// Classify and turn an unexpected reply into an error naming `command`
    pub fn check(&self, command: &str, reply: Value) -> Result<i64> {
        match self.classify(reply) {
            Response::Expected(n) => Ok(n),
            Response::Unexpected(reply) => Err(BenchError::UnexpectedResponse {
                command: command.to_string(),
                reply,
            }),
        }
    }
}
