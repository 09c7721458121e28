//! Benchmarked server commands
//!
//! Each command is `NAME key <i> [trailing...]`, where `<i>` comes from a
//! caller-owned [`Counter`] so every round-trip writes a fresh element.

use redis::{ConnectionLike, Value};

use super::response::AcceptedReplies;
use crate::error::{BenchError, Result};

/// Per-benchmark integer argument, advanced after every accepted reply
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter(i64);

impl Counter {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    fn advance(&mut self) {
        self.0 += 1;
    }
}

/// A single-key command with a counter argument
#[derive(Debug, Clone, Copy)]
pub struct KeyCommand {
    pub name: &'static str,
    pub key: &'static str,
    pub trailing: &'static [&'static str],
    pub accepted: AcceptedReplies,
}

/// Insert into a sorted msgpack int64 array; 1 if added, 0 if present
pub const UPSERT_I64: KeyCommand = KeyCommand {
    name: "MSGPACK.UPSERTI64",
    key: "msgpack:key",
    trailing: &[],
    accepted: AcceptedReplies::ADDED_OR_UPDATED,
};

/// Plain hash field write for comparison; 1 if new field, 0 if updated
pub const HSET: KeyCommand = KeyCommand {
    name: "HSET",
    key: "hset:key",
    trailing: &["0"],
    accepted: AcceptedReplies::ADDED_OR_UPDATED,
};

impl KeyCommand {
    pub fn build(&self, arg: i64) -> redis::Cmd {
        let mut cmd = redis::cmd(self.name);
        cmd.arg(self.key).arg(arg);
        for extra in self.trailing {
            cmd.arg(*extra);
        }
        cmd
    }

    /// One round-trip with the counter's current value, then validate
    pub fn invoke<C: ConnectionLike>(&self, conn: &mut C, counter: &mut Counter) -> Result<i64> {
        let reply: Value = self
            .build(counter.value())
            .query(conn)
            .map_err(|err| BenchError::from_redis(self.name, err))?;
        let n = self.accepted.check(self.name, reply)?;
        counter.advance();
        Ok(n)
    }
}

/// Delete `keys` so a run starts from scratch; returns how many existed
pub fn clear_keys<C: ConnectionLike>(conn: &mut C, keys: &[&str]) -> Result<i64> {
    redis::cmd("DEL")
        .arg(keys)
        .query(conn)
        .map_err(|err| BenchError::from_redis("DEL", err))
}
