#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use secrand::{ByteSource, RandomError, Result};

/// Replays a fixed byte script and records the size of every request.
/// Fails with `SourceUnavailable` once the script cannot cover a request.
pub struct ScriptedSource {
    bytes: VecDeque<u8>,
    pub requests: Vec<usize>,
}

impl ScriptedSource {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
            requests: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

impl ByteSource for ScriptedSource {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        let len = buf.len();
        self.requests.push(len);

        if self.bytes.len() < len {
            return Err(RandomError::SourceUnavailable(io::Error::other(
                "script exhausted",
            )));
        }

        for (slot, b) in buf.iter_mut().zip(self.bytes.drain(..len)) {
            *slot = b;
        }

        Ok(())
    }
}

/// A source that always fails, used to prove no entropy is consumed.
pub struct FailingSource;

impl ByteSource for FailingSource {
    fn fill_bytes(&mut self, _buf: &mut [u8]) -> Result<()> {
        Err(RandomError::SourceUnavailable(io::Error::other(
            "entropy unavailable",
        )))
    }
}

/// Asserts every bucket is within `tolerance` of `expected`.
pub fn assert_balanced(counts: &[usize], expected: usize, tolerance: usize) {
    for (value, &count) in counts.iter().enumerate() {
        assert!(
            count.abs_diff(expected) <= tolerance,
            "value {value} drawn {count} times, expected {expected} +/- {tolerance} (counts: {counts:?})"
        );
    }
}
