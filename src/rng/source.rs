//! Secure byte sources
//!
//! Every generator in this crate is written against the [`ByteSource`]
//! capability rather than a process-wide singleton. The production source is
//! [`OsRng`], a zero-sized handle over the operating system CSPRNG; tests and
//! embedders may supply their own implementation.
//!
//! A source either fills the whole buffer or reports
//! [`RandomError::SourceUnavailable`]. Partially filled buffers must never be
//! treated as random output.

use tracing::warn;

use crate::error::{RandomError, Result};
use crate::os::sys_random;

/// A source of unpredictable, uniformly distributed bytes.
pub trait ByteSource {
    /// Fills `buf` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::SourceUnavailable`] if the underlying entropy
    /// source cannot produce output. The contents of `buf` are unspecified
    /// in that case.
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()>;
}

impl<R: ByteSource + ?Sized> ByteSource for &mut R {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(buf)
    }
}

/// Handle to the operating system's cryptographically secure RNG.
///
/// `OsRng` holds no state: constructing one is free, and independent
/// handles may be used concurrently from any number of threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRng;

impl OsRng {
    /// Creates a new handle to the OS entropy source.
    pub fn new() -> Self {
        Self
    }
}

impl ByteSource for OsRng {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        if buf.is_empty() {
            return Ok(());
        }

        let requested = buf.len();
        sys_random(buf).map_err(|err| {
            warn!(error = %err, requested, "os entropy source failed");
            RandomError::SourceUnavailable(err)
        })
    }
}
