//! Error type shared by every operation in the crate.
//!
//! Usage errors (`InvalidBound`, `InvalidCharset`, `EmptyCollection`) are
//! detected before any entropy is consumed. `SourceUnavailable` is the only
//! error that can occur after randomness has been drawn; it is surfaced
//! immediately and never retried or masked by a weaker source.

use std::io;

use thiserror::Error;

/// Errors returned by the random value generators.
#[derive(Debug, Error)]
pub enum RandomError {
    /// The requested range bound is zero or negative.
    #[error("bound must be greater than zero")]
    InvalidBound,

    /// The charset contains no symbols.
    #[error("charset must not be empty")]
    InvalidCharset,

    /// A selection was requested from a collection with no elements.
    #[error("cannot select from an empty collection")]
    EmptyCollection,

    /// The secure byte source failed to produce randomness.
    #[error("secure randomness source unavailable: {0}")]
    SourceUnavailable(#[source] io::Error),

    /// A token could not be decoded with the URL-safe alphabet.
    #[error("malformed token: {0}")]
    InvalidToken(#[from] base64::DecodeError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, RandomError>;
