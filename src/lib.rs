//! Secure random values without modulo bias
//!
//! This crate turns the operating system's cryptographically secure byte
//! stream into higher-level values: bounded integers, booleans,
//! permutations, shuffled slices, charset-constrained strings, raw byte
//! buffers and URL-safe tokens.
//!
//! It is meant for values that must be unpredictable (session tokens,
//! nonces, one-time codes, security-relevant sampling). It is **not** a
//! seedable or reproducible PRNG.
//!
//! # Module overview
//!
//! - `os`  
//!   Crate-private platform layer. Fills buffers from `getrandom(2)` on
//!   Linux, `arc4random_buf` on macOS and `BCryptGenRandom` on Windows,
//!   reporting failures instead of panicking.
//!
//! - [`rng`]  
//!   The generators. The [`ByteSource`] trait is the capability every
//!   algorithm draws from; [`OsRng`] is the production implementation.
//!   Bounded integers use masked rejection sampling, strings use byte-level
//!   rejection sampling over the charset, and shuffles are Fisher-Yates
//!   on top of the bounded integer sampler.
//!
//! - [`error`]  
//!   [`RandomError`] and the crate [`Result`] alias.
//!
//! # Guarantees
//!
//! - Every output value in a requested range is exactly equally likely.
//! - Usage errors are reported before any entropy is consumed.
//! - A failing entropy source is surfaced as
//!   [`RandomError::SourceUnavailable`]; there is no fallback to a weaker
//!   generator and no internal retry.
//! - No global state: all functions are safe to call concurrently.
//!
//! # Example
//!
//! ```
//! use secrand::charset::ALPHANUMERIC;
//!
//! let code = secrand::random_string(8, ALPHANUMERIC)?;
//! let token = secrand::random_token(32)?;
//! let players = ["alice", "bob", "carol"];
//! let winner = secrand::select(&players)?;
//! # let _ = (code, token, winner);
//! # Ok::<(), secrand::RandomError>(())
//! ```

mod os;

pub mod error;
pub mod rng;

pub use error::{RandomError, Result};
pub use rng::*;
