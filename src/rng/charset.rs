//! Random strings over an arbitrary alphabet
//!
//! A charset is an ordered sequence of symbols (Unicode scalar values).
//! Every *position* is equally likely, so a symbol listed twice is drawn
//! twice as often as one listed once.
//!
//! ## Rejection sampling
//!
//! For a charset of length `L`, draws are `w` bytes wide where `w` is the
//! smallest width with `256^w >= L`; for the usual ASCII charsets `w = 1`.
//! Let
//!
//! ```text
//! max = floor(256^w / L) * L
//! ```
//!
//! the largest multiple of `L` not exceeding `256^w`. A big-endian draw
//! `d` is accepted iff `d < max` and then selects position `d % L`; draws
//! `>= max` are discarded. Every position therefore maps from exactly
//! `max / L` accepted draws, and each draw is accepted with probability at
//! least one half.
//!
//! ## Read-ahead
//!
//! Because some draws are discarded, the sampler requests more bytes than
//! strictly needed for the symbols still missing (the over-read factor,
//! 1.5 by default) and refills only when that batch is exhausted. The
//! buffer is local to each call.

use tracing::trace;

use crate::error::{RandomError, Result};
use crate::rng::source::{ByteSource, OsRng};

/// Lowercase and uppercase ASCII letters.
pub const ALPHA: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase ASCII letters.
pub const ALPHA_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters.
pub const ALPHA_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII letters followed by decimal digits.
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Decimal digits.
pub const DIGITS: &str = "0123456789";

/// Lowercase hexadecimal digits.
pub const HEX: &str = "0123456789abcdef";

/// The standard base64 alphabet.
pub const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Default ratio of drawn symbols to requested symbols per refill.
pub const DEFAULT_OVER_READ: f64 = 1.5;

const MIN_OVER_READ: f64 = 1.0;
const MAX_OVER_READ: f64 = 16.0;

/// Reusable sampler for strings over a fixed, validated charset.
#[derive(Clone, Debug)]
pub struct CharsetSampler {
    symbols: Vec<char>,
    /// Bytes per draw.
    width: usize,
    /// Draws `>= limit` are rejected.
    limit: u128,
    over_read: f64,
}

impl CharsetSampler {
    /// Builds a sampler over the symbols of `charset`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidCharset`] if `charset` is empty.
    pub fn new(charset: &str) -> Result<Self> {
        let symbols: Vec<char> = charset.chars().collect();
        if symbols.is_empty() {
            return Err(RandomError::InvalidCharset);
        }

        let len = symbols.len() as u128;
        let mut width = 1;
        let mut space: u128 = 256;
        while space < len {
            width += 1;
            space <<= 8;
        }

        Ok(Self {
            symbols,
            width,
            limit: space / len * len,
            over_read: DEFAULT_OVER_READ,
        })
    }

    /// Sets the over-read factor used to size each refill.
    ///
    /// Values are clamped to `[1.0, 16.0]`; `NaN` is treated as `1.0`.
    pub fn with_over_read(mut self, factor: f64) -> Self {
        self.over_read = if factor.is_nan() {
            MIN_OVER_READ
        } else {
            factor.clamp(MIN_OVER_READ, MAX_OVER_READ)
        };
        self
    }

    /// Number of positions in the charset, counting duplicates.
    pub fn charset_len(&self) -> usize {
        self.symbols.len()
    }

    /// Number of bytes consumed per draw.
    pub fn draw_width(&self) -> usize {
        self.width
    }

    /// Returns a string of exactly `n` symbols drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::SourceUnavailable`] if `rng` fails. No partial
    /// string is ever returned.
    pub fn sample_with<R: ByteSource + ?Sized>(&self, rng: &mut R, n: usize) -> Result<String> {
        if n == 0 {
            return Ok(String::new());
        }

        let len = self.symbols.len() as u128;
        let mut out = String::with_capacity(n);
        let mut produced = 0;
        let mut rejected = 0usize;
        let mut refills = 0usize;
        let mut buf = vec![0u8; self.read_len(n)];

        loop {
            buf.truncate(self.read_len(n - produced));
            rng.fill_bytes(&mut buf)?;
            refills += 1;

            for draw in buf.chunks_exact(self.width) {
                let value = draw.iter().fold(0u128, |acc, &b| (acc << 8) | u128::from(b));

                if value >= self.limit {
                    rejected += 1;
                    continue;
                }

                out.push(self.symbols[(value % len) as usize]);
                produced += 1;

                if produced == n {
                    trace!(
                        symbols = n,
                        charset_len = self.symbols.len(),
                        rejected,
                        refills,
                        "charset sample complete"
                    );
                    return Ok(out);
                }
            }
        }
    }

    /// Returns a string of exactly `n` symbols from the OS source.
    pub fn sample(&self, n: usize) -> Result<String> {
        self.sample_with(&mut OsRng, n)
    }

    /// Bytes to request when `missing` symbols are still needed.
    fn read_len(&self, missing: usize) -> usize {
        let draws = (missing as f64 * self.over_read).ceil() as usize;
        draws.max(missing).saturating_mul(self.width)
    }
}

/// Returns a string of `n` symbols drawn uniformly from `charset` using `rng`.
///
/// `n == 0` yields an empty string without validating the charset or
/// consuming entropy.
///
/// # Errors
///
/// - [`RandomError::InvalidCharset`] if `charset` is empty and `n > 0`.
/// - [`RandomError::SourceUnavailable`] if `rng` fails.
pub fn random_string_with<R: ByteSource + ?Sized>(
    rng: &mut R,
    n: usize,
    charset: &str,
) -> Result<String> {
    if n == 0 {
        return Ok(String::new());
    }

    CharsetSampler::new(charset)?.sample_with(rng, n)
}

/// Returns a string of `n` symbols drawn uniformly from `charset`.
///
/// ```
/// use secrand::charset::HEX;
///
/// let id = secrand::random_string(16, HEX)?;
/// assert_eq!(id.len(), 16);
/// assert!(id.chars().all(|c| HEX.contains(c)));
/// # Ok::<(), secrand::RandomError>(())
/// ```
pub fn random_string(n: usize, charset: &str) -> Result<String> {
    random_string_with(&mut OsRng, n, charset)
}

/// Returns a random alphanumeric string of length `n`.
pub fn alphanumeric_string(n: usize) -> Result<String> {
    random_string(n, ALPHANUMERIC)
}
