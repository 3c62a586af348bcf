//! Raw random bytes and URL-safe tokens
//!
//! These are direct pass-throughs of the byte source. Tokens are encoded
//! with the base64 URL-safe alphabet (`-` and `_` instead of `+` and `/`)
//! including `=` padding, so a token for `n` bytes is always
//! `4 * ceil(n / 3)` characters long.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;

use crate::error::Result;
use crate::rng::source::{ByteSource, OsRng};

/// Returns `n` random bytes drawn from `rng`.
///
/// `n == 0` yields an empty buffer without consuming entropy.
pub fn random_bytes_with<R: ByteSource + ?Sized>(rng: &mut R, n: usize) -> Result<Vec<u8>> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut out = vec![0u8; n];
    rng.fill_bytes(&mut out)?;
    Ok(out)
}

/// Returns `n` random bytes from the OS source.
pub fn random_bytes(n: usize) -> Result<Vec<u8>> {
    random_bytes_with(&mut OsRng, n)
}

/// Overwrites `buf` with random bytes from the OS source.
pub fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng.fill_bytes(buf)
}

/// Returns a fixed-size array of random bytes, e.g. a key or nonce.
///
/// ```
/// let nonce: [u8; 12] = secrand::random_array()?;
/// # let _ = nonce;
/// # Ok::<(), secrand::RandomError>(())
/// ```
pub fn random_array<const N: usize>() -> Result<[u8; N]> {
    let mut out = [0u8; N];
    OsRng.fill_bytes(&mut out)?;
    Ok(out)
}

/// Draws `n` bytes from `rng` and encodes them as a URL-safe token.
pub fn random_token_with<R: ByteSource + ?Sized>(rng: &mut R, n: usize) -> Result<String> {
    let bytes = random_bytes_with(rng, n)?;
    Ok(URL_SAFE.encode(bytes))
}

/// Returns a URL-safe token carrying `n` random bytes.
///
/// ```
/// let token = secrand::random_token(32)?;
/// assert_eq!(token.len(), 44);
/// # Ok::<(), secrand::RandomError>(())
/// ```
pub fn random_token(n: usize) -> Result<String> {
    random_token_with(&mut OsRng, n)
}

/// Decodes a token produced by [`random_token`] back into its raw bytes.
///
/// # Errors
///
/// Returns [`RandomError::InvalidToken`](crate::RandomError::InvalidToken)
/// if `token` is not valid padded URL-safe base64.
pub fn decode_token(token: &str) -> Result<Vec<u8>> {
    Ok(URL_SAFE.decode(token)?)
}
