//! Sequence operations built on [`uniform_int`](crate::uniform_int)
//!
//! - [`shuffle`]: in-place Fisher-Yates shuffle
//! - [`permutation`]: uniformly random permutation of `0..n`
//! - [`select`] / [`select_index`]: uniform choice from a collection
//! - [`boolean`]: fair coin
//!
//! All randomness flows through the masked rejection sampler, so each
//! operation inherits its exact uniformity.
//!
//! # Non-atomicity
//!
//! A shuffle that fails midway returns the error immediately and leaves the
//! slice partially shuffled. It is never rolled back. The slice still holds
//! exactly the original elements, only their order is unspecified.

use crate::error::{RandomError, Result};
use crate::rng::source::{ByteSource, OsRng};
use crate::rng::uniform::below;

/// Shuffles `items` in place using randomness from `rng`.
///
/// Every one of the `len!` orderings is equally likely. Slices of length
/// zero or one are left untouched and consume no entropy.
///
/// # Errors
///
/// Returns [`RandomError::SourceUnavailable`] if `rng` fails; `items` may
/// then be partially shuffled.
pub fn shuffle_with<R: ByteSource + ?Sized, T>(rng: &mut R, items: &mut [T]) -> Result<()> {
    for i in (1..items.len()).rev() {
        let j = below(rng, i as u64 + 1)? as usize;
        items.swap(i, j);
    }

    Ok(())
}

/// Shuffles `items` in place using the OS source.
///
/// ```
/// let mut deck: Vec<u8> = (0..52).collect();
/// secrand::shuffle(&mut deck)?;
/// assert_eq!(deck.len(), 52);
/// # Ok::<(), secrand::RandomError>(())
/// ```
pub fn shuffle<T>(items: &mut [T]) -> Result<()> {
    shuffle_with(&mut OsRng, items)
}

/// Returns a uniformly random permutation of `0..n` drawn from `rng`.
pub fn permutation_with<R: ByteSource + ?Sized>(rng: &mut R, n: usize) -> Result<Vec<usize>> {
    let mut out: Vec<usize> = (0..n).collect();
    shuffle_with(rng, &mut out)?;
    Ok(out)
}

/// Returns a uniformly random permutation of `0..n`.
pub fn permutation(n: usize) -> Result<Vec<usize>> {
    permutation_with(&mut OsRng, n)
}

/// Returns a uniformly random index into a collection of length `len`.
///
/// # Errors
///
/// - [`RandomError::EmptyCollection`] if `len == 0`; no entropy is consumed.
/// - [`RandomError::SourceUnavailable`] if `rng` fails.
pub fn select_index_with<R: ByteSource + ?Sized>(rng: &mut R, len: usize) -> Result<usize> {
    if len == 0 {
        return Err(RandomError::EmptyCollection);
    }

    Ok(below(rng, len as u64)? as usize)
}

/// Returns a uniformly random index into a collection of length `len`.
pub fn select_index(len: usize) -> Result<usize> {
    select_index_with(&mut OsRng, len)
}

/// Returns a reference to a uniformly chosen element of `items`.
///
/// # Errors
///
/// - [`RandomError::EmptyCollection`] if `items` is empty.
/// - [`RandomError::SourceUnavailable`] if `rng` fails.
pub fn select_with<'a, R: ByteSource + ?Sized, T>(rng: &mut R, items: &'a [T]) -> Result<&'a T> {
    let index = select_index_with(rng, items.len())?;
    Ok(&items[index])
}

/// Returns a reference to a uniformly chosen element of `items`.
///
/// ```
/// let words = ["a", "b", "c"];
/// let pick = secrand::select(&words)?;
/// assert!(words.contains(pick));
/// # Ok::<(), secrand::RandomError>(())
/// ```
pub fn select<T>(items: &[T]) -> Result<&T> {
    select_with(&mut OsRng, items)
}

/// Returns `true` or `false` with probability exactly one half each.
pub fn boolean_with<R: ByteSource + ?Sized>(rng: &mut R) -> Result<bool> {
    Ok(below(rng, 2)? == 1)
}

/// Returns a fair random boolean from the OS source.
pub fn boolean() -> Result<bool> {
    boolean_with(&mut OsRng)
}
