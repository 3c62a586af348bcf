//! Uniform integers in `[0, n)`
//!
//! This is the bias-elimination primitive every sequence operation is built
//! on. Mapping a random word onto `[0, n)` with a plain remainder favours the
//! low values whenever `n` does not divide the word's range, so the sampler
//! here uses masked rejection sampling instead:
//!
//! 1. Let `b` be the bit length of `n - 1` and draw `ceil(b / 8)` bytes.
//! 2. Clear the bits of the most significant byte above `b`, giving a value
//!    uniform over `[0, 2^b)`.
//! 3. Accept the value if it is `< n`, otherwise discard it and draw again.
//!
//! Since `2^(b-1) <= n - 1 < 2^b`, every draw is accepted with probability
//! greater than one half, and each accepted value is equally likely.
//!
//! Bounds are validated before any entropy is consumed. A bound of `1` has
//! exactly one possible outcome and is answered without touching the source.

use tracing::trace;

use crate::error::{RandomError, Result};
use crate::rng::source::{ByteSource, OsRng};

mod sealed {
    /// Conversions used by the sampler. Kept out of the public API because
    /// `from_sample` narrows without a range check.
    pub trait Sealed: Copy {
        /// Returns the bound widened to `u64`, or `None` if it is not positive.
        #[doc(hidden)]
        fn positive_u64(self) -> Option<u64>;

        /// Narrows a sample known to lie in `[0, bound)` back into `Self`.
        #[doc(hidden)]
        fn from_sample(value: u64) -> Self;
    }
}

/// Integer types accepted as an exclusive upper bound.
///
/// Implemented for every primitive integer up to 64 bits. Signed bounds
/// that are zero or negative, and unsigned bounds equal to zero, are
/// rejected with [`RandomError::InvalidBound`].
///
/// The conversions behind this trait are not callable by users:
///
/// ```compile_fail
/// use secrand::Bound;
///
/// let narrowed = <u8 as Bound>::from_sample(300);
/// ```
pub trait Bound: Copy + sealed::Sealed {}

macro_rules! impl_bound {
    ($($t:ty),* $(,)?) => {$(
        impl Bound for $t {}

        impl sealed::Sealed for $t {
            #[inline]
            fn positive_u64(self) -> Option<u64> {
                if self > 0 { Some(self as u64) } else { None }
            }

            #[inline]
            fn from_sample(value: u64) -> Self {
                value as $t
            }
        }
    )*};
}

impl_bound!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Returns a uniformly distributed integer in `[0, n)` drawn from `rng`.
///
/// # Errors
///
/// - [`RandomError::InvalidBound`] if `n <= 0`; no entropy is consumed.
/// - [`RandomError::SourceUnavailable`] if `rng` fails.
pub fn uniform_int_with<R, T>(rng: &mut R, n: T) -> Result<T>
where
    R: ByteSource + ?Sized,
    T: Bound,
{
    let n = n.positive_u64().ok_or(RandomError::InvalidBound)?;
    below(rng, n).map(T::from_sample)
}

/// Returns a uniformly distributed integer in `[0, n)` from the OS source.
///
/// ```
/// let roll = secrand::uniform_int(6u32)?;
/// assert!(roll < 6);
/// # Ok::<(), secrand::RandomError>(())
/// ```
pub fn uniform_int<T: Bound>(n: T) -> Result<T> {
    uniform_int_with(&mut OsRng, n)
}

/// Masked rejection sampling over `[0, n)`. `n` must be non-zero.
pub(crate) fn below<R: ByteSource + ?Sized>(rng: &mut R, n: u64) -> Result<u64> {
    let max = n - 1;
    if max == 0 {
        return Ok(0);
    }

    let bits = u64::BITS - max.leading_zeros();
    let len = bits.div_ceil(8) as usize;
    let top_bits = bits - 8 * (len as u32 - 1);
    let mask = ((1u16 << top_bits) - 1) as u8;

    // Big-endian word; only the low `len` bytes are ever written.
    let mut word = [0u8; 8];
    let mut rejected = 0u32;

    loop {
        let draw = &mut word[8 - len..];
        rng.fill_bytes(draw)?;
        draw[0] &= mask;

        let value = u64::from_be_bytes(word);
        if value < n {
            if rejected > 0 {
                trace!(bound = n, rejected, "uniform sample accepted after rejections");
            }
            return Ok(value);
        }

        rejected += 1;
    }
}
