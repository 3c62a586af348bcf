//! Secure random value generation
//!
//! Every operation comes in two forms: a `*_with` function taking any
//! [`ByteSource`], and a convenience function drawing from [`OsRng`].
//!
//! Data flows one way:
//!
//! ```text
//! ByteSource ─┬─> uniform ──> seq (shuffle, permutation, select, boolean)
//!             ├─> charset
//!             └─> raw (bytes, tokens)
//! ```

pub mod charset;
mod raw;
mod seq;
mod source;
mod uniform;

pub use charset::{CharsetSampler, alphanumeric_string, random_string, random_string_with};
pub use raw::{
    decode_token, fill_random, random_array, random_bytes, random_bytes_with, random_token,
    random_token_with,
};
pub use seq::{
    boolean, boolean_with, permutation, permutation_with, select, select_index,
    select_index_with, select_with, shuffle, shuffle_with,
};
pub use source::{ByteSource, OsRng};
pub use uniform::{Bound, uniform_int, uniform_int_with};
