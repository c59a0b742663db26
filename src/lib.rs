// Copyright 2026 Martin Pool

//! Compute the smallest even multiple of a positive integer.
//!
//! The crate exposes a single operation, [smallest_even_multiple]: for a
//! positive `n`, the result is `n` itself when `n` is even, and `2 * n` when
//! `n` is odd. Out-of-domain input (zero, or an odd `n` whose double does not
//! fit in `u64`) is rejected with an explicit [Error] rather than wrapping or
//! panicking.

mod error;
mod multiple;

pub use error::Error;
pub use multiple::smallest_even_multiple;
