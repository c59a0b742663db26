// Copyright 2026 Martin Pool

//! The smallest even multiple of a positive integer.
//!
//! The multiples of `n` in increasing order are `n, 2n, 3n, ...`, so the
//! answer is `n` itself when `n` is even and `2n` when `n` is odd: no
//! multiple smaller than `n` exists, and for odd `n` the first multiple
//! guaranteed to pick up a factor of 2 is `2n`. This is the closed form of
//! `lcm(n, 2) = 2n / gcd(n, 2)`.

use tracing::trace;

use crate::Error;

/// Return the smallest positive integer that is both a multiple of `n` and
/// even.
///
/// # Errors
///
/// Returns [Error::Zero] if `n` is zero, and [Error::Overflow] if `n` is odd
/// and `2 * n` does not fit in `u64`. Every other input succeeds.
pub fn smallest_even_multiple(n: u64) -> Result<u64, Error> {
    if n == 0 {
        return Err(Error::Zero);
    }
    let result = if n % 2 == 0 {
        n
    } else {
        n.checked_mul(2).ok_or(Error::Overflow { n })?
    };
    trace!(n, result, "smallest even multiple");
    Ok(result)
}
