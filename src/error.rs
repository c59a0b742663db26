// Copyright 2026 Martin Pool

//! Errors for out-of-domain input.
//!
//! In-domain calls never fail: every positive `n` whose answer fits in `u64`
//! gets `Ok`. The variants here cover the two inputs for which "smallest even
//! multiple" has no representable answer.

use thiserror::Error;

/// Why a smallest even multiple could not be computed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input was zero: every integer is a multiple of 0, so there is no
    /// smallest positive even one.
    #[error("smallest even multiple is undefined for zero")]
    Zero,

    /// The input was odd and so large that doubling it does not fit in `u64`.
    #[error("2 * {n} overflows u64")]
    Overflow {
        /// The rejected input.
        n: u64,
    },
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::Error;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::Zero.to_string(),
            "smallest even multiple is undefined for zero"
        );
        assert_eq!(
            Error::Overflow { n: u64::MAX }.to_string(),
            "2 * 18446744073709551615 overflows u64"
        );
    }
}
