// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Collatz map, one application at a time.

use super::constants::OVERFLOW_THRESHOLD;
use crate::errors::CollatzError;

/// Apply one step of the Collatz map: `n / 2` for even `n`, `3n + 1` for odd `n`.
///
/// # Errors
///
/// - [`CollatzError::InvalidDomain`] if `n == 0`.
/// - [`CollatzError::OverflowRisk`] if `n` is odd and above [`OVERFLOW_THRESHOLD`].
///
/// # Example
///
/// ```
/// use collatz_wormhole::numeric::step;
///
/// assert_eq!(step(6), Ok(3));
/// assert_eq!(step(3), Ok(10));
/// assert_eq!(step(1), Ok(4));
/// assert!(step(0).is_err());
/// ```
#[inline]
pub fn step(n: u64) -> Result<u64, CollatzError> {
    if n == 0 {
        return Err(CollatzError::InvalidDomain { value: n });
    }
    if n % 2 == 0 {
        Ok(n / 2)
    } else if n > OVERFLOW_THRESHOLD {
        Err(CollatzError::OverflowRisk { value: n })
    } else {
        Ok(3 * n + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_even_halves() {
        assert_eq!(step(2), Ok(1));
        assert_eq!(step(16), Ok(8));
        assert_eq!(step(1 << 50), Ok(1 << 49));
    }

    #[test]
    fn test_odd_triples() {
        assert_eq!(step(1), Ok(4));
        assert_eq!(step(27), Ok(82));
        assert_eq!(step(9231), Ok(27694));
    }

    #[test]
    fn test_zero_is_invalid() {
        assert_eq!(step(0).unwrap_err().kind(), ErrorKind::InvalidDomain);
    }

    #[test]
    fn test_overflow_boundary() {
        // The threshold itself still steps to exactly 2^62.
        assert_eq!(step(OVERFLOW_THRESHOLD), Ok(1u64 << 62));

        // The next odd value above it is refused.
        let err = step(OVERFLOW_THRESHOLD + 2).unwrap_err();
        assert_eq!(err, CollatzError::OverflowRisk { value: OVERFLOW_THRESHOLD + 2 });

        // Even values above the threshold are still halved.
        assert_eq!(step(OVERFLOW_THRESHOLD + 1), Ok((OVERFLOW_THRESHOLD + 1) / 2));
        assert_eq!(step(u64::MAX - 1), Ok(u64::MAX / 2));
        assert!(step(u64::MAX).is_err());
    }
}
