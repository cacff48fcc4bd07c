//! Fixed-precision rounding.
//!
//! Every computed XYZ, Lab and Delta E value is rounded to two decimal
//! places with round-half-to-even, which keeps results stable across
//! platforms and makes them comparable with `==` in tests.
//!
//! Display formatting uses [`round2_half_up`] instead, so `0.125` renders
//! as `0.13` rather than `0.12`.

/// Scale factor for two-decimal rounding.
pub const PRECISION: f64 = 100.0;

/// Rounds to two decimals, ties to even.
///
/// # Example
///
/// ```rust
/// use tessera_core::round2;
///
/// assert_eq!(round2(360.624458), 360.62);
/// assert_eq!(round2(0.125), 0.12);
/// assert_eq!(round2(0.375), 0.38);
/// ```
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * PRECISION).round_ties_even() / PRECISION
}

/// Rounds to two decimals, ties away from zero.
#[inline]
pub fn round2_half_up(v: f64) -> f64 {
    (v * PRECISION).round() / PRECISION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_to_even() {
        // 0.125 and 0.375 are exact in binary, so the tie is real
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.12);
    }

    #[test]
    fn test_half_up() {
        assert_eq!(round2_half_up(0.125), 0.13);
        assert_eq!(round2_half_up(0.375), 0.38);
    }

    #[test]
    fn test_already_rounded() {
        for v in [0.0, 1.0, 2.5, 50.0, 100.0] {
            assert_eq!(round2(v), v);
        }
    }

    #[test]
    fn test_nan_propagates() {
        assert!(round2(f64::NAN).is_nan());
    }
}
