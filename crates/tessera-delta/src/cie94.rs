//! CIE94 color difference (graphic arts weighting).
//!
//! Splits the Lab distance into lightness, chroma and hue terms and weights
//! the latter two by the chroma of the *reference* (first) color:
//!
//! ```text
//! SC = 1 + K1*C1      SH = 1 + K2*C1
//! ΔH = sqrt(Δa² + Δb² - ΔC²)
//! ΔE = sqrt((ΔL/kL·SL)² + (ΔC/kC·SC)² + (ΔH/kH·SH)²)
//! ```
//!
//! Because the weights come from the first color only, the formula is
//! asymmetric: `ΔE(a, b) != ΔE(b, a)` in general.

use crate::sqrt_non_negative;
use tessera_color::Lab;

/// Lightness weighting factor.
pub const K_L: f64 = 1.0;
/// Chroma weighting factor.
pub const K_C: f64 = 1.0;
/// Hue weighting factor.
pub const K_H: f64 = 1.0;
/// Chroma scale coefficient.
pub const K1: f64 = 0.045;
/// Hue scale coefficient.
pub const K2: f64 = 0.015;
/// Lightness scale.
pub const S_L: f64 = 1.0;

/// Intermediate CIE94 terms, shared with the CIEDE2000 variant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Terms {
    pub c1: f64,
    pub c2: f64,
    pub s_c: f64,
    pub s_h: f64,
    pub delta_l: f64,
    pub delta_c: f64,
    pub delta_h: f64,
}

impl Terms {
    pub(crate) fn new(lab1: &Lab, lab2: &Lab) -> Self {
        let c1 = lab1.chroma();
        let c2 = lab2.chroma();
        let delta_a = lab1.a - lab2.a;
        let delta_b = lab1.b - lab2.b;
        let delta_c = c1 - c2;

        Self {
            c1,
            c2,
            s_c: 1.0 + K1 * c1,
            s_h: 1.0 + K2 * c1,
            delta_l: lab1.l - lab2.l,
            delta_c,
            // Never negative in exact arithmetic; clamp cancellation noise
            delta_h: sqrt_non_negative(delta_a.powi(2) + delta_b.powi(2) - delta_c.powi(2)),
        }
    }

    /// The three squared, weighted terms.
    pub(crate) fn weighted(&self) -> (f64, f64, f64) {
        (
            (self.delta_l / (K_L * S_L)).powi(2),
            (self.delta_c / (K_C * self.s_c)).powi(2),
            (self.delta_h / (K_H * self.s_h)).powi(2),
        )
    }
}

/// CIE94 ΔE with `lab1` as the reference color. Unrounded.
pub fn delta_e(lab1: &Lab, lab2: &Lab) -> f64 {
    let (p1, p2, p3) = Terms::new(lab1, lab2).weighted();
    (p1 + p2 + p3).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_identity() {
        let lab = Lab::new(53.23, 80.11, 67.22);
        assert_eq!(delta_e(&lab, &lab), 0.0);
    }

    #[test]
    fn test_lightness_unweighted() {
        // Neutral colors: SC = SH = 1 and only ΔL remains
        let d = delta_e(&Lab::new(20.0, 0.0, 0.0), &Lab::new(30.0, 0.0, 0.0));
        assert_abs_diff_eq!(d, 10.0);
    }

    #[test]
    fn test_chroma_weighting() {
        // Pure chroma change of 10 at C1 = 20: SC = 1.9
        let d = delta_e(&Lab::new(50.0, 20.0, 0.0), &Lab::new(50.0, 10.0, 0.0));
        assert_abs_diff_eq!(d, 10.0 / 1.9, epsilon = 1e-12);
    }

    #[test]
    fn test_asymmetric() {
        let a = Lab::new(50.0, 60.0, 10.0);
        let b = Lab::new(55.0, 10.0, -5.0);
        assert!((delta_e(&a, &b) - delta_e(&b, &a)).abs() > 1.0);
    }

    #[test]
    fn test_same_hue_ray_is_finite() {
        // Proportional a/b: ΔH is zero up to rounding and must not go NaN
        let d = delta_e(&Lab::new(50.0, 30.0, 40.0), &Lab::new(50.0, 3.0, 4.0));
        assert!(d.is_finite());
        assert_abs_diff_eq!(d, 45.0 / (1.0 + K1 * 50.0), epsilon = 1e-6);
    }
}
