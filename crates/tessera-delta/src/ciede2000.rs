//! Simplified CIEDE2000 color difference.
//!
//! This is the CIE94 weighted sum plus the CIEDE2000 hue-rotation term:
//!
//! ```text
//! C̄  = (C1 + C2) / 2
//! G' = sqrt(C̄⁷ / (C̄⁷ + 25⁷))
//! a1' = a1 + a1/2 * (1 - G'/2)
//! a2' = a1 + a2/2 * (1 - G'/2)
//! h' = atan(b / a')  mod 2π
//! H̄' = (h1' + h2' [+ 2π if h1' - h2' > π]) / 2
//! RT = -2 G' sin(π/6 · exp(-((H̄' - 55π/36) / (5π/36))²))
//! ΔE = sqrt(CIE94 terms + RT · ΔC·ΔH / (SC·SH))
//! ```
//!
//! It is *not* the CIE 142-2001 formula. It leaves out the G correction of
//! a*, the L̄'-dependent SL, and computes both primed a* values from a1,
//! and the hue angles come from `atan` rather than `atan2`. With hue
//! angles confined to (-π/2, π/2) the rotation term is vanishingly small,
//! so results track CIE94 closely. The formula is kept as-is so that
//! stored distances stay comparable.

use crate::cie94::{K_C, K_H, Terms};
use crate::sqrt_non_negative;
use std::f64::consts::{PI, TAU};
use tessera_color::Lab;

/// `25⁷`, the chroma pivot of the rotation weight.
const CHROMA_PIVOT_7: f64 = 6_103_515_625.0;

/// Width of the rotation window, 25° in radians.
const ROTATION_STEP: f64 = 5.0 * PI / 36.0;

/// Hue angle used for rotation. `0/0` (neutral) maps to 0.
#[inline]
fn hue_angle(b: f64, a_prime: f64) -> f64 {
    if a_prime == 0.0 && b == 0.0 {
        0.0
    } else {
        (b / a_prime).atan() % TAU
    }
}

/// Simplified CIEDE2000 ΔE with `lab1` as the reference color. Unrounded.
pub fn delta_e(lab1: &Lab, lab2: &Lab) -> f64 {
    let terms = Terms::new(lab1, lab2);
    let (p1, p2, p3) = terms.weighted();

    let c_avg = (terms.c1 + terms.c2) / 2.0;
    let c_avg_7 = c_avg.powf(7.0);
    let c_help = (c_avg_7 / (c_avg_7 + CHROMA_PIVOT_7)).sqrt();

    let scale = 1.0 - 0.5 * c_help;
    let a1_prime = lab1.a + (lab1.a / 2.0) * scale;
    let a2_prime = lab1.a + (lab2.a / 2.0) * scale;

    let h1 = hue_angle(lab1.b, a1_prime);
    let h2 = hue_angle(lab2.b, a2_prime);

    let wrap = if h1 - h2 > PI { TAU } else { 0.0 };
    let h_avg = (h1 + h2 + wrap) / 2.0;
    let exponent = ((h_avg - 11.0 * ROTATION_STEP) / ROTATION_STEP).powi(2);
    let r_t = -2.0 * c_help * ((PI / 6.0) * (-exponent).exp()).sin();

    let p4 = r_t * (terms.delta_c * terms.delta_h) / (K_C * terms.s_c * K_H * terms.s_h);

    sqrt_non_negative(p1 + p2 + p3 + p4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cie94;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_identity() {
        for lab in [
            Lab::new(0.0, 0.0, 0.0),
            Lab::new(100.0, 0.01, -0.01),
            Lab::new(53.23, 80.11, 67.22),
            Lab::new(32.3, 79.2, -107.86),
        ] {
            assert_eq!(delta_e(&lab, &lab), 0.0, "{lab:?}");
        }
    }

    #[test]
    fn test_neutral_reference_is_finite() {
        // a1 = b1 = 0 would be 0/0 in the hue angle
        let d = delta_e(&Lab::new(0.0, 0.0, 0.0), &Lab::new(100.0, 0.01, -0.01));
        assert!(d.is_finite());
        assert_abs_diff_eq!(d, 100.0, epsilon = 0.01);
    }

    #[test]
    fn test_tracks_cie94() {
        let a = Lab::new(53.23, 80.11, 67.22);
        let b = Lab::new(87.74, -86.18, 83.18);
        assert_abs_diff_eq!(delta_e(&a, &b), cie94::delta_e(&a, &b), epsilon = 1e-6);
    }

    #[test]
    fn test_chroma_pivot() {
        assert_eq!(CHROMA_PIVOT_7, 25f64.powi(7));
    }
}
