//! CMC l:c color difference.
//!
//! Weights lightness, chroma and hue by functions of the reference (first)
//! color, so like CIE94 it is asymmetric. The conventional 0..200 output
//! range is halved onto 0..100.
//!
//! # Reference
//!
//! <http://www.brucelindbloom.com/index.html?Eqn_DeltaE_CMC.html>

use crate::sqrt_non_negative;
use tessera_color::Lab;

/// Lightness weight `l` (1 for the perceptibility variant).
pub const LIGHTNESS: f64 = 1.0;
/// Chroma weight `c`.
pub const CHROMA: f64 = 1.0;

/// Below this lightness SL is the constant 0.511.
const DARK_LIGHTNESS: f64 = 16.0;

fn lightness_scale(l: f64) -> f64 {
    if l < DARK_LIGHTNESS {
        0.511
    } else {
        (0.040975 * l) / (1.0 + 0.01765 * l)
    }
}

fn chroma_scale(c: f64) -> f64 {
    (0.0638 * c) / (1.0 + 0.0131 * c) + 0.638
}

/// Hue-dependent term `T` for a hue angle in degrees.
fn hue_term(h: f64) -> f64 {
    if (164.0..=345.0).contains(&h) {
        0.56 + (0.2 * (h + 168.0).to_radians().cos()).abs()
    } else {
        0.36 + (0.4 * (h + 35.0).to_radians().cos()).abs()
    }
}

/// CMC(1:1) ΔE with `lab1` as the reference color, halved. Unrounded.
pub fn delta_e(lab1: &Lab, lab2: &Lab) -> f64 {
    let c1 = lab1.chroma();
    let c2 = lab2.chroma();
    let delta_c = c1 - c2;
    let delta_a = lab1.a - lab2.a;
    let delta_b = lab1.b - lab2.b;
    let delta_h = sqrt_non_negative(delta_a.powi(2) + delta_b.powi(2) - delta_c.powi(2));
    let delta_l = lab1.l - lab2.l;

    let s_l = lightness_scale(lab1.l);
    let s_c = chroma_scale(c1);

    let t = hue_term(lab1.hue_degrees());
    let c1_4 = c1.powf(4.0);
    let f = (c1_4 / (c1_4 + 1900.0)).sqrt();
    let s_h = s_c * (f * t + 1.0 - f);

    let p1 = (delta_l / (LIGHTNESS * s_l)).powi(2);
    let p2 = (delta_c / (CHROMA * s_c)).powi(2);
    let p3 = (delta_h / s_h).powi(2);

    (p1 + p2 + p3).sqrt() / 2.0
}
