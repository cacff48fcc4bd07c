//! CIE XYZ to CIE L*a*b* conversion.
//!
//! Lab is computed against the D65 (2° observer) reference white:
//!
//! ```text
//! g(t) = t^(1/3)              if t > 0.008856
//!      = 7.787*t + 16/116     otherwise
//!
//! L = 116*g(Y/Yn) - 16
//! a = 500*(g(X/Xn) - g(Y/Yn))
//! b = 200*(g(Y/Yn) - g(Z/Zn))
//! ```
//!
//! Each component is rounded to two decimals (ties to even). RGB to Lab is
//! always XYZ first; there is no shortcut path.
//!
//! # Example
//!
//! ```rust
//! use tessera_color::lab::rgb_to_lab;
//! use tessera_core::Rgb;
//!
//! let lab = rgb_to_lab(Rgb::from_rgb8(255, 0, 0));
//! assert_eq!((lab.l, lab.a, lab.b), (53.23, 80.11, 67.22));
//! ```

use crate::xyz::Xyz;
use tessera_core::{Rgb, round2};

/// D65 reference white, X.
pub const REFERENCE_X: f64 = 95.047;
/// D65 reference white, Y.
pub const REFERENCE_Y: f64 = 100.0;
/// D65 reference white, Z.
pub const REFERENCE_Z: f64 = 108.883;

/// D65 reference white as XYZ.
pub const D65_WHITE: Xyz = Xyz::new(REFERENCE_X, REFERENCE_Y, REFERENCE_Z);

/// Ratio below which the companding switches to its linear segment.
pub const EPSILON: f64 = 0.008856;

const LINEAR_SLOPE: f64 = 7.787;
const LINEAR_OFFSET: f64 = 16.0 / 116.0;

/// A CIE L*a*b* color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness, nominally 0 (black) to 100 (white)
    pub l: f64,
    /// Green (-) to red (+)
    pub a: f64,
    /// Blue (-) to yellow (+)
    pub b: f64,
}

impl Lab {
    /// Creates a Lab value.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Components as an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Chroma: distance from the neutral axis, `sqrt(a² + b²)`.
    #[inline]
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Hue angle in degrees, `[0, 360)`. Neutral colors report 0.
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        // atan2 of signed zeros is ±180°
        if self.a == 0.0 && self.b == 0.0 {
            return 0.0;
        }
        self.b.atan2(self.a).to_degrees().rem_euclid(360.0)
    }
}

#[inline]
fn compand(t: f64) -> f64 {
    if t > EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        LINEAR_SLOPE * t + LINEAR_OFFSET
    }
}

/// Converts XYZ to Lab against [`D65_WHITE`].
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = compand(xyz.x / REFERENCE_X);
    let fy = compand(xyz.y / REFERENCE_Y);
    let fz = compand(xyz.z / REFERENCE_Z);

    Lab::new(
        round2(116.0 * fy - 16.0),
        round2(500.0 * (fx - fy)),
        round2(200.0 * (fy - fz)),
    )
}

/// Converts an RGB color to Lab via [`crate::xyz::rgb_to_xyz`].
#[inline]
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(Xyz::from(rgb))
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        xyz_to_lab(xyz)
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        rgb_to_lab(rgb)
    }
}
