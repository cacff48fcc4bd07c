//! RGB to CIE XYZ conversion.
//!
//! Decodes the sRGB transfer curve per channel, scales to the 0..100 range
//! and applies the fixed sRGB (D65) primaries matrix:
//!
//! ```text
//! X = 0.4124*R + 0.3576*G + 0.1805*B
//! Y = 0.2126*R + 0.7152*G + 0.0722*B
//! Z = 0.0193*R + 0.1192*G + 0.9505*B
//! ```
//!
//! Each component is rounded to two decimals (ties to even).
//!
//! # Example
//!
//! ```rust
//! use tessera_color::xyz::rgb_to_xyz;
//!
//! let xyz = rgb_to_xyz(1.0, 0.0, 0.0);
//! assert_eq!((xyz.x, xyz.y, xyz.z), (41.24, 21.26, 1.93));
//! ```

use crate::srgb;
use glam::{DMat3, DVec3};
use tessera_core::{Rgb, round2};

/// Linear sRGB scale applied before the matrix.
pub const XYZ_SCALE: f64 = 100.0;

/// sRGB to XYZ (D65) matrix, four-digit coefficients.
///
/// Stored column-major: each column is the XYZ of one primary.
pub const SRGB_TO_XYZ: DMat3 = DMat3::from_cols(
    DVec3::new(0.4124, 0.2126, 0.0193),
    DVec3::new(0.3576, 0.7152, 0.1192),
    DVec3::new(0.1805, 0.0722, 0.9505),
);

/// A CIE XYZ color, Y nominally in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X component
    pub x: f64,
    /// Y component (luminance)
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Xyz {
    /// Creates an XYZ value.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Components as an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Converts normalized sRGB channels to XYZ.
///
/// Channels are not clamped; callers must keep them in `[0, 1]`.
pub fn rgb_to_xyz(r: f64, g: f64, b: f64) -> Xyz {
    let [lr, lg, lb] = srgb::eotf_rgb([r, g, b]);
    let linear = DVec3::new(lr, lg, lb) * XYZ_SCALE;
    let v = SRGB_TO_XYZ * linear;
    Xyz::new(round2(v.x), round2(v.y), round2(v.z))
}

impl From<Rgb> for Xyz {
    fn from(rgb: Rgb) -> Self {
        rgb_to_xyz(rgb.r(), rgb.g(), rgb.b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black() {
        assert_eq!(rgb_to_xyz(0.0, 0.0, 0.0), Xyz::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_white() {
        let xyz = rgb_to_xyz(1.0, 1.0, 1.0);
        assert_eq!(xyz.x, 95.05);
        assert_eq!(xyz.y, 100.0);
        assert_eq!(xyz.z, 108.9);
    }

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_xyz(1.0, 0.0, 0.0).to_array(), [41.24, 21.26, 1.93]);
        assert_eq!(rgb_to_xyz(0.0, 1.0, 0.0).to_array(), [35.76, 71.52, 11.92]);
        assert_eq!(rgb_to_xyz(0.0, 0.0, 1.0).to_array(), [18.05, 7.22, 95.05]);
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        for i in 0..=255u8 {
            let xyz = Xyz::from(Rgb::from_rgb8(i, 255 - i, i / 3));
            for v in xyz.to_array() {
                assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-6, "{v} not rounded");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = rgb_to_xyz(0.3, 0.6, 0.9);
        let b = rgb_to_xyz(0.3, 0.6, 0.9);
        assert_eq!(a, b);
    }
}
