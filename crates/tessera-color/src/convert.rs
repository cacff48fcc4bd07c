//! High-level conversion trait.
//!
//! [`ColorConvert`] gives any RGB-like value direct access to its derived
//! representations. Nothing is cached: every call recomputes from RGB.
//!
//! # Example
//!
//! ```rust
//! use tessera_color::ColorConvert;
//! use tessera_core::Rgb;
//!
//! let yellow = Rgb::from_rgb8(255, 255, 0);
//! let lab = yellow.to_lab();
//! let hsl = yellow.to_hsl();
//!
//! assert_eq!(lab.l, 97.14);
//! assert_eq!(hsl.hue, 60.0);
//! ```

use crate::hsl::{Hsl, rgb_to_hsl};
use crate::lab::{Lab, xyz_to_lab};
use crate::xyz::{Xyz, rgb_to_xyz};
use tessera_core::{Rgb, Rgba};

/// Derived color representations of an RGB value.
pub trait ColorConvert {
    /// The underlying normalized RGB.
    fn rgb(&self) -> Rgb;

    /// CIE XYZ, rounded to two decimals.
    fn to_xyz(&self) -> Xyz {
        let rgb = self.rgb();
        rgb_to_xyz(rgb.r(), rgb.g(), rgb.b())
    }

    /// CIE L*a*b*, via XYZ, rounded to two decimals.
    fn to_lab(&self) -> Lab {
        xyz_to_lab(self.to_xyz())
    }

    /// HSL computed from the 8-bit channels.
    fn to_hsl(&self) -> Hsl {
        let [r, g, b] = self.rgb().to_rgb8();
        rgb_to_hsl(r, g, b)
    }
}

impl ColorConvert for Rgb {
    #[inline]
    fn rgb(&self) -> Rgb {
        *self
    }
}

impl ColorConvert for Rgba {
    #[inline]
    fn rgb(&self) -> Rgb {
        Rgba::rgb(self)
    }
}
