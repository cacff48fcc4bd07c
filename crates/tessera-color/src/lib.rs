//! # tessera-color
//!
//! Color space conversions for Tessera.
//!
//! All conversions are pure functions of small value types. RGB is the
//! source of truth and every other representation is derived on demand:
//!
//! ```text
//! Rgb [0,1] --srgb::eotf--> linear --SRGB_TO_XYZ--> Xyz --D65--> Lab
//!   |
//!   +--8-bit--> Hsl
//! ```
//!
//! | Module | Conversion | Output range |
//! |--------|------------|--------------|
//! | [`srgb`] | sRGB decode | [0, 1] |
//! | [`xyz`] | RGB -> XYZ | Y in [0, 100] |
//! | [`lab`] | XYZ -> L*a*b* | L in [0, 100] |
//! | [`hsl`] | RGB8 -> HSL | H in [0, 360), S/L in [0, 100] |
//!
//! XYZ and Lab components are rounded to two decimals (ties to even).
//!
//! # Usage
//!
//! ```rust
//! use tessera_color::{ColorConvert, rgb_to_xyz, xyz_to_lab};
//! use tessera_core::Rgb;
//!
//! let xyz = rgb_to_xyz(0.0, 0.0, 1.0);
//! let lab = xyz_to_lab(xyz);
//! assert_eq!(lab, Rgb::new(0.0, 0.0, 1.0).to_lab());
//! ```
//!
//! # Dependencies
//!
//! - [`tessera-core`] - RGB value types and rounding
//! - [`glam`] - Matrix math
//!
//! # Used By
//!
//! - `tessera-delta` - Delta E formulas

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod hsl;
pub mod lab;
pub mod srgb;
pub mod xyz;

pub use convert::ColorConvert;
pub use hsl::{Hsl, rgb_to_hsl};
pub use lab::{D65_WHITE, Lab, rgb_to_lab, xyz_to_lab};
pub use xyz::{SRGB_TO_XYZ, Xyz, rgb_to_xyz};

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{ColorConvert, Hsl, Lab, Xyz};
    pub use tessera_core::{Rgb, Rgba};
}
