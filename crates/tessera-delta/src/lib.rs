//! # tessera-delta
//!
//! Perceptual color difference (Delta E) for Tessera.
//!
//! Five formulas, one classifier, and a small de-duplicating palette built
//! on top of them:
//!
//! | Formula | Space | Symmetric | Typical range |
//! |---------|-------|-----------|---------------|
//! | [`euclidean`] | 8-bit RGB | yes | 0 to 441.67 |
//! | [`cie76`] | Lab | yes | 0 to ~100+ |
//! | [`cie94`] | Lab | no | 0 to ~100 |
//! | [`ciede2000`] | Lab | no | 0 to ~100 |
//! | [`cmc`] | Lab | no | 0 to ~100 |
//!
//! Asymmetric formulas treat the first argument as the reference color.
//! Every distance returned through [`DeltaEFormula::delta_e`] is rounded to
//! two decimals (ties to even). The per-formula `delta_e` functions return
//! the raw value.
//!
//! # Classification
//!
//! [`classify`] maps a distance to a [`ColorDifference`], which keeps the
//! number alongside its [`DifferenceCategory`]. Results compare and sort
//! by the number.
//!
//! ```rust
//! use tessera_core::Rgb;
//! use tessera_delta::{DeltaEFormula, DifferenceCategory, color_difference};
//!
//! let a = Rgb::from_rgb8(200, 150, 100);
//! let b = Rgb::from_rgb8(190, 160, 90);
//!
//! let diff = color_difference(a, b, DeltaEFormula::Cie76);
//! assert_eq!(diff.value(), 12.63);
//! assert_eq!(diff.category(), DifferenceCategory::Different);
//! ```
//!
//! # Dependencies
//!
//! - [`tessera-core`] - RGB types, rounding, errors
//! - [`tessera-color`] - Lab conversion
//! - [`tracing`] - Palette diagnostics
//!
//! # Used By
//!
//! - `tessera-cli` - The `tessera` command
//! - `tessera-bench` - Benchmarks
//!
//! # Feature Flags
//!
//! - `serde` - Serialization for formulas, results and palettes

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cie76;
pub mod cie94;
pub mod ciede2000;
pub mod classify;
pub mod cmc;
pub mod euclidean;
pub mod formula;
pub mod palette;

pub use classify::{ColorDifference, DifferenceCategory};
pub use formula::DeltaEFormula;
pub use palette::{DEFAULT_CAPACITY, Palette};

use tessera_core::Rgb;

/// Distance from `c1` (reference) to `c2` under `formula`, classified.
#[inline]
pub fn color_difference(c1: Rgb, c2: Rgb, formula: DeltaEFormula) -> ColorDifference {
    ColorDifference::new(formula.delta_e(c1, c2))
}

/// Classifies a raw distance.
///
/// ```rust
/// use tessera_delta::{ColorDifference, classify};
///
/// assert_eq!(classify(1.5), ColorDifference::Close(1.5));
/// ```
#[inline]
pub fn classify(distance: f64) -> ColorDifference {
    ColorDifference::new(distance)
}

/// `sqrt` of a radicand that can only go negative through cancellation.
#[inline]
pub(crate) fn sqrt_non_negative(v: f64) -> f64 {
    if v < 0.0 { 0.0 } else { v.sqrt() }
}

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{ColorDifference, DeltaEFormula, DifferenceCategory, Palette};
    pub use crate::{classify, color_difference};
}
