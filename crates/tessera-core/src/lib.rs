//! # tessera-core
//!
//! Core types for Tessera color science.
//!
//! This crate provides the foundational types shared by every other Tessera
//! crate:
//!
//! - [`Rgb`], [`Rgba`] - Normalized color values, the common input type
//! - [`round2`] - Two-decimal, ties-to-even rounding applied to all derived values
//! - [`Error`], [`Result`] - Error handling for parsing and collections
//!
//! ## Data Flow
//!
//! RGB is the source of truth. Every other representation is derived on
//! demand and never cached:
//!
//! ```text
//! tessera-core (Rgb)
//!    |
//!    +-- tessera-color (XYZ, Lab, HSL)
//!           |
//!           +-- tessera-delta (Delta E, classification, palettes)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod round;

pub use error::{Error, Result};
pub use pixel::{CHANNEL_MAX, Rgb, Rgba, SIMILARITY_THRESHOLD};
pub use round::{round2, round2_half_up};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{Rgb, Rgba};
    pub use crate::round::round2;
}
