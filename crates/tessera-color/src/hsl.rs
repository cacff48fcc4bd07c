//! 8-bit RGB to HSL conversion.
//!
//! Hue is in degrees `[0, 360)`, saturation and lightness are percentages
//! `[0, 100]`. Achromatic inputs (all channels equal) report hue 0.

use tessera_core::{CHANNEL_MAX, Rgb};

/// Degrees per hexcone segment.
const SEGMENT_DEGREES: f64 = 60.0;

/// A color in Hue/Saturation/Lightness form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`
    pub hue: f64,
    /// Saturation percentage, `[0, 100]`
    pub saturation: f64,
    /// Lightness percentage, `[0, 100]`
    pub lightness: f64,
}

impl Hsl {
    /// Creates an HSL value.
    #[inline]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// Converts 8-bit RGB channels to HSL.
///
/// Saturation is forced to 0 at lightness exactly 0 or 1, where the usual
/// formula would divide by zero.
///
/// # Example
///
/// ```rust
/// use tessera_color::hsl::rgb_to_hsl;
///
/// let hsl = rgb_to_hsl(0, 128, 128);
/// assert_eq!(hsl.hue, 180.0);
/// assert_eq!(hsl.saturation, 100.0);
/// ```
pub fn rgb_to_hsl(r8: u8, g8: u8, b8: u8) -> Hsl {
    let red = r8 as f64;
    let green = g8 as f64;
    let blue = b8 as f64;
    let min = red.min(green).min(blue);
    let max = red.max(green).max(blue);

    let lightness = 0.5 * (max + min) / CHANNEL_MAX;
    let delta = (max - min) / CHANNEL_MAX;

    let saturation = if lightness == 0.0 || lightness == 1.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * lightness - 1.0).abs())
    };

    // Hue in segments of 60 degrees; red wraps negative segments by a full turn
    let hue = if delta == 0.0 {
        0.0
    } else if max == red {
        let segment = (green - blue) / (delta * CHANNEL_MAX);
        if segment < 0.0 { segment + 6.0 } else { segment }
    } else if max == green {
        (blue - red) / (delta * CHANNEL_MAX) + 2.0
    } else {
        (red - green) / (delta * CHANNEL_MAX) + 4.0
    };

    Hsl::new(hue * SEGMENT_DEGREES, saturation * 100.0, lightness * 100.0)
}

impl From<Rgb> for Hsl {
    /// Converts via the 8-bit channels of `rgb`, rounded to the nearest
    /// byte rather than truncated.
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_rgb8();
        rgb_to_hsl(r, g, b)
    }
}
