//! RGB and RGBA color values.
//!
//! [`Rgb`] is the common input type for every conversion and difference
//! formula in Tessera: three `f64` channels, each nominally in `[0, 1]`.
//! [`Rgba`] adds an alpha channel and carries the palette-level helpers
//! (similarity, complementary color, text parsing and display).
//!
//! # Channel range
//!
//! Channels are *not* clamped. Out-of-range values are a caller contract
//! violation; keeping them unclamped lets callers detect and reject
//! malformed input before conversion.
//!
//! # Example
//!
//! ```rust
//! use tessera_core::{Rgb, Rgba};
//!
//! let red = Rgb::from_rgb8(255, 0, 0);
//! assert_eq!(red.red255(), 255.0);
//!
//! let teal: Rgba = "#008080".parse().unwrap();
//! assert_eq!(teal.rgb().to_rgb8(), [0, 128, 128]);
//! assert_eq!(teal.to_string(), "(r:0.00, g:0.50, b:0.50, a:1.00)");
//! ```

use crate::error::{Error, Result};
use crate::round::round2_half_up;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Maximum Euclidean distance (over normalized RGBA) for two colors to count
/// as similar.
pub const SIMILARITY_THRESHOLD: f64 = 0.1;

/// Scale between normalized and 8-bit channels.
pub const CHANNEL_MAX: f64 = 255.0;

// ============================================================================
// Rgb
// ============================================================================

/// A normalized RGB triple.
///
/// Immutable value type. Equality and hashing compare the exact bit
/// patterns of the three channels, so `Rgb` can be used as a map key.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    r: f64,
    g: f64,
    b: f64,
}

impl Rgb {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a color from normalized channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from 8-bit channels by dividing each by 255.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tessera_core::Rgb;
    ///
    /// let c = Rgb::from_rgb8(51, 102, 255);
    /// assert!((c.g() - 0.4).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            r as f64 / CHANNEL_MAX,
            g as f64 / CHANNEL_MAX,
            b as f64 / CHANNEL_MAX,
        )
    }

    /// Red channel in `[0, 1]`.
    #[inline]
    pub const fn r(&self) -> f64 {
        self.r
    }

    /// Green channel in `[0, 1]`.
    #[inline]
    pub const fn g(&self) -> f64 {
        self.g
    }

    /// Blue channel in `[0, 1]`.
    #[inline]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Red channel scaled to `[0, 255]`, unrounded.
    #[inline]
    pub fn red255(&self) -> f64 {
        self.r * CHANNEL_MAX
    }

    /// Green channel scaled to `[0, 255]`, unrounded.
    #[inline]
    pub fn green255(&self) -> f64 {
        self.g * CHANNEL_MAX
    }

    /// Blue channel scaled to `[0, 255]`, unrounded.
    #[inline]
    pub fn blue255(&self) -> f64 {
        self.b * CHANNEL_MAX
    }

    /// Channels as an array `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// 8-bit channels, rounded to nearest.
    ///
    /// Colors built with [`Rgb::from_rgb8`] round-trip exactly. Values
    /// outside `[0, 1]` saturate at 0 or 255.
    #[inline]
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b),
        ]
    }

    /// The color opposite on the RGB cube: `(255 - c*255) / 255` per channel.
    #[inline]
    pub fn complementary(self) -> Self {
        Self::new(
            (CHANNEL_MAX - self.red255()) / CHANNEL_MAX,
            (CHANNEL_MAX - self.green255()) / CHANNEL_MAX,
            (CHANNEL_MAX - self.blue255()) / CHANNEL_MAX,
        )
    }

    /// Lowercase `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[inline]
fn to_byte(v: f64) -> u8 {
    // `as` saturates, which is what we want for stray values
    (v * CHANNEL_MAX).round() as u8
}

impl PartialEq for Rgb {
    fn eq(&self, other: &Self) -> bool {
        self.r.to_bits() == other.r.to_bits()
            && self.g.to_bits() == other.g.to_bits()
            && self.b.to_bits() == other.b.to_bits()
    }
}

impl Eq for Rgb {}

impl Hash for Rgb {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.to_bits().hash(state);
        self.g.to_bits().hash(state);
        self.b.to_bits().hash(state);
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::from_rgb8(c[0], c[1], c[2])
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(c: [f64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(r:{:.2}, g:{:.2}, b:{:.2})",
            round2_half_up(self.r),
            round2_half_up(self.g),
            round2_half_up(self.b)
        )
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parses any [`Rgba`] syntax and drops the alpha channel.
    fn from_str(s: &str) -> Result<Self> {
        s.parse::<Rgba>().map(|c| c.rgb())
    }
}

// ============================================================================
// Rgba
// ============================================================================

/// An [`Rgb`] color with a normalized alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    rgb: Rgb,
    alpha: AlphaBits,
}

/// Alpha stored so that `Rgba` keeps bitwise `Eq`/`Hash` like [`Rgb`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
struct AlphaBits(f64);

impl PartialEq for AlphaBits {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for AlphaBits {}

impl Hash for AlphaBits {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Rgba {
    /// Creates a color from normalized channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
            alpha: AlphaBits(a),
        }
    }

    /// Creates a fully opaque color.
    #[inline]
    pub const fn opaque(rgb: Rgb) -> Self {
        Self {
            rgb,
            alpha: AlphaBits(1.0),
        }
    }

    /// Creates a color from 8-bit channels.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            rgb: Rgb::from_rgb8(r, g, b),
            alpha: AlphaBits(a as f64 / CHANNEL_MAX),
        }
    }

    /// The color channels without alpha.
    #[inline]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Alpha channel in `[0, 1]`.
    #[inline]
    pub const fn alpha(&self) -> f64 {
        self.alpha.0
    }

    /// Euclidean distance over all four normalized channels.
    pub fn distance(&self, other: &Self) -> f64 {
        let dr = self.rgb.r - other.rgb.r;
        let dg = self.rgb.g - other.rgb.g;
        let db = self.rgb.b - other.rgb.b;
        let da = self.alpha() - other.alpha();
        (dr * dr + dg * dg + db * db + da * da).sqrt()
    }

    /// Returns `true` when the two colors are within [`SIMILARITY_THRESHOLD`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use tessera_core::Rgba;
    ///
    /// let a = Rgba::from_rgba8(200, 10, 10, 255);
    /// let b = Rgba::from_rgba8(205, 12, 8, 255);
    /// assert!(a.is_similar(&b));
    /// ```
    #[inline]
    pub fn is_similar(&self, other: &Self) -> bool {
        self.distance(other) <= SIMILARITY_THRESHOLD
    }

    /// Complementary color, alpha preserved.
    #[inline]
    pub fn complementary(self) -> Self {
        Self {
            rgb: self.rgb.complementary(),
            alpha: self.alpha,
        }
    }

    /// Lowercase hex string; `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        let a = to_byte(self.alpha());
        if a == u8::MAX {
            self.rgb.to_hex()
        } else {
            format!("{}{:02x}", self.rgb.to_hex(), a)
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::opaque(Rgb::BLACK)
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Self::opaque(rgb)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(r:{:.2}, g:{:.2}, b:{:.2}, a:{:.2})",
            round2_half_up(self.rgb.r),
            round2_half_up(self.rgb.g),
            round2_half_up(self.rgb.b),
            round2_half_up(self.alpha())
        )
    }
}

impl FromStr for Rgba {
    type Err = Error;

    /// Accepts `#rrggbb`, `#rrggbbaa` (leading `#` optional) and
    /// `r,g,b` / `r,g,b,a` with 8-bit integer components.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.contains(',') {
            parse_components(s)
        } else {
            parse_hex(s)
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgba> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !matches!(digits.len(), 6 | 8) {
        return Err(Error::parse(s, "expected 6 or 8 hex digits"));
    }
    if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::parse(s, "invalid hex digit"));
    }

    let byte = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|e| Error::parse(s, e.to_string()))
    };
    let a = if digits.len() == 8 { byte(6)? } else { u8::MAX };
    Ok(Rgba::from_rgba8(byte(0)?, byte(2)?, byte(4)?, a))
}

fn parse_components(s: &str) -> Result<Rgba> {
    let parts = s
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<u8>()
                .map_err(|e| Error::parse(s, format!("component '{}': {}", p.trim(), e)))
        })
        .collect::<Result<Vec<u8>>>()?;

    match parts[..] {
        [r, g, b] => Ok(Rgba::from_rgba8(r, g, b, u8::MAX)),
        [r, g, b, a] => Ok(Rgba::from_rgba8(r, g, b, a)),
        _ => Err(Error::parse(s, "expected 3 or 4 components")),
    }
}
