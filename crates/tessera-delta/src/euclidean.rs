//! Euclidean distance in 8-bit RGB space.
//!
//! Not perceptual at all, but cheap and symmetric. Ranges from 0 to
//! `sqrt(3) * 255 ≈ 441.67` (black vs white).

use tessera_core::Rgb;

/// Straight-line distance over channels scaled to `[0, 255]`. Unrounded.
///
/// # Example
///
/// ```rust
/// use tessera_core::Rgb;
/// use tessera_delta::euclidean;
///
/// let d = euclidean::delta_e(Rgb::from_rgb8(255, 0, 0), Rgb::from_rgb8(0, 255, 0));
/// assert!((d - 360.6245).abs() < 1e-4);
/// ```
pub fn delta_e(c1: Rgb, c2: Rgb) -> f64 {
    let dr = c1.red255() - c2.red255();
    let dg = c1.green255() - c2.green255();
    let db = c1.blue255() - c2.blue255();
    (dr.powi(2) + dg.powi(2) + db.powi(2)).sqrt()
}
