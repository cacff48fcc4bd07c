//! CIE76: Euclidean distance in L*a*b*.

use tessera_color::Lab;

/// `sqrt(ΔL² + Δa² + Δb²)`. Unrounded.
pub fn delta_e(lab1: &Lab, lab2: &Lab) -> f64 {
    ((lab2.l - lab1.l).powi(2) + (lab2.a - lab1.a).powi(2) + (lab2.b - lab1.b).powi(2)).sqrt()
}
