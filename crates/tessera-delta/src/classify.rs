//! Qualitative classification of Delta E distances.
//!
//! | Distance | Category |
//! |----------|----------|
//! | `0` | [`Identical`](DifferenceCategory::Identical) |
//! | `(0, 1]` | [`Similar`](DifferenceCategory::Similar) |
//! | `(1, 2]` | [`Close`](DifferenceCategory::Close) |
//! | `(2, 10]` | [`Near`](DifferenceCategory::Near) |
//! | `(10, 50]` | [`Different`](DifferenceCategory::Different) |
//! | `> 50` | [`Far`](DifferenceCategory::Far) |
//!
//! Bands are inclusive at their upper bound. A NaN distance falls through
//! every comparison and lands in `Far`.
//!
//! [`ColorDifference`] carries the category *and* the distance. Results
//! order by distance only; the category is a label, never a sort key.

use std::cmp::Ordering;
use std::fmt;

/// Upper bound (inclusive) of [`DifferenceCategory::Similar`].
pub const SIMILAR_MAX: f64 = 1.0;
/// Upper bound (inclusive) of [`DifferenceCategory::Close`].
pub const CLOSE_MAX: f64 = 2.0;
/// Upper bound (inclusive) of [`DifferenceCategory::Near`].
pub const NEAR_MAX: f64 = 10.0;
/// Upper bound (inclusive) of [`DifferenceCategory::Different`].
pub const DIFFERENT_MAX: f64 = 50.0;

/// Qualitative bucket for a color distance.
///
/// Deliberately has no ordering: compare [`ColorDifference`] values instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DifferenceCategory {
    /// No difference.
    Identical,
    /// Not perceptible by the human eye.
    Similar,
    /// Perceptible through close observation.
    Close,
    /// Perceptible at a glance.
    Near,
    /// Different, but not opposite.
    Different,
    /// More opposite than similar.
    Far,
}

impl DifferenceCategory {
    /// All categories from smallest to largest band.
    pub const ALL: [Self; 6] = [
        Self::Identical,
        Self::Similar,
        Self::Close,
        Self::Near,
        Self::Different,
        Self::Far,
    ];

    /// Maps a distance to its band.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tessera_delta::DifferenceCategory;
    ///
    /// assert_eq!(DifferenceCategory::classify(0.0), DifferenceCategory::Identical);
    /// assert_eq!(DifferenceCategory::classify(2.0), DifferenceCategory::Close);
    /// assert_eq!(DifferenceCategory::classify(2.0001), DifferenceCategory::Near);
    /// ```
    pub fn classify(value: f64) -> Self {
        if value == 0.0 {
            Self::Identical
        } else if value <= SIMILAR_MAX {
            Self::Similar
        } else if value <= CLOSE_MAX {
            Self::Close
        } else if value <= NEAR_MAX {
            Self::Near
        } else if value <= DIFFERENT_MAX {
            Self::Different
        } else {
            Self::Far
        }
    }

    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identical => "identical",
            Self::Similar => "similar",
            Self::Close => "close",
            Self::Near => "near",
            Self::Different => "different",
            Self::Far => "far",
        }
    }

    /// One-sentence human description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Identical => "There is no difference between the two colors.",
            Self::Similar => "The difference between the two colors is not perceptible by human eye.",
            Self::Close => "The difference between the two colors is perceptible through close observation.",
            Self::Near => "The difference between the two colors is perceptible at a glance.",
            Self::Different => "The two colors are different, but not opposite.",
            Self::Far => "The two colors are more opposite than similar.",
        }
    }
}

impl fmt::Display for DifferenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified color distance: the category tag carries the value.
///
/// Build values with [`ColorDifference::new`] (or [`crate::classify`]).
/// Writing a variant by hand, such as `Identical(75.0)`, skips
/// classification and yields a tag that disagrees with the value.
/// Deserializing always reclassifies from `value` and ignores the stored
/// `category`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "category", content = "value", rename_all = "lowercase")
)]
pub enum ColorDifference {
    /// See [`DifferenceCategory::Identical`].
    Identical(f64),
    /// See [`DifferenceCategory::Similar`].
    Similar(f64),
    /// See [`DifferenceCategory::Close`].
    Close(f64),
    /// See [`DifferenceCategory::Near`].
    Near(f64),
    /// See [`DifferenceCategory::Different`].
    Different(f64),
    /// See [`DifferenceCategory::Far`].
    Far(f64),
}

impl ColorDifference {
    /// Classifies `value`.
    pub fn new(value: f64) -> Self {
        match DifferenceCategory::classify(value) {
            DifferenceCategory::Identical => Self::Identical(value),
            DifferenceCategory::Similar => Self::Similar(value),
            DifferenceCategory::Close => Self::Close(value),
            DifferenceCategory::Near => Self::Near(value),
            DifferenceCategory::Different => Self::Different(value),
            DifferenceCategory::Far => Self::Far(value),
        }
    }

    /// The numeric distance.
    #[inline]
    pub fn value(&self) -> f64 {
        match *self {
            Self::Identical(v)
            | Self::Similar(v)
            | Self::Close(v)
            | Self::Near(v)
            | Self::Different(v)
            | Self::Far(v) => v,
        }
    }

    /// The category tag.
    pub fn category(&self) -> DifferenceCategory {
        match self {
            Self::Identical(_) => DifferenceCategory::Identical,
            Self::Similar(_) => DifferenceCategory::Similar,
            Self::Close(_) => DifferenceCategory::Close,
            Self::Near(_) => DifferenceCategory::Near,
            Self::Different(_) => DifferenceCategory::Different,
            Self::Far(_) => DifferenceCategory::Far,
        }
    }

    /// `true` for a zero distance.
    #[inline]
    pub fn is_identical(&self) -> bool {
        matches!(self, Self::Identical(_))
    }

    /// Total order on the distance (IEEE `totalOrder`), for sorting.
    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.value().total_cmp(&other.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ColorDifference {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(tag = "category", content = "value", rename_all = "lowercase")]
        enum Stored {
            Identical(f64),
            Similar(f64),
            Close(f64),
            Near(f64),
            Different(f64),
            Far(f64),
        }

        let value = match Stored::deserialize(deserializer)? {
            Stored::Identical(v)
            | Stored::Similar(v)
            | Stored::Close(v)
            | Stored::Near(v)
            | Stored::Different(v)
            | Stored::Far(v) => v,
        };
        Ok(Self::new(value))
    }
}

impl From<f64> for ColorDifference {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

// For values built through `new` the tag is a function of the value, so
// comparing values is enough.
// A derived impl would order by variant first, which is wrong here.
impl PartialEq for ColorDifference {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl PartialOrd for ColorDifference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

impl fmt::Display for ColorDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ({})", self.value(), self.category())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        let cases = [
            (0.0, DifferenceCategory::Identical),
            (0.0001, DifferenceCategory::Similar),
            (1.0, DifferenceCategory::Similar),
            (1.0001, DifferenceCategory::Close),
            (2.0, DifferenceCategory::Close),
            (2.0001, DifferenceCategory::Near),
            (10.0, DifferenceCategory::Near),
            (10.0001, DifferenceCategory::Different),
            (50.0, DifferenceCategory::Different),
            (50.0001, DifferenceCategory::Far),
            (441.67, DifferenceCategory::Far),
        ];
        for (value, expected) in cases {
            assert_eq!(DifferenceCategory::classify(value), expected, "{value}");
            assert_eq!(ColorDifference::new(value).category(), expected, "{value}");
        }
    }

    #[test]
    fn test_negative_zero_is_identical() {
        assert!(ColorDifference::new(-0.0).is_identical());
    }

    #[test]
    fn test_nan_is_far() {
        let d = ColorDifference::new(f64::NAN);
        assert_eq!(d.category(), DifferenceCategory::Far);
        assert!(d.value().is_nan());
        assert_ne!(d, d);
    }

    #[test]
    fn test_value_preserved() {
        let d = ColorDifference::new(7.25);
        assert_eq!(d, ColorDifference::Near(7.25));
        assert_eq!(d.value(), 7.25);
    }

    #[test]
    fn test_orders_by_value_not_category() {
        let near_low = ColorDifference::new(2.5);
        let near_high = ColorDifference::new(9.5);
        let different = ColorDifference::new(10.5);
        let identical = ColorDifference::new(0.0);

        assert!(near_low < near_high);
        assert!(near_high < different);
        assert!(identical < near_low);
        assert!(different > identical);
    }

    #[test]
    fn test_sorting() {
        let mut results: Vec<ColorDifference> =
            [55.0, 0.4, 12.0, 0.0, 3.3, 1.5].into_iter().map(ColorDifference::new).collect();
        results.sort_by(ColorDifference::total_cmp);
        let values: Vec<f64> = results.iter().map(|r| r.value()).collect();
        assert_eq!(values, [0.0, 0.4, 1.5, 3.3, 12.0, 55.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_reclassifies() {
        let d: ColorDifference =
            serde_json::from_str(r#"{"category":"identical","value":75.0}"#).unwrap();
        assert_eq!(d.category(), DifferenceCategory::Far);
        assert_eq!(d.value(), 75.0);

        let d: ColorDifference =
            serde_json::from_str(r#"{"category":"far","value":1.5}"#).unwrap();
        assert_eq!(d.category(), DifferenceCategory::Close);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_shape() {
        let value = serde_json::to_value(ColorDifference::new(3.25)).unwrap();
        assert_eq!(value["category"], "near");
        assert_eq!(value["value"], 3.25);
    }

    #[test]
    fn test_display() {
        assert_eq!(ColorDifference::new(3.0).to_string(), "3.00 (near)");
        assert_eq!(DifferenceCategory::Far.to_string(), "far");
    }

    #[test]
    fn test_descriptions_distinct() {
        let mut seen = std::collections::HashSet::new();
        for category in DifferenceCategory::ALL {
            assert!(seen.insert(category.description()));
        }
    }
}
