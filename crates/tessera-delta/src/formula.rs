//! Delta E formula selector.
//!
//! [`DeltaEFormula`] is a stateless dispatch key over the five formula
//! modules. Dispatch converts to Lab where the formula needs it and rounds
//! the result to two decimals (ties to even).

use crate::{cie76, cie94, ciede2000, cmc, euclidean};
use std::fmt;
use std::str::FromStr;
use tessera_color::ColorConvert;
use tessera_core::{Error, Rgb, round2};

/// A color difference formula.
///
/// # Example
///
/// ```rust
/// use tessera_core::Rgb;
/// use tessera_delta::DeltaEFormula;
///
/// let red = Rgb::from_rgb8(255, 0, 0);
/// let green = Rgb::from_rgb8(0, 255, 0);
///
/// assert_eq!(DeltaEFormula::Euclidean.delta_e(red, green), 360.62);
/// assert_eq!("cie76".parse::<DeltaEFormula>().unwrap(), DeltaEFormula::Cie76);
/// assert_eq!(DeltaEFormula::default(), DeltaEFormula::Cie94);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeltaEFormula {
    /// Euclidean distance over 8-bit RGB.
    Euclidean,
    /// CIE 1976: Euclidean distance over Lab.
    Cie76,
    /// CIE 1994, graphic arts weights.
    #[default]
    Cie94,
    /// Simplified CIEDE2000 (see [`crate::ciede2000`]).
    Ciede2000,
    /// CMC l:c with l = c = 1, halved onto 0..100.
    Cmc,
}

impl DeltaEFormula {
    /// All formulas, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Euclidean,
        Self::Cie76,
        Self::Cie94,
        Self::Ciede2000,
        Self::Cmc,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Cie76 => "cie76",
            Self::Cie94 => "cie94",
            Self::Ciede2000 => "ciede2000",
            Self::Cmc => "cmc",
        }
    }

    /// `true` when `ΔE(a, b) == ΔE(b, a)` for all inputs.
    ///
    /// CIE94, CIEDE2000 and CMC weight by the first (reference) color.
    pub const fn is_symmetric(self) -> bool {
        matches!(self, Self::Euclidean | Self::Cie76)
    }

    /// Computes the distance from `c1` (reference) to `c2`, rounded to two
    /// decimals.
    pub fn delta_e(self, c1: Rgb, c2: Rgb) -> f64 {
        let raw = match self {
            Self::Euclidean => euclidean::delta_e(c1, c2),
            Self::Cie76 => cie76::delta_e(&c1.to_lab(), &c2.to_lab()),
            Self::Cie94 => cie94::delta_e(&c1.to_lab(), &c2.to_lab()),
            Self::Ciede2000 => ciede2000::delta_e(&c1.to_lab(), &c2.to_lab()),
            Self::Cmc => cmc::delta_e(&c1.to_lab(), &c2.to_lab()),
        };
        round2(raw)
    }
}

impl fmt::Display for DeltaEFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeltaEFormula {
    type Err = Error;

    /// Case-insensitive; `-`, `_` and spaces are ignored, so `CIE-94`,
    /// `de2000` and `cie2000` are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "euclidean" | "rgb" => Ok(Self::Euclidean),
            "cie76" | "de76" => Ok(Self::Cie76),
            "cie94" | "de94" => Ok(Self::Cie94),
            "ciede2000" | "cie2000" | "de2000" => Ok(Self::Ciede2000),
            "cmc" => Ok(Self::Cmc),
            _ => Err(Error::UnknownFormula(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for formula in DeltaEFormula::ALL {
            assert_eq!(formula.name().parse::<DeltaEFormula>().unwrap(), formula);
            assert_eq!(formula.to_string(), formula.name());
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("CIE-94".parse::<DeltaEFormula>().unwrap(), DeltaEFormula::Cie94);
        assert_eq!("de2000".parse::<DeltaEFormula>().unwrap(), DeltaEFormula::Ciede2000);
        assert_eq!("CMC".parse::<DeltaEFormula>().unwrap(), DeltaEFormula::Cmc);
    }

    #[test]
    fn test_unknown() {
        let err = "cie2001".parse::<DeltaEFormula>().unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("cie2001"));
    }

    #[test]
    fn test_rounded() {
        let a = Rgb::from_rgb8(20, 200, 60);
        let b = Rgb::from_rgb8(25, 190, 70);
        for formula in DeltaEFormula::ALL {
            let d = formula.delta_e(a, b);
            assert_eq!(d, round2(d), "{formula}");
        }
    }

    #[test]
    fn test_symmetry_flags() {
        let symmetric: Vec<_> = DeltaEFormula::ALL.into_iter().filter(|f| f.is_symmetric()).collect();
        assert_eq!(symmetric, [DeltaEFormula::Euclidean, DeltaEFormula::Cie76]);
    }
}
