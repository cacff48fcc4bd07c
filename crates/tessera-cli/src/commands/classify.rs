//! Distance classification command.

use crate::ClassifyArgs;
use anyhow::{Result, bail};
use serde::Serialize;
use tessera_delta::{ColorDifference, classify};
use tracing::{info, trace};

/// Category of one raw distance.
#[derive(Debug, Serialize)]
pub struct Classification {
    pub difference: ColorDifference,
    pub description: &'static str,
}

/// Classifies each value. Distances are never negative or NaN.
pub fn classify_all(values: &[f64]) -> Result<Vec<Classification>> {
    values
        .iter()
        .map(|&value| {
            if value.is_nan() || value < 0.0 {
                bail!("Invalid distance {value}: must be a non-negative number");
            }
            let difference = classify(value);
            Ok(Classification {
                difference,
                description: difference.category().description(),
            })
        })
        .collect()
}

pub fn run(args: ClassifyArgs, json: bool) -> Result<()> {
    trace!(count = args.values.len(), "classify::run");

    let report = classify_all(&args.values)?;
    info!(count = report.len(), "Classified distances");

    if json {
        return super::print_json(&report);
    }

    for c in &report {
        println!(
            "{:>8.2}  {:<10} {}",
            c.difference.value(),
            c.difference.category().name(),
            c.description
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_delta::DifferenceCategory;

    #[test]
    fn test_classify_all() {
        let report = classify_all(&[0.0, 0.5, 2.0, 10.0, 50.0, 50.5]).unwrap();
        let categories: Vec<_> = report.iter().map(|c| c.difference.category()).collect();
        assert_eq!(
            categories,
            [
                DifferenceCategory::Identical,
                DifferenceCategory::Similar,
                DifferenceCategory::Close,
                DifferenceCategory::Near,
                DifferenceCategory::Different,
                DifferenceCategory::Far,
            ]
        );
    }

    #[test]
    fn test_rejects_negative_and_nan() {
        assert!(classify_all(&[1.0, -0.5]).is_err());
        assert!(classify_all(&[f64::NAN]).is_err());
    }
}
