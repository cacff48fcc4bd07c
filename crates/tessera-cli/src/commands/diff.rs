//! Color difference command.

use crate::DiffArgs;
use anyhow::Result;
use serde::Serialize;
use tessera_core::Rgba;
use tessera_delta::{ColorDifference, DeltaEFormula, color_difference};
use tracing::{debug, info, trace};

/// Distance under one formula.
#[derive(Debug, Serialize)]
pub struct DiffEntry {
    pub formula: DeltaEFormula,
    pub difference: ColorDifference,
    pub description: &'static str,
}

/// Every requested distance between a reference and a sample color.
#[derive(Debug, Serialize)]
pub struct DiffReport {
    pub reference: String,
    pub sample: String,
    pub results: Vec<DiffEntry>,
}

/// Measures `a -> b` under each formula. Alpha does not take part.
pub fn compare(a: Rgba, b: Rgba, formulas: &[DeltaEFormula]) -> DiffReport {
    let results = formulas
        .iter()
        .map(|&formula| {
            let difference = color_difference(a.rgb(), b.rgb(), formula);
            debug!(%formula, value = difference.value(), category = %difference.category(), "Delta E");
            DiffEntry {
                formula,
                difference,
                description: difference.category().description(),
            }
        })
        .collect();

    DiffReport {
        reference: a.to_hex(),
        sample: b.to_hex(),
        results,
    }
}

pub fn run(args: DiffArgs, json: bool) -> Result<()> {
    trace!(a = %args.a.to_hex(), b = %args.b.to_hex(), all = args.all, "diff::run");

    let formulas: &[DeltaEFormula] = if args.all {
        &DeltaEFormula::ALL
    } else {
        std::slice::from_ref(&args.formula)
    };
    let report = compare(args.a, args.b, formulas);
    info!(reference = %report.reference, sample = %report.sample, formulas = formulas.len(), "Compared colors");

    if json {
        return super::print_json(&report);
    }

    println!("Comparing {} -> {}", report.reference, report.sample);
    for entry in &report.results {
        println!(
            "  {:<10} {:>7.2}  {:<10} {}",
            entry.formula.name(),
            entry.difference.value(),
            entry.difference.category().name(),
            entry.description
        );
    }
    Ok(())
}
