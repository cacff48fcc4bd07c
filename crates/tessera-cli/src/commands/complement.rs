//! Complementary color command.

use crate::ComplementArgs;
use anyhow::Result;
use serde::Serialize;
use tessera_core::Rgba;
use tracing::{info, trace};

/// A color and its complement.
#[derive(Debug, Serialize)]
pub struct Complement {
    pub color: String,
    pub complement: String,
    pub rgba: Rgba,
}

impl Complement {
    pub fn new(color: Rgba) -> Self {
        let complement = color.complementary();
        Self {
            color: color.to_hex(),
            complement: complement.to_hex(),
            rgba: complement,
        }
    }
}

pub fn run(args: ComplementArgs, json: bool) -> Result<()> {
    trace!(count = args.colors.len(), "complement::run");

    let report: Vec<Complement> = args.colors.into_iter().map(Complement::new).collect();
    info!(count = report.len(), "Computed complements");

    if json {
        return super::print_json(&report);
    }

    for c in &report {
        println!("{} -> {}  {}", c.color, c.complement, c.rgba);
    }
    Ok(())
}
