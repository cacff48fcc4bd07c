//! Palette command.
//!
//! Loads colors from a file and/or the command line into a de-duplicated
//! [`Palette`], then lists it or ranks it against a target.

use crate::PaletteArgs;
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tessera_core::Rgba;
use tessera_delta::{ColorDifference, Palette};
use tracing::{debug, info, trace};

/// One palette entry, with its distance when ranked.
#[derive(Debug, Serialize)]
pub struct PaletteEntry {
    pub index: usize,
    pub hex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference: Option<ColorDifference>,
}

/// Reads a palette file.
pub fn load_palette(path: &Path, capacity: usize) -> Result<Palette> {
    let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    Palette::from_reader_with_capacity(BufReader::new(file), capacity)
        .with_context(|| format!("Failed to read palette: {}", path.display()))
}

/// Builds the palette from `args` and returns the entries to print.
pub fn build(args: &PaletteArgs) -> Result<Vec<PaletteEntry>> {
    if args.capacity == 0 {
        bail!("Palette capacity must be at least 1");
    }

    let mut palette = match &args.file {
        Some(path) => load_palette(path, args.capacity)?,
        None => Palette::with_capacity(args.capacity),
    };

    let rejected = args.colors.iter().filter(|&&c| !palette.add(c)).count();
    if rejected > 0 {
        debug!(rejected, "Skipped colors similar to existing entries");
    }
    if palette.is_empty() {
        bail!("Palette is empty: pass colors or --file");
    }

    let entries = match args.target {
        Some(target) => palette
            .ranked(target, args.formula)
            .into_iter()
            .map(|(index, difference)| PaletteEntry {
                index,
                hex: hex_at(&palette, index),
                difference: Some(difference),
            })
            .collect(),
        None => palette
            .iter()
            .enumerate()
            .map(|(index, color)| PaletteEntry {
                index,
                hex: color.to_hex(),
                difference: None,
            })
            .collect(),
    };
    Ok(entries)
}

fn hex_at(palette: &Palette, index: usize) -> String {
    palette.get(index).map(Rgba::to_hex).unwrap_or_default()
}

pub fn run(args: PaletteArgs, json: bool) -> Result<()> {
    trace!(
        file = ?args.file,
        colors = args.colors.len(),
        target = ?args.target.map(Rgba::to_hex),
        "palette::run"
    );

    let entries = build(&args)?;
    info!(entries = entries.len(), formula = %args.formula, "Palette ready");

    if json {
        return super::print_json(&entries);
    }

    for e in &entries {
        match e.difference {
            Some(d) => println!(
                "{:>3}  {:<10} {:>7.2}  {}",
                e.index,
                e.hex,
                d.value(),
                d.category()
            ),
            None => println!("{:>3}  {}", e.index, e.hex),
        }
    }
    Ok(())
}
