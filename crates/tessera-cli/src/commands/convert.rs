//! Color conversion command.
//!
//! Prints XYZ, Lab and HSL for each input color. Alpha is ignored by the
//! conversions but kept in the report.

use crate::ConvertArgs;
use anyhow::Result;
use serde::Serialize;
use tessera_color::{ColorConvert, Hsl, Lab, Xyz};
use tessera_core::Rgba;
use tracing::{debug, info, trace};

/// One converted color.
#[derive(Debug, Serialize)]
pub struct Conversion {
    pub hex: String,
    pub rgba: Rgba,
    pub xyz: Xyz,
    pub lab: Lab,
    pub hsl: Hsl,
}

impl Conversion {
    pub fn new(color: Rgba) -> Self {
        let conversion = Self {
            hex: color.to_hex(),
            rgba: color,
            xyz: color.to_xyz(),
            lab: color.to_lab(),
            hsl: color.to_hsl(),
        };
        debug!(hex = %conversion.hex, lab = ?conversion.lab.to_array(), "Converted");
        conversion
    }
}

pub fn run(args: ConvertArgs, json: bool) -> Result<()> {
    trace!(count = args.colors.len(), "convert::run");

    let report: Vec<Conversion> = args.colors.into_iter().map(Conversion::new).collect();
    info!(count = report.len(), "Converted colors");

    if json {
        return super::print_json(&report);
    }

    for c in &report {
        println!("{}  {}", c.hex, c.rgba);
        println!("  XYZ  {:>7.2} {:>7.2} {:>7.2}", c.xyz.x, c.xyz.y, c.xyz.z);
        println!("  Lab  {:>7.2} {:>7.2} {:>7.2}", c.lab.l, c.lab.a, c.lab.b);
        println!(
            "  HSL  {:>6.2}° {:>6.2}% {:>6.2}%",
            c.hsl.hue, c.hsl.saturation, c.hsl.lightness
        );
    }
    Ok(())
}
