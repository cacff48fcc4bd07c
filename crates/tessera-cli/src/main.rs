//! tessera - color conversion and Delta E comparison CLI
//!
//! Thin front end over tessera-color and tessera-delta.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tessera_core::Rgba;
use tessera_delta::{DEFAULT_CAPACITY, DeltaEFormula};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;

#[derive(Parser)]
#[command(name = "tessera")]
#[command(author, version, about = "Color conversion and Delta E comparison")]
#[command(long_about = "
Converts colors to XYZ, Lab and HSL and measures perceptual differences
with the Euclidean, CIE76, CIE94, CIEDE2000 and CMC formulas.

Colors are written as #rrggbb, #rrggbbaa, or r,g,b[,a] with 8-bit channels.

Examples:
  tessera convert '#ff8000' 70,130,180     # XYZ / Lab / HSL
  tessera diff '#c89664' '#bea05a'         # CIE94 distance and category
  tessera diff '#ff0000' '#00ff00' --all   # every formula
  tessera classify 0.5 3 75                # category of raw distances
  tessera complement '#336699'
  tessera palette --file colors.txt --target '#4682b4' -f ciede2000
  tessera --json diff '#ffffff' '#000000'
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Machine-readable output (JSON)
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert colors to XYZ, Lab and HSL
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Measure the difference between two colors
    #[command(visible_alias = "d")]
    Diff(DiffArgs),

    /// Classify raw Delta E distances
    Classify(ClassifyArgs),

    /// Complementary colors
    Complement(ComplementArgs),

    /// Build a de-duplicated palette, optionally ranked against a target
    #[command(visible_alias = "p")]
    Palette(PaletteArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Input color(s)
    #[arg(required = true)]
    colors: Vec<Rgba>,
}

#[derive(Args)]
struct DiffArgs {
    /// Reference color
    a: Rgba,

    /// Sample color
    b: Rgba,

    /// Formula: euclidean, cie76, cie94, ciede2000, cmc
    #[arg(short, long, default_value_t = DeltaEFormula::default())]
    formula: DeltaEFormula,

    /// Report every formula
    #[arg(long, conflicts_with = "formula")]
    all: bool,
}

#[derive(Args)]
struct ClassifyArgs {
    /// Distance value(s)
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f64>,
}

#[derive(Args)]
struct ComplementArgs {
    /// Input color(s)
    #[arg(required = true)]
    colors: Vec<Rgba>,
}

#[derive(Args)]
struct PaletteArgs {
    /// Colors to add, after any read from --file
    colors: Vec<Rgba>,

    /// Palette file, one color per line
    #[arg(long)]
    file: Option<PathBuf>,

    /// Rank entries by distance to this color
    #[arg(short, long)]
    target: Option<Rgba>,

    /// Formula used for ranking
    #[arg(short, long, default_value_t = DeltaEFormula::default())]
    formula: DeltaEFormula,

    /// Maximum number of entries
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
}

/// Installs the stderr subscriber. `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.json),
        Commands::Diff(args) => commands::diff::run(args, cli.json),
        Commands::Classify(args) => commands::classify::run(args, cli.json),
        Commands::Complement(args) => commands::complement::run(args, cli.json),
        Commands::Palette(args) => commands::palette::run(args, cli.json),
    }
}
