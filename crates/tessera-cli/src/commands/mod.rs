//! CLI command implementations

pub mod classify;
pub mod complement;
pub mod convert;
pub mod diff;
pub mod palette;

use anyhow::{Context, Result};
use serde::Serialize;

/// Print a report as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(report: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    println!("{text}");
    Ok(())
}
