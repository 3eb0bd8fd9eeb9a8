//! # Check CLI
//!
//! `rig check <build-file>` resolves a saved build against the catalog and
//! reports compatibility issues, total price, estimated wattage and
//! power-supply headroom.
//!
//! Exit codes: 0 when no finding is an error, 2 when at least one is.

use std::fmt::{self, Write as _};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use rig_catalog::BuildFile;
use rig_compat::{summarize, BuildSummary};
use rig_core::{BuildSlot, BuildState};

use crate::config::{to_json, OutputFormat, Settings};

/// Exit code reported when the build has an error-severity finding.
pub const EXIT_INCOMPATIBLE: u8 = 2;

/// Arguments for `rig check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Build file (YAML, or JSON by `.json` extension).
    pub build: PathBuf,
}

/// Everything `rig check` reports about one build.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub build: BuildState,
    pub summary: BuildSummary,
}

impl CheckReport {
    pub fn new(name: Option<String>, build: BuildState) -> Self {
        let summary = summarize(&build);
        Self {
            name,
            build,
            summary,
        }
    }

    pub fn exit_code(&self) -> u8 {
        if self.summary.has_errors() {
            EXIT_INCOMPATIBLE
        } else {
            0
        }
    }
}

/// Execute `rig check`.
pub fn run_check(args: &CheckArgs, settings: &Settings) -> Result<u8> {
    let catalog = settings.load_catalog()?;
    let file = BuildFile::load(&args.build)
        .with_context(|| format!("failed to load build file {}", args.build.display()))?;
    let build = file
        .resolve(&catalog)
        .with_context(|| format!("cannot assemble build {}", args.build.display()))?;

    let report = CheckReport::new(file.name, build);
    tracing::info!(
        issues = report.summary.issues.len(),
        wattage = report.summary.estimated_wattage(),
        "build checked"
    );
    println!("{}", render(&report, settings.format)?);
    Ok(report.exit_code())
}

/// Render `report` in the requested format.
pub fn render(report: &CheckReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            write_text(report, &mut out).context("failed to format check report")?;
            Ok(out)
        }
        OutputFormat::Json => to_json(report),
    }
}

fn write_text(report: &CheckReport, out: &mut String) -> fmt::Result {
    let summary = &report.summary;

    writeln!(out, "Build: {}", report.name.as_deref().unwrap_or("(unnamed)"))?;
    for &slot in BuildSlot::all() {
        match report.build.get(slot) {
            Some(c) => writeln!(
                out,
                "  {:<14} {} ({}) ${:.2}",
                slot.label(),
                c.name,
                c.id,
                c.price
            )?,
            None => writeln!(out, "  {:<14} -", slot.label())?,
        }
    }
    writeln!(out)?;

    writeln!(out, "Total price:       ${:.2}", summary.total_price)?;
    let power = &summary.power;
    writeln!(
        out,
        "Estimated wattage: {} W (CPU {} W + GPU {} W + {} W overhead, +20%)",
        power.recommended, power.cpu_tdp, power.gpu_tdp, power.overhead
    )?;
    if let Some(psu) = &summary.power_supply {
        let verdict = if psu.sufficient { "sufficient" } else { "insufficient" };
        writeln!(out, "Power supply:      {} W ({verdict})", psu.capacity)?;
    }
    if !summary.missing_slots.is_empty() {
        let missing: Vec<&str> = summary.missing_slots.iter().map(|s| s.label()).collect();
        writeln!(out, "Missing:           {}", missing.join(", "))?;
    }
    writeln!(out)?;

    if summary.issues.is_empty() {
        return write!(out, "No compatibility issues found.");
    }
    write!(out, "Compatibility issues:")?;
    for issue in &summary.issues {
        write!(out, "\n  {issue}")?;
    }
    Ok(())
}
