//! # Compare CLI
//!
//! `rig compare <id> <id> [<id> <id>]` places two to four catalog
//! components of one category side by side, marks the best value of every
//! ranked specification and names the overall pick.

use std::fmt::{self, Write as _};

use anyhow::{Context, Result};
use clap::Args;

use rig_catalog::Catalog;
use rig_compare::{ComparisonAnalysis, ComparisonSet, MAX_COMPARED, MIN_COMPARED};
use rig_core::Component;

use crate::config::{to_json, OutputFormat, Settings};

/// Arguments for `rig compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Catalog ids of the components to compare (two to four).
    #[arg(required = true, num_args = MIN_COMPARED..=MAX_COMPARED)]
    pub ids: Vec<String>,
}

/// Execute `rig compare`.
pub fn run_compare(args: &CompareArgs, settings: &Settings) -> Result<u8> {
    let catalog = settings.load_catalog()?;
    let set = select(&catalog, &args.ids)?;
    let analysis = set.analyze();
    if let Some(best) = &analysis.best_component {
        tracing::info!(best = %best.id, "comparison complete");
    }
    println!("{}", render(set.components(), &analysis, settings.format)?);
    Ok(0)
}

/// Look `ids` up and collect them into a comparison set.
pub fn select(catalog: &Catalog, ids: &[String]) -> Result<ComparisonSet> {
    ids.iter().try_fold(ComparisonSet::new(), |set, id| {
        let component = catalog.require(id)?;
        set.try_add(component.clone())
            .with_context(|| format!("cannot add {id} to the comparison"))
    })
}

/// Render `analysis` of `components` in the requested format.
pub fn render(
    components: &[Component],
    analysis: &ComparisonAnalysis,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            write_text(components, analysis, &mut out)
                .context("failed to format comparison table")?;
            Ok(out)
        }
        OutputFormat::Json => to_json(analysis),
    }
}

const KEY_WIDTH: usize = 18;
const VALUE_WIDTH: usize = 20;

fn write_text(
    components: &[Component],
    analysis: &ComparisonAnalysis,
    out: &mut String,
) -> fmt::Result {
    write!(out, "{:<KEY_WIDTH$}", "")?;
    for c in components {
        write!(out, "{:<VALUE_WIDTH$}", c.short_name())?;
    }
    writeln!(out)?;
    write!(out, "{:<KEY_WIDTH$}", "Price")?;
    for c in components {
        write!(out, "{:<VALUE_WIDTH$}", format!("${:.2}", c.price))?;
    }
    writeln!(out)?;

    for spec in &analysis.specifications {
        write!(out, "{:<KEY_WIDTH$}", spec.specification_key)?;
        for value in &spec.values {
            let cell = if value.is_best {
                format!("{} *", value.raw_value)
            } else {
                value.raw_value.clone()
            };
            write!(out, "{cell:<VALUE_WIDTH$}")?;
        }
        writeln!(out)?;
    }

    write!(out, "{:<KEY_WIDTH$}", "Score")?;
    for score in &analysis.scores {
        write!(out, "{:<VALUE_WIDTH$}", score.score)?;
    }
    writeln!(out)?;

    let notes: Vec<&String> = analysis
        .specifications
        .iter()
        .flat_map(|s| &s.notes)
        .collect();
    if !notes.is_empty() {
        write!(out, "\nNotes:\n")?;
        for note in notes {
            writeln!(out, "  - {note}")?;
        }
    }

    if let Some(best) = &analysis.best_component {
        write!(out, "\nBest pick: {} ({})", best.name, best.id)?;
    }
    for recommendation in &analysis.recommendations {
        write!(out, "\n  {recommendation}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig_core::Category;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Component::new("cpu-a", Category::Cpu, "Ryzen 5 7600", 229.0)
                .with_spec("Core Count", "6")
                .with_spec("TDP", "65 W"),
            Component::new("cpu-b", Category::Cpu, "Ryzen 9 7950X", 549.0)
                .with_spec("Core Count", "16")
                .with_spec("TDP", "170 W"),
            Component::new("gpu-a", Category::Gpu, "Radeon RX 7800 XT", 499.0),
        ])
        .unwrap()
    }

    #[test]
    fn select_rejects_mixed_categories() {
        let ids = vec!["cpu-a".to_string(), "gpu-a".to_string()];
        let err = select(&catalog(), &ids).unwrap_err();
        assert!(format!("{err:#}").contains("cannot add gpu-a"));
    }

    #[test]
    fn select_rejects_unknown_id() {
        let ids = vec!["cpu-a".to_string(), "cpu-z".to_string()];
        let err = select(&catalog(), &ids).unwrap_err();
        assert!(format!("{err:#}").contains("cpu-z"));
    }

    #[test]
    fn text_marks_best_values() {
        let ids = vec!["cpu-a".to_string(), "cpu-b".to_string()];
        let set = select(&catalog(), &ids).unwrap();
        let analysis = set.analyze();
        let text = render(set.components(), &analysis, OutputFormat::Text).unwrap();
        assert!(text.contains("16 *"));
        assert!(text.contains("65 W *"));
        assert!(text.contains("Notes:"));
    }

    #[test]
    fn text_rows_follow_the_table_layout() {
        let ids = vec!["cpu-a".to_string(), "cpu-b".to_string()];
        let set = select(&catalog(), &ids).unwrap();
        let analysis = set.analyze();
        let text = render(set.components(), &analysis, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("Price"));
        assert_eq!(&lines[1][KEY_WIDTH..KEY_WIDTH + 7], "$229.00");
        assert!(lines.iter().any(|l| l.starts_with("Score")));
        // One mark each; the cheaper part wins the tie.
        assert!(text.contains("\nBest pick: Ryzen 5 7600 (cpu-a)"));
    }

    #[test]
    fn json_is_the_analysis() {
        let ids = vec!["cpu-a".to_string(), "cpu-b".to_string()];
        let set = select(&catalog(), &ids).unwrap();
        let analysis = set.analyze();
        let json = render(set.components(), &analysis, OutputFormat::Json).unwrap();
        let back: ComparisonAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
    }
}
