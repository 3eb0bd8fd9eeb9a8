//! # Search CLI
//!
//! `rig search` filters the catalog and prints the matches, optionally
//! sorted. With `--facets` it also prints the manufacturers and price
//! range of the matches.

use std::collections::BTreeSet;
use std::fmt::{self, Write as _};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use rig_catalog::{manufacturers, price_bounds, search, FilterCriteria, SortOrder};
use rig_core::{Category, Component};

use crate::config::{to_json, OutputFormat, Settings};

/// Arguments for `rig search`.
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Only this category (e.g. `cpu`, `power_supply`).
    #[arg(long)]
    pub category: Option<Category>,

    /// Inclusive minimum price.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Inclusive maximum price.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Accepted manufacturer. Repeat to accept several.
    #[arg(long = "manufacturer")]
    pub manufacturers: Vec<String>,

    /// Required socket for CPUs and motherboards.
    #[arg(long)]
    pub socket: Option<String>,

    /// Required memory type for memory and motherboards.
    #[arg(long)]
    pub memory_type: Option<String>,

    /// Case-insensitive text the name must contain.
    #[arg(long)]
    pub query: Option<String>,

    /// Hide out-of-stock components.
    #[arg(long)]
    pub in_stock: bool,

    /// Result order: unsorted, price-asc, price-desc or name.
    #[arg(long, default_value = "unsorted")]
    pub sort: SortOrder,

    /// Also print manufacturer and price facets of the matches.
    #[arg(long)]
    pub facets: bool,
}

impl SearchArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            category: self.category,
            min_price: self.min_price,
            max_price: self.max_price,
            manufacturers: self.manufacturers.iter().cloned().collect::<BTreeSet<_>>(),
            socket: self.socket.clone(),
            memory_type: self.memory_type.clone(),
            query: self.query.clone(),
            in_stock_only: self.in_stock,
        }
    }
}

/// Manufacturer and price facets of a result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facets {
    pub manufacturers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

impl Facets {
    pub fn of(components: &[Component]) -> Self {
        let bounds = price_bounds(components);
        Self {
            manufacturers: manufacturers(components),
            min_price: bounds.map(|(lo, _)| lo),
            max_price: bounds.map(|(_, hi)| hi),
        }
    }
}

/// Matches plus optional facets.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub components: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<Facets>,
}

/// Execute `rig search`.
pub fn run_search(args: &SearchArgs, settings: &Settings) -> Result<u8> {
    let catalog = settings.load_catalog()?;
    let results = find(catalog.components(), args);
    tracing::info!(
        catalog = catalog.len(),
        matched = results.components.len(),
        "search complete"
    );
    println!("{}", render(&results, settings.format)?);
    Ok(0)
}

/// Run the query described by `args` over `components`.
pub fn find(components: &[Component], args: &SearchArgs) -> SearchResults {
    let matched = search(components, &args.criteria(), args.sort);
    let facets = args.facets.then(|| Facets::of(&matched));
    SearchResults {
        components: matched,
        facets,
    }
}

pub fn render(results: &SearchResults, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            write_text(results, &mut out).context("failed to format search results")?;
            Ok(out)
        }
        OutputFormat::Json => to_json(results),
    }
}

fn write_text(results: &SearchResults, out: &mut String) -> fmt::Result {
    for c in &results.components {
        writeln!(
            out,
            "{:<20} {:<14} {:>10} {}{}",
            c.id,
            c.category.label(),
            format!("${:.2}", c.price),
            c.name,
            if c.stock_status.is_available() {
                ""
            } else {
                " (out of stock)"
            }
        )?;
    }
    write!(out, "{} component(s) found", results.components.len())?;

    if let Some(facets) = &results.facets {
        if !facets.manufacturers.is_empty() {
            write!(out, "\nManufacturers: {}", facets.manufacturers.join(", "))?;
        }
        if let (Some(lo), Some(hi)) = (facets.min_price, facets.max_price) {
            write!(out, "\nPrice range:   ${lo:.2} - ${hi:.2}")?;
        }
    }
    Ok(())
}
