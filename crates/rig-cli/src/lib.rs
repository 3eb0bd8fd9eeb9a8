//! # rig-cli: PC Build Command-Line Interface
//!
//! Thin command layer over the rig library crates.
//!
//! ## Subcommands
//!
//! - `check`: compatibility and power report for a saved build file
//! - `compare`: side-by-side comparison of two to four catalog components
//! - `search`: filter, sort and facet the catalog
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here delegate to the
//!   domain crates and only format their results.
//! - Handlers return `anyhow::Result<u8>`; the `u8` is the process exit code.
//! - Logs go to stderr so JSON output on stdout stays machine-readable.

pub mod check;
pub mod compare;
pub mod config;
pub mod search;
