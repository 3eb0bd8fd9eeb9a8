//! # rig-compat: Build Compatibility & Metrics
//!
//! Pure functions over a [`rig_core::BuildState`] snapshot:
//!
//! - **Compatibility** (`compatibility.rs`): the fixed pairwise rule set
//!   (CPU/motherboard socket, memory type, cooler socket support, display
//!   output) yielding typed [`CompatibilityIssue`]s.
//!
//! - **Metrics** (`metrics.rs`): total price and the TDP-based power
//!   estimate with category fallbacks and a 20% safety margin.
//!
//! - **Summary** (`summary.rs`): one report bundling findings, metrics,
//!   empty slots and power-supply headroom.
//!
//! ## Crate Policy
//!
//! - Depends on `rig-core` only.
//! - Nothing here returns an error. Absent data skips a rule or falls back
//!   to a default.
//! - No shared state: every function borrows one snapshot for one call.

pub mod compatibility;
pub mod metrics;
pub mod summary;

pub use compatibility::{evaluate, has_errors, CompatibilityIssue, CompatibilityRule, Severity};
pub use metrics::{estimated_wattage, power_estimate, total_price, PowerEstimate};
pub use summary::{summarize, BuildSummary, PowerHeadroom};
