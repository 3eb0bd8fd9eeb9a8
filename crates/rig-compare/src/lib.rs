//! # rig-compare: Side-by-Side Component Comparison
//!
//! - **Rules** (`rules.rs`): the static per-category table declaring which
//!   specification keys are ranked and in which direction.
//!
//! - **Analysis** (`analysis.rs`): best-value marking per key, scoring,
//!   best-pick selection and recommendation text.
//!
//! - **Selection** (`selection.rs`): the bounded, single-category
//!   [`ComparisonSet`] a user builds before comparing.
//!
//! ## Crate Policy
//!
//! - Depends on `rig-core` only.
//! - Analysis never fails; unusable input yields an empty analysis.
//! - Output is a deterministic function of the input set: the best pick
//!   does not depend on the order components were added.

pub mod analysis;
pub mod error;
pub mod rules;
pub mod selection;

pub use analysis::{
    analyze, is_comparable, ComparisonAnalysis, ComponentScore, ComponentValue, SpecComparison,
    MAX_COMPARED, MIN_COMPARED, POINTS_PER_BEST,
};
pub use error::SelectionError;
pub use rules::{rule_for, rules_for, ComparisonRule, Preference};
pub use selection::ComparisonSet;
