//! # rig-core: Foundational Types for rig
//!
//! This crate is the leaf of the rig workspace. It defines the catalog
//! component model and the build-state snapshot that every other crate
//! evaluates. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed category enum.** `Category` and `BuildSlot` are exhaustive
//!    enums. Adding a hardware category forces every rule table and slot
//!    mapping to handle it at compile time.
//!
//! 2. **Open specification keys.** Specification keys stay plain strings
//!    because the catalog defines them. Values are a small tagged union
//!    (`SpecValue`) of text, number and boolean.
//!
//! 3. **Immutable build snapshots.** `BuildState` is a value. Assigning or
//!    clearing a slot returns a new snapshot; evaluators only ever borrow one.
//!
//! 4. **Lenient numeric extraction.** `parse_leading_number()` never fails;
//!    an unparsable specification is "no value", not an error.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `rig-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod build;
pub mod category;
pub mod component;
pub mod error;
pub mod keys;
pub mod spec_value;

pub use build::BuildState;
pub use category::{BuildSlot, Category, CATEGORY_COUNT};
pub use component::{Component, ComponentId, SpecValue, Specifications, StockStatus};
pub use error::RigError;
pub use spec_value::parse_leading_number;

/// Placeholder shown for a specification a component does not declare.
pub const MISSING_SPEC: &str = "-";
