//! # rig-catalog: Component Catalog Access
//!
//! Loads component catalogs and saved builds, and answers browse queries
//! over them.
//!
//! - [`loader`]: YAML/JSON [`Catalog`] and [`BuildFile`] loading with
//!   id and price validation.
//! - [`filter`]: [`FilterCriteria`] predicates, [`SortOrder`] and the
//!   manufacturer and price facets used to populate filter controls.
//!
//! ## Crate Policy
//!
//! - Filtering and sorting are pure and never fail.
//! - Loading returns [`CatalogError`]; nothing here panics on bad input.

pub mod error;
pub mod filter;
pub mod loader;

pub use error::{CatalogError, CatalogResult};
pub use filter::{filter, manufacturers, price_bounds, search, sort, FilterCriteria, SortOrder};
pub use loader::{BuildFile, Catalog};
