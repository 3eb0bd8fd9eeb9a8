//! # Error Types
//!
//! Errors raised at the edges of the core model: parsing identifiers into
//! closed enums and placing a component into a slot it cannot occupy.
//! Evaluation itself never fails.

use thiserror::Error;

use crate::category::{BuildSlot, Category};

/// Top-level error type for rig-core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RigError {
    /// A category identifier that is not one of the known categories.
    #[error("unknown component category: {0:?}")]
    UnknownCategory(String),

    /// A build slot identifier that is not one of the known slots.
    #[error("unknown build slot: {0:?}")]
    UnknownSlot(String),

    /// A stock status identifier that is not recognised.
    #[error("unknown stock status: {0:?}")]
    UnknownStockStatus(String),

    /// A component was placed into a slot of a different category.
    #[error("component {component_id} of category {category} cannot occupy slot {slot}")]
    SlotMismatch {
        /// The slot the caller asked for.
        slot: BuildSlot,
        /// The category of the offending component.
        category: Category,
        /// The offending component.
        component_id: String,
    },
}
