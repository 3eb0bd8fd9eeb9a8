//! Errors raised when assembling a comparison set.

use thiserror::Error;

use rig_core::Category;

/// Rejected change to a [`ComparisonSet`](crate::ComparisonSet).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The set already holds the maximum number of components.
    #[error("comparison is full: at most {max} components can be compared")]
    Full {
        /// The configured maximum.
        max: usize,
    },

    /// The component belongs to a different category than the set.
    #[error("cannot compare a {found} with {expected} components")]
    CategoryMismatch {
        /// Category of the components already in the set.
        expected: Category,
        /// Category of the rejected component.
        found: Category,
    },

    /// The component is already in the set.
    #[error("component {0} is already being compared")]
    Duplicate(String),
}
