//! # Comparison Set
//!
//! The bounded list of components a user is comparing. It holds at most
//! [`MAX_COMPARED`] components, all of one category, with no duplicate
//! ids. Like [`rig_core::BuildState`] it is a value: every change returns
//! a new set. Deserialization replays every member through
//! [`ComparisonSet::try_add`], so a loaded set obeys the same limits.

use serde::{Deserialize, Serialize};

use rig_core::{Category, Component, ComponentId};

use crate::analysis::{analyze, ComparisonAnalysis, MAX_COMPARED, MIN_COMPARED};
use crate::error::SelectionError;

/// Components selected for side-by-side comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Component>", into = "Vec<Component>")]
pub struct ComparisonSet {
    components: Vec<Component>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set by adding each component in turn.
    ///
    /// # Errors
    ///
    /// Fails on the first component [`try_add`](Self::try_add) rejects.
    pub fn from_components(
        components: impl IntoIterator<Item = Component>,
    ) -> Result<Self, SelectionError> {
        components
            .into_iter()
            .try_fold(Self::new(), |set, c| set.try_add(c))
    }

    /// Returns a new set with `component` appended.
    ///
    /// # Errors
    ///
    /// - [`SelectionError::Full`] when the set already holds the maximum.
    /// - [`SelectionError::CategoryMismatch`] when the category differs.
    /// - [`SelectionError::Duplicate`] when the id is already present.
    pub fn try_add(&self, component: Component) -> Result<Self, SelectionError> {
        self.check_add(&component)?;
        let mut components = self.components.clone();
        components.push(component);
        Ok(Self { components })
    }

    /// Whether [`try_add`](Self::try_add) would accept `component`.
    pub fn can_add(&self, component: &Component) -> bool {
        self.check_add(component).is_ok()
    }

    fn check_add(&self, component: &Component) -> Result<(), SelectionError> {
        if self.contains(&component.id) {
            return Err(SelectionError::Duplicate(component.id.to_string()));
        }
        if self.components.len() >= MAX_COMPARED {
            return Err(SelectionError::Full { max: MAX_COMPARED });
        }
        match self.category() {
            Some(expected) if expected != component.category => {
                Err(SelectionError::CategoryMismatch {
                    expected,
                    found: component.category,
                })
            }
            _ => Ok(()),
        }
    }

    /// Returns a new set without the component `id`. Unknown ids are ignored.
    pub fn remove(&self, id: &ComponentId) -> Self {
        Self {
            components: self
                .components
                .iter()
                .filter(|c| c.id != *id)
                .cloned()
                .collect(),
        }
    }

    /// Returns an empty set.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Category shared by every member, `None` when empty.
    pub fn category(&self) -> Option<Category> {
        self.components.first().map(|c| c.category)
    }

    pub fn contains(&self, id: &ComponentId) -> bool {
        self.components.iter().any(|c| c.id == *id)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Whether enough components are selected to compare.
    pub fn is_ready(&self) -> bool {
        self.components.len() >= MIN_COMPARED
    }

    /// Compare the current members.
    pub fn analyze(&self) -> ComparisonAnalysis {
        analyze(&self.components)
    }
}

impl TryFrom<Vec<Component>> for ComparisonSet {
    type Error = SelectionError;

    fn try_from(components: Vec<Component>) -> Result<Self, Self::Error> {
        Self::from_components(components)
    }
}

impl From<ComparisonSet> for Vec<Component> {
    fn from(set: ComparisonSet) -> Self {
        set.components
    }
}
