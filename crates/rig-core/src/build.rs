//! # Build-State Snapshots
//!
//! A `BuildState` maps each [`BuildSlot`] to at most one component of the
//! slot's category. Snapshots are immutable values: every mutation returns
//! a new snapshot, so an evaluator holding a borrow can never observe a
//! slot changing underneath it.
//!
//! ## Invariant
//!
//! A slot holds nothing or exactly one component whose category matches
//! the slot. Deserialization enforces the same invariant through
//! `TryFrom`, so a malformed build file cannot produce a snapshot that
//! violates it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::BuildSlot;
use crate::component::Component;
use crate::error::RigError;

/// An immutable snapshot of a build's slot assignments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<BuildSlot, Component>", into = "BTreeMap<BuildSlot, Component>")]
pub struct BuildState {
    slots: BTreeMap<BuildSlot, Component>,
}

impl BuildState {
    /// An empty build.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from components, each placed in its category's slot.
    ///
    /// Later components replace earlier ones of the same category.
    pub fn from_components(components: impl IntoIterator<Item = Component>) -> Self {
        components
            .into_iter()
            .fold(Self::new(), |state, c| state.with_component(c))
    }

    /// Returns a new snapshot with `component` in the slot of its category.
    pub fn with_component(&self, component: Component) -> Self {
        let mut slots = self.slots.clone();
        slots.insert(component.category.slot(), component);
        Self { slots }
    }

    /// Returns a new snapshot with `component` placed in an explicit slot.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::SlotMismatch`] if the component's category does
    /// not belong in `slot`.
    pub fn with_component_in(&self, slot: BuildSlot, component: Component) -> Result<Self, RigError> {
        if slot.category() != component.category {
            return Err(RigError::SlotMismatch {
                slot,
                category: component.category,
                component_id: component.id.to_string(),
            });
        }
        Ok(self.with_component(component))
    }

    /// Returns a new snapshot with `slot` emptied.
    pub fn without(&self, slot: BuildSlot) -> Self {
        let mut slots = self.slots.clone();
        slots.remove(&slot);
        Self { slots }
    }

    /// Returns an empty snapshot.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    pub fn get(&self, slot: BuildSlot) -> Option<&Component> {
        self.slots.get(&slot)
    }

    /// Occupied slots in canonical build order.
    pub fn occupied(&self) -> impl Iterator<Item = (BuildSlot, &Component)> {
        self.slots.iter().map(|(slot, c)| (*slot, c))
    }

    /// Empty slots in canonical build order.
    pub fn missing_slots(&self) -> Vec<BuildSlot> {
        BuildSlot::all()
            .iter()
            .copied()
            .filter(|slot| !self.slots.contains_key(slot))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether every slot is occupied.
    pub fn is_complete(&self) -> bool {
        self.slots.len() == BuildSlot::all().len()
    }
}

impl TryFrom<BTreeMap<BuildSlot, Component>> for BuildState {
    type Error = RigError;

    fn try_from(slots: BTreeMap<BuildSlot, Component>) -> Result<Self, Self::Error> {
        if let Some((slot, c)) = slots.iter().find(|(slot, c)| slot.category() != c.category) {
            return Err(RigError::SlotMismatch {
                slot: *slot,
                category: c.category,
                component_id: c.id.to_string(),
            });
        }
        Ok(Self { slots })
    }
}

impl From<BuildState> for BTreeMap<BuildSlot, Component> {
    fn from(state: BuildState) -> Self {
        state.slots
    }
}
