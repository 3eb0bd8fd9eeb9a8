//! # Component Categories and Build Slots
//!
//! Defines the `Category` enum, the single source of truth for hardware
//! categories, and the `BuildSlot` enum naming the positions of a build.
//! The mapping between the two is one-to-one and exhaustive: adding a
//! category without a slot (or the reverse) is a compile error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Hardware component categories known to the catalog.
///
/// | # | Category | Slot |
/// |---|----------|------|
/// | 1 | Cpu | cpu |
/// | 2 | Gpu | gpu |
/// | 3 | Motherboard | motherboard |
/// | 4 | Memory | memory |
/// | 5 | Cooler | cooler |
/// | 6 | Storage | storage |
/// | 7 | PowerSupply | power_supply |
/// | 8 | Case | case |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Central processing unit.
    Cpu,
    /// Discrete graphics card.
    Gpu,
    /// Motherboard.
    Motherboard,
    /// System memory kit.
    Memory,
    /// CPU cooler.
    Cooler,
    /// SSD or HDD.
    Storage,
    /// Power supply unit.
    PowerSupply,
    /// Chassis.
    Case,
}

/// Total number of component categories.
pub const CATEGORY_COUNT: usize = 8;

impl Category {
    /// Returns all categories in canonical build order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Cpu,
            Self::Gpu,
            Self::Motherboard,
            Self::Memory,
            Self::Cooler,
            Self::Storage,
            Self::PowerSupply,
            Self::Case,
        ]
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Gpu => "gpu",
            Self::Motherboard => "motherboard",
            Self::Memory => "memory",
            Self::Cooler => "cooler",
            Self::Storage => "storage",
            Self::PowerSupply => "power_supply",
            Self::Case => "case",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Gpu => "Graphics Card",
            Self::Motherboard => "Motherboard",
            Self::Memory => "Memory",
            Self::Cooler => "CPU Cooler",
            Self::Storage => "Storage",
            Self::PowerSupply => "Power Supply",
            Self::Case => "Case",
        }
    }

    /// The build slot a component of this category occupies.
    pub fn slot(&self) -> BuildSlot {
        match self {
            Self::Cpu => BuildSlot::Cpu,
            Self::Gpu => BuildSlot::Gpu,
            Self::Motherboard => BuildSlot::Motherboard,
            Self::Memory => BuildSlot::Memory,
            Self::Cooler => BuildSlot::Cooler,
            Self::Storage => BuildSlot::Storage,
            Self::PowerSupply => BuildSlot::PowerSupply,
            Self::Case => BuildSlot::Case,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RigError;

    /// Parse a category from its snake_case identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| RigError::UnknownCategory(s.to_string()))
    }
}

/// A named position in a build. Each slot holds at most one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildSlot {
    Cpu,
    Gpu,
    Motherboard,
    Memory,
    Cooler,
    Storage,
    PowerSupply,
    Case,
}

impl BuildSlot {
    /// Returns all slots in canonical build order.
    pub fn all() -> &'static [BuildSlot] {
        &[
            Self::Cpu,
            Self::Gpu,
            Self::Motherboard,
            Self::Memory,
            Self::Cooler,
            Self::Storage,
            Self::PowerSupply,
            Self::Case,
        ]
    }

    /// The only category allowed in this slot.
    pub fn category(&self) -> Category {
        match self {
            Self::Cpu => Category::Cpu,
            Self::Gpu => Category::Gpu,
            Self::Motherboard => Category::Motherboard,
            Self::Memory => Category::Memory,
            Self::Cooler => Category::Cooler,
            Self::Storage => Category::Storage,
            Self::PowerSupply => Category::PowerSupply,
            Self::Case => Category::Case,
        }
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        self.category().as_str()
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        self.category().label()
    }
}

impl fmt::Display for BuildSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildSlot {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| RigError::UnknownSlot(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_categories_count() {
        assert_eq!(Category::all().len(), CATEGORY_COUNT);
        assert_eq!(BuildSlot::all().len(), CATEGORY_COUNT);
    }

    #[test]
    fn category_slot_mapping_is_one_to_one() {
        for category in Category::all() {
            assert_eq!(category.slot().category(), *category);
        }
        for slot in BuildSlot::all() {
            assert_eq!(slot.category().slot(), *slot);
        }
    }

    #[test]
    fn as_str_roundtrip() {
        for category in Category::all() {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, *category);
        }
        for slot in BuildSlot::all() {
            let parsed: BuildSlot = slot.as_str().parse().unwrap();
            assert_eq!(parsed, *slot);
        }
    }

    #[test]
    fn from_str_is_case_sensitive() {
        assert!("CPU".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
        assert_eq!(
            "psu".parse::<BuildSlot>(),
            Err(RigError::UnknownSlot("psu".into()))
        );
    }

    #[test]
    fn serde_format_matches_as_str() {
        for category in Category::all() {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn labels_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for category in Category::all() {
            assert!(seen.insert(category.label()), "duplicate label {}", category.label());
        }
    }
}
