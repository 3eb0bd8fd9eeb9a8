//! # Comparison Rule Table
//!
//! Static, per-category policy declaring which specification keys are
//! ranked during comparison and in which direction. Keys absent from a
//! category's table are still displayed but never marked best.
//!
//! The table is selected by an exhaustive `match` on [`Category`]; adding
//! a category is a compile error here until its table is declared. Case
//! has no table because its specifications are fit constraints rather
//! than merits.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use rig_core::Category;

/// Direction in which a specification improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    HigherIsBetter,
    LowerIsBetter,
}

impl Preference {
    /// Superlative used in comparison notes.
    pub fn superlative(&self) -> &'static str {
        match self {
            Self::HigherIsBetter => "highest",
            Self::LowerIsBetter => "lowest",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HigherIsBetter => f.write_str("higher_is_better"),
            Self::LowerIsBetter => f.write_str("lower_is_better"),
        }
    }
}

/// How one specification key of one category is ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonRule {
    pub category: Category,
    pub specification_key: &'static str,
    pub preference: Preference,
    /// Unit label appended to values in notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
}

type RuleRow = (&'static str, Preference, Option<&'static str>);

use self::Preference::{HigherIsBetter as Higher, LowerIsBetter as Lower};

const CPU_RULES: &[RuleRow] = &[
    ("Core Count", Higher, Some("cores")),
    ("Thread Count", Higher, Some("threads")),
    ("Base Clock", Higher, Some("GHz")),
    ("Boost Clock", Higher, Some("GHz")),
    ("L3 Cache", Higher, Some("MB")),
    ("TDP", Lower, Some("W")),
];

const GPU_RULES: &[RuleRow] = &[
    ("VRAM", Higher, Some("GB")),
    ("Base Clock", Higher, Some("MHz")),
    ("Boost Clock", Higher, Some("MHz")),
    ("Memory Bus", Higher, Some("bit")),
    ("TDP", Lower, Some("W")),
    ("Length", Lower, Some("mm")),
];

const MOTHERBOARD_RULES: &[RuleRow] = &[
    ("Memory Slots", Higher, None),
    ("Max Memory", Higher, Some("GB")),
    ("M.2 Slots", Higher, None),
    ("USB Ports", Higher, None),
];

const MEMORY_RULES: &[RuleRow] = &[
    ("Capacity", Higher, Some("GB")),
    ("Speed", Higher, Some("MHz")),
    ("CAS Latency", Lower, None),
];

const COOLER_RULES: &[RuleRow] = &[
    ("Fan RPM", Higher, Some("RPM")),
    ("Noise Level", Lower, Some("dBA")),
    ("Height", Lower, Some("mm")),
];

const STORAGE_RULES: &[RuleRow] = &[
    ("Capacity", Higher, Some("GB")),
    ("Read Speed", Higher, Some("MB/s")),
    ("Write Speed", Higher, Some("MB/s")),
];

const POWER_SUPPLY_RULES: &[RuleRow] = &[
    ("Wattage", Higher, Some("W")),
    ("Warranty", Higher, Some("years")),
];

fn table(category: Category) -> &'static [RuleRow] {
    match category {
        Category::Cpu => CPU_RULES,
        Category::Gpu => GPU_RULES,
        Category::Motherboard => MOTHERBOARD_RULES,
        Category::Memory => MEMORY_RULES,
        Category::Cooler => COOLER_RULES,
        Category::Storage => STORAGE_RULES,
        Category::PowerSupply => POWER_SUPPLY_RULES,
        Category::Case => &[],
    }
}

fn to_rule(category: Category, row: &RuleRow) -> ComparisonRule {
    let (specification_key, preference, unit) = *row;
    ComparisonRule {
        category,
        specification_key,
        preference,
        unit,
    }
}

/// All rules of `category`, keyed by specification key.
///
/// Categories without a table yield an empty map.
pub fn rules_for(category: Category) -> BTreeMap<&'static str, ComparisonRule> {
    table(category)
        .iter()
        .map(|row| (row.0, to_rule(category, row)))
        .collect()
}

/// The rule for one specification key, if the category ranks it.
pub fn rule_for(category: Category, key: &str) -> Option<ComparisonRule> {
    table(category)
        .iter()
        .find(|row| row.0 == key)
        .map(|row| to_rule(category, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_core_count_is_higher_is_better() {
        let rule = rule_for(Category::Cpu, "Core Count").unwrap();
        assert_eq!(rule.preference, Preference::HigherIsBetter);
        assert_eq!(rule.category, Category::Cpu);
        assert_eq!(rule.unit, Some("cores"));
    }

    #[test]
    fn tdp_is_lower_is_better() {
        for category in [Category::Cpu, Category::Gpu] {
            assert_eq!(
                rule_for(category, "TDP").map(|r| r.preference),
                Some(Preference::LowerIsBetter)
            );
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(rule_for(Category::Cpu, "core count").is_none());
    }

    #[test]
    fn case_has_no_rules() {
        assert!(rules_for(Category::Case).is_empty());
        assert!(rule_for(Category::Case, "Max GPU Length").is_none());
    }

    #[test]
    fn rules_for_matches_rule_for() {
        for &category in Category::all() {
            for (key, rule) in rules_for(category) {
                assert_eq!(rule_for(category, key), Some(rule));
                assert_eq!(rule.specification_key, key);
            }
        }
    }

    #[test]
    fn tables_have_no_duplicate_keys() {
        for &category in Category::all() {
            assert_eq!(rules_for(category).len(), table(category).len(), "{category}");
        }
    }

    #[test]
    fn superlatives() {
        assert_eq!(Preference::HigherIsBetter.superlative(), "highest");
        assert_eq!(Preference::LowerIsBetter.superlative(), "lowest");
    }
}
