//! # Comparative Scoring
//!
//! Compares two to four components of one category and produces a
//! [`ComparisonAnalysis`]: per-key value tables with best-value marks,
//! human-readable notes, a per-component score, the overall best pick, and
//! recommendation strings.
//!
//! ## Algorithm
//!
//! 1. Take the union of specification keys, in first-seen order.
//! 2. Collect each component's textual value, `"-"` when absent.
//! 3. If the category ranks the key, parse every value. A `"-"` or a value
//!    with no leading number leaves the key unmarked. Higher-is-better
//!    marks every component at the maximum when the maximum is positive.
//!    Lower-is-better marks every component at the minimum of the strictly
//!    positive values.
//! 4. One mark yields a named note, several yield a shared note.
//! 5. Each mark is worth [`POINTS_PER_BEST`]. Ties all score.
//! 6. The best pick has the highest score. Equal scores fall to the lower
//!    price, then to the smaller id, so the pick never depends on input
//!    order.
//!
//! Analysis is pure: the same input always yields the same output.

use serde::{Deserialize, Serialize};

use rig_core::{parse_leading_number, Component, ComponentId, MISSING_SPEC};

use crate::rules::{rule_for, ComparisonRule, Preference};

/// Fewest components a comparison is defined for.
pub const MIN_COMPARED: usize = 2;
/// Most components a comparison is defined for.
pub const MAX_COMPARED: usize = 4;
/// Score awarded for each key where a component holds the best value.
pub const POINTS_PER_BEST: u32 = 2;
/// Leading keys named in the best-pick recommendation.
const MAX_LEADING_KEYS: usize = 3;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One component's value for one specification key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentValue {
    pub component_id: ComponentId,
    /// Textual value, or `"-"` when the component lacks the key.
    pub raw_value: String,
    pub is_best: bool,
}

/// Comparison of every component on one specification key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecComparison {
    pub specification_key: String,
    /// One entry per compared component, in input order.
    pub values: Vec<ComponentValue>,
    pub notes: Vec<String>,
}

impl SpecComparison {
    /// Ids of the components marked best on this key.
    pub fn best_ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.values
            .iter()
            .filter(|v| v.is_best)
            .map(|v| &v.component_id)
    }
}

/// Accumulated score of one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub component_id: ComponentId,
    pub score: u32,
}

/// Result of comparing a set of components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonAnalysis {
    /// Highest-scoring component; `None` when the input is not comparable.
    pub best_component: Option<Component>,
    pub specifications: Vec<SpecComparison>,
    /// One entry per compared component, in input order.
    pub scores: Vec<ComponentScore>,
    pub recommendations: Vec<String>,
}

impl ComparisonAnalysis {
    pub fn specification(&self, key: &str) -> Option<&SpecComparison> {
        self.specifications
            .iter()
            .find(|s| s.specification_key == key)
    }

    pub fn score_of(&self, id: &ComponentId) -> Option<u32> {
        self.scores
            .iter()
            .find(|s| s.component_id == *id)
            .map(|s| s.score)
    }

    /// Whether `id` is marked best on `key`.
    pub fn is_best(&self, key: &str, id: &ComponentId) -> bool {
        self.specification(key)
            .is_some_and(|s| s.best_ids().any(|best| best == id))
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Whether `components` form a well-defined comparison: two to four
/// components sharing one category.
pub fn is_comparable(components: &[Component]) -> bool {
    (MIN_COMPARED..=MAX_COMPARED).contains(&components.len())
        && components
            .windows(2)
            .all(|pair| pair[0].category == pair[1].category)
}

/// Compare `components` and pick the best one.
///
/// Input that is not comparable (fewer than two, more than four, or mixed
/// categories) yields an empty analysis with no best component.
pub fn analyze(components: &[Component]) -> ComparisonAnalysis {
    let Some(first) = components.first() else {
        return ComparisonAnalysis::default();
    };
    if !is_comparable(components) {
        tracing::warn!(
            count = components.len(),
            "comparison needs {MIN_COMPARED}-{MAX_COMPARED} components of one category; returning empty analysis"
        );
        return ComparisonAnalysis::default();
    }
    let category = first.category;

    let mut scores = vec![0u32; components.len()];
    let mut specifications = Vec::new();

    for key in union_keys(components) {
        let raw: Vec<String> = components
            .iter()
            .map(|c| c.spec_text(&key).unwrap_or_else(|| MISSING_SPEC.to_string()))
            .collect();
        let rule = rule_for(category, &key);
        let marks = rule.map(|r| best_indices(r.preference, &raw)).unwrap_or_default();
        for &i in &marks {
            scores[i] += POINTS_PER_BEST;
        }
        let notes = match rule {
            Some(r) => notes_for(&r, &key, components, &raw, &marks),
            None => Vec::new(),
        };
        let values = components
            .iter()
            .zip(raw)
            .enumerate()
            .map(|(i, (c, raw_value))| ComponentValue {
                component_id: c.id.clone(),
                raw_value,
                is_best: marks.contains(&i),
            })
            .collect();
        specifications.push(SpecComparison {
            specification_key: key,
            values,
            notes,
        });
    }

    let winner = pick_winner(components, &scores);
    let recommendations = winner
        .map(|w| recommendations_for(w, components, &scores, &specifications))
        .unwrap_or_default();

    if let Some(w) = winner {
        tracing::debug!(
            winner = %components[w].id,
            score = scores[w],
            %category,
            "comparison complete"
        );
    }

    ComparisonAnalysis {
        best_component: winner.map(|w| components[w].clone()),
        specifications,
        scores: components
            .iter()
            .zip(&scores)
            .map(|(c, &score)| ComponentScore {
                component_id: c.id.clone(),
                score,
            })
            .collect(),
        recommendations,
    }
}

/// Specification keys across all components, in first-seen order.
fn union_keys(components: &[Component]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for c in components {
        for key in c.specifications.keys() {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.to_string());
            }
        }
    }
    keys
}

/// Indices of the components holding the best value under `preference`.
fn best_indices(preference: Preference, raw: &[String]) -> Vec<usize> {
    if raw.iter().any(|v| v == MISSING_SPEC) {
        return Vec::new();
    }
    let Some(parsed) = raw
        .iter()
        .map(|v| parse_leading_number(v))
        .collect::<Option<Vec<f64>>>()
    else {
        return Vec::new();
    };
    let numbers = parsed.iter().copied();

    let target = match preference {
        Preference::HigherIsBetter => numbers.reduce(f64::max).filter(|max| *max > 0.0),
        Preference::LowerIsBetter => numbers.filter(|v| *v > 0.0).reduce(f64::min),
    };
    let Some(target) = target else {
        return Vec::new();
    };

    parsed
        .iter()
        .enumerate()
        .filter(|(_, v)| **v == target)
        .map(|(i, _)| i)
        .collect()
}

fn notes_for(
    rule: &ComparisonRule,
    key: &str,
    components: &[Component],
    raw: &[String],
    marks: &[usize],
) -> Vec<String> {
    match marks {
        [] => Vec::new(),
        [only] => {
            let value = &raw[*only];
            let unit = match rule.unit {
                Some(unit) if !value.contains(unit) => format!(" {unit}"),
                _ => String::new(),
            };
            vec![format!(
                "{} has the {} {} ({value}{unit})",
                components[*only].short_name(),
                rule.preference.superlative(),
                key,
            )]
        }
        _ => vec![format!("Multiple products share the best {key}")],
    }
}

/// Highest score, then lowest price, then smallest id.
fn pick_winner(components: &[Component], scores: &[u32]) -> Option<usize> {
    (0..components.len()).max_by(|&a, &b| {
        scores[a]
            .cmp(&scores[b])
            .then_with(|| components[b].price.total_cmp(&components[a].price))
            .then_with(|| components[b].id.cmp(&components[a].id))
    })
}

fn recommendations_for(
    winner: usize,
    components: &[Component],
    scores: &[u32],
    specifications: &[SpecComparison],
) -> Vec<String> {
    if scores[winner] == 0 {
        return Vec::new();
    }
    let best = &components[winner];
    let leading: Vec<&str> = specifications
        .iter()
        .filter(|s| s.values[winner].is_best)
        .map(|s| s.specification_key.as_str())
        .take(MAX_LEADING_KEYS)
        .collect();

    let mut recommendations = vec![format!(
        "{} is the best pick, leading in {}",
        best.name,
        leading.join(", ")
    )];

    let strictly_cheapest = components
        .iter()
        .enumerate()
        .all(|(i, c)| i == winner || best.price < c.price);
    if strictly_cheapest {
        recommendations.push(format!(
            "{} also offers the best price-to-performance ratio",
            best.name
        ));
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig_core::Category;

    fn cpu(id: &str, name: &str, price: f64, cores: &str) -> Component {
        Component::new(id, Category::Cpu, name, price).with_spec("Core Count", cores)
    }

    fn psu(id: &str, name: &str, price: f64, wattage: &str) -> Component {
        Component::new(id, Category::PowerSupply, name, price).with_spec("Wattage", wattage)
    }

    #[test]
    fn fewer_than_two_is_empty() {
        assert_eq!(analyze(&[]), ComparisonAnalysis::default());
        let one = analyze(&[cpu("a", "Ryzen 5", 199.0, "6")]);
        assert!(one.best_component.is_none());
        assert!(one.specifications.is_empty());
        assert!(one.recommendations.is_empty());
    }

    #[test]
    fn more_than_four_is_empty() {
        let many: Vec<Component> = (0..5)
            .map(|i| cpu(&format!("c{i}"), "CPU", 100.0, "8"))
            .collect();
        assert!(analyze(&many).best_component.is_none());
    }

    #[test]
    fn mixed_categories_are_empty() {
        let analysis = analyze(&[
            cpu("a", "Ryzen 5", 199.0, "6"),
            psu("b", "Corsair RM850x", 139.0, "850 W"),
        ]);
        assert_eq!(analysis, ComparisonAnalysis::default());
    }

    #[test]
    fn higher_core_count_wins() {
        let a = cpu("a", "Ryzen 9 7950X", 549.0, "16");
        let b = cpu("b", "Core i9-14900K", 589.0, "24");
        let analysis = analyze(&[a, b.clone()]);

        assert!(analysis.is_best("Core Count", &b.id));
        assert!(!analysis.is_best("Core Count", &ComponentId::new("a")));
        assert_eq!(analysis.score_of(&b.id), Some(2));
        assert_eq!(analysis.score_of(&ComponentId::new("a")), Some(0));
        assert_eq!(analysis.best_component.as_ref().map(|c| &c.id), Some(&b.id));
        assert_eq!(
            analysis.specification("Core Count").unwrap().notes,
            vec!["Core has the highest Core Count (24 cores)".to_string()]
        );
    }

    #[test]
    fn tie_marks_all_and_shares_note() {
        let a = psu("a", "Corsair RM650", 89.0, "650 W");
        let b = psu("b", "Seasonic Focus", 99.0, "650 W");
        let analysis = analyze(&[a.clone(), b.clone()]);
        let wattage = analysis.specification("Wattage").unwrap();

        assert!(wattage.values.iter().all(|v| v.is_best));
        assert_eq!(
            wattage.notes,
            vec!["Multiple products share the best Wattage".to_string()]
        );
        assert_eq!(analysis.score_of(&a.id), Some(2));
        assert_eq!(analysis.score_of(&b.id), Some(2));
    }

    #[test]
    fn unit_not_repeated_when_value_contains_it() {
        let analysis = analyze(&[
            psu("a", "Corsair RM850x", 139.0, "850 W"),
            psu("b", "EVGA 650 GQ", 89.0, "650 W"),
        ]);
        assert_eq!(
            analysis.specification("Wattage").unwrap().notes,
            vec!["Corsair has the highest Wattage (850 W)".to_string()]
        );
    }

    #[test]
    fn lower_is_better_ignores_non_positive() {
        let a = cpu("a", "Ryzen 7 7700", 299.0, "8").with_spec("TDP", "0 W");
        let b = cpu("b", "Ryzen 7 7700X", 329.0, "8").with_spec("TDP", "105 W");
        let c = cpu("c", "Ryzen 9 7900", 399.0, "12").with_spec("TDP", "65 W");
        let analysis = analyze(&[a, b, c.clone()]);
        let tdp = analysis.specification("TDP").unwrap();
        let best: Vec<&ComponentId> = tdp.best_ids().collect();
        assert_eq!(best, vec![&c.id]);
        assert_eq!(tdp.notes, vec!["Ryzen has the lowest TDP (65 W)".to_string()]);
    }

    #[test]
    fn all_non_positive_marks_nobody() {
        let analysis = analyze(&[cpu("a", "A", 1.0, "0"), cpu("b", "B", 2.0, "0")]);
        let cores = analysis.specification("Core Count").unwrap();
        assert_eq!(cores.best_ids().count(), 0);
        assert!(cores.notes.is_empty());
    }

    #[test]
    fn missing_value_blocks_marking() {
        let a = cpu("a", "Ryzen 9", 549.0, "16").with_spec("L3 Cache", "64 MB");
        let b = cpu("b", "Core i9", 589.0, "24");
        let analysis = analyze(&[a, b]);
        let cache = analysis.specification("L3 Cache").unwrap();
        assert_eq!(cache.values[1].raw_value, "-");
        assert_eq!(cache.best_ids().count(), 0);
        assert!(cache.notes.is_empty());
    }

    #[test]
    fn unranked_key_is_shown_but_not_marked() {
        let a = cpu("a", "Ryzen 9", 549.0, "16").with_spec("Socket", "AM5");
        let b = cpu("b", "Core i9", 589.0, "24").with_spec("Socket", "LGA1700");
        let analysis = analyze(&[a, b]);
        let socket = analysis.specification("Socket").unwrap();
        assert_eq!(socket.values[0].raw_value, "AM5");
        assert_eq!(socket.best_ids().count(), 0);
    }

    #[test]
    fn keys_follow_first_seen_order() {
        let a = cpu("a", "A", 1.0, "4").with_spec("Socket", "AM5");
        let b = Component::new("b", Category::Cpu, "B", 2.0)
            .with_spec("TDP", "65 W")
            .with_spec("Core Count", "6");
        let keys: Vec<String> = analyze(&[a, b])
            .specifications
            .into_iter()
            .map(|s| s.specification_key)
            .collect();
        assert_eq!(keys, vec!["Core Count", "Socket", "TDP"]);
    }

    #[test]
    fn unparsable_value_blocks_marking() {
        let analysis = analyze(&[cpu("a", "A", 1.0, "N/A"), cpu("b", "B", 2.0, "8")]);
        let cores = analysis.specification("Core Count").unwrap();
        assert_eq!(cores.best_ids().count(), 0);
        assert!(cores.notes.is_empty());
        assert_eq!(analysis.score_of(&ComponentId::new("b")), Some(0));
    }

    #[test]
    fn unparsable_value_blocks_lower_is_better_too() {
        let a = cpu("a", "A", 1.0, "8").with_spec("TDP", "unknown");
        let b = cpu("b", "B", 2.0, "8").with_spec("TDP", "65 W");
        let analysis = analyze(&[a, b]);
        assert_eq!(analysis.specification("TDP").unwrap().best_ids().count(), 0);
    }

    #[test]
    fn zero_score_has_no_recommendations_but_nominal_winner() {
        let analysis = analyze(&[cpu("a", "A", 300.0, "8"), cpu("b", "B", 200.0, "8")]
            .map(|c| c.with_spec("Core Count", "n/a")));
        assert!(analysis.recommendations.is_empty());
        // Equal scores fall to the lower price.
        assert_eq!(analysis.best_component.map(|c| c.id), Some(ComponentId::new("b")));
    }

    #[test]
    fn tie_break_prefers_lower_price_then_smaller_id() {
        let a = psu("z", "Zeta", 100.0, "650 W");
        let b = psu("y", "Yotta", 100.0, "650 W");
        let c = psu("x", "Xeno", 120.0, "650 W");
        let analysis = analyze(&[a, b, c]);
        assert_eq!(analysis.best_component.map(|c| c.id), Some(ComponentId::new("y")));
    }

    #[test]
    fn recommendations_name_up_to_three_leading_keys() {
        let strong = Component::new("s", Category::Cpu, "Ryzen 9 7950X3D", 699.0)
            .with_spec("Core Count", "16")
            .with_spec("Thread Count", "32")
            .with_spec("Boost Clock", "5.7 GHz")
            .with_spec("L3 Cache", "128 MB");
        let weak = Component::new("w", Category::Cpu, "Ryzen 5 7600", 229.0)
            .with_spec("Core Count", "6")
            .with_spec("Thread Count", "12")
            .with_spec("Boost Clock", "5.1 GHz")
            .with_spec("L3 Cache", "32 MB");
        let analysis = analyze(&[weak, strong]);
        assert_eq!(analysis.score_of(&ComponentId::new("s")), Some(8));
        assert_eq!(
            analysis.recommendations,
            vec!["Ryzen 9 7950X3D is the best pick, leading in Core Count, Thread Count, Boost Clock"
                .to_string()]
        );
    }

    #[test]
    fn cheapest_winner_gets_value_recommendation() {
        let analysis = analyze(&[
            cpu("a", "Core i9-14900K", 589.0, "24"),
            cpu("b", "Ryzen 9 7950X", 549.0, "16"),
            cpu("c", "Ryzen 9 7900", 399.0, "32"),
        ]);
        assert_eq!(analysis.recommendations.len(), 2);
        assert_eq!(
            analysis.recommendations[1],
            "Ryzen 9 7900 also offers the best price-to-performance ratio"
        );
    }

    #[test]
    fn price_tie_is_not_strictly_cheapest() {
        let analysis = analyze(&[cpu("a", "A", 300.0, "24"), cpu("b", "B", 300.0, "16")]);
        assert_eq!(analysis.recommendations.len(), 1);
    }

    #[test]
    fn analysis_is_deterministic() {
        let input = [
            cpu("a", "Ryzen 9 7950X", 549.0, "16").with_spec("TDP", "170 W"),
            cpu("b", "Core i9-14900K", 589.0, "24").with_spec("TDP", "125 W"),
        ];
        assert_eq!(analyze(&input), analyze(&input));
    }
}
