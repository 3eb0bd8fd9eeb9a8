//! # Filter & Search
//!
//! Predicate filtering of catalog components and the optional sort step
//! applied afterwards.
//!
//! Every criterion is optional and all active criteria are ANDed. The
//! filter preserves input order; sorting is a separate, stable step so
//! equal keys keep their filtered order.
//!
//! Socket and memory-type criteria only constrain the categories they make
//! sense for. A socket filter never hides a GPU.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use rig_core::{keys, Category, Component};

/// Optional constraints on catalog components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Inclusive lower price bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Accepted `Manufacturer` values. Empty accepts every manufacturer.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub manufacturers: BTreeSet<String>,
    /// Required `Socket`, applied to CPUs and motherboards only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,
    /// Required memory generation, applied to memory and motherboards only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<String>,
    /// Case-insensitive substring of the component name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Hide out-of-stock components.
    #[serde(default)]
    pub in_stock_only: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no criterion is active.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `component` satisfies every active criterion.
    pub fn matches(&self, component: &Component) -> bool {
        self.category.map_or(true, |c| component.category == c)
            && self.min_price.map_or(true, |min| component.price >= min)
            && self.max_price.map_or(true, |max| component.price <= max)
            && self.matches_manufacturer(component)
            && self.matches_socket(component)
            && self.matches_memory_type(component)
            && self.matches_query(component)
            && (!self.in_stock_only || component.stock_status.is_available())
    }

    fn matches_manufacturer(&self, component: &Component) -> bool {
        if self.manufacturers.is_empty() {
            return true;
        }
        component
            .manufacturer()
            .is_some_and(|m| self.manufacturers.contains(&m))
    }

    fn matches_socket(&self, component: &Component) -> bool {
        let Some(socket) = &self.socket else {
            return true;
        };
        match component.category {
            Category::Cpu | Category::Motherboard => {
                component.spec_text(keys::SOCKET).as_deref() == Some(socket.as_str())
            }
            _ => true,
        }
    }

    fn matches_memory_type(&self, component: &Component) -> bool {
        let Some(memory_type) = &self.memory_type else {
            return true;
        };
        let key = match component.category {
            Category::Memory => keys::MEMORY_TYPE,
            Category::Motherboard => keys::MOTHERBOARD_MEMORY_TYPE,
            _ => return true,
        };
        component.spec_text(key).as_deref() == Some(memory_type.as_str())
    }

    fn matches_query(&self, component: &Component) -> bool {
        let Some(query) = &self.query else {
            return true;
        };
        component
            .name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Components satisfying `criteria`, in input order.
pub fn filter(components: &[Component], criteria: &FilterCriteria) -> Vec<Component> {
    let matched: Vec<Component> = components
        .iter()
        .filter(|c| criteria.matches(c))
        .cloned()
        .collect();
    tracing::trace!(
        total = components.len(),
        matched = matched.len(),
        "filtered catalog"
    );
    matched
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Keep catalog order.
    #[default]
    Unsorted,
    PriceAscending,
    PriceDescending,
    /// Case-insensitive name order.
    NameAscending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unsorted => "unsorted",
            Self::PriceAscending => "price_ascending",
            Self::PriceDescending => "price_descending",
            Self::NameAscending => "name_ascending",
        }
    }

    fn compare(&self, a: &Component, b: &Component) -> Ordering {
        match self {
            Self::Unsorted => Ordering::Equal,
            Self::PriceAscending => a.price.total_cmp(&b.price),
            Self::PriceDescending => b.price.total_cmp(&a.price),
            Self::NameAscending => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unsorted" => Ok(Self::Unsorted),
            "price_ascending" | "price-asc" => Ok(Self::PriceAscending),
            "price_descending" | "price-desc" => Ok(Self::PriceDescending),
            "name_ascending" | "name" => Ok(Self::NameAscending),
            other => Err(format!("unknown sort order: {other:?}")),
        }
    }
}

/// Stable in-place sort.
pub fn sort(components: &mut [Component], order: SortOrder) {
    if order != SortOrder::Unsorted {
        components.sort_by(|a, b| order.compare(a, b));
    }
}

/// Filter, then sort.
pub fn search(components: &[Component], criteria: &FilterCriteria, order: SortOrder) -> Vec<Component> {
    let mut matched = filter(components, criteria);
    sort(&mut matched, order);
    matched
}

// ---------------------------------------------------------------------------
// Facets
// ---------------------------------------------------------------------------

/// Distinct manufacturers, sorted.
pub fn manufacturers(components: &[Component]) -> Vec<String> {
    components
        .iter()
        .filter_map(Component::manufacturer)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Lowest and highest price, `None` for an empty list.
pub fn price_bounds(components: &[Component]) -> Option<(f64, f64)> {
    components.iter().map(|c| c.price).fold(None, |bounds, p| match bounds {
        None => Some((p, p)),
        Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
    })
}
