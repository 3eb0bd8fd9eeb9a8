//! # Catalog Components
//!
//! The read-only component record supplied by the catalog, together with
//! its identifier newtype, stock status and specification map.
//!
//! Specifications keep the order in which the catalog declares them. The
//! comparison engine walks keys in first-seen order, so the map is backed
//! by a vector of pairs rather than a hash map.

use std::fmt;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::category::Category;
use crate::error::RigError;
use crate::keys;
use crate::spec_value::parse_leading_number;

// ---------------------------------------------------------------------------
// ComponentId
// ---------------------------------------------------------------------------

/// Catalog-unique component identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ComponentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ---------------------------------------------------------------------------
// StockStatus
// ---------------------------------------------------------------------------

/// Availability of a catalog component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[default]
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::LowStock => "low_stock",
            Self::OutOfStock => "out_of_stock",
        }
    }

    /// Whether the component can currently be bought.
    pub fn is_available(&self) -> bool {
        !matches!(self, Self::OutOfStock)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_stock" => Ok(Self::InStock),
            "low_stock" => Ok(Self::LowStock),
            "out_of_stock" => Ok(Self::OutOfStock),
            other => Err(RigError::UnknownStockStatus(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SpecValue
// ---------------------------------------------------------------------------

/// A single specification value as the catalog declares it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SpecValue {
    /// The value as a string slice, only when it is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Bool(_) | Self::Number(_) => None,
        }
    }

    /// Leading numeric magnitude of the textual form.
    ///
    /// Booleans never carry a magnitude.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Self::Text(s) => parse_leading_number(s),
            Self::Number(n) => parse_leading_number(&n.to_string()),
            Self::Bool(_) => None,
        }
    }
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for SpecValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SpecValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for SpecValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for SpecValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

// ---------------------------------------------------------------------------
// Specifications
// ---------------------------------------------------------------------------

/// Insertion-ordered specification map.
///
/// Re-inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Specifications {
    entries: Vec<(String, SpecValue)>,
}

impl Specifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, keeping its original position if it already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SpecValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&SpecValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpecValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Specifications
where
    K: Into<String>,
    V: Into<SpecValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut specs = Self::new();
        for (k, v) in iter {
            specs.insert(k, v);
        }
        specs
    }
}

impl Serialize for Specifications {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Specifications {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecificationsVisitor;

        impl<'de> Visitor<'de> for SpecificationsVisitor {
            type Value = Specifications;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of specification keys to string, number or boolean values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut specs = Specifications::new();
                while let Some((key, value)) = access.next_entry::<String, SpecValue>()? {
                    specs.insert(key, value);
                }
                Ok(specs)
            }
        }

        deserializer.deserialize_map(SpecificationsVisitor)
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// A catalog component. Read-only from the engine's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub category: Category,
    pub name: String,
    /// Non-negative price in the catalog's currency unit.
    pub price: f64,
    #[serde(default)]
    pub specifications: Specifications,
    #[serde(default)]
    pub stock_status: StockStatus,
}

impl Component {
    /// Create an in-stock component with no specifications.
    pub fn new(
        id: impl Into<ComponentId>,
        category: Category,
        name: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            name: name.into(),
            price,
            specifications: Specifications::new(),
            stock_status: StockStatus::InStock,
        }
    }

    /// Builder-style specification setter.
    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<SpecValue>) -> Self {
        self.specifications.insert(key, value);
        self
    }

    /// Builder-style stock status setter.
    pub fn with_stock_status(mut self, status: StockStatus) -> Self {
        self.stock_status = status;
        self
    }

    pub fn spec(&self, key: &str) -> Option<&SpecValue> {
        self.specifications.get(key)
    }

    /// Textual form of a specification, whatever its underlying type.
    pub fn spec_text(&self, key: &str) -> Option<String> {
        self.spec(key).map(ToString::to_string)
    }

    /// Leading numeric magnitude of a specification, if any.
    pub fn spec_number(&self, key: &str) -> Option<f64> {
        self.spec(key).and_then(SpecValue::numeric)
    }

    /// The `Manufacturer` specification in textual form.
    pub fn manufacturer(&self) -> Option<String> {
        self.spec_text(keys::MANUFACTURER)
    }

    /// First whitespace-delimited token of the name, falling back to the id.
    pub fn short_name(&self) -> &str {
        self.name
            .split_whitespace()
            .next()
            .unwrap_or_else(|| self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ryzen() -> Component {
        Component::new("cpu-7950x", Category::Cpu, "Ryzen 9 7950X", 549.0)
            .with_spec("Manufacturer", "AMD")
            .with_spec("Socket", "AM5")
            .with_spec("Core Count", 16.0)
            .with_spec("TDP", "170 W")
    }

    #[test]
    fn short_name_is_first_token() {
        assert_eq!(ryzen().short_name(), "Ryzen");
    }

    #[test]
    fn short_name_falls_back_to_id() {
        let c = Component::new("gpu-x", Category::Gpu, "   ", 1.0);
        assert_eq!(c.short_name(), "gpu-x");
    }

    #[test]
    fn spec_accessors() {
        let c = ryzen();
        assert_eq!(c.spec_text("Socket").as_deref(), Some("AM5"));
        assert_eq!(c.spec_text("Core Count").as_deref(), Some("16"));
        assert_eq!(c.spec_number("TDP"), Some(170.0));
        assert_eq!(c.spec_number("Socket"), None);
        assert_eq!(c.manufacturer().as_deref(), Some("AMD"));
        assert!(c.spec("Missing").is_none());
    }

    #[test]
    fn bool_spec_has_no_magnitude() {
        let v = SpecValue::Bool(true);
        assert_eq!(v.numeric(), None);
        assert_eq!(v.to_string(), "true");
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut specs = Specifications::new();
        specs.insert("A", "1");
        specs.insert("B", "2");
        specs.insert("A", "3");
        let keys: Vec<&str> = specs.keys().collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(specs.get("A"), Some(&SpecValue::from("3")));
        assert_eq!(specs.len(), 2);
    }

    #[test]
    fn specifications_preserve_declaration_order_through_yaml() {
        let yaml = "Zeta: 1\nAlpha: two\nMid: true\n";
        let specs: Specifications = serde_yaml::from_str(yaml).unwrap();
        let keys: Vec<&str> = specs.keys().collect();
        assert_eq!(keys, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(specs.get("Zeta"), Some(&SpecValue::Number(1.0)));
        assert_eq!(specs.get("Mid"), Some(&SpecValue::Bool(true)));
    }

    #[test]
    fn component_deserializes_with_defaults() {
        let json = r#"{"id":"c1","category":"case","name":"Lancool 216","price":99.99}"#;
        let c: Component = serde_json::from_str(json).unwrap();
        assert_eq!(c.stock_status, StockStatus::InStock);
        assert!(c.specifications.is_empty());
        assert_eq!(c.category, Category::Case);
    }

    #[test]
    fn stock_status_parse_and_availability() {
        assert_eq!("low_stock".parse::<StockStatus>(), Ok(StockStatus::LowStock));
        assert!("sold".parse::<StockStatus>().is_err());
        assert!(StockStatus::LowStock.is_available());
        assert!(!StockStatus::OutOfStock.is_available());
    }
}
