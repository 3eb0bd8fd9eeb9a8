//! # Catalog & Build File Loading
//!
//! Reads component catalogs and saved builds from YAML or JSON.
//!
//! ```yaml
//! components:
//!   - id: cpu-7800x3d
//!     category: cpu
//!     name: AMD Ryzen 7 7800X3D
//!     price: 449.0
//!     specifications:
//!       Socket: AM5
//!       TDP: 120 W
//! ```
//!
//! A build file names the catalog id chosen for each slot:
//!
//! ```yaml
//! name: Gaming rig
//! slots:
//!   cpu: cpu-7800x3d
//!   motherboard: mb-b650
//! ```
//!
//! Files ending in `.json` are parsed as JSON; everything else as YAML.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use rig_core::{BuildSlot, BuildState, Category, Component, ComponentId};

use crate::error::{CatalogError, CatalogResult};

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

fn read(path: &Path) -> CatalogResult<String> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    components: Vec<Component>,
}

/// Validated set of components available for selection.
///
/// Ids are unique and every price is finite and non-negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    components: Vec<Component>,
}

impl Catalog {
    /// Validate and wrap `components`, keeping their order.
    pub fn new(components: Vec<Component>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(components.len());
        for component in &components {
            if !seen.insert(component.id.as_str()) {
                return Err(CatalogError::DuplicateId(component.id.to_string()));
            }
            if !component.price.is_finite() || component.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: component.id.to_string(),
                    price: component.price,
                });
            }
        }
        Ok(Self { components })
    }

    pub fn from_yaml_str(s: &str) -> CatalogResult<Self> {
        let doc: CatalogDocument = serde_yaml::from_str(s)?;
        Self::new(doc.components)
    }

    pub fn from_json_str(s: &str) -> CatalogResult<Self> {
        let doc: CatalogDocument = serde_json::from_str(s)?;
        Self::new(doc.components)
    }

    /// Load a catalog file, choosing the format by extension.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let text = read(path)?;
        let catalog = if is_json(path) {
            Self::from_json_str(&text)?
        } else {
            Self::from_yaml_str(&text)?
        };
        tracing::debug!(path = %path.display(), components = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id.as_str() == id)
    }

    /// Like [`Catalog::get`], but an unknown id is an error.
    pub fn require(&self, id: &str) -> CatalogResult<&Component> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownComponent(id.to_string()))
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.category == category)
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
}

// ---------------------------------------------------------------------------
// Build files
// ---------------------------------------------------------------------------

/// A saved build: one catalog id per occupied slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub slots: BTreeMap<BuildSlot, ComponentId>,
}

impl BuildFile {
    pub fn from_yaml_str(s: &str) -> CatalogResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> CatalogResult<Self> {
        let text = read(path)?;
        if is_json(path) {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }

    /// Look every slot up in `catalog` and assemble the build.
    pub fn resolve(&self, catalog: &Catalog) -> CatalogResult<BuildState> {
        self.slots.iter().try_fold(BuildState::new(), |build, (&slot, id)| {
            let component = catalog.require(id.as_str())?;
            Ok(build.with_component_in(slot, component.clone())?)
        })
    }
}
