//! # Build Summary
//!
//! Bundles every derived view of a snapshot into one report: compatibility
//! findings, aggregate metrics, empty slots, and the power-supply headroom
//! check. The headroom check is reported separately and never adds to the
//! compatibility findings.

use serde::{Deserialize, Serialize};

use rig_core::{keys, BuildSlot, BuildState};

use crate::compatibility::{evaluate, has_errors, CompatibilityIssue};
use crate::metrics::{power_estimate, total_price, PowerEstimate};

/// Rated power-supply capacity against the estimated draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerHeadroom {
    /// Leading number of the power supply's `Wattage` specification.
    pub capacity: f64,
    /// The build's estimated wattage.
    pub required: u32,
    pub sufficient: bool,
}

/// Everything derived from one build snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSummary {
    pub total_price: f64,
    pub power: PowerEstimate,
    pub issues: Vec<CompatibilityIssue>,
    pub missing_slots: Vec<BuildSlot>,
    /// Present only when a power supply with a parsable wattage is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_supply: Option<PowerHeadroom>,
}

impl BuildSummary {
    /// Whether any compatibility finding is an error.
    pub fn has_errors(&self) -> bool {
        has_errors(&self.issues)
    }

    pub fn estimated_wattage(&self) -> u32 {
        self.power.recommended
    }
}

/// Derive the full summary of `build`.
pub fn summarize(build: &BuildState) -> BuildSummary {
    let power = power_estimate(build);
    let power_supply = power_headroom(build, power.recommended);
    if let Some(headroom) = power_supply.filter(|h| !h.sufficient) {
        tracing::debug!(
            capacity = headroom.capacity,
            required = headroom.required,
            "power supply below estimated draw"
        );
    }
    BuildSummary {
        total_price: total_price(build),
        power,
        issues: evaluate(build),
        missing_slots: build.missing_slots(),
        power_supply,
    }
}

fn power_headroom(build: &BuildState, required: u32) -> Option<PowerHeadroom> {
    let capacity = build
        .get(BuildSlot::PowerSupply)?
        .spec_number(keys::WATTAGE)?;
    Some(PowerHeadroom {
        capacity,
        required,
        sufficient: capacity >= f64::from(required),
    })
}
