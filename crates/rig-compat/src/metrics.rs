//! # Aggregate Build Metrics
//!
//! Total price and estimated power draw of a build snapshot.
//!
//! ## Power Estimate
//!
//! ```text
//! estimate = ceil((cpu_tdp + gpu_tdp + OVERHEAD_WATTS) × 1.20)
//! ```
//!
//! Each TDP is the leading number of the component's `TDP` specification.
//! When the slot is empty, the field is absent, or the value does not
//! parse, the category default is substituted silently. Estimates beyond
//! `u32::MAX` watts are clamped to `u32::MAX`.

use serde::{Deserialize, Serialize};

use rig_core::{keys, BuildSlot, BuildState};

/// TDP assumed for a CPU whose TDP is unknown.
pub const DEFAULT_CPU_TDP: f64 = 65.0;
/// TDP assumed for a GPU whose TDP is unknown.
pub const DEFAULT_GPU_TDP: f64 = 200.0;
/// Motherboard, memory, storage and fans.
pub const OVERHEAD_WATTS: f64 = 100.0;
/// Safety margin applied to the subtotal, in percent.
pub const SAFETY_MARGIN_PERCENT: f64 = 120.0;

/// Sum of prices over every occupied slot. Empty slots contribute zero.
pub fn total_price(build: &BuildState) -> f64 {
    build.occupied().fold(0.0, |total, (_, c)| total + c.price)
}

/// Breakdown of the power estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerEstimate {
    pub cpu_tdp: f64,
    pub gpu_tdp: f64,
    pub overhead: f64,
    /// Subtotal with the safety margin applied, rounded up and clamped to
    /// `u32::MAX`.
    pub recommended: u32,
}

/// Compute the power estimate breakdown for `build`.
pub fn power_estimate(build: &BuildState) -> PowerEstimate {
    let cpu_tdp = slot_tdp(build, BuildSlot::Cpu, DEFAULT_CPU_TDP);
    let gpu_tdp = slot_tdp(build, BuildSlot::Gpu, DEFAULT_GPU_TDP);
    let subtotal = cpu_tdp + gpu_tdp + OVERHEAD_WATTS;
    // Multiply before dividing so whole-watt subtotals stay exact.
    let margined = (subtotal * SAFETY_MARGIN_PERCENT / 100.0).ceil();
    let recommended = if margined >= f64::from(u32::MAX) {
        tracing::debug!(estimate = margined, "power estimate clamped to u32::MAX");
        u32::MAX
    } else {
        margined as u32
    };
    PowerEstimate {
        cpu_tdp,
        gpu_tdp,
        overhead: OVERHEAD_WATTS,
        recommended,
    }
}

/// Estimated power draw in whole watts, including the safety margin.
///
/// Always at least `ceil(OVERHEAD_WATTS × 1.20)` = 120.
pub fn estimated_wattage(build: &BuildState) -> u32 {
    power_estimate(build).recommended
}

fn slot_tdp(build: &BuildState, slot: BuildSlot, default: f64) -> f64 {
    match build.get(slot).and_then(|c| c.spec_number(keys::TDP)) {
        Some(tdp) => tdp,
        None => {
            tracing::trace!(%slot, default, "TDP unavailable, using category default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig_core::{Category, Component};

    fn cpu(tdp: &str) -> Component {
        Component::new("cpu-1", Category::Cpu, "Ryzen 9 7950X", 549.0).with_spec(keys::TDP, tdp)
    }

    fn gpu(tdp: &str) -> Component {
        Component::new("gpu-1", Category::Gpu, "GeForce RTX 4090", 1599.99).with_spec(keys::TDP, tdp)
    }

    #[test]
    fn empty_build_price_is_zero() {
        assert_eq!(total_price(&BuildState::new()), 0.0);
    }

    #[test]
    fn total_price_sums_occupied_slots() {
        let build = BuildState::from_components([
            cpu("170 W"),
            gpu("450 W"),
            Component::new("case-1", Category::Case, "Lancool 216", 100.0),
        ]);
        assert!((total_price(&build) - 2248.99).abs() < 1e-9);
    }

    #[test]
    fn empty_build_wattage_is_overhead_with_margin_and_defaults() {
        // (65 + 200 + 100) × 1.2 = 438
        assert_eq!(estimated_wattage(&BuildState::new()), 438);
    }

    #[test]
    fn known_tdps_are_summed() {
        let build = BuildState::from_components([cpu("170 W"), gpu("450 W")]);
        assert_eq!(estimated_wattage(&build), 864);
    }

    #[test]
    fn oversized_tdp_clamps_to_u32_max() {
        let build = BuildState::from_components([cpu("99999999999 W")]);
        assert_eq!(estimated_wattage(&build), u32::MAX);
        assert_eq!(power_estimate(&build).cpu_tdp, 99_999_999_999.0);
    }

    #[test]
    fn malformed_tdp_falls_back_to_default() {
        let build = BuildState::from_components([cpu("unknown"), gpu("N/A")]);
        assert_eq!(estimated_wattage(&build), 438);
        let estimate = power_estimate(&build);
        assert_eq!(estimate.cpu_tdp, DEFAULT_CPU_TDP);
        assert_eq!(estimate.gpu_tdp, DEFAULT_GPU_TDP);
    }

    #[test]
    fn missing_tdp_field_falls_back_to_default() {
        let bare = Component::new("gpu-2", Category::Gpu, "Mystery GPU", 1.0);
        let build = BuildState::from_components([cpu("105 W"), bare]);
        // (105 + 200 + 100) × 1.2 = 486
        assert_eq!(estimated_wattage(&build), 486);
    }

    #[test]
    fn fractional_subtotal_rounds_up() {
        let build = BuildState::from_components([cpu("65.5 W"), gpu("200 W")]);
        // 365.5 × 1.2 = 438.6
        assert_eq!(estimated_wattage(&build), 439);
    }

    #[test]
    fn zero_tdp_is_not_replaced() {
        let build = BuildState::from_components([cpu("0 W"), gpu("0 W")]);
        assert_eq!(estimated_wattage(&build), 120);
    }
}
