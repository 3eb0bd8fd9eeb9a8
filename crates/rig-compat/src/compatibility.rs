//! # Compatibility Rule Evaluation
//!
//! Applies the fixed set of pairwise compatibility rules to a
//! [`BuildState`] snapshot and returns the issues found.
//!
//! Rules are evaluated independently, in declaration order
//! ([`CompatibilityRule::all()`]). A rule is skipped when one of its slots
//! is empty. Once both parts are present, an absent specification on one
//! side counts as a differing value and is shown as `-`. The output order
//! follows rule order, never severity.
//!
//! Findings are advisory. An empty list means no known incompatibility
//! was detected, not that the build is proven compatible.

use std::fmt;

use serde::{Deserialize, Serialize};

use rig_core::{keys, BuildSlot, BuildState, MISSING_SPEC};

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// How serious a compatibility finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Insufficient evidence of support; the build may still work.
    Warning,
    /// The parts are known not to work together.
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CompatibilityRule
// ---------------------------------------------------------------------------

/// The pairwise rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityRule {
    /// CPU socket must equal the motherboard socket.
    CpuSocket,
    /// Memory generation must equal the motherboard's memory type.
    MemoryType,
    /// Cooler compatibility list should mention the CPU socket.
    CoolerSocket,
    /// A build without a GPU needs a CPU with integrated graphics.
    DisplayOutput,
}

impl CompatibilityRule {
    /// All rules in declaration order.
    pub fn all() -> &'static [CompatibilityRule] {
        &[
            Self::CpuSocket,
            Self::MemoryType,
            Self::CoolerSocket,
            Self::DisplayOutput,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CpuSocket => "cpu_socket",
            Self::MemoryType => "memory_type",
            Self::CoolerSocket => "cooler_socket",
            Self::DisplayOutput => "display_output",
        }
    }

    /// Severity this rule reports at.
    pub fn severity(&self) -> Severity {
        match self {
            Self::CpuSocket | Self::MemoryType => Severity::Error,
            Self::CoolerSocket | Self::DisplayOutput => Severity::Warning,
        }
    }

    /// Evaluate this rule against a snapshot.
    pub fn check(&self, build: &BuildState) -> Option<CompatibilityIssue> {
        let message = match self {
            Self::CpuSocket => check_cpu_socket(build),
            Self::MemoryType => check_memory_type(build),
            Self::CoolerSocket => check_cooler_socket(build),
            Self::DisplayOutput => check_display_output(build),
        }?;
        Some(CompatibilityIssue {
            severity: self.severity(),
            rule: *self,
            message,
        })
    }
}

impl fmt::Display for CompatibilityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CompatibilityIssue
// ---------------------------------------------------------------------------

/// A single finding produced by one evaluation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityIssue {
    pub severity: Severity,
    /// The rule that produced this finding.
    pub rule: CompatibilityRule,
    pub message: String,
}

impl CompatibilityIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for CompatibilityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluate every compatibility rule against `build`.
///
/// Never fails. Issues appear in rule-declaration order.
pub fn evaluate(build: &BuildState) -> Vec<CompatibilityIssue> {
    let issues: Vec<CompatibilityIssue> = CompatibilityRule::all()
        .iter()
        .filter_map(|rule| rule.check(build))
        .collect();
    for issue in &issues {
        tracing::debug!(rule = %issue.rule, severity = %issue.severity, "{}", issue.message);
    }
    issues
}

/// Whether any finding is an [`Severity::Error`].
pub fn has_errors(issues: &[CompatibilityIssue]) -> bool {
    issues.iter().any(CompatibilityIssue::is_error)
}

fn check_cpu_socket(build: &BuildState) -> Option<String> {
    let cpu = build.get(BuildSlot::Cpu)?.spec_text(keys::SOCKET);
    let board = build.get(BuildSlot::Motherboard)?.spec_text(keys::SOCKET);
    (cpu != board).then(|| {
        format!(
            "CPU socket ({}) doesn't match motherboard socket ({})",
            or_missing(cpu.as_deref()),
            or_missing(board.as_deref())
        )
    })
}

fn check_memory_type(build: &BuildState) -> Option<String> {
    let memory = build.get(BuildSlot::Memory)?.spec_text(keys::MEMORY_TYPE);
    let board = build
        .get(BuildSlot::Motherboard)?
        .spec_text(keys::MOTHERBOARD_MEMORY_TYPE);
    (memory != board).then(|| {
        format!(
            "Memory type ({}) doesn't match motherboard memory type ({})",
            or_missing(memory.as_deref()),
            or_missing(board.as_deref())
        )
    })
}

/// Only a textual compatibility list is evidence either way. A missing or
/// non-textual list produces no finding. A CPU without a socket is never
/// covered by a list.
fn check_cooler_socket(build: &BuildState) -> Option<String> {
    let socket = build.get(BuildSlot::Cpu)?.spec_text(keys::SOCKET);
    let cooler = build.get(BuildSlot::Cooler)?;
    let supported = cooler.spec(keys::COOLER_COMPATIBILITY)?.as_text()?;
    let covered = socket.as_deref().is_some_and(|s| supported.contains(s));
    (!covered).then(|| {
        format!(
            "CPU cooler may not be compatible with the {} socket",
            or_missing(socket.as_deref())
        )
    })
}

fn or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING_SPEC)
}

/// Fires only when the CPU declares exactly `"None"`. An absent field is
/// treated as having integrated graphics.
fn check_display_output(build: &BuildState) -> Option<String> {
    if build.get(BuildSlot::Gpu).is_some() {
        return None;
    }
    let cpu = build.get(BuildSlot::Cpu)?;
    let graphics = cpu.spec(keys::INTEGRATED_GRAPHICS)?.as_text()?;
    (graphics == keys::NO_INTEGRATED_GRAPHICS).then(|| {
        "No graphics card selected and the CPU has no integrated graphics; \
         the build will have no display output"
            .to_string()
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rig_core::{Category, Component};

    proptest! {
        /// Equal sockets never produce a socket error; different sockets
        /// always produce exactly one.
        #[test]
        fn socket_rule_fires_iff_sockets_differ(a in "[A-Z]{2,3}[0-9]{1,4}", b in "[A-Z]{2,3}[0-9]{1,4}") {
            let build = BuildState::from_components([
                Component::new("c", Category::Cpu, "CPU", 1.0).with_spec(keys::SOCKET, a.as_str()),
                Component::new("m", Category::Motherboard, "Board", 1.0).with_spec(keys::SOCKET, b.as_str()),
            ]);
            let socket_errors = evaluate(&build)
                .into_iter()
                .filter(|i| i.rule == CompatibilityRule::CpuSocket)
                .count();
            prop_assert_eq!(socket_errors, usize::from(a != b));
        }
    }
}
