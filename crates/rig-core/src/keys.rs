//! Specification keys the rule engines look up by name.
//!
//! The catalog owns the key vocabulary; these are the few keys whose
//! meaning the compatibility and metrics rules depend on.

/// Processor or motherboard socket, e.g. `"AM5"`.
pub const SOCKET: &str = "Socket";
/// Memory kit generation, e.g. `"DDR5"`.
pub const MEMORY_TYPE: &str = "Type";
/// Memory generation a motherboard accepts.
pub const MOTHERBOARD_MEMORY_TYPE: &str = "Memory Type";
/// Free-form list of sockets a cooler supports.
pub const COOLER_COMPATIBILITY: &str = "Compatibility";
/// CPU integrated graphics; the literal `"None"` means absent.
pub const INTEGRATED_GRAPHICS: &str = "Integrated Graphics";
/// Sentinel value of [`INTEGRATED_GRAPHICS`] for CPUs without graphics.
pub const NO_INTEGRATED_GRAPHICS: &str = "None";
/// Thermal design power.
pub const TDP: &str = "TDP";
/// Power supply rated output.
pub const WATTAGE: &str = "Wattage";
/// Component vendor.
pub const MANUFACTURER: &str = "Manufacturer";
