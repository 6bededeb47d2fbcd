//! Depth/pressure conversions.
//!
//! Ambient pressure (ATA) at depth, gas partial pressures, and the
//! over-specified-mix sentinel check.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{AIR_FRACTION_O2, FRESH_WATER_FT_PER_ATA, SALT_WATER_FT_PER_ATA};

/// Water type selecting the feet-per-atmosphere divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterType {
    Salt,
    Fresh,
}

impl WaterType {
    /// Feet of water per atmosphere: 33 for salt, 34 for fresh.
    pub fn divisor(self) -> f64 {
        match self {
            WaterType::Salt => SALT_WATER_FT_PER_ATA,
            WaterType::Fresh => FRESH_WATER_FT_PER_ATA,
        }
    }

    /// Lenient name lookup: `"fresh"` selects fresh water, anything else
    /// falls back to salt. Strict validation of the two names is left to
    /// the CLI argument layer.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("fresh") {
            WaterType::Fresh
        } else {
            WaterType::Salt
        }
    }
}

impl fmt::Display for WaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaterType::Salt => write!(f, "salt"),
            WaterType::Fresh => write!(f, "fresh"),
        }
    }
}

/// Ambient pressure (ATA) at depth, rounded to one decimal place.
///
/// ```text
/// salt water:  ATA = 1 + depth/33
/// fresh water: ATA = 1 + depth/34
/// ```
///
/// Rounding is half-away-from-zero on the first decimal, so the boundary
/// depths land exactly: `ambient_pressure(33.0, WaterType::Salt) == 2.0`.
pub fn ambient_pressure(depth: f64, water: WaterType) -> f64 {
    (((depth / water.divisor()) + 1.0) * 10.0).round() / 10.0
}

/// Partial pressure of a gas at ambient pressure: `ata * fraction`.
/// No rounding is applied.
pub fn partial_pressure(ata: f64, fraction: f64) -> f64 {
    ata * fraction
}

/// Partial pressure of oxygen (PPO2) at the given depth.
///
/// Always uses the salt-water ATA regardless of any water selection made
/// elsewhere; this asymmetry is a deliberate part of the numeric contract.
pub fn oxygen_partial_pressure(depth: f64, fraction_o2: f64) -> f64 {
    partial_pressure(ambient_pressure(depth, WaterType::Salt), fraction_o2)
}

/// Partial pressure of oxygen in air at the given depth.
pub fn air_oxygen_partial_pressure(depth: f64) -> f64 {
    oxygen_partial_pressure(depth, AIR_FRACTION_O2)
}

/// Sum a set of gas percentages, returning `None` when the total exceeds
/// 100 (an over-specified mix). Works equally for fractional inputs that
/// should total 1.0.
pub fn gas_total(gases: &[f64]) -> Option<f64> {
    let total: f64 = gases.iter().sum();
    if total > 100.0 {
        None
    } else {
        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_is_one_ata_in_both_water_types() {
        assert_eq!(ambient_pressure(0.0, WaterType::Salt), 1.0);
        assert_eq!(ambient_pressure(0.0, WaterType::Fresh), 1.0);
    }

    #[test]
    fn boundary_depths_round_exactly() {
        assert_eq!(ambient_pressure(33.0, WaterType::Salt), 2.0);
        assert_eq!(ambient_pressure(34.0, WaterType::Fresh), 2.0);
    }

    #[test]
    fn unknown_water_names_fall_back_to_salt() {
        assert_eq!(WaterType::from_name("fresh"), WaterType::Fresh);
        assert_eq!(WaterType::from_name("salt"), WaterType::Salt);
        assert_eq!(WaterType::from_name("brackish"), WaterType::Salt);
    }

    #[test]
    fn gas_total_flags_over_specified_mix() {
        assert_eq!(gas_total(&[60.0, 50.0]), None);
        assert_eq!(gas_total(&[21.0, 35.0, 44.0]), Some(100.0));
        assert_eq!(gas_total(&[0.21, 0.35, 0.44]), Some(1.0));
    }
}
