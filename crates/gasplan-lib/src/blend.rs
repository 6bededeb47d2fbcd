//! Trimix partial-pressure blending.
//!
//! Plans a fill as: add helium first, then oxygen, then top off with air.
//! All pressures are PSI at the fill whip; fractions are 0..1.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{AIR_FRACTION_N2, AIR_FRACTION_O2};

/// PSI of helium required for the target helium fraction at total pressure.
pub fn helium_fill_pressure(fraction_he: f64, total_pressure: f64) -> f64 {
    fraction_he * total_pressure
}

/// PSI of oxygen represented by the target O2 fraction at total pressure.
pub fn oxygen_fill_pressure(fraction_o2: f64, total_pressure: f64) -> f64 {
    fraction_o2 * total_pressure
}

/// Pressure remaining for the nitrox portion after the helium is in.
pub fn nitrox_fill_pressure(helium_psi: f64, total_pressure: f64) -> f64 {
    total_pressure - helium_psi
}

/// Fractional O2 of the nitrox portion of the blend.
///
/// Returns 0.0 when no pressure remains for nitrox. This is the one place a
/// zero denominator is deliberately suppressed instead of propagated.
pub fn nitrox_fraction_o2(oxygen_psi: f64, remaining_pressure: f64) -> f64 {
    if remaining_pressure == 0.0 {
        return 0.0;
    }
    oxygen_psi / remaining_pressure
}

/// PSI of pure oxygen to add before topping off with air to reach the
/// target O2 fraction.
///
/// ```text
/// O2_add = ((target_f_o2 - 0.21) / 0.79) × total_pressure
/// ```
///
/// A negative result means the target is leaner than air's O2 share; it is
/// returned as-is, not rejected.
pub fn oxygen_psi_to_add(target_fraction_o2: f64, total_pressure: f64) -> f64 {
    ((target_fraction_o2 - AIR_FRACTION_O2) / AIR_FRACTION_N2) * total_pressure
}

/// A computed partial-pressure fill plan for a trimix blend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendPlan {
    pub fraction_o2: f64,
    pub fraction_he: f64,
    pub total_pressure: f64,
    /// PSI of helium to add first.
    pub helium_psi: f64,
    /// PSI of oxygen to add after the helium, before the air top-off.
    pub oxygen_psi: f64,
}

impl BlendPlan {
    /// Compute the fill steps for the target mix at `total_pressure`.
    pub fn compute(fraction_o2: f64, fraction_he: f64, total_pressure: f64) -> Self {
        let helium_psi = helium_fill_pressure(fraction_he, total_pressure);
        let target_o2_psi = oxygen_fill_pressure(fraction_o2, total_pressure);
        let nitrox_psi = nitrox_fill_pressure(helium_psi, total_pressure);
        let nitrox_f_o2 = nitrox_fraction_o2(target_o2_psi, nitrox_psi);
        let oxygen_psi = oxygen_psi_to_add(nitrox_f_o2, nitrox_psi);

        Self {
            fraction_o2,
            fraction_he,
            total_pressure,
            helium_psi,
            oxygen_psi,
        }
    }
}

impl fmt::Display for BlendPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "for trimix: {} / {}",
            (self.fraction_o2 * 100.0) as i32,
            (self.fraction_he * 100.0) as i32
        )?;
        writeln!(f, "add He: {} psi", self.helium_psi)?;
        writeln!(f, "add O2: {} psi", self.oxygen_psi)?;
        write!(f, "fill with air")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nitrox_fraction_guards_zero_remaining_pressure() {
        assert_eq!(nitrox_fraction_o2(480.0, 0.0), 0.0);
        assert!((nitrox_fraction_o2(480.0, 1800.0) - 0.26666666666666666).abs() < 1e-12);
    }

    #[test]
    fn lean_targets_produce_negative_oxygen_to_add() {
        assert!(oxygen_psi_to_add(0.16, 3000.0) < 0.0);
    }
}
