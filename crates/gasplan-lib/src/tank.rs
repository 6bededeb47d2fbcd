//! Tank specifications, the built-in registry, and capacity conversions.

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Immutable tank specification: rated volume (cubic feet) at rated
/// working pressure (PSI).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankSpec {
    pub name: String,
    pub rated_volume: f64,
    pub rated_pressure: f64,
}

impl TankSpec {
    fn new(name: &str, rated_volume: f64, rated_pressure: f64) -> Self {
        Self {
            name: name.to_string(),
            rated_volume,
            rated_pressure,
        }
    }

    /// Tank factor for this tank's rated volume and pressure.
    pub fn tank_factor(&self) -> f64 {
        tank_factor(self.rated_volume, self.rated_pressure)
    }
}

/// Registry of tank definitions, keyed by exact name.
#[derive(Debug, Clone, Default)]
pub struct TankCatalog {
    tanks: HashMap<String, TankSpec>,
}

static BUILTIN: Lazy<TankCatalog> = Lazy::new(|| {
    TankCatalog::from_specs([
        TankSpec::new("AL80", 77.0, 3000.0),
        TankSpec::new("2xAL80", 154.0, 3000.0),
        TankSpec::new("AL40", 40.0, 3000.0),
        TankSpec::new("2xLP85", 170.0, 2640.0),
        TankSpec::new("2xHP100", 200.0, 3442.0),
        TankSpec::new("2xHP133", 266.0, 3442.0),
    ])
});

impl TankCatalog {
    /// The built-in registry of common single and double tank setups.
    pub fn builtin() -> &'static TankCatalog {
        &BUILTIN
    }

    /// Build a catalog from a set of specifications.
    pub fn from_specs(specs: impl IntoIterator<Item = TankSpec>) -> Self {
        let tanks = specs
            .into_iter()
            .map(|spec| (spec.name.clone(), spec))
            .collect();
        Self { tanks }
    }

    /// Get a tank by exact name.
    pub fn get(&self, name: &str) -> Option<&TankSpec> {
        self.tanks.get(name)
    }

    /// Get a sorted list of all tank names.
    pub fn tank_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tanks.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all tank specifications sorted by name.
    pub fn tanks_sorted(&self) -> Vec<&TankSpec> {
        let mut tanks: Vec<&TankSpec> = self.tanks.values().collect();
        tanks.sort_by(|a, b| a.name.cmp(&b.name));
        tanks
    }
}

/// Usable-gas partition method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Everything above the reserve is usable.
    All,
    /// Half of the gas above the reserve (out-and-back on the same tank).
    Half,
    /// Thirds: one out, one back, one held in reserve.
    Thirds,
}

impl Method {
    /// Divisor applied to the gas above the minimum-gas reserve.
    pub fn divisor(self) -> f64 {
        match self {
            Method::All => 1.0,
            Method::Half => 2.0,
            Method::Thirds => 3.0,
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALL" => Ok(Method::All),
            "HALF" => Ok(Method::Half),
            "THIRDS" => Ok(Method::Thirds),
            _ => Err(Error::InvalidMethod {
                method: s.to_string(),
            }),
        }
    }
}

/// Tank factor: cubic feet of gas per 100 PSI, rounded to the nearest 0.5.
///
/// ```text
/// TF = round((rated_volume / rated_pressure) × 100 × 2) / 2
/// ```
///
/// The intermediate rounding is half-away-from-zero, which pins the
/// reference values: 200 cf @ 3442 PSI → 6.0, 170 cf @ 2640 PSI → 6.5.
pub fn tank_factor(rated_volume: f64, rated_pressure: f64) -> f64 {
    ((rated_volume / rated_pressure) * 100.0 * 2.0).round() / 2.0
}

/// Convert a cubic-feet requirement into PSI for a given tank factor.
///
/// Truncation happens BEFORE the ×100 step, so results are always whole
/// multiples of 100 PSI.
pub fn psi_from_cubic_feet(tank_factor: f64, cubic_feet: f64) -> i32 {
    (cubic_feet / tank_factor).trunc() as i32 * 100
}

/// Convert PSI to cubic feet using the tank factor. No rounding.
pub fn cubic_feet_from_psi(tank_factor: f64, psi: f64) -> f64 {
    (psi * tank_factor) / 100.0
}

/// Usable gas (PSI) after reserving minimum gas, partitioned per `method`.
pub fn usable_gas(current_psi: f64, min_gas_psi: f64, method: Method) -> f64 {
    (current_psi - min_gas_psi) / method.divisor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tank_factor_rounds_to_nearest_half() {
        assert_eq!(tank_factor(77.0, 3000.0), 2.5);
        assert_eq!(tank_factor(200.0, 3442.0), 6.0);
        assert_eq!(tank_factor(170.0, 2640.0), 6.5);
        assert_eq!(tank_factor(154.0, 3000.0), 5.0);
    }

    #[test]
    fn psi_conversion_steps_by_hundreds() {
        assert_eq!(psi_from_cubic_feet(5.0, 41.0), 800);
        assert_eq!(psi_from_cubic_feet(2.5, 41.0), 1600);
    }

    #[test]
    fn method_parsing_is_case_insensitive() {
        assert_eq!(Method::from_str("thirds").unwrap(), Method::Thirds);
        assert_eq!(Method::from_str("ALL").unwrap(), Method::All);
        assert!(matches!(
            Method::from_str("QUARTERS"),
            Err(Error::InvalidMethod { .. })
        ));
    }
}
