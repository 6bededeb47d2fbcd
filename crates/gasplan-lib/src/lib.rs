//! Gas-planning formula library entry points.
//!
//! This crate exposes the closed-form diving gas-planning formulas used for
//! minimum-gas reserves, depth-equivalence limits (MOD/END/EAD), tank
//! capacity conversions and trimix partial-pressure blending. Higher-level
//! consumers (the CLI) should only depend on the functions exported here.
//!
//! Every formula keeps its own rounding convention (half-up, nearest-0.5,
//! or truncate-toward-zero); these are part of each function's numeric
//! contract and are not unified behind a shared rounding utility.

#![deny(warnings)]

pub mod blend;
pub mod constants;
pub mod consumption;
pub mod equivalence;
pub mod error;
pub mod pressure;
pub mod tank;

pub use blend::{
    helium_fill_pressure, nitrox_fill_pressure, nitrox_fraction_o2, oxygen_fill_pressure,
    oxygen_psi_to_add, BlendPlan,
};
pub use consumption::{
    estimated_bottom_time, gas_volume_consumed, minimum_gas, minutes_to_stop, minutes_to_surface,
    surface_consumption_rate,
};
pub use equivalence::{equivalent_air_depth, equivalent_narcotic_depth, maximum_operating_depth};
pub use error::{Error, Result};
pub use pressure::{
    air_oxygen_partial_pressure, ambient_pressure, gas_total, oxygen_partial_pressure,
    partial_pressure, WaterType,
};
pub use tank::{
    cubic_feet_from_psi, psi_from_cubic_feet, tank_factor, usable_gas, Method, TankCatalog,
    TankSpec,
};
