//! Gas consumption and minimum-gas planning.
//!
//! Minimum gas (often called CAT: Consumption × ATA × Time) is the reserve
//! needed for two divers to reach the surface or the next gas switch while
//! sharing gas.

use tracing::debug;

use crate::error::{Error, Result};
use crate::pressure::{ambient_pressure, WaterType};
use crate::tank::{psi_from_cubic_feet, usable_gas, Method, TankCatalog};

/// Estimate minutes required to ascend to the surface or to a gas switch.
///
/// Assumes a 10 ft/min ascent rate plus one minute to solve the problem,
/// and one further minute when a gas switch is involved:
///
/// ```text
/// switch_depth > 0: trunc((depth - switch_depth)/10 + 2)
/// otherwise:        trunc(depth/10 + 1)
/// ```
///
/// The final value truncates toward zero, not down.
pub fn minutes_to_stop(depth: f64, switch_depth: f64) -> i32 {
    if switch_depth > 0.0 {
        (((depth - switch_depth) / 10.0) + 2.0).trunc() as i32
    } else {
        ((depth / 10.0) + 1.0).trunc() as i32
    }
}

/// Estimate minutes required to ascend directly to the surface.
pub fn minutes_to_surface(depth: f64) -> i32 {
    minutes_to_stop(depth, 0.0)
}

/// Minimum gas reserve in whole cubic feet.
///
/// `MG = C × A × T` where `C` is the surface consumption rate, `A` the
/// average salt-water ATA between `depth` and `switch_depth`, and `T` the
/// estimated minutes from [`minutes_to_stop`]. The raw product rounds
/// half-up (`floor(raw + 0.5)`), never banker's rounding.
pub fn minimum_gas(depth: f64, switch_depth: f64, consumption_rate: f64) -> i32 {
    let average_ata = (ambient_pressure(depth, WaterType::Salt)
        + ambient_pressure(switch_depth, WaterType::Salt))
        / 2.0;
    let minutes = minutes_to_stop(depth, switch_depth);
    debug!(
        consumption = consumption_rate,
        average_ata, minutes, "minimum gas factors"
    );
    let raw = consumption_rate * average_ata * minutes as f64;
    (raw + 0.5).floor() as i32
}

/// Surface consumption rate: `volume_consumed / (ata × minutes)`.
///
/// The denominator is NOT guarded: a zero `ata × minutes` propagates as a
/// non-finite result. This is a deliberate asymmetry with
/// [`crate::blend::nitrox_fraction_o2`], which guards the same failure.
pub fn surface_consumption_rate(volume_consumed: f64, ata: f64, minutes: f64) -> f64 {
    volume_consumed / (ata * minutes)
}

/// Gas volume consumed for a given SCR, ambient pressure and duration.
pub fn gas_volume_consumed(scr: f64, ata: f64, minutes: f64) -> f64 {
    scr * ata * minutes
}

/// Estimate available bottom time in minutes for a tank at depth.
///
/// Looks the tank up in the built-in registry, reserves minimum gas for the
/// depth, partitions what remains per `method`, and divides the usable PSI
/// by `scr × ATA`.
///
/// # Errors
/// Returns [`Error::UnknownTank`] when `tank_name` is not registered.
pub fn estimated_bottom_time(depth: f64, tank_name: &str, method: Method, scr: f64) -> Result<f64> {
    let catalog = TankCatalog::builtin();
    let tank = catalog.get(tank_name).ok_or_else(|| Error::UnknownTank {
        name: tank_name.to_string(),
    })?;

    let ata = ambient_pressure(depth, WaterType::Salt);
    let tf = tank.tank_factor();
    let min_gas_cf = minimum_gas(depth, 0.0, crate::constants::DEFAULT_CONSUMPTION_RATE);
    let min_gas_psi = psi_from_cubic_feet(tf, min_gas_cf as f64);
    let usable_psi = usable_gas(tank.rated_pressure, f64::from(min_gas_psi), method);

    Ok(usable_psi / (scr * ata))
}
