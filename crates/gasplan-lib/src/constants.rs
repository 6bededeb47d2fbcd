//! Shared constants used across pressure, consumption and blending formulas.

/// Feet of salt water per atmosphere of pressure.
pub const SALT_WATER_FT_PER_ATA: f64 = 33.0;

/// Feet of fresh water per atmosphere of pressure.
pub const FRESH_WATER_FT_PER_ATA: f64 = 34.0;

/// Fraction of oxygen in air.
pub const AIR_FRACTION_O2: f64 = 0.21;

/// Fraction of nitrogen in air.
pub const AIR_FRACTION_N2: f64 = 0.79;

/// Planned emergency ascent rate in feet per minute. Conservative average
/// accounting for stress and gas sharing.
pub const ASCENT_RATE_FT_PER_MIN: f64 = 10.0;

/// Default surface consumption rate (cubic feet per minute) used for
/// minimum-gas planning.
pub const DEFAULT_CONSUMPTION_RATE: f64 = 1.5;

/// Default oxygen partial-pressure limit (ATA) for working dives.
pub const DEFAULT_PPO2_LIMIT: f64 = 1.4;

/// Default fill pressure (PSI) assumed by the blending helpers.
pub const DEFAULT_FILL_PRESSURE_PSI: f64 = 3000.0;
