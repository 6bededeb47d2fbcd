//! Depth-equivalence calculations: MOD, END and EAD.
//!
//! All three compute an ATA chain in a fixed order of operations and
//! truncate the final footage toward zero. Truncation (not rounding) is
//! intentional: it reports the shallower, conservative depth, and the
//! order of operations must not be algebraically simplified or boundary
//! values drift (100 ft on 32% computes 81.48… and must report 81).

use crate::pressure::WaterType;

/// Maximum Operating Depth (feet) for an oxygen fraction and PPO2 limit.
///
/// ```text
/// MOD = trunc((ppo2_limit / f_o2 - 1) × divisor)
/// ```
///
/// Returns 0 when `fraction_o2 <= 0`; the sentinel stands in for a
/// division by zero rather than raising an error.
pub fn maximum_operating_depth(fraction_o2: f64, ppo2_limit: f64, water: WaterType) -> i32 {
    if fraction_o2 <= 0.0 {
        return 0;
    }
    let ata = ppo2_limit / fraction_o2;
    ((ata - 1.0) * water.divisor()).trunc() as i32
}

/// Equivalent Narcotic Depth (feet) for a helium-diluted mix.
///
/// Effective narcotic ATA is `total ATA × (1 - f_he)`: oxygen is counted
/// as narcotic alongside nitrogen, the standard GUE convention.
pub fn equivalent_narcotic_depth(depth: f64, fraction_he: f64, water: WaterType) -> i32 {
    let divisor = water.divisor();
    let ata = (depth / divisor) + 1.0;
    let narcotic_ata = ata * (1.0 - fraction_he);
    ((narcotic_ata - 1.0) * divisor).trunc() as i32
}

/// Equivalent Air Depth (feet) for a nitrox mix.
///
/// ```text
/// EAD = trunc((ATA × (1 - f_o2)/0.79 - 1) × divisor)
/// ```
pub fn equivalent_air_depth(depth: f64, fraction_o2: f64, water: WaterType) -> i32 {
    let divisor = water.divisor();
    let ata = (depth / divisor) + 1.0;
    let fraction_n2 = 1.0 - fraction_o2;
    let ead_ata = ata * (fraction_n2 / 0.79);
    ((ead_ata - 1.0) * divisor).trunc() as i32
}
