use gasplan_lib::{
    ambient_pressure, equivalent_air_depth, equivalent_narcotic_depth, maximum_operating_depth,
    oxygen_partial_pressure, partial_pressure, WaterType,
};

#[test]
fn ambient_pressure_at_reference_depths() {
    assert_eq!(ambient_pressure(0.0, WaterType::Salt), 1.0);
    assert_eq!(ambient_pressure(0.0, WaterType::Fresh), 1.0);
    assert_eq!(ambient_pressure(33.0, WaterType::Salt), 2.0);
    assert_eq!(ambient_pressure(34.0, WaterType::Fresh), 2.0);
    assert_eq!(ambient_pressure(100.0, WaterType::Salt), 4.0);
}

#[test]
fn oxygen_partial_pressure_always_uses_salt_water() {
    // The PPO2 helper is pinned to salt-water ATA by contract.
    assert!((oxygen_partial_pressure(0.0, 0.21) - 0.21).abs() < 1e-12);
    assert!((oxygen_partial_pressure(33.0, 0.21) - 0.42).abs() < 1e-12);
    assert!((partial_pressure(5.0, 0.21) - 1.05).abs() < 1e-12);
}

#[test]
fn mod_is_conservative_via_truncation() {
    assert_eq!(maximum_operating_depth(0.32, 1.4, WaterType::Salt), 111);
    assert_eq!(maximum_operating_depth(0.32, 1.6, WaterType::Salt), 132);
    // Pure O2 at 1.6: 19.8 ft truncates down to 19, never 20.
    assert_eq!(maximum_operating_depth(1.0, 1.6, WaterType::Salt), 19);
}

#[test]
fn fresh_water_uses_the_34ft_divisor() {
    assert_eq!(maximum_operating_depth(0.32, 1.4, WaterType::Fresh), 114);
}

#[test]
fn end_counts_oxygen_as_narcotic() {
    assert_eq!(equivalent_narcotic_depth(150.0, 0.45, WaterType::Salt), 67);
    assert_eq!(equivalent_narcotic_depth(100.0, 0.30, WaterType::Salt), 60);
    // No helium means END equals depth (modulo truncation).
    assert_eq!(equivalent_narcotic_depth(100.0, 0.0, WaterType::Salt), 100);
}

#[test]
fn ead_reference_value_truncates_to_81() {
    assert_eq!(equivalent_air_depth(100.0, 0.32, WaterType::Salt), 81);
}

#[test]
fn ead_of_air_is_the_depth_itself() {
    assert_eq!(equivalent_air_depth(99.0, 0.21, WaterType::Salt), 99);
}
