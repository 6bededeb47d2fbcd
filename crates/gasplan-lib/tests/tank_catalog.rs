use std::str::FromStr;

use gasplan_lib::error::Error;
use gasplan_lib::{cubic_feet_from_psi, psi_from_cubic_feet, usable_gas, Method, TankCatalog};

#[test]
fn builtin_catalog_lists_expected_tanks() {
    let catalog = TankCatalog::builtin();
    assert_eq!(
        catalog.tank_names(),
        vec!["2xAL80", "2xHP100", "2xHP133", "2xLP85", "AL40", "AL80"]
    );

    let al80 = catalog.get("AL80").expect("AL80 present");
    assert_eq!(al80.rated_volume, 77.0);
    assert_eq!(al80.rated_pressure, 3000.0);
    assert_eq!(al80.tank_factor(), 2.5);
}

#[test]
fn lookup_is_exact_name_only() {
    let catalog = TankCatalog::builtin();
    assert!(catalog.get("al80").is_none());
    assert!(catalog.get("AL80 ").is_none());
}

#[test]
fn tanks_sorted_matches_name_order() {
    let catalog = TankCatalog::builtin();
    let names: Vec<&str> = catalog
        .tanks_sorted()
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, catalog.tank_names());
}

#[test]
fn psi_and_cubic_feet_conversions() {
    // 41 cf on a TF 5.0 set: 8.2 truncates to 8 -> 800 psi.
    assert_eq!(psi_from_cubic_feet(5.0, 41.0), 800);
    // No rounding in the PSI -> cf direction.
    assert!((cubic_feet_from_psi(5.0, 800.0) - 40.0).abs() < 1e-12);
    assert!((cubic_feet_from_psi(2.5, 3000.0) - 75.0).abs() < 1e-12);
}

#[test]
fn usable_gas_partitions_by_method() {
    assert_eq!(usable_gas(3000.0, 600.0, Method::All), 2400.0);
    assert_eq!(usable_gas(3000.0, 600.0, Method::Half), 1200.0);
    assert_eq!(usable_gas(3000.0, 600.0, Method::Thirds), 800.0);
}

#[test]
fn unrecognized_method_is_a_hard_error() {
    let err = Method::from_str("QUARTERS").expect_err("should reject");
    match err {
        Error::InvalidMethod { method } => assert_eq!(method, "QUARTERS"),
        other => panic!("unexpected error: {:?}", other),
    }
}
