//! End-to-end sizing runs against a synthetic scenario directory.

mod common;

use std::path::Path;

use thermalnetwork::VERSION;
use thermalnetwork::error::NetworkError;
use thermalnetwork::io::load_json;
use thermalnetwork::runner::run_sizer_from_cli_worker;

#[test]
fn full_run_writes_sizing_input() {
    let root = tempfile::tempdir().expect("tempdir");
    let (geojson_path, scenario_dir) = common::write_scenario(root.path(), VERSION);
    let output_dir = root.path().join("out");

    run_sizer_from_cli_worker(&geojson_path, &scenario_dir, &output_dir)
        .expect("sizing run should succeed");

    let doc = load_json(&output_dir.join("ghe-1").join("sizing_input.json"))
        .expect("sizing input should exist");
    assert_eq!(doc["ghe_id"], "ghe-1");
    assert_eq!(doc["name"], "GHE FIELD");
    // 100 m x 50 m from ghe_geometric_params
    assert_eq!(doc["area_m2"], 5000.0);
    assert_eq!(doc["design"]["method"], "AREAPROPORTIONAL");
    assert!(doc["footprint"].is_array());
}

#[test]
fn full_run_design_load_matches_hand_calculation() {
    let root = tempfile::tempdir().expect("tempdir");
    let (geojson_path, scenario_dir) = common::write_scenario(root.path(), VERSION);
    let output_dir = root.path().join("out");

    run_sizer_from_cli_worker(&geojson_path, &scenario_dir, &output_dir)
        .expect("sizing run should succeed");

    let doc = load_json(&output_dir.join("ghe-1").join("sizing_input.json"))
        .expect("sizing input should exist");
    let design_load = doc["design_load_w"].as_f64().expect("design load present");

    // primary pump: 0.01 * 150000 + 150 = 1650 W
    //
    // b1 per hour (COP_h 2.5, COP_c 3.5, DHW COP 2.5):
    //   3000 * 0.6 - 1000 * (1 + 1/3.5) + 500 * 0.6
    //   - 62.5 (fan) - 55 (load pump) + 55 (source pump) = 751.7857 W
    // b2 per hour:
    //   1000 * 0.6 - 2000 * (1 + 1/3.5) - 62.5 - 55 + 55 = -2033.9286 W
    //
    // 24 hours of each plus the pump: -29121.4286 W onto the only GHE
    let expected = 1650.0 + 24.0 * (751.785_714_285_7 + (-2033.928_571_428_6));
    assert!(
        (design_load - expected).abs() < 0.1,
        "design load was {design_load}, expected {expected}"
    );
}

#[test]
fn version_mismatch_aborts_the_run() {
    let root = tempfile::tempdir().expect("tempdir");
    let (geojson_path, scenario_dir) = common::write_scenario(root.path(), VERSION + 1);
    let output_dir = root.path().join("out");

    let err = run_sizer_from_cli_worker(&geojson_path, &scenario_dir, &output_dir)
        .expect_err("mismatched version should abort");
    assert!(matches!(err, NetworkError::VersionMismatch { .. }));
    assert!(!output_dir.exists());
}

#[test]
fn missing_geojson_is_reported() {
    let root = tempfile::tempdir().expect("tempdir");
    let (_, scenario_dir) = common::write_scenario(root.path(), VERSION);

    let err = run_sizer_from_cli_worker(
        Path::new("/nonexistent/network.geojson"),
        &scenario_dir,
        &root.path().join("out"),
    )
    .expect_err("missing geojson should abort");
    assert!(matches!(err, NetworkError::MissingInput(_)));
}

#[test]
fn unequal_loads_lengths_abort_the_run() {
    let root = tempfile::tempdir().expect("tempdir");
    let (geojson_path, scenario_dir) = common::write_scenario(root.path(), VERSION);
    // shorten b1's export so the two stations disagree on record count
    common::write_building_loads_hours(&scenario_dir, "b1", 3000.0, -1000.0, 500.0, 12);
    let output_dir = root.path().join("out");

    let err = run_sizer_from_cli_worker(&geojson_path, &scenario_dir, &output_dir)
        .expect_err("unequal load series should abort");
    assert!(matches!(err, NetworkError::MismatchedLoads));
    assert!(!output_dir.exists());
}

#[test]
fn missing_building_loads_is_reported() {
    let root = tempfile::tempdir().expect("tempdir");
    let (geojson_path, scenario_dir) = common::write_scenario(root.path(), VERSION);
    std::fs::remove_dir_all(scenario_dir.join("b1")).expect("fixture loads should remove");

    let err = run_sizer_from_cli_worker(&geojson_path, &scenario_dir, &root.path().join("out"))
        .expect_err("missing loads export should abort");
    assert!(matches!(err, NetworkError::MissingLoadsFile(_)));
}
