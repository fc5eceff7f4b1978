//! Shared test fixtures for integration tests.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

/// Hourly records written into the fixture loads CSV.
pub const FIXTURE_HOURS: usize = 24;

/// District GeoJSON with two buildings and one GHE on a closed loop.
///
/// Loop order after reordering: b2 (start loop), ghe-1, b1.
pub fn district_geojson() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "id": "b1", "type": "Building", "name": "Hotel" }
            },
            {
                "type": "Feature",
                "properties": { "id": "b2", "type": "Building", "name": "Office" }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [-105.2, 39.75],
                        [-105.199, 39.75],
                        [-105.199, 39.751],
                        [-105.2, 39.751],
                        [-105.2, 39.75]
                    ]]
                },
                "properties": {
                    "id": "ghe-1",
                    "type": "District System",
                    "name": "GHE Field",
                    "district_system_type": "Ground Heat Exchanger"
                }
            },
            {
                "type": "Feature",
                "properties": {
                    "id": "j1", "type": "ThermalJunction",
                    "start_loop": "true", "buildingId": "b2"
                }
            },
            {
                "type": "Feature",
                "properties": {
                    "id": "c1", "type": "ThermalConnector",
                    "startFeatureId": "b1", "endFeatureId": "b2"
                }
            },
            {
                "type": "Feature",
                "properties": {
                    "id": "c2", "type": "ThermalConnector",
                    "startFeatureId": "b2", "endFeatureId": "ghe-1"
                }
            },
            {
                "type": "Feature",
                "properties": {
                    "id": "c3", "type": "ThermalConnector",
                    "startFeatureId": "ghe-1", "endFeatureId": "b1"
                }
            }
        ]
    })
}

/// System parameter document with one GHE entry at schema `version`.
pub fn system_parameter_doc(ghe_id: &str, version: u64) -> Value {
    json!({
        "district_system": {
            "fifth_generation": {
                "ghe_parameters": {
                    "version": version,
                    "fluid": {
                        "fluid_name": "Water",
                        "concentration_percent": 0.0,
                        "temperature": 20.0
                    },
                    "design": { "method": "AREAPROPORTIONAL" },
                    "ghe_specific_params": [
                        {
                            "ghe_id": ghe_id,
                            "ghe_geometric_params": {
                                "length_of_ghe": 100.0,
                                "width_of_ghe": 50.0
                            },
                            "borehole": { "buried_depth": 2.0, "diameter": 0.15 },
                            "ground_loads": []
                        }
                    ]
                }
            }
        }
    })
}

/// Writes a modelica loads export for a building under the scenario
/// directory, with constant hourly loads over [`FIXTURE_HOURS`].
pub fn write_building_loads(
    scenario_dir: &Path,
    building_id: &str,
    heating_w: f64,
    cooling_w: f64,
    water_w: f64,
) -> PathBuf {
    write_building_loads_hours(scenario_dir, building_id, heating_w, cooling_w, water_w, FIXTURE_HOURS)
}

/// Same as [`write_building_loads`] with an explicit record count.
pub fn write_building_loads_hours(
    scenario_dir: &Path,
    building_id: &str,
    heating_w: f64,
    cooling_w: f64,
    water_w: f64,
    hours: usize,
) -> PathBuf {
    let export_dir = scenario_dir
        .join(building_id)
        .join("021_export_modelica_loads");
    fs::create_dir_all(&export_dir).expect("export dir should create");
    let path = export_dir.join("building_loads.csv");
    let mut f = fs::File::create(&path).expect("loads csv should create");
    writeln!(
        f,
        "Date Time,TotalHeatingSensibleLoad,TotalCoolingSensibleLoad,TotalWaterHeating"
    )
    .expect("header should write");
    for hour in 0..hours {
        writeln!(
            f,
            "2017-01-01 {hour:02}:00,{heating_w},{cooling_w},{water_w}"
        )
        .expect("row should write");
    }
    path
}

/// Lays out a complete scenario directory and GeoJSON file.
///
/// Returns `(geojson_path, scenario_dir)` inside `root`.
pub fn write_scenario(root: &Path, version: u64) -> (PathBuf, PathBuf) {
    let geojson_path = root.join("network.geojson");
    fs::write(
        &geojson_path,
        serde_json::to_string_pretty(&district_geojson()).expect("geojson should serialize"),
    )
    .expect("geojson should write");

    let scenario_dir = root.join("scenario");
    let ghe_dir = scenario_dir.join("ghe_dir");
    fs::create_dir_all(&ghe_dir).expect("ghe dir should create");
    fs::write(
        ghe_dir.join("system_parameter.json"),
        serde_json::to_string_pretty(&system_parameter_doc("ghe-1", version))
            .expect("doc should serialize"),
    )
    .expect("system parameters should write");

    write_building_loads(&scenario_dir, "b1", 3000.0, -1000.0, 500.0);
    write_building_loads(&scenario_dir, "b2", 1000.0, -2000.0, 0.0);

    (geojson_path, scenario_dir)
}
