//! Reader for hourly building loads exported as CSV.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{NetworkError, Result};

const HEATING_COLUMN: &str = "TotalHeatingSensibleLoad";
const COOLING_COLUMN: &str = "TotalCoolingSensibleLoad";
const WATER_HEATING_COLUMN: &str = "TotalWaterHeating";

/// Hourly space conditioning and water heating loads for one building.
///
/// Heating loads are positive, cooling loads negative, both in watts.
#[derive(Debug, Clone, Default)]
pub struct SpaceLoads {
    pub heating: Vec<f64>,
    pub cooling: Vec<f64>,
    pub water_heating: Vec<f64>,
}

impl SpaceLoads {
    /// Number of hourly records.
    pub fn len(&self) -> usize {
        self.heating.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heating.is_empty()
    }
}

/// Reads hourly building loads from a CSV export.
///
/// The file must carry `TotalHeatingSensibleLoad`, `TotalCoolingSensibleLoad`
/// and `TotalWaterHeating` columns. Heating values are positive and cooling
/// values negative, following the modelica loads export convention.
///
/// # Errors
///
/// Returns an error when the file is missing, a required column is absent,
/// or a value fails to parse as a number.
pub fn read_building_loads(path: &Path) -> Result<SpaceLoads> {
    if !path.exists() {
        return Err(NetworkError::MissingInput(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let column_index = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| NetworkError::Loads {
                path: path.to_path_buf(),
                message: format!("missing column \"{name}\""),
            })
    };
    let heating_idx = column_index(HEATING_COLUMN)?;
    let cooling_idx = column_index(COOLING_COLUMN)?;
    let water_idx = column_index(WATER_HEATING_COLUMN)?;

    let mut loads = SpaceLoads::default();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let parse = |idx: usize| -> Result<f64> {
            record
                .get(idx)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .ok_or_else(|| NetworkError::Loads {
                    path: path.to_path_buf(),
                    message: format!("row {}: value is not a number", row + 2),
                })
        };
        loads.heating.push(parse(heating_idx)?);
        loads.cooling.push(parse(cooling_idx)?);
        loads.water_heating.push(parse(water_idx)?);
    }

    debug!(path = %path.display(), hours = loads.len(), "read building loads");
    Ok(loads)
}

/// Locates the modelica loads export for a building under a scenario
/// directory.
///
/// The export lands at
/// `<scenario>/<building id>/*_export_modelica_loads*/building_loads.csv`,
/// where the middle directory name varies by exporter version.
pub fn find_loads_file(scenario_directory: &Path, building_id: &str) -> Result<PathBuf> {
    let building_dir = scenario_directory.join(building_id);
    if building_dir.is_dir() {
        for entry in fs::read_dir(&building_dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if entry.path().is_dir() && name.contains("_export_modelica_loads") {
                let candidate = entry.path().join("building_loads.csv");
                if candidate.exists() {
                    return Ok(candidate);
                }
            }
        }
    }
    Err(NetworkError::MissingLoadsFile(building_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_loads_csv(dir: &Path) -> PathBuf {
        let path = dir.join("building_loads.csv");
        let mut f = fs::File::create(&path).expect("create csv");
        writeln!(
            f,
            "Date Time,TotalHeatingSensibleLoad,TotalCoolingSensibleLoad,TotalWaterHeating"
        )
        .expect("write header");
        writeln!(f, "2017-01-01 00:00,1000.0,-250.0,50.0").expect("write row");
        writeln!(f, "2017-01-01 01:00,900.0,0.0,0.0").expect("write row");
        path
    }

    #[test]
    fn reads_hourly_loads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_loads_csv(dir.path());
        let loads = read_building_loads(&path).expect("loads should read");
        assert_eq!(loads.len(), 2);
        assert_eq!(loads.heating[0], 1000.0);
        assert_eq!(loads.cooling[0], -250.0);
        assert_eq!(loads.water_heating[0], 50.0);
    }

    #[test]
    fn missing_column_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("building_loads.csv");
        fs::write(&path, "Date Time,TotalHeatingSensibleLoad\n2017-01-01 00:00,1.0\n")
            .expect("write csv");
        let err = read_building_loads(&path).expect_err("missing column should error");
        assert!(format!("{err}").contains("TotalCoolingSensibleLoad"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_building_loads(Path::new("/nonexistent/building_loads.csv"))
            .expect_err("missing file should error");
        assert!(matches!(err, NetworkError::MissingInput(_)));
    }

    #[test]
    fn finds_loads_export_under_scenario() {
        let dir = tempfile::tempdir().expect("tempdir");
        let export_dir = dir
            .path()
            .join("building-1")
            .join("021_export_modelica_loads");
        fs::create_dir_all(&export_dir).expect("create export dir");
        write_loads_csv(&export_dir);

        let found = find_loads_file(dir.path(), "building-1").expect("loads file should exist");
        assert!(found.ends_with("building_loads.csv"));
        assert!(find_loads_file(dir.path(), "building-2").is_err());
    }
}
