//! End-to-end sizing run: inputs to sizing documents.

use std::fs;
use std::path::Path;

use tracing::{error, info};

use crate::VERSION;
use crate::components::ComponentType;
use crate::config::SystemParameters;
use crate::error::{NetworkError, Result};
use crate::geojson::FeatureCollection;
use crate::network::model::{Network, convert_features};
use crate::network::traversal::{get_connected_features, reorder_connected_features};

/// Runs the full sizing workflow.
///
/// Loads the district GeoJSON and the system parameter file from the
/// scenario directory, walks the loop, assembles the network, and writes one
/// sizing input document per ground heat exchanger under the output
/// directory.
///
/// # Arguments
///
/// * `geojson_file_path` - path to the district GeoJSON file
/// * `scenario_directory_path` - scenario directory holding building loads
///   exports and `ghe_dir/system_parameter.json`
/// * `output_directory_path` - directory for sizing documents, created when
///   missing
pub fn run_sizer_from_cli_worker(
    geojson_file_path: &Path,
    scenario_directory_path: &Path,
    output_directory_path: &Path,
) -> Result<()> {
    let collection = FeatureCollection::from_file(geojson_file_path)?;
    info!(
        path = %geojson_file_path.display(),
        features = collection.features.len(),
        "loaded district GeoJSON"
    );

    let system_parameters_path = scenario_directory_path
        .join("ghe_dir")
        .join("system_parameter.json");
    let system_parameters = SystemParameters::from_json_file(&system_parameters_path)?;
    let ghe_parameters = system_parameters.ghe_parameters();

    if ghe_parameters.version != VERSION {
        return Err(NetworkError::VersionMismatch {
            expected: VERSION,
            found: ghe_parameters.version,
        });
    }

    let validation_errors = ghe_parameters.validate();
    for e in &validation_errors {
        error!("{e}");
    }
    if let Some(first) = validation_errors.into_iter().next() {
        return Err(first.into());
    }

    let mut connected_features = get_connected_features(&collection)?;
    reorder_connected_features(&mut connected_features);
    info!(features = connected_features.len(), "features in loop order");

    let network_data = convert_features(
        &connected_features,
        scenario_directory_path,
        ghe_parameters,
    )?;
    let loop_order: Vec<(String, ComponentType)> = network_data
        .iter()
        .map(|def| (def.name.clone(), def.kind.component_type()))
        .collect();

    let mut network = Network::new();
    network.set_design(&ghe_parameters.design.method)?;
    network.set_components(network_data)?;

    for (name, comp_type) in loop_order {
        match comp_type {
            ComponentType::EnergyTransferStation => network.add_ets_to_network(&name)?,
            ComponentType::GroundHeatExchanger => network.add_ghe_to_network(&name)?,
            ComponentType::Pump => network.add_pump_to_network(&name)?,
            other => {
                return Err(NetworkError::UnsupportedComponentType(
                    other.as_str().to_string(),
                ));
            }
        }
    }

    network.set_component_network_loads()?;

    fs::create_dir_all(output_directory_path)?;
    network.size(output_directory_path)?;
    info!(path = %output_directory_path.display(), "sizing documents written");
    Ok(())
}
