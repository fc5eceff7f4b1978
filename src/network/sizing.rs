//! Distribution of network loads onto ground heat exchangers.

use std::path::Path;

use tracing::{debug, info};

use crate::components::DesignType;
use crate::error::{NetworkError, Result};
use crate::network::model::{Network, NetworkComponent};

/// Total thermal load a non-GHE device places on the loop, in watts.
///
/// For an ETS this is the sum of its hourly network loads; pumps contribute
/// their constant design-point load once.
fn device_total_load(component: &NetworkComponent) -> f64 {
    match component {
        NetworkComponent::Ets(ets) => ets.get_loads().iter().sum(),
        NetworkComponent::Pump(pump) => pump.load(),
        NetworkComponent::Ghe(_) => 0.0,
    }
}

impl Network {
    /// Sizes each GHE by its share of the total borefield area.
    ///
    /// All device loads on the loop are summed and divided across the GHEs
    /// in proportion to their footprint areas.
    ///
    /// # Errors
    ///
    /// Returns an error when the combined GHE area is zero, or when a
    /// sizing input document fails to write.
    pub fn size_area_proportional(&self, output_directory: &Path) -> Result<()> {
        let mut ghes = Vec::new();
        let mut total_space_loads = 0.0;
        for (i, device) in self.network.iter().enumerate() {
            match device {
                NetworkComponent::Ghe(ghe) => ghes.push(ghe),
                other => {
                    let device_load = device_total_load(other);
                    debug!(index = i, name = other.name(), load_w = device_load, "device load");
                    total_space_loads += device_load;
                }
            }
        }

        let total_ghe_area: f64 = ghes.iter().map(|ghe| ghe.area()).sum();
        if total_ghe_area <= 0.0 {
            return Err(NetworkError::ZeroGheArea);
        }

        let load_per_area = total_space_loads / total_ghe_area;
        info!(
            total_load_w = total_space_loads,
            total_area_m2 = total_ghe_area,
            load_per_area,
            "distributing loads across borefields"
        );

        for ghe in ghes {
            ghe.size(load_per_area * ghe.area(), output_directory)?;
        }
        Ok(())
    }

    /// Sizes each GHE to the devices upstream of it on the loop.
    ///
    /// The loop is cut at every GHE; each GHE takes the summed loads of the
    /// devices between the previous GHE and itself.
    pub fn size_to_upstream_equipment(&self, output_directory: &Path) -> Result<()> {
        let ghe_indexes: Vec<usize> = self
            .network
            .iter()
            .enumerate()
            .filter_map(|(i, device)| match device {
                NetworkComponent::Ghe(_) => Some(i),
                _ => None,
            })
            .collect();

        if ghe_indexes.is_empty() {
            return Err(NetworkError::ZeroGheArea);
        }

        for (i, ghe_index) in ghe_indexes.iter().enumerate() {
            let segment_start = if i == 0 { 0 } else { ghe_indexes[i - 1] + 1 };
            let devices_before = &self.network[segment_start..*ghe_index];
            let total_space_loads: f64 = devices_before.iter().map(device_total_load).sum();
            debug!(
                ghe_index,
                upstream_devices = devices_before.len(),
                load_w = total_space_loads,
                "sizing GHE to upstream equipment"
            );

            let NetworkComponent::Ghe(ghe) = &self.network[*ghe_index] else {
                continue;
            };
            ghe.size(total_space_loads, output_directory)?;
        }
        Ok(())
    }

    /// Dispatches to the configured sizing method.
    ///
    /// # Errors
    ///
    /// Returns an error when no design method has been set.
    pub fn size(&self, output_directory: &Path) -> Result<()> {
        match self.des_method {
            Some(DesignType::AreaProportional) => self.size_area_proportional(output_directory),
            Some(DesignType::Upstream) => self.size_to_upstream_equipment(output_directory),
            None => Err(NetworkError::UnsupportedDesignMethod("<unset>".to_string())),
        }
    }
}
