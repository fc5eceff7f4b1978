//! Domestic hot water heat pump.

use serde::{Deserialize, Serialize};

/// Hot water heat pump parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DhwProperties {
    /// Heating COP of the hot water heat pump.
    #[serde(alias = "cop_heat_pump_hot_water")]
    pub cop_dhw: f64,
}

/// A heat pump serving domestic hot water loads.
#[derive(Debug, Clone)]
pub struct Dhw {
    pub name: String,
    pub props: DhwProperties,
}

impl Dhw {
    pub fn new(name: &str, props: DhwProperties) -> Self {
        Self {
            name: name.trim().to_uppercase(),
            props,
        }
    }

    /// Source-side heat extraction for a hot water load in watts.
    pub fn calc_src_side_load(&self, dhw_load: f64) -> f64 {
        dhw_load * (1.0 - 1.0 / self.props.cop_dhw)
    }

    /// Converts a hot water load series to source-side loads.
    pub fn get_loads(&self, dhw_loads: &[f64]) -> Vec<f64> {
        dhw_loads
            .iter()
            .map(|x| self.calc_src_side_load(*x))
            .collect()
    }
}
