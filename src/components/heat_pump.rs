//! Water-to-air heat pump source-side load conversion.

use serde::{Deserialize, Serialize};

/// Heat pump coefficients of performance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatPumpProperties {
    /// Cooling COP.
    pub cop_c: f64,
    /// Heating COP.
    pub cop_h: f64,
}

/// A water-to-air heat pump converting space loads to source-side loads.
#[derive(Debug, Clone)]
pub struct HeatPump {
    pub name: String,
    pub props: HeatPumpProperties,
}

impl HeatPump {
    pub fn new(name: &str, props: HeatPumpProperties) -> Self {
        Self {
            name: name.trim().to_uppercase(),
            props,
        }
    }

    /// Source-side load for a space load in watts.
    ///
    /// Positive space loads are heating; the compressor supplies part of the
    /// delivered heat, so only `1 - 1/COP_h` is extracted from the loop.
    /// Negative space loads are cooling; compressor heat is rejected on top
    /// of the space load, scaling it by `1 + 1/COP_c`.
    pub fn calc_src_side_load(&self, space_load: f64) -> f64 {
        if space_load >= 0.0 {
            space_load * (1.0 - 1.0 / self.props.cop_h)
        } else {
            space_load * (1.0 + 1.0 / self.props.cop_c)
        }
    }

    /// Converts a space load series to source-side loads.
    pub fn get_loads(&self, space_loads: &[f64]) -> Vec<f64> {
        space_loads
            .iter()
            .map(|x| self.calc_src_side_load(*x))
            .collect()
    }
}
