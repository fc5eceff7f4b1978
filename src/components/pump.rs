//! Circulation pump with a constant design operating point.

use serde::{Deserialize, Serialize};

/// Pump design parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PumpProperties {
    /// Design flow rate in m3/s.
    pub design_flow_rate: f64,
    /// Design head in Pa.
    pub design_head: f64,
    /// Motor efficiency, 0 to 1.
    #[serde(default = "PumpProperties::default_motor_efficiency")]
    pub motor_efficiency: f64,
    /// Fraction of motor losses added to the fluid stream, 0 to 1.
    #[serde(default = "PumpProperties::default_inefficiency_to_fluid")]
    pub motor_inefficiency_to_fluid_stream: f64,
}

impl PumpProperties {
    fn default_motor_efficiency() -> f64 {
        0.9
    }

    fn default_inefficiency_to_fluid() -> f64 {
        1.0
    }
}

/// A pump operating continuously at its design point.
#[derive(Debug, Clone)]
pub struct Pump {
    pub name: String,
    pub props: PumpProperties,
}

impl Pump {
    pub fn new(name: &str, props: PumpProperties) -> Self {
        Self {
            name: name.trim().to_uppercase(),
            props,
        }
    }

    /// Thermal load added to the network per timestep, in watts.
    ///
    /// Hydraulic power plus the fraction of motor losses rejected into the
    /// fluid stream.
    pub fn load(&self) -> f64 {
        let hydraulic_power = self.props.design_flow_rate * self.props.design_head;
        let pump_heat = hydraulic_power * (1.0 - self.props.motor_efficiency);
        let pump_heat_to_fluid = pump_heat * self.props.motor_inefficiency_to_fluid_stream;
        hydraulic_power + pump_heat_to_fluid
    }

    /// Constant hourly load series of `num_loads` entries.
    pub fn get_loads(&self, num_loads: usize) -> Vec<f64> {
        vec![self.load(); num_loads]
    }
}
