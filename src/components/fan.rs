//! Terminal unit fan with a constant design operating point.

use serde::{Deserialize, Serialize};

/// Fan design parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FanProperties {
    /// Design flow rate in m3/s.
    pub design_flow_rate: f64,
    /// Design head in Pa.
    pub design_head: f64,
    /// Motor efficiency, 0 to 1.
    #[serde(default = "FanProperties::default_motor_efficiency")]
    pub motor_efficiency: f64,
}

impl FanProperties {
    fn default_motor_efficiency() -> f64 {
        0.6
    }
}

/// A fan operating continuously at its design point.
#[derive(Debug, Clone)]
pub struct Fan {
    pub name: String,
    pub props: FanProperties,
}

impl Fan {
    pub fn new(name: &str, props: FanProperties) -> Self {
        Self {
            name: name.trim().to_uppercase(),
            props,
        }
    }

    /// Electric power draw in watts.
    pub fn load(&self) -> f64 {
        self.props.design_flow_rate * self.props.design_head / self.props.motor_efficiency
    }

    /// Constant hourly load series of `num_loads` entries.
    pub fn get_loads(&self, num_loads: usize) -> Vec<f64> {
        vec![self.load(); num_loads]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_load_from_design_point() {
        let fan = Fan::new(
            "simple fan",
            FanProperties {
                design_flow_rate: 0.25,
                design_head: 150.0,
                motor_efficiency: 0.6,
            },
        );
        assert!((fan.load() - 62.5).abs() < 1e-9);
        assert_eq!(fan.get_loads(3), vec![62.5, 62.5, 62.5]);
    }
}
