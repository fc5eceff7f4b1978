//! Typed model of the system parameter file consumed for GHE sizing.
//!
//! Only the `district_system.fifth_generation.ghe_parameters` subtree is
//! interpreted; the file carries many other sections that are ignored here.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

/// Top-level system parameter document.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemParameters {
    pub district_system: DistrictSystem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DistrictSystem {
    pub fifth_generation: FifthGeneration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FifthGeneration {
    pub ghe_parameters: GheParameters,
}

/// Ground heat exchanger sizing parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct GheParameters {
    /// Schema version of the parameter file.
    pub version: u64,
    #[serde(default)]
    pub fluid: FluidConfig,
    #[serde(default)]
    pub grout: GroutConfig,
    #[serde(default)]
    pub soil: SoilConfig,
    #[serde(default)]
    pub pipe: PipeConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub geometric_constraints: GeometricConstraints,
    pub design: DesignConfig,
    #[serde(default)]
    pub ghe_specific_params: Vec<GheSpecificParams>,
}

/// Circulating fluid description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidConfig {
    pub fluid_name: String,
    /// Antifreeze concentration in percent, 0-60.
    pub concentration_percent: f64,
    /// Average design fluid temperature in degrees Celsius.
    pub temperature: f64,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            fluid_name: "Water".to_string(),
            concentration_percent: 0.0,
            temperature: 20.0,
        }
    }
}

/// Borehole grout thermal properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroutConfig {
    /// Thermal conductivity in W/m-K.
    pub conductivity: f64,
    /// Volumetric heat capacity in J/m3-K.
    pub rho_cp: f64,
}

impl Default for GroutConfig {
    fn default() -> Self {
        Self {
            conductivity: 1.0,
            rho_cp: 3_901_000.0,
        }
    }
}

/// Soil thermal properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SoilConfig {
    /// Thermal conductivity in W/m-K.
    pub conductivity: f64,
    /// Volumetric heat capacity in J/m3-K.
    pub rho_cp: f64,
    /// Undisturbed ground temperature in degrees Celsius.
    pub undisturbed_temp: f64,
}

impl Default for SoilConfig {
    fn default() -> Self {
        Self {
            conductivity: 2.0,
            rho_cp: 2_343_500.0,
            undisturbed_temp: 18.3,
        }
    }
}

/// Borehole pipe description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeConfig {
    /// Inner diameter in meters.
    pub inner_diameter: f64,
    /// Outer diameter in meters.
    pub outer_diameter: f64,
    /// U-tube shank spacing in meters.
    pub shank_spacing: f64,
    /// Surface roughness in meters.
    pub roughness: f64,
    /// Thermal conductivity in W/m-K.
    pub conductivity: f64,
    /// Volumetric heat capacity in J/m3-K.
    pub rho_cp: f64,
    /// Pipe arrangement, e.g. `"singleutube"`.
    pub arrangement: String,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            inner_diameter: 0.0216,
            outer_diameter: 0.0266,
            shank_spacing: 0.0323,
            roughness: 1.0e-6,
            conductivity: 0.4,
            rho_cp: 1_542_000.0,
            arrangement: "singleutube".to_string(),
        }
    }
}

/// Long-term ground simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulation horizon in months.
    pub num_months: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { num_months: 240 }
    }
}

/// Borefield geometric constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometricConstraints {
    /// Minimum borehole spacing in meters.
    pub b_min: f64,
    /// Maximum borehole spacing in meters.
    pub b_max: f64,
    /// Maximum borehole length in meters.
    pub max_height: f64,
    /// Minimum borehole length in meters.
    pub min_height: f64,
    /// Borefield footprint length in meters, filled per GHE.
    #[serde(default)]
    pub length: f64,
    /// Borefield footprint width in meters, filled per GHE.
    #[serde(default)]
    pub width: f64,
}

impl Default for GeometricConstraints {
    fn default() -> Self {
        Self {
            b_min: 3.0,
            b_max: 10.0,
            max_height: 135.0,
            min_height: 60.0,
            length: 0.0,
            width: 0.0,
        }
    }
}

/// Network-level design settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignConfig {
    /// Design method: `"AREAPROPORTIONAL"` or `"UPSTREAM"`.
    pub method: String,
    /// Design flow rate in m3/s.
    #[serde(default = "DesignConfig::default_flow_rate")]
    pub flow_rate: f64,
    /// Flow rate basis: `"borehole"` or `"system"`.
    #[serde(default = "DesignConfig::default_flow_type")]
    pub flow_type: String,
    /// Maximum entering fluid temperature in degrees Celsius.
    #[serde(default = "DesignConfig::default_max_eft")]
    pub max_eft: f64,
    /// Minimum entering fluid temperature in degrees Celsius.
    #[serde(default = "DesignConfig::default_min_eft")]
    pub min_eft: f64,
}

impl DesignConfig {
    fn default_flow_rate() -> f64 {
        0.0002
    }

    fn default_flow_type() -> String {
        "borehole".to_string()
    }

    fn default_max_eft() -> f64 {
        35.0
    }

    fn default_min_eft() -> f64 {
        5.0
    }
}

/// Parameters specific to one ground heat exchanger.
#[derive(Debug, Clone, Deserialize)]
pub struct GheSpecificParams {
    pub ghe_id: String,
    pub ghe_geometric_params: GheGeometricParams,
    #[serde(default)]
    pub borehole: BoreholeConfig,
    /// Hourly ground loads in watts.
    #[serde(default)]
    pub ground_loads: Vec<f64>,
}

/// Borefield footprint dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GheGeometricParams {
    /// Footprint length in meters.
    pub length_of_ghe: f64,
    /// Footprint width in meters.
    pub width_of_ghe: f64,
}

/// Borehole construction parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoreholeConfig {
    /// Buried depth of the borehole top in meters.
    pub buried_depth: f64,
    /// Borehole diameter in meters.
    pub diameter: f64,
}

impl Default for BoreholeConfig {
    fn default() -> Self {
        Self {
            buried_depth: 2.0,
            diameter: 0.15,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"ghe_parameters.soil.conductivity"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl From<ConfigError> for NetworkError {
    fn from(e: ConfigError) -> Self {
        NetworkError::Config {
            field: e.field,
            message: e.message,
        }
    }
}

impl SystemParameters {
    /// Parses a system parameter file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file is missing, unreadable, or not valid
    /// JSON for the expected subtree.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(NetworkError::MissingInput(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// The GHE parameter subtree.
    pub fn ghe_parameters(&self) -> &GheParameters {
        &self.district_system.fifth_generation.ghe_parameters
    }
}

impl GheParameters {
    /// Finds the per-GHE parameters for a feature id.
    pub fn find_matching_ghe(&self, feature_id: &str) -> Option<&GheSpecificParams> {
        self.ghe_specific_params
            .iter()
            .find(|ghe| ghe.ghe_id == feature_id)
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector when the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(0.0..=60.0).contains(&self.fluid.concentration_percent) {
            errors.push(ConfigError {
                field: "ghe_parameters.fluid.concentration_percent".into(),
                message: "must be in [0, 60]".into(),
            });
        }
        if self.grout.conductivity <= 0.0 {
            errors.push(ConfigError {
                field: "ghe_parameters.grout.conductivity".into(),
                message: "must be > 0".into(),
            });
        }
        if self.soil.conductivity <= 0.0 {
            errors.push(ConfigError {
                field: "ghe_parameters.soil.conductivity".into(),
                message: "must be > 0".into(),
            });
        }
        if self.pipe.inner_diameter >= self.pipe.outer_diameter {
            errors.push(ConfigError {
                field: "ghe_parameters.pipe.inner_diameter".into(),
                message: "must be < pipe.outer_diameter".into(),
            });
        }
        if self.simulation.num_months == 0 {
            errors.push(ConfigError {
                field: "ghe_parameters.simulation.num_months".into(),
                message: "must be > 0".into(),
            });
        }
        let gc = &self.geometric_constraints;
        if gc.b_min > gc.b_max {
            errors.push(ConfigError {
                field: "ghe_parameters.geometric_constraints.b_min".into(),
                message: "must be <= geometric_constraints.b_max".into(),
            });
        }
        if gc.min_height > gc.max_height {
            errors.push(ConfigError {
                field: "ghe_parameters.geometric_constraints.min_height".into(),
                message: "must be <= geometric_constraints.max_height".into(),
            });
        }

        let method = self.design.method.trim().to_uppercase();
        if method != "AREAPROPORTIONAL" && method != "UPSTREAM" {
            errors.push(ConfigError {
                field: "ghe_parameters.design.method".into(),
                message: format!(
                    "must be \"AREAPROPORTIONAL\" or \"UPSTREAM\", got \"{}\"",
                    self.design.method
                ),
            });
        }
        if self.design.min_eft >= self.design.max_eft {
            errors.push(ConfigError {
                field: "ghe_parameters.design.min_eft".into(),
                message: "must be < design.max_eft".into(),
            });
        }

        for (i, ghe) in self.ghe_specific_params.iter().enumerate() {
            if ghe.ghe_id.is_empty() {
                errors.push(ConfigError {
                    field: format!("ghe_parameters.ghe_specific_params[{i}].ghe_id"),
                    message: "must not be empty".into(),
                });
            }
            let geom = &ghe.ghe_geometric_params;
            if geom.length_of_ghe <= 0.0 || geom.width_of_ghe <= 0.0 {
                errors.push(ConfigError {
                    field: format!(
                        "ghe_parameters.ghe_specific_params[{i}].ghe_geometric_params"
                    ),
                    message: "length_of_ghe and width_of_ghe must be > 0".into(),
                });
            }
        }

        errors
    }
}
