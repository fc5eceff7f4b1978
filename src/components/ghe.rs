//! Ground heat exchanger component and sizing input export.

use std::path::Path;

use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::config::{
    BoreholeConfig, DesignConfig, FluidConfig, GeometricConstraints, GroutConfig, PipeConfig,
    SimulationConfig, SoilConfig,
};
use crate::error::Result;
use crate::geometry::{Ring, rotate_polygon_to_axes};
use crate::io::export::write_json;
use crate::projection::polygon_area_m2;

/// Assembled parameters for one ground heat exchanger.
#[derive(Debug, Clone, Serialize)]
pub struct GheProperties {
    pub fluid: FluidConfig,
    pub grout: GroutConfig,
    pub soil: SoilConfig,
    pub pipe: PipeConfig,
    pub borehole: BoreholeConfig,
    pub simulation: SimulationConfig,
    pub geometric_constraints: GeometricConstraints,
    pub design: DesignConfig,
    /// Hourly ground loads in watts, from the system parameter file.
    pub ground_loads: Vec<f64>,
}

/// A ground heat exchanger feature placed on the district loop.
#[derive(Debug, Clone)]
pub struct Ghe {
    pub id: String,
    pub name: String,
    pub props: GheProperties,
    /// Borefield footprint in (longitude, latitude), outer ring first.
    pub footprint: Option<Vec<Ring>>,
}

impl Ghe {
    /// Available borefield area in square meters.
    ///
    /// Uses the configured length and width when both are set, falling back
    /// to the projected area of the footprint polygon.
    pub fn area(&self) -> f64 {
        let gc = &self.props.geometric_constraints;
        if gc.length > 0.0 && gc.width > 0.0 {
            return gc.length * gc.width;
        }
        self.footprint
            .as_ref()
            .and_then(|rings| rings.first())
            .map(|ring| polygon_area_m2(ring))
            .unwrap_or(0.0)
    }

    /// Writes the sizing input document for this GHE.
    ///
    /// The document lands at `<output_directory>/<ghe id>/sizing_input.json`
    /// and carries everything a borehole sizing tool needs: thermal
    /// properties, constraints, the design network load, and the footprint
    /// rotated onto the XY axes.
    pub fn size(&self, network_load: f64, output_directory: &Path) -> Result<()> {
        info!(
            ghe = %self.id,
            load_w = network_load,
            area_m2 = self.area(),
            "writing GHE sizing input"
        );

        let rotated_footprint = self
            .footprint
            .as_ref()
            .map(|rings| rotate_polygon_to_axes(rings));

        let doc = json!({
            "ghe_id": self.id,
            "name": self.name,
            "design_load_w": network_load,
            "area_m2": self.area(),
            "fluid": self.props.fluid,
            "grout": self.props.grout,
            "soil": self.props.soil,
            "pipe": self.props.pipe,
            "borehole": self.props.borehole,
            "simulation": self.props.simulation,
            "geometric_constraints": self.props.geometric_constraints,
            "design": self.props.design,
            "loads": { "ground_loads": self.props.ground_loads },
            "footprint": rotated_footprint,
        });

        let path = output_directory.join(&self.id).join("sizing_input.json");
        write_json(&path, &doc)
    }
}
