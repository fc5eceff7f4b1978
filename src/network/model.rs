//! Component catalog and district loop assembly.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::components::{
    ComponentDef, ComponentKind, ComponentType, DesignType, Dhw, DhwProperties, Ets,
    EtsProperties, Fan, FanProperties, Ghe, GheProperties, HeatPump, HeatPumpProperties, Pump,
    PumpProperties,
};
use crate::config::GheParameters;
use crate::error::{NetworkError, Result};
use crate::geojson::FeatureKind;
use crate::io::loads::{find_loads_file, read_building_loads};
use crate::network::traversal::ConnectedFeature;

/// An assembled device on the district loop.
#[derive(Debug, Clone)]
pub enum NetworkComponent {
    Ets(Box<Ets>),
    Ghe(Box<Ghe>),
    Pump(Pump),
}

impl NetworkComponent {
    pub fn component_type(&self) -> ComponentType {
        match self {
            Self::Ets(_) => ComponentType::EnergyTransferStation,
            Self::Ghe(_) => ComponentType::GroundHeatExchanger,
            Self::Pump(_) => ComponentType::Pump,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Ets(ets) => &ets.name,
            Self::Ghe(ghe) => &ghe.name,
            Self::Pump(pump) => &pump.name,
        }
    }
}

/// The district thermal network being assembled for sizing.
#[derive(Debug, Default)]
pub struct Network {
    pub des_method: Option<DesignType>,
    /// Catalog of named component definitions.
    pub components_data: Vec<ComponentDef>,
    /// Devices on the loop, in loop order.
    pub network: Vec<NetworkComponent>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sizing method from its configured name.
    pub fn set_design(&mut self, des_method_str: &str) -> Result<()> {
        let method = DesignType::from_str(des_method_str)?;
        debug!(%method, "design method set");
        self.des_method = Some(method);
        Ok(())
    }

    /// Rejects a name that already exists in the catalog for the same
    /// component type.
    pub fn check_for_existing_component(&self, name: &str, comp_type: ComponentType) -> Result<()> {
        if self
            .components_data
            .iter()
            .any(|c| c.name == name && c.kind.component_type() == comp_type)
        {
            return Err(NetworkError::DuplicateComponent {
                name: name.to_string(),
                comp_type: comp_type.as_str().to_string(),
            });
        }
        Ok(())
    }

    /// Seeds the default equipment catalog and appends the given component
    /// definitions.
    ///
    /// # Errors
    ///
    /// Returns an error when a definition duplicates an existing name and
    /// type.
    pub fn set_components(&mut self, comp_data_list: Vec<ComponentDef>) -> Result<()> {
        self.components_data.push(ComponentDef::new(
            "",
            "ets pump",
            ComponentKind::Pump(PumpProperties {
                design_flow_rate: 0.0005,
                design_head: 100_000.0,
                motor_efficiency: 0.9,
                motor_inefficiency_to_fluid_stream: 1.0,
            }),
        ));
        self.components_data.push(ComponentDef::new(
            "",
            "simple fan",
            ComponentKind::Fan(FanProperties {
                design_flow_rate: 0.25,
                design_head: 150.0,
                motor_efficiency: 0.6,
            }),
        ));
        self.components_data.push(ComponentDef::new(
            "",
            "small wahp",
            ComponentKind::HeatPump(HeatPumpProperties {
                cop_c: 3.5,
                cop_h: 2.5,
            }),
        ));
        self.components_data.push(ComponentDef::new(
            "",
            "simple dhw",
            ComponentKind::Dhw(DhwProperties { cop_dhw: 2.5 }),
        ));

        for comp in comp_data_list {
            self.check_for_existing_component(&comp.name, comp.kind.component_type())?;
            self.components_data.push(comp);
        }
        Ok(())
    }

    /// Looks up a catalog entry by normalized name and component type.
    pub fn get_component(&self, name: &str, comp_type: ComponentType) -> Result<&ComponentDef> {
        let name_uc = name.trim().to_uppercase();
        self.components_data
            .iter()
            .find(|c| c.name == name_uc && c.kind.component_type() == comp_type)
            .ok_or_else(|| NetworkError::UnknownComponent {
                name: name_uc,
                comp_type: comp_type.as_str().to_string(),
            })
    }

    fn resolve_pump(&self, name: &str) -> Result<Pump> {
        let def = self.get_component(name, ComponentType::Pump)?;
        match &def.kind {
            ComponentKind::Pump(props) => Ok(Pump::new(&def.name, props.clone())),
            _ => Err(NetworkError::UnknownComponent {
                name: def.name.clone(),
                comp_type: ComponentType::Pump.as_str().to_string(),
            }),
        }
    }

    fn resolve_fan(&self, name: &str) -> Result<Fan> {
        let def = self.get_component(name, ComponentType::Fan)?;
        match &def.kind {
            ComponentKind::Fan(props) => Ok(Fan::new(&def.name, props.clone())),
            _ => Err(NetworkError::UnknownComponent {
                name: def.name.clone(),
                comp_type: ComponentType::Fan.as_str().to_string(),
            }),
        }
    }

    fn resolve_heat_pump(&self, name: &str) -> Result<HeatPump> {
        let def = self.get_component(name, ComponentType::HeatPump)?;
        match &def.kind {
            ComponentKind::HeatPump(props) => Ok(HeatPump::new(&def.name, props.clone())),
            _ => Err(NetworkError::UnknownComponent {
                name: def.name.clone(),
                comp_type: ComponentType::HeatPump.as_str().to_string(),
            }),
        }
    }

    fn resolve_dhw(&self, name: &str) -> Result<Dhw> {
        let def = self.get_component(name, ComponentType::HeatPump)?;
        match &def.kind {
            ComponentKind::Dhw(props) => Ok(Dhw::new(&def.name, props.clone())),
            _ => Err(NetworkError::UnknownComponent {
                name: def.name.clone(),
                comp_type: ComponentType::HeatPump.as_str().to_string(),
            }),
        }
    }

    /// Assembles an ETS from its catalog entry and appends it to the loop.
    ///
    /// Subcomponent names are resolved against the catalog and the hourly
    /// building loads are read from the referenced CSV export.
    pub fn add_ets_to_network(&mut self, name: &str) -> Result<()> {
        let def = self.get_component(name, ComponentType::EnergyTransferStation)?;
        let ComponentKind::Ets(props) = &def.kind else {
            return Err(NetworkError::UnknownComponent {
                name: def.name.clone(),
                comp_type: ComponentType::EnergyTransferStation.as_str().to_string(),
            });
        };
        let props: EtsProperties = props.clone();
        let ets_name = def.name.clone();

        let ets = Ets {
            name: ets_name,
            heat_pump: self.resolve_heat_pump(&props.heat_pump)?,
            load_side_pump: self.resolve_pump(&props.load_side_pump)?,
            source_side_pump: self.resolve_pump(&props.source_side_pump)?,
            fan: self.resolve_fan(&props.fan)?,
            dhw: self.resolve_dhw(&props.dhw)?,
            space_loads: read_building_loads(&props.space_loads_file)?,
        };
        self.network.push(NetworkComponent::Ets(Box::new(ets)));
        Ok(())
    }

    /// Appends a GHE from its catalog entry to the loop.
    pub fn add_ghe_to_network(&mut self, name: &str) -> Result<()> {
        let def = self.get_component(name, ComponentType::GroundHeatExchanger)?;
        let ComponentKind::Ghe(props) = &def.kind else {
            return Err(NetworkError::UnknownComponent {
                name: def.name.clone(),
                comp_type: ComponentType::GroundHeatExchanger.as_str().to_string(),
            });
        };
        let ghe = Ghe {
            id: def.id.clone(),
            name: def.name.clone(),
            props: (**props).clone(),
            footprint: def.footprint.clone(),
        };
        self.network.push(NetworkComponent::Ghe(Box::new(ghe)));
        Ok(())
    }

    /// Appends a pump from its catalog entry to the loop.
    pub fn add_pump_to_network(&mut self, name: &str) -> Result<()> {
        let pump = self.resolve_pump(name)?;
        self.network.push(NetworkComponent::Pump(pump));
        Ok(())
    }

    /// Validates that every ETS carries the same number of hourly loads.
    ///
    /// # Errors
    ///
    /// Returns an error when the load series differ in length.
    pub fn set_component_network_loads(&self) -> Result<usize> {
        let len_loads: Vec<usize> = self
            .network
            .iter()
            .filter_map(|comp| match comp {
                NetworkComponent::Ets(ets) => Some(ets.space_loads.len()),
                _ => None,
            })
            .collect();

        let Some(first) = len_loads.first() else {
            return Ok(0);
        };
        if len_loads.iter().any(|len| len != first) {
            return Err(NetworkError::MismatchedLoads);
        }
        info!(stations = len_loads.len(), hours = first, "network loads validated");
        Ok(*first)
    }
}

/// Converts traversal output to component definitions, in loop order.
///
/// A primary circulation pump is prepended to the loop. Buildings become
/// energy transfer stations referencing the default equipment catalog and
/// their scenario loads export. District system features of type
/// `Ground Heat Exchanger` become GHEs with parameters from the system
/// parameter file.
///
/// # Errors
///
/// Returns an error when a building has no loads export under the scenario
/// directory, or a GHE feature has no matching `ghe_specific_params` entry.
pub fn convert_features(
    features: &[ConnectedFeature],
    scenario_directory: &Path,
    ghe_parameters: &GheParameters,
) -> Result<Vec<ComponentDef>> {
    let mut converted = vec![ComponentDef::new(
        "0",
        "primary pump",
        ComponentKind::Pump(PumpProperties {
            design_flow_rate: 0.01,
            design_head: 150_000.0,
            motor_efficiency: 0.9,
            motor_inefficiency_to_fluid_stream: 1.0,
        }),
    )];

    for feature in features {
        match feature.kind {
            FeatureKind::Building => {
                let loads_file = find_loads_file(scenario_directory, &feature.id)?;
                debug!(building = %feature.id, path = %loads_file.display(), "found building loads");
                converted.push(ComponentDef {
                    id: feature.id.clone(),
                    name: feature.name.trim().to_uppercase(),
                    kind: ComponentKind::Ets(EtsProperties {
                        heat_pump: "small wahp".to_string(),
                        load_side_pump: "ets pump".to_string(),
                        source_side_pump: "ets pump".to_string(),
                        fan: "simple fan".to_string(),
                        dhw: "simple dhw".to_string(),
                        space_loads_file: loads_file,
                    }),
                    footprint: None,
                });
            }
            FeatureKind::DistrictSystem => {
                if feature.district_system_type != "Ground Heat Exchanger" {
                    warn!(
                        id = %feature.id,
                        district_system_type = %feature.district_system_type,
                        "skipping unsupported district system feature"
                    );
                    continue;
                }
                let matching = ghe_parameters
                    .find_matching_ghe(&feature.id)
                    .ok_or_else(|| NetworkError::UnknownGhe(feature.id.clone()))?;

                let mut geometric_constraints = ghe_parameters.geometric_constraints.clone();
                geometric_constraints.length = matching.ghe_geometric_params.length_of_ghe;
                geometric_constraints.width = matching.ghe_geometric_params.width_of_ghe;

                converted.push(ComponentDef {
                    id: feature.id.clone(),
                    name: feature.name.trim().to_uppercase(),
                    kind: ComponentKind::Ghe(Box::new(GheProperties {
                        fluid: ghe_parameters.fluid.clone(),
                        grout: ghe_parameters.grout.clone(),
                        soil: ghe_parameters.soil.clone(),
                        pipe: ghe_parameters.pipe.clone(),
                        borehole: matching.borehole.clone(),
                        simulation: ghe_parameters.simulation.clone(),
                        geometric_constraints,
                        design: ghe_parameters.design.clone(),
                        ground_loads: matching.ground_loads.clone(),
                    })),
                    footprint: feature.polygon.clone(),
                });
            }
            _ => {}
        }
    }

    Ok(converted)
}
