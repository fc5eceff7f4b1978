//! Network component definitions and their load models.

pub mod dhw;
pub mod ets;
pub mod fan;
pub mod ghe;
pub mod heat_pump;
pub mod pump;
pub mod types;

pub use dhw::{Dhw, DhwProperties};
pub use ets::{Ets, EtsProperties};
pub use fan::{Fan, FanProperties};
pub use ghe::{Ghe, GheProperties};
pub use heat_pump::{HeatPump, HeatPumpProperties};
pub use pump::{Pump, PumpProperties};
pub use types::{ComponentType, DesignType};

use crate::geometry::Ring;

/// Typed properties for one catalog entry.
#[derive(Debug, Clone)]
pub enum ComponentKind {
    Ets(EtsProperties),
    Fan(FanProperties),
    Ghe(Box<GheProperties>),
    HeatPump(HeatPumpProperties),
    Dhw(DhwProperties),
    Pump(PumpProperties),
}

impl ComponentKind {
    /// The loop-level component type this entry matches as.
    ///
    /// DHW heat pumps match as heat pumps, the same way the other water
    /// source equipment does.
    pub fn component_type(&self) -> ComponentType {
        match self {
            Self::Ets(_) => ComponentType::EnergyTransferStation,
            Self::Fan(_) => ComponentType::Fan,
            Self::Ghe(_) => ComponentType::GroundHeatExchanger,
            Self::HeatPump(_) | Self::Dhw(_) => ComponentType::HeatPump,
            Self::Pump(_) => ComponentType::Pump,
        }
    }
}

/// A catalog entry: a named component definition awaiting assembly.
#[derive(Debug, Clone)]
pub struct ComponentDef {
    pub id: String,
    /// Uppercase name used for lookup.
    pub name: String,
    pub kind: ComponentKind,
    /// Borefield footprint for GHE entries, in (longitude, latitude).
    pub footprint: Option<Vec<Ring>>,
}

impl ComponentDef {
    pub fn new(id: &str, name: &str, kind: ComponentKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.trim().to_uppercase(),
            kind,
            footprint: None,
        }
    }

    pub fn with_footprint(mut self, footprint: Option<Vec<Ring>>) -> Self {
        self.footprint = footprint;
        self
    }
}
