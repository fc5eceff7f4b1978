//! Component and design method identifiers.

use std::fmt;

use crate::error::{NetworkError, Result};

/// Component categories that can appear in the district loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    EnergyTransferStation,
    Fan,
    GroundHeatExchanger,
    HeatPump,
    Pump,
}

impl ComponentType {
    /// Canonical uppercase name used for component matching.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnergyTransferStation => "ENERGYTRANSFERSTATION",
            Self::Fan => "FAN",
            Self::GroundHeatExchanger => "GROUNDHEATEXCHANGER",
            Self::HeatPump => "HEATPUMP",
            Self::Pump => "PUMP",
        }
    }

    /// Parses a component type name, case-insensitively.
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "ENERGYTRANSFERSTATION" => Some(Self::EnergyTransferStation),
            "FAN" => Some(Self::Fan),
            "GROUNDHEATEXCHANGER" => Some(Self::GroundHeatExchanger),
            "HEATPUMP" => Some(Self::HeatPump),
            "PUMP" => Some(Self::Pump),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported network sizing methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignType {
    AreaProportional,
    Upstream,
}

impl DesignType {
    /// Parses a design method name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown method names.
    pub fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_uppercase().as_str() {
            "AREAPROPORTIONAL" => Ok(Self::AreaProportional),
            "UPSTREAM" => Ok(Self::Upstream),
            _ => Err(NetworkError::UnsupportedDesignMethod(value.to_string())),
        }
    }
}

impl fmt::Display for DesignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AreaProportional => "AREAPROPORTIONAL",
            Self::Upstream => "UPSTREAM",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_type_round_trip() {
        for t in [
            ComponentType::EnergyTransferStation,
            ComponentType::Fan,
            ComponentType::GroundHeatExchanger,
            ComponentType::HeatPump,
            ComponentType::Pump,
        ] {
            assert_eq!(ComponentType::from_str(t.as_str()), Some(t));
        }
        assert_eq!(ComponentType::from_str(" pump "), Some(ComponentType::Pump));
        assert_eq!(ComponentType::from_str("CHILLER"), None);
    }

    #[test]
    fn design_type_parsing() {
        assert_eq!(
            DesignType::from_str("areaproportional").expect("should parse"),
            DesignType::AreaProportional
        );
        assert_eq!(
            DesignType::from_str(" UPSTREAM ").expect("should parse"),
            DesignType::Upstream
        );
        assert!(DesignType::from_str("PROPORTIONAL").is_err());
    }
}
