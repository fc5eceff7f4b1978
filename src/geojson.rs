//! Serde model for the district network GeoJSON feature collection.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{NetworkError, Result};
use crate::geometry::Ring;

/// A GeoJSON feature collection as exported by the district design tool.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Loads a feature collection from a GeoJSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(NetworkError::MissingInput(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// One georeferenced feature with a free-form properties mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// Raw feature geometry; coordinates are kept untyped since only polygons
/// are interpreted further.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Value,
}

/// The feature categories participating in network assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Building,
    DistrictSystem,
    ThermalConnector,
    ThermalJunction,
}

impl FeatureKind {
    /// Maps the GeoJSON `type` property to a feature kind.
    pub fn from_property(value: &str) -> Option<Self> {
        match value {
            "Building" => Some(Self::Building),
            "District System" => Some(Self::DistrictSystem),
            "ThermalConnector" => Some(Self::ThermalConnector),
            "ThermalJunction" => Some(Self::ThermalJunction),
            _ => None,
        }
    }

    /// The GeoJSON `type` property string for this kind.
    pub fn as_property(&self) -> &'static str {
        match self {
            Self::Building => "Building",
            Self::DistrictSystem => "District System",
            Self::ThermalConnector => "ThermalConnector",
            Self::ThermalJunction => "ThermalJunction",
        }
    }
}

impl Feature {
    /// String-valued property lookup.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    /// The feature `id` property.
    pub fn id(&self) -> Option<&str> {
        self.property_str("id")
    }

    /// The feature `name` property, empty when absent.
    pub fn name(&self) -> &str {
        self.property_str("name").unwrap_or("")
    }

    /// The feature kind derived from the `type` property.
    pub fn kind(&self) -> Option<FeatureKind> {
        self.property_str("type").and_then(FeatureKind::from_property)
    }

    /// Whether this feature carries the start-loop marker.
    ///
    /// The marker is written as the string `"true"` by the exporter, but a
    /// boolean is also accepted.
    pub fn is_start_loop(&self) -> bool {
        match self.properties.get("start_loop") {
            Some(Value::String(s)) => s == "true",
            Some(Value::Bool(b)) => *b,
            _ => false,
        }
    }

    /// The outer rings of a polygon geometry, when present.
    ///
    /// Supports `Polygon` coordinates only; other geometry types yield
    /// `None`.
    pub fn polygon_rings(&self) -> Option<Vec<Ring>> {
        let geometry = self.geometry.as_ref()?;
        if geometry.kind != "Polygon" {
            return None;
        }
        let rings = geometry.coordinates.as_array()?;
        let mut out = Vec::with_capacity(rings.len());
        for ring in rings {
            let pts = ring.as_array()?;
            let mut converted = Vec::with_capacity(pts.len());
            for pt in pts {
                let coords = pt.as_array()?;
                let x = coords.first().and_then(Value::as_f64)?;
                let y = coords.get(1).and_then(Value::as_f64)?;
                converted.push([x, y]);
            }
            out.push(converted);
        }
        Some(out)
    }
}
