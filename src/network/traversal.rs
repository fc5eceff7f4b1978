//! Loop traversal over thermal connector edges.
//!
//! Connectors are directed edges between features. The traversal starts from
//! the first connector in the collection, follows `startFeatureId` to
//! `endFeatureId` chains until the loop closes or the chain dangles, and
//! keeps the building and district system features that were visited.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{NetworkError, Result};
use crate::geojson::{Feature, FeatureCollection, FeatureKind};
use crate::geometry::Ring;

/// A building or district system feature reached by the loop traversal.
#[derive(Debug, Clone)]
pub struct ConnectedFeature {
    pub id: String,
    pub kind: FeatureKind,
    pub name: String,
    /// The `district_system_type` property, empty for buildings.
    pub district_system_type: String,
    /// Remaining feature properties, with exporter-internal keys removed.
    pub properties: Map<String, Value>,
    /// Whether this feature carries the canonical loop origin marker.
    pub start_loop: bool,
    /// Polygon footprint in (longitude, latitude), when the feature has one.
    pub polygon: Option<Vec<Ring>>,
}

/// Finds the feature id marked as the loop origin.
///
/// The marker sits on a thermal junction, which points at its owner through
/// `buildingId` or `DSId`.
pub fn find_startloop_feature_id(features: &[Feature]) -> Option<String> {
    for feature in features {
        if feature.is_start_loop() {
            let owner = feature
                .property_str("buildingId")
                .or_else(|| feature.property_str("DSId"));
            return owner.map(str::to_string);
        }
    }
    None
}

/// Walks the connector chain and returns the connected building and district
/// system features, in collection order.
///
/// The walk starts at the first connector's `startFeatureId` and follows
/// matching edges until the loop closes on its starting feature. A dangling
/// chain (no connector continues from the last feature) ends the walk with a
/// warning rather than an error, since partial networks occur in practice.
///
/// # Errors
///
/// Returns an error when the collection has no thermal connectors, or when a
/// connector or connected feature is missing a required id property.
pub fn get_connected_features(collection: &FeatureCollection) -> Result<Vec<ConnectedFeature>> {
    let features = &collection.features;
    let connectors: Vec<&Feature> = features
        .iter()
        .filter(|f| f.kind() == Some(FeatureKind::ThermalConnector))
        .collect();

    let Some(first) = connectors.first() else {
        return Err(NetworkError::NoConnectors);
    };

    let startloop_feature_id = find_startloop_feature_id(features);

    let connector_property = |connector: &Feature, key: &str| -> Result<String> {
        connector
            .property_str(key)
            .map(str::to_string)
            .ok_or_else(|| NetworkError::MissingProperty {
                id: connector.id().unwrap_or("<unnamed connector>").to_string(),
                key: key.to_string(),
            })
    };

    let start_feature_id = connector_property(first, "startFeatureId")?;
    let mut connected_ids = vec![start_feature_id.clone()];

    loop {
        let last_id = connected_ids.last().cloned().unwrap_or_default();
        let mut next_feature_id = None;
        for connector in &connectors {
            if connector.property_str("startFeatureId") == Some(last_id.as_str()) {
                next_feature_id = Some(connector_property(connector, "endFeatureId")?);
                break;
            }
        }

        match next_feature_id {
            Some(next_id) => {
                if next_id == start_feature_id {
                    connected_ids.push(next_id);
                    debug!(features = connected_ids.len(), "district loop closed");
                    break;
                }
                // a revisited feature that is not the walk origin means the
                // connectors form a side loop; stop instead of spinning
                if connected_ids.contains(&next_id) {
                    warn!(
                        feature = %next_id,
                        "connector chain revisits a feature without closing the loop"
                    );
                    break;
                }
                connected_ids.push(next_id);
            }
            None => {
                warn!(
                    last_feature = %last_id,
                    "connector chain does not close back on its start"
                );
                break;
            }
        }
    }

    let mut connected = Vec::new();
    for feature in features {
        let kind = match feature.kind() {
            Some(k @ (FeatureKind::Building | FeatureKind::DistrictSystem)) => k,
            _ => continue,
        };
        let Some(feature_id) = feature.id() else {
            continue;
        };
        if !connected_ids.iter().any(|id| id == feature_id) {
            continue;
        }

        let mut properties = feature.properties.clone();
        properties.remove(":type");
        properties.remove(":name");

        connected.push(ConnectedFeature {
            id: feature_id.to_string(),
            kind,
            name: feature.name().to_string(),
            district_system_type: feature
                .property_str("district_system_type")
                .unwrap_or("")
                .to_string(),
            properties,
            start_loop: Some(feature_id) == startloop_feature_id.as_deref(),
            polygon: feature.polygon_rings(),
        });
    }

    Ok(connected)
}

/// Rotates the features so the start-loop feature comes first.
///
/// Leaves the order unchanged when no feature carries the marker, so a
/// missing marker cannot hang the caller.
pub fn reorder_connected_features(features: &mut [ConnectedFeature]) {
    if let Some(pos) = features.iter().position(|f| f.start_loop) {
        features.rotate_left(pos);
    } else {
        warn!("no start-loop feature found, keeping collection order");
    }
}
