//! Integration tests for the district loop traversal.

mod common;

use thermalnetwork::geojson::{FeatureCollection, FeatureKind};
use thermalnetwork::network::{
    find_startloop_feature_id, get_connected_features, reorder_connected_features,
};

fn fixture_collection() -> FeatureCollection {
    serde_json::from_value(common::district_geojson()).expect("fixture should parse")
}

#[test]
fn start_loop_marker_resolves_to_building() {
    let collection = fixture_collection();
    assert_eq!(
        find_startloop_feature_id(&collection.features),
        Some("b2".to_string())
    );
}

#[test]
fn traversal_and_reorder_produce_loop_order() {
    let collection = fixture_collection();
    let mut connected = get_connected_features(&collection).expect("traversal should succeed");
    reorder_connected_features(&mut connected);

    let ids: Vec<&str> = connected.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["b2", "ghe-1", "b1"]);

    assert!(connected[0].start_loop);
    assert_eq!(connected[0].kind, FeatureKind::Building);
    assert_eq!(connected[1].kind, FeatureKind::DistrictSystem);
    assert_eq!(connected[1].district_system_type, "Ground Heat Exchanger");
    assert!(connected[1].polygon.is_some());
}

#[test]
fn junctions_and_connectors_are_not_loop_members() {
    let collection = fixture_collection();
    let connected = get_connected_features(&collection).expect("traversal should succeed");
    assert!(connected.iter().all(|f| f.id != "j1"));
    assert!(connected.iter().all(|f| !f.id.starts_with('c')));
}
