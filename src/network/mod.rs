//! District loop traversal, assembly, and sizing.

pub mod model;
pub mod sizing;
pub mod traversal;

pub use model::{Network, NetworkComponent, convert_features};
pub use traversal::{
    ConnectedFeature, find_startloop_feature_id, get_connected_features,
    reorder_connected_features,
};
