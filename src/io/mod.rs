//! File IO: building loads CSV input and JSON document output.

pub mod export;
pub mod loads;

pub use export::{load_json, write_json};
pub use loads::{SpaceLoads, find_loads_file, read_building_loads};
