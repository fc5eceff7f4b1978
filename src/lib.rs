//! District thermal network assembly and ground heat exchanger sizing inputs.

pub mod components;
pub mod config;
pub mod error;
pub mod fluid;
pub mod geojson;
pub mod geometry;
pub mod io;
/// Network assembly, loop traversal, and load distribution.
pub mod network;
pub mod pipe;
pub mod projection;
pub mod runner;
pub mod utilities;

/// Schema version expected in the system parameter file.
pub const VERSION: u64 = 1;

/// Hourly timesteps in one simulated year.
pub const HOURS_IN_YEAR: usize = 8760;
