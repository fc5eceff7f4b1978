//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while assembling or sizing a thermal network.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("no input file found at {}", .0.display())]
    MissingInput(PathBuf),

    #[error("system parameter version {found} does not match supported version {expected}")]
    VersionMismatch { expected: u64, found: u64 },

    #[error("config error: {field}: {message}")]
    Config { field: String, message: String },

    #[error("no thermal connectors in feature collection")]
    NoConnectors,

    #[error("feature \"{id}\" is missing required property \"{key}\"")]
    MissingProperty { id: String, key: String },

    #[error("duplicate {comp_type} name \"{name}\" encountered")]
    DuplicateComponent { name: String, comp_type: String },

    #[error("unknown {comp_type} component \"{name}\"")]
    UnknownComponent { name: String, comp_type: String },

    #[error("design method \"{0}\" not supported")]
    UnsupportedDesignMethod(String),

    #[error("unsupported component type \"{0}\"")]
    UnsupportedComponentType(String),

    #[error("unsupported fluid \"{0}\"")]
    UnsupportedFluid(String),

    #[error("no GHE parameters found for feature \"{0}\"")]
    UnknownGhe(String),

    #[error("building loads file not found for building \"{0}\"")]
    MissingLoadsFile(String),

    #[error("loads file {}: {message}", .path.display())]
    Loads { path: PathBuf, message: String },

    #[error("not all loads are of equal length")]
    MismatchedLoads,

    #[error("total GHE area is zero, cannot distribute network loads")]
    ZeroGheArea,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetworkError>;
