use thiserror::Error;

/// Top-level error type for wire comb construction.
#[derive(Debug, Error)]
pub enum WireCombError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Csg(#[from] CsgError),
}

/// Errors raised while validating or loading comb parameters.
///
/// These are always detected before any geometry is constructed.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("parameter {parameter} = {value} must be {constraint}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        constraint: &'static str,
    },

    #[error("hole count must be at least 1, got {0}")]
    InvalidHoleCount(u32),

    #[error("unknown piece variant: {0:?}")]
    UnknownPiece(String),

    #[error("unknown row slot {0}, expected 1 or 2")]
    UnknownRow(u8),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors related to geometric construction or evaluation.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("pattern must contain at least one instance")]
    EmptyPattern,

    #[error("geometry kernel failed: {0}")]
    Kernel(String),

    #[error("geometry kernel returned a malformed mesh: {0}")]
    MalformedMesh(String),
}

/// Errors related to the CSG node store.
#[derive(Debug, Error)]
pub enum CsgError {
    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("{0} node requires at least one operand")]
    MissingOperand(&'static str),
}

/// Convenience type alias for results using [`WireCombError`].
pub type Result<T> = std::result::Result<T, WireCombError>;
