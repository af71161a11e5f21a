use thiserror::Error;

/// Top-level error type for the Atom geometry library.
#[derive(Debug, Error)]
pub enum AtomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors raised by degenerate or invalid shape parameters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("radius must not be negative, got {radius}")]
    NegativeRadius { radius: f64 },

    #[error("points must be distinct")]
    CoincidentPoints,
}

/// Errors raised by invalid arguments to shape operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors related to polygon triangulation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`AtomError`].
pub type Result<T> = std::result::Result<T, AtomError>;
