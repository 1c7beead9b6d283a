/// Why a `matrix3d(...)` value could not be read as 16 components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("no matrix3d(...) value found")]
    MissingPattern,
    #[error("matrix3d expects 16 components, found {found}")]
    ComponentCount { found: usize },
    #[error("component {index} is not a finite number: {token:?}")]
    InvalidComponent { index: usize, token: String },
}

/// Rejected transform options.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("precision {precision} is out of range (maximum {max})")]
    PrecisionOutOfRange { precision: usize, max: usize },
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
}
