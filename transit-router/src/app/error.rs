use transit_router_core::CoreError;

/// Aggregate error for the coordination/I/O layer, composed from the engine's own
/// `CoreError` plus failures specific to this layer.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid coordinates: lat={lat}, lon={lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },
    #[error(transparent)]
    CoreFailure(#[from] CoreError),
    #[error("cache error: {0}")]
    CacheFailure(String),
    #[error("configuration error: {0}")]
    ConfigFailure(#[from] config::ConfigError),
    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("internal error: {0}")]
    InternalError(String),
}
