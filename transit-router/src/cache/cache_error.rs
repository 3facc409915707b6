#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),
    #[error("cache payload could not be (de)serialized: {0}")]
    Serde(#[from] serde_json::Error),
}
