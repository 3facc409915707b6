pub mod cache_error;
pub mod fingerprint;
pub mod result_cache;

pub use cache_error::CacheError;
pub use fingerprint::{fingerprint, lock_key};
pub use result_cache::ResultCache;

#[cfg(any(test, feature = "test-utils"))]
pub use result_cache::InMemoryResultCache;
