use std::sync::Mutex;
use std::time::{Duration, Instant};

use r2d2::Pool;
use redis::Commands;

use crate::app::request::RouteResult;

use super::cache_error::CacheError;

/// How long `wait_for` sleeps between polls of the lock.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The shared distributed key-value store backing [`crate::app::query_coordinator`]'s
/// single-flight protocol. `get`/`put` hold computed results; `try_acquire`/
/// `release`/`wait_for` coordinate which caller computes a cold entry.
pub trait ResultCache: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<RouteResult>, CacheError>;
    fn put(&self, key: &str, result: &RouteResult, result_ttl: Duration) -> Result<(), CacheError>;
    fn try_acquire(&self, lock_key: &str, lock_ttl: Duration) -> Result<bool, CacheError>;
    fn release(&self, lock_key: &str) -> Result<(), CacheError>;
    fn lock_exists(&self, lock_key: &str) -> Result<bool, CacheError>;
    fn ping(&self) -> Result<(), CacheError>;

    /// Polls `lock_key` until it disappears or `max_wait` elapses, then returns
    /// whatever is stored under `key` (absent if the leader produced nothing).
    fn wait_for(
        &self,
        key: &str,
        lock_key: &str,
        max_wait: Duration,
    ) -> Result<Option<RouteResult>, CacheError> {
        let deadline = Instant::now() + max_wait;
        while Instant::now() < deadline {
            if !self.lock_exists(lock_key)? {
                return self.get(key);
            }
            std::thread::sleep(POLL_INTERVAL);
        }
        self.get(key)
    }
}

/// Redis-compatible implementation, reached through a pooled connection handle
/// since the underlying client is not safe to share unsynchronised across
/// threads.
pub struct RedisResultCache {
    pool: Pool<redis::Client>,
}

impl RedisResultCache {
    pub fn new(redis_url: &str) -> Result<Self, CacheError> {
        let client =
            redis::Client::open(redis_url).map_err(|e| CacheError::Unavailable(e.to_string()))?;
        let pool = Pool::builder()
            .build(client)
            .map_err(|e| CacheError::Unavailable(e.to_string()))?;
        Ok(Self { pool })
    }

    fn conn(&self) -> Result<r2d2::PooledConnection<redis::Client>, CacheError> {
        self.pool
            .get()
            .map_err(|e| CacheError::Unavailable(e.to_string()))
    }
}

impl ResultCache for RedisResultCache {
    fn get(&self, key: &str) -> Result<Option<RouteResult>, CacheError> {
        let mut conn = self.conn()?;
        let raw: Option<String> = conn
            .get(key)
            .map_err(|e| CacheError::Unavailable(e.to_string()))?;
        raw.map(|s| serde_json::from_str(&s).map_err(CacheError::from))
            .transpose()
    }

    fn put(&self, key: &str, result: &RouteResult, result_ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.conn()?;
        let raw = serde_json::to_string(result)?;
        let _: () = conn
            .set_ex(key, raw, result_ttl.as_secs().max(1))
            .map_err(|e| CacheError::Unavailable(e.to_string()))?;
        Ok(())
    }

    fn try_acquire(&self, lock_key: &str, lock_ttl: Duration) -> Result<bool, CacheError> {
        let mut conn = self.conn()?;
        let acquired: bool = redis::cmd("SET")
            .arg(lock_key)
            .arg(1)
            .arg("NX")
            .arg("EX")
            .arg(lock_ttl.as_secs().max(1))
            .query(&mut *conn)
            .map_err(|e| CacheError::Unavailable(e.to_string()))?;
        Ok(acquired)
    }

    fn release(&self, lock_key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn()?;
        let _: () = conn
            .del(lock_key)
            .map_err(|e| CacheError::Unavailable(e.to_string()))?;
        Ok(())
    }

    fn lock_exists(&self, lock_key: &str) -> Result<bool, CacheError> {
        let mut conn = self.conn()?;
        let exists: bool = conn
            .exists(lock_key)
            .map_err(|e| CacheError::Unavailable(e.to_string()))?;
        Ok(exists)
    }

    fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.conn()?;
        let _: String = redis::cmd("PING")
            .query(&mut *conn)
            .map_err(|e| CacheError::Unavailable(e.to_string()))?;
        Ok(())
    }
}

/// In-process stand-in backing tests that exercise the single-flight protocol
/// without a live Redis server. Locks and entries share one mutex-guarded
/// map, which is enough to model the atomic test-and-set `try_acquire` relies on.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Default)]
pub struct InMemoryResultCache {
    entries: Mutex<std::collections::HashMap<String, String>>,
    locks: Mutex<std::collections::HashSet<String>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl InMemoryResultCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl ResultCache for InMemoryResultCache {
    fn get(&self, key: &str) -> Result<Option<RouteResult>, CacheError> {
        let entries = self.entries.lock().expect("cache mutex poisoned");
        entries
            .get(key)
            .map(|raw| serde_json::from_str(raw).map_err(CacheError::from))
            .transpose()
    }

    fn put(&self, key: &str, result: &RouteResult, _result_ttl: Duration) -> Result<(), CacheError> {
        let raw = serde_json::to_string(result)?;
        self.entries
            .lock()
            .expect("cache mutex poisoned")
            .insert(key.to_string(), raw);
        Ok(())
    }

    fn try_acquire(&self, lock_key: &str, _lock_ttl: Duration) -> Result<bool, CacheError> {
        let mut locks = self.locks.lock().expect("lock mutex poisoned");
        Ok(locks.insert(lock_key.to_string()))
    }

    fn release(&self, lock_key: &str) -> Result<(), CacheError> {
        self.locks
            .lock()
            .expect("lock mutex poisoned")
            .remove(lock_key);
        Ok(())
    }

    fn lock_exists(&self, lock_key: &str) -> Result<bool, CacheError> {
        Ok(self
            .locks
            .lock()
            .expect("lock mutex poisoned")
            .contains(lock_key))
    }

    fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use transit_router_core::assemble::Path;

    fn sample_result() -> RouteResult {
        Path {
            strategy_name: "fast".to_string(),
            duration_seconds: 120,
            walk_distance_meters: 50,
            transfers: 0,
            steps: Vec::new(),
        }
        .into()
    }

    #[test]
    fn get_is_empty_before_any_put() {
        let cache = InMemoryResultCache::new();
        assert_eq!(cache.get("route:abc:fast").unwrap(), None);
    }

    #[test]
    fn put_then_get_round_trips_the_result() {
        let cache = InMemoryResultCache::new();
        let result = sample_result();
        cache.put("route:abc:fast", &result, Duration::from_secs(600)).unwrap();
        assert_eq!(cache.get("route:abc:fast").unwrap(), Some(result));
    }

    #[test]
    fn try_acquire_is_exclusive_until_released() {
        let cache = InMemoryResultCache::new();
        assert!(cache.try_acquire("lock:route:abc:fast", Duration::from_secs(5)).unwrap());
        assert!(!cache.try_acquire("lock:route:abc:fast", Duration::from_secs(5)).unwrap());
        cache.release("lock:route:abc:fast").unwrap();
        assert!(cache.try_acquire("lock:route:abc:fast", Duration::from_secs(5)).unwrap());
    }

    #[test]
    fn lock_exists_reflects_acquire_and_release() {
        let cache = InMemoryResultCache::new();
        assert!(!cache.lock_exists("lock:route:abc:fast").unwrap());
        cache.try_acquire("lock:route:abc:fast", Duration::from_secs(5)).unwrap();
        assert!(cache.lock_exists("lock:route:abc:fast").unwrap());
        cache.release("lock:route:abc:fast").unwrap();
        assert!(!cache.lock_exists("lock:route:abc:fast").unwrap());
    }

    #[test]
    fn wait_for_returns_immediately_once_lock_is_gone() {
        let cache = InMemoryResultCache::new();
        let result = sample_result();
        cache.put("route:abc:fast", &result, Duration::from_secs(600)).unwrap();
        let found = cache
            .wait_for("route:abc:fast", "lock:route:abc:fast", Duration::from_millis(50))
            .unwrap();
        assert_eq!(found, Some(result));
    }
}
