use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rayon::prelude::*;
use transit_router_core::algorithm::search;
use transit_router_core::assemble::PathAssembler;
use transit_router_core::map::SpatialIndex;
use transit_router_core::model::graph::{GraphSnapshot, GraphStore};
use transit_router_core::model::stop::StopId;
use transit_router_core::strategy::{self, Strategy};

use super::config::CacheConfig;
use super::error::AppError;
use super::request::{RouteRequest, RouteResponse, RouteResult};
use crate::cache::{fingerprint, lock_key, ResultCache};

/// number of nearby stops considered per endpoint; generous relative to the
/// spatial index's own per-class caps (2 mass-transit + 3 regular) so every
/// eligible candidate reaches the search.
const CANDIDATE_LIMIT: usize = 20;

/// margin added to `lock_ttl` when a follower waits on another worker's
/// in-flight computation.
const WAIT_MARGIN: Duration = Duration::from_millis(200);

/// Validates inputs, computes candidates once per request, fans the four
/// strategies out in parallel, and runs each through the single-flight cache
/// protocol.
pub struct QueryCoordinator {
    graph_store: Arc<GraphStore>,
    spatial_cache: Mutex<Option<(Arc<GraphSnapshot>, Arc<SpatialIndex>)>>,
    cache: Arc<dyn ResultCache>,
    result_ttl: Duration,
    lock_ttl: Duration,
}

impl QueryCoordinator {
    pub fn new(graph_store: Arc<GraphStore>, cache: Arc<dyn ResultCache>, cache_config: &CacheConfig) -> Self {
        Self {
            graph_store,
            spatial_cache: Mutex::new(None),
            cache,
            result_ttl: Duration::from_secs(cache_config.result_ttl_seconds),
            lock_ttl: Duration::from_secs(cache_config.lock_ttl_seconds),
        }
    }

    /// Returns the [`SpatialIndex`] for `snapshot`, rebuilding only when the
    /// snapshot pointer has changed since the last request (mirrors how the
    /// backing graph is itself swapped atomically).
    fn spatial_index_for(&self, snapshot: &Arc<GraphSnapshot>) -> Arc<SpatialIndex> {
        let mut guard = self.spatial_cache.lock().expect("spatial cache poisoned");
        if let Some((cached_snapshot, index)) = guard.as_ref() {
            if Arc::ptr_eq(cached_snapshot, snapshot) {
                return Arc::clone(index);
            }
        }
        let index = Arc::new(SpatialIndex::build(snapshot));
        *guard = Some((Arc::clone(snapshot), Arc::clone(&index)));
        index
    }

    pub fn route_search(&self, request: RouteRequest) -> Result<RouteResponse, AppError> {
        request.validate()?;

        let snapshot = self.graph_store.snapshot();
        let spatial_index = self.spatial_index_for(&snapshot);

        let origins = spatial_index.candidates(request.from, &snapshot, CANDIDATE_LIMIT);
        let destinations = spatial_index.candidates(request.to, &snapshot, CANDIDATE_LIMIT);
        if origins.is_empty() || destinations.is_empty() {
            log::info!("no candidate stops near origin or destination, returning no routes");
            return Ok(RouteResponse::new());
        }

        let destination_stops: HashSet<StopId> = destinations
            .iter()
            .map(|c| {
                snapshot
                    .get_node(c.node_id)
                    .map(|n| n.stop_id.clone())
                    .map_err(|e| AppError::CoreFailure(e.into()))
            })
            .collect::<Result<_, AppError>>()?;

        let strategies = strategy::all();
        let results: Vec<(String, Option<RouteResult>)> = strategies
            .par_iter()
            .map(|strategy| {
                self.run_strategy(
                    strategy.as_ref(),
                    request,
                    &snapshot,
                    &origins,
                    &destination_stops,
                )
                .map(|result| (strategy.name().to_string(), result))
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let response: RouteResponse = results
            .into_iter()
            .filter_map(|(name, result)| result.map(|r| (name, r)))
            .collect();
        Ok(response)
    }

    /// Runs the single-flight protocol for one strategy, then the A*
    /// search plus assembly on a cache miss.
    fn run_strategy(
        &self,
        strategy: &dyn Strategy,
        request: RouteRequest,
        snapshot: &Arc<GraphSnapshot>,
        origins: &[transit_router_core::map::BoardingCandidate],
        destination_stops: &HashSet<StopId>,
    ) -> Result<Option<RouteResult>, AppError> {
        let key = fingerprint(request.from, request.to, strategy.name());

        if let Some(hit) = self.get_or_bypass(&key) {
            return Ok(Some(hit));
        }

        let lock = lock_key(&key);
        let acquired = self.try_acquire_or_bypass(&lock);

        if acquired {
            let computed = self.compute(strategy, request, snapshot, origins, destination_stops);
            if let Ok(Some(result)) = &computed {
                if let Err(e) = self.cache.put(&key, result, self.result_ttl) {
                    log::warn!("cache put failed, continuing uncached: {e}");
                }
            }
            if let Err(e) = self.cache.release(&lock) {
                log::warn!("cache lock release failed: {e}");
            }
            computed
        } else {
            let max_wait = self.lock_ttl + WAIT_MARGIN;
            match self.cache.wait_for(&key, &lock, max_wait) {
                Ok(Some(result)) => Ok(Some(result)),
                Ok(None) => {
                    self.compute(strategy, request, snapshot, origins, destination_stops)
                }
                Err(e) => {
                    log::warn!("cache wait_for failed, falling back to local compute: {e}");
                    self.compute(strategy, request, snapshot, origins, destination_stops)
                }
            }
        }
    }

    fn get_or_bypass(&self, key: &str) -> Option<RouteResult> {
        match self.cache.get(key) {
            Ok(hit) => hit,
            Err(e) => {
                log::warn!("cache get failed, bypassing cache: {e}");
                None
            }
        }
    }

    fn try_acquire_or_bypass(&self, lock: &str) -> bool {
        match self.cache.try_acquire(lock, self.lock_ttl) {
            Ok(acquired) => acquired,
            Err(e) => {
                log::warn!("cache try_acquire failed, computing without a lock: {e}");
                true
            }
        }
    }

    fn compute(
        &self,
        strategy: &dyn Strategy,
        request: RouteRequest,
        snapshot: &Arc<GraphSnapshot>,
        origins: &[transit_router_core::map::BoardingCandidate],
        destination_stops: &HashSet<StopId>,
    ) -> Result<Option<RouteResult>, AppError> {
        let raw = search::search(snapshot, origins, destination_stops, request.to, strategy)
            .map_err(|e| AppError::CoreFailure(e.into()))?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        let path = PathAssembler::assemble(&raw, snapshot, request.from, request.to, strategy.name())
            .map_err(|e| AppError::CoreFailure(e.into()))?;
        Ok(Some(path.into()))
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use transit_router_core::model::route::TransitMode;
    use transit_router_core::testing::MockGraphBuilder;

    use super::*;
    use crate::cache::InMemoryResultCache;

    fn cache_config() -> CacheConfig {
        CacheConfig {
            redis_url: "unused".to_string(),
            result_ttl_seconds: 600,
            lock_ttl_seconds: 5,
        }
    }

    /// S1: stops A-B-C on one route, far enough apart that candidate lookup near
    /// each endpoint only ever resolves to the matching stop.
    fn single_line_snapshot() -> transit_router_core::model::graph::GraphSnapshot {
        let mut builder = MockGraphBuilder::new();
        let a = builder.add_node("A", "Stop A", 0.0, 0.0, "R1", "Route 1", TransitMode::Bus);
        let b = builder.add_node("B", "Stop B", 0.05, 0.0, "R1", "Route 1", TransitMode::Bus);
        let c = builder.add_node("C", "Stop C", 0.10, 0.0, "R1", "Route 1", TransitMode::Bus);
        builder.add_ride(a, b, 300.0);
        builder.add_ride(b, c, 300.0);
        builder.build()
    }

    fn coordinator_over(
        snapshot: transit_router_core::model::graph::GraphSnapshot,
        cache: Arc<dyn ResultCache>,
    ) -> QueryCoordinator {
        let store = Arc::new(GraphStore::new(snapshot));
        QueryCoordinator::new(store, cache, &cache_config())
    }

    #[test]
    fn s1_single_line_has_no_transfers_on_every_strategy() {
        let cache: Arc<dyn ResultCache> = Arc::new(InMemoryResultCache::new());
        let coordinator = coordinator_over(single_line_snapshot(), cache);

        let response = coordinator
            .route_search(RouteRequest {
                from: (0.0, 0.0),
                to: (0.10, 0.0),
            })
            .unwrap();

        assert!(!response.is_empty());
        for (name, result) in &response {
            assert_eq!(result.transfers, 0, "strategy {name} should need no transfer");
        }
    }

    #[test]
    fn s2_forced_transfer_is_absent_for_no_transfer_and_direct() {
        let mut builder = MockGraphBuilder::new();
        let a = builder.add_node("A", "Stop A", 0.0, 0.0, "R1", "Route 1", TransitMode::Bus);
        let b1 = builder.add_node("B", "Stop B", 0.05, 0.0, "R1", "Route 1", TransitMode::Bus);
        let b2 = builder.add_node("B", "Stop B", 0.05, 0.0, "R2", "Route 2", TransitMode::Bus);
        let c = builder.add_node("C", "Stop C", 0.10, 0.0, "R2", "Route 2", TransitMode::Bus);
        builder.add_ride(a, b1, 300.0);
        builder.add_transfer(b1, b2, 60.0);
        builder.add_ride(b2, c, 300.0);
        let snapshot = builder.build();

        let cache: Arc<dyn ResultCache> = Arc::new(InMemoryResultCache::new());
        let coordinator = coordinator_over(snapshot, cache);

        let response = coordinator
            .route_search(RouteRequest {
                from: (0.0, 0.0),
                to: (0.10, 0.0),
            })
            .unwrap();

        assert!(!response.contains_key("no_transfer"));
        assert!(!response.contains_key("direct"));
        assert!(response.contains_key("simple"));
        assert!(response.contains_key("fast"));
        assert_eq!(response["simple"].transfers, 1);
    }

    #[test]
    fn s4_no_candidate_near_destination_returns_no_routes() {
        let cache: Arc<dyn ResultCache> = Arc::new(InMemoryResultCache::new());
        let coordinator = coordinator_over(single_line_snapshot(), cache);

        let response = coordinator
            .route_search(RouteRequest {
                from: (0.0, 0.0),
                to: (10.0, 10.0),
            })
            .unwrap();

        assert!(response.is_empty());
    }

    #[test]
    fn s5_cache_hit_returns_identical_payload() {
        let cache: Arc<dyn ResultCache> = Arc::new(InMemoryResultCache::new());
        let coordinator = coordinator_over(single_line_snapshot(), cache);
        let request = RouteRequest {
            from: (0.0, 0.0),
            to: (0.10, 0.0),
        };

        let first = coordinator.route_search(request).unwrap();
        let second = coordinator.route_search(request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn property_10_rejects_out_of_range_coordinates() {
        let cache: Arc<dyn ResultCache> = Arc::new(InMemoryResultCache::new());
        let coordinator = coordinator_over(single_line_snapshot(), cache);

        let result = coordinator.route_search(RouteRequest {
            from: (95.0, 0.0),
            to: (0.10, 0.0),
        });
        assert!(matches!(result, Err(AppError::InvalidCoordinates { .. })));
    }

    /// counts `put` calls to approximate "the A* search runs at most once":
    /// without single-flight, every one of the concurrent callers below would
    /// independently compute and store a result per strategy.
    struct CountingCache {
        inner: InMemoryResultCache,
        puts: AtomicUsize,
    }

    impl ResultCache for CountingCache {
        fn get(&self, key: &str) -> Result<Option<RouteResult>, crate::cache::CacheError> {
            self.inner.get(key)
        }
        fn put(
            &self,
            key: &str,
            result: &RouteResult,
            result_ttl: Duration,
        ) -> Result<(), crate::cache::CacheError> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            self.inner.put(key, result, result_ttl)
        }
        fn try_acquire(&self, lock_key: &str, lock_ttl: Duration) -> Result<bool, crate::cache::CacheError> {
            self.inner.try_acquire(lock_key, lock_ttl)
        }
        fn release(&self, lock_key: &str) -> Result<(), crate::cache::CacheError> {
            self.inner.release(lock_key)
        }
        fn lock_exists(&self, lock_key: &str) -> Result<bool, crate::cache::CacheError> {
            self.inner.lock_exists(lock_key)
        }
        fn ping(&self) -> Result<(), crate::cache::CacheError> {
            self.inner.ping()
        }
    }

    #[test]
    fn s6_single_flight_caps_computations_at_one_per_strategy() {
        let cache = Arc::new(CountingCache {
            inner: InMemoryResultCache::new(),
            puts: AtomicUsize::new(0),
        });
        let dyn_cache: Arc<dyn ResultCache> = cache.clone();
        let coordinator = Arc::new(coordinator_over(single_line_snapshot(), dyn_cache));

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let coordinator = Arc::clone(&coordinator);
                thread::spawn(move || {
                    coordinator
                        .route_search(RouteRequest {
                            from: (0.0, 0.0),
                            to: (0.10, 0.0),
                        })
                        .unwrap()
                })
            })
            .collect();

        let mut responses = Vec::new();
        for handle in handles {
            responses.push(handle.join().unwrap());
        }
        for response in &responses[1..] {
            assert_eq!(response, &responses[0]);
        }
        assert!(cache.puts.load(Ordering::SeqCst) <= 4);
    }
}
