use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use log::error;
use transit_router_core::model::graph::GraphStore;

use super::cli_args::CliArgs;
use crate::app::{AppConfig, AppError, QueryCoordinator, RouteRequest};
use crate::cache::{RedisResultCache, ResultCache};

/// builds the app from `args.config_file` and runs every query in
/// `args.query_file` (newline-delimited JSON) through it, writing one
/// `RouteResponse` JSON object per line to stdout.
pub fn command_line_runner(args: &CliArgs) -> Result<(), AppError> {
    let config_path = Path::new(&args.config_file);
    let mut config = AppConfig::from_file(config_path)?;
    config.resolve_graph_paths(config_path);

    log::info!(
        "loading graph from {:?} / {:?}",
        config.graph.node_list_csv,
        config.graph.edge_list_csv
    );
    let graph_store = GraphStore::from_files(&config.graph.node_list_csv, &config.graph.edge_list_csv)
        .map_err(|e| AppError::CoreFailure(e.into()))?;

    let cache: Arc<dyn ResultCache> = Arc::new(
        RedisResultCache::new(&config.cache.redis_url)
            .map_err(|e| AppError::CacheFailure(e.to_string()))?,
    );
    if let Err(e) = cache.ping() {
        log::warn!("cache unreachable at startup, requests will bypass it until it recovers: {e}");
    }

    let coordinator = QueryCoordinator::new(Arc::new(graph_store), cache, &config.cache);

    log::info!("reading queries from {}", &args.query_file);
    let query_file = File::open(&args.query_file)?;
    let reader = BufReader::new(query_file);

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let request: RouteRequest = match serde_json::from_str(&line) {
            Ok(q) => q,
            Err(e) => {
                error!("failed to parse query on line {}: {}", line_number + 1, e);
                continue;
            }
        };

        match coordinator.route_search(request) {
            Ok(response) => {
                let output = serde_json::to_string(&response)?;
                println!("{output}");
            }
            Err(e) => error!("query on line {} failed: {}", line_number + 1, e),
        }
    }

    Ok(())
}
