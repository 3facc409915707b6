use std::path::{Path, PathBuf};

use config::Config;
use serde::{Deserialize, Serialize};

use super::error::AppError;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphConfig {
    pub node_list_csv: PathBuf,
    pub edge_list_csv: PathBuf,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    pub redis_url: String,
    pub result_ttl_seconds: u64,
    pub lock_ttl_seconds: u64,
}

/// Walking speed and the `simple` strategy's flat per-transfer penalty,
/// both overridable from their compiled defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TunablesConfig {
    pub walking_speed_mps: f64,
    pub transfer_penalty_base_seconds: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SystemConfig {
    pub parallelism: usize,
}

/// Top-level TOML configuration, mirroring how the reference engine's own
/// application config layers a user file over an embedded set of defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub graph: GraphConfig,
    pub cache: CacheConfig,
    pub tunables: TunablesConfig,
    pub system: SystemConfig,
}

impl AppConfig {
    pub fn from_file(config_path: &Path) -> Result<Self, AppError> {
        let default_config = config::File::from_str(
            include_str!("config.default.toml"),
            config::FileFormat::Toml,
        );
        let config = Config::builder()
            .add_source(default_config)
            .add_source(config::File::from(config_path))
            .build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        Ok(app_config)
    }

    /// Resolves the graph CSV paths relative to the directory the config file lives in,
    /// the way the reference engine normalises its own file-backed config fields.
    pub fn resolve_graph_paths(&mut self, config_path: &Path) {
        let base = config_path.parent().unwrap_or_else(|| Path::new("."));
        if self.graph.node_list_csv.is_relative() {
            self.graph.node_list_csv = base.join(&self.graph.node_list_csv);
        }
        if self.graph.edge_list_csv.is_relative() {
            self.graph.edge_list_csv = base.join(&self.graph.edge_list_csv);
        }
    }
}
