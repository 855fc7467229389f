use serde::{Deserialize, Serialize};
use crate::config::structs::board_config::BoardConfig;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracking_config::TrackingConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub board: BoardConfig,
    pub tracking: TrackingConfig,
    pub database: DatabaseConfig,
    pub database_structure: DatabaseStructureConfig,
    pub http_server: Vec<HttpServerConfig>,
    pub sentry_config: SentryConfig
}
