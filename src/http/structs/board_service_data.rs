use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::tracking::structs::tracking_manager::TrackingManager;

pub struct BoardServiceData {
    pub tracking: Arc<TrackingManager>,
    pub database: Arc<dyn DatabaseBackend>,
    pub config: Arc<Configuration>,
    pub http_server_config: Arc<HttpServerConfig>
}
