use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::http::structs::board_service_data::BoardServiceData;
use crate::tracking::structs::tracking_manager::TrackingManager;

impl BoardServiceData {
    pub fn new(
        tracking: Arc<TrackingManager>,
        database: Arc<dyn DatabaseBackend>,
        config: Arc<Configuration>,
        http_server_config: Arc<HttpServerConfig>
    ) -> BoardServiceData
    {
        BoardServiceData {
            tracking,
            database,
            config,
            http_server_config,
        }
    }
}

impl fmt::Debug for BoardServiceData {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("BoardServiceData")
            .field("tracking", &self.tracking)
            .field("bind_address", &self.http_server_config.bind_address)
            .finish()
    }
}
