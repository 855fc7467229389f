#![allow(dead_code)]
use std::sync::Arc;
use tempfile::TempDir;
use secret_board::config::structs::configuration::Configuration;
use secret_board::database::enums::database_drivers::DatabaseDrivers;
use secret_board::database::structs::database_connector::DatabaseConnector;
use secret_board::http::structs::board_service_data::BoardServiceData;
use secret_board::tracking::structs::tracking_manager::TrackingManager;

pub type TestConfig = Arc<Configuration>;

pub const TEST_PEPPER: &str = "Integration-Test-Pepper-0123456789-abcdef";
pub const USER_HEADER: &str = "X-Forwarded-User";

pub fn create_test_config(dir: &TempDir) -> TestConfig {
    let mut config = Configuration::init();
    config.tracking.pepper = TEST_PEPPER.to_string();
    config.database.engine = DatabaseDrivers::sqlite3;
    config.database.path = format!("sqlite://{}", dir.path().join("board.db").display());
    config.http_server[0].bind_address = "127.0.0.1:8000".to_string();
    Arc::new(config)
}

pub async fn create_test_service_data(config: TestConfig) -> Arc<BoardServiceData> {
    let database = DatabaseConnector::new(&config, true)
        .await
        .expect("sqlite database should open");
    let http_server_config = Arc::new(config.http_server[0].clone());
    Arc::new(BoardServiceData::new(
        Arc::new(TrackingManager::new(config.tracking.pepper.clone())),
        Arc::new(database),
        config,
        http_server_config,
    ))
}
