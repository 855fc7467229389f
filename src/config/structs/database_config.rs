use serde::{Deserialize, Serialize};
use crate::database::enums::database_drivers::DatabaseDrivers;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    pub engine: DatabaseDrivers,
    pub path: String
}
