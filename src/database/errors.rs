use thiserror::Error;
use crate::database::enums::database_drivers::DatabaseDrivers;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    #[error("Database engine {0:?} is not connected")]
    EngineNotConnected(DatabaseDrivers),
}
