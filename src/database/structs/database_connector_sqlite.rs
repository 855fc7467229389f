use sqlx::{Pool, Sqlite};
use crate::config::structs::database_structure_config_posts::DatabaseStructureConfigPosts;

#[derive(Debug, Clone)]
pub struct DatabaseConnectorSQLite {
    pub(crate) pool: Pool<Sqlite>,
    pub(crate) structure: DatabaseStructureConfigPosts,
}
