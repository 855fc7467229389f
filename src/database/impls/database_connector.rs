use async_trait::async_trait;
use log::info;
use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::DatabaseError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::posts::structs::new_post::NewPost;
use crate::posts::structs::post::Post;

impl DatabaseConnector {
    pub async fn new(config: &Configuration, create_database: bool) -> Result<DatabaseConnector, DatabaseError>
    {
        let engine = config.database.engine;
        let structure = config.database_structure.posts.clone();
        let mut connector = DatabaseConnector {
            mysql: None,
            sqlite: None,
            pgsql: None,
            engine,
        };
        match engine {
            DatabaseDrivers::sqlite3 => {
                connector.sqlite = Some(DatabaseConnectorSQLite::connect(&config.database.path, structure).await?);
            }
            DatabaseDrivers::mysql => {
                connector.mysql = Some(DatabaseConnectorMySQL::connect(&config.database.path, structure).await?);
            }
            DatabaseDrivers::pgsql => {
                connector.pgsql = Some(DatabaseConnectorPgSQL::connect(&config.database.path, structure).await?);
            }
        }
        if create_database {
            info!("[BOOT] Database creation triggered for {:?}", engine);
            connector.create_tables().await?;
        }
        Ok(connector)
    }

    fn backend(&self) -> Result<&dyn DatabaseBackend, DatabaseError>
    {
        let backend: Option<&dyn DatabaseBackend> = match self.engine {
            DatabaseDrivers::sqlite3 => self.sqlite.as_ref().map(|db| db as &dyn DatabaseBackend),
            DatabaseDrivers::mysql => self.mysql.as_ref().map(|db| db as &dyn DatabaseBackend),
            DatabaseDrivers::pgsql => self.pgsql.as_ref().map(|db| db as &dyn DatabaseBackend),
        };
        backend.ok_or(DatabaseError::EngineNotConnected(self.engine))
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnector {
    async fn create_tables(&self) -> Result<(), DatabaseError>
    {
        self.backend()?.create_tables().await
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, DatabaseError>
    {
        self.backend()?.create_post(post).await
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DatabaseError>
    {
        self.backend()?.list_posts().await
    }

    async fn find_post(&self, id: i64) -> Result<Option<Post>, DatabaseError>
    {
        self.backend()?.find_post(id).await
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DatabaseError>
    {
        self.backend()?.delete_post(id).await
    }
}
