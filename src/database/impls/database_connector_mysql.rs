use std::str::FromStr;
use std::time::Duration;
use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions, MySqlRow};
use sqlx::{ConnectOptions, Error, MySql, Pool, Row};
use crate::config::structs::database_structure_config_posts::DatabaseStructureConfigPosts;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::DatabaseError;
use crate::database::helpers::{
    build_create_posts_table_query, build_delete_post_query, build_insert_post_query,
    build_select_post_query, build_select_posts_query,
};
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::posts::impls::post::timestamp_from_seconds;
use crate::posts::structs::new_post::NewPost;
use crate::posts::structs::post::Post;
use crate::tracking::structs::tracking_id::TrackingId;

const ENGINE: DatabaseDrivers = DatabaseDrivers::mysql;
const LOG_PREFIX: &str = "[MySQL]";

impl DatabaseConnectorMySQL {
    #[tracing::instrument(level = "debug", skip(dsl))]
    pub async fn create(dsl: &str) -> Result<Pool<MySql>, Error> {
        let options = MySqlConnectOptions::from_str(dsl)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        MySqlPoolOptions::new()
            .connect_with(options)
            .await
    }

    pub async fn connect(dsl: &str, structure: DatabaseStructureConfigPosts) -> Result<DatabaseConnectorMySQL, DatabaseError> {
        let pool = DatabaseConnectorMySQL::create(dsl).await?;
        info!("{} Connected", LOG_PREFIX);
        Ok(DatabaseConnectorMySQL { pool, structure })
    }

    fn post_from_row(&self, row: &MySqlRow) -> Result<Post, Error> {
        let structure = &self.structure;
        Ok(Post {
            id: row.try_get(structure.column_id.as_str())?,
            content: row.try_get(structure.column_content.as_str())?,
            tracking_cookie: TrackingId(row.try_get(structure.column_tracking_cookie.as_str())?),
            posted_by: row.try_get(structure.column_posted_by.as_str())?,
            created_at: timestamp_from_seconds(row.try_get(structure.column_created_at.as_str())?),
            updated_at: timestamp_from_seconds(row.try_get(structure.column_updated_at.as_str())?),
        })
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorMySQL {
    async fn create_tables(&self) -> Result<(), DatabaseError> {
        info!("[BOOT MySQL] Creating table {}", self.structure.table_name);
        let query = build_create_posts_table_query(ENGINE, &self.structure);
        sqlx::query(&query).execute(&self.pool).await?;
        Ok(())
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, DatabaseError> {
        let now = Utc::now();
        let query = build_insert_post_query(ENGINE, &self.structure);
        let result = sqlx::query(&query)
            .bind(&post.content)
            .bind(post.tracking_cookie.as_str())
            .bind(&post.posted_by)
            .bind(now.timestamp())
            .bind(now.timestamp())
            .execute(&self.pool)
            .await?;
        Ok(Post::from_new(result.last_insert_id() as i64, post, timestamp_from_seconds(now.timestamp())))
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DatabaseError> {
        let query = build_select_posts_query(ENGINE, &self.structure);
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(|row| self.post_from_row(row)).collect::<Result<Vec<Post>, Error>>()?)
    }

    async fn find_post(&self, id: i64) -> Result<Option<Post>, DatabaseError> {
        let query = build_select_post_query(ENGINE, &self.structure);
        let row = sqlx::query(&query).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.map(|row| self.post_from_row(&row)).transpose()?)
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DatabaseError> {
        let query = build_delete_post_query(ENGINE, &self.structure);
        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
