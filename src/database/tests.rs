#[cfg(test)]
mod database_tests {
    use crate::config::structs::configuration::Configuration;
    use crate::config::structs::database_structure_config_posts::DatabaseStructureConfigPosts;
    use crate::database::enums::database_drivers::DatabaseDrivers;
    use crate::database::helpers::{
        build_create_posts_table_query, build_delete_post_query, build_insert_post_query,
        build_select_post_query, build_select_posts_query, placeholder, quote_identifier,
    };

    fn structure() -> DatabaseStructureConfigPosts {
        Configuration::init().database_structure.posts
    }

    mod helpers_tests {
        use super::*;

        #[test]
        fn test_quote_identifier() {
            assert_eq!(quote_identifier(DatabaseDrivers::sqlite3, "posts"), "`posts`");
            assert_eq!(quote_identifier(DatabaseDrivers::mysql, "posts"), "`posts`");
            assert_eq!(quote_identifier(DatabaseDrivers::pgsql, "posts"), "posts");
        }

        #[test]
        fn test_placeholder() {
            assert_eq!(placeholder(DatabaseDrivers::sqlite3, 3), "?");
            assert_eq!(placeholder(DatabaseDrivers::mysql, 3), "?");
            assert_eq!(placeholder(DatabaseDrivers::pgsql, 3), "$3");
        }

        #[test]
        fn test_create_posts_table_query() {
            assert_eq!(
                build_create_posts_table_query(DatabaseDrivers::sqlite3, &structure()),
                "CREATE TABLE IF NOT EXISTS `posts` (`id` INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL, `content` TEXT NOT NULL, `tracking_cookie` TEXT NOT NULL, `posted_by` TEXT NOT NULL, `created_at` INTEGER NOT NULL DEFAULT 0, `updated_at` INTEGER NOT NULL DEFAULT 0)"
            );
            assert_eq!(
                build_create_posts_table_query(DatabaseDrivers::pgsql, &structure()),
                "CREATE TABLE IF NOT EXISTS posts (id BIGSERIAL PRIMARY KEY, content TEXT NOT NULL, tracking_cookie TEXT NOT NULL, posted_by TEXT NOT NULL, created_at BIGINT NOT NULL DEFAULT 0, updated_at BIGINT NOT NULL DEFAULT 0)"
            );
            assert!(build_create_posts_table_query(DatabaseDrivers::mysql, &structure()).contains("`posted_by` VARCHAR(256) NOT NULL"));
        }

        #[test]
        fn test_insert_post_query() {
            assert_eq!(
                build_insert_post_query(DatabaseDrivers::sqlite3, &structure()),
                "INSERT INTO `posts` (`content`, `tracking_cookie`, `posted_by`, `created_at`, `updated_at`) VALUES (?, ?, ?, ?, ?)"
            );
            assert_eq!(
                build_insert_post_query(DatabaseDrivers::pgsql, &structure()),
                "INSERT INTO posts (content, tracking_cookie, posted_by, created_at, updated_at) VALUES ($1, $2, $3, $4, $5) RETURNING id"
            );
        }

        #[test]
        fn test_select_queries() {
            assert_eq!(
                build_select_posts_query(DatabaseDrivers::pgsql, &structure()),
                "SELECT id, content, tracking_cookie, posted_by, created_at, updated_at FROM posts ORDER BY id DESC"
            );
            assert_eq!(
                build_select_post_query(DatabaseDrivers::mysql, &structure()),
                "SELECT `id`, `content`, `tracking_cookie`, `posted_by`, `created_at`, `updated_at` FROM `posts` WHERE `id` = ?"
            );
        }

        #[test]
        fn test_delete_post_query() {
            assert_eq!(
                build_delete_post_query(DatabaseDrivers::pgsql, &structure()),
                "DELETE FROM posts WHERE id = $1"
            );
        }

        #[test]
        fn test_custom_structure_names() {
            let mut custom = structure();
            custom.table_name = String::from("board_posts");
            custom.column_id = String::from("post_id");
            assert_eq!(
                build_delete_post_query(DatabaseDrivers::sqlite3, &custom),
                "DELETE FROM `board_posts` WHERE `post_id` = ?"
            );
        }
    }

    mod connector_tests {
        use super::*;
        use tempfile::TempDir;
        use crate::database::errors::DatabaseError;
        use crate::database::structs::database_connector::DatabaseConnector;
        use crate::database::traits::database_backend::DatabaseBackend;
        use crate::posts::structs::new_post::NewPost;
        use crate::tracking::structs::tracking_id::TrackingId;

        async fn sqlite_connector(dir: &TempDir) -> DatabaseConnector {
            let mut config = Configuration::init();
            config.database.engine = DatabaseDrivers::sqlite3;
            config.database.path = format!("sqlite://{}", dir.path().join("board.db").display());
            DatabaseConnector::new(&config, true).await.unwrap()
        }

        fn new_post(content: &str, posted_by: &str) -> NewPost {
            NewPost {
                content: content.to_string(),
                tracking_cookie: TrackingId(String::from("42_92d53edfc989028b55f01b0fde281a3f37b71640")),
                posted_by: posted_by.to_string(),
            }
        }

        #[tokio::test]
        async fn test_create_and_find_post() {
            let dir = TempDir::new().unwrap();
            let connector = sqlite_connector(&dir).await;
            let created = connector.create_post(new_post("hello", "alice")).await.unwrap();
            let found = connector.find_post(created.id).await.unwrap();
            assert_eq!(found, Some(created));
        }

        #[tokio::test]
        async fn test_list_posts_newest_first() {
            let dir = TempDir::new().unwrap();
            let connector = sqlite_connector(&dir).await;
            let first = connector.create_post(new_post("first", "alice")).await.unwrap();
            let second = connector.create_post(new_post("second", "bob")).await.unwrap();
            let posts = connector.list_posts().await.unwrap();
            assert_eq!(posts.iter().map(|post| post.id).collect::<Vec<i64>>(), vec![second.id, first.id]);
        }

        #[tokio::test]
        async fn test_delete_post() {
            let dir = TempDir::new().unwrap();
            let connector = sqlite_connector(&dir).await;
            let created = connector.create_post(new_post("bye", "alice")).await.unwrap();
            assert!(connector.delete_post(created.id).await.unwrap());
            assert!(!connector.delete_post(created.id).await.unwrap());
            assert_eq!(connector.find_post(created.id).await.unwrap(), None);
        }

        #[tokio::test]
        async fn test_find_missing_post() {
            let dir = TempDir::new().unwrap();
            let connector = sqlite_connector(&dir).await;
            assert_eq!(connector.find_post(9999).await.unwrap(), None);
        }

        #[tokio::test]
        async fn test_create_tables_is_idempotent() {
            let dir = TempDir::new().unwrap();
            let connector = sqlite_connector(&dir).await;
            connector.create_tables().await.unwrap();
            assert!(connector.list_posts().await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn test_engine_not_connected() {
            let connector = DatabaseConnector {
                mysql: None,
                sqlite: None,
                pgsql: None,
                engine: DatabaseDrivers::pgsql,
            };
            let result = connector.list_posts().await;
            assert!(matches!(result, Err(DatabaseError::EngineNotConnected(DatabaseDrivers::pgsql))));
        }
    }
}
