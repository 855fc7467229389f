use async_trait::async_trait;
use crate::database::errors::DatabaseError;
use crate::posts::structs::new_post::NewPost;
use crate::posts::structs::post::Post;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseBackend: Send + Sync {
    async fn create_tables(&self) -> Result<(), DatabaseError>;

    async fn create_post(&self, post: NewPost) -> Result<Post, DatabaseError>;

    /// All posts, newest first.
    async fn list_posts(&self) -> Result<Vec<Post>, DatabaseError>;

    async fn find_post(&self, id: i64) -> Result<Option<Post>, DatabaseError>;

    /// Returns `false` when no row matched.
    async fn delete_post(&self, id: i64) -> Result<bool, DatabaseError>;
}
