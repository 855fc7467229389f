//! Database traits.

/// Storage operations for posts.
pub mod database_backend;
