//! Post data structures.

/// A stored post.
pub mod post;

/// A post about to be stored.
pub mod new_post;
