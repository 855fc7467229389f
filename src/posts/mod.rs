//! Posts stored on the board.
//!
//! A post remembers who wrote it and the tracking identifier the author
//! carried at the time, so readers can tell posts from the same browser apart
//! without learning the author's user name.

/// Post data structures.
pub mod structs;

/// Implementation blocks for post types.
pub mod impls;
