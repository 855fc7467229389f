//! HTML for the posts page.

#[allow(clippy::module_inception)]
pub mod render;
