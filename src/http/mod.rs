//! Board HTTP service.
//!
//! # Endpoints
//!
//! - `GET /` - Redirects to `/posts`
//! - `GET /posts` - Lists posts, newest first
//! - `POST /posts` - Creates a post from the `content` form field
//! - `POST /posts/delete` - Deletes the post named by the `id` form field
//! - `POST /posts?delete=1` - Same as `/posts/delete`
//!
//! Every board request first resolves the user name from the trusted proxy
//! header (or HTTP Basic credentials) and then validates or reissues the
//! `tracking_id` cookie for that user.

/// HTTP error type.
pub mod errors;

/// Data structures for the HTTP service.
pub mod structs;

/// Implementation blocks for HTTP service components.
pub mod impls;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;

#[cfg(test)]
mod tests;
