//! # Secret Board
//!
//! A small posting board served over HTTP with pseudo-anonymous,
//! tamper-evident tracking identifiers.
//!
//! ## Overview
//!
//! Visitors are authenticated by an upstream proxy that forwards the user name.
//! The board never shows that name to other readers. Instead every visitor
//! carries a `tracking_id` cookie of the form `<originalId>_<digest>`, where
//! the digest binds the random `originalId` to the user name with a
//! process-wide pepper. Posts display the `originalId`, so readers can tell
//! posts from the same browser apart while the cookie cannot be forged or
//! moved to another account.
//!
//! ## Features
//!
//! - **Tracking Identifiers**: Issued from OS entropy, verified offline, 24 hour cookie expiry
//! - **Database Agnostic**: SQLite, MySQL, and PostgreSQL support with customizable schemas
//! - **Multiple Listeners**: Any number of HTTP/HTTPS servers from one configuration
//! - **Monitoring**: Sentry integration for server errors
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use secret_board::config::structs::configuration::Configuration;
//! use secret_board::tracking::structs::tracking_manager::TrackingManager;
//!
//! let config = Configuration::load_from_file(false)?;
//! let tracking = TrackingManager::new(config.tracking.pepper.clone());
//! let outcome = tracking.ensure_tracking_id(None, "alice")?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and the shared error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`database`] - Post storage on SQLite, MySQL or PostgreSQL
//! - [`http`] - Board endpoints, user resolution and tracking cookies
//! - [`posts`] - Post data structures
//! - [`render`] - HTML for the posts page
//! - [`security`] - Pepper generation, constant time comparison and input checks
//! - [`structs`] - CLI argument parsing
//! - [`tracking`] - Tracking identifier issuance and validation

/// Common utilities and shared functionality.
///
/// Contains logging setup, bind checks and the plain message error used
/// during boot.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files
/// and environment variables. Supports customizable table and column names
/// and multi-server configurations.
pub mod config;

/// Database backend module with multi-database support.
pub mod database;

/// Board HTTP/HTTPS service.
pub mod http;

/// Posts stored on the board.
pub mod posts;

/// HTML rendering of the posts page.
pub mod render;

/// Security helpers.
pub mod security;

/// CLI argument parsing.
pub mod structs;

/// Tracking identifier manager.
///
/// Issues `<originalId>_<digest>` identifiers bound to a user name and
/// validates them on every request.
pub mod tracking;
