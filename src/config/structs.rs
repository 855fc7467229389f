//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Board behaviour (admin user, timestamps, limits).
pub mod board_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Database connection configuration.
pub mod database_config;

/// Database schema customization settings.
pub mod database_structure_config;

/// Posts table/column name customization.
pub mod database_structure_config_posts;

/// HTTP/HTTPS server configuration.
pub mod http_server_config;

/// Sentry error reporting configuration.
pub mod sentry_config;

/// Tracking identifier settings.
pub mod tracking_config;
