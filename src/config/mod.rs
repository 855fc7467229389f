//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the board
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **board**: Admin user name, timestamp display, content limits
//! - **tracking**: Pepper and cookie hardening flags
//! - **database**: Database engine and connection string
//! - **database_structure**: Customizable table and column names
//! - **http_server**: HTTP/HTTPS server instances
//! - **sentry_config**: Error reporting configuration
//!
//! # Features
//!
//! - TOML file parsing with detailed error messages
//! - `SECRET_BOARD_PEPPER` environment override for the pepper
//! - Customizable database table/column names
//! - Multiple server instance configurations
//! - Default value generation
//!
//! # Example
//!
//! ```rust,ignore
//! use secret_board::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
