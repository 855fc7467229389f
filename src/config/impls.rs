pub mod board_config;
pub mod configuration;
pub mod configuration_error;
