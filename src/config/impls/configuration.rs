use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use chrono::format::{Item, StrftimeItems};
use log::info;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::board_config::BoardConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::database_structure_config_posts::DatabaseStructureConfigPosts;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracking_config::TrackingConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::security::security::{generate_secure_pepper, validate_file_path, validate_pepper_strength};

pub const CONFIG_FILE: &str = "config.toml";
pub const PEPPER_ENV_VAR: &str = "SECRET_BOARD_PEPPER";
const IDENTIFIER_REGEX: &str = r"^[a-z_][a-z0-9_]{0,30}$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            board: BoardConfig {
                admin_user: String::from("admin"),
                timestamp_offset_minutes: 540,
                timestamp_format: String::from("%Y年%m月%d日 %H時%M分%S秒"),
                max_content_length: 4096,
            },
            tracking: TrackingConfig {
                pepper: generate_secure_pepper(),
                cookie_http_only: true,
                cookie_secure: false,
            },
            database: DatabaseConfig {
                engine: DatabaseDrivers::sqlite3,
                path: String::from("sqlite://data.db?mode=rwc"),
            },
            database_structure: DatabaseStructureConfig {
                posts: DatabaseStructureConfigPosts {
                    table_name: String::from("posts"),
                    column_id: String::from("id"),
                    column_content: String::from("content"),
                    column_tracking_cookie: String::from("tracking_cookie"),
                    column_posted_by: String::from("posted_by"),
                    column_created_at: String::from("created_at"),
                    column_updated_at: String::from("updated_at"),
                }
            },
            http_server: vec!(
                HttpServerConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:8000"),
                    real_ip: String::from("X-Real-IP"),
                    user_header: String::from("X-Forwarded-User"),
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    max_connections: 25000,
                    threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1),
                    ssl: false,
                    ssl_key: String::from(""),
                    ssl_cert: String::from(""),
                    tls_connection_rate: 256,
                }
            ),
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, CustomError> {
        Self::load_from_path(CONFIG_FILE, create)
    }

    pub fn load_from_path(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let mut config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} in the root folder, exiting now...");
                        Err(CustomError::new(&format!("create {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        config.apply_env_overrides();

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|error| CustomError::new(&error.to_string()))?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_pepper_override(std::env::var(PEPPER_ENV_VAR).ok());
    }

    pub fn apply_pepper_override(&mut self, pepper: Option<String>) {
        if let Some(pepper) = pepper.filter(|value| !value.is_empty()) {
            info!("[CONFIG] Pepper taken from {PEPPER_ENV_VAR}");
            self.tracking.pepper = pepper;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        parse_log_level(&self.log_level)
            .map_err(|error| ConfigurationError::ValidationError(error.to_string()))?;

        if !validate_pepper_strength(&self.tracking.pepper) {
            return Err(ConfigurationError::ValidationError(String::from(
                "tracking.pepper must be at least 32 characters long and mix character classes"
            )));
        }

        if self.board.timestamp_offset().is_none() {
            return Err(ConfigurationError::ValidationError(format!(
                "board.timestamp_offset_minutes {} is out of range", self.board.timestamp_offset_minutes
            )));
        }

        if StrftimeItems::new(&self.board.timestamp_format).any(|item| item == Item::Error) {
            return Err(ConfigurationError::ValidationError(format!(
                "board.timestamp_format \"{}\" is not a valid strftime pattern", self.board.timestamp_format
            )));
        }

        if self.board.max_content_length == 0 {
            return Err(ConfigurationError::ValidationError(String::from(
                "board.max_content_length must be greater than zero"
            )));
        }

        let posts = &self.database_structure.posts;
        let check_map = vec![
            ("[DB: posts]", &posts.table_name),
            ("[DB: posts] Column: id", &posts.column_id),
            ("[DB: posts] Column: content", &posts.column_content),
            ("[DB: posts] Column: tracking_cookie", &posts.column_tracking_cookie),
            ("[DB: posts] Column: posted_by", &posts.column_posted_by),
            ("[DB: posts] Column: created_at", &posts.column_created_at),
            ("[DB: posts] Column: updated_at", &posts.column_updated_at),
        ];

        for (name, value) in check_map {
            Self::validate_value(name, value, IDENTIFIER_REGEX)?;
        }

        for server in self.http_server.iter().filter(|server| server.enabled) {
            if server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!(
                    "[HTTP] Invalid bind_address \"{}\"", server.bind_address
                )));
            }
            if server.threads == 0 {
                return Err(ConfigurationError::ValidationError(format!(
                    "[HTTP] {} needs at least one worker thread", server.bind_address
                )));
            }
            if server.ssl {
                for path in [&server.ssl_key, &server.ssl_cert] {
                    if path.is_empty() {
                        return Err(ConfigurationError::ValidationError(format!(
                            "[HTTP] {} has SSL enabled without ssl_key/ssl_cert", server.bind_address
                        )));
                    }
                    validate_file_path(path)
                        .map_err(|error| ConfigurationError::ValidationError(format!("[HTTP] {error}")))?;
                }
            }
        }

        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|error| ConfigurationError::ValidationError(error.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"", name, value, regex_check
            )));
        }
        Ok(())
    }
}
