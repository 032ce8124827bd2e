mod backend_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod seed_config;

#[cfg(test)]
mod tests;

pub use backend_config::BackendConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use seed_config::SeedConfig;

pub const CONFIG_DIR_ENV: &str = "DEMO_SEED_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".demo-seed";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_PROFILES_TABLE: &str = "users";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 0;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

pub const DEFAULT_USER_COUNT: u32 = 10;
const MIN_USER_COUNT: u32 = 1;
const MAX_USER_COUNT: u32 = 1000;
const DEFAULT_EMAIL_DOMAIN: &str = "gymovo.com";
const DEFAULT_PASSWORD: &str = "demoUser123";
const MIN_PASSWORD_LENGTH: usize = 6;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";
