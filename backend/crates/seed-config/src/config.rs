use crate::{
    BackendConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, SeedConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub seed: SeedConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Load `.env` from the working directory if present
    /// 2. Check for DEMO_SEED_CONFIG_DIR env var, else use ./.demo-seed/
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply DEMO_SEED_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DEMO_SEED_CONFIG_DIR env var > ./.demo-seed/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors before any remote call is made.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.backend.validate()?;
        self.seed.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  backend: {} (table: {}, key: {})",
            self.backend.url.as_deref().unwrap_or("<unset>"),
            self.backend.profiles_table,
            if self.backend.service_role_key.is_some() {
                "set"
            } else {
                "unset"
            }
        );

        match self.backend.request_timeout() {
            Some(timeout) => info!("  request timeout: {}s", timeout.as_secs()),
            None => info!("  request timeout: none"),
        }

        info!(
            "  seed: {} users @{} (rng seed: {}, cleanup orphans: {})",
            self.seed.user_count,
            self.seed.email_domain,
            self.seed
                .rng_seed
                .map(|seed| seed.to_string())
                .unwrap_or_else(|| String::from("random")),
            self.seed.cleanup_orphans
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Backend
        Self::apply_env_option_string("DEMO_SEED_BACKEND_URL", &mut self.backend.url);
        Self::apply_env_option_string(
            "DEMO_SEED_SERVICE_ROLE_KEY",
            &mut self.backend.service_role_key,
        );
        Self::apply_env_string("DEMO_SEED_PROFILES_TABLE", &mut self.backend.profiles_table);
        Self::apply_env_parse(
            "DEMO_SEED_REQUEST_TIMEOUT_SECS",
            &mut self.backend.request_timeout_secs,
        );

        // Seed
        Self::apply_env_parse("DEMO_SEED_USER_COUNT", &mut self.seed.user_count);
        Self::apply_env_string("DEMO_SEED_EMAIL_DOMAIN", &mut self.seed.email_domain);
        Self::apply_env_string("DEMO_SEED_PASSWORD", &mut self.seed.password);
        Self::apply_env_option_parse("DEMO_SEED_RNG_SEED", &mut self.seed.rng_seed);
        Self::apply_env_bool("DEMO_SEED_CLEANUP_ORPHANS", &mut self.seed.cleanup_orphans);

        // Logging
        Self::apply_env_parse("DEMO_SEED_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DEMO_SEED_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DEMO_SEED_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("DEMO_SEED_LOG_DIR", &mut self.logging.dir);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<parseable> values
    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = Some(parsed);
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
