use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_EMAIL_DOMAIN, DEFAULT_PASSWORD, DEFAULT_USER_COUNT,
    MAX_USER_COUNT, MIN_PASSWORD_LENGTH, MIN_USER_COUNT,
};

use std::fmt;

use serde::Deserialize;

/// What to generate
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Number of demo accounts; emails run demo1..demo<user_count>
    pub user_count: u32,
    pub email_domain: String,
    /// Shared password for every demo account
    pub password: String,
    /// Fixed RNG seed for reproducible runs
    pub rng_seed: Option<u64>,
    /// Delete the identity when its profile insert fails
    pub cleanup_orphans: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            user_count: DEFAULT_USER_COUNT,
            email_domain: String::from(DEFAULT_EMAIL_DOMAIN),
            password: String::from(DEFAULT_PASSWORD),
            rng_seed: None,
            cleanup_orphans: false,
        }
    }
}

impl fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedConfig")
            .field("user_count", &self.user_count)
            .field("email_domain", &self.email_domain)
            .field("password", &"<redacted>")
            .field("rng_seed", &self.rng_seed)
            .field("cleanup_orphans", &self.cleanup_orphans)
            .finish()
    }
}

impl SeedConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.user_count < MIN_USER_COUNT || self.user_count > MAX_USER_COUNT {
            return Err(ConfigError::seed(format!(
                "seed.user_count must be {}-{}, got {}",
                MIN_USER_COUNT, MAX_USER_COUNT, self.user_count
            )));
        }

        let domain = &self.email_domain;
        if domain.is_empty()
            || domain.contains('@')
            || !domain.contains('.')
            || domain.chars().any(char::is_whitespace)
        {
            return Err(ConfigError::seed(format!(
                "seed.email_domain must be a bare domain like gymovo.com, got '{}'",
                domain
            )));
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ConfigError::seed(format!(
                "seed.password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(())
    }
}
