use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PROFILES_TABLE, DEFAULT_REQUEST_TIMEOUT_SECS,
    MAX_REQUEST_TIMEOUT_SECS,
};

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

/// Connection settings for the hosted backend (auth service + REST data API)
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://<ref>.supabase.co`
    pub url: Option<String>,
    /// Privileged key used for the admin auth API and for row inserts
    pub service_role_key: Option<String>,
    pub profiles_table: String,
    /// Per-request timeout; 0 waits indefinitely
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            service_role_key: None,
            profiles_table: String::from(DEFAULT_PROFILES_TABLE),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field(
                "service_role_key",
                &self.service_role_key.as_ref().map(|_| "<redacted>"),
            )
            .field("profiles_table", &self.profiles_table)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl BackendConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.url()?;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::backend(format!(
                "backend.url must start with http:// or https://, got {}",
                url
            )));
        }

        self.service_role_key()?;

        if self.profiles_table.is_empty()
            || !self
                .profiles_table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ConfigError::backend(format!(
                "backend.profiles_table must be a non-empty identifier, got '{}'",
                self.profiles_table
            )));
        }

        if self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ConfigError::backend(format!(
                "backend.request_timeout_secs must be 0-{}, got {}",
                MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }

    /// Project URL, required
    #[track_caller]
    pub fn url(&self) -> ConfigErrorResult<&str> {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(ConfigError::backend(
                "backend.url is required (set DEMO_SEED_BACKEND_URL)",
            )),
        }
    }

    /// Service role key, required
    #[track_caller]
    pub fn service_role_key(&self) -> ConfigErrorResult<&str> {
        match self.service_role_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::backend(
                "backend.service_role_key is required (set DEMO_SEED_SERVICE_ROLE_KEY)",
            )),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}
