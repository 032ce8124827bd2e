use crate::{ClientError, ClientResult};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, Response};
use seed_core::{CreatedIdentity, NewIdentity, Profile};

pub const AUTH_ADMIN_USERS_PATH: &str = "/auth/v1/admin/users";
pub const REST_PATH: &str = "/rest/v1";

/// HTTP client for a Supabase project, authenticated with the service role key
pub struct SupabaseClient {
    pub base_url: String,
    pub profiles_table: String,
    service_role_key: String,
    client: ReqwestClient,
}

impl SupabaseClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://<ref>.supabase.co")
    /// * `service_role_key` - Privileged key sent as `apikey` and bearer token
    /// * `profiles_table` - Table that receives profile rows
    /// * `timeout` - Per-request timeout; None waits indefinitely
    pub fn new(
        base_url: &str,
        service_role_key: &str,
        profiles_table: &str,
        timeout: Option<Duration>,
    ) -> ClientResult<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            profiles_table: profiles_table.to_string(),
            service_role_key: service_role_key.to_string(),
            client: builder.build()?,
        })
    }

    /// Build a request carrying the service role credentials
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);

        self.client
            .request(method, &url)
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
    }

    /// Send request and turn non-success statuses into API errors
    async fn send(&self, req: reqwest::RequestBuilder) -> ClientResult<Response> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Request failed with {}: {}", status, body);
            return Err(ClientError::from_response(status, &body));
        }

        Ok(response)
    }

    // =========================================================================
    // Auth Admin Operations
    // =========================================================================

    /// Register a new auth user
    pub async fn create_identity(&self, identity: &NewIdentity) -> ClientResult<CreatedIdentity> {
        let req = self
            .request(Method::POST, AUTH_ADMIN_USERS_PATH)
            .json(identity);
        let response = self.send(req).await?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Delete an auth user by id
    pub async fn delete_identity(&self, id: &str) -> ClientResult<()> {
        let req = self.request(
            Method::DELETE,
            &format!("{}/{}", AUTH_ADMIN_USERS_PATH, id),
        );
        self.send(req).await?;
        Ok(())
    }

    // =========================================================================
    // REST Operations
    // =========================================================================

    /// Insert one profile row into the profiles table
    pub async fn insert_profile(&self, profile: &Profile) -> ClientResult<()> {
        let req = self
            .request(
                Method::POST,
                &format!("{}/{}", REST_PATH, self.profiles_table),
            )
            .header("Prefer", "return=minimal")
            .json(&[profile]);
        self.send(req).await?;
        Ok(())
    }
}
