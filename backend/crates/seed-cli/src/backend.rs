//! The two remote operations a provisioning run needs, plus the compensating delete.
//!
//! `Provisioner` only talks to this trait, so an implementation can wrap the
//! identity and profile calls in whatever transactional scheme it needs.

use async_trait::async_trait;
use seed_client::{ClientResult, SupabaseClient};
use seed_core::{CreatedIdentity, NewIdentity, Profile};

#[async_trait]
pub trait AccountBackend: Send + Sync {
    /// Register an auth identity
    async fn create_identity(&self, identity: &NewIdentity) -> ClientResult<CreatedIdentity>;

    /// Insert the profile row for an identity
    async fn insert_profile(&self, profile: &Profile) -> ClientResult<()>;

    /// Remove an identity (orphan cleanup)
    async fn delete_identity(&self, id: &str) -> ClientResult<()>;
}

#[async_trait]
impl AccountBackend for SupabaseClient {
    async fn create_identity(&self, identity: &NewIdentity) -> ClientResult<CreatedIdentity> {
        SupabaseClient::create_identity(self, identity).await
    }

    async fn insert_profile(&self, profile: &Profile) -> ClientResult<()> {
        SupabaseClient::insert_profile(self, profile).await
    }

    async fn delete_identity(&self, id: &str) -> ClientResult<()> {
        SupabaseClient::delete_identity(self, id).await
    }
}
