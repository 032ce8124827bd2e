
use crate::{AccountBackend, SeedObserver, SeedOutcome};

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use seed_client::{ClientError, ClientResult};
use seed_core::{CreatedIdentity, NewIdentity, Profile};

/// One recorded backend call, tagged with the email or identity id it targeted
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    CreateIdentity(String),
    InsertProfile(String),
    DeleteIdentity(String),
}

/// In-memory backend that records calls in order and fails on demand
#[derive(Default)]
pub(crate) struct MockBackend {
    calls: Mutex<Vec<Call>>,
    fail_identity_for: HashSet<String>,
    fail_profile_for: HashSet<String>,
    fail_delete: bool,
}

impl MockBackend {
    pub(crate) fn failing_identity(mut self, email: &str) -> Self {
        self.fail_identity_for.insert(email.to_string());
        self
    }

    pub(crate) fn failing_profile(mut self, email: &str) -> Self {
        self.fail_profile_for.insert(email.to_string());
        self
    }

    pub(crate) fn failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|call| matches(call)).count()
    }

    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl AccountBackend for MockBackend {
    async fn create_identity(&self, identity: &NewIdentity) -> ClientResult<CreatedIdentity> {
        self.push(Call::CreateIdentity(identity.email.clone()));

        if self.fail_identity_for.contains(&identity.email) {
            return Err(ClientError::api_error(
                422,
                "A user with this email address has already been registered",
            ));
        }

        Ok(CreatedIdentity {
            id: format!("id-{}", identity.email),
            email: Some(identity.email.clone()),
        })
    }

    async fn insert_profile(&self, profile: &Profile) -> ClientResult<()> {
        self.push(Call::InsertProfile(profile.email.clone()));

        if self.fail_profile_for.contains(&profile.email) {
            return Err(ClientError::api_error(
                409,
                "duplicate key value violates unique constraint \"users_email_key\"",
            ));
        }

        Ok(())
    }

    async fn delete_identity(&self, id: &str) -> ClientResult<()> {
        self.push(Call::DeleteIdentity(id.to_string()));

        if self.fail_delete {
            return Err(ClientError::api_error(404, "User not found"));
        }

        Ok(())
    }
}

/// Observer that keeps every outcome for later assertions
#[derive(Default)]
pub(crate) struct RecordingObserver {
    outcomes: Mutex<Vec<SeedOutcome>>,
}

impl RecordingObserver {
    pub(crate) fn outcomes(&self) -> Vec<SeedOutcome> {
        self.outcomes.lock().unwrap().clone()
    }
}

impl SeedObserver for RecordingObserver {
    fn record(&self, outcome: &SeedOutcome) {
        self.outcomes.lock().unwrap().push(outcome.clone());
    }
}
