//! Authentication principals in the external auth service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Request body for the admin "create user" call.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct NewIdentity {
    pub email: String,
    pub password: String,
    /// Marks the email as already verified so the account can log in immediately
    pub email_confirm: bool,
}

impl NewIdentity {
    /// Create a pre-verified identity
    pub fn new(email: String, password: String) -> Self {
        Self {
            email,
            password,
            email_confirm: true,
        }
    }
}

impl fmt::Debug for NewIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewIdentity")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("email_confirm", &self.email_confirm)
            .finish()
    }
}

/// Identity returned by the auth service after creation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedIdentity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}
