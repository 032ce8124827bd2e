use crate::{NewIdentity, Profile};

/// One generated account: the identity to register and the profile row to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAccount {
    pub identity: NewIdentity,
    pub profile: Profile,
}

impl DemoAccount {
    pub fn email(&self) -> &str {
        &self.identity.email
    }
}
