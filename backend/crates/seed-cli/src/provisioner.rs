use crate::{AccountBackend, SeedObserver, SeedOutcome};

use std::fmt;

use log::{debug, info};
use rand::Rng;
use seed_core::{CreatedIdentity, DemoAccount, ProfileGenerator};

/// What to do with an identity whose profile insert failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanPolicy {
    /// Leave the identity without a profile
    #[default]
    Keep,
    /// Delete the identity again
    DeleteIdentity,
}

impl OrphanPolicy {
    pub fn from_cleanup_flag(cleanup: bool) -> Self {
        if cleanup {
            Self::DeleteIdentity
        } else {
            Self::Keep
        }
    }
}

/// Counts for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub identities_created: u32,
    pub identities_failed: u32,
    pub profiles_created: u32,
    pub profiles_failed: u32,
    pub orphans_removed: u32,
    pub orphan_cleanups_failed: u32,
}

impl SeedReport {
    /// Identities that ended the run without a profile row
    pub fn orphans_left(&self) -> u32 {
        self.profiles_failed.saturating_sub(self.orphans_removed)
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Seeding finished: auth users {} created / {} failed, profiles {} created / {} failed, {} orphaned",
            self.identities_created,
            self.identities_failed,
            self.profiles_created,
            self.profiles_failed,
            self.orphans_left()
        )
    }
}

/// Creates each generated account through an `AccountBackend`.
///
/// Iterations run one after another and every call is awaited before the
/// next one starts, so an identity always exists before its profile insert.
pub struct Provisioner<B, O> {
    backend: B,
    observer: O,
    orphan_policy: OrphanPolicy,
}

impl<B: AccountBackend, O: SeedObserver> Provisioner<B, O> {
    pub fn new(backend: B, observer: O, orphan_policy: OrphanPolicy) -> Self {
        Self {
            backend,
            observer,
            orphan_policy,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Generate and provision accounts 1..=count.
    ///
    /// Remote failures are reported and never stop the run.
    pub async fn run<R: Rng>(&self, generator: &mut ProfileGenerator<R>, count: u32) -> SeedReport {
        let mut report = SeedReport::default();

        info!("Provisioning {} demo accounts", count);

        for index in 1..=count {
            let account = generator.generate(index);
            debug!("Iteration {}/{}: {}", index, count, account.email());
            self.provision(&account, &mut report).await;
        }

        report
    }

    /// Create the identity, then the profile row if the identity succeeded
    pub async fn provision(&self, account: &DemoAccount, report: &mut SeedReport) {
        let email = account.email();

        let created = match self.backend.create_identity(&account.identity).await {
            Ok(created) => {
                report.identities_created += 1;
                self.observer.record(&SeedOutcome::IdentityCreated {
                    email: email.to_string(),
                });
                created
            }
            Err(e) => {
                report.identities_failed += 1;
                self.observer.record(&SeedOutcome::IdentityFailed {
                    email: email.to_string(),
                    message: e.message().to_string(),
                });
                return;
            }
        };

        match self.backend.insert_profile(&account.profile).await {
            Ok(()) => {
                report.profiles_created += 1;
                self.observer.record(&SeedOutcome::ProfileCreated {
                    email: email.to_string(),
                });
            }
            Err(e) => {
                report.profiles_failed += 1;
                self.observer.record(&SeedOutcome::ProfileFailed {
                    email: email.to_string(),
                    message: e.message().to_string(),
                });

                if self.orphan_policy == OrphanPolicy::DeleteIdentity {
                    self.remove_orphan(email, &created, report).await;
                }
            }
        }
    }

    async fn remove_orphan(&self, email: &str, created: &CreatedIdentity, report: &mut SeedReport) {
        match self.backend.delete_identity(&created.id).await {
            Ok(()) => {
                report.orphans_removed += 1;
                self.observer.record(&SeedOutcome::OrphanRemoved {
                    email: email.to_string(),
                });
            }
            Err(e) => {
                report.orphan_cleanups_failed += 1;
                self.observer.record(&SeedOutcome::OrphanCleanupFailed {
                    email: email.to_string(),
                    message: e.message().to_string(),
                });
            }
        }
    }
}
