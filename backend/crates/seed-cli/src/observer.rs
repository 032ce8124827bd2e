//! Per-call outcome reporting.

use std::fmt;

use log::{error, info};

/// Result of one remote call during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    IdentityCreated { email: String },
    IdentityFailed { email: String, message: String },
    ProfileCreated { email: String },
    ProfileFailed { email: String, message: String },
    OrphanRemoved { email: String },
    OrphanCleanupFailed { email: String, message: String },
}

impl SeedOutcome {
    pub fn email(&self) -> &str {
        match self {
            Self::IdentityCreated { email }
            | Self::IdentityFailed { email, .. }
            | Self::ProfileCreated { email }
            | Self::ProfileFailed { email, .. }
            | Self::OrphanRemoved { email }
            | Self::OrphanCleanupFailed { email, .. } => email,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Self::IdentityCreated { .. } | Self::ProfileCreated { .. } | Self::OrphanRemoved { .. }
        )
    }
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdentityCreated { email } => write!(f, "✅ Created auth user: {}", email),
            Self::IdentityFailed { email, message } => {
                write!(f, "❌ Failed to create auth user for {}: {}", email, message)
            }
            Self::ProfileCreated { email } => write!(f, "✅ Created profile row: {}", email),
            Self::ProfileFailed { email, message } => {
                write!(f, "❌ Failed to create profile row for {}: {}", email, message)
            }
            Self::OrphanRemoved { email } => {
                write!(f, "✅ Removed orphaned auth user: {}", email)
            }
            Self::OrphanCleanupFailed { email, message } => write!(
                f,
                "❌ Failed to remove orphaned auth user {}: {}",
                email, message
            ),
        }
    }
}

/// Receives every outcome as it happens
pub trait SeedObserver: Send + Sync {
    fn record(&self, outcome: &SeedOutcome);
}

/// Writes one log line per outcome: info for successes, error for failures
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SeedObserver for LogObserver {
    fn record(&self, outcome: &SeedOutcome) {
        if outcome.is_success() {
            info!("{}", outcome);
        } else {
            error!("{}", outcome);
        }
    }
}
