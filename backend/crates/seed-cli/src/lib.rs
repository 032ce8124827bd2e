//! seed-cli library
//!
//! Drives demo account provisioning: one identity call and one profile insert
//! per generated account, strictly in sequence.

pub mod backend;
pub mod cli;
pub mod dry_run;
pub mod error;
pub mod logger;
pub mod observer;
pub mod provisioner;

#[cfg(test)]
mod tests;

pub use backend::AccountBackend;
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
pub use observer::{LogObserver, SeedObserver, SeedOutcome};
pub use provisioner::{OrphanPolicy, Provisioner, SeedReport};
