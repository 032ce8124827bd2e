pub mod error;
pub mod generator;
pub mod models;
pub mod names;
pub mod pools;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use generator::{DEFAULT_EMAIL_DOMAIN, ProfileGenerator, demo_email};
pub use models::demo_account::DemoAccount;
pub use models::equipment::Equipment;
pub use models::fitness_goal::FitnessGoal;
pub use models::gender::Gender;
pub use models::identity::{CreatedIdentity, NewIdentity};
pub use models::injury::Injury;
pub use models::profile::Profile;
