pub mod demo_account;
pub mod equipment;
pub mod fitness_goal;
pub mod gender;
pub mod identity;
pub mod injury;
pub mod profile;
