//! Random profile generation.
//!
//! Draw order is fixed (gender, names, age, height, weight, goal, equipment,
//! injuries) so that a seeded RNG reproduces the same accounts.

use crate::names::{random_first_name, random_last_name};
use crate::pools::{EQUIPMENT_BUNDLES, GENDERS, GOALS, INJURY_SETS, pick};
use crate::{DemoAccount, NewIdentity, Profile};

use std::ops::RangeInclusive;

use rand::Rng;

pub const DEFAULT_EMAIL_DOMAIN: &str = "gymovo.com";

pub const AGE_RANGE: RangeInclusive<u32> = 20..=50;
pub const HEIGHT_CM_RANGE: RangeInclusive<u32> = 155..=190;
pub const WEIGHT_KG_RANGE: RangeInclusive<u32> = 50..=90;

/// Email for the `index`-th demo account, e.g. `demo3@gymovo.com`
pub fn demo_email(index: u32, domain: &str) -> String {
    format!("demo{}@{}", index, domain)
}

/// Generates demo accounts that share one password and email domain
pub struct ProfileGenerator<R> {
    rng: R,
    email_domain: String,
    password: String,
}

impl<R: Rng> ProfileGenerator<R> {
    pub fn new(rng: R, email_domain: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            rng,
            email_domain: email_domain.into(),
            password: password.into(),
        }
    }

    pub fn email_domain(&self) -> &str {
        &self.email_domain
    }

    /// Generate the account for iteration `index` (1-based)
    pub fn generate(&mut self, index: u32) -> DemoAccount {
        let rng = &mut self.rng;

        let gender = *pick(rng, GENDERS);
        let first_name = random_first_name(rng, gender);
        let last_name = random_last_name(rng);
        let age = rng.random_range(AGE_RANGE);
        let height_cm = rng.random_range(HEIGHT_CM_RANGE);
        let weight_kg = rng.random_range(WEIGHT_KG_RANGE);
        let goal = *pick(rng, GOALS);
        let equipment = pick(rng, EQUIPMENT_BUNDLES).to_vec();
        let injuries = pick(rng, INJURY_SETS).to_vec();

        let email = demo_email(index, &self.email_domain);

        DemoAccount {
            identity: NewIdentity::new(email.clone(), self.password.clone()),
            profile: Profile {
                name: format!("{} {}", first_name, last_name),
                email,
                age,
                gender,
                height_cm,
                weight_kg,
                goal,
                equipment,
                injuries,
            },
        }
    }
}
