//! Profile row persisted alongside each demo identity.

use crate::{Equipment, FitnessGoal, Gender, Injury};

use serde::{Deserialize, Serialize};

/// Demographic and fitness attributes of a demo user.
///
/// Linked to its identity only through `email`; the store does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name, "<first> <last>"
    pub name: String,
    pub email: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: u32,
    pub weight_kg: u32,
    pub goal: FitnessGoal,
    pub equipment: Vec<Equipment>,
    pub injuries: Vec<Injury>,
}
