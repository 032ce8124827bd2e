//! Fixed categorical pools the generator samples from.
//!
//! Sampling is uniform over entries, so a bundle listed twice is twice as likely.

use crate::{Equipment, FitnessGoal, Gender, Injury};

use rand::Rng;

pub const GENDERS: &[Gender] = &[Gender::Male, Gender::Female];

pub const GOALS: &[FitnessGoal] = &[
    FitnessGoal::Toning,
    FitnessGoal::MassGain,
    FitnessGoal::WeightLoss,
    FitnessGoal::Maintenance,
    FitnessGoal::Rehabilitation,
    FitnessGoal::GeneralFitness,
];

pub const EQUIPMENT_BUNDLES: &[&[Equipment]] = &[
    &[Equipment::Dumbbells, Equipment::Barbells],
    &[Equipment::Machines],
    &[Equipment::ResistanceBands],
    &[Equipment::Barbells],
    &[Equipment::Dumbbells],
    &[Equipment::Machines],
];

pub const INJURY_SETS: &[&[Injury]] = &[
    &[],
    &[Injury::Knee],
    &[Injury::Shoulder],
    &[Injury::Back],
    &[Injury::Elbow],
    &[Injury::Ankle],
    &[Injury::Back, Injury::Knee],
    &[],
];

/// Pick one entry uniformly at random. Panics on an empty pool.
pub fn pick<'a, T, R>(rng: &mut R, pool: &'a [T]) -> &'a T
where
    R: Rng + ?Sized,
{
    &pool[rng.random_range(0..pool.len())]
}
