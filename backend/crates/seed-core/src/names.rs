//! Name tables for demo users.
//!
//! The two first-name tables are disjoint, so a first name alone tells which
//! gender it was drawn for. Last names come from `fake`.

use crate::Gender;
use crate::pools::pick;

use fake::Fake;
use fake::faker::name::en::LastName;
use rand::Rng;

const MASCULINE_FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Paul", "Andrew", "Joshua",
    "Kevin", "Brian", "George", "Edward", "Ryan", "Jacob", "Nicholas", "Eric", "Jonathan",
    "Benjamin", "Samuel", "Alexander", "Patrick", "Henry", "Nathan", "Ethan", "Noah", "Lucas",
];

const FEMININE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Barbara", "Elizabeth", "Susan", "Jessica",
    "Sarah", "Karen", "Nancy", "Lisa", "Margaret", "Sandra", "Ashley", "Emily", "Michelle",
    "Amanda", "Melissa", "Stephanie", "Rebecca", "Laura", "Anna", "Nicole", "Emma", "Samantha",
    "Katherine", "Rachel", "Maria", "Heather", "Julie", "Victoria", "Olivia", "Megan", "Sophia",
    "Chloe",
];

/// First-name table for a gender
pub fn first_names(gender: Gender) -> &'static [&'static str] {
    match gender {
        Gender::Male => MASCULINE_FIRST_NAMES,
        Gender::Female => FEMININE_FIRST_NAMES,
    }
}

/// Draw a first name from the table matching `gender`
pub fn random_first_name<R: Rng + ?Sized>(rng: &mut R, gender: Gender) -> &'static str {
    *pick(rng, first_names(gender))
}

/// Draw an English last name, independent of gender
pub fn random_last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    LastName().fake_with_rng(rng)
}

/// Which gendered table a first name belongs to, if any
pub fn first_name_gender(first_name: &str) -> Option<Gender> {
    if MASCULINE_FIRST_NAMES.contains(&first_name) {
        Some(Gender::Male)
    } else if FEMININE_FIRST_NAMES.contains(&first_name) {
        Some(Gender::Female)
    } else {
        None
    }
}
