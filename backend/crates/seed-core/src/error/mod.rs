use error_location::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid gender: {value} {location}")]
    InvalidGender {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid fitness goal: {value} {location}")]
    InvalidGoal {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid equipment: {value} {location}")]
    InvalidEquipment {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid injury: {value} {location}")]
    InvalidInjury {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
