use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Training goal a demo user signs up with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitnessGoal {
    /// Aesthetic toning
    #[serde(rename = "חיטוב")]
    Toning,
    #[serde(rename = "עלייה במסה")]
    MassGain,
    #[serde(rename = "ירידה במשקל")]
    WeightLoss,
    /// Keeping current fitness level
    #[serde(rename = "שמירה על כושר")]
    Maintenance,
    #[serde(rename = "שיקום")]
    Rehabilitation,
    #[serde(rename = "כושר כללי")]
    GeneralFitness,
}

impl FitnessGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Toning => "חיטוב",
            Self::MassGain => "עלייה במסה",
            Self::WeightLoss => "ירידה במשקל",
            Self::Maintenance => "שמירה על כושר",
            Self::Rehabilitation => "שיקום",
            Self::GeneralFitness => "כושר כללי",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "חיטוב" => Ok(Self::Toning),
            "עלייה במסה" => Ok(Self::MassGain),
            "ירידה במשקל" => Ok(Self::WeightLoss),
            "שמירה על כושר" => Ok(Self::Maintenance),
            "שיקום" => Ok(Self::Rehabilitation),
            "כושר כללי" => Ok(Self::GeneralFitness),
            _ => Err(CoreError::InvalidGoal {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
