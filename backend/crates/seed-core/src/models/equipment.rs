use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Equipment type a user has access to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equipment {
    #[serde(rename = "משקולות")]
    Dumbbells,
    #[serde(rename = "מוטות")]
    Barbells,
    #[serde(rename = "מכשירים")]
    Machines,
    #[serde(rename = "גומיות התנגדות")]
    ResistanceBands,
}

impl Equipment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dumbbells => "משקולות",
            Self::Barbells => "מוטות",
            Self::Machines => "מכשירים",
            Self::ResistanceBands => "גומיות התנגדות",
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Equipment {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "משקולות" => Ok(Self::Dumbbells),
            "מוטות" => Ok(Self::Barbells),
            "מכשירים" => Ok(Self::Machines),
            "גומיות התנגדות" => Ok(Self::ResistanceBands),
            _ => Err(CoreError::InvalidEquipment {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
