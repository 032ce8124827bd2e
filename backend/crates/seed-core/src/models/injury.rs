use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Body area with a known injury
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Injury {
    #[serde(rename = "ברך")]
    Knee,
    #[serde(rename = "כתף")]
    Shoulder,
    #[serde(rename = "גב")]
    Back,
    #[serde(rename = "מרפק")]
    Elbow,
    #[serde(rename = "קרסול")]
    Ankle,
}

impl Injury {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Knee => "ברך",
            Self::Shoulder => "כתף",
            Self::Back => "גב",
            Self::Elbow => "מרפק",
            Self::Ankle => "קרסול",
        }
    }
}

impl fmt::Display for Injury {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Injury {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "ברך" => Ok(Self::Knee),
            "כתף" => Ok(Self::Shoulder),
            "גב" => Ok(Self::Back),
            "מרפק" => Ok(Self::Elbow),
            "קרסול" => Ok(Self::Ankle),
            _ => Err(CoreError::InvalidInjury {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
