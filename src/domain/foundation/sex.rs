//! Sex enum for the respondent attribute feeding domain traversal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Respondent sex as declared at the start of the interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Female,
    Male,
    #[default]
    Unspecified,
}

impl Sex {
    /// Returns true if the respondent is female.
    pub fn is_female(&self) -> bool {
        matches!(self, Sex::Female)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sex::Female => "female",
            Sex::Male => "male",
            Sex::Unspecified => "unspecified",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Sex {
    type Err = ValidationError;

    /// Accepts the codes used by intake forms: `F`/`M`, English and French words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        match code.as_str() {
            "" => Err(ValidationError::empty_field("sex")),
            "f" | "female" | "femme" => Ok(Sex::Female),
            "m" | "h" | "male" | "homme" => Ok(Sex::Male),
            "u" | "x" | "unspecified" | "autre" => Ok(Sex::Unspecified),
            _ => Err(ValidationError::invalid_format(
                "sex",
                format!("unknown sex code '{}'", s.trim()),
            )),
        }
    }
}
