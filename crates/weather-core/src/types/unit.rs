//! Temperature units

use crate::error::ParseUnitError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unit of measurement for a temperature reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kelvin,
    #[default]
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Kelvin, Unit::Celsius, Unit::Fahrenheit];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kelvin => "kelvin",
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kelvin" => Ok(Unit::Kelvin),
            "celsius" => Ok(Unit::Celsius),
            "fahrenheit" => Ok(Unit::Fahrenheit),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}
