//! Error types for the weather store

use crate::types::Unit;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeatherError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeatherError {
    /// The reading is below absolute zero once converted to Kelvin, or not a finite number.
    #[error("Invalid temperature: {value} {unit} is not a physically possible reading")]
    InvalidTemperature { value: f64, unit: Unit },

    #[error("City not found: {0}")]
    NotFound(String),
}

/// Returned when a unit name is not one of kelvin, celsius or fahrenheit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown unit of measurement: {0}")]
pub struct ParseUnitError(pub String);
