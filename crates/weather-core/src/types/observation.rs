//! Observation types

use serde::Serialize;

/// A single temperature reading and the unix time (seconds) it was recorded.
///
/// The store always keeps `temperature` in Kelvin. Values handed back by
/// queries carry the temperature in whichever unit the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    pub temperature: f64,
    pub timestamp: i64,
}

impl Observation {
    pub fn new(temperature: f64, timestamp: i64) -> Self {
        Self {
            temperature,
            timestamp,
        }
    }
}
