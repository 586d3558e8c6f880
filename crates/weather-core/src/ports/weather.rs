//! Weather service trait

use crate::types::{Observation, Unit};
use crate::Result;

/// Stores and retrieves the latest temperature reading per city.
///
/// City names are normalized by the implementation, so callers pass the raw
/// name exactly as the user supplied it.
pub trait WeatherService: Send + Sync {
    /// Record a reading and return the unix timestamp it was stored under.
    fn report(&self, city: &str, temperature: f64, unit: Unit) -> Result<i64>;

    /// Latest reading for a city, converted to `unit`.
    fn temperature_in(&self, city: &str, unit: Unit) -> Result<Observation>;

    /// Every stored city key, in no particular order.
    fn cities(&self) -> Vec<String>;
}
