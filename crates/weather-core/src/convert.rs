//! Temperature unit conversion
//!
//! Every conversion goes through Kelvin. Converting a value to the unit it is
//! already in returns it untouched so repeated identity conversions never drift.

use crate::types::Unit;

/// Offset between Celsius and Kelvin.
pub const CELSIUS_OFFSET: f64 = 273.15;

/// Offset between Fahrenheit and Rankine.
pub const FAHRENHEIT_OFFSET: f64 = 459.67;

pub fn to_kelvin(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Kelvin => value,
        Unit::Celsius => value + CELSIUS_OFFSET,
        Unit::Fahrenheit => (value + FAHRENHEIT_OFFSET) * 5.0 / 9.0,
    }
}

pub fn from_kelvin(kelvin: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Kelvin => kelvin,
        Unit::Celsius => kelvin - CELSIUS_OFFSET,
        Unit::Fahrenheit => kelvin * 9.0 / 5.0 - FAHRENHEIT_OFFSET,
    }
}

/// Convert `value` from one unit to another.
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return value;
    }
    from_kelvin(to_kelvin(value, from), to)
}
