//! Weather Core Library
//!
//! Domain types, unit conversion and the in-memory store that keeps the
//! latest temperature observation per city.

pub mod convert;
pub mod error;
pub mod ports;
pub mod store;
pub mod types;

pub use convert::convert;
pub use error::{ParseUnitError, Result, WeatherError};
pub use ports::{Clock, FixedClock, SystemClock, WeatherService};
pub use store::WeatherStore;
pub use types::*;
