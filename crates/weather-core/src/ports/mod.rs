//! Port traits (interfaces) for dependency injection

pub mod clock;
pub mod weather;

pub use clock::{Clock, FixedClock, SystemClock};
pub use weather::WeatherService;
