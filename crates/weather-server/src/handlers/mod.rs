//! HTTP handlers

pub mod cities;
pub mod health;
pub mod report;
pub mod temperature;

pub use health::health;
