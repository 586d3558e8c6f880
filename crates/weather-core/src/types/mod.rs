//! Core domain types

pub mod city;
pub mod observation;
pub mod unit;

pub use city::*;
pub use observation::*;
pub use unit::*;
