//! Mission outcome engine crate exposing intercept planning and its propulsion tables.

pub mod mission;

pub use facade::*;
pub use intercept_propulsion as propulsion;

mod facade;
