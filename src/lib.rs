//! Mission outcome engine and mission diary for the 3I/ATLAS intercept simulator.
//!
//! The engine crates stay free of storage and I/O; this crate adds the local
//! mission history store and the diary queries built on top of it so that
//! multiple front-ends (CLI, GUI, web) can share them.

pub mod diary;
pub mod history;

pub use intercept_config as config;
pub use intercept_engine as engine;
pub use intercept_engine::propulsion;
pub use intercept_export as export;
