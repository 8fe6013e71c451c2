//! Domain library for the Schengen document pre-check service.

pub mod config;
pub mod error;
pub mod precheck;
pub mod telemetry;
