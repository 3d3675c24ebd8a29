//! Common building blocks shared by the SynthQ crates
//!
//! - Error taxonomy for dataset generation and aggregation
//! - Layered configuration (defaults, file, environment)
//! - Named constants for generator ranges
//! - Tracing bootstrap for binaries

pub mod config;
pub mod constants;
pub mod errors;
pub mod telemetry;

pub use self::config::*;
pub use self::errors::*;
