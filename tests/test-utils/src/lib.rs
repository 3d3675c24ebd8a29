//! Test utilities shared by the dataset crates
//!
//! Seeded random sources, profile and market factories, and assertions
//! for the invariants the generators promise.

pub mod assertions;

pub use factories::*;
pub use assertions::*;

use tracing_subscriber::EnvFilter;

/// Route `tracing` output to the test harness. Safe to call more than once.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
