//! Unit tests for market generation

pub mod generator_tests;
pub mod session_tests;
