//! Property-based tests for profile aggregation

pub mod test_invariants;
