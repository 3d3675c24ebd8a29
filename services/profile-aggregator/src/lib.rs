//! Profile Aggregator
//!
//! Summary statistics over synthetic personal profiles:
//! - Blood group histogram
//! - Mean current location (decimal arithmetic)
//! - Oldest record holder(s), ties reported in full
//! - Average age in days
//!
//! Records arrive in one of two shapes, an attribute bag keyed by field name
//! ([`KeyedProfile`]) or a fixed positional tuple ([`ProfileTuple`]). Both
//! implement [`ProfileRecord`], so the aggregation is written once.

pub mod aggregate;
pub mod comparison;
pub mod generator;
pub mod profile;
pub mod records;

pub use aggregate::{
    AggregateResult, aggregate, aggregate_document, aggregate_keyed, aggregate_positional,
    aggregate_records, today,
};
pub use comparison::{RepresentationComparison, compare_representations};
pub use generator::ProfileGenerator;
pub use profile::{Location, Profile};
pub use records::{Attribute, KeyedProfile, ProfileRecord, ProfileTuple, RecordShape};
pub use synthq_common::{DatasetError, DatasetResult};
