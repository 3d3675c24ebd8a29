//! Timing comparison between the keyed and positional representations

use crate::aggregate::{AggregateResult, aggregate_keyed, aggregate_positional};
use crate::profile::Profile;
use crate::records::{KeyedProfile, ProfileTuple};
use chrono::NaiveDate;
use std::time::{Duration, Instant};
use synthq_common::DatasetResult;
use tracing::info;

/// Results and wall times of aggregating both representations
#[derive(Debug, Clone)]
pub struct RepresentationComparison {
    pub keyed: AggregateResult,
    pub positional: AggregateResult,
    pub keyed_elapsed: Duration,
    pub positional_elapsed: Duration,
}

impl RepresentationComparison {
    /// How many times faster the positional pass was than the keyed pass
    pub fn speedup(&self) -> f64 {
        let positional = self.positional_elapsed.as_secs_f64();
        if positional > 0.0 {
            self.keyed_elapsed.as_secs_f64() / positional
        } else {
            f64::INFINITY
        }
    }

    /// Whether both passes produced the same statistics
    pub fn results_match(&self) -> bool {
        self.keyed == self.positional
    }
}

/// Convert `profiles` into both representations and time one aggregation of
/// each. Conversion happens before the clock starts.
pub fn compare_representations(
    profiles: &[Profile],
    today: NaiveDate,
) -> DatasetResult<RepresentationComparison> {
    let keyed_records: Vec<KeyedProfile> = profiles.iter().map(KeyedProfile::from).collect();
    let positional_records: Vec<ProfileTuple> = profiles.iter().map(ProfileTuple::from).collect();

    let start = Instant::now();
    let keyed = aggregate_keyed(&keyed_records, today)?;
    let keyed_elapsed = start.elapsed();

    let start = Instant::now();
    let positional = aggregate_positional(&positional_records, today)?;
    let positional_elapsed = start.elapsed();

    info!(
        "Aggregated {} profiles: keyed {:?}, positional {:?}",
        profiles.len(),
        keyed_elapsed,
        positional_elapsed
    );

    Ok(RepresentationComparison {
        keyed,
        positional,
        keyed_elapsed,
        positional_elapsed,
    })
}
