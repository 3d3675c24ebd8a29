//! Single-pass aggregation over profile records

use crate::profile::Location;
use crate::records::keyed::json_kind;
use crate::records::{KeyedProfile, ProfileRecord, ProfileTuple, RecordShape};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use synthq_common::constants::profiles::PROFILE_ARITY;
use synthq_common::{DatasetError, DatasetResult};
use tracing::debug;

/// Summary statistics of a profile collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Occurrences of every blood group label seen
    pub blood_count: FxHashMap<String, usize>,
    /// Arithmetic mean of all coordinate pairs
    pub mean_location: Location,
    /// Name and age in days of every record tied at the maximum age
    pub oldest: FxHashMap<String, i64>,
    /// Mean age in days
    pub average_age: f64,
}

impl AggregateResult {
    /// Number of records the result was computed from
    pub fn record_count(&self) -> usize {
        self.blood_count.values().sum()
    }

    /// Age in days of the oldest record(s)
    pub fn max_age(&self) -> Option<i64> {
        self.oldest.values().copied().max()
    }
}

/// Date used as "today" by the clock-driven entry points
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Aggregate `records` with ages measured against the current date
pub fn aggregate<R: ProfileRecord>(records: &[R]) -> DatasetResult<AggregateResult> {
    aggregate_records(records, today())
}

/// Aggregate attribute-bag records
pub fn aggregate_keyed(
    records: &[KeyedProfile],
    today: NaiveDate,
) -> DatasetResult<AggregateResult> {
    aggregate_records(records, today)
}

/// Aggregate fixed-shape records
pub fn aggregate_positional(
    records: &[ProfileTuple],
    today: NaiveDate,
) -> DatasetResult<AggregateResult> {
    aggregate_records(records, today)
}

/// Aggregate any record representation in a single pass.
///
/// Ages are `(today - birthdate)` in whole days. Fails with `EmptyInput` for
/// an empty slice and with `InvalidType` if a record cannot resolve one of
/// the aggregated fields; no partial result is returned.
pub fn aggregate_records<R: ProfileRecord>(
    records: &[R],
    today: NaiveDate,
) -> DatasetResult<AggregateResult> {
    if records.is_empty() {
        return Err(DatasetError::EmptyInput);
    }

    let mut blood_count: FxHashMap<String, usize> = FxHashMap::default();
    let mut sum_latitude = Decimal::ZERO;
    let mut sum_longitude = Decimal::ZERO;
    let mut total_age: i64 = 0;
    let mut max_age = i64::MIN;
    let mut oldest_names: Vec<&str> = Vec::new();

    for record in records {
        let blood_group = record.blood_group()?;
        match blood_count.get_mut(blood_group) {
            Some(count) => *count += 1,
            None => {
                blood_count.insert(blood_group.to_owned(), 1);
            }
        }

        let location = record.current_location()?;
        sum_latitude += location.latitude;
        sum_longitude += location.longitude;

        let age = (today - record.birthdate()?).num_days();
        total_age += age;

        match age.cmp(&max_age) {
            Ordering::Greater => {
                max_age = age;
                oldest_names.clear();
                oldest_names.push(record.name()?);
            }
            Ordering::Equal => oldest_names.push(record.name()?),
            Ordering::Less => {}
        }
    }

    let count = records.len();
    let divisor = Decimal::from(count);
    let mean_location = Location::new(sum_latitude / divisor, sum_longitude / divisor);

    let oldest = oldest_names
        .into_iter()
        .map(|name| (name.to_owned(), max_age))
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let average_age = total_age as f64 / count as f64;

    debug!(
        records = count,
        blood_groups = blood_count.len(),
        max_age,
        "Aggregated profile records"
    );

    Ok(AggregateResult {
        blood_count,
        mean_location,
        oldest,
        average_age,
    })
}

/// Aggregate a JSON document holding records of the given shape.
///
/// Validation runs in order: the document must be an array (`InvalidType`),
/// it must not be empty (`EmptyInput`), and its first element must be a
/// record of `shape` (`InvalidType`). Each element is then decoded; the
/// first one that fails is reported with its index.
pub fn aggregate_document(
    document: &Value,
    shape: RecordShape,
    today: NaiveDate,
) -> DatasetResult<AggregateResult> {
    let items = document.as_array().ok_or_else(|| {
        DatasetError::invalid_type(format!(
            "expected a JSON array of records, found {}",
            json_kind(document)
        ))
    })?;

    let first = items.first().ok_or(DatasetError::EmptyInput)?;

    match shape {
        RecordShape::Keyed => {
            if !first.is_object() {
                return Err(DatasetError::invalid_type(format!(
                    "expected keyed records (JSON objects), first element is a {}",
                    json_kind(first)
                )));
            }
            let records = decode_all(items, KeyedProfile::from_json)?;
            aggregate_keyed(&records, today)
        }
        RecordShape::Positional => {
            let is_tuple = first
                .as_array()
                .is_some_and(|fields| fields.len() == PROFILE_ARITY);
            if !is_tuple {
                return Err(DatasetError::invalid_type(format!(
                    "expected positional records (JSON arrays of {PROFILE_ARITY} fields), \
                     first element is a {}",
                    json_kind(first)
                )));
            }
            let records = decode_all(items, |item| {
                ProfileTuple::deserialize(item)
                    .map_err(|e| DatasetError::invalid_type(e.to_string()))
            })?;
            aggregate_positional(&records, today)
        }
    }
}

fn decode_all<T>(
    items: &[Value],
    decode: impl Fn(&Value) -> DatasetResult<T>,
) -> DatasetResult<Vec<T>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            decode(item).map_err(|e| match e {
                DatasetError::InvalidType(reason) => {
                    DatasetError::InvalidType(format!("record {index}: {reason}"))
                }
                other => other,
            })
        })
        .collect()
}
