//! Record representations and the accessor trait shared by them

pub(crate) mod keyed;
mod positional;

pub use keyed::{Attribute, KeyedProfile};
pub use positional::ProfileTuple;

use crate::profile::{Location, Profile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use synthq_common::DatasetResult;

/// Read access to the fields aggregation needs, whatever the storage.
///
/// Fixed-shape records resolve fields by position and never fail; attribute
/// bags resolve them by key and fail with `InvalidType` when a field is
/// missing or holds the wrong kind of value.
pub trait ProfileRecord {
    fn name(&self) -> DatasetResult<&str>;

    fn birthdate(&self) -> DatasetResult<NaiveDate>;

    fn blood_group(&self) -> DatasetResult<&str>;

    fn current_location(&self) -> DatasetResult<Location>;
}

impl ProfileRecord for Profile {
    fn name(&self) -> DatasetResult<&str> {
        Ok(&self.name)
    }

    fn birthdate(&self) -> DatasetResult<NaiveDate> {
        Ok(self.birthdate)
    }

    fn blood_group(&self) -> DatasetResult<&str> {
        Ok(&self.blood_group)
    }

    fn current_location(&self) -> DatasetResult<Location> {
        Ok(self.current_location)
    }
}

/// Which representation a serialized document holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordShape {
    /// JSON objects keyed by field name
    Keyed,
    /// JSON arrays with one position per field
    Positional,
}

impl FromStr for RecordShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keyed" | "map" => Ok(Self::Keyed),
            "positional" | "tuple" => Ok(Self::Positional),
            other => Err(format!(
                "unknown record shape '{other}', expected 'keyed' or 'positional'"
            )),
        }
    }
}

impl std::fmt::Display for RecordShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyed => f.write_str("keyed"),
            Self::Positional => f.write_str("positional"),
        }
    }
}
