//! Canonical profile record

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Field names of a profile, in positional order
pub mod fields {
    pub const ADDRESS: &str = "address";
    pub const BIRTHDATE: &str = "birthdate";
    pub const BLOOD_GROUP: &str = "blood_group";
    pub const COMPANY: &str = "company";
    pub const CURRENT_LOCATION: &str = "current_location";
    pub const JOB: &str = "job";
    pub const MAIL: &str = "mail";
    pub const NAME: &str = "name";
    pub const RESIDENCE: &str = "residence";
    pub const SEX: &str = "sex";
    pub const SSN: &str = "ssn";
    pub const USERNAME: &str = "username";
    pub const WEBSITE: &str = "website";

    /// All field names, sorted; position `i` is field `i` of a `ProfileTuple`
    pub const ALL: [&str; 13] = [
        ADDRESS,
        BIRTHDATE,
        BLOOD_GROUP,
        COMPANY,
        CURRENT_LOCATION,
        JOB,
        MAIL,
        NAME,
        RESIDENCE,
        SEX,
        SSN,
        USERNAME,
        WEBSITE,
    ];
}

/// A pair of decimal coordinates.
///
/// Serialized as a two-element array `[latitude, longitude]` with each
/// coordinate as a decimal string, so no precision is lost to binary floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Decimal, Decimal)", into = "(Decimal, Decimal)")]
pub struct Location {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl Location {
    pub const fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(Decimal, Decimal)> for Location {
    fn from((latitude, longitude): (Decimal, Decimal)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Location> for (Decimal, Decimal) {
    fn from(location: Location) -> Self {
        (location.latitude, location.longitude)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Profile of an individual.
///
/// Only `name`, `birthdate`, `blood_group` and `current_location` take part in
/// aggregation; the remaining fields are carried along untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub address: String,
    pub birthdate: NaiveDate,
    pub blood_group: String,
    pub company: String,
    pub current_location: Location,
    pub job: String,
    pub mail: String,
    pub name: String,
    pub residence: String,
    pub sex: String,
    pub ssn: String,
    pub username: String,
    pub website: Vec<String>,
}

impl Profile {
    /// Copy of this profile with a different birthdate
    #[must_use]
    pub fn with_birthdate(self, birthdate: NaiveDate) -> Self {
        Self { birthdate, ..self }
    }

    /// Copy of this profile with a different location
    #[must_use]
    pub fn with_location(self, current_location: Location) -> Self {
        Self {
            current_location,
            ..self
        }
    }

    /// Copy of this profile with a different blood group
    #[must_use]
    pub fn with_blood_group(self, blood_group: impl Into<String>) -> Self {
        Self {
            blood_group: blood_group.into(),
            ..self
        }
    }

    /// Copy of this profile with a different name
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }
}
