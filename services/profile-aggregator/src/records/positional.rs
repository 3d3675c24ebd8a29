//! Fixed-shape representation: fields resolved by position

use super::ProfileRecord;
use crate::profile::{Location, Profile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use synthq_common::DatasetResult;

/// Profile stored as a positional tuple.
///
/// Positions follow the sorted field names in [`crate::profile::fields::ALL`]:
/// address, birthdate, blood_group, company, current_location, job, mail,
/// name, residence, sex, ssn, username, website. Serializes to a JSON array of
/// the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTuple(
    pub String,
    pub NaiveDate,
    pub String,
    pub String,
    pub Location,
    pub String,
    pub String,
    pub String,
    pub String,
    pub String,
    pub String,
    pub String,
    pub Vec<String>,
);

impl ProfileTuple {
    pub fn address(&self) -> &str {
        &self.0
    }

    pub fn company(&self) -> &str {
        &self.3
    }

    pub fn job(&self) -> &str {
        &self.5
    }

    pub fn mail(&self) -> &str {
        &self.6
    }

    pub fn residence(&self) -> &str {
        &self.8
    }

    pub fn sex(&self) -> &str {
        &self.9
    }

    pub fn ssn(&self) -> &str {
        &self.10
    }

    pub fn username(&self) -> &str {
        &self.11
    }

    pub fn website(&self) -> &[String] {
        &self.12
    }
}

impl From<&Profile> for ProfileTuple {
    fn from(profile: &Profile) -> Self {
        Self(
            profile.address.clone(),
            profile.birthdate,
            profile.blood_group.clone(),
            profile.company.clone(),
            profile.current_location,
            profile.job.clone(),
            profile.mail.clone(),
            profile.name.clone(),
            profile.residence.clone(),
            profile.sex.clone(),
            profile.ssn.clone(),
            profile.username.clone(),
            profile.website.clone(),
        )
    }
}

impl From<ProfileTuple> for Profile {
    fn from(tuple: ProfileTuple) -> Self {
        let ProfileTuple(
            address,
            birthdate,
            blood_group,
            company,
            current_location,
            job,
            mail,
            name,
            residence,
            sex,
            ssn,
            username,
            website,
        ) = tuple;

        Self {
            address,
            birthdate,
            blood_group,
            company,
            current_location,
            job,
            mail,
            name,
            residence,
            sex,
            ssn,
            username,
            website,
        }
    }
}

impl ProfileRecord for ProfileTuple {
    fn name(&self) -> DatasetResult<&str> {
        Ok(&self.7)
    }

    fn birthdate(&self) -> DatasetResult<NaiveDate> {
        Ok(self.1)
    }

    fn blood_group(&self) -> DatasetResult<&str> {
        Ok(&self.2)
    }

    fn current_location(&self) -> DatasetResult<Location> {
        Ok(self.4)
    }
}
