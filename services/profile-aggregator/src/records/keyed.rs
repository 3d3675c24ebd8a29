//! Attribute-bag representation: fields looked up by name

use super::ProfileRecord;
use crate::profile::{Location, Profile, fields};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::str::FromStr;
use synthq_common::{DatasetError, DatasetResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single typed value in an attribute bag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Attribute {
    Text(String),
    Date(NaiveDate),
    Location(Location),
    List(Vec<String>),
}

impl Attribute {
    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Date(_) => "date",
            Self::Location(_) => "location",
            Self::List(_) => "list",
        }
    }
}

/// Profile stored as a map from field name to attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyedProfile {
    attributes: BTreeMap<String, Attribute>,
}

impl KeyedProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this bag with `key` set to `value`
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Attribute) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Attribute> {
        self.attributes.get(key)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Decode a JSON object into an attribute bag.
    ///
    /// `birthdate` must be a `YYYY-MM-DD` string, `current_location` a pair of
    /// decimal strings or numbers, and `website` (or any other list) an array of
    /// strings. Every other field must be a string.
    pub fn from_json(value: &Value) -> DatasetResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            DatasetError::invalid_type(format!(
                "expected a keyed record (JSON object), found {}",
                json_kind(value)
            ))
        })?;
        Self::from_json_object(object)
    }

    fn from_json_object(object: &Map<String, Value>) -> DatasetResult<Self> {
        let attributes = object
            .iter()
            .map(|(key, value)| Ok((key.clone(), decode_attribute(key, value)?)))
            .collect::<DatasetResult<BTreeMap<_, _>>>()?;

        Ok(Self { attributes })
    }

    fn require(&self, key: &str) -> DatasetResult<&Attribute> {
        self.attributes
            .get(key)
            .ok_or_else(|| DatasetError::invalid_type(format!("record has no '{key}' field")))
    }

    fn text(&self, key: &str) -> DatasetResult<&str> {
        match self.require(key)? {
            Attribute::Text(text) => Ok(text),
            other => Err(mismatch(key, "text", other)),
        }
    }
}

impl From<&Profile> for KeyedProfile {
    fn from(profile: &Profile) -> Self {
        let text = |value: &str| Attribute::Text(value.to_owned());

        let attributes = BTreeMap::from([
            (fields::ADDRESS.to_owned(), text(&profile.address)),
            (fields::BIRTHDATE.to_owned(), Attribute::Date(profile.birthdate)),
            (fields::BLOOD_GROUP.to_owned(), text(&profile.blood_group)),
            (fields::COMPANY.to_owned(), text(&profile.company)),
            (
                fields::CURRENT_LOCATION.to_owned(),
                Attribute::Location(profile.current_location),
            ),
            (fields::JOB.to_owned(), text(&profile.job)),
            (fields::MAIL.to_owned(), text(&profile.mail)),
            (fields::NAME.to_owned(), text(&profile.name)),
            (fields::RESIDENCE.to_owned(), text(&profile.residence)),
            (fields::SEX.to_owned(), text(&profile.sex)),
            (fields::SSN.to_owned(), text(&profile.ssn)),
            (fields::USERNAME.to_owned(), text(&profile.username)),
            (fields::WEBSITE.to_owned(), Attribute::List(profile.website.clone())),
        ]);

        Self { attributes }
    }
}

impl ProfileRecord for KeyedProfile {
    fn name(&self) -> DatasetResult<&str> {
        self.text(fields::NAME)
    }

    fn birthdate(&self) -> DatasetResult<NaiveDate> {
        match self.require(fields::BIRTHDATE)? {
            Attribute::Date(date) => Ok(*date),
            other => Err(mismatch(fields::BIRTHDATE, "date", other)),
        }
    }

    fn blood_group(&self) -> DatasetResult<&str> {
        self.text(fields::BLOOD_GROUP)
    }

    fn current_location(&self) -> DatasetResult<Location> {
        match self.require(fields::CURRENT_LOCATION)? {
            Attribute::Location(location) => Ok(*location),
            other => Err(mismatch(fields::CURRENT_LOCATION, "location", other)),
        }
    }
}

fn mismatch(key: &str, expected: &str, found: &Attribute) -> DatasetError {
    DatasetError::invalid_type(format!(
        "field '{key}' holds a {} value, expected {expected}",
        found.kind()
    ))
}

fn decode_attribute(key: &str, value: &Value) -> DatasetResult<Attribute> {
    match (key, value) {
        (fields::BIRTHDATE, Value::String(raw)) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Attribute::Date)
            .map_err(|e| {
                DatasetError::invalid_type(format!("field '{key}' is not a date ({raw}): {e}"))
            }),
        (fields::CURRENT_LOCATION, Value::Array(pair)) => match pair.as_slice() {
            [latitude, longitude] => Ok(Attribute::Location(Location::new(
                decode_decimal(key, latitude)?,
                decode_decimal(key, longitude)?,
            ))),
            _ => Err(DatasetError::invalid_type(format!(
                "field '{key}' must hold exactly two coordinates, found {}",
                pair.len()
            ))),
        },
        (fields::BIRTHDATE | fields::CURRENT_LOCATION, other) => Err(DatasetError::invalid_type(
            format!("field '{key}' has unexpected JSON {}", json_kind(other)),
        )),
        (_, Value::String(text)) => Ok(Attribute::Text(text.clone())),
        (_, Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_owned).ok_or_else(|| {
                    DatasetError::invalid_type(format!(
                        "list field '{key}' contains a JSON {}",
                        json_kind(item)
                    ))
                })
            })
            .collect::<DatasetResult<Vec<_>>>()
            .map(Attribute::List),
        (_, other) => Err(DatasetError::invalid_type(format!(
            "field '{key}' has unexpected JSON {}",
            json_kind(other)
        ))),
    }
}

fn decode_decimal(key: &str, value: &Value) -> DatasetResult<Decimal> {
    let raw = match value {
        Value::String(raw) => raw.clone(),
        Value::Number(number) => number.to_string(),
        other => {
            return Err(DatasetError::invalid_type(format!(
                "coordinate in '{key}' is a JSON {}",
                json_kind(other)
            )));
        }
    };

    Decimal::from_str(&raw).map_err(|e| {
        DatasetError::invalid_type(format!("coordinate in '{key}' is not a decimal ({raw}): {e}"))
    })
}

/// Human-readable name of a JSON value's kind
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
