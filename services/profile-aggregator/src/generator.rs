//! Synthetic profile generator backed by `fake`

use crate::profile::{Location, Profile};
use chrono::{Duration, NaiveDate};
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{DomainSuffix, FreeEmail, Username};
use fake::faker::job::en::Title;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use fake::faker::number::en::NumberWithFormat;
use rand::Rng;
use rust_decimal::Decimal;
use synthq_common::constants::profiles::{
    BLOOD_GROUPS, COORDINATE_SCALE, DAYS_PER_YEAR, MAX_AGE_YEARS, MAX_LATITUDE, MAX_LONGITUDE,
};
use tracing::info;

const SSN_FORMAT: &str = "###-##-####";
const MAX_WEBSITES: usize = 4;

/// Generates profiles with the fixed field set.
///
/// Every draw comes from the caller's random source, so a seeded `StdRng`
/// reproduces the same profiles.
#[derive(Debug, Clone, Copy)]
pub struct ProfileGenerator {
    reference_date: NaiveDate,
}

impl ProfileGenerator {
    /// Generator whose birthdates fall between 115 years before
    /// `reference_date` and `reference_date` itself
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Generate `count` profiles
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Profile> {
        info!("Generating {} profiles", count);
        (0..count).map(|_| self.profile(rng)).collect()
    }

    /// Generate a single profile
    pub fn profile<R: Rng + ?Sized>(&self, rng: &mut R) -> Profile {
        let days_back = rng.gen_range(0..=MAX_AGE_YEARS * DAYS_PER_YEAR);
        let birthdate = self.reference_date - Duration::days(days_back);

        let blood_group = BLOOD_GROUPS[rng.gen_range(0..BLOOD_GROUPS.len())].to_string();
        let sex = if rng.gen_bool(0.5) { "M" } else { "F" }.to_string();

        let website_count = rng.gen_range(1..=MAX_WEBSITES);
        let website = (0..website_count)
            .map(|_| {
                format!(
                    "https://www.{}.{}/",
                    Word().fake_with_rng::<String, _>(rng),
                    DomainSuffix().fake_with_rng::<String, _>(rng)
                )
            })
            .collect();

        Profile {
            address: postal_address(rng),
            birthdate,
            blood_group,
            company: CompanyName().fake_with_rng(rng),
            current_location: coordinates(rng),
            job: Title().fake_with_rng(rng),
            mail: FreeEmail().fake_with_rng(rng),
            name: Name().fake_with_rng(rng),
            residence: postal_address(rng),
            sex,
            ssn: NumberWithFormat(SSN_FORMAT).fake_with_rng(rng),
            username: Username().fake_with_rng(rng),
            website,
        }
    }
}

fn postal_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let building: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let state: String = StateAbbr().fake_with_rng(rng);
    let zip: String = ZipCode().fake_with_rng(rng);
    format!("{building} {street}\n{city}, {state} {zip}")
}

fn coordinates<R: Rng + ?Sized>(rng: &mut R) -> Location {
    let scale = 10_i64.pow(COORDINATE_SCALE);
    let latitude = rng.gen_range(-MAX_LATITUDE * scale..=MAX_LATITUDE * scale);
    let longitude = rng.gen_range(-MAX_LONGITUDE * scale..=MAX_LONGITUDE * scale);
    Location::new(
        Decimal::new(latitude, COORDINATE_SCALE),
        Decimal::new(longitude, COORDINATE_SCALE),
    )
}
