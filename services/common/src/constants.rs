//! Constants used across the generators and aggregators
//!
//! Single source of truth for every range and magic number

/// Profile dataset constants
pub mod profiles {
    /// Blood group labels a generated profile can carry
    pub const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

    /// Number of profiles generated for the representation comparison
    pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;

    /// Oldest generated birthdate, in years before today
    pub const MAX_AGE_YEARS: i64 = 115;

    /// Approximate days per year used to bound generated birthdates
    pub const DAYS_PER_YEAR: i64 = 365;

    /// Fractional digits of generated coordinates
    pub const COORDINATE_SCALE: u32 = 6;

    /// Latitude bound in degrees
    pub const MAX_LATITUDE: i64 = 90;

    /// Longitude bound in degrees
    pub const MAX_LONGITUDE: i64 = 180;

    /// Number of fields carried by a profile record
    pub const PROFILE_ARITY: usize = 13;
}

/// Market dataset constants
pub mod market {
    /// Number of companies in a default market session
    pub const DEFAULT_COMPANY_COUNT: usize = 100;

    /// Length of a ticker symbol
    pub const SYMBOL_LENGTH: usize = 3;

    /// Maximum intraday price fluctuation in percent
    pub const MARKET_FLUCTUATION_PCT: u32 = 5;

    /// Lowest sampled base share price
    pub const SHARE_PRICE_MIN: u32 = 100;

    /// Highest sampled base share price
    pub const SHARE_PRICE_MAX: u32 = 2000;

    /// Lowest sampled market capitalization
    pub const MARKET_CAP_MIN: u64 = 1_000_000;

    /// Highest sampled market capitalization
    pub const MARKET_CAP_MAX: u64 = 1_000_000_000;

    /// Largest absolute per-company capital shift in a session, in percent
    pub const SESSION_SWING_PCT: i32 = 10;

    /// Point level of a market that did not move
    pub const POINTS_BASELINE: f64 = 100.0;

    /// Percent scale
    pub const PERCENT: f64 = 100.0;
}

/// Random source defaults
pub mod random {
    /// Seed used when neither the configuration nor the command line set one
    pub const DEFAULT_SEED: u64 = 0;
}
