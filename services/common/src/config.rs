//! Configuration for the dataset generators

use crate::constants::{market, profiles, random};
use crate::errors::{DatasetError, DatasetResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix (`SYNTHQ__MARKET__COMPANY_COUNT=50`)
pub const ENV_PREFIX: &str = "SYNTHQ";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Random source configuration
    pub random: RandomConfig,
    /// Profile dataset configuration
    pub profiles: ProfileConfig,
    /// Market dataset configuration
    pub market: MarketConfig,
}

/// Random source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Seed for the process-wide `StdRng`
    pub seed: u64,
}

/// Profile dataset configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Number of profiles generated for the representation comparison
    pub sample_size: usize,
}

/// Market dataset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Companies generated per session
    pub company_count: usize,
    /// Maximum open/close fluctuation around the base price, in percent
    pub fluctuation_pct: u32,
    /// Lowest sampled base share price
    pub share_price_min: u32,
    /// Highest sampled base share price
    pub share_price_max: u32,
    /// Lowest sampled market capitalization
    pub market_cap_min: u64,
    /// Highest sampled market capitalization
    pub market_cap_max: u64,
    /// Largest absolute capital shift per company in a session, in percent
    pub session_swing_pct: i32,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            seed: random::DEFAULT_SEED,
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            sample_size: profiles::DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            company_count: market::DEFAULT_COMPANY_COUNT,
            fluctuation_pct: market::MARKET_FLUCTUATION_PCT,
            share_price_min: market::SHARE_PRICE_MIN,
            share_price_max: market::SHARE_PRICE_MAX,
            market_cap_min: market::MARKET_CAP_MIN,
            market_cap_max: market::MARKET_CAP_MAX,
            session_swing_pct: market::SESSION_SWING_PCT,
        }
    }
}

impl SynthConfig {
    /// Load configuration: defaults, then the optional file, then `SYNTHQ__*`
    /// environment variables.
    pub fn load(path: Option<&Path>) -> DatasetResult<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        debug!(
            file = ?path,
            seed = config.random.seed,
            companies = config.market.company_count,
            sample_size = config.profiles.sample_size,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Reject ranges and counts the generators cannot work with
    pub fn validate(&self) -> DatasetResult<()> {
        self.market.validate()?;

        if self.profiles.sample_size == 0 {
            return Err(DatasetError::Config(
                "profiles.sample_size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl MarketConfig {
    /// Reject market ranges that cannot be sampled or would yield a zero
    /// total capitalization
    pub fn validate(&self) -> DatasetResult<()> {
        if self.company_count == 0 {
            return Err(DatasetError::Config(
                "market.company_count must be at least 1".to_string(),
            ));
        }
        if self.share_price_min > self.share_price_max {
            return Err(DatasetError::Config(format!(
                "market.share_price_min ({}) exceeds market.share_price_max ({})",
                self.share_price_min, self.share_price_max
            )));
        }
        if self.fluctuation_pct > 100 {
            return Err(DatasetError::Config(format!(
                "market.fluctuation_pct ({}) must not exceed 100",
                self.fluctuation_pct
            )));
        }
        if self.market_cap_min == 0 || self.market_cap_min > self.market_cap_max {
            return Err(DatasetError::Config(format!(
                "market cap range [{}, {}] is empty or starts at zero",
                self.market_cap_min, self.market_cap_max
            )));
        }
        if self.session_swing_pct < 0 {
            return Err(DatasetError::Config(
                "market.session_swing_pct must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}
