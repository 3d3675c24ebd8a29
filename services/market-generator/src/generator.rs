//! Company generation

use crate::pricing::{derive_symbol, generate_price};
use crate::stock::{CompanyStock, GeneratedMarket};
use fake::Fake;
use fake::faker::company::en::CompanyName;
use rand::Rng;
use synthq_common::{DatasetError, DatasetResult, MarketConfig};
use tracing::{debug, info};

/// Source of business-style display names
pub trait NameSource {
    fn company_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;
}

/// Company names from `fake`'s English locale
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeCompanyNames;

impl NameSource for FakeCompanyNames {
    fn company_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        CompanyName().fake_with_rng(rng)
    }
}

/// Generates companies within the configured price and cap ranges
#[derive(Debug, Clone, Default)]
pub struct MarketGenerator {
    config: MarketConfig,
}

impl MarketGenerator {
    pub fn new(config: MarketConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Generate `count` companies and assign each its market weight.
    ///
    /// Fails with `InvalidArgument` when `count` is zero or the configured
    /// ranges cannot be sampled.
    pub fn generate<R, N>(&self, rng: &mut R, names: &N, count: usize) -> DatasetResult<GeneratedMarket>
    where
        R: Rng + ?Sized,
        N: NameSource,
    {
        if count == 0 {
            return Err(DatasetError::InvalidArgument(
                "company count must be at least 1".to_string(),
            ));
        }
        self.config.validate().map_err(|e| match e {
            DatasetError::Config(reason) => DatasetError::InvalidArgument(reason),
            other => other,
        })?;

        let unweighted: Vec<CompanyStock> =
            (0..count).map(|_| self.company(rng, names)).collect();

        let opening_market_value: u64 = unweighted.iter().map(|c| c.market_cap).sum();
        let symbols = unweighted.iter().map(|c| c.symbol.clone()).collect();

        #[allow(clippy::cast_precision_loss)]
        let companies = unweighted
            .into_iter()
            .map(|company| {
                let weight = company.market_cap as f64 / opening_market_value as f64;
                company.with_weight(weight)
            })
            .collect();

        info!(
            "Generated {} companies, opening market value {}",
            count, opening_market_value
        );

        Ok(GeneratedMarket {
            companies,
            opening_market_value,
            symbols,
        })
    }

    fn company<R, N>(&self, rng: &mut R, names: &N) -> CompanyStock
    where
        R: Rng + ?Sized,
        N: NameSource,
    {
        let config = &self.config;

        let name = names.company_name(rng);
        let symbol = derive_symbol(rng, &name);
        let market_cap = rng.gen_range(config.market_cap_min..=config.market_cap_max);

        let base_price = f64::from(rng.gen_range(config.share_price_min..=config.share_price_max));
        let fluctuation = f64::from(config.fluctuation_pct);

        let open_pct = f64::from(rng.gen_range(0..=config.fluctuation_pct));
        let open = generate_price(rng, base_price, open_pct, false);
        let high = generate_price(rng, open, fluctuation, true);
        let close_pct = f64::from(rng.gen_range(0..=config.fluctuation_pct));
        let close = generate_price(rng, open, close_pct, false);

        debug!(%symbol, open, high, close, market_cap, "Generated company");

        CompanyStock {
            name,
            symbol,
            open,
            high,
            close,
            market_cap,
            company_weight: None,
        }
    }
}

/// Generate `count` companies with default ranges and `fake` company names
pub fn generate_companies<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> DatasetResult<GeneratedMarket> {
    MarketGenerator::default().generate(rng, &FakeCompanyNames, count)
}
