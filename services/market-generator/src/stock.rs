//! Stock records produced by the generator

use serde::{Deserialize, Serialize};

/// Stock information for a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyStock {
    /// Name of the company
    pub name: String,
    /// Three-letter uppercase ticker
    pub symbol: String,
    /// Opening share price
    pub open: f64,
    /// Highest share price of the day
    pub high: f64,
    /// Closing share price
    pub close: f64,
    /// Market capitalization
    pub market_cap: u64,
    /// Fraction of the total opening market capitalization; unset until the
    /// whole market has been generated
    pub company_weight: Option<f64>,
}

impl CompanyStock {
    /// Copy of this record carrying `weight`
    #[must_use]
    pub fn with_weight(self, weight: f64) -> Self {
        Self {
            company_weight: Some(weight),
            ..self
        }
    }
}

/// A generated market: the companies, their total opening capitalization
/// and their symbols in generation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMarket {
    pub companies: Vec<CompanyStock>,
    pub opening_market_value: u64,
    pub symbols: Vec<String>,
}

impl GeneratedMarket {
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Sum of all assigned company weights
    pub fn total_weight(&self) -> f64 {
        self.companies
            .iter()
            .filter_map(|company| company.company_weight)
            .sum()
    }

    /// Split into `(companies, opening_market_value, symbols)`
    pub fn into_parts(self) -> (Vec<CompanyStock>, u64, Vec<String>) {
        (self.companies, self.opening_market_value, self.symbols)
    }
}
