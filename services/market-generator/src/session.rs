//! Market movement over one session

use crate::stock::GeneratedMarket;
use rand::Rng;
use serde::{Deserialize, Serialize};
use synthq_common::constants::market::{PERCENT, POINTS_BASELINE};
use synthq_common::{DatasetError, DatasetResult};
use tracing::info;

/// Outcome of shifting every company's capital once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSession {
    /// Total capitalization before the session
    pub opening_market_value: u64,
    /// Capitalization of each company after its shift, in generation order
    pub new_values: Vec<f64>,
    /// Total capitalization after the session
    pub current_market_value: f64,
    /// Market level on a 100 baseline: `100 + percent change`
    pub point_change: f64,
}

impl MarketSession {
    /// Whether the market closed above its opening value
    pub fn is_up(&self) -> bool {
        #[allow(clippy::cast_precision_loss)]
        let opening = self.opening_market_value as f64;
        self.current_market_value > opening
    }
}

/// Shift each company by an independent integer percentage drawn from
/// `[-swing_pct, swing_pct]`
pub fn simulate_session<R: Rng + ?Sized>(
    rng: &mut R,
    market: &GeneratedMarket,
    swing_pct: i32,
) -> MarketSession {
    let swing = swing_pct.abs();
    let shifts: Vec<i32> = market
        .companies
        .iter()
        .map(|_| rng.gen_range(-swing..=swing))
        .collect();

    settle(market, &shifts)
}

/// Shift each company by the matching entry of `shifts` (percent).
///
/// Fails with `InvalidArgument` unless there is exactly one shift per
/// company.
pub fn apply_shifts(market: &GeneratedMarket, shifts: &[i32]) -> DatasetResult<MarketSession> {
    if shifts.len() != market.companies.len() {
        return Err(DatasetError::InvalidArgument(format!(
            "expected {} shifts, one per company, got {}",
            market.companies.len(),
            shifts.len()
        )));
    }

    Ok(settle(market, shifts))
}

/// Shift every company by the same percentage
pub fn apply_uniform_shift(market: &GeneratedMarket, shift_pct: i32) -> MarketSession {
    let shifts = vec![shift_pct; market.companies.len()];
    settle(market, &shifts)
}

#[allow(clippy::cast_precision_loss)]
fn settle(market: &GeneratedMarket, shifts: &[i32]) -> MarketSession {
    let new_values: Vec<f64> = market
        .companies
        .iter()
        .zip(shifts)
        .map(|(company, &shift)| {
            let cap = company.market_cap as f64;
            cap + cap * f64::from(shift) / PERCENT
        })
        .collect();

    let current_market_value: f64 = new_values.iter().sum();
    let opening = market.opening_market_value as f64;
    let point_change = POINTS_BASELINE + (current_market_value - opening) / opening * PERCENT;

    info!(
        "Session settled: opening {} current {:.2} points {:.2}",
        market.opening_market_value, current_market_value, point_change
    );

    MarketSession {
        opening_market_value: market.opening_market_value,
        new_values,
        current_market_value,
        point_change,
    }
}
