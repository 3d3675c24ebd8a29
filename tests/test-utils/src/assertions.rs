//! Custom assertions for testing

use market_generator::{CompanyStock, GeneratedMarket};
use std::fmt::Debug;

/// Assert that two floating point values are approximately equal
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "Values not approximately equal: {} != {} (diff: {}, tolerance: {})",
        left,
        right,
        diff,
        tolerance
    );
}

/// Assert that a value is within a range
pub fn assert_in_range<T: PartialOrd + Debug>(value: T, min: T, max: T) {
    assert!(
        value >= min && value <= max,
        "Value {:?} not in range [{:?}, {:?}]",
        value,
        min,
        max
    );
}

/// Assert that an error contains a specific message
pub fn assert_error_contains<E: std::fmt::Display>(error: &E, expected: &str) {
    let error_str = error.to_string();
    assert!(
        error_str.contains(expected),
        "Error message '{}' does not contain '{}'",
        error_str,
        expected
    );
}

/// Assert that a symbol is three uppercase ASCII letters
pub fn assert_valid_symbol(symbol: &str) {
    assert_eq!(symbol.len(), 3, "Symbol {:?} is not 3 characters", symbol);
    assert!(
        symbol.chars().all(|c| c.is_ascii_uppercase()),
        "Symbol {:?} contains a non-uppercase character",
        symbol
    );
}

/// Assert the price ordering every generated company satisfies
pub fn assert_price_ordering(company: &CompanyStock) {
    assert!(company.open > 0.0, "{}: open {} not positive", company.symbol, company.open);
    assert!(
        company.high >= company.open,
        "{}: high {} below open {}",
        company.symbol,
        company.high,
        company.open
    );
    assert!(
        company.high >= company.close,
        "{}: high {} below close {}",
        company.symbol,
        company.high,
        company.close
    );
}

/// Assert that every company is weighted and the weights sum to one
pub fn assert_weights_normalized(market: &GeneratedMarket) {
    for company in &market.companies {
        let weight = company
            .company_weight
            .unwrap_or_else(|| panic!("{} has no weight", company.symbol));
        assert_in_range(weight, 0.0, 1.0);
    }
    assert_approx_eq(market.total_weight(), 1.0, 1e-9);
}
