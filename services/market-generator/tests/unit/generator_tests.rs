//! Unit tests for company generation

use market_generator::*;
use pretty_assertions::assert_eq;
use rstest::*;
use synthq_common::MarketConfig;
use test_utils::*;

#[fixture]
fn market() -> GeneratedMarket {
    generate_companies(&mut seeded_rng(42), 100).unwrap()
}

#[rstest]
fn test_generates_requested_company_count(market: GeneratedMarket) {
    assert_eq!(market.len(), 100);
    assert_eq!(market.symbols.len(), 100);
}

#[rstest]
fn test_symbols_follow_generation_order(market: GeneratedMarket) {
    let from_companies: Vec<String> = market.companies.iter().map(|c| c.symbol.clone()).collect();
    assert_eq!(from_companies, market.symbols);
}

#[rstest]
fn test_every_symbol_is_three_uppercase_letters(market: GeneratedMarket) {
    for symbol in &market.symbols {
        assert_valid_symbol(symbol);
    }
}

#[rstest]
fn test_high_is_at_least_open_and_close(market: GeneratedMarket) {
    for company in &market.companies {
        assert_price_ordering(company);
    }
}

#[rstest]
fn test_caps_within_configured_range(market: GeneratedMarket) {
    let config = MarketConfig::default();
    for company in &market.companies {
        assert_in_range(company.market_cap, config.market_cap_min, config.market_cap_max);
    }
}

#[rstest]
fn test_opening_value_is_sum_of_caps(market: GeneratedMarket) {
    let total: u64 = market.companies.iter().map(|c| c.market_cap).sum();
    assert_eq!(market.opening_market_value, total);
}

#[rstest]
fn test_weights_sum_to_one(market: GeneratedMarket) {
    assert_weights_normalized(&market);
    assert_eq!((market.total_weight() * 1e6).round() / 1e6, 1.0);
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(250)]
fn test_arbitrary_counts(#[case] count: usize) {
    let market = generate_companies(&mut seeded_rng(count as u64), count).unwrap();
    assert_eq!(market.len(), count);
    assert_weights_normalized(&market);
}

#[rstest]
fn test_zero_count_is_invalid_argument() {
    let err = generate_companies(&mut seeded_rng(1), 0).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidArgument(_)));
    assert_error_contains(&err, "at least 1");
}

#[rstest]
fn test_same_seed_same_market() {
    let first = generate_companies(&mut seeded_rng(5), 20).unwrap();
    let second = generate_companies(&mut seeded_rng(5), 20).unwrap();
    assert_eq!(first, second);
}

#[rstest]
fn test_custom_ranges_are_respected() {
    let config = MarketConfig {
        share_price_min: 500,
        share_price_max: 500,
        market_cap_min: 10,
        market_cap_max: 20,
        ..MarketConfig::default()
    };
    let generator = MarketGenerator::new(config);
    let market = generator
        .generate(&mut seeded_rng(3), &FakeCompanyNames, 30)
        .unwrap();

    for company in &market.companies {
        assert_in_range(company.market_cap, 10, 20);
        // open lies within 5% of the fixed base price
        assert_in_range(company.open, 475.0, 525.0);
    }
}

#[rstest]
fn test_symbols_come_from_company_names() {
    let names = FixedNames::new(["Globex Corporation"]);
    let market = MarketGenerator::default()
        .generate(&mut seeded_rng(8), &names, 5)
        .unwrap();

    assert!(market.symbols.iter().all(|s| s == "GLO"));
    assert!(market.companies.iter().all(|c| c.name == "Globex Corporation"));
}

#[rstest]
fn test_with_weight_leaves_other_fields_untouched(market: GeneratedMarket) {
    let original = market.companies[0].clone();
    let reweighted = original.clone().with_weight(0.5);

    assert_eq!(reweighted.company_weight, Some(0.5));
    assert_eq!(reweighted.name, original.name);
    assert_eq!(reweighted.symbol, original.symbol);
    assert_eq!(reweighted.market_cap, original.market_cap);
    assert_ne!(original.company_weight, Some(0.5));
}

#[rstest]
#[case::inverted_prices(MarketConfig { share_price_min: 600, share_price_max: 500, ..MarketConfig::default() })]
#[case::zero_caps(MarketConfig { market_cap_min: 0, market_cap_max: 0, ..MarketConfig::default() })]
#[case::inverted_caps(MarketConfig { market_cap_min: 20, market_cap_max: 10, ..MarketConfig::default() })]
#[case::excessive_fluctuation(MarketConfig { fluctuation_pct: 150, ..MarketConfig::default() })]
fn test_unusable_config_is_invalid_argument(#[case] config: MarketConfig) {
    let err = MarketGenerator::new(config)
        .generate(&mut seeded_rng(1), &FakeCompanyNames, 3)
        .unwrap_err();
    assert!(matches!(err, DatasetError::InvalidArgument(_)));
}

#[rstest]
fn test_single_point_ranges_generate_finite_weights() {
    let config = MarketConfig {
        share_price_min: 100,
        share_price_max: 100,
        market_cap_min: 1,
        market_cap_max: 1,
        ..MarketConfig::default()
    };
    let market = MarketGenerator::new(config)
        .generate(&mut seeded_rng(1), &FakeCompanyNames, 4)
        .unwrap();

    assert_eq!(market.opening_market_value, 4);
    assert_weights_normalized(&market);
    let session = apply_uniform_shift(&market, 10);
    assert_approx_eq(session.point_change, 110.0, 1e-9);
}
