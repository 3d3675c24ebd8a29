//! Unit tests for session settlement

use market_generator::*;
use rstest::*;
use test_utils::*;

#[fixture]
fn market() -> GeneratedMarket {
    init_test_logging();
    generate_companies(&mut seeded_rng(42), 100).unwrap()
}

#[rstest]
fn test_ten_percent_rise_is_up(market: GeneratedMarket) {
    let session = apply_uniform_shift(&market, 10);
    assert!(session.is_up());
    assert_approx_eq(session.point_change, 110.0, 1e-6);
}

#[rstest]
#[case(20, 120.0)]
#[case(-20, 80.0)]
#[case(-10, 90.0)]
#[case(0, 100.0)]
fn test_uniform_shift_points(market: GeneratedMarket, #[case] shift: i32, #[case] points: f64) {
    let session = apply_uniform_shift(&market, shift);
    assert_approx_eq(session.point_change, points, 1e-6);
}

#[rstest]
fn test_ten_percent_fall_is_down(market: GeneratedMarket) {
    let session = apply_uniform_shift(&market, -10);
    assert!(!session.is_up());
    assert_approx_eq(session.point_change, 90.0, 1e-6);
}

#[rstest]
fn test_flat_session_is_not_up(market: GeneratedMarket) {
    let session = apply_uniform_shift(&market, 0);
    assert!(!session.is_up());
}

#[rstest]
fn test_new_values_follow_each_shift() {
    let market = market_with_caps(&[1_000, 3_000]);
    let session = apply_shifts(&market, &[10, -10]).unwrap();

    assert_approx_eq(session.new_values[0], 1_100.0, 1e-9);
    assert_approx_eq(session.new_values[1], 2_700.0, 1e-9);
    assert_approx_eq(session.current_market_value, 3_800.0, 1e-9);
    assert_approx_eq(session.point_change, 95.0, 1e-9);
    assert_eq!(session.opening_market_value, 4_000);
}

#[rstest]
#[case(0)]
#[case(99)]
#[case(101)]
fn test_shift_count_must_match(market: GeneratedMarket, #[case] count: usize) {
    let shifts = vec![5; count];
    let err = apply_shifts(&market, &shifts).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidArgument(_)));
}

#[rstest]
fn test_simulated_session_stays_within_swing(market: GeneratedMarket) {
    let session = simulate_session(&mut seeded_rng(9), &market, 10);

    assert_eq!(session.new_values.len(), market.len());
    for (company, value) in market.companies.iter().zip(&session.new_values) {
        let cap = company.market_cap as f64;
        assert_in_range(*value, cap * 0.9 - 1e-6, cap * 1.1 + 1e-6);
    }
    assert_in_range(session.point_change, 90.0, 110.0);
}

#[rstest]
fn test_simulation_is_reproducible(market: GeneratedMarket) {
    let first = simulate_session(&mut seeded_rng(2), &market, 10);
    let second = simulate_session(&mut seeded_rng(2), &market, 10);
    assert_eq!(first, second);
}
