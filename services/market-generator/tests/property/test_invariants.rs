//! Property tests for market generation invariants

use market_generator::*;
use proptest::prelude::*;
use test_utils::*;

proptest! {
    #[test]
    fn prop_symbol_is_always_three_uppercase_letters(name in ".{0,12}", seed in any::<u64>()) {
        let symbol = derive_symbol(&mut seeded_rng(seed), &name);
        prop_assert_eq!(symbol.len(), 3);
        prop_assert!(symbol.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn prop_drawn_price_stays_in_band(
        base in 100u32..=2000,
        pct in 0u32..=5,
        seed in any::<u64>(),
    ) {
        let base = f64::from(base);
        let delta = f64::from(pct) / 100.0 * base;
        let price = generate_price(&mut seeded_rng(seed), base, f64::from(pct), false);
        prop_assert!(price >= (base - delta).trunc());
        prop_assert!(price <= (base + delta).trunc());
    }

    #[test]
    fn prop_uniform_shift_moves_points_by_shift(shift in -50i32..=50, seed in any::<u64>()) {
        let market = generate_companies(&mut seeded_rng(seed), 10).unwrap();
        let session = apply_uniform_shift(&market, shift);
        prop_assert!((session.point_change - (100.0 + f64::from(shift))).abs() < 1e-6);
        prop_assert_eq!(session.is_up(), shift > 0);
    }
}
