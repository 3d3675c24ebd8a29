//! Property tests for aggregation invariants

use profile_aggregator::*;
use proptest::prelude::*;
use test_utils::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_histogram_total_equals_record_count(seed in any::<u64>(), count in 1usize..200) {
        let factory = ProfileFactory::new().with_seed(seed);
        let profiles = factory.build_batch(count);
        let result = aggregate_records(&profiles, factory.reference_date()).unwrap();
        prop_assert_eq!(result.record_count(), count);
    }

    #[test]
    fn prop_shapes_agree(seed in any::<u64>(), count in 1usize..100) {
        let factory = ProfileFactory::new().with_seed(seed);
        let profiles = factory.build_batch(count);
        let comparison = compare_representations(&profiles, factory.reference_date()).unwrap();
        prop_assert!(comparison.results_match());
    }

    #[test]
    fn prop_oldest_age_bounds_average(seed in any::<u64>(), count in 1usize..100) {
        let factory = ProfileFactory::new().with_seed(seed);
        let profiles = factory.build_batch(count);
        let result = aggregate_records(&profiles, factory.reference_date()).unwrap();
        let max_age = result.max_age().unwrap();
        prop_assert!(result.average_age <= max_age as f64 + 1e-9);
        prop_assert!(!result.oldest.is_empty());
    }
}
