//! Property-based tests for the strength analyzer.

use passcraft::strength::{analyze_password_strength, entropy_bits, score};
use proptest::prelude::*;

proptest! {
    #[test]
    fn analysis_is_deterministic(text in ".{0,80}") {
        let first = analyze_password_strength(&text);
        let second = analyze_password_strength(&text);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn score_stays_in_bounds(text in ".{1,200}") {
        let report = analyze_password_strength(&text);
        prop_assert!(report.score <= 100);
        prop_assert!(report.entropy_bits >= 0.0);
        prop_assert!(report.pool_size <= 94);
    }

    #[test]
    fn score_is_monotonic_in_length(pool in prop::sample::select(vec![10u32, 26, 32, 36, 52, 62, 94]), length in 1usize..120) {
        let shorter = score(length, entropy_bits(pool, length));
        let longer = score(length + 1, entropy_bits(pool, length + 1));
        prop_assert!(longer >= shorter, "pool {} length {}: {} > {}", pool, length, shorter, longer);
    }

    #[test]
    fn repeating_a_class_keeps_pool(c in "[a-z]", n in 1usize..40) {
        let text = c.repeat(n);
        let report = analyze_password_strength(&text);
        prop_assert_eq!(report.pool_size, 26);
        prop_assert_eq!(report.length, n);
    }
}
