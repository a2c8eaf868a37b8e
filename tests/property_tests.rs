use bigo::classifier::{classify, ComplexityClass};
use bigo::features::FEATURE_COUNT;
use bigo::{extract_features, FeatureVector};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn arb_class() -> impl Strategy<Value = ComplexityClass> {
    prop::sample::select(ComplexityClass::ALL.to_vec())
}

fn arb_vector() -> impl Strategy<Value = FeatureVector> {
    prop::collection::vec(0u64..400, FEATURE_COUNT)
        .prop_map(|values| FeatureVector::try_from(values.as_slice()).unwrap())
}

proptest! {
    #[test]
    fn prop_extraction_is_deterministic_and_fixed_length(code in "\\PC{0,300}") {
        let first = extract_features(&code);
        let second = extract_features(&code);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.as_array().len(), FEATURE_COUNT);
        prop_assert!(first.line_count >= 1);
    }

    #[test]
    fn prop_snippet_like_text_never_panics(
        lines in prop::collection::vec(
            prop::sample::select(vec![
                "for (let i = 0; i < n; i++) {",
                "while (lo < hi) {",
                "do {",
                "}",
                "function walk(node) {",
                "return walk(node.left) + walk(node.right);",
                "const mid = Math.floor((lo + hi) / 2);",
                "xs.push(x);",
                "",
            ]),
            0..40,
        )
    ) {
        let code = lines.join("\n");
        let features = extract_features(&code);
        prop_assert!(features.max_loop_nesting <= features.line_count);
    }

    #[test]
    fn prop_confidence_within_bounds(features in arb_vector(), seed in any::<u64>()) {
        let result = classify(&features, &mut StdRng::seed_from_u64(seed));
        prop_assert!((0.65..=0.98).contains(&result.confidence));
    }

    #[test]
    fn prop_same_seed_same_result(features in arb_vector(), seed in any::<u64>()) {
        let a = classify(&features, &mut StdRng::seed_from_u64(seed));
        let b = classify(&features, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_label_table_round_trips(class in arb_class()) {
        prop_assert_eq!(ComplexityClass::from_score(class.score()), class);
        prop_assert_eq!(class.label().parse::<ComplexityClass>().unwrap(), class);
    }

    #[test]
    fn prop_from_score_picks_a_nearest_entry(score in -1.0f64..2.0) {
        let chosen = ComplexityClass::from_score(score);
        let clamped = score.clamp(0.0, 1.0);
        let best = ComplexityClass::ALL
            .iter()
            .map(|c| (clamped - c.score()).abs())
            .fold(f64::INFINITY, f64::min);
        prop_assert_eq!((clamped - chosen.score()).abs(), best);
    }
}

#[test]
fn test_empty_input_has_twenty_fields() {
    let features = extract_features("");
    assert_eq!(Vec::<u64>::from(features).len(), FEATURE_COUNT);
}
