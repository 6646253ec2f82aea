//! Property-based tests for package sorting
//!
//! These tests check the dispatch rules over generated measurements rather
//! than hand-picked examples.
//!
//! ## Configuration
//!
//! - `PROPTEST_CASES`: Number of test cases per property (default: 256)
//!
//! ```bash
//! PROPTEST_CASES=2048 cargo test --test property_tests
//! ```

use parcelsort::{classify, is_bulky, is_heavy, Category, Field, Measurement, ValidationError};
use proptest::prelude::*;
use std::env;

/// Default number of test cases per property.
const DEFAULT_PROPTEST_CASES: u32 = 256;

/// Creates a ProptestConfig that respects `PROPTEST_CASES`.
fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_PROPTEST_CASES);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Dimensions that can never be bulky: each below 99 cm keeps the volume
/// under 1,000,000 cm³ as well as every side under 150 cm.
fn small_dimension() -> impl Strategy<Value = f64> {
    0.01f64..99.0
}

fn light_mass() -> impl Strategy<Value = f64> {
    0.01f64..19.99
}

fn heavy_mass() -> impl Strategy<Value = f64> {
    20.0f64..10_000.0
}

fn oversize_dimension() -> impl Strategy<Value = f64> {
    150.0f64..1_000.0
}

/// Positive finite dimensions of any size.
fn any_dimension() -> impl Strategy<Value = f64> {
    0.01f64..1_000.0
}

/// A raw value that must never validate.
fn invalid_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(-0.0),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        -1_000.0f64..0.0,
    ]
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_small_and_light_is_standard(
        w in small_dimension(),
        h in small_dimension(),
        l in small_dimension(),
        m in light_mass(),
    ) {
        prop_assert_eq!(classify(w, h, l, m), Ok(Category::Standard));
    }

    #[test]
    fn prop_oversize_and_light_is_special(
        big in oversize_dimension(),
        a in any_dimension(),
        b in any_dimension(),
        slot in 0usize..3,
        m in light_mass(),
    ) {
        let mut dims = [a, b, a];
        dims[slot] = big;
        prop_assert_eq!(classify(dims[0], dims[1], dims[2], m), Ok(Category::Special));
    }

    #[test]
    fn prop_large_volume_and_light_is_special(
        w in 100.0f64..149.0,
        h in 100.0f64..149.0,
        l in 100.0f64..149.0,
        m in light_mass(),
    ) {
        // Every side is under 150 cm, so only the volume makes it bulky
        prop_assert!(w * h * l >= 1_000_000.0);
        prop_assert_eq!(classify(w, h, l, m), Ok(Category::Special));
    }

    #[test]
    fn prop_heavy_but_small_is_special(
        w in small_dimension(),
        h in small_dimension(),
        l in small_dimension(),
        m in heavy_mass(),
    ) {
        prop_assert_eq!(classify(w, h, l, m), Ok(Category::Special));
    }

    #[test]
    fn prop_oversize_and_heavy_is_rejected(
        big in oversize_dimension(),
        a in any_dimension(),
        b in any_dimension(),
        m in heavy_mass(),
    ) {
        prop_assert_eq!(classify(a, big, b, m), Ok(Category::Rejected));
    }

    #[test]
    fn prop_category_matches_predicates(
        w in any_dimension(),
        h in any_dimension(),
        l in any_dimension(),
        m in 0.01f64..100.0,
    ) {
        let expected = Category::from_flags(is_bulky(w, h, l), is_heavy(m));
        prop_assert_eq!(classify(w, h, l, m), Ok(expected));
    }

    #[test]
    fn prop_numeric_text_matches_number(
        w in any_dimension(),
        h in any_dimension(),
        l in any_dimension(),
        m in 0.01f64..100.0,
    ) {
        let from_text = classify(w.to_string(), h.to_string(), l.to_string(), m.to_string());
        prop_assert_eq!(from_text, classify(w, h, l, m));
    }

    #[test]
    fn prop_invalid_value_never_classified(
        bad in invalid_number(),
        slot in 0usize..4,
        w in any_dimension(),
        h in any_dimension(),
        l in any_dimension(),
        m in 0.01f64..100.0,
    ) {
        let mut values = [w, h, l, m];
        values[slot] = bad;
        let result = Measurement::new(values[0], values[1], values[2], values[3]);
        let err: ValidationError = result.unwrap_err();
        prop_assert_eq!(err.field(), Field::ALL[slot]);
        prop_assert!(classify(values[0], values[1], values[2], values[3]).is_err());
    }

    #[test]
    fn prop_classification_is_deterministic(
        w in any_dimension(),
        h in any_dimension(),
        l in any_dimension(),
        m in 0.01f64..100.0,
    ) {
        prop_assert_eq!(classify(w, h, l, m), classify(w, h, l, m));
    }
}
