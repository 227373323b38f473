use approx::assert_relative_eq;
use bsm_lib::{call, call_from_put, put, put_from_call};

/// Feeding a Black-Scholes call through the parity converter reproduces the
/// directly priced put, and symmetrically for the call.
#[test]
fn test_converter_matches_pricer() {
    for s in [80.0, 100.0, 125.0] {
        for k in [90.0, 100.0, 110.0] {
            for sigma in [0.1, 0.3, 0.6] {
                let (r, t) = (0.04, 0.75);
                let c = call(s, k, sigma, r, t).unwrap();
                let p = put(s, k, sigma, r, t).unwrap();

                let p_via_parity = put_from_call(s, k, r, t, c).unwrap();
                let c_via_parity = call_from_put(s, k, r, t, p).unwrap();

                assert_relative_eq!(p_via_parity, p, max_relative = 1e-9, epsilon = 1e-12);
                assert_relative_eq!(c_via_parity, c, max_relative = 1e-9, epsilon = 1e-12);
            }
        }
    }
}

/// The converter itself never looks at volatility: calls priced under very
/// different sigmas all map back onto their own puts through the same
/// parity relation.
#[test]
fn test_parity_is_volatility_independent() {
    let (s, k, r, t) = (100.0, 105.0, 0.02, 1.5);
    for sigma in [0.05, 0.25, 1.0] {
        let c = call(s, k, sigma, r, t).unwrap();
        let p = put(s, k, sigma, r, t).unwrap();
        assert_relative_eq!(
            put_from_call(s, k, r, t, c).unwrap(),
            p,
            max_relative = 1e-9
        );
    }
}

/// Converter round trip: call -> put -> call is the identity up to
/// floating-point error.
#[test]
fn test_converter_round_trip() {
    let (s, k, r, t, c) = (100.0, 95.0, 0.05, 2.0, 12.34);
    let p = put_from_call(s, k, r, t, c).unwrap();
    let c2 = call_from_put(s, k, r, t, p).unwrap();
    assert_relative_eq!(c, c2, max_relative = 1e-12);
}

/// Zero maturity degenerates to undiscounted parity; negative maturity and
/// non-positive strikes are rejected.
#[test]
fn test_converter_domain() {
    let p = put_from_call(100.0, 95.0, 0.05, 0.0, 8.0).unwrap();
    assert_relative_eq!(p, 95.0 + 8.0 - 100.0, max_relative = 1e-12);

    assert!(put_from_call(100.0, 0.0, 0.05, 1.0, 8.0).is_err());
    assert!(put_from_call(100.0, -95.0, 0.05, 1.0, 8.0).is_err());
    assert!(call_from_put(100.0, 95.0, 0.05, -1.0, 8.0).is_err());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Converter consistency over the whole valid pricing domain.
        #[test]
        fn prop_converter_matches_pricer(
            s in 1.0f64..500.0,
            k in 1.0f64..500.0,
            sigma in 0.01f64..1.5,
            r in -0.05f64..0.10,
            t in 0.01f64..5.0,
        ) {
            let c = call(s, k, sigma, r, t).unwrap();
            let p = put(s, k, sigma, r, t).unwrap();
            prop_assert!((put_from_call(s, k, r, t, c).unwrap() - p).abs() <= 1e-9 * (s + k));
            prop_assert!((call_from_put(s, k, r, t, p).unwrap() - c).abs() <= 1e-9 * (s + k));
        }

        /// The converters are exact algebraic inverses of each other.
        #[test]
        fn prop_converter_round_trip(
            s in 1.0f64..500.0,
            k in 1.0f64..500.0,
            r in -0.05f64..0.10,
            t in 0.0f64..5.0,
            c in 0.0f64..500.0,
        ) {
            let p = put_from_call(s, k, r, t, c).unwrap();
            let c2 = call_from_put(s, k, r, t, p).unwrap();
            prop_assert!((c - c2).abs() <= 1e-9 * (s + k + c));
        }
    }
}
