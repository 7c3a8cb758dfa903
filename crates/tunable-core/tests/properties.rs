//! Property-based tests for validity specifications and the string
//! conversion bridge, using proptest for randomized input generation.

use proptest::prelude::*;
use tunable_core::{
    EnumeratedList, ParamCategory, ParamDef, ParamError, Range, StepRange, ValiditySpec,
    parse_value, render_value,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Endpoints of a bounded range are always valid; values just outside
    /// never are.
    #[test]
    fn range_endpoints_inclusive(lo in -10_000i32..10_000, span in 0i32..10_000) {
        let hi = lo + span;
        let range = Range::new(lo, hi);
        prop_assert!(range.contains(&lo));
        prop_assert!(range.contains(&hi));
        prop_assert!(!range.contains(&(lo - 1)));
        prop_assert!(!range.contains(&(hi + 1)));
    }

    /// A value the spec accepts always constructs a descriptor; a value it
    /// rejects always fails with the invariant-violation error.
    #[test]
    fn construction_mirrors_spec_verdict(
        lo in -1000i32..1000,
        span in 0i32..1000,
        default in -3000i32..3000,
    ) {
        let hi = lo + span;
        let range = Range::new(lo, hi);
        let accepted = ValiditySpec::is_valid(&range, &default);
        let result = ParamDef::with_range("p", "probe", default, range, ParamCategory::default());
        match result {
            Ok(def) => {
                prop_assert!(accepted);
                prop_assert_eq!(def.default_value(), default);
            }
            Err(err) => {
                prop_assert!(!accepted);
                // Bound to a name: prop_assert! stringifies its expression,
                // and a bare `{ .. }` pattern breaks that format string.
                let is_invalid_default = matches!(err, ParamError::InvalidDefault { .. });
                prop_assert!(is_invalid_default);
            }
        }
    }

    /// Every grid point `lo + k*step` inside the interval is valid, and
    /// the first grid point past `hi` is not.
    #[test]
    fn step_range_grid(lo in -1000i32..1000, step in 1i32..50, k in 0i32..=100) {
        let hi = lo + step * 100;
        let range = StepRange::new(lo, hi, step);
        let on_grid = lo + k * step;
        prop_assert!(range.contains(&on_grid), "{on_grid} should be on the grid");
        prop_assert!(!range.contains(&(hi + step)));
    }

    /// Off-grid offsets in (0, step) are always rejected.
    #[test]
    fn step_range_off_grid_rejected(
        lo in -1000i32..1000,
        step in 2i32..50,
        k in 0i32..99,
        offset_seed in 1i32..50,
    ) {
        let offset = 1 + (offset_seed - 1) % (step - 1); // in [1, step-1]
        let hi = lo + step * 100;
        let range = StepRange::new(lo, hi, step);
        let value = lo + k * step + offset;
        prop_assert!(!range.contains(&value), "{value} is off a step-{step} grid from {lo}");
    }

    /// Float grids anchored at `lo` accept `lo + k*step` computed in f64.
    #[test]
    fn float_step_grid(k in 0u32..999) {
        let range = StepRange::new(0.0f64, 100.0, 0.1);
        let value = f64::from(k) * 0.1;
        prop_assert!(range.contains(&value), "{value} should sit on a 0.1 grid");
        prop_assert!(!range.contains(&(value + 0.05)));
    }

    /// List membership is exactly `contains`; everything else is invalid.
    #[test]
    fn list_membership(values in prop::collection::vec(-50i32..50, 0..8), probe in -50i32..50) {
        let spec = EnumeratedList::new(values.clone());
        prop_assert_eq!(spec.is_valid(&probe), values.contains(&probe));
    }

    /// String round-trip through the conversion bridge is lossless for
    /// integers.
    #[test]
    fn int_round_trip(v in any::<i64>()) {
        let text = render_value(&v, "probe").unwrap();
        let back: i64 = parse_value(&text, "probe").unwrap();
        prop_assert_eq!(back, v);
    }

    /// Rust's shortest-repr float formatting round-trips every finite f64.
    #[test]
    fn float_round_trip(v in any::<f64>()) {
        prop_assume!(v.is_finite());
        let text = render_value(&v, "probe").unwrap();
        let back: f64 = parse_value(&text, "probe").unwrap();
        prop_assert_eq!(back.to_bits(), v.to_bits());
    }

    /// Vectors of integers survive the space-separated round trip.
    #[test]
    fn vec_round_trip(v in prop::collection::vec(any::<i32>(), 0..16)) {
        let text = render_value(&v, "probe").unwrap();
        let back: Vec<i32> = parse_value(&text, "probe").unwrap();
        prop_assert_eq!(back, v);
    }

    /// Parse failures always name the parameter and the offending text.
    #[test]
    fn parse_errors_are_attributed(text in "[a-z]{1,8}") {
        prop_assume!(text.parse::<i32>().is_err());
        let err = parse_value::<i32>(&text, "gain").unwrap_err();
        let msg = err.to_string();
        prop_assert!(msg.contains("gain"));
        prop_assert!(msg.contains(&text));
    }
}
