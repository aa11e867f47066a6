//! Property-based tests for validator semantics.
//!
//! The comparison validators promise an iff-relationship with their
//! operator; the template engine promises safe rendering. Both are easy
//! to state as properties and cheap to check exhaustively.

use func_validator::prelude::*;
use proptest::prelude::*;

proptest! {
    // ── comparison iff-semantics ────────────────────────────────────────

    #[test]
    fn greater_than_iff(value in any::<i64>(), to in any::<i64>()) {
        let ok = must_be_greater_than(to).validate(&value, "n").is_ok();
        prop_assert_eq!(ok, value > to);
    }

    #[test]
    fn less_than_or_equal_iff(value in any::<i64>(), to in any::<i64>()) {
        let ok = must_be_less_than_or_equal(to).validate(&value, "n").is_ok();
        prop_assert_eq!(ok, value <= to);
    }

    #[test]
    fn equal_iff(value in any::<i64>(), to in any::<i64>()) {
        let ok = must_be_equal(to).validate(&value, "n").is_ok();
        prop_assert_eq!(ok, value == to);
    }

    #[test]
    fn not_equal_is_the_complement(value in any::<i64>(), to in any::<i64>()) {
        let eq = must_be_equal(to).validate(&value, "n").is_ok();
        let ne = must_not_be_equal(to).validate(&value, "n").is_ok();
        prop_assert_ne!(eq, ne);
    }

    // ── range semantics ─────────────────────────────────────────────────

    #[test]
    fn between_matches_interval_membership(value in -1000_i64..1000, lo in -500_i64..0, hi in 0_i64..500) {
        let v = must_be_between(lo, hi).unwrap();
        prop_assert_eq!(v.validate(&value, "n").is_ok(), value >= lo && value <= hi);
    }

    #[test]
    fn exclusive_between_strips_the_boundaries(value in -1000_i64..1000, lo in -500_i64..0, hi in 0_i64..500) {
        let v = must_be_between(lo, hi).unwrap().min_exclusive().max_exclusive();
        prop_assert_eq!(v.validate(&value, "n").is_ok(), value > lo && value < hi);
    }

    // ── collection delegation ───────────────────────────────────────────

    #[test]
    fn length_equal_tracks_len(items in proptest::collection::vec(any::<i32>(), 0..16), to in 0_usize..16) {
        let ok = must_have_length_equal::<i32>(to).validate(&items, "items").is_ok();
        prop_assert_eq!(ok, items.len() == to);
    }

    #[test]
    fn values_greater_than_means_every_element(items in proptest::collection::vec(-100_i64..100, 0..16), to in -100_i64..100) {
        let ok = must_have_values_greater_than(to).validate(&items, "items").is_ok();
        prop_assert_eq!(ok, items.iter().all(|v| *v > to));
    }

    // ── sign validators agree with comparisons against zero ─────────────

    #[test]
    fn signs_partition_the_number_line(value in any::<i64>()) {
        let positive = must_be_positive::<i64>().validate(&value, "n").is_ok();
        let non_positive = must_be_non_positive::<i64>().validate(&value, "n").is_ok();
        prop_assert_ne!(positive, non_positive);

        let negative = must_be_negative::<i64>().validate(&value, "n").is_ok();
        let non_negative = must_be_non_negative::<i64>().validate(&value, "n").is_ok();
        prop_assert_ne!(negative, non_negative);
    }

    // ── template rendering is total ─────────────────────────────────────

    #[test]
    fn rendering_never_panics(template in "[ -~]{0,60}", key in "[a-z_]{1,8}", value in "[ -~]{0,20}") {
        let tpl = ErrorTemplate::new(template);
        let args = MessageArgs::new().with(key, value);
        let _ = tpl.render(&args);
    }

    #[test]
    fn known_placeholders_always_resolve(name in "[a-z_]{1,12}", value in any::<i64>()) {
        let tpl = ErrorTemplate::borrowed("${arg_name} is ${arg_value}");
        let args = MessageArgs::new()
            .with("arg_name", name.clone())
            .with("arg_value", value);
        let rendered = tpl.render(&args);
        prop_assert_eq!(rendered, format!("{name} is {value}"));
    }

    // ── idempotence ─────────────────────────────────────────────────────

    #[test]
    fn repeated_invocations_agree(value in any::<i64>(), to in any::<i64>()) {
        let v = must_be_less_than(to);
        let first = v.validate(&value, "n").err().map(|e| e.to_string());
        let second = v.validate(&value, "n").err().map(|e| e.to_string());
        prop_assert_eq!(first, second);
    }
}
