//! Property-based tests for bulwark-guard.

use bulwark_guard::foundation::finalize_message;
use bulwark_guard::guards::within_tolerance;
use bulwark_guard::prelude::*;
use proptest::prelude::*;

// ============================================================================
// IDENTITY: a passing guard returns its argument unchanged
// ============================================================================

proptest! {
    #[test]
    fn passing_comparison_returns_argument(a in any::<i64>(), c in any::<i64>()) {
        if let Ok(out) = Guard::argument().is_less_than(Arg::new(a, "a"), c) {
            prop_assert_eq!(out, a);
        }
        if let Ok(out) = Guard::argument().is_greater_than_or_equal_to(Arg::new(a, "a"), c) {
            prop_assert_eq!(out, a);
        }
    }

    #[test]
    fn passing_string_guard_returns_argument(s in "\\PC*") {
        if let Ok(out) = Guard::argument().is_null_or_white_space(Arg::new(s.clone(), "s")) {
            prop_assert_eq!(out, s);
        }
    }

    #[test]
    fn passing_sequence_guard_returns_argument(v in prop::collection::vec(any::<u8>(), 0..16), x in any::<u8>()) {
        if let Ok(out) = Guard::argument().contains(Arg::new(&v, "v"), x) {
            prop_assert_eq!(out, &v);
        }
    }
}

// ============================================================================
// COMPARISON LAWS
// ============================================================================

proptest! {
    #[test]
    fn strict_and_inclusive_relations_differ_only_at_the_boundary(a in -50_i32..50, c in -50_i32..50) {
        let strict = Guard::argument().is_less_than(Arg::new(a, "a"), c).is_ok();
        let inclusive = Guard::argument().is_less_than_or_equal_to(Arg::new(a, "a"), c).is_ok();
        prop_assert_eq!(strict, a >= c);
        prop_assert_eq!(inclusive, a > c);
        prop_assert_eq!(strict && !inclusive, a == c);
    }

    #[test]
    fn less_than_and_greater_than_or_equal_partition(a in any::<i16>(), c in any::<i16>()) {
        let lt = Guard::argument().is_less_than(Arg::new(a, "a"), c).is_ok();
        let ge = Guard::argument().is_greater_than_or_equal_to(Arg::new(a, "a"), c).is_ok();
        prop_assert_ne!(lt, ge);
    }

    #[test]
    fn every_relation_rejects_nan(c in any::<f64>()) {
        for relation in Relation::ALL {
            prop_assert!(Guard::argument().compare(Arg::new(f64::NAN, "x"), relation, c).is_err());
        }
    }
}

// ============================================================================
// TOLERANCE BAND
// ============================================================================

proptest! {
    #[test]
    fn guard_agrees_with_band(a in -1e3_f64..1e3, c in -1e3_f64..1e3, t in 0.0_f64..5.0) {
        let rejected = Guard::argument().is_equal_within(Arg::new(a, "a"), c, t).is_err();
        prop_assert_eq!(rejected, within_tolerance(a, c, t));
    }

    #[test]
    fn equal_within_and_not_equal_within_partition(a in -1e3_f64..1e3, c in -1e3_f64..1e3, t in 0.0_f64..5.0) {
        let eq = Guard::argument().is_equal_within(Arg::new(a, "a"), c, t).is_ok();
        let ne = Guard::argument().is_not_equal_within(Arg::new(a, "a"), c, t).is_ok();
        prop_assert_ne!(eq, ne);
    }

    #[test]
    fn values_well_outside_the_band_pass(a in -1e3_f64..1e3, t in 0.001_f64..1.0) {
        let c = a + 2.0 * t;
        prop_assert!(Guard::argument().is_equal_within(Arg::new(a, "a"), c, t).is_ok());
    }
}

#[test]
fn band_edges_are_inclusive() {
    // Binary-exact values, so the edges are hit exactly.
    let t = 0.25_f64;
    let a = 1.0_f64;
    assert!(Guard::argument().is_equal_within(Arg::new(a, "a"), a + t, t).is_err());
    assert!(Guard::argument().is_equal_within(Arg::new(a, "a"), a - t, t).is_err());
    assert!(Guard::argument().is_equal_within(Arg::new(a, "a"), a + t + 0.125, t).is_ok());
}

// ============================================================================
// MESSAGES
// ============================================================================

proptest! {
    #[test]
    fn finalize_message_is_idempotent(m in "\\PC{0,40}") {
        let once = finalize_message(Some(&m), || "Default.".to_owned());
        let twice = finalize_message(Some(&once), || "Default.".to_owned());
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.ends_with('.'));
    }

    #[test]
    fn blank_messages_use_the_default(n in 0_usize..8) {
        let blank = " ".repeat(n);
        prop_assert_eq!(finalize_message(Some(&blank), || "Default.".to_owned()), "Default.");
    }
}

// ============================================================================
// CLASSIFICATION: is_K and is_not_K never both pass
// ============================================================================

proptest! {
    #[test]
    fn char_class_pairs_are_disjoint(c in any::<char>()) {
        for class in CharClass::ALL {
            let is = Guard::argument().is_char_class(Arg::new(c, "c"), class).is_ok();
            let is_not = Guard::argument().is_not_char_class(Arg::new(c, "c"), class).is_ok();
            prop_assert_ne!(is, is_not);
        }
    }

    #[test]
    fn code_unit_pairs_are_disjoint(u in any::<u16>()) {
        for class in CharClass::ALL {
            let is = Guard::argument().is_char_class(Arg::new(u, "u"), class).is_ok();
            let is_not = Guard::argument().is_not_char_class(Arg::new(u, "u"), class).is_ok();
            prop_assert_ne!(is, is_not);
        }
    }

    #[test]
    fn code_units_agree_with_chars_outside_surrogates(u in any::<u16>()) {
        if let Some(c) = char::from_u32(u32::from(u)) {
            for class in CharClass::ALL {
                prop_assert_eq!(class.matches(u), class.matches(c));
            }
        }
    }
}

// ============================================================================
// NULL BEFORE PREDICATE
// ============================================================================

proptest! {
    #[test]
    fn absent_sequences_always_report_absence(x in any::<i32>()) {
        let none = || Arg::new(None::<Vec<i32>>, "items");
        prop_assert!(Guard::argument().is_empty(none()).unwrap_err().is_absent());
        prop_assert!(Guard::argument().any(none(), |_| true).unwrap_err().is_absent());
        prop_assert!(Guard::argument().all(none(), |_| true).unwrap_err().is_absent());
        prop_assert!(Guard::argument().contains(none(), x).unwrap_err().is_absent());
        prop_assert!(Guard::argument().does_not_contain(none(), x).unwrap_err().is_absent());
    }

    #[test]
    fn present_sequences_never_report_absence(v in prop::collection::vec(any::<i32>(), 0..8), x in any::<i32>()) {
        let some = || Arg::new(Some(v.clone()), "items");
        let results = [
            Guard::argument().is_empty(some()),
            Guard::argument().any(some(), |i| *i == x),
            Guard::argument().all(some(), |i| *i == x),
            Guard::argument().contains(some(), x),
            Guard::argument().does_not_contain(some(), x),
        ];
        for result in results {
            if let Err(err) = result {
                prop_assert!(err.is_constraint());
            }
        }
    }
}
