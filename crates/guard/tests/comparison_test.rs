//! Relational, zero and equality guards across every supported numeric type.

use std::fmt::Display;

use bulwark_guard::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;

fn check_relations<T>(below: T, at: T, above: T)
where
    T: PartialOrd + Display + Copy,
{
    let g = Guard::argument();

    assert!(g.is_less_than(Arg::new(below, "n"), at).is_err());
    assert!(g.is_less_than(Arg::new(at, "n"), at).is_ok());
    assert!(g.is_less_than_or_equal_to(Arg::new(at, "n"), at).is_err());
    assert!(g.is_less_than_or_equal_to(Arg::new(above, "n"), at).is_ok());

    assert!(g.is_greater_than(Arg::new(above, "n"), at).is_err());
    assert!(g.is_greater_than(Arg::new(at, "n"), at).is_ok());
    assert!(g.is_greater_than_or_equal_to(Arg::new(at, "n"), at).is_err());
    assert!(g.is_greater_than_or_equal_to(Arg::new(below, "n"), at).is_ok());
}

#[rstest]
fn signed_integers() {
    check_relations(-1_i8, 0, 1);
    check_relations(-300_i16, 0, 300);
    check_relations(i32::MIN, 0, i32::MAX);
    check_relations(-1_i64, 0, 1);
}

#[rstest]
fn unsigned_integers() {
    check_relations(0_u8, 1, u8::MAX);
    check_relations(9_u16, 10, 11);
    check_relations(0_u32, 7, 8);
    check_relations(0_u64, 1, u64::MAX);
}

#[rstest]
fn floats_and_decimals() {
    check_relations(-0.5_f32, 0.0, 0.5);
    check_relations(f64::NEG_INFINITY, 1.5, f64::INFINITY);
    check_relations(Decimal::new(-1, 2), Decimal::ZERO, Decimal::new(1, 2));
}

#[rstest]
#[case::less_than(Relation::LessThan, "Value was '3', but must not be less than '4'.")]
#[case::less_than_or_equal_to(Relation::LessThanOrEqualTo, "Value was '3', but must not be less than or equal to '4'.")]
fn relation_messages(#[case] relation: Relation, #[case] expected: &str) {
    let n = 3_u32;
    let err = Guard::argument().compare(arg!(n), relation, 4).unwrap_err();
    assert_eq!(err.message(), expected);
    assert_eq!(err.param_name(), "n");
}

#[rstest]
#[case(0_i8.into())]
#[case(0_i16.into())]
#[case(0_u32.into())]
#[case(0_u64.into())]
fn is_zero_for_widened_integers(#[case] value: i128) {
    assert!(Guard::argument().is_zero(arg!(value)).is_err());
}

#[rstest]
#[case(Decimal::ZERO, true)]
#[case(Decimal::new(0, 3), true)]
#[case(Decimal::new(1, 28), false)]
fn is_zero_for_decimal(#[case] amount: Decimal, #[case] rejected: bool) {
    assert_eq!(Guard::argument().is_zero(arg!(amount)).is_err(), rejected);
}

#[rstest]
#[case(0.0_f64, 0.0, true)]
#[case(-0.0_f64, 0.0, true)]
#[case(1e-6_f64, 1e-5, true)]
#[case(2e-5_f64, 1e-5, false)]
fn is_zero_within_for_floats(#[case] x: f64, #[case] tolerance: f64, #[case] rejected: bool) {
    assert_eq!(Guard::argument().is_zero_within(arg!(x), tolerance).is_err(), rejected);
}

#[rstest]
#[case(1, 1, true)]
#[case(1, 2, false)]
fn equality_for_integers(#[case] a: i32, #[case] c: i32, #[case] equal: bool) {
    assert_eq!(Guard::argument().is_equal_to(arg!(a), c).is_err(), equal);
    assert_eq!(Guard::argument().is_not_equal_to(arg!(a), c).is_ok(), equal);
}

#[rstest]
fn decimal_equality_ignores_scale() {
    let price = Decimal::new(1000, 2);
    let err = Guard::argument()
        .is_equal_to(arg!(price), Decimal::new(10, 0))
        .unwrap_err();
    assert_eq!(err.message(), "Value was '10.00', but must not be equal to '10'.");
}

#[rstest]
fn wide_integers_render_in_full() {
    let n = u128::MAX;
    let err = Guard::argument().is_equal_to(arg!(n), u128::MAX).unwrap_err();
    assert_eq!(
        err.message(),
        "Value was '340282366920938463463374607431768211455', but must not be equal to '340282366920938463463374607431768211455'."
    );

    let n = i128::MIN;
    let err = Guard::argument().is_less_than(arg!(n), 0).unwrap_err();
    assert_eq!(
        err.message(),
        "Value was '-170141183460469231731687303715884105728', but must not be less than '0'."
    );
}
