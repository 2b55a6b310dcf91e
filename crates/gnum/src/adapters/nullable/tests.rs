use super::*;
use crate::builtin;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use std::hash::DefaultHasher;

fn int() -> NullableOps<i32> {
    NullableOps::new(&builtin::I32)
}

fn uint() -> NullableOps<u8> {
    NullableOps::new(&builtin::U8)
}

fn dec() -> NullableOps<Decimal> {
    NullableOps::new(&builtin::DECIMAL)
}

fn hash_of(ops: &NullableOps<i32>, value: Option<i32>) -> u64 {
    let mut state = DefaultHasher::new();
    ops.hash_value(&value, &mut state);
    state.finish()
}

#[test]
fn absence_propagates() {
    let ops = int();
    assert_eq!(ops.add(&Some(3), &Some(2)), Ok(Some(5)));
    assert_eq!(ops.add(&None, &Some(2)), Ok(None));
    assert_eq!(ops.multiply(&Some(2), &None), Ok(None));
    assert_eq!(ops.negate(&None), Ok(None));
    assert_eq!(ops.left_shift(&None, 3), Ok(None));
    assert_eq!(ops.abs(&None), Ok(None));
    assert_eq!(ops.floor(&None), None);
    assert_eq!(ops.div_rem(&Some(7), &None), Ok((None, None)));
    assert_eq!(ops.div_rem(&Some(7), &Some(2)), Ok((Some(3), Some(1))));
}

#[test]
fn errors_of_present_operands_surface() {
    let ops = int();
    assert_eq!(ops.divide(&Some(1), &Some(0)), Err(NumericError::DivideByZero));
    // absence wins over a zero divisor
    assert_eq!(ops.divide(&None, &Some(0)), Ok(None));
    assert!(uint().negate(&Some(1)).is_err());
    assert!(uint().minus_one().is_err());
}

#[test]
fn none_sorts_first_and_equals_itself() {
    let ops = int();
    assert!(ops.equals(&None, &None));
    assert!(!ops.equals(&None, &Some(0)));
    assert_eq!(ops.compare(&None, &None), Ordering::Equal);
    assert_eq!(ops.compare(&None, &Some(i32::MIN)), Ordering::Less);
    assert_eq!(ops.compare(&Some(0), &None), Ordering::Greater);
}

#[test]
fn ordering_predicates_need_both_sides() {
    let ops = int();
    assert!(!ops.less_than(&None, &Some(1)));
    assert!(!ops.greater_than(&Some(1), &None));
    assert!(!ops.less_than_or_equal(&None, &None));
    assert!(!ops.greater_than_or_equal(&None, &None));
    assert!(ops.less_than(&Some(1), &Some(2)));
}

#[test]
fn predicates_on_none() {
    let ops = int();
    assert!(!ops.is_even(&None));
    assert!(!ops.is_odd(&None));
    assert!(!ops.is_power_of_two(&None));
    assert_eq!(ops.sign(&None), Ok(0));
    assert_eq!(ops.sign(&Some(-4)), Ok(-1));
    assert!(ops.is_even(&Some(2)));
}

#[test]
fn clamp_ignores_absent_bounds() {
    let ops = int();
    assert_eq!(ops.clamp(&None, &Some(0), &Some(3)), Ok(&None));
    assert_eq!(ops.clamp(&Some(5), &Some(0), &Some(3)), Ok(&Some(3)));
    assert_eq!(ops.clamp(&Some(-5), &Some(0), &None), Ok(&Some(0)));
    assert_eq!(ops.clamp(&Some(5), &None, &Some(3)), Ok(&Some(3)));
    assert_eq!(ops.clamp(&Some(5), &None, &None), Ok(&Some(5)));
    assert!(matches!(
        ops.clamp(&None, &Some(3), &Some(0)),
        Err(NumericError::InvalidArgument { .. })
    ));
}

#[test]
fn min_and_max_return_the_operand() {
    let ops = int();
    let (left, right) = (Some(3), Some(2));
    assert!(std::ptr::eq(ops.min(&left, &right), &right));
    assert!(std::ptr::eq(ops.max(&left, &right), &left));
    assert_eq!(*ops.min(&None, &Some(1)), None);
    assert_eq!(*ops.max(&Some(1), &None), None);
}

#[test]
fn constants_are_present() {
    let ops = int();
    assert_eq!(ops.zero(), Some(0));
    assert_eq!(ops.one(), Some(1));
    assert_eq!(ops.max_value(), Ok(Some(i32::MAX)));
    assert_eq!(ops.kind(), NumericKind::I32);
}

#[test]
fn text_blank_is_none() {
    let ops = int();
    assert_eq!(ops.parse("", None, None), Ok(None));
    assert_eq!(ops.parse("   ", None, None), Ok(None));
    assert_eq!(ops.parse(" 12 ", None, None), Ok(Some(12)));
    assert!(ops.parse("x", None, None).is_err());
    assert_eq!(ops.try_parse("x", None, None), Ok(None));
    assert_eq!(ops.format(&None, None, None), Ok(String::new()));
    assert_eq!(ops.format(&Some(7), Some("D3"), None), Ok("007".to_owned()));
}

#[test]
fn conversion_through_absent() {
    let ops = dec();
    assert_eq!(ops.to_value(&None), NumericValue::Absent);
    assert_eq!(ops.from_value(&NumericValue::Absent), Ok(None));
    assert_eq!(
        ops.from_value(&NumericValue::I32(4)),
        Ok(Some(Decimal::from(4)))
    );
    assert!(matches!(
        ops.to_i32(&None),
        Err(NumericError::InvalidArgument { .. })
    ));
}

#[test]
fn hash_distinguishes_none_from_zero() {
    let ops = int();
    assert_eq!(hash_of(&ops, Some(5)), hash_of(&ops, Some(5)));
    assert_eq!(hash_of(&ops, None), hash_of(&ops, None));
    assert!(hash_of(&ops, None) != hash_of(&ops, Some(0)));
}
