use super::*;
use crate::builtin;
use crate::error::NumericError;
use pretty_assertions::assert_eq;

fn n(v: f64) -> Number<f64> {
    Number::new(v)
}

fn float() -> NumberOps<f64> {
    NumberOps::new(&builtin::F64)
}

#[test]
fn delegates_arithmetic() {
    let ops = float();
    assert_eq!(ops.add(&n(1.5), &n(2.0)).map(Number::into_inner), Ok(3.5));
    assert_eq!(
        ops.divide(&n(1.0), &n(0.0)).map(Number::into_inner),
        Ok(f64::INFINITY)
    );
    assert_eq!(ops.zero().into_inner(), 0.0);
    assert_eq!(ops.kind(), NumericKind::F64);
}

#[test]
fn keeps_base_failures() {
    let ops = NumberOps::<i32>::new(&builtin::I32);
    assert_eq!(
        ops.divide(&Number::new(1), &Number::new(0)).map(Number::into_inner),
        Err(NumericError::DivideByZero)
    );
    assert!(float().bitwise_and(&n(1.0), &n(1.0)).is_err());
}

#[test]
fn comparison_follows_base() {
    let ops = float();
    assert!(ops.equals(&n(f64::NAN), &n(f64::NAN)));
    assert!(!ops.less_than(&n(f64::NAN), &n(1.0)));
    assert_eq!(ops.compare(&n(f64::NAN), &n(1.0)), Ordering::Less);
}

#[test]
fn selection_returns_the_wrapper() {
    let ops = float();
    let (value, lo, hi) = (n(9.0), n(0.0), n(3.0));
    assert!(std::ptr::eq(ops.clamp(&value, &lo, &hi).unwrap_or(&value), &hi));
    assert!(std::ptr::eq(ops.min(&value, &lo), &lo));
    assert!(std::ptr::eq(ops.max(&value, &lo), &value));
    assert!(matches!(
        ops.clamp(&value, &hi, &lo),
        Err(NumericError::InvalidArgument { .. })
    ));
}

#[test]
fn text_and_conversion() {
    let ops = float();
    assert_eq!(
        ops.parse("2.5", None, None).map(Number::into_inner),
        Ok(2.5)
    );
    assert_eq!(
        ops.try_parse("nope", None, None).map(|v| v.map(Number::into_inner)),
        Ok(None)
    );
    assert_eq!(ops.format(&n(0.25), None, None), Ok("0.25".to_owned()));
    assert_eq!(ops.to_value(&n(2.0)), NumericValue::F64(2.0));
    assert_eq!(ops.to_i32(&n(2.9)), Ok(2));
}
