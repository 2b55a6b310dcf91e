use super::*;
use pretty_assertions::assert_eq;

fn big(v: i64) -> BigInt {
    BigInt::from(v)
}

#[test]
fn unbounded_arithmetic() {
    let large = BigInt::from(u128::MAX);
    assert_eq!(
        BigIntOps.add(&large, &big(1)),
        Ok(BigInt::from(u128::MAX) + 1u32)
    );
    assert_eq!(BigIntOps.multiply(&big(-3), &big(4)), Ok(big(-12)));
    assert_eq!(BigIntOps.divide(&big(-7), &big(2)), Ok(big(-3)));
    assert_eq!(BigIntOps.remainder(&big(-7), &big(2)), Ok(big(-1)));
    assert_eq!(BigIntOps.negate(&big(5)), Ok(big(-5)));
}

#[test]
fn division_by_zero() {
    assert_eq!(
        BigIntOps.divide(&big(1), &big(0)),
        Err(NumericError::DivideByZero)
    );
    assert_eq!(
        BigIntOps.remainder(&big(1), &big(0)),
        Err(NumericError::DivideByZero)
    );
}

#[test]
fn no_bounds() {
    assert_eq!(
        BigIntOps.max_value(),
        Err(NumericError::OperationNotSupported {
            operation: "max_value",
            kind: NumericKind::BigInt
        })
    );
    assert!(BigIntOps.min_value().is_err());
    assert_eq!(BigIntOps.minus_one(), Ok(big(-1)));
}

#[test]
fn twos_complement_bitwise() {
    assert_eq!(BigIntOps.ones_complement(&big(5)), Ok(big(-6)));
    assert_eq!(BigIntOps.bitwise_and(&big(-1), &big(0xff)), Ok(big(0xff)));
    assert_eq!(BigIntOps.bitwise_or(&big(0b100), &big(0b001)), Ok(big(0b101)));
    assert_eq!(BigIntOps.xor(&big(-1), &big(1)), Ok(big(-2)));
}

#[test]
fn shifts() {
    assert_eq!(BigIntOps.left_shift(&big(3), 2), Ok(big(12)));
    assert_eq!(BigIntOps.left_shift(&big(1), 100), Ok(BigInt::one() << 100u32));
    assert_eq!(BigIntOps.right_shift(&big(-7), 1), Ok(big(-4)));
    assert_eq!(BigIntOps.left_shift(&big(16), -2), Ok(big(4)));
    assert_eq!(BigIntOps.right_shift(&big(1), -3), Ok(big(8)));
}

#[test]
fn predicates() {
    assert!(BigIntOps.is_even(&big(-4)));
    assert!(BigIntOps.is_odd(&big(-3)));
    assert!(BigIntOps.is_even(&big(0)));
    assert!(BigIntOps.is_power_of_two(&(BigInt::one() << 200u32)));
    assert!(!BigIntOps.is_power_of_two(&big(-2)));
    assert!(!BigIntOps.is_power_of_two(&big(0)));
    assert_eq!(BigIntOps.sign(&big(-10)), Ok(-1));
    assert_eq!(BigIntOps.sign(&big(0)), Ok(0));
    assert_eq!(BigIntOps.abs(&big(-10)), Ok(big(10)));
}

#[test]
fn rounding_is_identity() {
    assert_eq!(BigIntOps.floor(&big(3)), big(3));
    assert_eq!(
        BigIntOps.round(&big(3), 2, MidpointRounding::AwayFromZero),
        Ok(big(3))
    );
    assert!(BigIntOps.round(&big(3), -1, MidpointRounding::ToEven).is_err());
}

#[test]
fn conversions_and_text() {
    assert_eq!(BigIntOps.from_value(&NumericValue::F64(-2.5)), Ok(big(-2)));
    assert_eq!(
        BigIntOps.to_i8(&big(200)),
        Err(NumericError::Overflow { operation: "to_i8" })
    );
    assert_eq!(
        BigIntOps.parse("80", Some(NumberStyles::HEX_NUMBER), None),
        Ok(big(-128))
    );
    assert_eq!(BigIntOps.format(&big(-42), None, None), Ok("-42".to_owned()));
    assert_eq!(BigIntOps.try_parse("4.5", None, None), Ok(None));
}
