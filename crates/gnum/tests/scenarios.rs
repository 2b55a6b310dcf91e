//! End-to-end behavior through the public facade: the global registry, the
//! free functions in `gnum::generic`, and `Number<T>`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use gnum::{
    generic, MidpointRounding, Number, NumberStyles, NumericError, NumericKind, OpsRegistry,
    Relabeling,
};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

// =============================================================================
// Basic scenario
// =============================================================================

#[test]
fn int32_scenario() {
    assert_eq!(generic::add::<i32>(&3, &2), Ok(5));
    assert_eq!(generic::divide::<i32>(&6, &2), Ok(3));
    assert_eq!(generic::remainder::<i32>(&5, &3), Ok(2));
    assert_eq!(generic::negate::<i32>(&3), Ok(-3));
    assert_eq!(generic::left_shift::<i32>(&3, 2), Ok(12));
    assert_eq!(generic::compare::<i32>(&3, &2), Ok(std::cmp::Ordering::Greater));
    assert_eq!(
        generic::parse::<i32>("FFFFFFFF", Some(NumberStyles::HEX_NUMBER), None),
        Ok(-1)
    );
}

#[test]
fn decimal_midpoint_rounding() {
    let value = Decimal::new(325, 2);
    assert_eq!(
        generic::round(&value, 1, MidpointRounding::ToEven),
        Ok(Decimal::new(32, 1))
    );
    assert_eq!(
        generic::round(&value, 1, MidpointRounding::AwayFromZero),
        Ok(Decimal::new(33, 1))
    );
}

#[test]
fn narrowing_conversion_overflows() {
    assert_eq!(
        generic::convert::<u32, i32>(&4_294_967_295),
        Err(NumericError::Overflow { operation: "to_i32" })
    );
    assert_eq!(generic::convert::<u32, i64>(&4_294_967_295), Ok(4_294_967_295));
}

// =============================================================================
// Laws that hold for every kind
// =============================================================================

fn integral_division_by_zero<T: 'static>() {
    let ops = generic::ops::<T>().unwrap();
    let (zero, one) = (ops.zero(), ops.one());
    let kind = ops.kind();
    assert_eq!(ops.divide(&one, &zero).err(), Some(NumericError::DivideByZero), "{kind}");
    assert_eq!(ops.remainder(&one, &zero).err(), Some(NumericError::DivideByZero), "{kind}");
}

fn unsigned_has_no_negation<T: 'static>() {
    let ops = generic::ops::<T>().unwrap();
    let kind = ops.kind();
    assert_eq!(
        ops.negate(&ops.one()).err(),
        Some(NumericError::not_supported("negate", kind))
    );
    assert_eq!(
        ops.minus_one().err(),
        Some(NumericError::not_supported("minus_one", kind))
    );
}

fn inverted_clamp_bounds<T: 'static>() {
    let ops = generic::ops::<T>().unwrap();
    let (zero, one) = (ops.zero(), ops.one());
    assert!(
        matches!(
            ops.clamp(&zero, &one, &zero),
            Err(NumericError::InvalidArgument { .. })
        ),
        "{}",
        ops.kind()
    );
}

#[test]
fn integral_kinds_reject_zero_divisors() {
    integral_division_by_zero::<i8>();
    integral_division_by_zero::<i16>();
    integral_division_by_zero::<i32>();
    integral_division_by_zero::<i64>();
    integral_division_by_zero::<i128>();
    integral_division_by_zero::<isize>();
    integral_division_by_zero::<u8>();
    integral_division_by_zero::<u16>();
    integral_division_by_zero::<u32>();
    integral_division_by_zero::<u64>();
    integral_division_by_zero::<u128>();
    integral_division_by_zero::<usize>();
    integral_division_by_zero::<BigInt>();
}

#[test]
fn floats_divide_by_zero_natively() {
    assert_eq!(generic::ops::<f64>().unwrap().divide(&1.0, &0.0), Ok(f64::INFINITY));
    assert!(generic::ops::<f32>().unwrap().remainder(&1.0, &0.0).unwrap().is_nan());
    assert_eq!(
        generic::ops::<Decimal>().unwrap().divide(&Decimal::ONE, &Decimal::ZERO),
        Err(NumericError::DivideByZero)
    );
}

#[test]
fn unsigned_kinds_reject_negation() {
    unsigned_has_no_negation::<u8>();
    unsigned_has_no_negation::<u16>();
    unsigned_has_no_negation::<u32>();
    unsigned_has_no_negation::<u64>();
    unsigned_has_no_negation::<u128>();
    unsigned_has_no_negation::<usize>();
}

#[test]
fn every_kind_rejects_inverted_clamp_bounds() {
    inverted_clamp_bounds::<i8>();
    inverted_clamp_bounds::<i16>();
    inverted_clamp_bounds::<i32>();
    inverted_clamp_bounds::<i64>();
    inverted_clamp_bounds::<i128>();
    inverted_clamp_bounds::<isize>();
    inverted_clamp_bounds::<u8>();
    inverted_clamp_bounds::<u16>();
    inverted_clamp_bounds::<u32>();
    inverted_clamp_bounds::<u64>();
    inverted_clamp_bounds::<u128>();
    inverted_clamp_bounds::<usize>();
    inverted_clamp_bounds::<f32>();
    inverted_clamp_bounds::<f64>();
    inverted_clamp_bounds::<Decimal>();
    inverted_clamp_bounds::<BigInt>();
    inverted_clamp_bounds::<Option<i32>>();
    inverted_clamp_bounds::<Number<u8>>();
}

#[test]
fn unsupported_type_is_reported_every_time() {
    let expected = NumericError::unsupported_type::<Vec<i32>>();
    assert_eq!(generic::zero::<Vec<i32>>(), Err(expected.clone()));
    assert_eq!(generic::zero::<Vec<i32>>(), Err(expected.clone()));
    assert_eq!(generic::sum::<Vec<i32>>(&[]), Err(expected));
    assert!(!generic::is_supported::<Vec<i32>>());
}

// =============================================================================
// Nullable lifting
// =============================================================================

#[test]
fn nullable_propagation() {
    let ops = generic::ops::<Option<Decimal>>().unwrap();
    let x = Some(Decimal::new(15, 1));
    assert_eq!(ops.add(&None, &x), Ok(None));
    assert!(ops.equals(&None, &None));
    assert!(!ops.equals(&None, &x));
    assert_eq!(ops.compare(&None, &x), std::cmp::Ordering::Less);
    assert!(!ops.less_than(&None, &x));
    assert_eq!(generic::parse::<Option<u32>>("  ", None, None), Ok(None));
}

// =============================================================================
// Generic code
// =============================================================================

fn average<T: 'static>(values: &[T]) -> gnum::NumericResult<T> {
    let total = Number::new(generic::sum(values)?);
    let count = Number::new(generic::convert::<usize, T>(&values.len())?);
    total.try_divide(&count).map(Number::into_inner)
}

#[test]
fn one_routine_for_every_kind() {
    assert_eq!(average(&[2_i32, 4, 9]), Ok(5));
    assert_eq!(average(&[1.0_f64, 2.0]), Ok(1.5));
    assert_eq!(
        average(&[Decimal::new(10, 0), Decimal::new(5, 0)]),
        Ok(Decimal::new(75, 1))
    );
    let large = BigInt::from(u128::MAX);
    assert_eq!(average(&[large.clone(), large.clone()]), Ok(large));
    assert_eq!(average::<u8>(&[]), Err(NumericError::DivideByZero));
}

#[test]
fn number_operators_across_kinds() {
    let a = Number::new(Decimal::new(125, 2));
    let b = Number::new(Decimal::new(75, 2));
    assert_eq!((a + b).into_inner(), Decimal::new(200, 2));
    assert_eq!((a * b).to_string(), "0.9375");

    let big = Number::new(BigInt::from(1)) << 100;
    assert_eq!(big.to_string(), "1267650600228229401496703205376");

    let missing: Number<Option<i64>> = Number::new(None);
    assert_eq!((missing + Number::new(Some(1))).into_inner(), None);
}

// =============================================================================
// User kinds
// =============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Priority {
    Low,
    Normal,
    High,
    Other(u8),
}

impl Priority {
    fn from_code(code: u8) -> Self {
        match code {
            1 => Priority::Low,
            2 => Priority::Normal,
            4 => Priority::High,
            other => Priority::Other(other),
        }
    }

    fn code(&self) -> u8 {
        match *self {
            Priority::Low => 1,
            Priority::Normal => 2,
            Priority::High => 4,
            Priority::Other(code) => code,
        }
    }

    fn name(&self) -> Option<&'static str> {
        match self {
            Priority::Low => Some("Low"),
            Priority::Normal => Some("Normal"),
            Priority::High => Some("High"),
            Priority::Other(_) => None,
        }
    }

    fn from_name(text: &str) -> Option<Self> {
        match text {
            "Low" => Some(Priority::Low),
            "Normal" => Some(Priority::Normal),
            "High" => Some(Priority::High),
            _ => None,
        }
    }
}

#[test]
fn relabeled_enum_registration() {
    assert!(!generic::is_supported::<Priority>());
    let relabeling = Relabeling::new(Priority::code, Priority::from_code)
        .with_names(Priority::name, Priority::from_name);
    generic::register_relabeled(relabeling).unwrap();

    let ops = generic::ops::<Priority>().unwrap();
    assert_eq!(ops.kind(), NumericKind::U8);
    assert_eq!(ops.bitwise_or(&Priority::Low, &Priority::High), Ok(Priority::Other(5)));
    assert_eq!(ops.format(&Priority::High, None, None), Ok("High".to_owned()));
    assert_eq!(ops.format(&Priority::Other(5), None, None), Ok("5".to_owned()));
    assert_eq!(generic::parse::<Priority>("Normal", None, None), Ok(Priority::Normal));
    assert_eq!(generic::parse::<Priority>("4", None, None), Ok(Priority::High));

    let nullable = generic::ops::<Option<Priority>>().unwrap();
    assert_eq!(nullable.format(&None, None, None), Ok(String::new()));
    assert_eq!(generic::convert::<Priority, i64>(&Priority::Normal), Ok(2));

    let again = Relabeling::new(Priority::code, Priority::from_code);
    assert!(matches!(
        generic::register_relabeled(again),
        Err(NumericError::AlreadyRegistered { .. })
    ));
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Celsius(f64);

#[test]
fn registration_after_a_failed_lookup() {
    assert!(generic::zero::<Celsius>().is_err());
    assert!(generic::zero::<Option<Celsius>>().is_err());

    let relabeling = Relabeling::new(|c: &Celsius| c.0, Celsius);
    generic::register_relabeled(relabeling).unwrap();

    assert_eq!(generic::zero::<Celsius>(), Ok(Celsius(0.0)));
    let readings = [Some(Celsius(1.5)), Some(Celsius(2.0))];
    assert_eq!(generic::sum(&readings), Ok(Some(Celsius(3.5))));
    let warm = Number::new(Celsius(21.5));
    assert!(warm > Number::new(Celsius(-4.0)));
}

#[test]
fn independent_registry_leaves_global_untouched() {
    #[derive(Copy, Clone, Debug, PartialEq)]
    struct Kelvin(f64);

    let registry = OpsRegistry::new();
    registry
        .register_relabeled(Relabeling::new(|k: &Kelvin| k.0, Kelvin))
        .unwrap();
    assert!(registry.is_supported::<Option<Kelvin>>());
    assert!(!generic::is_supported::<Kelvin>());
}
