//! Property-based tests over every built-in kind.
//!
//! For each kind:
//! 1. Round trip: `parse(format(v)) == v` with the default format and style
//! 2. Identity conversion never fails and never changes the value
//! 3. `compare` agrees with `equals` and is antisymmetric
//! 4. Lifting to `Option<T>` propagates and orders absence consistently

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::cmp::Ordering;
use std::fmt::Debug;

use gnum::generic;
use num_bigint::BigInt;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn check_round_trip<T: Debug + 'static>(value: &T) -> Result<(), TestCaseError> {
    let ops = generic::ops::<T>().unwrap();
    let text = ops.format(value, None, None).unwrap();
    let parsed = ops.parse(&text, None, None);
    prop_assert!(parsed.is_ok(), "{text:?} failed to parse: {parsed:?}");
    let parsed = parsed.unwrap();
    prop_assert!(ops.equals(&parsed, value), "{value:?} -> {text:?} -> {parsed:?}");
    Ok(())
}

fn check_identity_conversion<T: Debug + 'static>(value: &T) -> Result<(), TestCaseError> {
    let ops = generic::ops::<T>().unwrap();
    let converted = generic::convert::<T, T>(value);
    prop_assert!(converted.is_ok(), "{value:?}: {converted:?}");
    prop_assert!(ops.equals(&converted.unwrap(), value));
    Ok(())
}

fn check_ordering_laws<T: 'static>(a: &T, b: &T) -> Result<(), TestCaseError> {
    let ops = generic::ops::<T>().unwrap();
    let forward = ops.compare(a, b);
    prop_assert_eq!(forward == Ordering::Equal, ops.equals(a, b));
    prop_assert_eq!(forward, ops.compare(b, a).reverse());
    prop_assert_eq!(ops.compare(a, a), Ordering::Equal);
    prop_assert!(ops.equals(a, a));
    Ok(())
}

fn check_nullable_lifting<T: 'static>(value: T) -> Result<(), TestCaseError> {
    let ops = generic::ops::<Option<T>>().unwrap();
    let present = Some(value);
    prop_assert!(ops.add(&None, &present).unwrap().is_none());
    prop_assert!(ops.multiply(&present, &None).unwrap().is_none());
    prop_assert!(ops.equals(&None, &None));
    prop_assert!(!ops.equals(&None, &present));
    prop_assert!(ops.equals(&present, &present));
    prop_assert_eq!(ops.compare(&None, &present), Ordering::Less);
    prop_assert_eq!(ops.compare(&present, &None), Ordering::Greater);
    prop_assert!(!ops.less_than(&None, &present));
    Ok(())
}

fn decimal_strategy() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0_u32..=28).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn big_int_strategy() -> impl Strategy<Value = BigInt> {
    (any::<i128>(), any::<i128>()).prop_map(|(a, b)| BigInt::from(a) * BigInt::from(b))
}

macro_rules! kind_properties {
    ($($name:ident: $t:ty = $strategy:expr;)*) => {
        $(
            mod $name {
                use super::*;

                proptest! {
                    #[test]
                    fn format_then_parse(value in $strategy) {
                        check_round_trip::<$t>(&value)?;
                    }

                    #[test]
                    fn identity_conversion(value in $strategy) {
                        check_identity_conversion::<$t>(&value)?;
                    }

                    #[test]
                    fn ordering_laws(a in $strategy, b in $strategy) {
                        check_ordering_laws::<$t>(&a, &b)?;
                    }

                    #[test]
                    fn nullable_lifting(value in $strategy) {
                        check_nullable_lifting::<$t>(value)?;
                    }
                }
            }
        )*
    };
}

kind_properties! {
    kind_i8: i8 = any::<i8>();
    kind_i16: i16 = any::<i16>();
    kind_i32: i32 = any::<i32>();
    kind_i64: i64 = any::<i64>();
    kind_i128: i128 = any::<i128>();
    kind_isize: isize = any::<isize>();
    kind_u8: u8 = any::<u8>();
    kind_u16: u16 = any::<u16>();
    kind_u32: u32 = any::<u32>();
    kind_u64: u64 = any::<u64>();
    kind_u128: u128 = any::<u128>();
    kind_usize: usize = any::<usize>();
    kind_f32: f32 = prop::num::f32::ANY;
    kind_f64: f64 = prop::num::f64::ANY;
    kind_decimal: Decimal = decimal_strategy();
    kind_big_int: BigInt = big_int_strategy();
}

proptest! {
    #[test]
    fn hex_pattern_round_trips(value in any::<i32>()) {
        let ops = generic::ops::<i32>().unwrap();
        let text = ops.format(&value, Some("X8"), None).unwrap();
        let parsed = ops.parse(&text, Some(gnum::NumberStyles::HEX_NUMBER), None).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn widening_conversion_is_lossless(value in any::<i32>()) {
        let wide = generic::convert::<i32, i64>(&value).unwrap();
        prop_assert_eq!(generic::convert::<i64, i32>(&wide), Ok(value));
    }
}
