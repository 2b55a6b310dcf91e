//! The operation set every numeric type provides.
//!
//! `NumericOps<T>` is object safe: the registry hands out
//! `&'static dyn NumericOps<T>` and generic code never needs to know the
//! concrete implementation. Values are passed by reference because several
//! kinds (`BigInt`, user types) are not `Copy`.
//!
//! Methods with a default derive their result from the required ones, so a
//! user type only implements the primitive operations. Every default is
//! total: there are no optional parts of the contract.

use std::cmp::Ordering;
use std::hash::Hasher;

use gnum_text::{NumberFormat, NumberStyles};
use num_bigint::BigInt;
use rust_decimal::Decimal;

use crate::error::{NumericError, NumericResult};
use crate::kind::NumericKind;
use crate::rounding::MidpointRounding;
use crate::value::NumericValue;

macro_rules! conversions {
    ($($method:ident -> $t:ty),* $(,)?) => {
        $(
            #[doc = concat!("Convert to `", stringify!($t), "` through the dynamic value.")]
            fn $method(&self, value: &T) -> NumericResult<$t> {
                self.to_value(value).$method()
            }
        )*
    };
}

/// Operations for the numeric type `T`.
///
/// # Semantics
///
/// Each implementation keeps its kind's native behavior: fixed-width integers
/// wrap on `add`/`subtract`/`multiply`/`negate`, floats follow IEEE-754,
/// `Decimal` and `BigInt` raise on division by zero. Operations a kind does
/// not define fail with `NumericError::OperationNotSupported`.
pub trait NumericOps<T>: Send + Sync {
    fn kind(&self) -> NumericKind;

    // Identity constants

    fn zero(&self) -> T;

    fn one(&self) -> T;

    /// Fails on unsigned kinds.
    fn minus_one(&self) -> NumericResult<T>;

    /// Fails on unbounded kinds.
    fn min_value(&self) -> NumericResult<T>;

    /// Fails on unbounded kinds.
    fn max_value(&self) -> NumericResult<T>;

    // Arithmetic

    fn add(&self, left: &T, right: &T) -> NumericResult<T>;

    fn subtract(&self, left: &T, right: &T) -> NumericResult<T>;

    fn multiply(&self, left: &T, right: &T) -> NumericResult<T>;

    /// Integral division truncates toward zero.
    fn divide(&self, left: &T, right: &T) -> NumericResult<T>;

    /// Remainder with the dividend's sign.
    fn remainder(&self, left: &T, right: &T) -> NumericResult<T>;

    /// Quotient and remainder together.
    fn div_rem(&self, left: &T, right: &T) -> NumericResult<(T, T)> {
        Ok((self.divide(left, right)?, self.remainder(left, right)?))
    }

    fn negate(&self, value: &T) -> NumericResult<T>;

    // Comparison

    fn equals(&self, left: &T, right: &T) -> bool;

    fn not_equals(&self, left: &T, right: &T) -> bool {
        !self.equals(left, right)
    }

    /// Total order. `Equal` must agree with `equals`.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    fn less_than(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Less
    }

    fn less_than_or_equal(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) != Ordering::Greater
    }

    fn greater_than(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Greater
    }

    fn greater_than_or_equal(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) != Ordering::Less
    }

    // Bitwise, integral kinds only

    fn bitwise_and(&self, left: &T, right: &T) -> NumericResult<T>;

    fn bitwise_or(&self, left: &T, right: &T) -> NumericResult<T>;

    fn xor(&self, left: &T, right: &T) -> NumericResult<T>;

    fn ones_complement(&self, value: &T) -> NumericResult<T>;

    fn left_shift(&self, value: &T, shift: i32) -> NumericResult<T>;

    fn right_shift(&self, value: &T, shift: i32) -> NumericResult<T>;

    // Rounding

    fn floor(&self, value: &T) -> T;

    fn ceiling(&self, value: &T) -> T;

    fn truncate(&self, value: &T) -> T;

    /// Round to `digits` fractional digits.
    fn round(&self, value: &T, digits: i32, mode: MidpointRounding) -> NumericResult<T>;

    // Predicates

    fn is_even(&self, value: &T) -> bool;

    fn is_odd(&self, value: &T) -> bool;

    fn is_power_of_two(&self, value: &T) -> bool;

    /// `-1`, `0` or `1`.
    fn sign(&self, value: &T) -> NumericResult<i32>;

    fn abs(&self, value: &T) -> NumericResult<T>;

    /// Restrict `value` to `[min, max]`.
    ///
    /// Fails with `InvalidArgument` when `min > max`.
    fn clamp<'a>(&self, value: &'a T, min: &'a T, max: &'a T) -> NumericResult<&'a T> {
        if self.greater_than(min, max) {
            return Err(NumericError::invalid_argument(
                "clamp minimum is greater than maximum",
            ));
        }
        Ok(if self.less_than(value, min) {
            min
        } else if self.greater_than(value, max) {
            max
        } else {
            value
        })
    }

    fn min<'a>(&self, left: &'a T, right: &'a T) -> &'a T {
        if self.greater_than(left, right) {
            right
        } else {
            left
        }
    }

    fn max<'a>(&self, left: &'a T, right: &'a T) -> &'a T {
        if self.less_than(left, right) {
            right
        } else {
            left
        }
    }

    // Conversion

    fn to_value(&self, value: &T) -> NumericValue;

    /// Build a value from any kind, failing with `Overflow` when out of
    /// range.
    fn from_value(&self, value: &NumericValue) -> NumericResult<T>;

    conversions! {
        to_i8 -> i8,
        to_i16 -> i16,
        to_i32 -> i32,
        to_i64 -> i64,
        to_i128 -> i128,
        to_isize -> isize,
        to_u8 -> u8,
        to_u16 -> u16,
        to_u32 -> u32,
        to_u64 -> u64,
        to_u128 -> u128,
        to_usize -> usize,
        to_f32 -> f32,
        to_f64 -> f64,
        to_decimal -> Decimal,
        to_big_int -> BigInt,
    }

    // Text

    /// Parse under `styles` (the kind's default when `None`) and `format`
    /// (invariant when `None`).
    fn parse(
        &self,
        text: &str,
        styles: Option<NumberStyles>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<T>;

    /// Like `parse`, but malformed or out-of-range text is `Ok(None)`.
    ///
    /// Invalid style combinations still fail.
    fn try_parse(
        &self,
        text: &str,
        styles: Option<NumberStyles>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<Option<T>> {
        match self.parse(text, styles, format) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_parse_failure() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Format with a standard specifier (`G` when `None`).
    fn format(
        &self,
        value: &T,
        spec: Option<&str>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<String>;

    /// Feed a hash consistent with `equals` into `state`.
    fn hash_value(&self, value: &T, state: &mut dyn Hasher);
}
