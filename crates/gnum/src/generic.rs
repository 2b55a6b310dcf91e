//! Free functions over the global registry.
//!
//! Thin wrappers for generic code that works on plain `T` values instead
//! of `Number<T>`:
//!
//! ```
//! use gnum::generic;
//!
//! fn mean<T: 'static>(values: &[T]) -> gnum::NumericResult<T> {
//!     let total = generic::sum(values)?;
//!     let count = generic::convert::<usize, T>(&values.len())?;
//!     generic::divide(&total, &count)
//! }
//!
//! assert_eq!(mean(&[1.0_f64, 2.0, 6.0]), Ok(3.0));
//! assert_eq!(mean(&[7_u8, 8]), Ok(7));
//! ```

use std::cmp::Ordering;

use gnum_text::{NumberFormat, NumberStyles};

use crate::adapters::Relabeling;
use crate::contract::NumericOps;
use crate::error::NumericResult;
use crate::kind::NumericKind;
use crate::registry::OpsRegistry;
use crate::rounding::MidpointRounding;

/// Operation set for `T` from the global registry.
#[inline]
pub fn ops<T: 'static>() -> NumericResult<&'static dyn NumericOps<T>> {
    OpsRegistry::global().resolve::<T>()
}

pub fn is_supported<T: 'static>() -> bool {
    OpsRegistry::global().is_supported::<T>()
}

pub fn kind<T: 'static>() -> NumericResult<NumericKind> {
    Ok(ops::<T>()?.kind())
}

pub fn zero<T: 'static>() -> NumericResult<T> {
    Ok(ops::<T>()?.zero())
}

pub fn one<T: 'static>() -> NumericResult<T> {
    Ok(ops::<T>()?.one())
}

pub fn minus_one<T: 'static>() -> NumericResult<T> {
    ops::<T>()?.minus_one()
}

pub fn min_value<T: 'static>() -> NumericResult<T> {
    ops::<T>()?.min_value()
}

pub fn max_value<T: 'static>() -> NumericResult<T> {
    ops::<T>()?.max_value()
}

macro_rules! binary_functions {
    ($($(#[$doc:meta])* $name:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<T: 'static>(left: &T, right: &T) -> NumericResult<T> {
                ops::<T>()?.$name(left, right)
            }
        )*
    };
}

macro_rules! unary_functions {
    ($($name:ident;)*) => {
        $(
            pub fn $name<T: 'static>(value: &T) -> NumericResult<T> {
                ops::<T>()?.$name(value)
            }
        )*
    };
}

macro_rules! total_unary_functions {
    ($($name:ident;)*) => {
        $(
            pub fn $name<T: 'static>(value: &T) -> NumericResult<T> {
                Ok(ops::<T>()?.$name(value))
            }
        )*
    };
}

macro_rules! comparison_functions {
    ($($name:ident;)*) => {
        $(
            pub fn $name<T: 'static>(left: &T, right: &T) -> NumericResult<bool> {
                Ok(ops::<T>()?.$name(left, right))
            }
        )*
    };
}

macro_rules! value_predicates {
    ($($name:ident;)*) => {
        $(
            pub fn $name<T: 'static>(value: &T) -> NumericResult<bool> {
                Ok(ops::<T>()?.$name(value))
            }
        )*
    };
}

binary_functions! {
    /// Fixed-width integers wrap.
    add;
    subtract;
    multiply;
    /// `DivideByZero` on a zero integral or decimal divisor.
    divide;
    remainder;
    bitwise_and;
    bitwise_or;
    xor;
}

unary_functions! {
    negate;
    ones_complement;
    abs;
}

total_unary_functions! {
    floor;
    ceiling;
    truncate;
}

comparison_functions! {
    equals;
    not_equals;
    less_than;
    less_than_or_equal;
    greater_than;
    greater_than_or_equal;
}

value_predicates! {
    is_even;
    is_odd;
    is_power_of_two;
}

pub fn div_rem<T: 'static>(left: &T, right: &T) -> NumericResult<(T, T)> {
    ops::<T>()?.div_rem(left, right)
}

pub fn compare<T: 'static>(left: &T, right: &T) -> NumericResult<Ordering> {
    Ok(ops::<T>()?.compare(left, right))
}

pub fn left_shift<T: 'static>(value: &T, shift: i32) -> NumericResult<T> {
    ops::<T>()?.left_shift(value, shift)
}

pub fn right_shift<T: 'static>(value: &T, shift: i32) -> NumericResult<T> {
    ops::<T>()?.right_shift(value, shift)
}

pub fn round<T: 'static>(value: &T, digits: i32, mode: MidpointRounding) -> NumericResult<T> {
    ops::<T>()?.round(value, digits, mode)
}

pub fn sign<T: 'static>(value: &T) -> NumericResult<i32> {
    ops::<T>()?.sign(value)
}

/// `InvalidArgument` when `min` is greater than `max`.
pub fn clamp<'a, T: 'static>(value: &'a T, min: &'a T, max: &'a T) -> NumericResult<&'a T> {
    ops::<T>()?.clamp(value, min, max)
}

pub fn min<'a, T: 'static>(left: &'a T, right: &'a T) -> NumericResult<&'a T> {
    Ok(ops::<T>()?.min(left, right))
}

pub fn max<'a, T: 'static>(left: &'a T, right: &'a T) -> NumericResult<&'a T> {
    Ok(ops::<T>()?.max(left, right))
}

/// Sum of `values`, zero when empty.
///
/// Fixed-width integers wrap, like `add`.
pub fn sum<T: 'static>(values: &[T]) -> NumericResult<T> {
    let ops = ops::<T>()?;
    values
        .iter()
        .try_fold(ops.zero(), |total, value| ops.add(&total, value))
}

/// Product of `values`, one when empty.
pub fn product<T: 'static>(values: &[T]) -> NumericResult<T> {
    let ops = ops::<T>()?;
    values
        .iter()
        .try_fold(ops.one(), |total, value| ops.multiply(&total, value))
}

/// Convert between any two registered types.
///
/// # Errors
///
/// `Overflow` when the value does not fit `D`.
pub fn convert<S: 'static, D: 'static>(value: &S) -> NumericResult<D> {
    let lowered = ops::<S>()?.to_value(value);
    ops::<D>()?.from_value(&lowered)
}

pub fn parse<T: 'static>(
    text: &str,
    styles: Option<NumberStyles>,
    format: Option<&NumberFormat>,
) -> NumericResult<T> {
    ops::<T>()?.parse(text, styles, format)
}

/// `Ok(None)` for malformed or out-of-range text.
pub fn try_parse<T: 'static>(
    text: &str,
    styles: Option<NumberStyles>,
    format: Option<&NumberFormat>,
) -> NumericResult<Option<T>> {
    ops::<T>()?.try_parse(text, styles, format)
}

pub fn format<T: 'static>(
    value: &T,
    spec: Option<&str>,
    format: Option<&NumberFormat>,
) -> NumericResult<String> {
    ops::<T>()?.format(value, spec, format)
}

/// Register operations for `T` in the global registry.
///
/// # Errors
///
/// `AlreadyRegistered` when `T` already has operations.
pub fn register<T: 'static>(ops: &'static dyn NumericOps<T>) -> NumericResult<()> {
    OpsRegistry::global().register(ops)
}

/// Register `T` in the global registry as a relabeling of `U`.
///
/// # Errors
///
/// See [`OpsRegistry::register_relabeled`].
pub fn register_relabeled<T: 'static, U: 'static>(
    relabeling: Relabeling<T, U>,
) -> NumericResult<()> {
    OpsRegistry::global().register_relabeled(relabeling)
}
