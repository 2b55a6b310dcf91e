//! `Number<T>`: a value that carries its numeric operations.
//!
//! Every method resolves the operation set for `T` from the global registry
//! and delegates to it, so the same generic code works for any registered
//! type:
//!
//! ```
//! use gnum::Number;
//!
//! fn total<T: 'static>(values: Vec<T>) -> Number<T> {
//!     values.into_iter().map(Number::new).sum()
//! }
//!
//! assert_eq!(total(vec![1_i32, 2, 3]).into_inner(), 6);
//! assert_eq!(total(vec![0.5_f64, 0.25]).into_inner(), 0.75);
//! ```
//!
//! # Panics
//!
//! The named `try_*` methods return `NumericResult`. The operator traits
//! (`+ - * / % - ! & | ^ << >>` and their assigning forms) and the
//! comparison, hashing and summation traits have no error channel; they
//! panic with the error message, the way `/` panics on an integer zero
//! divisor. They also panic when `T` has no registered operations.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use gnum_text::{NumberFormat, NumberStyles};
use num_bigint::BigInt;
use rust_decimal::Decimal;

use crate::contract::NumericOps;
use crate::error::NumericResult;
use crate::kind::NumericKind;
use crate::registry::OpsRegistry;
use crate::rounding::MidpointRounding;

/// Unwrap for trait impls that cannot return an error.
trait OrPanic<T> {
    fn or_panic(self) -> T;
}

impl<T> OrPanic<T> for NumericResult<T> {
    #[inline]
    #[track_caller]
    fn or_panic(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

/// A numeric value whose operations come from the registry.
#[derive(Clone, Copy, Default, Debug)]
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Number<T>(T);

impl<T> Number<T> {
    #[inline]
    #[must_use]
    pub const fn new(value: T) -> Self {
        Number(value)
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Number<T> {
    #[inline]
    fn from(value: T) -> Self {
        Number(value)
    }
}

macro_rules! binary_methods {
    ($($(#[$doc:meta])* $name:ident => $op:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&self, other: &Self) -> NumericResult<Self> {
                Self::ops()?.$op(&self.0, &other.0).map(Number)
            }
        )*
    };
}

macro_rules! unary_methods {
    ($($(#[$doc:meta])* $name:ident => $op:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&self) -> NumericResult<Self> {
                Self::ops()?.$op(&self.0).map(Number)
            }
        )*
    };
}

macro_rules! predicate_methods {
    ($($name:ident => $op:ident;)*) => {
        $(
            pub fn $name(&self, other: &Self) -> NumericResult<bool> {
                Ok(Self::ops()?.$op(&self.0, &other.0))
            }
        )*
    };
}

macro_rules! conversion_methods {
    ($($method:ident -> $t:ty),* $(,)?) => {
        $(
            pub fn $method(&self) -> NumericResult<$t> {
                Self::ops()?.$method(&self.0)
            }
        )*
    };
}

impl<T: 'static> Number<T> {
    #[inline]
    fn ops() -> NumericResult<&'static dyn NumericOps<T>> {
        OpsRegistry::global().resolve::<T>()
    }

    pub fn kind() -> NumericResult<NumericKind> {
        Ok(Self::ops()?.kind())
    }

    pub fn zero() -> NumericResult<Self> {
        Ok(Number(Self::ops()?.zero()))
    }

    pub fn one() -> NumericResult<Self> {
        Ok(Number(Self::ops()?.one()))
    }

    pub fn minus_one() -> NumericResult<Self> {
        Self::ops()?.minus_one().map(Number)
    }

    pub fn min_value() -> NumericResult<Self> {
        Self::ops()?.min_value().map(Number)
    }

    pub fn max_value() -> NumericResult<Self> {
        Self::ops()?.max_value().map(Number)
    }

    binary_methods! {
        try_add => add;
        try_subtract => subtract;
        try_multiply => multiply;
        /// Integral division truncates toward zero.
        try_divide => divide;
        try_remainder => remainder;
        try_bitwise_and => bitwise_and;
        try_bitwise_or => bitwise_or;
        try_xor => xor;
    }

    unary_methods! {
        try_negate => negate;
        try_ones_complement => ones_complement;
        try_abs => abs;
    }

    pub fn try_div_rem(&self, other: &Self) -> NumericResult<(Self, Self)> {
        let (quotient, remainder) = Self::ops()?.div_rem(&self.0, &other.0)?;
        Ok((Number(quotient), Number(remainder)))
    }

    pub fn try_left_shift(&self, shift: i32) -> NumericResult<Self> {
        Self::ops()?.left_shift(&self.0, shift).map(Number)
    }

    pub fn try_right_shift(&self, shift: i32) -> NumericResult<Self> {
        Self::ops()?.right_shift(&self.0, shift).map(Number)
    }

    // Comparison. The ordering predicates follow the kind's native
    // comparison (IEEE for floats), unlike `Ord`, which uses the total order.

    predicate_methods! {
        try_equals => equals;
        try_not_equals => not_equals;
        try_less_than => less_than;
        try_less_than_or_equal => less_than_or_equal;
        try_greater_than => greater_than;
        try_greater_than_or_equal => greater_than_or_equal;
    }

    pub fn try_compare(&self, other: &Self) -> NumericResult<Ordering> {
        Ok(Self::ops()?.compare(&self.0, &other.0))
    }

    /// # Errors
    ///
    /// `InvalidArgument` when `min > max`.
    pub fn try_clamp<'a>(&'a self, min: &'a Self, max: &'a Self) -> NumericResult<&'a Self> {
        let chosen = Self::ops()?.clamp(&self.0, &min.0, &max.0)?;
        Ok(crate::adapters::outer_of(
            chosen,
            self,
            &[(&min.0, min), (&max.0, max), (&self.0, self)],
        ))
    }

    pub fn try_min<'a>(&'a self, other: &'a Self) -> NumericResult<&'a Self> {
        let chosen = Self::ops()?.min(&self.0, &other.0);
        Ok(crate::adapters::outer_of(
            chosen,
            self,
            &[(&self.0, self), (&other.0, other)],
        ))
    }

    pub fn try_max<'a>(&'a self, other: &'a Self) -> NumericResult<&'a Self> {
        let chosen = Self::ops()?.max(&self.0, &other.0);
        Ok(crate::adapters::outer_of(
            chosen,
            self,
            &[(&self.0, self), (&other.0, other)],
        ))
    }

    // Rounding and predicates

    pub fn floor(&self) -> NumericResult<Self> {
        Ok(Number(Self::ops()?.floor(&self.0)))
    }

    pub fn ceiling(&self) -> NumericResult<Self> {
        Ok(Number(Self::ops()?.ceiling(&self.0)))
    }

    pub fn truncate(&self) -> NumericResult<Self> {
        Ok(Number(Self::ops()?.truncate(&self.0)))
    }

    pub fn try_round(&self, digits: i32, mode: MidpointRounding) -> NumericResult<Self> {
        Self::ops()?.round(&self.0, digits, mode).map(Number)
    }

    pub fn is_even(&self) -> NumericResult<bool> {
        Ok(Self::ops()?.is_even(&self.0))
    }

    pub fn is_odd(&self) -> NumericResult<bool> {
        Ok(Self::ops()?.is_odd(&self.0))
    }

    pub fn is_power_of_two(&self) -> NumericResult<bool> {
        Ok(Self::ops()?.is_power_of_two(&self.0))
    }

    pub fn try_sign(&self) -> NumericResult<i32> {
        Self::ops()?.sign(&self.0)
    }

    // Conversion

    conversion_methods! {
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

    /// Convert to another registered type.
    ///
    /// # Errors
    ///
    /// `Overflow` when the value does not fit `U`, `UnsupportedType` when
    /// either side has no operations.
    pub fn to<U: 'static>(&self) -> NumericResult<Number<U>> {
        let value = Self::ops()?.to_value(&self.0);
        Number::<U>::ops()?.from_value(&value).map(Number)
    }

    // Text

    pub fn parse(
        text: &str,
        styles: Option<NumberStyles>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<Self> {
        Self::ops()?.parse(text, styles, format).map(Number)
    }

    /// `Ok(None)` for malformed or out-of-range text.
    pub fn try_parse(
        text: &str,
        styles: Option<NumberStyles>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<Option<Self>> {
        Ok(Self::ops()?.try_parse(text, styles, format)?.map(Number))
    }

    pub fn format(
        &self,
        spec: Option<&str>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<String> {
        Self::ops()?.format(&self.0, spec, format)
    }
}

macro_rules! binary_operators {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident => $named:ident;)*) => {
        $(
            impl<T: 'static> $trait for Number<T> {
                type Output = Number<T>;

                #[track_caller]
                fn $method(self, rhs: Number<T>) -> Number<T> {
                    self.$named(&rhs).or_panic()
                }
            }

            impl<T: 'static> $trait<&Number<T>> for &Number<T> {
                type Output = Number<T>;

                #[track_caller]
                fn $method(self, rhs: &Number<T>) -> Number<T> {
                    self.$named(rhs).or_panic()
                }
            }

            impl<T: 'static> $assign for Number<T> {
                #[track_caller]
                fn $assign_method(&mut self, rhs: Number<T>) {
                    *self = self.$named(&rhs).or_panic();
                }
            }
        )*
    };
}

binary_operators! {
    Add::add, AddAssign::add_assign => try_add;
    Sub::sub, SubAssign::sub_assign => try_subtract;
    Mul::mul, MulAssign::mul_assign => try_multiply;
    Div::div, DivAssign::div_assign => try_divide;
    Rem::rem, RemAssign::rem_assign => try_remainder;
    BitAnd::bitand, BitAndAssign::bitand_assign => try_bitwise_and;
    BitOr::bitor, BitOrAssign::bitor_assign => try_bitwise_or;
    BitXor::bitxor, BitXorAssign::bitxor_assign => try_xor;
}

macro_rules! shift_operators {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident => $named:ident;)*) => {
        $(
            impl<T: 'static> $trait<i32> for Number<T> {
                type Output = Number<T>;

                #[track_caller]
                fn $method(self, shift: i32) -> Number<T> {
                    self.$named(shift).or_panic()
                }
            }

            impl<T: 'static> $trait<i32> for &Number<T> {
                type Output = Number<T>;

                #[track_caller]
                fn $method(self, shift: i32) -> Number<T> {
                    self.$named(shift).or_panic()
                }
            }

            impl<T: 'static> $assign<i32> for Number<T> {
                #[track_caller]
                fn $assign_method(&mut self, shift: i32) {
                    *self = self.$named(shift).or_panic();
                }
            }
        )*
    };
}

shift_operators! {
    Shl::shl, ShlAssign::shl_assign => try_left_shift;
    Shr::shr, ShrAssign::shr_assign => try_right_shift;
}

impl<T: 'static> Neg for Number<T> {
    type Output = Number<T>;

    #[track_caller]
    fn neg(self) -> Number<T> {
        self.try_negate().or_panic()
    }
}

impl<T: 'static> Neg for &Number<T> {
    type Output = Number<T>;

    #[track_caller]
    fn neg(self) -> Number<T> {
        self.try_negate().or_panic()
    }
}

impl<T: 'static> Not for Number<T> {
    type Output = Number<T>;

    #[track_caller]
    fn not(self) -> Number<T> {
        self.try_ones_complement().or_panic()
    }
}

impl<T: 'static> Not for &Number<T> {
    type Output = Number<T>;

    #[track_caller]
    fn not(self) -> Number<T> {
        self.try_ones_complement().or_panic()
    }
}

impl<T: 'static> PartialEq for Number<T> {
    fn eq(&self, other: &Self) -> bool {
        self.try_equals(other).or_panic()
    }
}

impl<T: 'static> Eq for Number<T> {}

impl<T: 'static> PartialOrd for Number<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total order of the kind: for floats `NaN` sorts first and equals itself.
impl<T: 'static> Ord for Number<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.try_compare(other).or_panic()
    }
}

impl<T: 'static> Hash for Number<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Self::ops().or_panic().hash_value(&self.0, state);
    }
}

/// Default format; a precision (`{:.2}`) selects fixed-point.
impl<T: 'static> fmt::Display for Number<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = f.precision().map(|digits| format!("F{digits}"));
        let text = self
            .format(spec.as_deref(), None)
            .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl<T: 'static> Sum for Number<T> {
    #[track_caller]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero().or_panic(), |total, item| total + item)
    }
}

impl<'a, T: 'static> Sum<&'a Number<T>> for Number<T> {
    #[track_caller]
    fn sum<I: Iterator<Item = &'a Number<T>>>(iter: I) -> Self {
        iter.fold(Self::zero().or_panic(), |total, item| &total + item)
    }
}

impl<T: 'static> Product for Number<T> {
    #[track_caller]
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one().or_panic(), |total, item| total * item)
    }
}

impl<'a, T: 'static> Product<&'a Number<T>> for Number<T> {
    #[track_caller]
    fn product<I: Iterator<Item = &'a Number<T>>>(iter: I) -> Self {
        iter.fold(Self::one().or_panic(), |total, item| &total * item)
    }
}
