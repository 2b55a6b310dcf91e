//! Fixed-width integers.
//!
//! `add`, `subtract`, `multiply` and `negate` wrap in two's complement.
//! `divide` and `remainder` fail on a zero divisor and on `MIN / -1`, the
//! one quotient that does not fit. Shift counts are masked to the width.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use gnum_text::{format_int, parse_int, NumberFormat, NumberStyles, PrimitiveInt};
use num_traits::{
    Bounded, CheckedDiv, CheckedNeg, CheckedRem, PrimInt, WrappingAdd, WrappingMul, WrappingNeg,
    WrappingShl, WrappingShr, WrappingSub,
};

use crate::contract::NumericOps;
use crate::error::{NumericError, NumericResult};
use crate::kind::NumericKind;
use crate::rounding::MidpointRounding;
use crate::value::NumericValue;

/// A primitive integer the generic integer operations cover.
pub trait FixedInt:
    PrimInt
    + PrimitiveInt
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + WrappingNeg
    + WrappingShl
    + WrappingShr
    + CheckedNeg
    + CheckedRem
    + Hash
    + Send
    + Sync
    + Into<NumericValue>
{
    const KIND: NumericKind;

    fn from_numeric(value: &NumericValue) -> NumericResult<Self>;
}

macro_rules! fixed_int {
    ($($t:ty => $kind:ident, $to:ident;)*) => {
        $(
            impl FixedInt for $t {
                const KIND: NumericKind = NumericKind::$kind;

                #[inline]
                fn from_numeric(value: &NumericValue) -> NumericResult<Self> {
                    value.$to()
                }
            }
        )*
    };
}

fixed_int! {
    i8 => I8, to_i8;
    i16 => I16, to_i16;
    i32 => I32, to_i32;
    i64 => I64, to_i64;
    i128 => I128, to_i128;
    isize => Isize, to_isize;
    u8 => U8, to_u8;
    u16 => U16, to_u16;
    u32 => U32, to_u32;
    u64 => U64, to_u64;
    u128 => U128, to_u128;
    usize => Usize, to_usize;
}

/// Operations for one fixed-width integer type.
pub struct IntegerOps<T>(PhantomData<fn() -> T>);

impl<T> IntegerOps<T> {
    pub const fn new() -> Self {
        IntegerOps(PhantomData)
    }
}

impl<T> Default for IntegerOps<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FixedInt> IntegerOps<T> {
    #[cold]
    fn unsigned(operation: &'static str) -> NumericError {
        NumericError::not_supported(operation, T::KIND)
    }

    #[expect(
        clippy::cast_sign_loss,
        reason = "negative counts wrap and are then masked to the width"
    )]
    #[inline]
    fn shift_count(shift: i32) -> u32 {
        shift as u32
    }
}

impl<T: FixedInt> NumericOps<T> for IntegerOps<T> {
    fn kind(&self) -> NumericKind {
        T::KIND
    }

    fn zero(&self) -> T {
        T::zero()
    }

    fn one(&self) -> T {
        T::one()
    }

    fn minus_one(&self) -> NumericResult<T> {
        if T::SIGNED {
            Ok(T::zero().wrapping_sub(&T::one()))
        } else {
            Err(Self::unsigned("minus_one"))
        }
    }

    fn min_value(&self) -> NumericResult<T> {
        Ok(<T as Bounded>::min_value())
    }

    fn max_value(&self) -> NumericResult<T> {
        Ok(<T as Bounded>::max_value())
    }

    fn add(&self, left: &T, right: &T) -> NumericResult<T> {
        Ok(left.wrapping_add(right))
    }

    fn subtract(&self, left: &T, right: &T) -> NumericResult<T> {
        Ok(left.wrapping_sub(right))
    }

    fn multiply(&self, left: &T, right: &T) -> NumericResult<T> {
        Ok(left.wrapping_mul(right))
    }

    fn divide(&self, left: &T, right: &T) -> NumericResult<T> {
        if right.is_zero() {
            return Err(NumericError::DivideByZero);
        }
        CheckedDiv::checked_div(left, right).ok_or_else(|| NumericError::overflow("divide"))
    }

    fn remainder(&self, left: &T, right: &T) -> NumericResult<T> {
        if right.is_zero() {
            return Err(NumericError::DivideByZero);
        }
        CheckedRem::checked_rem(left, right).ok_or_else(|| NumericError::overflow("remainder"))
    }

    fn negate(&self, value: &T) -> NumericResult<T> {
        if T::SIGNED {
            Ok(value.wrapping_neg())
        } else {
            Err(Self::unsigned("negate"))
        }
    }

    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }

    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }

    fn bitwise_and(&self, left: &T, right: &T) -> NumericResult<T> {
        Ok(*left & *right)
    }

    fn bitwise_or(&self, left: &T, right: &T) -> NumericResult<T> {
        Ok(*left | *right)
    }

    fn xor(&self, left: &T, right: &T) -> NumericResult<T> {
        Ok(*left ^ *right)
    }

    fn ones_complement(&self, value: &T) -> NumericResult<T> {
        Ok(!*value)
    }

    fn left_shift(&self, value: &T, shift: i32) -> NumericResult<T> {
        Ok(value.wrapping_shl(Self::shift_count(shift)))
    }

    fn right_shift(&self, value: &T, shift: i32) -> NumericResult<T> {
        Ok(value.wrapping_shr(Self::shift_count(shift)))
    }

    fn floor(&self, value: &T) -> T {
        *value
    }

    fn ceiling(&self, value: &T) -> T {
        *value
    }

    fn truncate(&self, value: &T) -> T {
        *value
    }

    fn round(&self, value: &T, digits: i32, _mode: MidpointRounding) -> NumericResult<T> {
        if digits < 0 {
            return Err(NumericError::not_supported("round", T::KIND));
        }
        Ok(*value)
    }

    fn is_even(&self, value: &T) -> bool {
        (*value & T::one()).is_zero()
    }

    fn is_odd(&self, value: &T) -> bool {
        !self.is_even(value)
    }

    fn is_power_of_two(&self, value: &T) -> bool {
        *value > T::zero() && value.count_ones() == 1
    }

    fn sign(&self, value: &T) -> NumericResult<i32> {
        Ok(match value.cmp(&T::zero()) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        })
    }

    fn abs(&self, value: &T) -> NumericResult<T> {
        if PrimitiveInt::is_negative(*value) {
            CheckedNeg::checked_neg(value).ok_or_else(|| NumericError::overflow("abs"))
        } else {
            Ok(*value)
        }
    }

    fn to_value(&self, value: &T) -> NumericValue {
        (*value).into()
    }

    fn from_value(&self, value: &NumericValue) -> NumericResult<T> {
        T::from_numeric(value)
    }

    fn parse(
        &self,
        text: &str,
        styles: Option<NumberStyles>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<T> {
        Ok(parse_int::<T>(text, styles, format)?)
    }

    fn format(
        &self,
        value: &T,
        spec: Option<&str>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<String> {
        Ok(format_int(*value, spec, format)?)
    }

    fn hash_value(&self, value: &T, mut state: &mut dyn Hasher) {
        value.hash(&mut state);
    }
}
