//! Arbitrary-precision integers.
//!
//! Unbounded, so `min_value`/`max_value` are unsupported and arithmetic
//! never overflows. Bitwise operations use the infinite two's complement
//! view: `!x == -x - 1`. Right shifts round toward negative infinity.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use gnum_text::{format_big_int, parse_big_int, NumberFormat, NumberStyles};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};

use crate::contract::NumericOps;
use crate::error::{NumericError, NumericResult};
use crate::kind::NumericKind;
use crate::rounding::MidpointRounding;
use crate::value::NumericValue;

#[derive(Copy, Clone, Debug, Default)]
pub struct BigIntOps;

fn shift_left(value: &BigInt, shift: i32) -> BigInt {
    if shift >= 0 {
        value << shift.unsigned_abs()
    } else {
        value >> shift.unsigned_abs()
    }
}

impl NumericOps<BigInt> for BigIntOps {
    fn kind(&self) -> NumericKind {
        NumericKind::BigInt
    }

    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn one(&self) -> BigInt {
        BigInt::one()
    }

    fn minus_one(&self) -> NumericResult<BigInt> {
        Ok(-BigInt::one())
    }

    fn min_value(&self) -> NumericResult<BigInt> {
        Err(NumericError::not_supported("min_value", NumericKind::BigInt))
    }

    fn max_value(&self) -> NumericResult<BigInt> {
        Err(NumericError::not_supported("max_value", NumericKind::BigInt))
    }

    fn add(&self, left: &BigInt, right: &BigInt) -> NumericResult<BigInt> {
        Ok(left + right)
    }

    fn subtract(&self, left: &BigInt, right: &BigInt) -> NumericResult<BigInt> {
        Ok(left - right)
    }

    fn multiply(&self, left: &BigInt, right: &BigInt) -> NumericResult<BigInt> {
        Ok(left * right)
    }

    fn divide(&self, left: &BigInt, right: &BigInt) -> NumericResult<BigInt> {
        if right.is_zero() {
            return Err(NumericError::DivideByZero);
        }
        Ok(left / right)
    }

    fn remainder(&self, left: &BigInt, right: &BigInt) -> NumericResult<BigInt> {
        if right.is_zero() {
            return Err(NumericError::DivideByZero);
        }
        Ok(left % right)
    }

    fn negate(&self, value: &BigInt) -> NumericResult<BigInt> {
        Ok(-value)
    }

    fn equals(&self, left: &BigInt, right: &BigInt) -> bool {
        left == right
    }

    fn compare(&self, left: &BigInt, right: &BigInt) -> Ordering {
        left.cmp(right)
    }

    fn bitwise_and(&self, left: &BigInt, right: &BigInt) -> NumericResult<BigInt> {
        Ok(left & right)
    }

    fn bitwise_or(&self, left: &BigInt, right: &BigInt) -> NumericResult<BigInt> {
        Ok(left | right)
    }

    fn xor(&self, left: &BigInt, right: &BigInt) -> NumericResult<BigInt> {
        Ok(left ^ right)
    }

    fn ones_complement(&self, value: &BigInt) -> NumericResult<BigInt> {
        Ok(!value)
    }

    /// A negative count shifts right.
    fn left_shift(&self, value: &BigInt, shift: i32) -> NumericResult<BigInt> {
        Ok(shift_left(value, shift))
    }

    /// A negative count shifts left.
    fn right_shift(&self, value: &BigInt, shift: i32) -> NumericResult<BigInt> {
        Ok(shift_left(value, shift.saturating_neg()))
    }

    fn floor(&self, value: &BigInt) -> BigInt {
        value.clone()
    }

    fn ceiling(&self, value: &BigInt) -> BigInt {
        value.clone()
    }

    fn truncate(&self, value: &BigInt) -> BigInt {
        value.clone()
    }

    fn round(
        &self,
        value: &BigInt,
        digits: i32,
        _mode: MidpointRounding,
    ) -> NumericResult<BigInt> {
        if digits < 0 {
            return Err(NumericError::not_supported("round", NumericKind::BigInt));
        }
        Ok(value.clone())
    }

    fn is_even(&self, value: &BigInt) -> bool {
        !value.bit(0)
    }

    fn is_odd(&self, value: &BigInt) -> bool {
        value.bit(0)
    }

    fn is_power_of_two(&self, value: &BigInt) -> bool {
        value.sign() == Sign::Plus && value.magnitude().count_ones() == 1
    }

    fn sign(&self, value: &BigInt) -> NumericResult<i32> {
        Ok(match value.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        })
    }

    fn abs(&self, value: &BigInt) -> NumericResult<BigInt> {
        Ok(Signed::abs(value))
    }

    fn to_value(&self, value: &BigInt) -> NumericValue {
        NumericValue::BigInt(value.clone())
    }

    fn from_value(&self, value: &NumericValue) -> NumericResult<BigInt> {
        value.to_big_int()
    }

    fn parse(
        &self,
        text: &str,
        styles: Option<NumberStyles>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<BigInt> {
        Ok(parse_big_int(text, styles, format)?)
    }

    fn format(
        &self,
        value: &BigInt,
        spec: Option<&str>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<String> {
        Ok(format_big_int(value, spec, format)?)
    }

    fn hash_value(&self, value: &BigInt, mut state: &mut dyn Hasher) {
        value.hash(&mut state);
    }
}

#[cfg(test)]
mod tests;
