//! The 96-bit decimal kind.
//!
//! Arithmetic is checked: overflow and division by zero are errors, never
//! wrapped or saturated. Bitwise operations are not defined.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use gnum_text::{format_decimal, parse_decimal, NumberFormat, NumberStyles};
use rust_decimal::Decimal;

use crate::contract::NumericOps;
use crate::error::{NumericError, NumericResult};
use crate::kind::NumericKind;
use crate::rounding::MidpointRounding;
use crate::value::NumericValue;

/// Most fractional digits a decimal holds.
const MAX_SCALE: i32 = 28;

#[derive(Copy, Clone, Debug, Default)]
pub struct DecimalOps;

#[cold]
fn no_bits(operation: &'static str) -> NumericError {
    NumericError::not_supported(operation, NumericKind::Decimal)
}

fn is_integer(value: &Decimal) -> bool {
    value.fract().is_zero()
}

impl NumericOps<Decimal> for DecimalOps {
    fn kind(&self) -> NumericKind {
        NumericKind::Decimal
    }

    fn zero(&self) -> Decimal {
        Decimal::ZERO
    }

    fn one(&self) -> Decimal {
        Decimal::ONE
    }

    fn minus_one(&self) -> NumericResult<Decimal> {
        Ok(Decimal::NEGATIVE_ONE)
    }

    fn min_value(&self) -> NumericResult<Decimal> {
        Ok(Decimal::MIN)
    }

    fn max_value(&self) -> NumericResult<Decimal> {
        Ok(Decimal::MAX)
    }

    fn add(&self, left: &Decimal, right: &Decimal) -> NumericResult<Decimal> {
        left.checked_add(*right).ok_or_else(|| NumericError::overflow("add"))
    }

    fn subtract(&self, left: &Decimal, right: &Decimal) -> NumericResult<Decimal> {
        left.checked_sub(*right).ok_or_else(|| NumericError::overflow("subtract"))
    }

    fn multiply(&self, left: &Decimal, right: &Decimal) -> NumericResult<Decimal> {
        left.checked_mul(*right).ok_or_else(|| NumericError::overflow("multiply"))
    }

    fn divide(&self, left: &Decimal, right: &Decimal) -> NumericResult<Decimal> {
        if right.is_zero() {
            return Err(NumericError::DivideByZero);
        }
        left.checked_div(*right).ok_or_else(|| NumericError::overflow("divide"))
    }

    fn remainder(&self, left: &Decimal, right: &Decimal) -> NumericResult<Decimal> {
        if right.is_zero() {
            return Err(NumericError::DivideByZero);
        }
        left.checked_rem(*right).ok_or_else(|| NumericError::overflow("remainder"))
    }

    fn negate(&self, value: &Decimal) -> NumericResult<Decimal> {
        Ok(-*value)
    }

    fn equals(&self, left: &Decimal, right: &Decimal) -> bool {
        left == right
    }

    fn compare(&self, left: &Decimal, right: &Decimal) -> Ordering {
        left.cmp(right)
    }

    fn bitwise_and(&self, _left: &Decimal, _right: &Decimal) -> NumericResult<Decimal> {
        Err(no_bits("bitwise_and"))
    }

    fn bitwise_or(&self, _left: &Decimal, _right: &Decimal) -> NumericResult<Decimal> {
        Err(no_bits("bitwise_or"))
    }

    fn xor(&self, _left: &Decimal, _right: &Decimal) -> NumericResult<Decimal> {
        Err(no_bits("xor"))
    }

    fn ones_complement(&self, _value: &Decimal) -> NumericResult<Decimal> {
        Err(no_bits("ones_complement"))
    }

    fn left_shift(&self, _value: &Decimal, _shift: i32) -> NumericResult<Decimal> {
        Err(no_bits("left_shift"))
    }

    fn right_shift(&self, _value: &Decimal, _shift: i32) -> NumericResult<Decimal> {
        Err(no_bits("right_shift"))
    }

    fn floor(&self, value: &Decimal) -> Decimal {
        value.floor()
    }

    fn ceiling(&self, value: &Decimal) -> Decimal {
        value.ceil()
    }

    fn truncate(&self, value: &Decimal) -> Decimal {
        value.trunc()
    }

    fn round(
        &self,
        value: &Decimal,
        digits: i32,
        mode: MidpointRounding,
    ) -> NumericResult<Decimal> {
        if !(0..=MAX_SCALE).contains(&digits) {
            return Err(NumericError::not_supported("round", NumericKind::Decimal));
        }
        Ok(value.round_dp_with_strategy(digits.unsigned_abs(), mode.strategy()))
    }

    fn is_even(&self, value: &Decimal) -> bool {
        is_integer(value) && (value % Decimal::TWO).is_zero()
    }

    fn is_odd(&self, value: &Decimal) -> bool {
        is_integer(value) && !self.is_even(value)
    }

    fn is_power_of_two(&self, value: &Decimal) -> bool {
        if value.is_sign_negative() || !is_integer(value) {
            return false;
        }
        // Integral after normalizing means scale zero, so the mantissa is
        // the integer itself.
        let normalized = value.normalize();
        normalized.scale() == 0 && normalized.mantissa().unsigned_abs().is_power_of_two()
    }

    fn sign(&self, value: &Decimal) -> NumericResult<i32> {
        Ok(if value.is_zero() {
            0
        } else if value.is_sign_negative() {
            -1
        } else {
            1
        })
    }

    fn abs(&self, value: &Decimal) -> NumericResult<Decimal> {
        Ok(value.abs())
    }

    fn to_value(&self, value: &Decimal) -> NumericValue {
        NumericValue::Decimal(*value)
    }

    fn from_value(&self, value: &NumericValue) -> NumericResult<Decimal> {
        value.to_decimal()
    }

    fn parse(
        &self,
        text: &str,
        styles: Option<NumberStyles>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<Decimal> {
        Ok(parse_decimal(text, styles, format)?)
    }

    fn format(
        &self,
        value: &Decimal,
        spec: Option<&str>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<String> {
        Ok(format_decimal(value, spec, format)?)
    }

    fn hash_value(&self, value: &Decimal, mut state: &mut dyn Hasher) {
        // `1.0` and `1.00` are equal, so hash the normalized form.
        value.normalize().hash(&mut state);
    }
}
