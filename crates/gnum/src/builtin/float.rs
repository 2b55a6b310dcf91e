//! Binary floating-point kinds.
//!
//! Arithmetic is plain IEEE-754. For the total order used by `compare`,
//! `equals` and hashing, NaN equals NaN and sorts below everything, and
//! `-0.0` equals `0.0`. The ordering predicates stay IEEE, so any
//! comparison with NaN is false.

use std::cmp::Ordering;
use std::hash::Hasher;
use std::marker::PhantomData;

use gnum_text::{format_float, parse_float, NumberFormat, NumberStyles, PrimitiveFloat};

use crate::contract::NumericOps;
use crate::error::{NumericError, NumericResult};
use crate::kind::NumericKind;
use crate::rounding::MidpointRounding;
use crate::value::NumericValue;

/// A primitive float the generic float operations cover.
pub trait FixedFloat: PrimitiveFloat + Send + Sync + Into<NumericValue> {
    const KIND: NumericKind;
    /// Most fractional digits `round` accepts.
    const ROUND_DIGITS: i32;
    /// Magnitude from which every value is an integer.
    const INTEGRAL_BOUND: Self;
    const TEN: Self;

    fn from_numeric(value: &NumericValue) -> NumericResult<Self>;

    /// Bit pattern with every NaN and both zeros collapsed.
    fn canonical_bits(self) -> u64;
}

impl FixedFloat for f32 {
    const KIND: NumericKind = NumericKind::F32;
    const ROUND_DIGITS: i32 = 6;
    const INTEGRAL_BOUND: Self = 1e7;
    const TEN: Self = 10.0;

    fn from_numeric(value: &NumericValue) -> NumericResult<Self> {
        value.to_f32()
    }

    fn canonical_bits(self) -> u64 {
        if self.is_nan() {
            u64::from(f32::NAN.to_bits())
        } else if self == 0.0 {
            0
        } else {
            u64::from(self.to_bits())
        }
    }
}

impl FixedFloat for f64 {
    const KIND: NumericKind = NumericKind::F64;
    const ROUND_DIGITS: i32 = 15;
    const INTEGRAL_BOUND: Self = 1e16;
    const TEN: Self = 10.0;

    fn from_numeric(value: &NumericValue) -> NumericResult<Self> {
        value.to_f64()
    }

    fn canonical_bits(self) -> u64 {
        if self.is_nan() {
            f64::NAN.to_bits()
        } else if self == 0.0 {
            0
        } else {
            self.to_bits()
        }
    }
}

/// Operations for `f32` or `f64`.
pub struct FloatOps<T>(PhantomData<fn() -> T>);

impl<T> FloatOps<T> {
    pub const fn new() -> Self {
        FloatOps(PhantomData)
    }
}

impl<T> Default for FloatOps<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FixedFloat> FloatOps<T> {
    #[cold]
    fn no_bits(operation: &'static str) -> NumericError {
        NumericError::not_supported(operation, T::KIND)
    }

    fn is_integer(value: T) -> bool {
        value.is_finite() && value.fract() == T::zero()
    }
}

impl<T: FixedFloat> NumericOps<T> for FloatOps<T> {
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
        Ok(-T::one())
    }

    fn min_value(&self) -> NumericResult<T> {
        Ok(T::min_value())
    }

    fn max_value(&self) -> NumericResult<T> {
        Ok(T::max_value())
    }

    fn add(&self, left: &T, right: &T) -> NumericResult<T> {
        Ok(*left + *right)
    }

    fn subtract(&self, left: &T, right: &T) -> NumericResult<T> {
        Ok(*left - *right)
    }

    fn multiply(&self, left: &T, right: &T) -> NumericResult<T> {
        Ok(*left * *right)
    }

    fn divide(&self, left: &T, right: &T) -> NumericResult<T> {
        Ok(*left / *right)
    }

    fn remainder(&self, left: &T, right: &T) -> NumericResult<T> {
        Ok(*left % *right)
    }

    fn negate(&self, value: &T) -> NumericResult<T> {
        Ok(-*value)
    }

    fn equals(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Equal
    }

    fn compare(&self, left: &T, right: &T) -> Ordering {
        match (left.is_nan(), right.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => left.partial_cmp(right).unwrap_or(Ordering::Equal),
        }
    }

    fn less_than(&self, left: &T, right: &T) -> bool {
        left < right
    }

    fn less_than_or_equal(&self, left: &T, right: &T) -> bool {
        left <= right
    }

    fn greater_than(&self, left: &T, right: &T) -> bool {
        left > right
    }

    fn greater_than_or_equal(&self, left: &T, right: &T) -> bool {
        left >= right
    }

    fn bitwise_and(&self, _left: &T, _right: &T) -> NumericResult<T> {
        Err(Self::no_bits("bitwise_and"))
    }

    fn bitwise_or(&self, _left: &T, _right: &T) -> NumericResult<T> {
        Err(Self::no_bits("bitwise_or"))
    }

    fn xor(&self, _left: &T, _right: &T) -> NumericResult<T> {
        Err(Self::no_bits("xor"))
    }

    fn ones_complement(&self, _value: &T) -> NumericResult<T> {
        Err(Self::no_bits("ones_complement"))
    }

    fn left_shift(&self, _value: &T, _shift: i32) -> NumericResult<T> {
        Err(Self::no_bits("left_shift"))
    }

    fn right_shift(&self, _value: &T, _shift: i32) -> NumericResult<T> {
        Err(Self::no_bits("right_shift"))
    }

    fn floor(&self, value: &T) -> T {
        value.floor()
    }

    fn ceiling(&self, value: &T) -> T {
        value.ceil()
    }

    fn truncate(&self, value: &T) -> T {
        value.trunc()
    }

    fn round(&self, value: &T, digits: i32, mode: MidpointRounding) -> NumericResult<T> {
        if !(0..=T::ROUND_DIGITS).contains(&digits) {
            return Err(NumericError::not_supported("round", T::KIND));
        }
        let value = *value;
        if !value.is_finite() || value.abs() >= T::INTEGRAL_BOUND {
            return Ok(value);
        }
        if digits == 0 {
            return Ok(mode.apply(value));
        }
        let scale = T::TEN.powi(digits);
        Ok(mode.apply(value * scale) / scale)
    }

    fn is_even(&self, value: &T) -> bool {
        let two = T::one() + T::one();
        Self::is_integer(*value) && (*value / two).fract() == T::zero()
    }

    fn is_odd(&self, value: &T) -> bool {
        Self::is_integer(*value) && !self.is_even(value)
    }

    fn is_power_of_two(&self, value: &T) -> bool {
        if !value.is_finite() || *value <= T::zero() {
            return false;
        }
        let (mantissa, _, _) = value.integer_decode();
        mantissa.is_power_of_two()
    }

    fn sign(&self, value: &T) -> NumericResult<i32> {
        if value.is_nan() {
            return Err(NumericError::invalid_argument("sign of NaN is undefined"));
        }
        Ok(if *value > T::zero() {
            1
        } else if *value < T::zero() {
            -1
        } else {
            0
        })
    }

    fn abs(&self, value: &T) -> NumericResult<T> {
        Ok(value.abs())
    }

    fn min<'a>(&self, left: &'a T, right: &'a T) -> &'a T {
        if left.is_nan() {
            left
        } else if right.is_nan() || right < left {
            right
        } else if left == right && right.is_sign_negative() {
            right
        } else {
            left
        }
    }

    fn max<'a>(&self, left: &'a T, right: &'a T) -> &'a T {
        if left.is_nan() {
            left
        } else if right.is_nan() || right > left {
            right
        } else if left == right && left.is_sign_negative() {
            right
        } else {
            left
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
        Ok(parse_float::<T>(text, styles, format)?)
    }

    fn format(
        &self,
        value: &T,
        spec: Option<&str>,
        format: Option<&NumberFormat>,
    ) -> NumericResult<String> {
        Ok(format_float(*value, spec, format)?)
    }

    fn hash_value(&self, value: &T, state: &mut dyn Hasher) {
        state.write_u64(value.canonical_bits());
    }
}
