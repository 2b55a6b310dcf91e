//! Dynamic numeric value used as the conversion hub between kinds.
//!
//! Every operation set can lower a value to `NumericValue` and lift one back,
//! so converting between any two registered types takes two steps instead of
//! one conversion per pair of kinds.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{NumericError, NumericResult};
use crate::kind::NumericKind;

/// A value of any built-in kind, or the absent payload of an optional kind.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericValue {
    /// `None` of an optional kind.
    Absent,
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    BigInt(BigInt),
}

macro_rules! value_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for NumericValue {
                #[inline]
                fn from(value: $t) -> Self {
                    NumericValue::$variant(value)
                }
            }
        )*
    };
}

value_from! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
    BigInt => BigInt,
}

fn absent() -> NumericError {
    NumericError::invalid_argument("absent value cannot be converted to a non-optional kind")
}

/// Lossy numeric views share one shape: convert through `ToPrimitive` and
/// report `None` as overflow.
macro_rules! primitive_conversions {
    ($($method:ident -> $t:ty, truncate_decimal: $truncate:expr;)*) => {
        $(
            #[doc = concat!("Convert to `", stringify!($t), "`, `Overflow` when out of range.")]
            pub fn $method(&self) -> NumericResult<$t> {
                self.through_primitive(stringify!($method), $truncate, |p| p.$method())
            }
        )*
    };
}

impl NumericValue {
    /// Kind of the payload, `None` for `Absent`.
    pub fn kind(&self) -> Option<NumericKind> {
        Some(match self {
            NumericValue::Absent => return None,
            NumericValue::I8(_) => NumericKind::I8,
            NumericValue::I16(_) => NumericKind::I16,
            NumericValue::I32(_) => NumericKind::I32,
            NumericValue::I64(_) => NumericKind::I64,
            NumericValue::I128(_) => NumericKind::I128,
            NumericValue::Isize(_) => NumericKind::Isize,
            NumericValue::U8(_) => NumericKind::U8,
            NumericValue::U16(_) => NumericKind::U16,
            NumericValue::U32(_) => NumericKind::U32,
            NumericValue::U64(_) => NumericKind::U64,
            NumericValue::U128(_) => NumericKind::U128,
            NumericValue::Usize(_) => NumericKind::Usize,
            NumericValue::F32(_) => NumericKind::F32,
            NumericValue::F64(_) => NumericKind::F64,
            NumericValue::Decimal(_) => NumericKind::Decimal,
            NumericValue::BigInt(_) => NumericKind::BigInt,
        })
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, NumericValue::Absent)
    }

    fn through_primitive<R>(
        &self,
        operation: &'static str,
        truncate_decimal: bool,
        convert: impl FnOnce(&dyn ToPrimitive) -> Option<R>,
    ) -> NumericResult<R> {
        let converted = match self {
            NumericValue::Absent => return Err(absent()),
            NumericValue::I8(v) => convert(v),
            NumericValue::I16(v) => convert(v),
            NumericValue::I32(v) => convert(v),
            NumericValue::I64(v) => convert(v),
            NumericValue::I128(v) => convert(v),
            NumericValue::Isize(v) => convert(v),
            NumericValue::U8(v) => convert(v),
            NumericValue::U16(v) => convert(v),
            NumericValue::U32(v) => convert(v),
            NumericValue::U64(v) => convert(v),
            NumericValue::U128(v) => convert(v),
            NumericValue::Usize(v) => convert(v),
            NumericValue::F32(v) => convert(v),
            NumericValue::F64(v) => convert(v),
            NumericValue::Decimal(v) if truncate_decimal => convert(&v.trunc()),
            NumericValue::Decimal(v) => convert(v),
            NumericValue::BigInt(v) => convert(v),
        };
        converted.ok_or_else(|| NumericError::overflow(operation))
    }

    primitive_conversions! {
        to_i8 -> i8, truncate_decimal: true;
        to_i16 -> i16, truncate_decimal: true;
        to_i32 -> i32, truncate_decimal: true;
        to_i64 -> i64, truncate_decimal: true;
        to_i128 -> i128, truncate_decimal: true;
        to_isize -> isize, truncate_decimal: true;
        to_u8 -> u8, truncate_decimal: true;
        to_u16 -> u16, truncate_decimal: true;
        to_u32 -> u32, truncate_decimal: true;
        to_u64 -> u64, truncate_decimal: true;
        to_u128 -> u128, truncate_decimal: true;
        to_usize -> usize, truncate_decimal: true;
        to_f32 -> f32, truncate_decimal: false;
        to_f64 -> f64, truncate_decimal: false;
    }

    /// Convert to `Decimal`. Fractions of binary floats are kept as far as
    /// decimal precision allows; NaN, infinities and magnitudes past 96 bits
    /// fail with `Overflow`.
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        let overflow = || NumericError::overflow("to_decimal");
        match self {
            NumericValue::Absent => Err(absent()),
            NumericValue::Decimal(v) => Ok(*v),
            NumericValue::F32(v) => Decimal::from_f32(*v).ok_or_else(overflow),
            NumericValue::F64(v) => Decimal::from_f64(*v).ok_or_else(overflow),
            NumericValue::U128(v) => Decimal::from_u128(*v).ok_or_else(overflow),
            NumericValue::U64(_) | NumericValue::Usize(_) => {
                let wide = self.to_u128()?;
                Decimal::from_u128(wide).ok_or_else(overflow)
            }
            other => {
                let wide = other.to_i128().map_err(|_| overflow())?;
                Decimal::from_i128(wide).ok_or_else(overflow)
            }
        }
    }

    /// Convert to `BigInt`. Floats and decimals truncate toward zero; NaN
    /// and infinities fail with `Overflow`.
    pub fn to_big_int(&self) -> NumericResult<BigInt> {
        let overflow = || NumericError::overflow("to_big_int");
        match self {
            NumericValue::Absent => Err(absent()),
            NumericValue::I8(v) => Ok(BigInt::from(*v)),
            NumericValue::I16(v) => Ok(BigInt::from(*v)),
            NumericValue::I32(v) => Ok(BigInt::from(*v)),
            NumericValue::I64(v) => Ok(BigInt::from(*v)),
            NumericValue::I128(v) => Ok(BigInt::from(*v)),
            NumericValue::Isize(v) => Ok(BigInt::from(*v)),
            NumericValue::U8(v) => Ok(BigInt::from(*v)),
            NumericValue::U16(v) => Ok(BigInt::from(*v)),
            NumericValue::U32(v) => Ok(BigInt::from(*v)),
            NumericValue::U64(v) => Ok(BigInt::from(*v)),
            NumericValue::U128(v) => Ok(BigInt::from(*v)),
            NumericValue::Usize(v) => Ok(BigInt::from(*v)),
            NumericValue::F32(v) => BigInt::from_f32(*v).ok_or_else(overflow),
            NumericValue::F64(v) => BigInt::from_f64(*v).ok_or_else(overflow),
            NumericValue::Decimal(v) => v.trunc().to_i128().map(BigInt::from).ok_or_else(overflow),
            NumericValue::BigInt(v) => Ok(v.clone()),
        }
    }
}
