//! Per-kind parsing on top of the shared scanner.
//!
//! Each parser applies the kind's default style when none is given:
//! integral kinds `INTEGER`, binary floats `FLOAT | ALLOW_THOUSANDS`,
//! decimal `NUMBER`.

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::One;
use rust_decimal::Decimal;

use crate::error::ParseError;
use crate::info::NumberFormat;
use crate::primitive::{PrimitiveFloat, PrimitiveInt};
use crate::scan::{check_styles, scan_decimal, scan_hex, trim, ScannedNumber};
use crate::styles::NumberStyles;

/// Largest power of ten that can still be below `Decimal::MAX`'s magnitude.
const DECIMAL_MAX_INTEGRAL_DIGITS: i64 = 29;

/// Digits the decimal kind can carry after the point.
const DECIMAL_MAX_SCALE: i64 = 28;

/// Parse a fixed-width integer.
///
/// With `ALLOW_HEX_SPECIFIER` the digits are the two's complement bit
/// pattern of `T`: `"FFFFFFFF"` parses as `-1i32`. More significant hex
/// digits than `T` holds is `Overflow`.
pub fn parse_int<T: PrimitiveInt>(
    text: &str,
    styles: Option<NumberStyles>,
    format: Option<&NumberFormat>,
) -> Result<T, ParseError> {
    let styles = styles.unwrap_or(NumberStyles::INTEGRAL_DEFAULT);
    if styles.is_hex() {
        let digits = scan_hex(text, styles)?;
        return hex_bits(digits, T::BITS).map(T::from_bits);
    }
    let number = scan_decimal(text, styles, NumberFormat::or_invariant(format))?;
    let magnitude = decimal_magnitude(&number.integer_digits()?)?;
    T::from_magnitude(number.negative, magnitude).ok_or(ParseError::Overflow)
}

fn hex_bits(digits: &str, bits: u32) -> Result<u128, ParseError> {
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(0);
    }
    let capacity = usize::try_from(bits / 4).map_err(|_| ParseError::Overflow)?;
    if significant.len() > capacity {
        return Err(ParseError::Overflow);
    }
    u128::from_str_radix(significant, 16).map_err(|_| ParseError::Overflow)
}

fn decimal_magnitude(digits: &str) -> Result<u128, ParseError> {
    digits.bytes().try_fold(0u128, |acc, b| {
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(u128::from(b - b'0')))
            .ok_or(ParseError::Overflow)
    })
}

fn reject_hex(styles: NumberStyles) -> Result<(), ParseError> {
    check_styles(styles)?;
    if styles.is_hex() {
        return Err(ParseError::InvalidStyles {
            bits: styles.bits(),
        });
    }
    Ok(())
}

/// Parse a binary floating-point value.
///
/// The culture's NaN and infinity symbols are matched case-insensitively
/// before scanning. Magnitudes beyond the type's range parse as infinity.
pub fn parse_float<T: PrimitiveFloat>(
    text: &str,
    styles: Option<NumberStyles>,
    format: Option<&NumberFormat>,
) -> Result<T, ParseError> {
    let styles = styles.unwrap_or(NumberStyles::FLOAT_DEFAULT);
    reject_hex(styles)?;
    let format = NumberFormat::or_invariant(format);

    if let Some(special) = parse_special(trim(text, styles), format) {
        return Ok(special);
    }

    let number = scan_decimal(text, styles, format)?;
    number
        .float_literal()
        .parse::<T>()
        .map_err(|_| ParseError::Invalid { position: 0 })
}

fn parse_special<T: PrimitiveFloat>(text: &str, format: &NumberFormat) -> Option<T> {
    let matches = |symbol: &str| !symbol.is_empty() && text.eq_ignore_ascii_case(symbol);
    let signed = |sign: &str| {
        text.strip_prefix(sign)
            .filter(|_| !sign.is_empty())
            .is_some_and(|rest| rest.eq_ignore_ascii_case(&format.positive_infinity_symbol))
    };

    if matches(&format.nan_symbol) {
        Some(T::nan())
    } else if matches(&format.positive_infinity_symbol) || signed(&format.positive_sign) {
        Some(T::infinity())
    } else if matches(&format.negative_infinity_symbol) || signed(&format.negative_sign) {
        Some(T::neg_infinity())
    } else {
        None
    }
}

/// Parse a decimal value.
///
/// Digits beyond the 28th fractional place round; integral magnitudes past
/// the decimal range are `Overflow`.
pub fn parse_decimal(
    text: &str,
    styles: Option<NumberStyles>,
    format: Option<&NumberFormat>,
) -> Result<Decimal, ParseError> {
    let styles = styles.unwrap_or(NumberStyles::DECIMAL_DEFAULT);
    reject_hex(styles)?;
    let number = scan_decimal(text, styles, NumberFormat::or_invariant(format))?;
    match number.decimal_literal()? {
        Some(literal) => Decimal::from_str(&literal).map_err(|_| ParseError::Overflow),
        None => Ok(Decimal::ZERO),
    }
}

/// Parse an arbitrary-precision integer.
///
/// Hex digits whose leading digit is `8`-`F` are negative, as in two's
/// complement of the digit count: `"F"` is `-1`, `"0F"` is `15`.
pub fn parse_big_int(
    text: &str,
    styles: Option<NumberStyles>,
    format: Option<&NumberFormat>,
) -> Result<BigInt, ParseError> {
    let styles = styles.unwrap_or(NumberStyles::INTEGRAL_DEFAULT);
    if styles.is_hex() {
        let digits = scan_hex(text, styles)?;
        let value = BigInt::parse_bytes(digits.as_bytes(), 16)
            .ok_or(ParseError::Invalid { position: 0 })?;
        let sign_digit = digits
            .chars()
            .next()
            .and_then(|c| c.to_digit(16))
            .is_some_and(|d| d >= 8);
        return Ok(if sign_digit {
            value - (BigInt::one() << (4 * digits.len()))
        } else {
            value
        });
    }

    let number = scan_decimal(text, styles, NumberFormat::or_invariant(format))?;
    let digits = number.integer_digits()?;
    let magnitude =
        BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(ParseError::Invalid { position: 0 })?;
    Ok(if number.negative {
        -magnitude
    } else {
        magnitude
    })
}

impl ScannedNumber {
    /// Literal Rust's float parser accepts: `-int.frac e exp`.
    fn float_literal(&self) -> String {
        let mut literal =
            String::with_capacity(self.integral.len() + self.fractional.len() + 12);
        if self.negative {
            literal.push('-');
        }
        if self.integral.is_empty() {
            literal.push('0');
        } else {
            literal.push_str(&self.integral);
        }
        if !self.fractional.is_empty() {
            literal.push('.');
            literal.push_str(&self.fractional);
        }
        if self.exponent != 0 {
            literal.push('e');
            literal.push_str(&self.exponent.to_string());
        }
        literal
    }

    /// Positional literal for the decimal parser with the exponent applied.
    ///
    /// `None` means the value rounds to zero at decimal's scale.
    fn decimal_literal(&self) -> Result<Option<String>, ParseError> {
        let sign = if self.negative { "-" } else { "" };
        let integral = if self.integral.is_empty() {
            "0"
        } else {
            self.integral.as_str()
        };

        if self.exponent == 0 {
            if self.integral.trim_start_matches('0').len() > 29 {
                return Err(ParseError::Overflow);
            }
            return Ok(Some(if self.fractional.is_empty() {
                format!("{sign}{integral}")
            } else {
                format!("{sign}{integral}.{}", self.fractional)
            }));
        }

        let mut digits = String::with_capacity(self.integral.len() + self.fractional.len());
        digits.push_str(&self.integral);
        digits.push_str(&self.fractional);
        let leading = digits.len() - digits.trim_start_matches('0').len();
        let digits = &digits[leading..];
        if digits.is_empty() {
            return Ok(None);
        }

        let integral_len = i64::try_from(self.integral.len()).map_err(|_| ParseError::Overflow)?;
        let leading = i64::try_from(leading).map_err(|_| ParseError::Overflow)?;
        let point = integral_len - leading + self.exponent;

        if point > DECIMAL_MAX_INTEGRAL_DIGITS {
            return Err(ParseError::Overflow);
        }
        if point < -DECIMAL_MAX_SCALE {
            return Ok(None);
        }

        let len = i64::try_from(digits.len()).map_err(|_| ParseError::Overflow)?;
        let literal = if point <= 0 {
            let zeros = usize::try_from(-point).unwrap_or(0);
            format!("{sign}0.{}{digits}", "0".repeat(zeros))
        } else if point >= len {
            let zeros = usize::try_from(point - len).unwrap_or(0);
            format!("{sign}{digits}{}", "0".repeat(zeros))
        } else {
            let split = usize::try_from(point).unwrap_or(0);
            let (head, tail) = digits.split_at(split);
            format!("{sign}{head}.{tail}")
        };
        Ok(Some(literal))
    }
}
