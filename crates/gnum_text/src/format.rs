//! Standard format strings for every built-in kind.
//!
//! A format string is one letter with an optional precision:
//!
//! | spec | meaning                                 | kinds          |
//! |------|-----------------------------------------|----------------|
//! | `G`  | shortest round-trip text (also `R`)     | all            |
//! | `D`n | integer digits, zero-padded to n        | integral       |
//! | `X`n | hex bit pattern, padded to n (`x` lower)| integral       |
//! | `F`n | fixed point, n decimals (default 2)     | all            |
//! | `N`n | like `F` with group separators          | all            |
//! | `E`n | scientific, n decimals (default 6)      | all            |
//!
//! Anything else is `ParseError::UnsupportedFormat`.

use num_bigint::{BigInt, Sign};
use rust_decimal::Decimal;

use crate::digits::DigitString;
use crate::error::ParseError;
use crate::info::NumberFormat;
use crate::primitive::{PrimitiveFloat, PrimitiveInt};

const DEFAULT_FIXED_DECIMALS: usize = 2;
const DEFAULT_EXPONENT_DECIMALS: usize = 6;
const EXPONENT_DIGITS: usize = 3;

/// Largest precision accepted in a format string.
const MAX_PRECISION: usize = 999;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FormatKind {
    General,
    Decimal,
    Hex { upper: bool },
    Fixed,
    Number,
    Exponent { upper: bool },
}

/// A parsed format string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    pub kind: FormatKind,
    pub precision: Option<usize>,
}

impl FormatSpec {
    pub const GENERAL: FormatSpec = FormatSpec {
        kind: FormatKind::General,
        precision: None,
    };

    /// Parse a format string. `None` and `""` mean general.
    pub fn parse(spec: Option<&str>) -> Result<FormatSpec, ParseError> {
        let text = match spec {
            None => return Ok(Self::GENERAL),
            Some(text) if text.is_empty() => return Ok(Self::GENERAL),
            Some(text) => text,
        };
        let unsupported = || ParseError::UnsupportedFormat {
            spec: text.to_owned(),
        };

        let mut chars = text.chars();
        let letter = chars.next().ok_or_else(unsupported)?;
        let rest = chars.as_str();

        let kind = match letter {
            'G' | 'g' | 'R' | 'r' => {
                return if rest.is_empty() {
                    Ok(Self::GENERAL)
                } else {
                    Err(unsupported())
                };
            }
            'D' | 'd' => FormatKind::Decimal,
            'X' => FormatKind::Hex { upper: true },
            'x' => FormatKind::Hex { upper: false },
            'F' | 'f' => FormatKind::Fixed,
            'N' | 'n' => FormatKind::Number,
            'E' => FormatKind::Exponent { upper: true },
            'e' => FormatKind::Exponent { upper: false },
            _ => return Err(unsupported()),
        };

        let precision = if rest.is_empty() {
            None
        } else if rest.bytes().all(|b| b.is_ascii_digit()) {
            let value: usize = rest.parse().map_err(|_| unsupported())?;
            if value > MAX_PRECISION {
                return Err(unsupported());
            }
            Some(value)
        } else {
            return Err(unsupported());
        };

        Ok(FormatSpec { kind, precision })
    }
}

/// F, N and E rendering shared by every kind once it has a `DigitString`.
fn render_digits(
    mut digits: DigitString,
    spec: FormatSpec,
    format: &NumberFormat,
) -> Option<String> {
    match spec.kind {
        FormatKind::Fixed | FormatKind::Number => {
            let decimals = spec.precision.unwrap_or(DEFAULT_FIXED_DECIMALS);
            digits.round_to_decimals(decimals);
            Some(digits.fixed(decimals, spec.kind == FormatKind::Number, format))
        }
        FormatKind::Exponent { upper } => {
            let decimals = spec.precision.unwrap_or(DEFAULT_EXPONENT_DECIMALS);
            digits.round_to_significant(decimals + 1);
            let letter = if upper { 'E' } else { 'e' };
            Some(digits.scientific(decimals, letter, EXPONENT_DIGITS, format))
        }
        FormatKind::General | FormatKind::Decimal | FormatKind::Hex { .. } => None,
    }
}

fn pad_left(out: &mut String, len: usize, width: usize, fill: char) {
    for _ in len..width {
        out.push(fill);
    }
}

/// Format a fixed-width integer.
pub fn format_int<T: PrimitiveInt>(
    value: T,
    spec: Option<&str>,
    format: Option<&NumberFormat>,
) -> Result<String, ParseError> {
    let parsed = FormatSpec::parse(spec)?;
    let format = NumberFormat::or_invariant(format);
    let magnitude = value.magnitude().to_string();

    match parsed.kind {
        FormatKind::General | FormatKind::Decimal => {
            let width = parsed.precision.unwrap_or(0);
            let mut out = String::with_capacity(magnitude.len().max(width) + 1);
            if value.is_negative() {
                out.push_str(&format.negative_sign);
            }
            pad_left(&mut out, magnitude.len(), width, '0');
            out.push_str(&magnitude);
            Ok(out)
        }
        FormatKind::Hex { upper } => {
            let digits = if upper {
                format!("{value:X}")
            } else {
                format!("{value:x}")
            };
            let mut out = String::with_capacity(digits.len());
            pad_left(&mut out, digits.len(), parsed.precision.unwrap_or(0), '0');
            out.push_str(&digits);
            Ok(out)
        }
        FormatKind::Fixed | FormatKind::Number | FormatKind::Exponent { .. } => {
            let digits = DigitString::from_integer(value.is_negative(), &magnitude);
            render_digits(digits, parsed, format).ok_or_else(|| unsupported(spec))
        }
    }
}

fn unsupported(spec: Option<&str>) -> ParseError {
    ParseError::UnsupportedFormat {
        spec: spec.unwrap_or_default().to_owned(),
    }
}

/// Format a binary float.
///
/// NaN and the infinities render as the culture's symbols under every
/// format.
pub fn format_float<T: PrimitiveFloat>(
    value: T,
    spec: Option<&str>,
    format: Option<&NumberFormat>,
) -> Result<String, ParseError> {
    let parsed = FormatSpec::parse(spec)?;
    if matches!(parsed.kind, FormatKind::Decimal | FormatKind::Hex { .. }) {
        return Err(unsupported(spec));
    }
    let format = NumberFormat::or_invariant(format);

    if value.is_nan() {
        return Ok(format.nan_symbol.clone());
    }
    if value.is_infinite() {
        return Ok(if value.is_sign_negative() {
            format.negative_infinity_symbol.clone()
        } else {
            format.positive_infinity_symbol.clone()
        });
    }

    // `{:e}` is the shortest text that reads back as the same value.
    let digits = DigitString::from_exponential(&format!("{value:e}"));
    match parsed.kind {
        FormatKind::General => Ok(digits.general(i64::from(T::SCIENTIFIC_THRESHOLD), format)),
        _ => render_digits(digits, parsed, format).ok_or_else(|| unsupported(spec)),
    }
}

/// Format a decimal.
///
/// The general format keeps the value's scale, so `1.50` stays `1.50`.
pub fn format_decimal(
    value: &Decimal,
    spec: Option<&str>,
    format: Option<&NumberFormat>,
) -> Result<String, ParseError> {
    let parsed = FormatSpec::parse(spec)?;
    if matches!(parsed.kind, FormatKind::Decimal | FormatKind::Hex { .. }) {
        return Err(unsupported(spec));
    }
    let format = NumberFormat::or_invariant(format);
    let negative = value.is_sign_negative() && !value.is_zero();
    let magnitude = value.abs().to_string();

    if parsed.kind == FormatKind::General {
        let (integral, fractional) = magnitude.split_once('.').unwrap_or((&magnitude, ""));
        let mut out = String::with_capacity(magnitude.len() + 1);
        if negative {
            out.push_str(&format.negative_sign);
        }
        out.push_str(integral);
        if !fractional.is_empty() {
            out.push_str(&format.decimal_separator);
            out.push_str(fractional);
        }
        return Ok(out);
    }

    let digits = DigitString::from_positional(negative, &magnitude);
    render_digits(digits, parsed, format).ok_or_else(|| unsupported(spec))
}

/// Format an arbitrary-precision integer.
///
/// Hex output is the shortest two's complement pattern whose leading digit
/// carries the sign: `255` is `0FF`, `-1` is `F`, `-256` is `F00`.
pub fn format_big_int(
    value: &BigInt,
    spec: Option<&str>,
    format: Option<&NumberFormat>,
) -> Result<String, ParseError> {
    let parsed = FormatSpec::parse(spec)?;
    let format = NumberFormat::or_invariant(format);
    let negative = value.sign() == Sign::Minus;
    let magnitude = value.magnitude().to_str_radix(10);

    match parsed.kind {
        FormatKind::General | FormatKind::Decimal => {
            let width = parsed.precision.unwrap_or(0);
            let mut out = String::with_capacity(magnitude.len().max(width) + 1);
            if negative {
                out.push_str(&format.negative_sign);
            }
            pad_left(&mut out, magnitude.len(), width, '0');
            out.push_str(&magnitude);
            Ok(out)
        }
        FormatKind::Hex { upper } => {
            let digits = big_int_hex(value);
            let fill = if negative { 'f' } else { '0' };
            let mut out = String::with_capacity(digits.len());
            pad_left(&mut out, digits.len(), parsed.precision.unwrap_or(0), fill);
            out.push_str(&digits);
            Ok(if upper { out.to_ascii_uppercase() } else { out })
        }
        FormatKind::Fixed | FormatKind::Number | FormatKind::Exponent { .. } => {
            let digits = DigitString::from_integer(negative, &magnitude);
            render_digits(digits, parsed, format).ok_or_else(|| unsupported(spec))
        }
    }
}

fn is_high_nibble(c: char) -> bool {
    c.to_digit(16).is_some_and(|d| d >= 8)
}

/// Lowercase two's complement hex with the minimal sign-carrying width.
fn big_int_hex(value: &BigInt) -> String {
    if value.sign() != Sign::Minus {
        let digits = value.magnitude().to_str_radix(16);
        return if digits.chars().next().is_some_and(is_high_nibble) {
            format!("0{digits}")
        } else {
            digits
        };
    }

    let mut digits = String::new();
    for byte in value.to_signed_bytes_be() {
        digits.push_str(&format!("{byte:02x}"));
    }
    // Drop redundant sign digits while the next one still reads as negative.
    let mut start = 0;
    let bytes = digits.as_bytes();
    while start + 1 < bytes.len()
        && bytes[start] == b'f'
        && is_high_nibble(char::from(bytes[start + 1]))
    {
        start += 1;
    }
    digits[start..].to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
