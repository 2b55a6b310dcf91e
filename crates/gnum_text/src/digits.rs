//! Decimal digit strings for the fixed-point and scientific formats.
//!
//! Every kind reduces its value to `0.d1d2d3... x 10^point` once, then the
//! same rounding and rendering code serves all of them. Rounding is half
//! away from zero, which is what the standard numeric formats use.

use crate::info::NumberFormat;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DigitString {
    negative: bool,
    /// Render `-0` for a negative value that rounds to zero (binary floats).
    signed_zero: bool,
    /// ASCII digits without leading or trailing zeros. Empty means zero.
    digits: Vec<u8>,
    /// Position of the decimal point relative to the first digit.
    point: i64,
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl DigitString {
    fn normalized(negative: bool, mut digits: Vec<u8>, mut point: i64) -> Self {
        let leading = digits.iter().take_while(|&&b| b == b'0').count();
        digits.drain(..leading);
        point -= to_i64(leading);
        while digits.last() == Some(&b'0') {
            digits.pop();
        }
        DigitString {
            negative,
            signed_zero: false,
            digits,
            point,
        }
    }

    /// Integer magnitude given as decimal digits.
    pub fn from_integer(negative: bool, magnitude: &str) -> Self {
        let digits: Vec<u8> = magnitude.bytes().filter(u8::is_ascii_digit).collect();
        let point = to_i64(digits.len());
        Self::normalized(negative, digits, point)
    }

    /// Unsigned positional text such as `123.4500`.
    pub fn from_positional(negative: bool, text: &str) -> Self {
        let (integral, fractional) = text.split_once('.').unwrap_or((text, ""));
        let mut digits = Vec::with_capacity(integral.len() + fractional.len());
        digits.extend(integral.bytes().filter(u8::is_ascii_digit));
        let point = to_i64(digits.len());
        digits.extend(fractional.bytes().filter(u8::is_ascii_digit));
        Self::normalized(negative, digits, point)
    }

    /// Rust `{:e}` output such as `-1.25e-3`.
    pub fn from_exponential(text: &str) -> Self {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (mantissa, exponent) = body.split_once('e').unwrap_or((body, "0"));
        let exponent: i64 = exponent.parse().unwrap_or(0);
        let digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
        let mut out = Self::normalized(negative, digits, exponent + 1);
        out.signed_zero = true;
        out
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Decimal exponent of the leading digit in scientific notation.
    pub fn exponent(&self) -> i64 {
        if self.is_zero() {
            0
        } else {
            self.point - 1
        }
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Keep `keep` leading digits, rounding half away from zero.
    fn round_at(&mut self, keep: i64) {
        let Ok(keep) = usize::try_from(keep) else {
            self.digits.clear();
            return;
        };
        if keep >= self.digits.len() {
            return;
        }
        let round_up = self.digits[keep] >= b'5';
        self.digits.truncate(keep);
        if round_up {
            let mut carried = true;
            for digit in self.digits.iter_mut().rev() {
                if *digit == b'9' {
                    *digit = b'0';
                } else {
                    *digit += 1;
                    carried = false;
                    break;
                }
            }
            if carried {
                self.digits.insert(0, b'1');
                self.point += 1;
            }
        }
        while self.digits.last() == Some(&b'0') {
            self.digits.pop();
        }
    }

    /// Round to `decimals` digits after the decimal point.
    pub fn round_to_decimals(&mut self, decimals: usize) {
        self.round_at(self.point.saturating_add(to_i64(decimals)));
    }

    /// Round to `count` significant digits.
    pub fn round_to_significant(&mut self, count: usize) {
        self.round_at(to_i64(count));
    }

    fn digit_at(&self, index: i64) -> u8 {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.digits.get(i))
            .copied()
            .unwrap_or(b'0')
    }

    fn push_sign(&self, out: &mut String, format: &NumberFormat) {
        if self.negative && (self.signed_zero || !self.is_zero()) {
            out.push_str(&format.negative_sign);
        }
    }

    /// Positional rendering with exactly `decimals` fractional digits.
    pub fn fixed(&self, decimals: usize, grouped: bool, format: &NumberFormat) -> String {
        let mut integral = String::new();
        if self.point <= 0 || self.is_zero() {
            integral.push('0');
        } else {
            for index in 0..self.point {
                integral.push(char::from(self.digit_at(index)));
            }
        }

        let mut out = String::with_capacity(integral.len() + decimals + 4);
        self.push_sign(&mut out, format);
        if grouped {
            push_grouped(&mut out, &integral, &format.group_separator);
        } else {
            out.push_str(&integral);
        }
        if decimals > 0 {
            out.push_str(&format.decimal_separator);
            let start = if self.is_zero() { i64::MIN / 2 } else { self.point };
            for offset in 0..to_i64(decimals) {
                out.push(char::from(self.digit_at(start + offset)));
            }
        }
        out
    }

    /// Scientific rendering `d.ddd<E>+xxx` with `decimals` mantissa digits
    /// after the point and at least `min_exponent_digits` exponent digits.
    pub fn scientific(
        &self,
        decimals: usize,
        exponent_char: char,
        min_exponent_digits: usize,
        format: &NumberFormat,
    ) -> String {
        let mut out = String::with_capacity(decimals + 8);
        self.push_sign(&mut out, format);
        out.push(char::from(self.digit_at(0)));
        if decimals > 0 {
            out.push_str(&format.decimal_separator);
            for index in 1..=to_i64(decimals) {
                out.push(char::from(self.digit_at(index)));
            }
        }
        let exponent = self.exponent();
        out.push(exponent_char);
        out.push(if exponent < 0 { '-' } else { '+' });
        let magnitude = exponent.unsigned_abs().to_string();
        for _ in magnitude.len()..min_exponent_digits {
            out.push('0');
        }
        out.push_str(&magnitude);
        out
    }

    /// Shortest general rendering: positional for exponents in `[-4, threshold)`,
    /// scientific with a two-digit exponent outside.
    pub fn general(&self, threshold: i64, format: &NumberFormat) -> String {
        let exponent = self.exponent();
        let precision = self.len().max(1);
        if exponent >= threshold || exponent < -4 {
            self.scientific(precision - 1, 'E', 2, format)
        } else {
            let decimals = to_i64(self.len()) - self.point;
            self.fixed(usize::try_from(decimals).unwrap_or(0), false, format)
        }
    }
}

/// Append `digits` with `separator` between groups of three.
pub(crate) fn push_grouped(out: &mut String, digits: &str, separator: &str) {
    let len = digits.len();
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
}
