//! Style-driven scanner shared by every numeric kind.
//!
//! The scanner validates text against a `NumberStyles` grammar and splits it
//! into sign, integral digits, fractional digits and exponent. It never
//! builds a value; the per-kind parsers in `parse` do that, so range checks
//! stay with the kind that owns the range.

use crate::error::ParseError;
use crate::info::NumberFormat;
use crate::styles::NumberStyles;

/// Text split into its numeric parts.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub(crate) struct ScannedNumber {
    pub negative: bool,
    /// ASCII digits before the decimal separator, group separators removed.
    pub integral: String,
    /// ASCII digits after the decimal separator.
    pub fractional: String,
    /// Power of ten applied to `integral.fractional`.
    pub exponent: i64,
}

/// Exponents past this bound already exceed every kind's range.
const EXPONENT_LIMIT: i64 = 100_000;

/// Whitespace accepted by the `ALLOW_*_WHITE` flags.
#[inline]
pub(crate) fn is_white(c: char) -> bool {
    matches!(c, '\t'..='\r' | ' ')
}

/// Trim the whitespace the styles allow.
pub(crate) fn trim(text: &str, styles: NumberStyles) -> &str {
    let mut text = text;
    if styles.contains(NumberStyles::ALLOW_LEADING_WHITE) {
        text = text.trim_start_matches(is_white);
    }
    if styles.contains(NumberStyles::ALLOW_TRAILING_WHITE) {
        text = text.trim_end_matches(is_white);
    }
    text
}

/// Validate a style value before scanning.
pub(crate) fn check_styles(styles: NumberStyles) -> Result<(), ParseError> {
    if styles.is_valid() {
        Ok(())
    } else {
        Err(ParseError::InvalidStyles {
            bits: styles.bits(),
        })
    }
}

/// Scan hexadecimal digits (no prefix, no sign).
///
/// Returns the digits with leading zeros kept; callers decide how the
/// leading digit is interpreted.
pub(crate) fn scan_hex(text: &str, styles: NumberStyles) -> Result<&str, ParseError> {
    check_styles(styles)?;
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    let body = trim(text, styles);
    if body.is_empty() {
        return Err(ParseError::Empty);
    }
    match body.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        Some((idx, _)) => Err(ParseError::Invalid {
            position: offset_in(text, body) + idx,
        }),
        None => Ok(body),
    }
}

/// Byte offset of `inner` within `outer`. `inner` must be a subslice.
fn offset_in(outer: &str, inner: &str) -> usize {
    (inner.as_ptr() as usize).saturating_sub(outer.as_ptr() as usize)
}

/// Cursor over the text being scanned.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    /// Consume `symbol` if the text continues with it. Empty symbols never match.
    fn eat(&mut self, symbol: &str) -> bool {
        if !symbol.is_empty() && self.rest().starts_with(symbol) {
            self.pos += symbol.len();
            true
        } else {
            false
        }
    }

    fn eat_white(&mut self) {
        while let Some(c) = self.peek() {
            if !is_white(c) {
                break;
            }
            self.bump(c);
        }
    }

    fn invalid(&self) -> ParseError {
        ParseError::Invalid { position: self.pos }
    }
}

/// Sign bookkeeping across the leading and trailing sections.
#[derive(Default)]
struct SignState {
    seen: bool,
    negative: bool,
    open_paren: bool,
}

impl SignState {
    fn take_sign(&mut self, cursor: &mut Cursor<'_>, format: &NumberFormat) -> bool {
        if self.seen {
            return false;
        }
        // Negative first: a culture may use a negative sign that starts
        // with the positive one.
        if cursor.eat(&format.negative_sign) {
            self.seen = true;
            self.negative = true;
            true
        } else if cursor.eat(&format.positive_sign) {
            self.seen = true;
            true
        } else {
            false
        }
    }
}

/// Scan decimal text under `styles`.
pub(crate) fn scan_decimal(
    text: &str,
    styles: NumberStyles,
    format: &NumberFormat,
) -> Result<ScannedNumber, ParseError> {
    check_styles(styles)?;
    if trim(text, styles).is_empty() {
        return Err(ParseError::Empty);
    }

    let mut cursor = Cursor { text, pos: 0 };
    let mut sign = SignState::default();
    let mut currency_seen = false;

    // Leading section: whitespace, sign, parenthesis, currency in any order.
    loop {
        let before = cursor.pos;
        if styles.contains(NumberStyles::ALLOW_LEADING_WHITE) {
            cursor.eat_white();
        }
        if styles.contains(NumberStyles::ALLOW_LEADING_SIGN) {
            sign.take_sign(&mut cursor, format);
        }
        if styles.contains(NumberStyles::ALLOW_PARENTHESES) && !sign.seen && cursor.eat("(") {
            sign.seen = true;
            sign.negative = true;
            sign.open_paren = true;
        }
        if styles.contains(NumberStyles::ALLOW_CURRENCY_SYMBOL)
            && !currency_seen
            && cursor.eat(&format.currency_symbol)
        {
            currency_seen = true;
        }
        if cursor.pos == before {
            break;
        }
    }

    let mut number = ScannedNumber::default();
    let mut point_seen = false;
    let allow_point = styles.contains(NumberStyles::ALLOW_DECIMAL_POINT);
    let allow_groups = styles.contains(NumberStyles::ALLOW_THOUSANDS);

    while let Some(c) = cursor.peek() {
        if c.is_ascii_digit() {
            if point_seen {
                number.fractional.push(c);
            } else {
                number.integral.push(c);
            }
            cursor.bump(c);
        } else if allow_point && !point_seen && cursor.eat(&format.decimal_separator) {
            point_seen = true;
        } else if allow_groups
            && !point_seen
            && !number.integral.is_empty()
            && cursor.eat(&format.group_separator)
        {
            // group separators carry no value
        } else {
            break;
        }
    }

    if number.integral.is_empty() && number.fractional.is_empty() {
        return Err(cursor.invalid());
    }

    if styles.contains(NumberStyles::ALLOW_EXPONENT) {
        if let Some(c @ ('e' | 'E')) = cursor.peek() {
            cursor.bump(c);
            number.exponent = scan_exponent(&mut cursor)?;
        }
    }

    // Trailing section.
    loop {
        let before = cursor.pos;
        if styles.contains(NumberStyles::ALLOW_TRAILING_WHITE) {
            cursor.eat_white();
        }
        if styles.contains(NumberStyles::ALLOW_TRAILING_SIGN) {
            sign.take_sign(&mut cursor, format);
        }
        if sign.open_paren && cursor.eat(")") {
            sign.open_paren = false;
        }
        if styles.contains(NumberStyles::ALLOW_CURRENCY_SYMBOL)
            && !currency_seen
            && cursor.eat(&format.currency_symbol)
        {
            currency_seen = true;
        }
        if cursor.pos == before {
            break;
        }
    }

    if sign.open_paren || !cursor.at_end() {
        return Err(cursor.invalid());
    }

    number.negative = sign.negative;
    Ok(number)
}

fn scan_exponent(cursor: &mut Cursor<'_>) -> Result<i64, ParseError> {
    let negative = match cursor.peek() {
        Some(c @ '-') => {
            cursor.bump(c);
            true
        }
        Some(c @ '+') => {
            cursor.bump(c);
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    let mut any = false;
    while let Some(c) = cursor.peek() {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        any = true;
        value = (value * 10 + i64::from(digit)).min(EXPONENT_LIMIT);
        cursor.bump(c);
    }
    if !any {
        return Err(cursor.invalid());
    }
    Ok(if negative { -value } else { value })
}

impl ScannedNumber {
    /// True when every digit is zero.
    pub fn is_zero(&self) -> bool {
        self.integral
            .bytes()
            .chain(self.fractional.bytes())
            .all(|b| b == b'0')
    }

    /// Integral digits after applying the exponent.
    ///
    /// Digits that end up after the decimal point must all be zero, else the
    /// value is not integral and the result is `Overflow`, the same failure
    /// an integral parse reports for a value it cannot hold.
    pub fn integer_digits(&self) -> Result<String, ParseError> {
        if self.is_zero() {
            return Ok("0".to_owned());
        }
        let mut digits = String::with_capacity(self.integral.len() + self.fractional.len());
        digits.push_str(&self.integral);
        digits.push_str(&self.fractional);
        let frac_len = i64::try_from(self.fractional.len()).map_err(|_| ParseError::Overflow)?;
        let shift = self.exponent - frac_len;

        if shift >= 0 {
            // Any non-zero digit times 10^EXPONENT_LIMIT overflows every kind.
            if shift >= EXPONENT_LIMIT {
                return Err(ParseError::Overflow);
            }
            let zeros = usize::try_from(shift).map_err(|_| ParseError::Overflow)?;
            digits.extend(std::iter::repeat('0').take(zeros));
            Ok(digits)
        } else {
            let cut = usize::try_from(-shift).map_err(|_| ParseError::Overflow)?;
            if cut >= digits.len() {
                // every digit moved behind the point and the value is non-zero
                return Err(ParseError::Overflow);
            }
            let (head, tail) = digits.split_at(digits.len() - cut);
            if tail.bytes().any(|b| b != b'0') {
                return Err(ParseError::Overflow);
            }
            Ok(head.to_owned())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
