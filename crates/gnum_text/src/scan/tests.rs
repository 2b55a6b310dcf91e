use super::*;
use pretty_assertions::assert_eq;

fn invariant() -> &'static NumberFormat {
    NumberFormat::invariant_ref()
}

fn scan(text: &str, styles: NumberStyles) -> Result<ScannedNumber, ParseError> {
    scan_decimal(text, styles, invariant())
}

#[test]
fn plain_integer() {
    let n = scan("  -42 ", NumberStyles::INTEGER).unwrap();
    assert!(n.negative);
    assert_eq!(n.integral, "42");
    assert_eq!(n.fractional, "");
    assert_eq!(n.exponent, 0);
}

#[test]
fn whitespace_needs_flags() {
    assert_eq!(
        scan(" 1", NumberStyles::empty()),
        Err(ParseError::Invalid { position: 0 })
    );
    assert_eq!(
        scan("1 ", NumberStyles::ALLOW_LEADING_WHITE),
        Err(ParseError::Invalid { position: 1 })
    );
}

#[test]
fn empty_and_blank() {
    assert_eq!(scan("", NumberStyles::INTEGER), Err(ParseError::Empty));
    assert_eq!(scan("   ", NumberStyles::INTEGER), Err(ParseError::Empty));
    assert_eq!(
        scan("-", NumberStyles::INTEGER),
        Err(ParseError::Invalid { position: 1 })
    );
}

#[test]
fn thousands_and_point() {
    let n = scan("1,234,567.25", NumberStyles::NUMBER).unwrap();
    assert_eq!(n.integral, "1234567");
    assert_eq!(n.fractional, "25");
    assert!(scan("1,234", NumberStyles::INTEGER).is_err());
    assert!(scan(",1", NumberStyles::NUMBER).is_err());
}

#[test]
fn trailing_sign_and_parentheses() {
    assert!(scan("12-", NumberStyles::NUMBER).unwrap().negative);
    let n = scan("(12)", NumberStyles::CURRENCY).unwrap();
    assert!(n.negative);
    assert_eq!(n.integral, "12");
    assert!(scan("(12", NumberStyles::CURRENCY).is_err());
    assert!(scan("-12-", NumberStyles::NUMBER).is_err());
}

#[test]
fn currency_symbol() {
    let format = NumberFormat::invariant().currency("$");
    let n = scan_decimal("$1,000.50", NumberStyles::CURRENCY, &format).unwrap();
    assert_eq!(n.integral, "1000");
    assert_eq!(n.fractional, "50");
    assert!(scan_decimal("$1", NumberStyles::NUMBER, &format).is_err());
}

#[test]
fn exponent() {
    let n = scan("1.5e-3", NumberStyles::FLOAT).unwrap();
    assert_eq!(n.exponent, -3);
    let n = scan("2E+10", NumberStyles::FLOAT).unwrap();
    assert_eq!(n.exponent, 10);
    assert!(scan("2e", NumberStyles::FLOAT).is_err());
    assert!(scan("2e5", NumberStyles::NUMBER).is_err());
}

#[test]
fn culture_separators() {
    let format = NumberFormat::with_separators(",", ".");
    let n = scan_decimal("1.234,5", NumberStyles::NUMBER, &format).unwrap();
    assert_eq!(n.integral, "1234");
    assert_eq!(n.fractional, "5");
}

#[test]
fn hex_digits() {
    assert_eq!(scan_hex(" ff ", NumberStyles::HEX_NUMBER), Ok("ff"));
    assert_eq!(
        scan_hex("0x1F", NumberStyles::HEX_NUMBER),
        Err(ParseError::Invalid { position: 1 })
    );
    assert_eq!(
        scan_hex("1", NumberStyles::HEX_NUMBER | NumberStyles::ALLOW_LEADING_SIGN),
        Err(ParseError::InvalidStyles { bits: 519 })
    );
}

#[test]
fn integer_digits_with_exponent() {
    let n = scan("1.5e1", NumberStyles::FLOAT).unwrap();
    assert_eq!(n.integer_digits().unwrap(), "15");
    let n = scan("12e2", NumberStyles::FLOAT).unwrap();
    assert_eq!(n.integer_digits().unwrap(), "1200");
    let n = scan("1.00", NumberStyles::NUMBER).unwrap();
    assert_eq!(n.integer_digits().unwrap(), "1");
    let n = scan("1.5", NumberStyles::NUMBER).unwrap();
    assert_eq!(n.integer_digits(), Err(ParseError::Overflow));
    let n = scan("0.000", NumberStyles::NUMBER).unwrap();
    assert_eq!(n.integer_digits().unwrap(), "0");
}
