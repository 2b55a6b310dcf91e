use super::*;
use pretty_assertions::assert_eq;

#[test]
fn spec_parsing() {
    assert_eq!(FormatSpec::parse(None), Ok(FormatSpec::GENERAL));
    assert_eq!(FormatSpec::parse(Some("")), Ok(FormatSpec::GENERAL));
    assert_eq!(FormatSpec::parse(Some("R")), Ok(FormatSpec::GENERAL));
    assert_eq!(
        FormatSpec::parse(Some("F3")),
        Ok(FormatSpec {
            kind: FormatKind::Fixed,
            precision: Some(3)
        })
    );
    assert_eq!(
        FormatSpec::parse(Some("x")),
        Ok(FormatSpec {
            kind: FormatKind::Hex { upper: false },
            precision: None
        })
    );
    for bad in ["G5", "Q", "F-1", "F1000", "0.00"] {
        assert_eq!(
            FormatSpec::parse(Some(bad)),
            Err(ParseError::UnsupportedFormat {
                spec: bad.to_owned()
            }),
            "{bad}"
        );
    }
}

#[test]
fn int_formats() {
    assert_eq!(format_int(-42i32, None, None).unwrap(), "-42");
    assert_eq!(format_int(42u8, Some("D5"), None).unwrap(), "00042");
    assert_eq!(format_int(-5i16, Some("D3"), None).unwrap(), "-005");
    assert_eq!(format_int(-1i32, Some("X"), None).unwrap(), "FFFFFFFF");
    assert_eq!(format_int(255u32, Some("x4"), None).unwrap(), "00ff");
    assert_eq!(format_int(1234567i64, Some("N"), None).unwrap(), "1,234,567.00");
    assert_eq!(format_int(7i32, Some("F1"), None).unwrap(), "7.0");
    assert_eq!(format_int(12345i32, Some("E2"), None).unwrap(), "1.23E+004");
    assert_eq!(format_int(i128::MIN, None, None).unwrap(), i128::MIN.to_string());
}

#[test]
fn int_culture() {
    let format = NumberFormat::with_separators(",", ".");
    assert_eq!(
        format_int(1234567i32, Some("N1"), Some(&format)).unwrap(),
        "1.234.567,0"
    );
}

#[test]
fn float_formats() {
    assert_eq!(format_float(0.1f64, None, None).unwrap(), "0.1");
    assert_eq!(format_float(-2.5f64, None, None).unwrap(), "-2.5");
    assert_eq!(format_float(1e15f64, None, None).unwrap(), "1E+15");
    assert_eq!(format_float(1e7f32, None, None).unwrap(), "1E+07");
    assert_eq!(format_float(123.0f32, None, None).unwrap(), "123");
    assert_eq!(format_float(3.14159f64, Some("F2"), None).unwrap(), "3.14");
    assert_eq!(format_float(2.5f64, Some("F0"), None).unwrap(), "3");
    assert_eq!(format_float(1234.5f64, Some("e3"), None).unwrap(), "1.235e+003");
    assert_eq!(format_float(-0.0f64, None, None).unwrap(), "-0");
}

#[test]
fn float_specials() {
    assert_eq!(format_float(f64::NAN, None, None).unwrap(), "NaN");
    assert_eq!(format_float(f64::INFINITY, Some("F2"), None).unwrap(), "Infinity");
    assert_eq!(format_float(f32::NEG_INFINITY, None, None).unwrap(), "-Infinity");
}

#[test]
fn float_rejects_integral_formats() {
    assert_eq!(
        format_float(1.0f64, Some("X"), None),
        Err(ParseError::UnsupportedFormat {
            spec: "X".to_owned()
        })
    );
    assert!(format_float(1.0f64, Some("D2"), None).is_err());
}

#[test]
fn decimal_formats() {
    let v = Decimal::new(150, 2);
    assert_eq!(format_decimal(&v, None, None).unwrap(), "1.50");
    assert_eq!(format_decimal(&-v, None, None).unwrap(), "-1.50");
    assert_eq!(format_decimal(&Decimal::new(-0, 3), None, None).unwrap(), "0.000");
    assert_eq!(
        format_decimal(&Decimal::new(1234565, 3), Some("N2"), None).unwrap(),
        "1,234.57"
    );
    assert_eq!(
        format_decimal(&Decimal::new(325, 2), Some("E1"), None).unwrap(),
        "3.3E+000"
    );
    let format = NumberFormat::with_separators(",", ".");
    assert_eq!(format_decimal(&v, None, Some(&format)).unwrap(), "1,50");
    assert!(format_decimal(&v, Some("X"), None).is_err());
}

#[test]
fn big_int_formats() {
    let big: BigInt = "123456789012345678901234567890".parse().unwrap();
    assert_eq!(
        format_big_int(&big, None, None).unwrap(),
        "123456789012345678901234567890"
    );
    assert_eq!(
        format_big_int(&-big, Some("D"), None).unwrap(),
        "-123456789012345678901234567890"
    );
    assert_eq!(format_big_int(&BigInt::from(42), Some("D4"), None).unwrap(), "0042");
    assert_eq!(format_big_int(&BigInt::from(1000), Some("N0"), None).unwrap(), "1,000");
}

#[test]
fn big_int_hex_carries_sign() {
    let hex = |v: i64| format_big_int(&BigInt::from(v), Some("X"), None).unwrap();
    assert_eq!(hex(0), "0");
    assert_eq!(hex(15), "0F");
    assert_eq!(hex(255), "0FF");
    assert_eq!(hex(127), "7F");
    assert_eq!(hex(-1), "F");
    assert_eq!(hex(-128), "80");
    assert_eq!(hex(-129), "F7F");
    assert_eq!(hex(-256), "F00");
    assert_eq!(
        format_big_int(&BigInt::from(-1), Some("x4"), None).unwrap(),
        "ffff"
    );
}
