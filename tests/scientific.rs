use cldr_number_format::{format_number, CldrContext, FormatOptions};

#[test]
fn test_mantissa_and_exponent() {
    let context = CldrContext::new().unwrap();
    let options = FormatOptions::new("en");
    assert_eq!(
        format_number(12345, "0.00E+00", &options, &context).unwrap(),
        "1.23E+04"
    );
    assert_eq!(
        format_number(-12345, "0.00E+00", &options, &context).unwrap(),
        "-1.23E+04"
    );
    assert_eq!(format_number(0.0012, "0.0E0", &options, &context).unwrap(), "1.2E-3");
}

#[test]
fn test_scientific_style() {
    let context = CldrContext::new().unwrap();
    let options = FormatOptions::new("en");
    assert_eq!(
        format_number(12345, "scientific", &options, &context).unwrap(),
        "1.2345E4"
    );
    assert_eq!(format_number(0.5, "scientific", &options, &context).unwrap(), "5E-1");
}

#[test]
fn test_mantissa_rounding_carries() {
    let context = CldrContext::new().unwrap();
    let options = FormatOptions::new("en");
    // 9.99 rounds up to 10 at one significant digit and carries
    assert_eq!(format_number(9.99, "0E0", &options, &context).unwrap(), "1E1");
    assert_eq!(
        format_number(45678.9, "##0.##E0", &options, &context).unwrap(),
        "4.57E4"
    );
}

#[test]
fn test_scientific_zero() {
    let context = CldrContext::new().unwrap();
    let options = FormatOptions::new("en");
    assert_eq!(
        format_number(0, "0.00E+00", &options, &context).unwrap(),
        "0.00E+00"
    );
}

#[test]
fn test_forced_exponent_sign() {
    let context = CldrContext::new().unwrap();
    let options = FormatOptions::new("en");
    // Without the plus marker a non-negative exponent carries no sign
    assert_eq!(format_number(12345, "0E0", &options, &context).unwrap(), "1E4");
    assert_eq!(format_number(12345, "0E+0", &options, &context).unwrap(), "1E+4");
    assert_eq!(format_number(0.5, "0E+0", &options, &context).unwrap(), "5E-1");
}
