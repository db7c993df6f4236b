use cldr_number_format::{format_number, CldrContext, FormatOptions};

#[test]
fn test_lakh_crore_grouping() {
    let context = CldrContext::new().unwrap();
    let options = FormatOptions::new("en");
    assert_eq!(
        format_number(1234567, "##,##,##0", &options, &context).unwrap(),
        "12,34,567"
    );
    assert_eq!(
        format_number(123456789, "##,##,##0", &options, &context).unwrap(),
        "12,34,56,789"
    );
    assert_eq!(format_number(567, "##,##,##0", &options, &context).unwrap(), "567");

    let hindi = FormatOptions::new("hi");
    assert_eq!(
        format_number(1234567, "standard", &hindi, &context).unwrap(),
        "12,34,567"
    );
}

#[test]
fn test_minimum_grouping_digits() {
    let context = CldrContext::new().unwrap();
    let options = FormatOptions::new("es");
    assert_eq!(format_number(1234, "standard", &options, &context).unwrap(), "1234");
    assert_eq!(format_number(12345, "standard", &options, &context).unwrap(), "12.345");
}

#[test]
fn test_localized_separators() {
    let context = CldrContext::new().unwrap();

    let german = FormatOptions::new("de");
    assert_eq!(
        format_number(1234567.89, "#,##0.00", &german, &context).unwrap(),
        "1.234.567,89"
    );

    let french = FormatOptions::new("fr");
    assert_eq!(
        format_number(1234.5, "standard", &french, &context).unwrap(),
        "1\u{202F}234,5"
    );
}

#[test]
fn test_fraction_side_grouping() {
    let context = CldrContext::new().unwrap();
    let options = FormatOptions::new("en");
    assert_eq!(
        format_number(0.123456, "0.000,000", &options, &context).unwrap(),
        "0.123,456"
    );
}

#[test]
fn test_numbering_system_digits() {
    let context = CldrContext::new().unwrap();

    let mut arabic = FormatOptions::new("ar");
    arabic.number_system = "native".to_string();
    assert_eq!(
        format_number(1234, "standard", &arabic, &context).unwrap(),
        "١٬٢٣٤"
    );

    let mut hindi = FormatOptions::new("hi");
    hindi.number_system = "native".to_string();
    assert_eq!(format_number(1234, "standard", &hindi, &context).unwrap(), "१,२३४");

    let mut fullwide = FormatOptions::new("en");
    fullwide.number_system = "fullwide".to_string();
    assert_eq!(
        format_number(12345, "standard", &fullwide, &context).unwrap(),
        "１２,３４５"
    );
}
