use cldr_number_format::{format_number, CldrContext, FormatOptions};

fn options_with(locale: &str, currency: &str) -> FormatOptions {
    let mut options = FormatOptions::new(locale);
    options.currency = Some(currency.to_string());
    options
}

#[test]
fn test_accounting_style() {
    let context = CldrContext::new().unwrap();
    let options = options_with("en", "JPY");
    assert_eq!(
        format_number(1234, "accounting", &options, &context).unwrap(),
        "¥1,234"
    );
    assert_eq!(
        format_number(-1234, "accounting", &options, &context).unwrap(),
        "(¥1,234)"
    );
}

#[test]
fn test_currency_fraction_digits() {
    let context = CldrContext::new().unwrap();

    let usd = options_with("en", "USD");
    assert_eq!(
        format_number(1234.5, "currency", &usd, &context).unwrap(),
        "$1,234.50"
    );

    // JPY has no minor unit, BHD has three
    let jpy = options_with("en", "JPY");
    assert_eq!(format_number(1234.5, "currency", &jpy, &context).unwrap(), "¥1,234");
    let bhd = options_with("en", "BHD");
    assert_eq!(format_number(12, "currency", &bhd, &context).unwrap(), "BHD12.000");
}

#[test]
fn test_currency_digits_apply_without_placeholder() {
    let context = CldrContext::new().unwrap();
    let options = options_with("en", "USD");
    assert_eq!(
        format_number(1234.5, "standard", &options, &context).unwrap(),
        "1,234.50"
    );
}

#[test]
fn test_currency_widths() {
    let context = CldrContext::new().unwrap();

    let usd = options_with("en", "USD");
    assert_eq!(
        format_number(5, "¤¤ #,##0.00", &usd, &context).unwrap(),
        "USD 5.00"
    );
    assert_eq!(
        format_number(1234.5, "#,##0.00 ¤¤¤", &usd, &context).unwrap(),
        "1,234.50 US dollars"
    );

    let cny = options_with("en", "CNY");
    assert_eq!(format_number(5, "¤0.00", &cny, &context).unwrap(), "CN¥5.00");
    assert_eq!(format_number(5, "¤¤¤¤0.00", &cny, &context).unwrap(), "¥5.00");

    // CHF defines no narrow symbol; ¤¤¤¤ falls back to the symbol
    let chf = options_with("en", "CHF");
    assert_eq!(format_number(5, "¤¤¤¤0.00", &chf, &context).unwrap(), "CHF5.00");
}

#[test]
fn test_plural_display_name() {
    let context = CldrContext::new().unwrap();
    let jpy = options_with("en", "JPY");
    assert_eq!(
        format_number(1, "0 ¤¤¤", &jpy, &context).unwrap(),
        "1 Japanese yen"
    );
    let usd = options_with("en", "USD");
    assert_eq!(
        format_number(2, "0 ¤¤¤", &usd, &context).unwrap(),
        "2.00 US dollars"
    );
}

#[test]
fn test_cash_rounding() {
    let context = CldrContext::new().unwrap();
    let mut chf = options_with("en", "CHF");
    chf.cash = true;
    assert_eq!(format_number(3.47, "currency", &chf, &context).unwrap(), "CHF3.45");
    assert_eq!(format_number(3.48, "currency", &chf, &context).unwrap(), "CHF3.50");

    // Without the cash flag no increment applies
    chf.cash = false;
    assert_eq!(format_number(3.47, "currency", &chf, &context).unwrap(), "CHF3.47");
}

#[test]
fn test_localized_currency_patterns() {
    let context = CldrContext::new().unwrap();
    let eur = options_with("de", "EUR");
    assert_eq!(
        format_number(1234.5, "currency", &eur, &context).unwrap(),
        "1.234,50 €"
    );
    assert_eq!(
        format_number(-1234.5, "accounting", &eur, &context).unwrap(),
        "-1.234,50 €"
    );
}
