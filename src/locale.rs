//! Locale support for number formatting
//!
//! This module loads the embedded CLDR-derived locale bundle (symbols,
//! named format styles, numbering-system digit tables and currency records)
//! and exposes it behind an immutable [`CldrContext`] handle. A context is
//! passed into every format call; there is no process-wide singleton, so
//! any number of contexts can coexist and be shared across threads.

use std::collections::HashMap;
use std::fmt;

use crate::parser::parse_pattern;
use crate::plural::{CardinalRules, Pluralizer};
use crate::types::{FormatError, PatternMeta};

/// Error type for locale-bundle operations
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleError {
    /// The specified locale was not found
    NotFound(String),
    /// An error occurred while parsing locale data
    ParseError(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::NotFound(locale) => write!(f, "locale not found: {}", locale),
            LocaleError::ParseError(msg) => write!(f, "error parsing locale data: {}", msg),
        }
    }
}

impl std::error::Error for LocaleError {}

type Result<T> = std::result::Result<T, LocaleError>;

/// Symbols substituted for the pipeline's placeholder characters and the
/// sign/percent affix tokens
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSymbols {
    pub decimal: String,
    pub group: String,
    pub plus: String,
    pub minus: String,
    pub percent: String,
    pub permille: String,
    pub exponent: String,
    pub infinity: String,
    pub nan: String,
}

impl Default for LocaleSymbols {
    fn default() -> Self {
        LocaleSymbols {
            decimal: ".".to_string(),
            group: ",".to_string(),
            plus: "+".to_string(),
            minus: "-".to_string(),
            percent: "%".to_string(),
            permille: "‰".to_string(),
            exponent: "E".to_string(),
            infinity: "∞".to_string(),
            nan: "NaN".to_string(),
        }
    }
}

/// Number formatting data for one locale
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleData {
    pub id: String,
    pub symbols: LocaleSymbols,
    /// Grouping is suppressed when the integer part is shorter than this
    /// many digits plus the primary group size
    pub minimum_grouping_digits: usize,
    pub default_numbering_system: String,
    pub native_numbering_system: String,
    /// Named style → pattern source
    pub patterns: HashMap<String, String>,
}

/// A currency record from the bundle
#[derive(Debug, Clone, PartialEq)]
pub struct Currency {
    pub code: String,
    pub symbol: String,
    pub narrow_symbol: Option<String>,
    /// Fraction digits in regular usage
    pub digits: u32,
    /// Rounding increment in units of 10^-digits; 0 = none
    pub rounding: u32,
    /// Fraction digits for cash transactions
    pub cash_digits: u32,
    /// Cash rounding increment in units of 10^-cash_digits; 0 = none
    pub cash_rounding: u32,
    /// Plural category → display name
    pub names: HashMap<String, String>,
}

impl Currency {
    /// Display name for a plural category, falling back to the "other"
    /// form and finally to the ISO code.
    pub fn display_name(&self, category: &str) -> &str {
        self.names
            .get(category)
            .or_else(|| self.names.get("other"))
            .map(String::as_str)
            .unwrap_or(&self.code)
    }
}

/// Immutable handle owning the locale table, numbering systems, currency
/// table and the eagerly precompiled named styles
pub struct CldrContext {
    locales: HashMap<String, LocaleData>,
    numbering_systems: HashMap<String, Vec<char>>,
    currencies: HashMap<String, Currency>,
    /// Precompiled named styles, keyed "locale/style"
    styles: HashMap<String, PatternMeta>,
    default_locale: String,
    pluralizer: CardinalRules,
}

impl CldrContext {
    /// Create a context from the embedded locale bundle
    ///
    /// # Returns
    /// * `Result<CldrContext, LocaleError>` - The loaded context, or the
    ///   first data error encountered
    ///
    /// # Examples
    /// ```
    /// use cldr_number_format::locale::CldrContext;
    ///
    /// let context = CldrContext::new().unwrap();
    /// assert!(context.available_locales().contains(&"en"));
    /// ```
    pub fn new() -> Result<CldrContext> {
        let mut context = CldrContext {
            locales: HashMap::new(),
            numbering_systems: HashMap::new(),
            currencies: HashMap::new(),
            styles: HashMap::new(),
            default_locale: "en".to_string(),
            pluralizer: CardinalRules,
        };

        context.parse_numbering_systems(include_str!("locale/numbering_systems.toml"))?;
        context.parse_symbols(include_str!("locale/symbols.toml"))?;
        context.parse_patterns(include_str!("locale/patterns.toml"))?;
        context.parse_currencies(include_str!("locale/currencies.toml"))?;
        context.compile_styles()?;

        Ok(context)
    }

    /// Look up a locale, falling back from "xx-YY" to "xx"
    pub fn locale(&self, id: &str) -> std::result::Result<&LocaleData, FormatError> {
        let normalized = id.replace('_', "-");
        if let Some(data) = self.locales.get(&normalized) {
            return Ok(data);
        }
        if let Some(language) = normalized.split('-').next() {
            if let Some(data) = self.locales.get(language) {
                return Ok(data);
            }
        }
        Err(FormatError::UnknownLocale(id.to_string()))
    }

    /// Look up a currency by its ISO 4217 code
    pub fn currency(&self, code: &str) -> std::result::Result<&Currency, FormatError> {
        self.currencies
            .get(&code.to_ascii_uppercase())
            .ok_or_else(|| FormatError::UnknownCurrency(code.to_string()))
    }

    /// Digit table for a numbering system. "native" and "default" resolve
    /// through the locale.
    pub fn digit_table(
        &self,
        locale: &LocaleData,
        system: &str,
    ) -> std::result::Result<&[char], FormatError> {
        let id = match system {
            "native" => locale.native_numbering_system.as_str(),
            "default" => locale.default_numbering_system.as_str(),
            other => other,
        };
        self.numbering_systems
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| FormatError::UnknownNumberSystem(system.to_string()))
    }

    /// Precompiled meta for a named style, if the locale defines it
    pub fn style_meta(&self, locale_id: &str, style: &str) -> Option<&PatternMeta> {
        self.styles.get(&style_key(locale_id, style))
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn pluralizer(&self) -> &dyn Pluralizer {
        &self.pluralizer
    }

    /// List all available locale identifiers, sorted
    pub fn available_locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    fn parse_numbering_systems(&mut self, toml_str: &str) -> Result<()> {
        let parsed: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;
        let table = as_table(&parsed, "numbering systems")?;

        for (id, value) in table {
            let glyphs = value.as_str().ok_or_else(|| {
                LocaleError::ParseError(format!("digit table for {} is not a string", id))
            })?;
            let digits: Vec<char> = glyphs.chars().collect();
            if digits.len() != 10 {
                return Err(LocaleError::ParseError(format!(
                    "digit table for {} has {} glyphs, expected 10",
                    id,
                    digits.len()
                )));
            }
            self.numbering_systems.insert(id.clone(), digits);
        }

        Ok(())
    }

    fn parse_symbols(&mut self, toml_str: &str) -> Result<()> {
        let parsed: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;
        let table = as_table(&parsed, "symbols")?;

        let mut base = LocaleData {
            id: String::new(),
            symbols: LocaleSymbols::default(),
            minimum_grouping_digits: 1,
            default_numbering_system: "latn".to_string(),
            native_numbering_system: "latn".to_string(),
            patterns: HashMap::new(),
        };
        if let Some(value) = table.get("base") {
            apply_locale_overrides(&mut base, as_table(value, "base symbols")?);
        }

        for (locale_id, value) in table {
            if locale_id == "base" {
                continue;
            }
            let mut data = base.clone();
            data.id = locale_id.clone();
            apply_locale_overrides(&mut data, as_table(value, locale_id)?);

            for system in [&data.default_numbering_system, &data.native_numbering_system] {
                if !self.numbering_systems.contains_key(system) {
                    return Err(LocaleError::ParseError(format!(
                        "locale {} references unknown numbering system {}",
                        locale_id, system
                    )));
                }
            }
            self.locales.insert(locale_id.clone(), data);
        }

        Ok(())
    }

    fn parse_patterns(&mut self, toml_str: &str) -> Result<()> {
        let parsed: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;
        let table = as_table(&parsed, "patterns")?;

        let mut base: HashMap<String, String> = HashMap::new();
        if let Some(value) = table.get("base") {
            for (style, pattern) in as_table(value, "base patterns")? {
                let pattern = pattern.as_str().ok_or_else(|| {
                    LocaleError::ParseError(format!("pattern {} is not a string", style))
                })?;
                base.insert(style.clone(), pattern.to_string());
            }
        }

        for (locale_id, data) in self.locales.iter_mut() {
            let mut patterns = base.clone();
            if let Some(value) = table.get(locale_id) {
                for (style, pattern) in as_table(value, locale_id)? {
                    let pattern = pattern.as_str().ok_or_else(|| {
                        LocaleError::ParseError(format!(
                            "pattern {} for {} is not a string",
                            style, locale_id
                        ))
                    })?;
                    patterns.insert(style.clone(), pattern.to_string());
                }
            }
            data.patterns = patterns;
        }

        Ok(())
    }

    fn parse_currencies(&mut self, toml_str: &str) -> Result<()> {
        let parsed: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;
        let table = as_table(&parsed, "currencies")?;

        for (code, value) in table {
            let fields = as_table(value, code)?;
            let digits = int_field(fields, "digits", 2, code)?;
            let currency = Currency {
                code: code.clone(),
                symbol: str_field(fields, "symbol").unwrap_or(code.as_str()).to_string(),
                narrow_symbol: str_field(fields, "narrow").map(str::to_string),
                digits,
                rounding: int_field(fields, "rounding", 0, code)?,
                cash_digits: int_field(fields, "cash_digits", digits, code)?,
                cash_rounding: int_field(fields, "cash_rounding", 0, code)?,
                names: plural_names(fields),
            };
            self.currencies.insert(code.clone(), currency);
        }

        Ok(())
    }

    /// Compile every named style of every locale so that formatting by
    /// style name never parses a pattern.
    fn compile_styles(&mut self) -> Result<()> {
        for (locale_id, data) in &self.locales {
            for (style, pattern) in &data.patterns {
                let meta = parse_pattern(pattern).map_err(|e| {
                    LocaleError::ParseError(format!(
                        "style {} of locale {}: {}",
                        style, locale_id, e
                    ))
                })?;
                self.styles.insert(style_key(locale_id, style), meta);
            }
        }
        Ok(())
    }
}

fn style_key(locale_id: &str, style: &str) -> String {
    format!("{locale_id}/{style}")
}

fn as_table<'a>(value: &'a toml::Value, what: &str) -> Result<&'a toml::value::Table> {
    value
        .as_table()
        .ok_or_else(|| LocaleError::ParseError(format!("{} is not a table", what)))
}

fn str_field<'a>(table: &'a toml::value::Table, key: &str) -> Option<&'a str> {
    table.get(key).and_then(|v| v.as_str())
}

fn int_field(
    table: &toml::value::Table,
    key: &str,
    default: u32,
    what: &str,
) -> Result<u32> {
    match table.get(key) {
        None => Ok(default),
        Some(value) => value
            .as_integer()
            .and_then(|i| u32::try_from(i).ok())
            .ok_or_else(|| {
                LocaleError::ParseError(format!("{} of {} is not a small integer", key, what))
            }),
    }
}

fn plural_names(table: &toml::value::Table) -> HashMap<String, String> {
    let mut names = HashMap::new();
    for category in ["zero", "one", "two", "few", "many", "other"] {
        if let Some(name) = str_field(table, category) {
            names.insert(category.to_string(), name.to_string());
        }
    }
    names
}

fn apply_locale_overrides(data: &mut LocaleData, table: &toml::value::Table) {
    if let Some(value) = str_field(table, "decimal") {
        data.symbols.decimal = value.to_string();
    }
    if let Some(value) = str_field(table, "group") {
        data.symbols.group = value.to_string();
    }
    if let Some(value) = str_field(table, "plus") {
        data.symbols.plus = value.to_string();
    }
    if let Some(value) = str_field(table, "minus") {
        data.symbols.minus = value.to_string();
    }
    if let Some(value) = str_field(table, "percent") {
        data.symbols.percent = value.to_string();
    }
    if let Some(value) = str_field(table, "permille") {
        data.symbols.permille = value.to_string();
    }
    if let Some(value) = str_field(table, "exponent") {
        data.symbols.exponent = value.to_string();
    }
    if let Some(value) = str_field(table, "infinity") {
        data.symbols.infinity = value.to_string();
    }
    if let Some(value) = str_field(table, "nan") {
        data.symbols.nan = value.to_string();
    }
    if let Some(value) = table.get("minimum_grouping_digits").and_then(|v| v.as_integer()) {
        data.minimum_grouping_digits = value.max(1) as usize;
    }
    if let Some(value) = str_field(table, "default_numbering_system") {
        data.default_numbering_system = value.to_string();
    }
    if let Some(value) = str_field(table, "native_numbering_system") {
        data.native_numbering_system = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_loading() {
        let context = CldrContext::new().unwrap();
        let locales = context.available_locales();
        assert!(!locales.is_empty(), "should have loaded some locales");

        let en = context.locale("en").unwrap();
        assert_eq!(en.symbols.decimal, ".");
        assert_eq!(en.symbols.group, ",");

        let de = context.locale("de").unwrap();
        assert_eq!(de.symbols.decimal, ",");
        assert_eq!(de.symbols.group, ".");
    }

    #[test]
    fn test_locale_fallback() {
        let context = CldrContext::new().unwrap();
        let en = context.locale("en-US").unwrap();
        assert_eq!(en.id, "en");
        let en = context.locale("en_US").unwrap();
        assert_eq!(en.id, "en");

        assert_eq!(
            context.locale("tlh"),
            Err(FormatError::UnknownLocale("tlh".to_string()))
        );
    }

    #[test]
    fn test_numbering_system_resolution() {
        let context = CldrContext::new().unwrap();
        let hi = context.locale("hi").unwrap();
        let native = context.digit_table(hi, "native").unwrap();
        assert_eq!(native[0], '०');
        let latn = context.digit_table(hi, "latn").unwrap();
        assert_eq!(latn[9], '9');

        assert!(context.digit_table(hi, "roman").is_err());
    }

    #[test]
    fn test_precompiled_styles() {
        let context = CldrContext::new().unwrap();
        let standard = context.style_meta("en", "standard").unwrap();
        assert!(standard.is_standard());
        assert!(context.style_meta("en", "accounting").is_some());
        assert!(context.style_meta("en", "bogus").is_none());
    }

    #[test]
    fn test_currency_table() {
        let context = CldrContext::new().unwrap();
        let jpy = context.currency("JPY").unwrap();
        assert_eq!(jpy.digits, 0);
        assert_eq!(jpy.symbol, "¥");

        let chf = context.currency("CHF").unwrap();
        assert_eq!(chf.cash_rounding, 5);
        assert_eq!(chf.display_name("other"), "Swiss francs");

        assert!(context.currency("XYZ").is_err());
    }
}
