pub mod formatter;
pub mod locale;
pub mod parser;
pub mod plural;
pub mod types;

pub use formatter::{format_number, format_with_meta};
pub use locale::{CldrContext, Currency, LocaleData, LocaleError, LocaleSymbols};
pub use parser::parse_pattern;
pub use types::*;
