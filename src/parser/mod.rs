//! Number-format pattern parsing module
//!
//! This module is responsible for parsing CLDR number-format pattern strings
//! and compiling them into the [`crate::types::PatternMeta`] records that
//! drive the formatter. The main entry point is the `parse_pattern` function.

mod format;
mod sections;
mod tokens;

pub use format::parse_pattern;
