//! hanzi-pinyin
//!
//! Chinese to pinyin transliteration on top of `hanzi-core`.
//!
//! Text is segmented by longest dictionary match, so fixed words such as
//! 银行 get their word reading (yín háng) rather than per-character
//! defaults. Output can carry tone marks, tone numbers per syllable or per
//! word, bare syllables or initial letters, as a string or an array.
//!
//! Public API:
//! - `Converter` - the conversion operations (`plain`, `tone`, `tone_num`,
//!   `tone_num_end`, `letter`, each with an `_array` form, plus `slug`)
//! - `Options` / `Style` - per-call rendering options (TOML loadable)
//! - `Field` / `FieldKind` - rendered output pieces and their origin
//! - `ConvertError` - invalid options and dictionary failures
//!
//! The lower-level pipeline stages (`resolver`, `render`, `assemble`,
//! `tone`) are public for callers that want to drive them directly.

pub mod assemble;
pub mod converter;
pub mod error;
pub mod options;
pub mod render;
pub mod resolver;
pub mod style;
pub mod tone;

pub use converter::Converter;
pub use error::ConvertError;
pub use options::Options;
pub use render::{Field, FieldKind};
pub use style::Style;

// Dictionary types callers need to build a custom converter.
pub use hanzi_core::{Config, DictError, Dictionary, DictionaryBuilder};
