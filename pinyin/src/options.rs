// pinyin/src/options.rs
//
// Per-call rendering options. Loaded from TOML the same way the dictionary
// `Config` is, with every field optional.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::error::ConvertError;
use crate::style::Style;

/// Rendering options for one conversion call.
///
/// Defaults: plain style, unknown characters skipped, default reading only,
/// space separator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Options {
    pub style: Style,

    /// Drop unknown Han characters and non-Han runs from the output.
    pub skip_unknown: bool,

    /// Render every reading of a polyphone instead of the default one.
    pub multi_pronunciation: bool,

    /// Placed between output fields in string mode.
    #[serde(deserialize_with = "separator_from_str")]
    pub separator: char,

    /// Merge adjacent pass-through fields with no separator between them.
    pub keep_unknown_joined: bool,

    /// Pass unknown Han characters through instead of writing a
    /// placeholder.
    pub keep_unknown_han: bool,

    /// Joins the alternatives of one position in multi-pronunciation mode.
    #[serde(deserialize_with = "separator_from_str")]
    pub alternative_separator: char,

    /// Write `ü` as `v` in plain, numbered and letter output.
    pub v_for_umlaut: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            style: Style::Plain,
            skip_unknown: true,
            multi_pronunciation: false,
            separator: ' ',
            keep_unknown_joined: false,
            keep_unknown_han: false,
            alternative_separator: ',',
            v_for_umlaut: false,
        }
    }
}

impl Options {
    /// Default options with the given style.
    pub fn with_style(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Options used for slugs: plain, unknown material dropped, default
    /// readings only, `v` for `ü`.
    pub fn slug(separator: char) -> Self {
        Self {
            style: Style::Plain,
            skip_unknown: true,
            multi_pronunciation: false,
            separator,
            keep_unknown_joined: false,
            keep_unknown_han: false,
            alternative_separator: ',',
            v_for_umlaut: true,
        }
    }

    /// Check the separators. Called before any lookup.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !self.separator.is_ascii() {
            return Err(ConvertError::InvalidOption(format!(
                "separator must be a single ASCII character, got {:?}",
                self.separator
            )));
        }
        if !self.alternative_separator.is_ascii() {
            return Err(ConvertError::InvalidOption(format!(
                "alternative separator must be a single ASCII character, got {:?}",
                self.alternative_separator
            )));
        }
        if self.separator == self.alternative_separator {
            return Err(ConvertError::InvalidOption(format!(
                "separator and alternative separator are both {:?}",
                self.separator
            )));
        }
        Ok(())
    }

    /// Parse a separator given as text (CLI argument, config value).
    ///
    /// Exactly one ASCII character is accepted.
    pub fn parse_separator(raw: &str) -> Result<char, ConvertError> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii() => Ok(ch),
            (Some(ch), None) => Err(ConvertError::InvalidOption(format!(
                "separator must be ASCII, got {:?}",
                ch
            ))),
            (None, _) => Err(ConvertError::InvalidOption(
                "separator must not be empty".to_string(),
            )),
            (Some(_), Some(_)) => Err(ConvertError::InvalidOption(format!(
                "separator must be a single character, got {:?}",
                raw
            ))),
        }
    }

    /// Load options from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConvertError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "rejected options file");
            e
        })
    }

    /// Save options to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConvertError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content)
            .map_err(|e| ConvertError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load options from a TOML string and validate them.
    pub fn from_toml_str(content: &str) -> Result<Self, ConvertError> {
        let options: Options = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Serialize options to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConvertError> {
        toml::to_string_pretty(self).map_err(|e| ConvertError::Config(e.to_string()))
    }
}

fn separator_from_str<'de, D>(deserializer: D) -> Result<char, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Options::parse_separator(&raw).map_err(serde::de::Error::custom)
}
