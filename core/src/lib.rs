//! hanzi-core
//!
//! Reading dictionary, table loader and segmenter shared by the
//! romanization crates (hanzi-pinyin).
//!
//! The dictionary is an `fst` index over Han keys with ordered reading
//! payloads, built once from line-oriented reading tables and never
//! mutated afterwards.
//!
//! Public API:
//! - `Dictionary` / `DictionaryBuilder` - immutable store and its builder
//! - `Reading`, `Syllable`, `Tone` - reading data and the notation parser
//! - `segment` / `Token` / `TokenKind` - longest-match segmentation
//! - `Config` - dictionary configuration (TOML)
//! - `DictError` - build/load failures
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod dictionary;
pub use dictionary::{Dictionary, DictionaryBuilder, Match, DEFAULT_MAX_WORD_LEN};

pub mod error;
pub use error::DictError;

pub mod loader;

pub mod notation;
pub use notation::{NotationError, Reading, Syllable, Tone};

pub mod script;
pub use script::{han_chars, is_han};

pub mod segmenter;
pub use segmenter::{segment, Token, TokenKind};

/// Dictionary configuration.
///
/// Controls which reading tables are loaded and how long a dictionary word
/// may be. Rendering options live in the romanization crate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Longest key accepted, in characters. Also bounds every lookup.
    pub max_word_len: usize,
    /// Load the tables compiled into the crate before `tables`.
    pub embedded_tables: bool,
    /// Extra reading tables, loaded in order. Readings for a key already
    /// present are appended after the existing ones.
    pub tables: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_word_len: DEFAULT_MAX_WORD_LEN,
            embedded_tables: true,
            tables: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, DictError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DictError::io(path, e))?;
        Self::from_toml_str(&content).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "rejected dictionary config");
            DictError::Config {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), DictError> {
        let path = path.as_ref();
        let content = self.to_toml_string().map_err(|e| DictError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| DictError::io(path, e))
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
