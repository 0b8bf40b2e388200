//! Pinyin reading types and the parser for written syllables.
//!
//! Readings are stored toneless with a separate [`Tone`], so every output
//! style can be derived from the same data. The parser accepts the notations
//! found in published reading tables:
//!
//! - tone marks: `zhōng`, `lǜ`, `ḿ`, `ê̄`
//! - tone digits: `zhong1`, `lv4`, `nu:3`, `de5` (`0` is also neutral)
//! - bare syllables, read as neutral tone: `de`

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

static SYLLABLE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zêü]+$").expect("syllable pattern is valid"));

/// One of the four Mandarin tones or the neutral tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tone {
    First,
    Second,
    Third,
    Fourth,
    Neutral,
}

impl Tone {
    /// Tone from its conventional number. `5` and `0` are both neutral.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Tone::First),
            2 => Some(Tone::Second),
            3 => Some(Tone::Third),
            4 => Some(Tone::Fourth),
            0 | 5 => Some(Tone::Neutral),
            _ => None,
        }
    }

    /// Tone number, 1 to 5.
    pub fn number(self) -> u8 {
        match self {
            Tone::First => 1,
            Tone::Second => 2,
            Tone::Third => 3,
            Tone::Fourth => 4,
            Tone::Neutral => 5,
        }
    }

    /// ASCII digit for this tone.
    pub fn digit(self) -> char {
        (b'0' + self.number()) as char
    }

    pub fn is_neutral(self) -> bool {
        self == Tone::Neutral
    }
}

/// A toneless syllable and its tone, e.g. (`zhong`, 1).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syllable {
    /// Lowercase syllable without tone marks. `ü` and `ê` are kept as such.
    pub text: String,
    pub tone: Tone,
}

impl Syllable {
    pub fn new<T: Into<String>>(text: T, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    /// Parse one written syllable in any supported notation.
    ///
    /// ```
    /// use hanzi_core::notation::{Syllable, Tone};
    ///
    /// assert_eq!(Syllable::parse("zhōng").unwrap(), Syllable::new("zhong", Tone::First));
    /// assert_eq!(Syllable::parse("lv4").unwrap(), Syllable::new("lü", Tone::Fourth));
    /// assert_eq!(Syllable::parse("de").unwrap(), Syllable::new("de", Tone::Neutral));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, NotationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NotationError::Empty);
        }
        let lowered = trimmed.to_lowercase().replace("u:", "ü").replace('v', "ü");

        let (body, digit_tone) = match lowered.chars().next_back() {
            Some(last) if last.is_ascii_digit() => {
                let n = last as u8 - b'0';
                let tone = Tone::from_number(n).ok_or(NotationError::BadToneDigit(last))?;
                (&lowered[..lowered.len() - 1], Some(tone))
            }
            _ => (lowered.as_str(), None),
        };

        let mut mark_tone = None;
        let mut stripped = String::with_capacity(body.len());
        for ch in body.nfd() {
            let tone = match ch {
                '\u{0304}' => Tone::First,
                '\u{0301}' => Tone::Second,
                '\u{030C}' => Tone::Third,
                '\u{0300}' => Tone::Fourth,
                _ => {
                    stripped.push(ch);
                    continue;
                }
            };
            if mark_tone.replace(tone).is_some() {
                return Err(NotationError::MultipleTones(trimmed.to_string()));
            }
        }
        let text: String = stripped.nfc().collect();

        if !SYLLABLE_SHAPE.is_match(&text) {
            return Err(NotationError::Shape(trimmed.to_string()));
        }

        let tone = match (digit_tone, mark_tone) {
            (Some(_), Some(_)) => return Err(NotationError::MultipleTones(trimmed.to_string())),
            (Some(t), None) | (None, Some(t)) => t,
            (None, None) => Tone::Neutral,
        };
        Ok(Syllable { text, tone })
    }
}

impl fmt::Display for Syllable {
    /// Numeric notation, the form accepted back by [`Syllable::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.text, self.tone.digit())
    }
}

/// One pronunciation of a dictionary key: a syllable per key character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reading {
    pub syllables: Vec<Syllable>,
}

impl Reading {
    pub fn new(syllables: Vec<Syllable>) -> Self {
        Self { syllables }
    }

    /// Parse a whitespace-separated syllable sequence such as `yín háng`.
    pub fn parse(raw: &str) -> Result<Self, NotationError> {
        let syllables = raw
            .split_whitespace()
            .map(Syllable::parse)
            .collect::<Result<Vec<_>, _>>()?;
        if syllables.is_empty() {
            return Err(NotationError::Empty);
        }
        Ok(Self { syllables })
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, syl) in self.syllables.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", syl)?;
        }
        Ok(())
    }
}

/// Why a written syllable was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("empty syllable")]
    Empty,
    #[error("tone digit {0:?} is not in 0-5")]
    BadToneDigit(char),
    #[error("syllable {0:?} carries more than one tone")]
    MultipleTones(String),
    #[error("{0:?} is not a pinyin syllable")]
    Shape(String),
}
