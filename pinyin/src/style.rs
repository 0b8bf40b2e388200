// pinyin/src/style.rs
//
// Output styles. Each style is a pure function of a syllable and its tone;
// see `tone.rs` for the per-syllable rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a syllable is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// `zhong`
    #[default]
    Plain,
    /// `zhōng`
    Tone,
    /// `zhong1`, digit after every syllable.
    ToneNum,
    /// `zhong1`; for a multi-syllable word the digits go once at the end
    /// of the word: `yinhang22`.
    ToneNumEnd,
    /// `z`
    Letter,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Plain,
        Style::Tone,
        Style::ToneNum,
        Style::ToneNumEnd,
        Style::Letter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Style::Plain => "plain",
            Style::Tone => "tone",
            Style::ToneNum => "tone_num",
            Style::ToneNumEnd => "tone_num_end",
            Style::Letter => "letter",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = String;

    /// Accepts the snake_case names plus the kebab-case spellings used on
    /// the command line (`tone-num-end`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "plain" | "normal" => Ok(Style::Plain),
            "tone" => Ok(Style::Tone),
            "tone_num" | "number" => Ok(Style::ToneNum),
            "tone_num_end" => Ok(Style::ToneNumEnd),
            "letter" | "initial" => Ok(Style::Letter),
            _ => Err(format!(
                "unknown style '{}' (expected one of: plain, tone, tone-num, tone-num-end, letter)",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip_through_from_str() {
        for style in Style::ALL {
            assert_eq!(style.name().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn kebab_case_and_aliases_parse() {
        assert_eq!("tone-num-end".parse::<Style>().unwrap(), Style::ToneNumEnd);
        assert_eq!("Tone-Num".parse::<Style>().unwrap(), Style::ToneNum);
        assert_eq!("initial".parse::<Style>().unwrap(), Style::Letter);
        assert!("pinyin".parse::<Style>().is_err());
    }
}
