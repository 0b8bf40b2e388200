// core/src/loader.rs
//
// Line parser for reading tables.
//
// Accepted line shapes:
//   U+4E2D: zhōng,zhòng  # 中      (pinyin-data)
//   银行: yín háng                 (phrase-pinyin-data)
//   行: xing2,hang2                (numeric digits)
//
// A line holds one key and a comma-separated list of alternatives; each
// alternative has one syllable per key character. Everything after `#` is a
// comment.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::notation::Reading;

static CODE_POINT_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[Uu]\+([0-9A-Fa-f]{4,6})$").expect("code point pattern is valid"));

/// One parsed table line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLine {
    pub key: String,
    pub readings: Vec<Reading>,
}

/// Parse a table key: either literal characters or a `U+XXXX` code point.
pub fn parse_key(raw: &str) -> Result<String, String> {
    let raw = raw.trim();
    if let Some(caps) = CODE_POINT_KEY.captures(raw) {
        let cp = u32::from_str_radix(&caps[1], 16).map_err(|e| format!("bad code point: {}", e))?;
        return char::from_u32(cp)
            .map(String::from)
            .ok_or_else(|| format!("U+{:X} is not a valid character", cp));
    }
    if raw.is_empty() {
        return Err("empty key".to_string());
    }
    if raw.chars().any(char::is_whitespace) {
        return Err(format!("key {:?} contains whitespace", raw));
    }
    Ok(raw.to_string())
}

/// Parse one line. Blank and comment-only lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<TableLine>, String> {
    let content = match line.split_once('#') {
        Some((before, _comment)) => before,
        None => line,
    };
    let content = content.trim().trim_start_matches('\u{feff}');
    if content.is_empty() {
        return Ok(None);
    }

    let (key_part, value_part) = content
        .split_once(':')
        .ok_or_else(|| format!("expected `key: readings`, got {:?}", content))?;
    let key = parse_key(key_part)?;
    let width = key.chars().count();

    let mut readings = Vec::new();
    for alt in value_part.split(',') {
        let alt = alt.trim();
        if alt.is_empty() {
            continue;
        }
        let reading = Reading::parse(alt).map_err(|e| e.to_string())?;
        if reading.len() != width {
            return Err(format!(
                "reading {:?} has {} syllable(s) for the {}-character key {:?}",
                alt,
                reading.len(),
                width,
                key
            ));
        }
        readings.push(reading);
    }
    if readings.is_empty() {
        return Err(format!("no readings for key {:?}", key));
    }

    Ok(Some(TableLine { key, readings }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::{Syllable, Tone};

    #[test]
    fn parses_code_point_lines() {
        let line = parse_line("U+4E2D: zhōng,zhòng  # 中").unwrap().unwrap();
        assert_eq!(line.key, "中");
        assert_eq!(line.readings.len(), 2);
        assert_eq!(line.readings[1].syllables[0], Syllable::new("zhong", Tone::Fourth));
    }

    #[test]
    fn parses_phrase_lines() {
        let line = parse_line("银行: yín háng").unwrap().unwrap();
        assert_eq!(line.key, "银行");
        assert_eq!(line.readings.len(), 1);
        assert_eq!(line.readings[0].to_string(), "yin2 hang2");
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   # only a comment").unwrap(), None);
        assert_eq!(parse_line("\u{feff}").unwrap(), None);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_line("中 zhong1").is_err());
        assert!(parse_line("中:").is_err());
        assert!(parse_line("银行: yin2").is_err());
        assert!(parse_line("中: zhong9").is_err());
        assert!(parse_line("U+110000: a").is_err());
        assert!(parse_line("中 国: zhong1 guo2").is_err());
    }
}
