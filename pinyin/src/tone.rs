// pinyin/src/tone.rs
//
// Per-syllable rendering for every output style.
//
// Tone-mark placement:
//   a, then e / ê, then o; in `iu` and `ui` the second vowel; then i, u, ü.
//   Syllables without a vowel (m, n, ng, hm, hng) carry the mark on their
//   first m or n. The neutral tone is unmarked.

use hanzi_core::{Syllable, Tone};
use phf::phf_map;
use unicode_normalization::UnicodeNormalization;

use crate::style::Style;

/// Precomposed vowels for tones 1 to 4.
static MARKED_VOWELS: phf::Map<char, [char; 4]> = phf_map! {
    'a' => ['ā', 'á', 'ǎ', 'à'],
    'e' => ['ē', 'é', 'ě', 'è'],
    'i' => ['ī', 'í', 'ǐ', 'ì'],
    'o' => ['ō', 'ó', 'ǒ', 'ò'],
    'u' => ['ū', 'ú', 'ǔ', 'ù'],
    'ü' => ['ǖ', 'ǘ', 'ǚ', 'ǜ'],
};

/// Combining marks for tones 1 to 4, used where no precomposed letter
/// covers every tone (ê, m, n).
static COMBINING_MARKS: phf::Map<u8, char> = phf_map! {
    1u8 => '\u{0304}',
    2u8 => '\u{0301}',
    3u8 => '\u{030C}',
    4u8 => '\u{0300}',
};

/// Render one syllable in `style`.
///
/// `ToneNumEnd` renders like `ToneNum` here; moving the digits to the end
/// of a word happens in the renderer.
pub fn render_syllable(syllable: &Syllable, style: Style, v_for_umlaut: bool) -> String {
    match style {
        Style::Plain => plain(syllable, v_for_umlaut),
        Style::Tone => with_tone_mark(syllable),
        Style::ToneNum | Style::ToneNumEnd => {
            let mut out = plain(syllable, v_for_umlaut);
            out.push(syllable.tone.digit());
            out
        }
        Style::Letter => letter(syllable, v_for_umlaut),
    }
}

/// The syllable without any tone information.
pub fn plain(syllable: &Syllable, v_for_umlaut: bool) -> String {
    if v_for_umlaut {
        syllable.text.replace('ü', "v")
    } else {
        syllable.text.clone()
    }
}

/// First letter of the syllable. `ê` is written `e`.
pub fn letter(syllable: &Syllable, v_for_umlaut: bool) -> String {
    match syllable.text.chars().next() {
        Some('ê') => "e".to_string(),
        Some('ü') if v_for_umlaut => "v".to_string(),
        Some(ch) => ch.to_string(),
        None => String::new(),
    }
}

/// The syllable with a diacritic tone mark.
pub fn with_tone_mark(syllable: &Syllable) -> String {
    let tone = match syllable.tone {
        Tone::Neutral => return syllable.text.clone(),
        other => other.number(),
    };
    let chars: Vec<char> = syllable.text.chars().collect();
    let Some(pos) = mark_position(&chars) else {
        return syllable.text.clone();
    };

    let mut out = String::with_capacity(syllable.text.len() + 2);
    for (i, &ch) in chars.iter().enumerate() {
        if i != pos {
            out.push(ch);
            continue;
        }
        match MARKED_VOWELS.get(&ch) {
            Some(forms) => out.push(forms[usize::from(tone - 1)]),
            None => {
                out.push(ch);
                if let Some(mark) = COMBINING_MARKS.get(&tone) {
                    out.push(*mark);
                }
            }
        }
    }
    out.nfc().collect()
}

/// Index of the character that carries the tone mark.
fn mark_position(chars: &[char]) -> Option<usize> {
    let find = |target: char| chars.iter().position(|&c| c == target);

    if let Some(i) = find('a') {
        return Some(i);
    }
    if let Some(i) = chars.iter().position(|&c| c == 'e' || c == 'ê') {
        return Some(i);
    }
    if let Some(i) = find('o') {
        return Some(i);
    }
    if let Some(i) = chars
        .windows(2)
        .position(|w| (w[0] == 'i' && w[1] == 'u') || (w[0] == 'u' && w[1] == 'i'))
    {
        return Some(i + 1);
    }
    for vowel in ['i', 'u', 'ü'] {
        if let Some(i) = find(vowel) {
            return Some(i);
        }
    }
    chars.iter().position(|&c| c == 'm' || c == 'n')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syl(text: &str, tone: u8) -> Syllable {
        Syllable::new(text, Tone::from_number(tone).unwrap())
    }

    #[test]
    fn marks_follow_vowel_priority() {
        assert_eq!(with_tone_mark(&syl("zhong", 1)), "zhōng");
        assert_eq!(with_tone_mark(&syl("hao", 3)), "hǎo");
        assert_eq!(with_tone_mark(&syl("xie", 4)), "xiè");
        assert_eq!(with_tone_mark(&syl("lou", 2)), "lóu");
        assert_eq!(with_tone_mark(&syl("liu", 2)), "liú");
        assert_eq!(with_tone_mark(&syl("gui", 4)), "guì");
        assert_eq!(with_tone_mark(&syl("lü", 4)), "lǜ");
        assert_eq!(with_tone_mark(&syl("nüe", 4)), "nüè");
        assert_eq!(with_tone_mark(&syl("xi", 1)), "xī");
    }

    #[test]
    fn syllables_without_vowels_mark_the_nasal() {
        assert_eq!(with_tone_mark(&syl("m", 2)), "ḿ");
        assert_eq!(with_tone_mark(&syl("n", 3)), "ň");
        assert_eq!(with_tone_mark(&syl("ng", 4)), "ǹg");
        assert_eq!(with_tone_mark(&syl("hm", 1)), "hm\u{0304}");
        assert_eq!(with_tone_mark(&syl("hng", 2)), "hńg");
    }

    #[test]
    fn e_circumflex_takes_a_combining_mark() {
        assert_eq!(with_tone_mark(&syl("ê", 2)), "ế");
        assert_eq!(with_tone_mark(&syl("ê", 1)), "ê\u{0304}");
    }

    #[test]
    fn neutral_tone_is_unmarked_and_numbered_five() {
        let de = syl("de", 5);
        assert_eq!(with_tone_mark(&de), "de");
        assert_eq!(render_syllable(&de, Style::ToneNum, false), "de5");
    }

    #[test]
    fn styles_render_umlaut_as_configured() {
        let lv = syl("lü", 4);
        assert_eq!(render_syllable(&lv, Style::Plain, false), "lü");
        assert_eq!(render_syllable(&lv, Style::Plain, true), "lv");
        assert_eq!(render_syllable(&lv, Style::ToneNum, true), "lv4");
        assert_eq!(render_syllable(&lv, Style::Tone, true), "lǜ");
        assert_eq!(render_syllable(&lv, Style::Letter, false), "l");
    }

    #[test]
    fn letter_of_e_circumflex_is_ascii() {
        assert_eq!(letter(&syl("ê", 2), false), "e");
    }
}
