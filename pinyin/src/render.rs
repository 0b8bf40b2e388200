// pinyin/src/render.rs
//
// Token -> output fields.
//
// A Word token with one reading gives one field per syllable. ToneNumEnd is
// the exception: the word is a single field with the tone digits after the
// last syllable. A token with several readings (multi mode) gives a single
// field: each reading written as one word, duplicates dropped, joined by the
// alternative separator. Unknown material is dropped, kept or replaced by a
// placeholder according to the options.

use hanzi_core::{Reading, Token, TokenKind};

use crate::options::Options;
use crate::style::Style;
use crate::tone::render_syllable;

/// Origin of an output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Converted from a dictionary reading.
    Pinyin,
    /// Input text passed through unchanged.
    Literal,
    /// Stands in for an unknown Han character.
    Placeholder,
}

/// One piece of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub text: String,
    pub kind: FieldKind,
}

impl Field {
    pub fn pinyin<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            kind: FieldKind::Pinyin,
        }
    }

    pub fn literal<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            kind: FieldKind::Literal,
        }
    }

    pub fn placeholder<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            kind: FieldKind::Placeholder,
        }
    }

    /// True if the field came from the dictionary.
    pub fn is_converted(&self) -> bool {
        self.kind == FieldKind::Pinyin
    }
}

/// Render one token with its resolved readings.
pub fn render(token: &Token<'_, '_>, readings: &[Reading], options: &Options) -> Vec<Field> {
    match token.kind {
        TokenKind::Word(_) => render_word(readings, options),
        TokenKind::UnknownHan if options.skip_unknown => Vec::new(),
        TokenKind::UnknownHan if options.keep_unknown_han => vec![Field::literal(token.text)],
        TokenKind::UnknownHan => vec![Field::placeholder(options.separator.to_string())],
        TokenKind::Other if options.skip_unknown => Vec::new(),
        TokenKind::Other => vec![Field::literal(token.text)],
    }
}

fn render_word(readings: &[Reading], options: &Options) -> Vec<Field> {
    match readings {
        [] => Vec::new(),
        [reading] if options.style != Style::ToneNumEnd => reading
            .syllables
            .iter()
            .map(|syllable| {
                Field::pinyin(render_syllable(syllable, options.style, options.v_for_umlaut))
            })
            .collect(),
        _ => {
            let mut alternatives: Vec<String> = Vec::with_capacity(readings.len());
            for reading in readings {
                let rendered = render_reading(reading, options);
                if !alternatives.contains(&rendered) {
                    alternatives.push(rendered);
                }
            }
            let alt = options.alternative_separator.to_string();
            vec![Field::pinyin(alternatives.join(&alt))]
        }
    }
}

/// A whole reading written as one word: `zhāoyáng`, `zhao1yang2`, `zy`.
fn render_reading(reading: &Reading, options: &Options) -> String {
    if options.style == Style::ToneNumEnd {
        return tone_num_end(reading, options.v_for_umlaut);
    }
    reading
        .syllables
        .iter()
        .map(|syllable| render_syllable(syllable, options.style, options.v_for_umlaut))
        .collect()
}

/// `yin2 hang2` -> `yinhang22`.
fn tone_num_end(reading: &Reading, v_for_umlaut: bool) -> String {
    let mut out: String = reading
        .syllables
        .iter()
        .map(|syllable| render_syllable(syllable, Style::Plain, v_for_umlaut))
        .collect();
    out.extend(reading.syllables.iter().map(|syllable| syllable.tone.digit()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanzi_core::{segment, Dictionary};

    fn dict() -> Dictionary {
        Dictionary::from_table_str(
            "银: yin2\n行: xing2,hang2\n银行: yin2 hang2\n中: zhong1,zhong4\n\
             朝: zhao1,chao2\n阳: yang2\n朝阳: zhao1 yang2,chao2 yang2\n",
        )
        .unwrap()
    }

    fn texts(fields: &[Field]) -> Vec<&str> {
        fields.iter().map(|f| f.text.as_str()).collect()
    }

    #[test]
    fn word_renders_one_field_per_syllable() {
        let dict = dict();
        let tokens = segment(&dict, "银行");
        let opts = Options::with_style(Style::Tone);
        let fields = render(&tokens[0], &tokens[0].readings()[..1], &opts);
        assert_eq!(texts(&fields), ["yín", "háng"]);
        assert!(fields.iter().all(Field::is_converted));
    }

    #[test]
    fn tone_num_end_word_is_one_field() {
        let dict = dict();
        let tokens = segment(&dict, "银行");
        let opts = Options::with_style(Style::ToneNumEnd);
        let fields = render(&tokens[0], &tokens[0].readings()[..1], &opts);
        assert_eq!(texts(&fields), ["yinhang22"]);
    }

    #[test]
    fn multi_readings_share_a_field() {
        let dict = dict();
        let tokens = segment(&dict, "中");
        let opts = Options::with_style(Style::ToneNum);
        let fields = render(&tokens[0], tokens[0].readings(), &opts);
        assert_eq!(texts(&fields), ["zhong1,zhong4"]);
    }

    #[test]
    fn multi_readings_drop_rendered_duplicates() {
        let dict = dict();
        let tokens = segment(&dict, "中");
        let fields = render(&tokens[0], tokens[0].readings(), &Options::default());
        assert_eq!(texts(&fields), ["zhong"]);
    }

    #[test]
    fn multi_reading_word_keeps_readings_whole() {
        let dict = dict();
        let tokens = segment(&dict, "朝阳");
        assert_eq!(tokens.len(), 1);
        let readings = tokens[0].readings();

        let cases = [
            (Style::ToneNum, "zhao1yang2,chao2yang2"),
            (Style::Tone, "zhāoyáng,cháoyáng"),
            (Style::Plain, "zhaoyang,chaoyang"),
            (Style::ToneNumEnd, "zhaoyang12,chaoyang22"),
            (Style::Letter, "zy,cy"),
        ];
        for (style, expected) in cases {
            let fields = render(&tokens[0], readings, &Options::with_style(style));
            assert_eq!(texts(&fields), [expected], "{}", style);
        }

        // With only the default reading the syllables stay separate.
        let fields = render(&tokens[0], &readings[..1], &Options::with_style(Style::Tone));
        assert_eq!(texts(&fields), ["zhāo", "yáng"]);
    }

    #[test]
    fn unknown_policies() {
        let dict = dict();
        let tokens = segment(&dict, "㐀!");
        let skip = Options::default();
        assert!(render(&tokens[0], &[], &skip).is_empty());
        assert!(render(&tokens[1], &[], &skip).is_empty());

        let placeholder = Options {
            skip_unknown: false,
            separator: '-',
            ..Options::default()
        };
        assert_eq!(
            render(&tokens[0], &[], &placeholder),
            [Field::placeholder("-")]
        );
        assert_eq!(render(&tokens[1], &[], &placeholder), [Field::literal("!")]);

        let keep = Options {
            skip_unknown: false,
            keep_unknown_han: true,
            ..Options::default()
        };
        assert_eq!(render(&tokens[0], &[], &keep), [Field::literal("㐀")]);
    }
}
