// core/src/segmenter.rs
//
// Greedy longest-match segmentation of mixed Han / non-Han text.
//
// At each position the dictionary is asked for its longest key; a hit
// becomes a Word token. A Han code point without any entry becomes a
// one-character UnknownHan token. Everything else accumulates into a single
// Other run until the next Word or UnknownHan token starts.

use std::ops::Range;

use crate::dictionary::Dictionary;
use crate::notation::Reading;
use crate::script::is_han;

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'d> {
    /// A dictionary key, with its readings in preference order.
    Word(&'d [Reading]),
    /// A single Han character the dictionary does not know.
    UnknownHan,
    /// A maximal run of non-Han material (Latin, digits, punctuation,
    /// emoji, whitespace).
    Other,
}

/// A contiguous span of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'t, 'd> {
    /// The original text of the span.
    pub text: &'t str,
    /// Byte offset of the span in the input.
    pub start: usize,
    pub kind: TokenKind<'d>,
}

impl<'t, 'd> Token<'t, 'd> {
    /// Byte range of the span in the input.
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }

    /// Readings of a Word token; empty for the other kinds.
    pub fn readings(&self) -> &'d [Reading] {
        match self.kind {
            TokenKind::Word(readings) => readings,
            TokenKind::UnknownHan | TokenKind::Other => &[],
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self.kind, TokenKind::Word(_))
    }
}

/// Split `text` into tokens.
///
/// Tokens are in input order, never overlap, and their spans cover the
/// whole input, so concatenating their `text` gives `text` back.
///
/// # Example
/// ```
/// use hanzi_core::{segment, Dictionary, TokenKind};
///
/// let dict = Dictionary::from_table_str("银: yin2\n行: xing2,hang2\n银行: yin2 hang2\n").unwrap();
/// let tokens = segment(&dict, "银行ok");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "银行");
/// assert_eq!(tokens[1].kind, TokenKind::Other);
/// ```
pub fn segment<'t, 'd>(dict: &'d Dictionary, text: &'t str) -> Vec<Token<'t, 'd>> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut chars = Vec::with_capacity(text.len());
    let mut offsets = Vec::with_capacity(text.len() + 1);
    for (offset, ch) in text.char_indices() {
        offsets.push(offset);
        chars.push(ch);
    }
    offsets.push(text.len());

    let mut tokens = Vec::new();
    let mut other_start: Option<usize> = None;
    let mut pos = 0;

    let flush_other = |tokens: &mut Vec<Token<'t, 'd>>, other_start: &mut Option<usize>, end: usize| {
        if let Some(begin) = other_start.take() {
            let (s, e) = (offsets[begin], offsets[end]);
            tokens.push(Token {
                text: &text[s..e],
                start: s,
                kind: TokenKind::Other,
            });
        }
    };

    while pos < chars.len() {
        if let Some(m) = dict.lookup(&chars, pos) {
            flush_other(&mut tokens, &mut other_start, pos);
            let (s, e) = (offsets[pos], offsets[pos + m.len]);
            tokens.push(Token {
                text: &text[s..e],
                start: s,
                kind: TokenKind::Word(m.readings),
            });
            pos += m.len;
        } else if is_han(chars[pos]) {
            flush_other(&mut tokens, &mut other_start, pos);
            let (s, e) = (offsets[pos], offsets[pos + 1]);
            tokens.push(Token {
                text: &text[s..e],
                start: s,
                kind: TokenKind::UnknownHan,
            });
            pos += 1;
        } else {
            other_start.get_or_insert(pos);
            pos += 1;
        }
    }
    flush_other(&mut tokens, &mut other_start, chars.len());

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> Dictionary {
        Dictionary::from_table_str(
            "中: zhong1,zhong4\n国: guo2\n人: ren2\n银: yin2\n行: xing2,hang2\n\
             长: chang2,zhang3\n银行: yin2 hang2\n行长: hang2 zhang3\n",
        )
        .unwrap()
    }

    fn kinds<'t, 'd>(tokens: &[Token<'t, 'd>]) -> Vec<(&'t str, &'static str)> {
        tokens
            .iter()
            .map(|t| {
                let k = match t.kind {
                    TokenKind::Word(_) => "word",
                    TokenKind::UnknownHan => "unknown",
                    TokenKind::Other => "other",
                };
                (t.text, k)
            })
            .collect()
    }

    #[test]
    fn empty_input() {
        assert!(segment(&demo(), "").is_empty());
    }

    #[test]
    fn groups_non_han_runs() {
        let dict = demo();
        let tokens = segment(&dict, "中国人...ok 😊");
        assert_eq!(
            kinds(&tokens),
            vec![("中", "word"), ("国", "word"), ("人", "word"), ("...ok 😊", "other")]
        );
    }

    #[test]
    fn unknown_han_is_its_own_token() {
        let dict = demo();
        let tokens = segment(&dict, "a好好b");
        assert_eq!(
            kinds(&tokens),
            vec![("a", "other"), ("好", "unknown"), ("好", "unknown"), ("b", "other")]
        );
    }

    #[test]
    fn greedy_longest_match() {
        let dict = demo();
        // 银行 wins at 0, leaving 长 alone even though 行长 is also a key.
        let tokens = segment(&dict, "银行长");
        assert_eq!(kinds(&tokens), vec![("银行", "word"), ("长", "word")]);
        assert_eq!(tokens[0].readings()[0].to_string(), "yin2 hang2");
    }

    #[test]
    fn spans_are_contiguous() {
        let dict = demo();
        let text = "中国,好 行长!";
        let tokens = segment(&dict, text);
        let mut next = 0;
        for t in &tokens {
            assert_eq!(t.span().start, next);
            assert_eq!(&text[t.span()], t.text);
            next = t.span().end;
        }
        assert_eq!(next, text.len());
    }
}
