use hanzi_core::{Reading, Token, TokenKind};

/// Readings to render for `token`.
///
/// Word tokens give their default reading, or every reading in dictionary
/// order when `multi` is set. Unknown and non-Han tokens have none.
pub fn resolve<'d>(token: &Token<'_, 'd>, multi: bool) -> &'d [Reading] {
    match token.kind {
        TokenKind::Word(readings) if multi => readings,
        TokenKind::Word(readings) => &readings[..readings.len().min(1)],
        TokenKind::UnknownHan | TokenKind::Other => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanzi_core::{segment, Dictionary};

    #[test]
    fn default_reading_unless_multi() {
        let dict = Dictionary::from_table_str("行: xing2,hang2\n").unwrap();
        let tokens = segment(&dict, "行a");
        assert_eq!(resolve(&tokens[0], false).len(), 1);
        assert_eq!(resolve(&tokens[0], false)[0].to_string(), "xing2");
        assert_eq!(resolve(&tokens[0], true).len(), 2);
        assert!(resolve(&tokens[1], true).is_empty());
    }
}
