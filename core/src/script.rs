//! Han script classification used by the segmenter.

use std::ops::RangeInclusive;

/// Code point blocks treated as Han.
const HAN_BLOCKS: [RangeInclusive<u32>; 8] = [
    0x3007..=0x3007,
    0x3400..=0x4DBF,   // Extension A
    0x4E00..=0x9FFF,   // Unified Ideographs
    0xF900..=0xFAFF,   // Compatibility Ideographs
    0x20000..=0x2A6DF, // Extension B
    0x2A700..=0x2EE5F, // Extensions C, D, E, F, I
    0x2F800..=0x2FA1F, // Compatibility Supplement
    0x30000..=0x323AF, // Extensions G, H
];

/// True for code points in the CJK ideograph blocks, including the
/// compatibility blocks and U+3007 IDEOGRAPHIC NUMBER ZERO.
///
/// # Example
/// ```
/// use hanzi_core::script::is_han;
///
/// assert!(is_han('中'));
/// assert!(is_han('㐀'));
/// assert!(!is_han('a'));
/// assert!(!is_han('。'));
/// ```
pub fn is_han(ch: char) -> bool {
    let cp = ch as u32;
    HAN_BLOCKS.iter().any(|block| block.contains(&cp))
}

/// Every code point `is_han` accepts, in ascending order.
pub fn han_chars() -> impl Iterator<Item = char> {
    HAN_BLOCKS
        .iter()
        .cloned()
        .flatten()
        .filter_map(char::from_u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_blocks() {
        assert!(is_han('〇'));
        assert!(is_han('\u{20000}'));
        assert!(is_han('\u{2F800}'));
        assert!(!is_han('ā'));
        assert!(!is_han('😊'));
        assert!(!is_han('，'));
        assert!(!is_han('ㄅ'));
    }

    #[test]
    fn han_chars_walks_every_block() {
        let mut count = 0;
        let mut prev = None;
        for ch in han_chars() {
            assert!(is_han(ch));
            assert!(prev < Some(ch));
            prev = Some(ch);
            count += 1;
        }
        assert_eq!(prev, Some('\u{323AF}'));
        assert!(count > 90_000);
    }
}
