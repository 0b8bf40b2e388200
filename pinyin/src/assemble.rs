// pinyin/src/assemble.rs
//
// Fields -> final string or array.
//
// `merge_unknown` applies the joined-unknown policy once, on the rendered
// fields; `join` and `to_array` then lay out exactly the fields they are
// given.

use crate::options::Options;
use crate::render::{Field, FieldKind};

/// Join fields with exactly one separator between neighbours.
pub fn join(fields: Vec<Field>, options: &Options) -> String {
    let mut out = String::with_capacity(fields.iter().map(|f| f.text.len() + 1).sum());
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(options.separator);
        }
        out.push_str(&field.text);
    }
    out
}

/// One element per field.
pub fn to_array(fields: Vec<Field>, _options: &Options) -> Vec<String> {
    fields.into_iter().map(|field| field.text).collect()
}

/// Apply `keep_unknown_joined`: merge adjacent literal fields when set,
/// pass the fields through otherwise.
pub fn merge_unknown(fields: Vec<Field>, options: &Options) -> Vec<Field> {
    if options.keep_unknown_joined {
        merge_literals(fields)
    } else {
        fields
    }
}

/// Merge runs of adjacent literal fields into one.
pub fn merge_literals(fields: Vec<Field>) -> Vec<Field> {
    let mut merged: Vec<Field> = Vec::with_capacity(fields.len());
    for field in fields {
        match merged.last_mut() {
            Some(prev) if prev.kind == FieldKind::Literal && field.kind == FieldKind::Literal => {
                prev.text.push_str(&field.text);
            }
            _ => merged.push(field),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Field> {
        vec![
            Field::pinyin("zhong"),
            Field::literal("㐀"),
            Field::literal("..."),
            Field::pinyin("guo"),
        ]
    }

    #[test]
    fn join_inserts_one_separator_between_fields() {
        let opts = Options::default();
        assert_eq!(join(sample(), &opts), "zhong 㐀 ... guo");
        assert_eq!(join(Vec::new(), &opts), "");
    }

    #[test]
    fn joined_literals_merge_before_assembly() {
        let opts = Options {
            keep_unknown_joined: true,
            ..Options::default()
        };
        let merged = merge_unknown(sample(), &opts);
        assert_eq!(join(merged.clone(), &opts), "zhong 㐀... guo");
        assert_eq!(to_array(merged, &opts), ["zhong", "㐀...", "guo"]);

        assert_eq!(merge_unknown(sample(), &Options::default()), sample());
    }

    #[test]
    fn layout_does_not_merge_on_its_own() {
        let opts = Options {
            keep_unknown_joined: true,
            ..Options::default()
        };
        assert_eq!(join(sample(), &opts), "zhong 㐀 ... guo");
        assert_eq!(to_array(sample(), &opts).len(), 4);
    }

    #[test]
    fn pinyin_fields_never_merge() {
        let merged = merge_literals(vec![Field::pinyin("a"), Field::pinyin("b")]);
        assert_eq!(merged.len(), 2);
    }
}
