//! JSON form of the Doc IR.
//!
//! Docs serialize to the object shape of the JavaScript pretty-printer's
//! builders: `{ "type": "group", "contents": ..., "break": false }`. Text
//! stays a bare JSON string. Alignment amounts follow the same encoding:
//! a number for a width, `"-Infinity"` for back-to-root and
//! `{ "type": "root" }` for mark-as-root.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::doc::{AlignKind, Doc, LineKind};

impl Serialize for Doc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map = match self {
            Doc::Text(s) => return serializer.serialize_str(s),
            Doc::Concat(parts) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "concat")?;
                map.serialize_entry("parts", parts)?;
                map
            }
            Doc::Indent(contents) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "indent")?;
                map.serialize_entry("contents", contents)?;
                map
            }
            Doc::Align { contents, kind } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "align")?;
                map.serialize_entry("contents", contents)?;
                map.serialize_entry("n", kind)?;
                map
            }
            Doc::Group {
                contents,
                should_break,
                expanded_states,
            } => {
                let len = if expanded_states.is_some() { 4 } else { 3 };
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("type", "group")?;
                map.serialize_entry("contents", contents)?;
                map.serialize_entry("break", should_break)?;
                if let Some(states) = expanded_states {
                    map.serialize_entry("expandedStates", states)?;
                }
                map
            }
            Doc::Fill(parts) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "fill")?;
                map.serialize_entry("parts", parts)?;
                map
            }
            Doc::IfBreak {
                break_contents,
                flat_contents,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "if-break")?;
                map.serialize_entry("breakContents", break_contents)?;
                map.serialize_entry("flatContents", flat_contents)?;
                map
            }
            Doc::LineSuffix(contents) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "line-suffix")?;
                map.serialize_entry("contents", contents)?;
                map
            }
            Doc::Line(kind) => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", "line")?;
                match kind {
                    LineKind::Normal => {}
                    LineKind::Soft => map.serialize_entry("soft", &true)?,
                    LineKind::Hard => map.serialize_entry("hard", &true)?,
                    LineKind::Literal => {
                        map.serialize_entry("hard", &true)?;
                        map.serialize_entry("literal", &true)?;
                    }
                }
                map
            }
            Doc::BreakParent => type_only(serializer, "break-parent")?,
            Doc::LineSuffixBoundary => type_only(serializer, "line-suffix-boundary")?,
            Doc::Trim => type_only(serializer, "trim")?,
        };
        map.end()
    }
}

fn type_only<S: Serializer>(serializer: S, ty: &str) -> Result<S::SerializeMap, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("type", ty)?;
    Ok(map)
}

impl Serialize for AlignKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AlignKind::Width(n) => serializer.serialize_i32(*n),
            AlignKind::ToRoot => serializer.serialize_str("-Infinity"),
            AlignKind::MarkRoot => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", "root")?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::doc::*;

    fn to_json(doc: &Doc) -> serde_json::Value {
        serde_json::to_value(doc).unwrap()
    }

    #[test]
    fn text_is_a_bare_string() {
        assert_eq!(to_json(&text("foo")), json!("foo"));
    }

    #[test]
    fn group_with_lines() {
        let doc = group(concat([text("a"), LINE, SOFTLINE]));
        assert_eq!(
            to_json(&doc),
            json!({
                "type": "group",
                "contents": {
                    "type": "concat",
                    "parts": ["a", { "type": "line" }, { "type": "line", "soft": true }],
                },
                "break": false,
            })
        );
    }

    #[test]
    fn hardline_and_literalline() {
        assert_eq!(
            to_json(&hardline()),
            json!({
                "type": "concat",
                "parts": [{ "type": "line", "hard": true }, { "type": "break-parent" }],
            })
        );
        assert_eq!(
            to_json(&literalline()),
            json!({
                "type": "concat",
                "parts": [
                    { "type": "line", "hard": true, "literal": true },
                    { "type": "break-parent" },
                ],
            })
        );
    }

    #[test]
    fn align_amounts() {
        assert_eq!(to_json(&dedent(text("x")))["n"], json!(-1));
        assert_eq!(to_json(&dedent_to_root(text("x")))["n"], json!("-Infinity"));
        assert_eq!(to_json(&mark_as_root(text("x")))["n"], json!({ "type": "root" }));
    }

    #[test]
    fn conditional_group_has_expanded_states() {
        let doc = conditional_group(vec![text("a"), text("b")]).unwrap();
        assert_eq!(
            to_json(&doc),
            json!({
                "type": "group",
                "contents": "a",
                "break": false,
                "expandedStates": ["a", "b"],
            })
        );
    }

    #[test]
    fn wrappers_and_markers() {
        let doc = concat([
            if_break(text("a"), text("b")),
            line_suffix(text("c")),
            fill([text("d")]),
            LINE_SUFFIX_BOUNDARY,
            TRIM,
        ]);
        assert_eq!(
            to_json(&doc)["parts"],
            json!([
                { "type": "if-break", "breakContents": "a", "flatContents": "b" },
                { "type": "line-suffix", "contents": "c" },
                { "type": "fill", "parts": ["d"] },
                { "type": "line-suffix-boundary" },
                { "type": "trim" },
            ])
        );
    }
}
