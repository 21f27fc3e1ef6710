//! Break propagation pre-pass.
//!
//! A `BreakParent` marks its innermost enclosing group as broken, and a
//! broken group marks its own parent group in turn. Groups with
//! `expanded_states` are never broken this way: their alternatives decide
//! for themselves.

use crate::doc::Doc;

/// Return a copy of `doc` with forced breaks propagated to enclosing groups.
///
/// The input is left untouched.
pub fn propagate_breaks(doc: &Doc) -> Doc {
    propagate(doc).0
}

/// Returns the rewritten doc and whether it forces its enclosing group to
/// break.
fn propagate(doc: &Doc) -> (Doc, bool) {
    match doc {
        Doc::BreakParent => (Doc::BreakParent, true),

        Doc::Group {
            contents,
            should_break,
            expanded_states,
        } => {
            let (contents, expanded_states, child_breaks) = match expanded_states {
                Some(states) => {
                    let (states, breaks) = propagate_all(states);
                    let first = states.first().cloned().unwrap_or_else(|| propagate(contents).0);
                    (first, Some(states), breaks)
                }
                None => {
                    let (contents, breaks) = propagate(contents);
                    (contents, None, breaks)
                }
            };
            let should_break = *should_break || (child_breaks && expanded_states.is_none());
            let group = Doc::Group {
                contents: Box::new(contents),
                should_break,
                expanded_states,
            };
            (group, should_break)
        }

        Doc::Concat(parts) => {
            let (parts, breaks) = propagate_all(parts);
            (Doc::Concat(parts), breaks)
        }
        Doc::Fill(parts) => {
            let (parts, breaks) = propagate_all(parts);
            (Doc::Fill(parts), breaks)
        }
        Doc::Indent(contents) => {
            let (contents, breaks) = propagate(contents);
            (Doc::Indent(Box::new(contents)), breaks)
        }
        Doc::Align { contents, kind } => {
            let (contents, breaks) = propagate(contents);
            let align = Doc::Align {
                contents: Box::new(contents),
                kind: *kind,
            };
            (align, breaks)
        }
        Doc::LineSuffix(contents) => {
            let (contents, breaks) = propagate(contents);
            (Doc::LineSuffix(Box::new(contents)), breaks)
        }
        // Both branches are visited, like the rest of the tree.
        Doc::IfBreak {
            break_contents,
            flat_contents,
        } => {
            let (break_contents, break_breaks) = propagate(break_contents);
            let (flat_contents, flat_breaks) = propagate(flat_contents);
            let if_break = Doc::IfBreak {
                break_contents: Box::new(break_contents),
                flat_contents: Box::new(flat_contents),
            };
            (if_break, break_breaks || flat_breaks)
        }

        Doc::Text(_) | Doc::Line(_) | Doc::LineSuffixBoundary | Doc::Trim => (doc.clone(), false),
    }
}

fn propagate_all(docs: &[Doc]) -> (Vec<Doc>, bool) {
    let mut breaks = false;
    let docs = docs
        .iter()
        .map(|doc| {
            let (doc, b) = propagate(doc);
            breaks |= b;
            doc
        })
        .collect();
    (docs, breaks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::*;

    fn is_broken(doc: &Doc) -> bool {
        matches!(doc, Doc::Group { should_break: true, .. })
    }

    #[test]
    fn break_parent_breaks_enclosing_group() {
        let doc = group(concat([text("a"), BREAK_PARENT]));
        assert!(is_broken(&propagate_breaks(&doc)));
    }

    #[test]
    fn broken_group_breaks_its_parent() {
        let doc = group(concat([text("a"), group(hardline())]));
        let Doc::Group { contents, should_break, .. } = propagate_breaks(&doc) else {
            panic!("expected group");
        };
        assert!(should_break);
        let Doc::Concat(parts) = *contents else {
            panic!("expected concat");
        };
        assert!(is_broken(&parts[1]));
    }

    #[test]
    fn plain_hard_line_without_break_parent_does_not_propagate() {
        let doc = group(Doc::Line(LineKind::Hard));
        assert!(!is_broken(&propagate_breaks(&doc)));
    }

    #[test]
    fn conditional_group_is_not_broken_by_propagation() {
        let doc = conditional_group(vec![
            concat([text("a"), hardline()]),
            group(concat([text("b"), BREAK_PARENT])),
        ])
        .unwrap();
        let Doc::Group {
            should_break,
            expanded_states: Some(states),
            contents,
        } = propagate_breaks(&doc)
        else {
            panic!("expected conditional group");
        };
        assert!(!should_break);
        // Groups inside the states still break, and contents mirrors states[0].
        assert!(is_broken(&states[1]));
        assert_eq!(*contents, states[0]);
    }

    #[test]
    fn input_is_not_mutated() {
        let doc = group(concat([text("a"), hardline()]));
        let before = doc.clone();
        let _ = propagate_breaks(&doc);
        assert_eq!(doc, before);
    }

    #[test]
    fn break_parent_inside_flat_branch_of_if_break_propagates() {
        let doc = group(if_break(text("a"), concat([text("b"), BREAK_PARENT])));
        assert!(is_broken(&propagate_breaks(&doc)));
    }
}
