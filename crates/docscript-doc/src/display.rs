//! Printing a Doc back as builder source.
//!
//! The output is the DSL form of the tree: `group(concat(["foo", line]))`.
//! Structural aliases print under their own names (`hardline`, `dedent`,
//! `conditionalGroup`, ...), so translating the printed text of a translated
//! Doc gives back an equal Doc. Shapes with no builder spelling (a bare hard
//! line, a group already marked broken) print in an explicit form.

use std::fmt;

use crate::doc::{AlignKind, Doc, LineKind};

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Doc::Text(s) => {
                let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
                f.write_str(&quoted)
            }
            Doc::Concat(parts) => match parts.as_slice() {
                [Doc::Line(LineKind::Hard), Doc::BreakParent] => f.write_str("hardline"),
                [Doc::Line(LineKind::Literal), Doc::BreakParent] => f.write_str("literalline"),
                _ => {
                    f.write_str("concat(")?;
                    write_list(f, parts)?;
                    f.write_str(")")
                }
            },
            Doc::Indent(contents) => write!(f, "indent({contents})"),
            Doc::Align { contents, kind } => match kind {
                AlignKind::Width(-1) => write!(f, "dedent({contents})"),
                AlignKind::Width(n) => write!(f, "align({n}, {contents})"),
                AlignKind::ToRoot => write!(f, "dedentToRoot({contents})"),
                AlignKind::MarkRoot => write!(f, "markAsRoot({contents})"),
            },
            Doc::Group {
                expanded_states: Some(states),
                ..
            } => {
                f.write_str("conditionalGroup(")?;
                write_list(f, states)?;
                f.write_str(")")
            }
            Doc::Group {
                contents,
                should_break: true,
                ..
            } => write!(f, "group({contents}, {{ shouldBreak: true }})"),
            Doc::Group { contents, .. } => write!(f, "group({contents})"),
            Doc::Fill(parts) => {
                f.write_str("fill(")?;
                write_list(f, parts)?;
                f.write_str(")")
            }
            Doc::IfBreak {
                break_contents,
                flat_contents,
            } => write!(f, "ifBreak({break_contents}, {flat_contents})"),
            Doc::LineSuffix(contents) => write!(f, "lineSuffix({contents})"),
            Doc::Line(LineKind::Normal) => f.write_str("line"),
            Doc::Line(LineKind::Soft) => f.write_str("softline"),
            Doc::Line(LineKind::Hard) => f.write_str("hardlineWithoutBreakParent"),
            Doc::Line(LineKind::Literal) => f.write_str("literallineWithoutBreakParent"),
            Doc::BreakParent => f.write_str("breakParent"),
            Doc::LineSuffixBoundary => f.write_str("lineSuffixBoundary"),
            Doc::Trim => f.write_str("trim"),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, docs: &[Doc]) -> fmt::Result {
    f.write_str("[")?;
    for (i, doc) in docs.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{doc}")?;
    }
    f.write_str("]")
}
