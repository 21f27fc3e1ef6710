//! Ariadne-based diagnostic rendering for compile errors.
//!
//! Renders an [`Error`] into a labeled source excerpt. Output is colorless
//! so that it snapshots consistently.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::builder::{BuilderFn, BuilderValue};
use crate::error::{CompileErrorKind, Error};
use crate::options::{Options, Vocabulary};

// ── Error Codes ────────────────────────────────────────────────────────

/// A stable code per error kind.
fn error_code(err: &Error) -> &'static str {
    let Error::Compile(err) = err else {
        return "E0001";
    };
    match err.kind {
        CompileErrorKind::MultipleRoots => "E0002",
        CompileErrorKind::RootShape => "E0003",
        CompileErrorKind::NodeType => "E0004",
        CompileErrorKind::CalleeShape => "E0005",
        CompileErrorKind::UnknownBuilderFunction => "E0006",
        CompileErrorKind::UnknownBuilderValue => "E0007",
        CompileErrorKind::Shape => "E0008",
        CompileErrorKind::Arity => "E0009",
        CompileErrorKind::LiteralType => "E0010",
        CompileErrorKind::NestedArray => "E0011",
    }
}

fn label_message(err: &Error) -> &'static str {
    let Error::Compile(err) = err else {
        return "syntax error here";
    };
    match err.kind {
        CompileErrorKind::MultipleRoots => "second root starts here",
        CompileErrorKind::RootShape => "expected a single expression",
        CompileErrorKind::NodeType => "not allowed in a doc expression",
        CompileErrorKind::CalleeShape => "expected a builder name",
        CompileErrorKind::UnknownBuilderFunction => "unknown builder function",
        CompileErrorKind::UnknownBuilderValue => "unknown builder value",
        CompileErrorKind::Shape => "wrong argument shape",
        CompileErrorKind::Arity => "wrong number of arguments",
        CompileErrorKind::LiteralType => "invalid literal",
        CompileErrorKind::NestedArray => "nested array",
    }
}

/// Help text; name lists only cover builders in `vocabulary`.
fn help(err: &Error, vocabulary: Vocabulary) -> Option<String> {
    let Error::Compile(err) = err else {
        return None;
    };
    match err.kind {
        CompileErrorKind::UnknownBuilderFunction => Some(format!(
            "builder functions are {}",
            names(
                BuilderFn::ALL
                    .iter()
                    .filter(|b| b.is_in(vocabulary))
                    .map(|b| b.name())
            )
        )),
        CompileErrorKind::UnknownBuilderValue => Some(format!(
            "builder values are {}",
            names(
                BuilderValue::ALL
                    .iter()
                    .filter(|b| b.is_in(vocabulary))
                    .map(|b| b.name())
            )
        )),
        CompileErrorKind::NestedArray => {
            Some("wrap the inner array in `concat(...)`".to_string())
        }
        CompileErrorKind::MultipleRoots => {
            Some("combine the statements with `concat([...])`".to_string())
        }
        _ => None,
    }
}

fn names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

// ── Main Rendering Function ────────────────────────────────────────────

/// Render an error into a formatted diagnostic string using ariadne.
///
/// `options` must be the ones the source was compiled with.
pub fn render_diagnostic(
    error: &Error,
    source: &str,
    _filename: &str,
    options: &Options,
) -> String {
    let config = Config::default().with_color(false);
    let source_len = source.len();

    // Ariadne needs an in-bounds, non-empty span where possible.
    let clamp = |r: Range<usize>| -> Range<usize> {
        let s = r.start.min(source_len);
        let e = r.end.min(source_len).max(s);
        if s == e {
            s..e.saturating_add(1).min(source_len)
        } else {
            s..e
        }
    };

    let span = error.span();
    let span = clamp(span.start as usize..span.end as usize);

    let mut builder = Report::build(ReportKind::Error, span.clone())
        .with_code(error_code(error))
        .with_message(error.message())
        .with_config(config)
        .with_label(
            Label::new(span)
                .with_message(label_message(error))
                .with_color(Color::Red),
        );
    if let Some(help) = help(error, options.vocabulary) {
        builder.set_help(help);
    }
    let report = builder.finish();

    let mut buf = Vec::new();
    if report.write(Source::from(source), &mut buf).is_err() {
        return error.to_string();
    }
    String::from_utf8_lossy(&buf).into_owned()
}
