//! Layout tests for the Doc printer.

use docscript_doc::doc::*;
use docscript_doc::{print_doc_to_string, PrintOptions};

fn render(doc: &Doc, print_width: usize) -> String {
    let options = PrintOptions {
        print_width,
        ..PrintOptions::default()
    };
    print_doc_to_string(doc, &options)
}

/// `name(arg, arg, ...)` that breaks one argument per line.
fn call(name: &str, args: &[&str]) -> Doc {
    group(concat([
        text(name),
        text("("),
        indent(concat([
            SOFTLINE,
            join(concat([text(","), LINE]), args.iter().map(|a| text(*a))),
        ])),
        if_break(text(","), text("")),
        SOFTLINE,
        text(")"),
    ]))
}

#[test]
fn call_fits_on_one_line() {
    let doc = call("print", &["alpha", "beta", "gamma"]);
    insta::assert_snapshot!(render(&doc, 80), @"print(alpha, beta, gamma)");
}

#[test]
fn call_breaks_one_argument_per_line() {
    let doc = call("print", &["alpha", "beta", "gamma"]);
    insta::assert_snapshot!(render(&doc, 20), @r"
    print(
      alpha,
      beta,
      gamma,
    )
    ");
}

#[test]
fn outer_group_breaks_inner_stays_flat() {
    let inner = call("inner", &["a", "b"]);
    let doc = group(concat([
        text("outer("),
        indent(concat([SOFTLINE, inner, text(","), LINE, text("long_argument_name")])),
        SOFTLINE,
        text(")"),
    ]));
    insta::assert_snapshot!(render(&doc, 24), @r"
    outer(
      inner(a, b),
      long_argument_name
    )
    ");
}

#[test]
fn fill_wraps_paragraph() {
    let words = "the quick brown fox jumps over the lazy dog";
    let mut parts = Vec::new();
    for (i, word) in words.split(' ').enumerate() {
        if i > 0 {
            parts.push(LINE);
        }
        parts.push(text(word));
    }
    let doc = fill(parts);
    insta::assert_snapshot!(render(&doc, 15), @r"
    the quick brown
    fox jumps over
    the lazy dog
    ");
}

#[test]
fn line_suffix_moves_comment_to_end_of_line() {
    let doc = concat([
        text("a"),
        line_suffix(text(" // note")),
        text(";"),
        hardline(),
        text("b;"),
    ]);
    insta::assert_snapshot!(render(&doc, 80), @r"
    a; // note
    b;
    ");
}

#[test]
fn line_suffix_before_hardline_keeps_trailing_newline() {
    let doc = concat([text("foo"), line_suffix(text("bar")), hardline()]);
    assert_eq!(render(&doc, 80), "foobar\n");
}

#[test]
fn mark_as_root_and_literal_lines() {
    let doc = indent(concat([
        text("template:"),
        mark_as_root(indent(concat([
            hardline(),
            text("line one"),
            literalline(),
            text("line two"),
        ]))),
    ]));
    insta::assert_snapshot!(render(&doc, 80), @r"
    template:
        line one
      line two
    ");
}

#[test]
fn conditional_group_prefers_first_state_that_fits() {
    let expanded = concat([text("["), indent(concat([hardline(), text("1, 2, 3")])), hardline(), text("]")]);
    let doc = conditional_group(vec![
        text("[1, 2, 3]"),
        group(concat([text("["), text("1,"), LINE, text("2, 3]")])),
        expanded,
    ])
    .unwrap();
    assert_eq!(render(&doc, 80), "[1, 2, 3]");
    assert_eq!(render(&doc, 5), "[\n  1, 2, 3\n]");
}

#[test]
fn use_tabs_with_alignment() {
    let options = PrintOptions {
        use_tabs: true,
        ..PrintOptions::default()
    };
    let doc = concat([
        text("a"),
        indent(align(
            AlignKind::Width(2),
            indent(concat([hardline(), text("b")])),
        )),
    ]);
    assert_eq!(print_doc_to_string(&doc, &options), "a\n\t\t\tb");
}

#[test]
fn spaces_with_alignment() {
    let doc = concat([
        text("a"),
        indent(align(
            AlignKind::Width(3),
            concat([hardline(), text("b")]),
        )),
    ]);
    assert_eq!(render(&doc, 80), "a\n     b");
}
