use docscript_lexer::Lexer;

/// Render tokens one per line as `Kind "text" start..end`, skipping `Eof`.
fn dump(source: &str) -> String {
    Lexer::tokenize(source)
        .into_iter()
        .filter(|tok| tok.kind != docscript_common::TokenKind::Eof)
        .map(|tok| {
            let text = &source[tok.span.start as usize..tok.span.end as usize];
            format!("{:?} {:?} {}..{}", tok.kind, text, tok.span.start, tok.span.end)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn nested_builder_calls() {
    insta::assert_snapshot!(dump(r#"group(indent(["a", line]))"#), @r#"
    Ident "group" 0..5
    LParen "(" 5..6
    Ident "indent" 6..12
    LParen "(" 12..13
    LBracket "[" 13..14
    String "\"a\"" 14..17
    Comma "," 17..18
    Whitespace " " 18..19
    Ident "line" 19..23
    RBracket "]" 23..24
    RParen ")" 24..25
    RParen ")" 25..26
    "#);
}

#[test]
fn statements_and_comments() {
    insta::assert_snapshot!(dump("// doc\nconst x = 1;\n/* b */"), @r#"
    LineComment "// doc" 0..6
    Newline "\n" 6..7
    Const "const" 7..12
    Whitespace " " 12..13
    Ident "x" 13..14
    Whitespace " " 14..15
    Eq "=" 15..16
    Whitespace " " 16..17
    Number "1" 17..18
    Semicolon ";" 18..19
    Newline "\n" 19..20
    BlockComment "/* b */" 20..27
    "#);
}

#[test]
fn binary_expression_operators() {
    insta::assert_snapshot!(dump("a+b*c"), @r#"
    Ident "a" 0..1
    Plus "+" 1..2
    Ident "b" 2..3
    Star "*" 3..4
    Ident "c" 4..5
    "#);
}

#[test]
fn keywords_and_reserved_words() {
    insta::assert_snapshot!(dump("true null function"), @r#"
    True "true" 0..4
    Whitespace " " 4..5
    Null "null" 5..9
    Whitespace " " 9..10
    Reserved "function" 10..18
    "#);
}

#[test]
fn empty_source_is_just_eof() {
    let tokens = Lexer::tokenize("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, docscript_common::TokenKind::Eof);
    assert_eq!((tokens[0].span.start, tokens[0].span.end), (0, 0));
}

#[test]
fn multibyte_spans_are_byte_offsets() {
    insta::assert_snapshot!(dump("\"héllo\" x"), @r#"
    String "\"héllo\"" 0..8
    Whitespace " " 8..9
    Ident "x" 9..10
    "#);
}
