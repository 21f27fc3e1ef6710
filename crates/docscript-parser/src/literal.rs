//! Literal token decoding: string escapes and numeric values.
//!
//! String tokens keep their quotes and escapes in the tree; these helpers
//! produce the runtime value the way a JavaScript engine would.

use std::iter::Peekable;
use std::str::Chars;

const BAD_ESCAPE: &str = "Bad character escape sequence";

/// Check that a quoted string token contains only valid escapes.
pub(crate) fn check_string(text: &str) -> Result<(), &'static str> {
    decode_string(text).map(|_| ())
}

/// Decode a quoted string token (quotes included) into its value.
///
/// Invalid escapes are rejected by the parser, so this never fails on text
/// taken from a successfully parsed tree. It falls back to the raw body if
/// it ever does.
pub fn unescape_string(text: &str) -> String {
    decode_string(text).unwrap_or_else(|_| strip_quotes(text).to_string())
}

fn strip_quotes(text: &str) -> &str {
    let inner = text.get(1..text.len().saturating_sub(1));
    inner.unwrap_or_default()
}

fn decode_string(text: &str) -> Result<String, &'static str> {
    let body = strip_quotes(text);
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            return Err(BAD_ESCAPE);
        };
        match escaped {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            // Line continuation.
            '\n' | '\u{2028}' | '\u{2029}' => {}
            '\r' => {
                chars.next_if_eq(&'\n');
            }
            'x' => {
                let code = hex_digits(&mut chars, 2)?;
                out.push(char::from_u32(code).ok_or(BAD_ESCAPE)?);
            }
            'u' => out.push(unicode_escape(&mut chars)?),
            '0'..='7' => {
                // Legacy octal escape: up to three digits, at most \377.
                let mut code = escaped.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) if code * 8 + d <= 0o377 => {
                            code = code * 8 + d;
                            chars.next();
                        }
                        _ => break,
                    }
                }
                out.push(char::from_u32(code).ok_or(BAD_ESCAPE)?);
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

/// Read exactly `count` hex digits.
fn hex_digits(chars: &mut Peekable<Chars<'_>>, count: usize) -> Result<u32, &'static str> {
    let mut code = 0u32;
    for _ in 0..count {
        let digit = chars.next().and_then(|c| c.to_digit(16)).ok_or(BAD_ESCAPE)?;
        code = code * 16 + digit;
    }
    Ok(code)
}

/// `\uXXXX`, `\u{X...}`, and surrogate pairs written as two `\uXXXX` escapes.
fn unicode_escape(chars: &mut Peekable<Chars<'_>>) -> Result<char, &'static str> {
    if chars.next_if_eq(&'{').is_some() {
        let mut code = 0u32;
        let mut digits = 0;
        while let Some(c) = chars.next() {
            if c == '}' {
                if digits == 0 {
                    return Err(BAD_ESCAPE);
                }
                return char::from_u32(code).ok_or(BAD_ESCAPE);
            }
            let digit = c.to_digit(16).ok_or(BAD_ESCAPE)?;
            code = code.checked_mul(16).ok_or(BAD_ESCAPE)? + digit;
            if code > 0x10FFFF {
                return Err(BAD_ESCAPE);
            }
            digits += 1;
        }
        return Err(BAD_ESCAPE);
    }

    let high = hex_digits(chars, 4)?;
    if (0xD800..0xDC00).contains(&high) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            if let Ok(low) = hex_digits(&mut lookahead, 4) {
                if (0xDC00..0xE000).contains(&low) {
                    *chars = lookahead;
                    let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                    return char::from_u32(code).ok_or(BAD_ESCAPE);
                }
            }
        }
    }
    // A lone surrogate has no `char`; use the replacement character.
    Ok(char::from_u32(high).unwrap_or('\u{fffd}'))
}

/// The numeric value of a number token.
pub fn parse_number(text: &str) -> f64 {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    let (radix, body) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        Some("0o" | "0O") => (8, &digits[2..]),
        Some("0b" | "0B") => (2, &digits[2..]),
        _ if is_legacy_octal(&digits) => (8, &digits[1..]),
        _ => return digits.parse().unwrap_or(f64::NAN),
    };
    body.chars().fold(0.0, |acc, c| {
        acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
    })
}

/// Sloppy-mode octal: a leading zero followed only by octal digits (`017`).
/// Any 8 or 9 makes it decimal again (`019` is 19).
fn is_legacy_octal(digits: &str) -> bool {
    digits.len() > 1
        && digits.starts_with('0')
        && digits.bytes().all(|b| matches!(b, b'0'..=b'7'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_strings() {
        assert_eq!(unescape_string(r#""foo""#), "foo");
        assert_eq!(unescape_string("'bar'"), "bar");
        assert_eq!(unescape_string("''"), "");
    }

    #[test]
    fn simple_escapes() {
        assert_eq!(unescape_string(r#""a\nb\tc""#), "a\nb\tc");
        assert_eq!(unescape_string(r#""\"q\"""#), "\"q\"");
        assert_eq!(unescape_string(r"'it\'s'"), "it's");
        assert_eq!(unescape_string(r#""\\""#), "\\");
        assert_eq!(unescape_string(r#""\q""#), "q");
    }

    #[test]
    fn hex_and_unicode_escapes() {
        assert_eq!(unescape_string(r#""\x41""#), "A");
        assert_eq!(unescape_string(r#""\u00e9""#), "é");
        assert_eq!(unescape_string(r#""\u{1F600}""#), "😀");
        assert_eq!(unescape_string(r#""\uD83D\uDE00""#), "😀");
    }

    #[test]
    fn octal_escapes() {
        assert_eq!(unescape_string(r#""\0""#), "\0");
        assert_eq!(unescape_string(r#""\101""#), "A");
    }

    #[test]
    fn line_continuation() {
        assert_eq!(unescape_string("\"a\\\nb\""), "ab");
        assert_eq!(unescape_string("\"a\\\r\nb\""), "ab");
        assert_eq!(unescape_string("\"a\\\u{2028}b\""), "ab");
    }

    #[test]
    fn bad_escapes_are_rejected() {
        assert_eq!(check_string(r#""\x4""#), Err(BAD_ESCAPE));
        assert_eq!(check_string(r#""\u12""#), Err(BAD_ESCAPE));
        assert_eq!(check_string(r#""\u{}""#), Err(BAD_ESCAPE));
        assert_eq!(check_string(r#""\u{110000}""#), Err(BAD_ESCAPE));
        assert!(check_string(r#""ok\n""#).is_ok());
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("1.50"), 1.5);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("0x10"), 16.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert_eq!(parse_number("0o17"), 15.0);
        assert_eq!(parse_number("1_000"), 1000.0);
    }

    #[test]
    fn legacy_octal_numbers() {
        assert_eq!(parse_number("017"), 15.0);
        assert_eq!(parse_number("00"), 0.0);
        assert_eq!(parse_number("019"), 19.0);
        assert_eq!(parse_number("08"), 8.0);
        assert_eq!(parse_number("0"), 0.0);
        assert_eq!(parse_number("0.5"), 0.5);
    }
}
