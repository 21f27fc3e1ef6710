// docscript lexer -- tokenizer for the JavaScript expression subset.

mod cursor;

use cursor::Cursor;
use docscript_common::span::is_line_terminator;
use docscript_common::token::{keyword_from_str, Token, TokenKind};

/// The docscript lexer. Converts source text into a stream of tokens.
///
/// Wraps a [`Cursor`] for character-level iteration and implements
/// `Iterator<Item = Token>` so callers can consume tokens lazily or collect
/// them into a `Vec`. The token stream is lossless: trivia (whitespace,
/// newlines, comments) is emitted as tokens, and lexical errors become
/// `Error` tokens instead of aborting.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    /// Whether we have already emitted the `Eof` token.
    emitted_eof: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            emitted_eof: false,
        }
    }

    /// Convenience: tokenize the entire source into a `Vec<Token>`.
    ///
    /// The returned vector includes the final `Eof` token.
    pub fn tokenize(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    /// Produce the next token from the source.
    fn next_token(&mut self) -> Token {
        let start = self.cursor.pos();

        let Some(c) = self.cursor.peek() else {
            return Token::new(TokenKind::Eof, start, start);
        };

        match c {
            // ── Trivia ────────────────────────────────────────────────────
            c if is_line_terminator(c) => {
                self.cursor.advance();
                if c == '\r' {
                    self.cursor.eat('\n');
                }
                self.finish(TokenKind::Newline, start)
            }
            c if is_whitespace(c) => {
                self.cursor.eat_while(is_whitespace);
                Token::new(TokenKind::Whitespace, start, self.cursor.pos())
            }

            // ── Single-character delimiters ───────────────────────────────
            '(' => self.single_char_token(TokenKind::LParen, start),
            ')' => self.single_char_token(TokenKind::RParen, start),
            '[' => self.single_char_token(TokenKind::LBracket, start),
            ']' => self.single_char_token(TokenKind::RBracket, start),
            '{' => self.single_char_token(TokenKind::LBrace, start),
            '}' => self.single_char_token(TokenKind::RBrace, start),
            ',' => self.single_char_token(TokenKind::Comma, start),
            ';' => self.single_char_token(TokenKind::Semicolon, start),
            ':' => self.single_char_token(TokenKind::Colon, start),
            '~' => self.single_char_token(TokenKind::Tilde, start),
            '^' => self.single_char_token(TokenKind::Caret, start),

            // ── Number literals (`.5` is a number, `.x` is a dot) ─────────
            '0'..='9' => self.lex_number(start),
            '.' if self.cursor.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.lex_number(start)
            }
            '.' => self.single_char_token(TokenKind::Dot, start),

            // ── String literals ──────────────────────────────────────────
            '"' | '\'' => self.lex_string(start, c),

            // ── Comments and slash operators ─────────────────────────────
            '/' => self.lex_slash(start),

            // ── Multi-character operators ─────────────────────────────────
            '=' => self.lex_eq(start),
            '!' => self.lex_bang(start),
            '<' => self.lex_lt(start),
            '>' => self.lex_gt(start),
            '&' => self.lex_doubled(start, '&', TokenKind::Amp, TokenKind::AmpAmp),
            '|' => self.lex_doubled(start, '|', TokenKind::Pipe, TokenKind::PipePipe),
            '?' => self.lex_doubled(start, '?', TokenKind::Question, TokenKind::QuestionQuestion),
            '+' => self.lex_arith(start, '+', TokenKind::Plus, TokenKind::PlusPlus, TokenKind::PlusEq),
            '-' => self.lex_arith(start, '-', TokenKind::Minus, TokenKind::MinusMinus, TokenKind::MinusEq),
            '*' => self.lex_star(start),
            '%' => self.lex_with_eq(start, TokenKind::Percent, TokenKind::PercentEq),

            // ── Identifiers and keywords ─────────────────────────────────
            c if is_ident_start(c) => self.lex_ident(start),

            // ── Unknown character (reported by the parser) ───────────────
            _ => {
                self.cursor.advance();
                Token::new(TokenKind::Error, start, self.cursor.pos())
            }
        }
    }

    // ── Helpers ──────────────────────────────────────────────────────────

    /// Consume one character and return a token of the given kind.
    fn single_char_token(&mut self, kind: TokenKind, start: u32) -> Token {
        self.cursor.advance();
        Token::new(kind, start, self.cursor.pos())
    }

    fn finish(&self, kind: TokenKind, start: u32) -> Token {
        Token::new(kind, start, self.cursor.pos())
    }

    // ── Operator lexing ──────────────────────────────────────────────────

    /// `=` -> `Eq`, `==` -> `EqEq`, `===` -> `EqEqEq`, `=>` -> `FatArrow`
    fn lex_eq(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '='
        if self.cursor.eat('>') {
            return self.finish(TokenKind::FatArrow, start);
        }
        if !self.cursor.eat('=') {
            return self.finish(TokenKind::Eq, start);
        }
        if self.cursor.eat('=') {
            self.finish(TokenKind::EqEqEq, start)
        } else {
            self.finish(TokenKind::EqEq, start)
        }
    }

    /// `!` -> `Bang`, `!=` -> `NotEq`, `!==` -> `NotEqEq`
    fn lex_bang(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '!'
        if !self.cursor.eat('=') {
            return self.finish(TokenKind::Bang, start);
        }
        if self.cursor.eat('=') {
            self.finish(TokenKind::NotEqEq, start)
        } else {
            self.finish(TokenKind::NotEq, start)
        }
    }

    /// `<` -> `Lt`, `<=` -> `LtEq`, `<<` -> `Shl`
    fn lex_lt(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '<'
        if self.cursor.eat('=') {
            self.finish(TokenKind::LtEq, start)
        } else if self.cursor.eat('<') {
            self.finish(TokenKind::Shl, start)
        } else {
            self.finish(TokenKind::Lt, start)
        }
    }

    /// `>` -> `Gt`, `>=` -> `GtEq`, `>>` -> `Shr`, `>>>` -> `UShr`
    fn lex_gt(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '>'
        if self.cursor.eat('=') {
            return self.finish(TokenKind::GtEq, start);
        }
        if !self.cursor.eat('>') {
            return self.finish(TokenKind::Gt, start);
        }
        if self.cursor.eat('>') {
            self.finish(TokenKind::UShr, start)
        } else {
            self.finish(TokenKind::Shr, start)
        }
    }

    /// `c` -> `single`, `cc` -> `double` (`&&`, `||`, `??`)
    fn lex_doubled(&mut self, start: u32, c: char, single: TokenKind, double: TokenKind) -> Token {
        self.cursor.advance();
        if self.cursor.eat(c) {
            self.finish(double, start)
        } else {
            self.finish(single, start)
        }
    }

    /// `+`/`-` with their doubled (`++`, `--`) and compound (`+=`, `-=`) forms.
    fn lex_arith(
        &mut self,
        start: u32,
        c: char,
        single: TokenKind,
        double: TokenKind,
        compound: TokenKind,
    ) -> Token {
        self.cursor.advance();
        if self.cursor.eat(c) {
            self.finish(double, start)
        } else if self.cursor.eat('=') {
            self.finish(compound, start)
        } else {
            self.finish(single, start)
        }
    }

    /// `*` -> `Star`, `**` -> `StarStar`, `*=` -> `StarEq`
    fn lex_star(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '*'
        if self.cursor.eat('*') {
            self.finish(TokenKind::StarStar, start)
        } else if self.cursor.eat('=') {
            self.finish(TokenKind::StarEq, start)
        } else {
            self.finish(TokenKind::Star, start)
        }
    }

    /// An operator with an optional trailing `=` (`%` / `%=`).
    fn lex_with_eq(&mut self, start: u32, plain: TokenKind, compound: TokenKind) -> Token {
        self.cursor.advance();
        if self.cursor.eat('=') {
            self.finish(compound, start)
        } else {
            self.finish(plain, start)
        }
    }

    // ── Comments ─────────────────────────────────────────────────────────

    /// `/` starts a line comment, a block comment, `/=` or a plain `Slash`.
    ///
    /// Regular expression literals are not part of the subset, so a slash in
    /// operand position is still lexed as `Slash` and rejected by the parser.
    fn lex_slash(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '/'
        match self.cursor.peek() {
            Some('/') => {
                self.cursor.eat_while(|c| !is_line_terminator(c));
                self.finish(TokenKind::LineComment, start)
            }
            Some('*') => {
                self.cursor.advance(); // consume '*'
                loop {
                    match self.cursor.advance() {
                        None => return self.finish(TokenKind::Error, start),
                        Some('*') if self.cursor.peek() == Some('/') => {
                            self.cursor.advance();
                            return self.finish(TokenKind::BlockComment, start);
                        }
                        Some(_) => {}
                    }
                }
            }
            Some('=') => {
                self.cursor.advance();
                self.finish(TokenKind::SlashEq, start)
            }
            _ => self.finish(TokenKind::Slash, start),
        }
    }

    // ── Number literals ──────────────────────────────────────────────────

    /// Lex a number literal starting with a digit or with `.digit`.
    ///
    /// Handles decimal, hex (`0x`), binary (`0b`), octal (`0o`), fractions
    /// and exponents. Underscore separators are allowed between digits.
    fn lex_number(&mut self, start: u32) -> Token {
        if self.cursor.peek() == Some('0') {
            let radix_digit: Option<fn(char) -> bool> = match self.cursor.peek_nth(1) {
                Some('x' | 'X') => Some(|c: char| c.is_ascii_hexdigit() || c == '_'),
                Some('b' | 'B') => Some(|c: char| matches!(c, '0' | '1' | '_')),
                Some('o' | 'O') => Some(|c: char| matches!(c, '0'..='7' | '_')),
                _ => None,
            };
            if let Some(is_digit) = radix_digit {
                self.cursor.advance(); // '0'
                self.cursor.advance(); // radix marker
                self.cursor.eat_while(is_digit);
                return self.finish(TokenKind::Number, start);
            }
        }

        self.cursor.eat_while(|c| c.is_ascii_digit() || c == '_');

        if self.cursor.eat('.') {
            self.cursor.eat_while(|c| c.is_ascii_digit() || c == '_');
        }

        // Exponent: `e`/`E`, optional sign, at least one digit.
        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            let signed = matches!(self.cursor.peek_nth(1), Some('+' | '-'));
            let digit_at = if signed { 2 } else { 1 };
            if self
                .cursor
                .peek_nth(digit_at)
                .is_some_and(|c| c.is_ascii_digit())
            {
                self.cursor.advance(); // 'e'
                if signed {
                    self.cursor.advance();
                }
                self.cursor.eat_while(|c| c.is_ascii_digit() || c == '_');
            }
        }

        self.finish(TokenKind::Number, start)
    }

    // ── String literals ──────────────────────────────────────────────────

    /// Lex a quoted string, delimiters included.
    ///
    /// Backslash escapes are skipped over (a backslash-newline is a line
    /// continuation). A raw `\n`, `\r` or end of input before the closing
    /// quote produces an `Error` token covering the partial string. U+2028
    /// and U+2029 are legal inside strings.
    fn lex_string(&mut self, start: u32, quote: char) -> Token {
        self.cursor.advance(); // opening quote

        loop {
            match self.cursor.peek() {
                None | Some('\n' | '\r') => return self.finish(TokenKind::Error, start),
                Some('\\') => {
                    self.cursor.advance(); // consume '\'
                    if self.cursor.advance() == Some('\r') {
                        self.cursor.eat('\n');
                    }
                }
                Some(c) if c == quote => {
                    self.cursor.advance();
                    return self.finish(TokenKind::String, start);
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }
    }

    // ── Identifiers and keywords ─────────────────────────────────────────

    /// Lex an identifier or keyword.
    fn lex_ident(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume first char
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice(start, self.cursor.pos());

        let kind = keyword_from_str(text).unwrap_or(TokenKind::Ident);
        self.finish(kind, start)
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.emitted_eof {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.emitted_eof = true;
        }
        Some(token)
    }
}

/// Horizontal whitespace (line terminators are their own token).
fn is_whitespace(c: char) -> bool {
    !is_line_terminator(c) && (c.is_whitespace() || c == '\u{feff}')
}

/// Whether a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Whether a character can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
