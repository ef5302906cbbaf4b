use std::iter::Peekable;
use std::str::Chars;

use crate::errors::error_builder::ErrorBuilder;
use crate::errors::error_builder::SyntaxErrorBuilder;
use crate::errors::syntax::SyntaxErrorBuilderFactory;
use crate::errors::Error as LexerError;
use crate::errors::Position;

use super::{Token, TokenKind};

/// Splits a JMESPath expression into a sequence of [`Token`] objects.
///
/// The returned sequence always ends with a [`TokenKind::Eof`] token.
/// Quoted identifiers come out with their JSON escape sequences decoded,
/// raw strings with `\'` and `\\` unescaped, and backtick literals with
/// `` \` `` unescaped.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::new(input).tokenize()
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let position = self.position();
            let c = match self.next() {
                None => {
                    tokens.push(Token::new(TokenKind::Eof, position));
                    return Ok(tokens);
                }
                Some(c) => c,
            };
            let kind = match c {
                ':' => TokenKind::Colon,
                ',' => TokenKind::Comma,
                '.' => TokenKind::Dot,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                ']' => TokenKind::RBracket,
                '*' => TokenKind::Star,
                '@' => TokenKind::Current,
                '[' => match self.chars.peek() {
                    Some(']') => {
                        self.next();
                        TokenKind::Flatten
                    }
                    Some('?') => {
                        self.next();
                        TokenKind::Filter
                    }
                    _ => TokenKind::LBracket,
                },
                '|' => match self.chars.peek() {
                    Some('|') => {
                        self.next();
                        TokenKind::Or
                    }
                    _ => TokenKind::Pipe,
                },
                '&' => match self.chars.peek() {
                    Some('&') => {
                        self.next();
                        TokenKind::And
                    }
                    _ => TokenKind::ExpRef,
                },
                '!' => match self.chars.peek() {
                    Some('=') => {
                        self.next();
                        TokenKind::NotEqual
                    }
                    _ => TokenKind::Not,
                },
                '<' => match self.chars.peek() {
                    Some('=') => {
                        self.next();
                        TokenKind::LessThanOrEqual
                    }
                    _ => TokenKind::LessThan,
                },
                '>' => match self.chars.peek() {
                    Some('=') => {
                        self.next();
                        TokenKind::GreaterThanOrEqual
                    }
                    _ => TokenKind::GreaterThan,
                },
                '=' => match self.chars.peek() {
                    Some('=') => {
                        self.next();
                        TokenKind::Equal
                    }
                    _ => return Err(self.error(position, "expected '==' but found '='")),
                },
                '"' => self.quoted_identifier(position)?,
                '\'' => self.raw_string(position)?,
                '`' => self.json_value(position)?,
                '-' | '0'..='9' => self.number(c, position)?,
                'A'..='Z' | 'a'..='z' | '_' => self.unquoted_identifier(c),
                _ => {
                    let reason = format!("unexpected character '{}'", c);
                    return Err(self.error(position, &reason));
                }
            };
            tokens.push(Token::new(kind, position));
        }
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn next(&mut self) -> Option<char> {
        let c = self.chars.next();
        match c {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => {
                self.column += 1;
            }
            None => {}
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.chars.peek() {
            if matches!(c, ' ' | '\t' | '\r' | '\n') {
                self.next();
            } else {
                break;
            }
        }
    }

    fn unquoted_identifier(&mut self, first: char) -> TokenKind {
        let mut text = String::new();
        text.push(first);
        while let Some(c) = self.chars.peek() {
            if matches!(c, 'A'..='Z' | 'a'..='z' | '0'..='9' | '_') {
                text.push(*c);
                self.next();
            } else {
                break;
            }
        }
        TokenKind::UnquotedIdentifier(text)
    }

    fn number(&mut self, first: char, position: Position) -> Result<TokenKind, LexerError> {
        let mut text = String::new();
        text.push(first);
        while let Some(c) = self.chars.peek() {
            if c.is_ascii_digit() {
                text.push(*c);
                self.next();
            } else {
                break;
            }
        }
        match text.parse::<i64>() {
            Ok(number) => Ok(TokenKind::Number(number)),
            Err(_) => {
                let reason = format!("invalid number '{}'", text);
                Err(self.error(position, &reason))
            }
        }
    }

    fn quoted_identifier(&mut self, position: Position) -> Result<TokenKind, LexerError> {
        let mut text = String::new();
        loop {
            let c = match self.next() {
                None => return Err(self.error(position, "unterminated quoted identifier")),
                Some(c) => c,
            };
            match c {
                '"' => break,
                '\\' => text.push(self.escaped_char(position)?),
                _ => text.push(c),
            }
        }
        if text.is_empty() {
            return Err(self.error(position, "quoted identifier cannot be empty"));
        }
        Ok(TokenKind::QuotedIdentifier(text))
    }

    fn escaped_char(&mut self, position: Position) -> Result<char, LexerError> {
        let c = match self.next() {
            None => return Err(self.error(position, "unterminated escape sequence")),
            Some(c) => c,
        };
        let unescaped = match c {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => return self.unicode_escape(position),
            _ => {
                let reason = format!("invalid escape sequence '\\{}'", c);
                return Err(self.error(position, &reason));
            }
        };
        Ok(unescaped)
    }

    fn unicode_escape(&mut self, position: Position) -> Result<char, LexerError> {
        let first = self.hex_code_unit(position)?;
        // a high surrogate must combine with a following low surrogate
        // into a single code point
        if (0xD800..=0xDBFF).contains(&first) {
            if self.next() != Some('\\') || self.next() != Some('u') {
                return Err(self.error(position, "unpaired surrogate in unicode escape"));
            }
            let second = self.hex_code_unit(position)?;
            if !(0xDC00..=0xDFFF).contains(&second) {
                return Err(self.error(position, "invalid low surrogate in unicode escape"));
            }
            let code_point = 0x10000 + ((first & 0x03FF) << 10) + (second & 0x03FF);
            return char::from_u32(code_point)
                .ok_or_else(|| self.error(position, "invalid unicode escape"));
        }
        char::from_u32(first).ok_or_else(|| self.error(position, "unpaired surrogate in unicode escape"))
    }

    fn hex_code_unit(&mut self, position: Position) -> Result<u32, LexerError> {
        let mut value: u32 = 0;
        for _ in 0..4 {
            let c = match self.next() {
                None => return Err(self.error(position, "unterminated unicode escape")),
                Some(c) => c,
            };
            let digit = match c.to_digit(16) {
                None => {
                    let reason = format!("invalid hexadecimal digit '{}' in unicode escape", c);
                    return Err(self.error(position, &reason));
                }
                Some(digit) => digit,
            };
            value = value * 16 + digit;
        }
        Ok(value)
    }

    fn raw_string(&mut self, position: Position) -> Result<TokenKind, LexerError> {
        let mut text = String::new();
        loop {
            let c = match self.next() {
                None => return Err(self.error(position, "unterminated raw-string")),
                Some(c) => c,
            };
            match c {
                '\'' => break,
                '\\' => match self.chars.peek() {
                    // only `\'` and `\\` are unescaped, everything else
                    // passes through verbatim
                    Some('\'') => {
                        self.next();
                        text.push('\'');
                    }
                    Some('\\') => {
                        self.next();
                        text.push('\\');
                    }
                    _ => text.push('\\'),
                },
                _ => text.push(c),
            }
        }
        Ok(TokenKind::RawString(text))
    }

    fn json_value(&mut self, position: Position) -> Result<TokenKind, LexerError> {
        let mut text = String::new();
        loop {
            let c = match self.next() {
                None => return Err(self.error(position, "unterminated JSON literal")),
                Some(c) => c,
            };
            match c {
                '`' => break,
                '\\' => match self.chars.peek() {
                    Some('`') => {
                        self.next();
                        text.push('`');
                    }
                    _ => text.push('\\'),
                },
                _ => text.push(c),
            }
        }
        Ok(TokenKind::JsonValue(text))
    }

    fn error(&self, position: Position, reason: &str) -> LexerError {
        LexerError::get_syntax_error_builder()
            .at(position)
            .for_reason(reason)
            .build()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::errors::Kind;
    use rstest::*;

    #[rstest]
    // tokens
    #[case(TokenKind::Colon, ":")]
    #[case(TokenKind::Comma, ",")]
    #[case(TokenKind::Dot, ".")]
    #[case(TokenKind::Pipe, "|")]
    #[case(TokenKind::LParen, "(")]
    #[case(TokenKind::RParen, ")")]
    #[case(TokenKind::LBrace, "{")]
    #[case(TokenKind::RBrace, "}")]
    #[case(TokenKind::LBracket, "[")]
    #[case(TokenKind::RBracket, "]")]
    #[case(TokenKind::Filter, "[?")]
    #[case(TokenKind::Flatten, "[]")]
    #[case(TokenKind::Star, "*")]
    #[case(TokenKind::Current, "@")]
    #[case(TokenKind::ExpRef, "&")]
    // comparison operators
    #[case(TokenKind::Equal, "==")]
    #[case(TokenKind::NotEqual, "!=")]
    #[case(TokenKind::LessThan, "<")]
    #[case(TokenKind::GreaterThan, ">")]
    #[case(TokenKind::LessThanOrEqual, "<=")]
    #[case(TokenKind::GreaterThanOrEqual, ">=")]
    // logical operators
    #[case(TokenKind::And, "&&")]
    #[case(TokenKind::Or, "||")]
    #[case(TokenKind::Not, "!")]
    // number
    #[case(TokenKind::Number(42), "42")]
    #[case(TokenKind::Number(-4), "-4")]
    // identifiers
    #[case(TokenKind::QuotedIdentifier("quoted_string".to_string()), r#""quoted_string""#)]
    #[case(TokenKind::UnquotedIdentifier("foo".to_string()), "foo")]
    // literals
    #[case(TokenKind::RawString("".to_string()), "''")]
    #[case(TokenKind::RawString("raw_string".to_string()), "'raw_string'")]
    #[case(TokenKind::RawString(" \\raw\\ ".to_string()), "' \\\\raw\\\\ '")]
    #[case(TokenKind::JsonValue("true".to_string()), "`true`")]
    #[case(TokenKind::JsonValue("false".to_string()), "`false`")]
    #[case(TokenKind::JsonValue("[1, 2, 3]".to_string()), "`[1, 2, 3]`")]
    #[case(TokenKind::JsonValue(r#"{"foo": "bar"#.to_string()), r#"`{"foo": "bar`"#)]
    fn it_recognizes_token(#[case] expected: TokenKind, #[case] input: &str) {
        assert_eq!(expected, get_token(input).kind);
    }

    #[rstest]
    #[case(TokenKind::QuotedIdentifier("\\".to_string()), r#""\\""#)]
    #[case(TokenKind::QuotedIdentifier("foo\"bar\"".to_string()), r#""foo\"bar\"""#)]
    #[case(TokenKind::QuotedIdentifier("\u{8}\u{c}\n\r\t/".to_string()), r#""\b\f\n\r\t\/""#)]
    fn quoted_identifier(#[case] expected: TokenKind, #[case] input: &str) {
        assert_eq!(expected, get_token(input).kind);
    }

    #[rstest]
    #[case("\u{00e9}", "\"\\u00e9\"")]
    #[case("e\u{301}le\u{301}ment", "\"e\\u0301le\\u0301ment\"")]
    // U+1D11E MUSICAL SYMBOL G CLEF, as a surrogate pair
    #[case("\u{1D11E}", "\"\\uD834\\uDD1E\"")]
    fn it_decodes_unicode_escapes(#[case] expected: &str, #[case] input: &str) {
        let kind = get_token(input).kind;
        assert_eq!(TokenKind::QuotedIdentifier(expected.to_string()), kind);
    }

    #[rstest]
    #[case(r#""\uD834""#)]
    #[case(r#""\uD834A""#)]
    #[case(r#""\uDD1E""#)]
    fn it_rejects_invalid_surrogate_pairs(#[case] input: &str) {
        let result = tokenize(input).map_err(|e| e.kind);
        assert_eq!(Err(Kind::Syntax), result);
    }

    #[rstest]
    #[case(TokenKind::UnquotedIdentifier("foo".to_string()), " foo")]
    #[case(TokenKind::UnquotedIdentifier("foo".to_string()), "\nfoo")]
    #[case(TokenKind::UnquotedIdentifier("foo".to_string()), "\rfoo")]
    #[case(TokenKind::UnquotedIdentifier("foo".to_string()), "\tfoo")]
    fn it_skips_whitespace(#[case] expected: TokenKind, #[case] input: &str) {
        assert_eq!(expected, get_token(input).kind);
    }

    #[rstest]
    #[case("?")]
    #[case("=")]
    #[case("#")]
    #[case(r#""""#)]
    #[case(r#""foo"#)]
    #[case("'foo")]
    #[case("`true")]
    #[case(r#""f\qo""#)]
    fn it_fails(#[case] input: &str) {
        let result = tokenize(input).map_err(|e| e.kind);
        let expected = Err(Kind::Syntax);
        assert_eq!(expected, result);
    }

    #[rstest]
    #[case((1, 14), "'raw_string' 'mismatched_quote ")]
    #[case((1, 17), "\"quoted_string\" \"mismatched_quote ")]
    #[case((1, 8), "`true` `false ")]
    fn it_reports_error_positions(#[case] pos: (usize, usize), #[case] input: &str) {
        let result = tokenize(input);
        assert!(result.is_err());

        match result {
            Err(error) => {
                assert_eq!(Kind::Syntax, error.kind);
                assert_eq!(Position::new(pos.0, pos.1), error.position.unwrap());
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn it_tracks_positions_across_lines() {
        let tokens = get_tokens("foo.\nbar");
        assert_eq!(Position::new(1, 1), tokens[0].position);
        assert_eq!(Position::new(1, 4), tokens[1].position);
        assert_eq!(Position::new(2, 1), tokens[2].position);
    }

    #[test]
    fn it_appends_eof() {
        let tokens = get_tokens("foo");
        assert_eq!(2, tokens.len());
        assert_eq!(TokenKind::Eof, tokens[1].kind);
    }

    #[test]
    fn it_keeps_backslashes_in_raw_strings() {
        // `\n` is not an escape sequence inside a raw-string
        let token = get_token(r"'foo\nbar'");
        assert_eq!(TokenKind::RawString(r"foo\nbar".to_string()), token.kind);
    }

    #[test]
    fn it_unescapes_backticks_in_json_literals() {
        let token = get_token(r#"`"foo\`bar"`"#);
        assert_eq!(TokenKind::JsonValue(r#""foo`bar""#.to_string()), token.kind);
    }

    fn get_token(input: &str) -> Token {
        get_tokens(input)[0].clone()
    }
    fn get_tokens(input: &str) -> Vec<Token> {
        tokenize(input).unwrap()
    }
}
