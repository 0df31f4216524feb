//! Lexer (tokenizer) for Micron source code
//!
//! Produces [`Token`]s one at a time on demand. The only lookahead is a single
//! character, used to recognise `==` and `!=`. Scanning never fails:
//! characters the language does not know become [`TokenKind::Illegal`] tokens
//! and the parser decides what to do with them.

use super::token::{lookup_ident, Token, TokenKind};

/// Lexer over a borrowed source string
pub struct Lexer<'a> {
    input: &'a str,
    /// Byte offset of `ch`
    position: usize,
    /// Byte offset of the character after `ch`
    read_position: usize,
    /// Current character, `None` once the input is exhausted
    ch: Option<char>,
    /// Set once the iterator has handed out its `Eof`
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source string.
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            ch: None,
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    /// Scan the next token.
    ///
    /// Once the end of input is reached every further call returns another
    /// [`TokenKind::Eof`] token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.ch else {
            return Token::eof();
        };

        let token = match ch {
            '=' => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            '!' => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            ';' => Token::new(TokenKind::Semicolon, ";"),
            '(' => Token::new(TokenKind::LParen, "("),
            ')' => Token::new(TokenKind::RParen, ")"),
            ',' => Token::new(TokenKind::Comma, ","),
            '+' => Token::new(TokenKind::Plus, "+"),
            '-' => Token::new(TokenKind::Minus, "-"),
            '{' => Token::new(TokenKind::LBrace, "{"),
            '}' => Token::new(TokenKind::RBrace, "}"),
            '/' => Token::new(TokenKind::Slash, "/"),
            '*' => Token::new(TokenKind::Asterisk, "*"),
            '<' => Token::new(TokenKind::Lt, "<"),
            '>' => Token::new(TokenKind::Gt, ">"),

            // Identifier and integer bodies are consumed by their readers,
            // which leave `ch` on the first character after the token.
            c if is_letter(c) => {
                let literal = self.read_identifier();
                return Token::new(lookup_ident(literal), literal);
            }
            c if c.is_ascii_digit() => {
                let literal = self.read_number();
                return Token::new(TokenKind::Int, literal);
            }

            other => Token::new(TokenKind::Illegal, other.to_string()),
        };

        self.read_char();
        token
    }

    fn read_identifier(&mut self) -> &'a str {
        let start = self.position;
        while self.ch.is_some_and(is_letter) {
            self.read_char();
        }
        &self.input[start..self.position]
    }

    fn read_number(&mut self) -> &'a str {
        let start = self.position;
        while self.ch.is_some_and(|c| c.is_ascii_digit()) {
            self.read_char();
        }
        &self.input[start..self.position]
    }

    /// Skip whitespace
    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    /// Advance to next character
    fn read_char(&mut self) {
        self.position = self.read_position;
        self.ch = self.input[self.read_position..].chars().next();
        if let Some(ch) = self.ch {
            self.read_position += ch.len_utf8();
        }
    }

    /// Peek at the character after `ch` without consuming
    fn peek_char(&self) -> Option<char> {
        self.input[self.read_position..].chars().next()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including a single `Eof`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}
