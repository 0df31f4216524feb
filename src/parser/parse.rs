//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the diagnostic type, token-window helpers, and the main parse
//! entry point.
//!
//! # Parser Architecture
//!
//! The Parser pulls tokens lazily from a [`Lexer`] and keeps a two-token
//! window (`current_token`, `peek_token`):
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: `let`, `return` and expression statements
//! - `expressions`: Pratt expression engine with prefix/infix rule tables
//!
//! # Error Recovery
//!
//! Parsing never stops at the first problem. Every violated expectation is
//! appended to the diagnostic list and the parser skips to the next `;` before
//! resuming, so one call surfaces as many real issues as possible.
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::parser::ast::Program;
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};
use thiserror::Error;

/// Deepest expression nesting the parser accepts.
///
/// Parsing, rendering and dropping an expression each recurse once per level
/// of nesting, so no accepted tree can exhaust the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// A recoverable syntax error recorded during a parse
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A required token was not the next one in the stream
    #[error("expected next token to be {expected}, got {got} instead")]
    UnexpectedToken { expected: TokenKind, got: TokenKind },

    /// No expression can start with this token kind
    #[error("no prefix parse function for {0} found")]
    NoPrefixParseFn(TokenKind),

    /// An integer literal that does not fit in an `i64`
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),

    /// An expression nested deeper than [`MAX_NESTING_DEPTH`]
    #[error("expression nested too deeply")]
    NestingTooDeep,
}

/// Pratt parser for Micron source
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    pub(crate) current_token: Token,
    pub(crate) peek_token: Token,
    errors: Vec<ParseError>,
    /// Active `parse_expression` calls
    pub(crate) depth: usize,
    /// Height of the expression most recently returned by `parse_expression`
    pub(crate) height: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::from_lexer(Lexer::new(source))
    }

    /// Build a parser over an existing lexer, priming the two-token window.
    pub fn from_lexer(lexer: Lexer<'a>) -> Self {
        let mut parser = Self {
            lexer,
            current_token: Token::eof(),
            peek_token: Token::eof(),
            errors: Vec::new(),
            depth: 0,
            height: 0,
        };
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Parse the whole input.
    ///
    /// Always returns a program; statements that failed to parse are left out
    /// and described in [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_token_is(TokenKind::Eof) {
            match self.parse_statement() {
                Some(statement) => program.statements.push(statement),
                None => self.synchronize(),
            }
            self.next_token();
        }

        tracing::debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    /// Diagnostics recorded so far, in the order they were found.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    // ===== Helper methods =====

    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub(crate) fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    pub(crate) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advance if the peek token has the given kind; otherwise record an
    /// error and leave the window where it is.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_token_is(kind) {
            self.next_token();
            Some(())
        } else {
            self.push_error(ParseError::UnexpectedToken {
                expected: kind,
                got: self.peek_token.kind,
            });
            None
        }
    }

    pub(crate) fn push_error(&mut self, error: ParseError) {
        tracing::debug!(%error, "syntax error");
        self.errors.push(error);
    }

    /// Skip the rest of a statement that failed to parse.
    fn synchronize(&mut self) {
        while !self.current_token_is(TokenKind::Semicolon)
            && !self.current_token_is(TokenKind::Eof)
        {
            self.next_token();
        }
        tracing::trace!(at = %self.current_token, "resynchronized");
    }
}
