//! Expression parsing implementation
//!
//! This module handles parsing of Micron expressions with a Pratt
//! (precedence climbing) engine. Each token kind may have a prefix rule, used
//! when the token starts an expression, and an infix rule, used when it
//! continues one. Both tables are exhaustive `match`es over [`TokenKind`], so
//! adding a token kind forces a decision here.
//!
//! # Supported Expressions
//!
//! - Literals: integers, `true`, `false`
//! - Identifiers
//! - Prefix operators: `!`, `-`
//! - Binary operators: `+ - * / == != < >` (all left associative)
//! - Grouping: `( expr )`
//!
//! # Precedence
//!
//! ```text
//! Lowest < Equals (== !=) < LessGreater (< >) < Sum (+ -)
//!        < Product (* /) < Prefix (-x !x) < Call
//! ```

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser, MAX_NESTING_DEPTH};
use crate::parser::token::TokenKind;

/// Binding power of an operator, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,      // ==
    LessGreater, // > or <
    Sum,         // +
    Product,     // *
    Prefix,      // -x or !x
    Call,        // f(x)
}

impl Precedence {
    /// Precedence of a token in infix position
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}

type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Option<Expression>;
type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Option<Expression>;

fn prefix_rule<'a>(kind: TokenKind) -> Option<PrefixParseFn<'a>> {
    match kind {
        TokenKind::Ident => Some(Parser::parse_identifier),
        TokenKind::Int => Some(Parser::parse_integer_literal),
        TokenKind::True | TokenKind::False => Some(Parser::parse_boolean),
        TokenKind::Bang | TokenKind::Minus => Some(Parser::parse_prefix_expression),
        TokenKind::LParen => Some(Parser::parse_grouped_expression),
        TokenKind::Illegal
        | TokenKind::Eof
        | TokenKind::Assign
        | TokenKind::Plus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Lt
        | TokenKind::Gt
        | TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::RParen
        | TokenKind::LBrace
        | TokenKind::RBrace
        | TokenKind::Function
        | TokenKind::Let
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::Return => None,
    }
}

fn infix_rule<'a>(kind: TokenKind) -> Option<InfixParseFn<'a>> {
    match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::Gt => Some(Parser::parse_infix_expression),
        TokenKind::Illegal
        | TokenKind::Eof
        | TokenKind::Ident
        | TokenKind::Int
        | TokenKind::Assign
        | TokenKind::Bang
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::LParen
        | TokenKind::RParen
        | TokenKind::LBrace
        | TokenKind::RBrace
        | TokenKind::Function
        | TokenKind::Let
        | TokenKind::True
        | TokenKind::False
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::Return => None,
    }
}

impl Parser<'_> {
    /// Parse an expression whose operators all bind tighter than `precedence`.
    ///
    /// Starts with the current token and leaves the last token of the
    /// expression as the current token. Anything nested deeper than
    /// [`MAX_NESTING_DEPTH`] is rejected with [`ParseError::NestingTooDeep`].
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.push_error(ParseError::NestingTooDeep);
            return None;
        }
        self.depth += 1;
        let expression = self.parse_expression_within(precedence);
        self.depth -= 1;
        expression
    }

    fn parse_expression_within(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = prefix_rule(self.current_token.kind) else {
            self.push_error(ParseError::NoPrefixParseFn(self.current_token.kind));
            return None;
        };
        // Leaf rules leave `height` at zero; rules with an operand set it.
        self.height = 0;
        let mut left = prefix(self)?;
        let mut height = self.check_height(self.height + 1)?;

        // Left-associative chains deepen the tree without recursing, so the
        // height is tracked separately from `depth`.
        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = infix_rule(self.peek_token.kind) else {
                break;
            };
            self.next_token();
            self.height = 0;
            left = infix(self, left)?;
            height = self.check_height(height.max(self.height) + 1)?;
        }

        self.height = height;
        Some(left)
    }

    fn check_height(&mut self, height: usize) -> Option<usize> {
        if height > MAX_NESTING_DEPTH {
            self.push_error(ParseError::NestingTooDeep);
            return None;
        }
        Some(height)
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current_token.kind)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier {
            token: self.current_token.clone(),
            value: self.current_token.literal.clone(),
        }))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current_token.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
            Err(_) => {
                self.push_error(ParseError::InvalidInteger(token.literal));
                None
            }
        }
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(Boolean {
            value: self.current_token_is(TokenKind::True),
            token: self.current_token.clone(),
        }))
    }

    /// Parse `!x` / `-x`; the operand binds at prefix precedence
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current_token.clone();
        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix(PrefixExpression {
            operator: token.literal.clone(),
            token,
            right: Box::new(right),
        }))
    }

    /// Parse `left <op> right` with the operator as the current token
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current_token.clone();
        let precedence = self.current_precedence();
        self.next_token();

        let right = self.parse_expression(precedence)?;
        Some(Expression::Infix(InfixExpression {
            operator: token.literal.clone(),
            token,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    /// Parse `( expr )`; the parentheses only affect the tree's shape
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Some(expr)
    }
}
