//! Micron source code parser
//!
//! This module transforms Micron source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds and the keyword table
//! - [`lexer`]: Tokenization (source text → tokens, one at a time)
//! - [`parse`]: Parser state, diagnostics and the program entry point
//! - [`ast`]: AST node definitions and canonical rendering
//!
//! # Language
//!
//! - Statements: `let name = expr;`, `return expr;`, expression statements
//! - Expressions: identifiers, integers, booleans, prefix `!`/`-`,
//!   binary `+ - * / == != < >`, parenthesised groups
//! - `fn`, `if` and `else` are reserved words with no grammar yet
//!
//! # Parser Implementation
//!
//! Hand-written Pratt parser: a prefix and an infix rule per token kind,
//! driven by a precedence table. Syntax errors are collected, not returned
//! early, so a single parse reports every problem it can find.

pub mod ast;
pub mod expressions;
pub mod lexer;
pub mod parse;
pub mod statements;
pub mod token;

use ast::Program;
use parse::{ParseError, Parser};

/// Parse a complete source string.
///
/// Returns the program together with every diagnostic found; an empty list
/// means the source parsed cleanly.
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();
    (program, parser.into_errors())
}
