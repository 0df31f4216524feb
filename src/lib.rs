//! # Introduction
//!
//! Micron is a small expression-oriented language. This crate is its front
//! end: it scans source text into tokens and parses them into an AST,
//! collecting syntax errors instead of stopping at the first one.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST + diagnostics
//! ```
//!
//! 1. [`parser`] — the scanner, the Pratt parser and the AST.
//! 2. [`repl`] — the line-oriented shell behind the `micron` binary; prints
//!    tokens or rendered ASTs for each line typed.
//!
//! Nothing here evaluates programs, checks types or tracks bindings.
//!
//! ## Example
//!
//! ```
//! let (program, errors) = micron::parser::parse("let x = 1 + 2 * 3;");
//! assert!(errors.is_empty());
//! assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
//! ```

pub mod parser;
pub mod repl;
