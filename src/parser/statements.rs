//! Statement parsing implementation
//!
//! Micron has three statement forms:
//!
//! - Bindings: `let x = 5;`
//! - Returns: `return x;`
//! - Expression statements: `x + 1;`
//!
//! # Grammar
//!
//! ```text
//! statement ::= let_stmt | return_stmt | expr_stmt
//! let_stmt  ::= "let" IDENT "=" expression [";"]
//! return_stmt ::= "return" expression [";"]
//! expr_stmt ::= expression [";"]
//! ```
//!
//! The trailing `;` is optional so that a final statement can end at the end
//! of input. All parsing methods are `pub(crate)` methods on the [`Parser`]
//! struct and return `None` after recording a diagnostic.

use crate::parser::ast::*;
use crate::parser::expressions::Precedence;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;

impl Parser<'_> {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        tracing::trace!(token = %self.current_token, "parse statement");
        match self.current_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parse let statement: let name = value;
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current_token.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier {
            token: self.current_token.clone(),
            value: self.current_token.literal.clone(),
        };

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Let(LetStatement { token, name, value }))
    }

    /// Parse return statement: return value;
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current_token.clone();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Return(ReturnStatement { token, value }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current_token.clone();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Expression(ExpressionStatement { token, value }))
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::Parser;

    fn parse(source: &str) -> Program {
        let mut parser = Parser::new(source);
        let program = parser.parse_program();
        assert!(
            parser.errors().is_empty(),
            "unexpected errors: {:?}",
            parser.errors()
        );
        program
    }

    #[test]
    fn test_let_statements() {
        let program = parse("let x = 5;\nlet y = 10;\nlet test_test = 13371337;");

        let names: Vec<&str> = program
            .statements
            .iter()
            .map(|s| match s {
                Statement::Let(stmt) => stmt.name.value.as_str(),
                other => panic!("Expected let statement, got {:?}", other),
            })
            .collect();
        assert_eq!(names, vec!["x", "y", "test_test"]);
    }

    #[test]
    fn test_return_statements() {
        let program = parse("return 5;\nreturn 10;\nreturn a + b;");

        assert_eq!(program.statements.len(), 3);
        for statement in &program.statements {
            match statement {
                Statement::Return(stmt) => assert_eq!(stmt.token_literal(), "return"),
                other => panic!("Expected return statement, got {:?}", other),
            }
        }
        assert_eq!(program.statements[2].to_string(), "return (a + b);");
    }

    #[test]
    fn test_semicolon_is_optional_at_end() {
        let program = parse("let x = 1");
        assert_eq!(program.to_string(), "let x = 1;");

        let program = parse("x");
        assert_eq!(program.statements.len(), 1);
    }

    #[test]
    fn test_return_without_value_is_an_error() {
        let mut parser = Parser::new("return;");
        let program = parser.parse_program();

        assert!(program.statements.is_empty());
        assert_eq!(parser.errors().len(), 1);
    }
}
