//! Line-oriented shell for the Micron front end
//!
//! Each line read from the input gets a fresh [`Lexer`] (and [`Parser`] in
//! [`ReplMode::Ast`]); no state carries over between lines. This is the only
//! part of the crate that writes to an output stream.

use crate::parser::lexer::Lexer;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;
use crossterm::style::{Color, Stylize};
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const PROMPT: &str = ">> ";

pub const USAGE: &str = "\
Usage: micron [--tokens | --ast] [--no-color]

  --tokens    print the tokens of each line (default)
  --ast       print the parsed program, or its syntax errors
  --no-color  disable colored output
  --help      show this message";

/// What the shell prints for each line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplMode {
    #[default]
    Tokens,
    Ast,
}

/// Shell settings, taken from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub mode: ReplMode,
    pub color: bool,
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            mode: ReplMode::default(),
            color: true,
            prompt: PROMPT.to_string(),
        }
    }
}

/// Outcome of reading the command line
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Run(ReplConfig),
    Help,
}

/// Error for a command line the shell does not understand
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unrecognized argument '{}'\n\n{}", .argument, USAGE)]
pub struct UsageError {
    pub argument: String,
}

impl ReplConfig {
    /// Build a config from command-line arguments (program name excluded).
    pub fn from_args<I, S>(args: I) -> Result<CliAction, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = ReplConfig::default();

        for arg in args {
            match arg.as_ref() {
                "--tokens" => config.mode = ReplMode::Tokens,
                "--ast" => config.mode = ReplMode::Ast,
                "--no-color" => config.color = false,
                "-h" | "--help" => return Ok(CliAction::Help),
                other => {
                    return Err(UsageError {
                        argument: other.to_string(),
                    })
                }
            }
        }

        Ok(CliAction::Run(config))
    }
}

/// Colors used by the shell
struct Theme {
    prompt: Color,
    kind: Color,
    error: Color,
    output: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

const DEFAULT_THEME: Theme = Theme {
    prompt: rgb(137, 180, 250), // Blue
    kind: rgb(250, 179, 135),   // Orange
    error: rgb(243, 139, 168),  // Red
    output: rgb(166, 227, 161), // Green
};

pub struct Repl {
    config: ReplConfig,
}

impl Repl {
    pub fn new(config: ReplConfig) -> Self {
        Self { config }
    }

    /// Read lines from `input` until it is exhausted, answering each one on
    /// `output`.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<()> {
        let mut lines = input.lines();

        loop {
            write!(
                output,
                "{}",
                self.paint(&self.config.prompt, DEFAULT_THEME.prompt)
            )?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                return Ok(());
            };
            let line = line?;
            tracing::trace!(line = %line, "read line");

            match self.config.mode {
                ReplMode::Tokens => self.print_tokens(&line, &mut output)?,
                ReplMode::Ast => self.print_program(&line, &mut output)?,
            }
        }
    }

    fn print_tokens<W: Write>(&self, line: &str, output: &mut W) -> io::Result<()> {
        for token in Lexer::new(line).take_while(|t| !t.is(TokenKind::Eof)) {
            let kind = format!("{:<8}", token.kind);
            writeln!(
                output,
                "{} {:?}",
                self.paint(&kind, DEFAULT_THEME.kind),
                token.literal
            )?;
        }
        Ok(())
    }

    fn print_program<W: Write>(&self, line: &str, output: &mut W) -> io::Result<()> {
        let mut parser = Parser::new(line);
        let program = parser.parse_program();

        if parser.errors().is_empty() {
            return writeln!(
                output,
                "{}",
                self.paint(&program.to_string(), DEFAULT_THEME.output)
            );
        }

        writeln!(output, "{}", self.paint("parser errors:", DEFAULT_THEME.error))?;
        for error in parser.errors() {
            writeln!(output, "\t{}", error)?;
        }
        Ok(())
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.config.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mode: ReplMode, input: &str) -> String {
        let repl = Repl::new(ReplConfig {
            mode,
            color: false,
            prompt: PROMPT.to_string(),
        });
        let mut output = Vec::new();
        repl.run(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_token_mode() {
        let output = run(ReplMode::Tokens, "let x = 5;\n");

        assert!(output.starts_with(PROMPT));
        assert!(output.contains("LET      \"let\""));
        assert!(output.contains("IDENT    \"x\""));
        assert!(output.contains("INT      \"5\""));
        assert!(!output.contains("EOF"));
    }

    #[test]
    fn test_ast_mode() {
        let output = run(ReplMode::Ast, "1 + 2 * 3\nlet = 1\n");

        assert!(output.contains("(1 + (2 * 3))"));
        assert!(output.contains("parser errors:"));
        assert!(output.contains("expected next token to be IDENT, got = instead"));
    }

    #[test]
    fn test_each_line_is_independent() {
        let output = run(ReplMode::Ast, "(1 +\n2)\n");

        // Neither half parses on its own.
        assert_eq!(output.matches("parser errors:").count(), 2);
    }

    #[test]
    fn test_config_from_args() {
        assert_eq!(
            ReplConfig::from_args(Vec::<String>::new()),
            Ok(CliAction::Run(ReplConfig::default()))
        );

        match ReplConfig::from_args(["--ast", "--no-color"]) {
            Ok(CliAction::Run(config)) => {
                assert_eq!(config.mode, ReplMode::Ast);
                assert!(!config.color);
            }
            other => panic!("Expected run action, got {:?}", other),
        }

        assert_eq!(ReplConfig::from_args(["--help"]), Ok(CliAction::Help));
        assert_eq!(
            ReplConfig::from_args(["--bogus"]),
            Err(UsageError {
                argument: "--bogus".to_string()
            })
        );
    }

    #[test]
    fn test_usage_error_message() {
        let error = UsageError {
            argument: "--bogus".to_string(),
        };
        let message = error.to_string();

        assert!(message.starts_with("unrecognized argument '--bogus'\n\n"));
        assert!(message.ends_with(USAGE));
    }

    #[test]
    fn test_ast_mode_survives_deep_nesting() {
        let line = format!("{}1\nok\n", "-".repeat(10_000));
        let output = run(ReplMode::Ast, &line);

        assert!(output.contains("expression nested too deeply"));
        assert!(output.contains("ok"));
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let output = run(ReplMode::Tokens, "a\n");
        assert!(!output.contains('\u{1b}'));
    }
}
