//! Parser for circuit files.

use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use super::value::parse_value;
use crate::circuit::NodeId;
use crate::components::ElementKind;
use crate::error::{NodalError, Result};

/// Parser for circuit files.
///
/// A malformed line never stops the parse: it is recorded as a
/// [`Diagnostic`] and the parser moves on to the next line.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Parse the entire circuit file.
    pub fn parse(&mut self) -> CircuitAst {
        let mut ast = CircuitAst::new();

        while self.current.kind != TokenKind::Eof {
            // Skip empty lines
            if self.current.kind == TokenKind::Newline {
                self.advance();
                continue;
            }

            let line = self.current.line;
            let words = self.read_line();
            match parse_statement(&words, line) {
                Ok(statement) => ast.statements.push(statement),
                Err(err) => {
                    let diagnostic = Diagnostic::new(line, describe(err));
                    log::warn!("Skipping {}", diagnostic);
                    ast.diagnostics.push(diagnostic);
                }
            }
        }

        ast
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Collect the words of the current line and consume its newline.
    fn read_line(&mut self) -> Vec<String> {
        let mut words = Vec::new();
        while self.current.kind == TokenKind::Word {
            words.push(std::mem::take(&mut self.current.text));
            self.advance();
        }
        if self.current.kind == TokenKind::Newline {
            self.advance();
        }
        words
    }
}

fn describe(err: NodalError) -> String {
    match err {
        NodalError::ParseError { message, .. } => message,
        other => other.to_string(),
    }
}

fn parse_statement(words: &[String], line: usize) -> Result<Statement> {
    let keyword = words[0].to_ascii_uppercase();
    match keyword.as_str() {
        "NODE" | "NODO" => parse_node(words, line),
        "ELEMENT" | "ELEMENTO" => parse_element(words, line),
        _ => Err(NodalError::parse(
            line,
            format!("unknown statement '{}'", words[0]),
        )),
    }
}

fn parse_node(words: &[String], line: usize) -> Result<Statement> {
    if words.len() < 4 {
        return Err(NodalError::parse(
            line,
            format!("NODE expects <id> <x> <y>, got {} argument(s)", words.len() - 1),
        ));
    }
    Ok(Statement::Node {
        id: parse_node_id(&words[1], line)?,
        x: parse_int(&words[2], "x coordinate", line)?,
        y: parse_int(&words[3], "y coordinate", line)?,
        line,
    })
}

fn parse_element(words: &[String], line: usize) -> Result<Statement> {
    if words.len() < 4 {
        return Err(NodalError::parse(
            line,
            format!(
                "ELEMENT expects <kind> <node1> <node2> <value>, got {} argument(s)",
                words.len() - 1
            ),
        ));
    }

    let kind = ElementKind::from_code(&words[1])?;
    let nodes = [
        parse_node_id(&words[2], line)?,
        parse_node_id(&words[3], line)?,
    ];

    // Cables carry no value; one may still be written and is ignored.
    let value = match (kind, words.get(4)) {
        (ElementKind::Cable, _) => 0.0,
        (_, Some(text)) => parse_value(text)?,
        (_, None) => {
            return Err(NodalError::parse(
                line,
                format!("ELEMENT {} is missing its value", kind),
            ))
        }
    };

    Ok(Statement::Element {
        kind,
        nodes,
        value,
        line,
    })
}

fn parse_node_id(text: &str, line: usize) -> Result<NodeId> {
    text.parse::<i64>()
        .map(NodeId)
        .map_err(|_| NodalError::parse(line, format!("invalid node id '{}'", text)))
}

fn parse_int(text: &str, what: &str, line: usize) -> Result<i32> {
    text.parse::<i32>()
        .map_err(|_| NodalError::parse(line, format!("invalid {} '{}'", what, text)))
}
