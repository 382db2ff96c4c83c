//! Circuit file loader and value grammar.
//!
//! Circuit files are line-oriented, with whitespace-separated tokens.
//!
//! # Grammar Overview
//!
//! ```text
//! file      = { line }
//! line      = node | element | comment | empty
//! comment   = ('#' | ';') { any_char }
//! node      = "NODE" id x y
//! element   = "ELEMENT" kind id id [value]
//!
//! kind      = "R" | "V" | "I" | "C"
//! id        = ['-'] digit+
//! x, y      = ['-'] digit+
//! value     = digit+ ['.' digit+] [prefix] [unit]
//! prefix    = 'k' | 'K' | 'm' | 'u' | 'U' | 'M'
//! ```
//!
//! Keywords and kinds are case-insensitive, and `NODO` / `ELEMENTO` are
//! accepted as aliases. The value is required for every kind except `C`.
//!
//! # Element Kinds
//!
//! | Kind | Description | Value |
//! |------|-------------|-------|
//! | R | Resistor | resistance in ohms |
//! | V | Voltage Source | `V(node1) - V(node2)` in volts |
//! | I | Current Source | amps, flowing from node1 through the source into node2 |
//! | C | Cable (ideal wire) | ignored |
//!
//! # Example
//!
//! ```text
//! # Voltage divider
//! NODE 0 100 300
//! NODE 1 100 100
//! NODE 2 300 100
//! ELEMENT V 1 0 5
//! ELEMENT R 1 2 1k
//! ELEMENT R 2 0 1k
//! ```
//!
//! Loading never aborts on a bad line. Lines that are malformed, that
//! redeclare a node, or that reference a node not declared on an earlier
//! line are skipped and reported in [`LoadReport::diagnostics`].

mod ast;
mod lexer;
mod parser;
mod value;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use value::parse_value;

use crate::circuit::Circuit;
use crate::error::{NodalError, Result};

/// Parse circuit file text into an AST.
pub fn parse(input: &str) -> CircuitAst {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

/// Apply parsed statements to a fresh circuit, in file order.
pub fn build(ast: CircuitAst) -> LoadReport {
    let mut circuit = Circuit::new();
    let mut diagnostics = ast.diagnostics;

    for statement in ast.statements {
        let line = statement.line();
        let applied = match statement {
            Statement::Node { id, x, y, .. } => circuit.add_node(id.0, x, y),
            Statement::Element {
                kind, nodes, value, ..
            } => circuit.add_element(kind, nodes[0].0, nodes[1].0, value),
        };
        if let Err(err) = applied {
            let diagnostic = Diagnostic::new(line, err.to_string());
            log::warn!("Skipping {}", diagnostic);
            diagnostics.push(diagnostic);
        }
    }

    diagnostics.sort_by_key(|d| d.line);
    log::debug!(
        "Loaded {} node(s), {} element(s), skipped {} line(s)",
        circuit.nodes().len(),
        circuit.elements().len(),
        diagnostics.len()
    );

    LoadReport {
        circuit,
        diagnostics,
    }
}

/// Parse and build a circuit from file text.
pub fn load(input: &str) -> LoadReport {
    build(parse(input))
}

/// Read and load a circuit file.
pub fn load_file(path: &std::path::Path) -> Result<LoadReport> {
    let content = std::fs::read_to_string(path).map_err(|e| NodalError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(load(&content))
}
