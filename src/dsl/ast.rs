//! Syntax tree types for circuit files.

use std::fmt;

use crate::circuit::{Circuit, NodeId};
use crate::components::ElementKind;

/// Parsed contents of a circuit file, before any node lookups.
#[derive(Debug, Clone, Default)]
pub struct CircuitAst {
    /// Well-formed statements, in file order
    pub statements: Vec<Statement>,
    /// Lines that could not be parsed
    pub diagnostics: Vec<Diagnostic>,
}

impl CircuitAst {
    /// Create a new empty AST.
    pub fn new() -> Self {
        Self::default()
    }
}

/// One well-formed line of a circuit file.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `NODE <id> <x> <y>`
    Node {
        id: NodeId,
        x: i32,
        y: i32,
        line: usize,
    },
    /// `ELEMENT <kind> <node1> <node2> <value>`
    Element {
        kind: ElementKind,
        nodes: [NodeId; 2],
        value: f64,
        line: usize,
    },
}

impl Statement {
    /// Source line number.
    pub fn line(&self) -> usize {
        match self {
            Statement::Node { line, .. } | Statement::Element { line, .. } => *line,
        }
    }
}

/// A skipped line and the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Line number (1-indexed)
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Result of loading a circuit file: everything that could be built, plus
/// one diagnostic per skipped line.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub circuit: Circuit,
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    /// Check whether every line was accepted.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
