//! Error types for the Nodal circuit solver.
//!
//! This module provides a unified error type [`NodalError`] that covers
//! every failure that can occur while editing a circuit, loading a circuit
//! file, and solving the network.

use thiserror::Error;

use crate::circuit::NodeId;

/// Result type alias using [`NodalError`].
pub type Result<T> = std::result::Result<T, NodalError>;

/// Unified error type for all Nodal operations.
#[derive(Error, Debug)]
pub enum NodalError {
    // ============ Validation Errors ============
    /// The circuit has no reference node
    #[error("Circuit has no ground node (a node with id 0 is required)")]
    MissingGround,

    /// A node with this id already exists
    #[error("Node {id} already exists")]
    DuplicateNode { id: NodeId },

    /// An element references a node that is not in the circuit
    #[error("Node {id} not found in circuit")]
    NodeNotFound { id: NodeId },

    /// Element kind code outside of R, V, I, C
    #[error("Unknown element kind '{kind}' (expected R, V, I or C)")]
    UnknownElementKind { kind: String },

    /// A value string that does not match the value grammar
    #[error("Invalid value format: '{text}'")]
    InvalidValue { text: String },

    /// A resistor whose resistance cannot be divided by
    #[error("Resistor between {node1} and {node2} has invalid resistance {value}")]
    InvalidResistance {
        node1: NodeId,
        node2: NodeId,
        value: f64,
    },

    // ============ Solve Errors ============
    /// Pivot fell below tolerance during elimination
    #[error("Singular system at pivot {pivot} - the network has no unique solution (floating node or conflicting sources)")]
    SingularMatrix { pivot: usize },

    // ============ Load Errors ============
    /// A malformed line in a circuit file
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Error reading circuit file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl NodalError {
    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(text: impl Into<String>) -> Self {
        Self::InvalidValue { text: text.into() }
    }

    /// Whether this error is raised before any matrix is assembled.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingGround
                | Self::DuplicateNode { .. }
                | Self::NodeNotFound { .. }
                | Self::UnknownElementKind { .. }
                | Self::InvalidValue { .. }
                | Self::InvalidResistance { .. }
        )
    }
}
