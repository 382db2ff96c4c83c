//! Circuit topology and validation.
//!
//! This module provides the editable representation of a circuit. The
//! [`Circuit`] struct holds nodes and elements in insertion order; the
//! solver only ever works on a [`Circuit::snapshot`] of it.

mod graph;
mod types;
mod validate;

pub use graph::Circuit;
pub use types::*;
pub use validate::validate_circuit;
