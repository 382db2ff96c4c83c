//! MNA (Modified Nodal Analysis) solver.
//!
//! This module provides the numerical engine for DC analysis.
//!
//! ## Pipeline
//!
//! 1. [`consolidate`]: nodes joined by cables are merged into one node per
//!    class, and every element endpoint is rewritten to its class node.
//! 2. [`MnaMatrix::assemble`]: one KCL equation per non-ground node, one
//!    constraint per voltage source.
//! 3. [`gauss::solve_augmented`]: Gaussian elimination with partial pivoting.
//! 4. [`Solution::map`]: voltages for every original node id, currents for
//!    every resistor and voltage source.
//!
//! ## Modified Nodal Analysis
//!
//! MNA assembles a system of equations Ax = z where:
//! - x contains node voltages and branch currents
//! - A is the conductance/coefficient matrix
//! - z is the source vector
//!
//! The matrix structure is:
//! ```text
//! [ G   B ] [ v ]   [ i ]
//! [ C   0 ] [ j ] = [ e ]
//! ```
//!
//! where:
//! - G is the conductance matrix (node equations)
//! - B, C connect voltage sources to nodes
//! - v is the vector of node voltages
//! - j is the vector of voltage source currents
//! - i is the sum of current sources into each node
//! - e is the vector of voltage source values

mod analysis;
mod consolidate;
pub mod gauss;
mod mna;
mod solution;

pub use analysis::{solve, Analysis};
pub use consolidate::{consolidate, Consolidated, NodeMap};
pub use mna::MnaMatrix;
pub use solution::{NodeVoltage, ResistorCurrent, Solution, SourceCurrent};

/// Smallest pivot magnitude accepted during elimination.
pub const PIVOT_TOLERANCE: f64 = 1e-12;

/// Resistors with a smaller voltage drop are reported as shorted.
pub const SHORT_CIRCUIT_THRESHOLD: f64 = 1e-6;
