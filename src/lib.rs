//! # Nodal Core
//!
//! A DC solver for linear resistive networks.
//!
//! This library provides:
//! - An editable circuit model (nodes by integer id, two-terminal elements)
//! - A line-oriented circuit file format and SI value grammar
//! - Modified Nodal Analysis (MNA) with ideal-wire contraction
//! - Gaussian elimination with partial pivoting
//! - Per-node voltages, per-resistor currents and short-circuit detection
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Circuit topology, construction API and validation
//! - [`components`] - Resistor, voltage source, current source and cable
//! - [`dsl`] - Circuit file loader and value parser
//! - [`solver`] - Cable consolidation, MNA assembly and solving
//! - [`report`] - Text rendering of a solution
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! nodal divider.cir --precision 6
//! ```
//!
//! ### Library
//!
//! ```
//! use nodal_core::{circuit::NodeId, components::ElementKind, solve, Circuit};
//!
//! let mut circuit = Circuit::new();
//! circuit.add_node(0, 0, 0)?;
//! circuit.add_node(1, 0, 0)?;
//! circuit.add_element(ElementKind::Resistor, 0, 1, 1000.0)?;
//! circuit.add_element(ElementKind::CurrentSource, 0, 1, 0.01)?;
//!
//! let solution = solve(&circuit)?;
//! assert!((solution.voltage(NodeId(1)).unwrap() - 10.0).abs() < 1e-9);
//! # Ok::<(), nodal_core::NodalError>(())
//! ```
//!
//! ## Solution Method
//!
//! Every solve works on a private copy of the circuit:
//!
//! 1. Validate (ground present, endpoints exist, resistances positive)
//! 2. Merge nodes joined by cables into one node per class
//! 3. Assemble the system matrix A and source vector z
//! 4. Solve Ax = z for node voltages and voltage source currents
//! 5. Map the result back onto every node id the user declared

pub mod circuit;
pub mod components;
pub mod dsl;
pub mod error;
pub mod report;
pub mod solver;

// Re-export main types for convenience
pub use circuit::Circuit;
pub use error::{NodalError, Result};
pub use solver::{solve, Analysis, Solution};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuit;
