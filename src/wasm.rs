//! WASM bindings for Nodal Core.
//!
//! This module provides JavaScript-friendly bindings for browser-based
//! circuit editors.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuit } from 'nodal_core';
//!
//! await init();
//!
//! const circuit = new WasmCircuit();
//! circuit.add_node(0, 100, 300);
//! circuit.add_node(1, 100, 100);
//! circuit.add_element('V', 1, 0, '5');
//! circuit.add_element('R', 1, 0, '1k');
//!
//! console.log(circuit.solve());
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{Circuit, NodeId};
use crate::dsl;
use crate::error::NodalError;
use crate::report::{self, ReportConfig};
use crate::solver;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: NodalError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible editable circuit.
///
/// Wraps a native [`Circuit`]; every solve works on a copy, so a failed
/// solve never changes what the editor holds.
#[wasm_bindgen]
pub struct WasmCircuit {
    circuit: Circuit,
    precision: usize,
}

#[wasm_bindgen]
impl WasmCircuit {
    /// Create an empty circuit.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCircuit {
        WasmCircuit {
            circuit: Circuit::new(),
            precision: report::DEFAULT_PRECISION,
        }
    }

    /// Replace the circuit with the contents of a circuit file.
    ///
    /// # Returns
    /// One message per skipped line (empty if every line was accepted).
    #[wasm_bindgen]
    pub fn load(&mut self, text: &str) -> Vec<String> {
        let loaded = dsl::load(text);
        self.circuit = loaded.circuit;
        loaded.diagnostics.iter().map(|d| d.to_string()).collect()
    }

    /// Add a node. Fails if the id is already used.
    #[wasm_bindgen]
    pub fn add_node(&mut self, id: i32, x: i32, y: i32) -> Result<(), JsValue> {
        self.circuit.add_node(i64::from(id), x, y).map_err(to_js)
    }

    /// Add an element.
    ///
    /// # Arguments
    /// * `kind` - One of `R`, `V`, `I`, `C`
    /// * `value` - Value text such as `4.7k` or `10mA` (ignored for `C`)
    #[wasm_bindgen]
    pub fn add_element(
        &mut self,
        kind: &str,
        node1: i32,
        node2: i32,
        value: &str,
    ) -> Result<(), JsValue> {
        self.circuit
            .add_element_str(kind, i64::from(node1), i64::from(node2), value)
            .map_err(to_js)
    }

    /// Remove all nodes and elements.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.circuit.clear();
    }

    /// Set the number of decimals used by [`WasmCircuit::solve`].
    #[wasm_bindgen]
    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision;
    }

    /// Solve the circuit and return the text report.
    #[wasm_bindgen]
    pub fn solve(&self) -> Result<String, JsValue> {
        let solution = solver::solve(&self.circuit).map_err(to_js)?;
        let config = ReportConfig::new().with_precision(self.precision);
        Ok(report::render(&solution, &config))
    }

    /// Solve the circuit and return the voltage of one node.
    ///
    /// # Returns
    /// The voltage, or `undefined` if the node doesn't exist.
    #[wasm_bindgen]
    pub fn node_voltage(&self, id: i32) -> Result<Option<f64>, JsValue> {
        let solution = solver::solve(&self.circuit).map_err(to_js)?;
        Ok(solution.voltage(NodeId(i64::from(id))))
    }
}

impl Default for WasmCircuit {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
