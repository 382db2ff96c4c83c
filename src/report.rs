//! Plain-text rendering of a solved circuit.

use std::fmt::Write as _;

use crate::solver::Solution;

/// Default number of decimals in reported values.
pub const DEFAULT_PRECISION: usize = 4;

/// Configuration for the text report.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Maximum decimals per value; trailing zeros are dropped.
    pub precision: usize,
    /// Include the augmented matrix section.
    pub show_matrix: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            show_matrix: true,
        }
    }
}

impl ReportConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of decimals.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Show or hide the augmented matrix.
    pub fn with_matrix(mut self, show_matrix: bool) -> Self {
        self.show_matrix = show_matrix;
        self
    }
}

/// Format `value` with at most `precision` decimals, trimming trailing zeros.
pub fn format_decimal(value: f64, precision: usize) -> String {
    let mut text = format!("{:.*}", precision, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Render a solution as text.
///
/// ```text
/// --- Augmented matrix ---
///     0.0010    -0.0010     1.0000     0.0000
/// ...
///
/// --- Results ---
/// Node 0 -> V = 0 V
/// Node 1 -> V = 5 V
///
/// Element currents:
/// Resistor between N1 and N2: I = 0.0025 A, Vdrop = 2.5 V
/// ```
pub fn render(solution: &Solution, config: &ReportConfig) -> String {
    let fmt = |v: f64| format_decimal(v, config.precision);
    let mut out = String::new();

    if config.show_matrix {
        let _ = writeln!(out, "--- Augmented matrix ---");
        let _ = writeln!(out, "{}", solution.augmented_matrix());
    }

    let _ = writeln!(out, "--- Results ---");
    for nv in solution.node_voltages() {
        match nv.voltage {
            Some(v) => {
                let _ = writeln!(out, "Node {} -> V = {} V", nv.id.0, fmt(v));
            }
            None => {
                let _ = writeln!(out, "Node {} -> V = N/A", nv.id.0);
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Element currents:");
    for r in solution.resistor_currents() {
        let _ = write!(
            out,
            "Resistor between {} and {}: I = {} A, Vdrop = {} V",
            r.nodes[0],
            r.nodes[1],
            fmt(r.current),
            fmt(r.voltage_drop)
        );
        if r.shorted {
            let _ = write!(out, "  --> shorted");
        }
        let _ = writeln!(out);
    }
    for s in solution.source_currents() {
        let _ = writeln!(
            out,
            "Voltage source between {} and {}: I = {} A",
            s.nodes[0],
            s.nodes[1],
            fmt(s.current)
        );
    }

    out
}
