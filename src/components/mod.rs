//! Circuit elements.
//!
//! This module provides the two-terminal elements the solver understands:
//! - Passive: Resistor, Cable (ideal wire)
//! - Sources: Voltage Source, Current Source
//!
//! Each element knows its endpoints; the MNA assembler matches on
//! [`Element`] to decide how it enters the system.

mod linear;
mod sources;

pub use linear::{Cable, Resistor};
pub use sources::{CurrentSource, VoltageSource};

use std::fmt;

use crate::circuit::NodeId;
use crate::error::{NodalError, Result};

/// Element kinds, as written in circuit files and editor forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Resistor (`R`)
    Resistor,
    /// Voltage Source (`V`)
    VoltageSource,
    /// Current Source (`I`)
    CurrentSource,
    /// Ideal wire (`C`)
    Cable,
}

impl ElementKind {
    /// Parse an element kind from its one-letter code (case-insensitive).
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "R" => Ok(Self::Resistor),
            "V" => Ok(Self::VoltageSource),
            "I" => Ok(Self::CurrentSource),
            "C" => Ok(Self::Cable),
            _ => Err(NodalError::UnknownElementKind {
                kind: code.to_string(),
            }),
        }
    }

    /// The one-letter code for this kind.
    pub fn code(&self) -> char {
        match self {
            Self::Resistor => 'R',
            Self::VoltageSource => 'V',
            Self::CurrentSource => 'I',
            Self::Cable => 'C',
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A circuit element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Resistor(Resistor),
    VoltageSource(VoltageSource),
    CurrentSource(CurrentSource),
    Cable(Cable),
}

impl Element {
    /// Build an element of the given kind.
    ///
    /// `value` is the resistance, voltage or current; it is ignored for
    /// cables.
    pub fn from_kind(kind: ElementKind, nodes: [NodeId; 2], value: f64) -> Result<Self> {
        match kind {
            ElementKind::Resistor => {
                let r = Resistor::new(nodes, value);
                if !r.is_valid() {
                    return Err(NodalError::InvalidResistance {
                        node1: nodes[0],
                        node2: nodes[1],
                        value,
                    });
                }
                Ok(Element::Resistor(r))
            }
            ElementKind::VoltageSource => {
                Ok(Element::VoltageSource(VoltageSource::new(nodes, value)))
            }
            ElementKind::CurrentSource => {
                Ok(Element::CurrentSource(CurrentSource::new(nodes, value)))
            }
            ElementKind::Cable => Ok(Element::Cable(Cable::new(nodes))),
        }
    }

    /// The kind of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Resistor(_) => ElementKind::Resistor,
            Element::VoltageSource(_) => ElementKind::VoltageSource,
            Element::CurrentSource(_) => ElementKind::CurrentSource,
            Element::Cable(_) => ElementKind::Cable,
        }
    }

    /// Endpoints as `[node1, node2]`.
    pub fn nodes(&self) -> [NodeId; 2] {
        match self {
            Element::Resistor(r) => r.nodes,
            Element::VoltageSource(v) => v.nodes,
            Element::CurrentSource(i) => i.nodes,
            Element::Cable(c) => c.nodes,
        }
    }

    /// Mutable access to the endpoints.
    pub fn nodes_mut(&mut self) -> &mut [NodeId; 2] {
        match self {
            Element::Resistor(r) => &mut r.nodes,
            Element::VoltageSource(v) => &mut v.nodes,
            Element::CurrentSource(i) => &mut i.nodes,
            Element::Cable(c) => &mut c.nodes,
        }
    }

    /// The element's value; zero for cables.
    pub fn value(&self) -> f64 {
        match self {
            Element::Resistor(r) => r.resistance,
            Element::VoltageSource(v) => v.voltage,
            Element::CurrentSource(i) => i.current,
            Element::Cable(_) => 0.0,
        }
    }

    /// Check if this element is an ideal wire.
    pub fn is_cable(&self) -> bool {
        matches!(self, Element::Cable(_))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.nodes();
        match self {
            Element::Resistor(r) => write!(f, "R {}-{} {}", a, b, format_si(r.resistance, "ohm")),
            Element::VoltageSource(v) => write!(f, "V {}-{} {} V", a, b, v.voltage),
            Element::CurrentSource(i) => write!(f, "I {}-{} {} A", a, b, i.current),
            Element::Cable(_) => write!(f, "C {}-{} Cable", a, b),
        }
    }
}

/// Format a value with a simple SI prefix (`M`, `k`, `m`).
///
/// Values of 1000 and up use `k` or `M`, values below 1 use `m`.
pub fn format_si(value: f64, unit: &str) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e6 {
        format!("{} M{}", value / 1e6, unit)
    } else if magnitude >= 1e3 {
        format!("{} k{}", value / 1e3, unit)
    } else if magnitude < 1.0 && magnitude > 0.0 {
        format!("{} m{}", value * 1e3, unit)
    } else {
        format!("{} {}", value, unit)
    }
}
