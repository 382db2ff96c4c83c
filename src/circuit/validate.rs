//! Circuit validation.

use crate::components::Element;
use crate::error::{NodalError, Result};

use super::Circuit;

/// Validate a circuit for solving.
///
/// Checks:
/// - The ground node (id 0) exists
/// - Every element endpoint references a node in the circuit
/// - Every resistance is finite and positive
///
/// The construction API already enforces the last two for circuits built
/// through it; they are re-checked here so the solver never divides by a
/// bad resistance.
pub fn validate_circuit(circuit: &Circuit) -> Result<()> {
    if !circuit.has_ground() {
        return Err(NodalError::MissingGround);
    }

    for element in circuit.elements() {
        for id in element.nodes() {
            if !circuit.contains_node(id) {
                return Err(NodalError::NodeNotFound { id });
            }
        }

        if let Element::Resistor(r) = element {
            if !r.is_valid() {
                return Err(NodalError::InvalidResistance {
                    node1: r.nodes[0],
                    node2: r.nodes[1],
                    value: r.resistance,
                });
            }
        }
    }

    Ok(())
}
