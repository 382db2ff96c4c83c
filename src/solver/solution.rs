//! Mapping solved unknowns back onto the user's circuit.

use std::collections::HashMap;

use crate::circuit::{BranchId, ElementId, Node, NodeId};
use crate::components::Element;

use super::consolidate::Consolidated;
use super::mna::MnaMatrix;
use super::SHORT_CIRCUIT_THRESHOLD;

/// Voltage reported for one original node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeVoltage {
    pub id: NodeId,
    /// Node that represents `id` in the solved system
    pub canonical: Option<NodeId>,
    /// `None` if the node is absent from the solved system
    pub voltage: Option<f64>,
}

/// Current through one resistor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistorCurrent {
    pub element: ElementId,
    /// Endpoints as the user declared them
    pub nodes: [NodeId; 2],
    pub resistance: f64,
    /// Current from `nodes[0]` to `nodes[1]`, in amps
    pub current: f64,
    /// `V(nodes[0]) - V(nodes[1])`, in volts
    pub voltage_drop: f64,
    /// Drop is below [`SHORT_CIRCUIT_THRESHOLD`]
    pub shorted: bool,
}

/// Current through one voltage source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceCurrent {
    pub element: ElementId,
    /// Endpoints as the user declared them
    pub nodes: [NodeId; 2],
    pub voltage: f64,
    /// Current entering the source at `nodes[0]` and leaving at `nodes[1]`.
    /// A source delivering power has a negative value.
    pub current: f64,
}

/// A solved circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    matrix: MnaMatrix,
    matrix_text: String,
    unknowns: Vec<f64>,
    node_voltages: Vec<NodeVoltage>,
    resistor_currents: Vec<ResistorCurrent>,
    source_currents: Vec<SourceCurrent>,
}

impl Solution {
    /// Project the solution vector `x` of `matrix` onto the original nodes
    /// and elements.
    ///
    /// `original_nodes` and `original_elements` are the circuit before cable
    /// consolidation; `consolidated` is what was assembled into `matrix`.
    pub fn map(
        original_nodes: &[Node],
        original_elements: &[Element],
        consolidated: &Consolidated,
        matrix: MnaMatrix,
        x: Vec<f64>,
    ) -> Self {
        let mut solved: HashMap<NodeId, f64> = HashMap::with_capacity(consolidated.nodes.len() + 1);
        solved.insert(NodeId::GROUND, 0.0);
        for node in &consolidated.nodes {
            if let Some(idx) = matrix.node_index(node.id) {
                solved.insert(node.id, x[idx]);
            }
        }
        let potential = |id: NodeId| solved.get(&id).copied().unwrap_or(0.0);

        let node_voltages = original_nodes
            .iter()
            .map(|node| {
                let canonical = consolidated.map.canonical(node.id);
                NodeVoltage {
                    id: node.id,
                    canonical,
                    voltage: canonical.and_then(|rep| solved.get(&rep).copied()),
                }
            })
            .collect();

        let mut resistor_currents = Vec::new();
        for (idx, element) in consolidated.elements.iter().enumerate() {
            if let Element::Resistor(r) = element {
                let voltage_drop = potential(r.nodes[0]) - potential(r.nodes[1]);
                let shorted = voltage_drop.abs() < SHORT_CIRCUIT_THRESHOLD;
                let nodes = original_elements.get(idx).map_or(r.nodes, |e| e.nodes());
                if shorted {
                    log::warn!("Resistor between {} and {} is shorted", nodes[0], nodes[1]);
                }
                resistor_currents.push(ResistorCurrent {
                    element: ElementId(idx),
                    nodes,
                    resistance: r.resistance,
                    current: voltage_drop / r.resistance,
                    voltage_drop,
                    shorted,
                });
            }
        }

        let source_currents = matrix
            .branches()
            .iter()
            .enumerate()
            .filter_map(|(branch, &element)| {
                let Element::VoltageSource(v) = consolidated.elements.get(element.0)? else {
                    return None;
                };
                let nodes = original_elements.get(element.0).map_or(v.nodes, |e| e.nodes());
                Some(SourceCurrent {
                    element,
                    nodes,
                    voltage: v.voltage,
                    current: x[matrix.branch_index(BranchId(branch))],
                })
            })
            .collect();

        let matrix_text = matrix.augmented_string();

        Self {
            matrix,
            matrix_text,
            unknowns: x,
            node_voltages,
            resistor_currents,
            source_currents,
        }
    }

    /// Voltage of an original node id; `None` if the id is unknown.
    pub fn voltage(&self, id: NodeId) -> Option<f64> {
        self.node_voltages
            .iter()
            .find(|nv| nv.id == id)
            .and_then(|nv| nv.voltage)
    }

    /// Voltage of every original node, in circuit order.
    pub fn node_voltages(&self) -> &[NodeVoltage] {
        &self.node_voltages
    }

    /// Current of every resistor, in circuit order.
    pub fn resistor_currents(&self) -> &[ResistorCurrent] {
        &self.resistor_currents
    }

    /// Current of every voltage source, in circuit order.
    pub fn source_currents(&self) -> &[SourceCurrent] {
        &self.source_currents
    }

    /// The augmented matrix that was handed to the solver, as text.
    pub fn augmented_matrix(&self) -> &str {
        &self.matrix_text
    }

    /// The assembled system.
    pub fn matrix(&self) -> &MnaMatrix {
        &self.matrix
    }

    /// The raw solution vector: node voltages, then source currents.
    pub fn unknowns(&self) -> &[f64] {
        &self.unknowns
    }
}
