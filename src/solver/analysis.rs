//! DC analysis of a circuit snapshot.

use crate::circuit::{validate_circuit, Circuit};
use crate::error::Result;

use super::consolidate::{consolidate, Consolidated};
use super::mna::MnaMatrix;
use super::solution::Solution;

/// A validated, consolidated and assembled circuit, ready to solve.
///
/// Holds its own copy of the circuit: the caller's circuit is never touched,
/// whether or not the solve succeeds.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The circuit as the user built it
    snapshot: Circuit,
    /// The circuit after cable contraction
    consolidated: Consolidated,
    /// MNA system built from `consolidated`
    matrix: MnaMatrix,
}

impl Analysis {
    /// Validate, copy, consolidate and assemble `circuit`.
    ///
    /// Fails before any assembly if the circuit has no ground node.
    pub fn new(circuit: &Circuit) -> Result<Self> {
        validate_circuit(circuit)?;

        let snapshot = circuit.snapshot();
        let (nodes, elements) = snapshot.clone().into_parts();
        let consolidated = consolidate(nodes, elements);
        let matrix = MnaMatrix::assemble(&consolidated.nodes, &consolidated.elements);

        Ok(Self {
            snapshot,
            consolidated,
            matrix,
        })
    }

    /// The assembled system.
    pub fn matrix(&self) -> &MnaMatrix {
        &self.matrix
    }

    /// The circuit after cable contraction, with its id mapping.
    pub fn consolidated(&self) -> &Consolidated {
        &self.consolidated
    }

    /// The copy of the circuit this analysis was built from.
    pub fn circuit(&self) -> &Circuit {
        &self.snapshot
    }

    /// Solve the system and map the result back onto the original nodes.
    pub fn solve(&self) -> Result<Solution> {
        let x = self.matrix.solve()?;
        Ok(Solution::map(
            self.snapshot.nodes(),
            self.snapshot.elements(),
            &self.consolidated,
            self.matrix.clone(),
            x,
        ))
    }
}

/// Solve a circuit in one call.
pub fn solve(circuit: &Circuit) -> Result<Solution> {
    Analysis::new(circuit)?.solve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::NodeId;
    use crate::components::ElementKind;
    use crate::error::NodalError;
    use approx::assert_abs_diff_eq;

    fn circuit(node_ids: &[i64]) -> Circuit {
        let mut c = Circuit::new();
        for &id in node_ids {
            c.add_node(id, 0, 0).unwrap();
        }
        c
    }

    #[test]
    fn test_missing_ground_fails_before_assembly() {
        let mut c = circuit(&[1, 2]);
        c.add_element(ElementKind::Resistor, 1, 2, 100.0).unwrap();
        assert!(matches!(Analysis::new(&c), Err(NodalError::MissingGround)));
    }

    #[test]
    fn test_ohms_law() {
        let mut c = circuit(&[0, 1]);
        c.add_element(ElementKind::Resistor, 0, 1, 1000.0).unwrap();
        c.add_element(ElementKind::CurrentSource, 0, 1, 0.01).unwrap();

        let solution = solve(&c).unwrap();
        assert_abs_diff_eq!(solution.voltage(NodeId(1)).unwrap(), 10.0, epsilon = 1e-6);
        assert_eq!(solution.voltage(NodeId(0)), Some(0.0));

        let r = &solution.resistor_currents()[0];
        assert_abs_diff_eq!(r.voltage_drop, -10.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.current, -0.01, epsilon = 1e-9);
        assert!(!r.shorted);
    }

    #[test]
    fn test_voltage_divider() {
        let mut c = circuit(&[0, 1, 2]);
        c.add_element(ElementKind::VoltageSource, 1, 0, 5.0).unwrap();
        c.add_element(ElementKind::Resistor, 1, 2, 1000.0).unwrap();
        c.add_element(ElementKind::Resistor, 2, 0, 1000.0).unwrap();

        let solution = solve(&c).unwrap();
        assert_abs_diff_eq!(solution.voltage(NodeId(1)).unwrap(), 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.voltage(NodeId(2)).unwrap(), 2.5, epsilon = 1e-9);

        // The source delivers 2.5 mA, flowing out of its positive terminal.
        let source = &solution.source_currents()[0];
        assert_abs_diff_eq!(source.current, -0.0025, epsilon = 1e-12);
    }

    #[test]
    fn test_cable_nodes_share_voltage() {
        let mut c = circuit(&[0, 1, 2, 3]);
        c.add_element(ElementKind::VoltageSource, 1, 0, 9.0).unwrap();
        c.add_element(ElementKind::Resistor, 1, 2, 1000.0).unwrap();
        c.add_element(ElementKind::Cable, 2, 3, 0.0).unwrap();
        c.add_element(ElementKind::Resistor, 3, 0, 2000.0).unwrap();

        let solution = solve(&c).unwrap();
        let v2 = solution.voltage(NodeId(2)).unwrap();
        let v3 = solution.voltage(NodeId(3)).unwrap();
        assert_eq!(v2, v3);
        assert_abs_diff_eq!(v2, 6.0, epsilon = 1e-9);

        // Node 3 is folded into node 2, so the system has one fewer unknown.
        assert_eq!(solution.matrix().num_nodes, 2);
        let nv3 = solution.node_voltages()[3];
        assert_eq!(nv3.canonical, Some(NodeId(2)));
    }

    #[test]
    fn test_cable_to_ground_keeps_reference() {
        let mut c = circuit(&[5, 0, 1]);
        c.add_element(ElementKind::Cable, 5, 0, 0.0).unwrap();
        c.add_element(ElementKind::VoltageSource, 1, 5, 3.0).unwrap();
        c.add_element(ElementKind::Resistor, 1, 5, 100.0).unwrap();

        let solution = solve(&c).unwrap();
        assert_eq!(solution.voltage(NodeId(5)), Some(0.0));
        assert_abs_diff_eq!(solution.voltage(NodeId(1)).unwrap(), 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_shorted_resistor() {
        let mut c = circuit(&[0, 1, 2]);
        c.add_element(ElementKind::VoltageSource, 1, 0, 5.0).unwrap();
        c.add_element(ElementKind::Resistor, 1, 2, 1000.0).unwrap();
        c.add_element(ElementKind::Cable, 1, 2, 0.0).unwrap();
        c.add_element(ElementKind::Resistor, 2, 0, 1000.0).unwrap();

        let solution = solve(&c).unwrap();
        let currents = solution.resistor_currents();
        assert_eq!(currents.len(), 2);
        assert!(currents[0].shorted);
        assert_eq!(currents[0].nodes, [NodeId(1), NodeId(2)]);
        assert_eq!(currents[0].current, 0.0);
        assert!(!currents[1].shorted);
        assert_abs_diff_eq!(currents[1].current, 0.005, epsilon = 1e-12);
    }

    #[test]
    fn test_floating_node_is_singular() {
        let mut c = circuit(&[0, 1, 2, 3]);
        c.add_element(ElementKind::Resistor, 1, 0, 100.0).unwrap();
        c.add_element(ElementKind::Resistor, 2, 3, 100.0).unwrap();
        assert!(matches!(solve(&c), Err(NodalError::SingularMatrix { .. })));
    }

    #[test]
    fn test_ground_only() {
        let c = circuit(&[0]);
        let solution = solve(&c).unwrap();
        assert_eq!(solution.voltage(NodeId(0)), Some(0.0));
        assert!(solution.augmented_matrix().is_empty());
    }

    #[test]
    fn test_solve_leaves_circuit_untouched() {
        let mut c = circuit(&[0, 1, 2]);
        c.add_element(ElementKind::Cable, 1, 2, 0.0).unwrap();
        c.add_element(ElementKind::Resistor, 2, 0, 10.0).unwrap();
        let before = c.clone();

        let analysis = Analysis::new(&c).unwrap();
        let _ = analysis.solve().unwrap();
        assert_eq!(c, before);
        assert_eq!(analysis.circuit(), &before);
        assert_eq!(analysis.consolidated().nodes.len(), 2);
    }

    #[test]
    fn test_matrix_text_matches_solved_system() {
        let mut c = circuit(&[0, 1]);
        c.add_element(ElementKind::Resistor, 1, 0, 4.0).unwrap();
        c.add_element(ElementKind::CurrentSource, 0, 1, 1.0).unwrap();

        let analysis = Analysis::new(&c).unwrap();
        let solution = analysis.solve().unwrap();
        assert_eq!(solution.matrix(), analysis.matrix());
        assert_eq!(solution.augmented_matrix(), analysis.matrix().augmented_string());
        assert_eq!(solution.augmented_matrix(), "    0.2500     1.0000 \n");
    }
}
