//! End-to-end solves through the public API.

use approx::assert_abs_diff_eq;
use nodal_core::circuit::NodeId;
use nodal_core::components::ElementKind;
use nodal_core::report::{render, ReportConfig};
use nodal_core::{dsl, solve, Analysis, Circuit, NodalError};

fn circuit_with_nodes(ids: &[i64]) -> Circuit {
    let mut c = Circuit::new();
    for &id in ids {
        c.add_node(id, 0, 0).unwrap();
    }
    c
}

/// Two voltage sources, a current source, a cable and a resistor mesh.
fn bridge() -> Circuit {
    let mut c = circuit_with_nodes(&[0, 1, 2, 3, 4, 5]);
    c.add_element(ElementKind::VoltageSource, 1, 0, 12.0).unwrap();
    c.add_element(ElementKind::Resistor, 1, 2, 1000.0).unwrap();
    c.add_element(ElementKind::Resistor, 1, 3, 2200.0).unwrap();
    c.add_element(ElementKind::Resistor, 2, 3, 470.0).unwrap();
    c.add_element(ElementKind::Resistor, 2, 0, 3300.0).unwrap();
    c.add_element(ElementKind::Cable, 3, 4, 0.0).unwrap();
    c.add_element(ElementKind::Resistor, 4, 0, 1500.0).unwrap();
    c.add_element(ElementKind::VoltageSource, 5, 2, 1.5).unwrap();
    c.add_element(ElementKind::Resistor, 5, 0, 680.0).unwrap();
    c.add_element(ElementKind::CurrentSource, 0, 4, 0.002).unwrap();
    c
}

#[test]
fn missing_ground_is_rejected() {
    let mut c = circuit_with_nodes(&[1, 2]);
    c.add_element(ElementKind::VoltageSource, 1, 2, 5.0).unwrap();
    c.add_element(ElementKind::Resistor, 1, 2, 100.0).unwrap();

    let err = solve(&c).unwrap_err();
    assert!(matches!(err, NodalError::MissingGround));
    assert!(err.is_validation());
}

#[test]
fn voltage_sources_hold_their_voltage() {
    let c = bridge();
    let solution = solve(&c).unwrap();

    for element in c.elements() {
        if element.kind() == ElementKind::VoltageSource {
            let [a, b] = element.nodes();
            let drop = solution.voltage(a).unwrap() - solution.voltage(b).unwrap();
            assert_abs_diff_eq!(drop, element.value(), epsilon = 1e-9);
        }
    }
}

#[test]
fn kcl_holds_at_every_node() {
    let c = bridge();
    let solution = solve(&c).unwrap();

    // Sum the currents leaving node 2 through every element attached to it.
    let mut leaving = 0.0;
    for r in solution.resistor_currents() {
        if r.nodes[0] == NodeId(2) {
            leaving += r.current;
        }
        if r.nodes[1] == NodeId(2) {
            leaving -= r.current;
        }
    }
    for s in solution.source_currents() {
        if s.nodes[0] == NodeId(2) {
            leaving += s.current;
        }
        if s.nodes[1] == NodeId(2) {
            leaving -= s.current;
        }
    }
    assert_abs_diff_eq!(leaving, 0.0, epsilon = 1e-12);
}

#[test]
fn ohms_law_with_current_source() {
    let mut c = circuit_with_nodes(&[0, 1]);
    c.add_element(ElementKind::Resistor, 0, 1, 1000.0).unwrap();
    c.add_element(ElementKind::CurrentSource, 0, 1, 0.01).unwrap();

    let solution = solve(&c).unwrap();
    assert_abs_diff_eq!(solution.voltage(NodeId(1)).unwrap(), 10.0, epsilon = 1e-9);
}

#[test]
fn voltage_divider() {
    let mut c = circuit_with_nodes(&[0, 1, 2]);
    c.add_element(ElementKind::VoltageSource, 1, 0, 5.0).unwrap();
    c.add_element(ElementKind::Resistor, 1, 2, 1000.0).unwrap();
    c.add_element(ElementKind::Resistor, 2, 0, 1000.0).unwrap();

    let solution = solve(&c).unwrap();
    assert_abs_diff_eq!(solution.voltage(NodeId(1)).unwrap(), 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.voltage(NodeId(2)).unwrap(), 2.5, epsilon = 1e-9);
}

#[test]
fn parallel_resistors_halve_resistance() {
    let mut c = circuit_with_nodes(&[0, 1]);
    c.add_element(ElementKind::CurrentSource, 0, 1, 0.001).unwrap();
    c.add_element(ElementKind::Resistor, 1, 0, 1000.0).unwrap();
    c.add_element(ElementKind::Resistor, 1, 0, 1000.0).unwrap();

    let solution = solve(&c).unwrap();
    let v = solution.voltage(NodeId(1)).unwrap();
    assert_abs_diff_eq!(v / 0.001, 500.0, epsilon = 1e-6);
}

#[test]
fn cable_joined_nodes_report_equal_voltages() {
    let c = bridge();
    let solution = solve(&c).unwrap();
    assert_eq!(solution.voltage(NodeId(3)), solution.voltage(NodeId(4)));
}

#[test]
fn isolated_loop_is_singular() {
    let mut c = circuit_with_nodes(&[0, 1, 2, 3]);
    c.add_element(ElementKind::VoltageSource, 1, 0, 5.0).unwrap();
    c.add_element(ElementKind::Resistor, 1, 0, 100.0).unwrap();
    c.add_element(ElementKind::Resistor, 2, 3, 100.0).unwrap();
    c.add_element(ElementKind::Resistor, 3, 2, 220.0).unwrap();

    let analysis = Analysis::new(&c).unwrap();
    assert!(matches!(analysis.solve(), Err(NodalError::SingularMatrix { .. })));
    // The assembled system is still available for inspection.
    assert_eq!(analysis.matrix().size, 4);
}

#[test]
fn parallel_voltage_sources_are_singular() {
    let mut c = circuit_with_nodes(&[0, 1]);
    c.add_element(ElementKind::VoltageSource, 1, 0, 5.0).unwrap();
    c.add_element(ElementKind::VoltageSource, 1, 0, 3.0).unwrap();
    assert!(matches!(solve(&c), Err(NodalError::SingularMatrix { .. })));
}

#[test]
fn repeated_solves_are_bit_identical() {
    let c = bridge();
    let first = solve(&c).unwrap();
    let second = solve(&c).unwrap();
    let third = solve(&c.snapshot()).unwrap();

    assert_eq!(first.augmented_matrix(), second.augmented_matrix());
    assert_eq!(first.unknowns(), second.unknowns());
    assert_eq!(first.unknowns(), third.unknowns());
    assert_eq!(first, second);
}

#[test]
fn editing_after_a_failed_solve() {
    let mut c = circuit_with_nodes(&[0, 1, 2]);
    c.add_element(ElementKind::Resistor, 1, 2, 100.0).unwrap();
    assert!(solve(&c).is_err());

    c.add_element(ElementKind::VoltageSource, 1, 0, 1.0).unwrap();
    c.add_element(ElementKind::Resistor, 2, 0, 100.0).unwrap();
    let solution = solve(&c).unwrap();
    assert_abs_diff_eq!(solution.voltage(NodeId(2)).unwrap(), 0.5, epsilon = 1e-9);
}

#[test]
fn load_and_solve_circuit_file() {
    let text = "\
# Divider with a wired tap
NODO 0 100 300
NODO 1 100 100
NODO 2 300 100
NODO 3 300 200
ELEMENTO V 1 0 9V
ELEMENTO R 1 2 1k
ELEMENTO C 2 3
ELEMENTO R 3 0 2kohm
";
    let loaded = dsl::load(text);
    assert!(loaded.is_clean(), "{:?}", loaded.diagnostics);

    let solution = solve(&loaded.circuit).unwrap();
    assert_abs_diff_eq!(solution.voltage(NodeId(2)).unwrap(), 6.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.voltage(NodeId(3)).unwrap(), 6.0, epsilon = 1e-9);

    let report = render(&solution, &ReportConfig::new().with_matrix(false));
    assert!(report.contains("Node 3 -> V = 6 V"));
    assert!(report.contains("Resistor between N1 and N2: I = 0.003 A, Vdrop = 3 V"));
}

#[test]
fn load_keeps_going_past_bad_lines() {
    let text = "\
NODE 0 0 0
NODE 1 0 0
ELEMENT R 1 0 ten
ELEMENT X 1 0 5
ELEMENT I 0 1 2mA
ELEMENT R 1 0 1k
";
    let loaded = dsl::load(text);
    let lines: Vec<usize> = loaded.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![3, 4]);

    let solution = solve(&loaded.circuit).unwrap();
    assert_abs_diff_eq!(solution.voltage(NodeId(1)).unwrap(), 2.0, epsilon = 1e-9);
}
