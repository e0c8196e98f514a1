//! Outcome descriptions for well-known gate sequences
//!
//! Classification looks only at the ordered gate kinds and the register
//! size. Qubit indices and control/target wiring are not inspected, so a
//! CNOT wired "backwards" after an H still reads as a Bell state.

use qcirc_core::{GateApplication, GateKind};

pub const BELL_STATE: &str = "Bell State: 50% |00⟩ + 50% |11⟩ (Entangled)";
pub const SUPERPOSITION: &str = "Superposition: 50% |0⟩ + 50% |1⟩";
pub const QUBIT_FLIP: &str = "Qubit flip detected";
pub const CUSTOM_CIRCUIT: &str = "Custom circuit - run simulation to see results";

type Predicate = fn(&[GateKind], usize) -> bool;

fn is_bell_pair(kinds: &[GateKind], num_qubits: usize) -> bool {
    num_qubits == 2 && kinds == [GateKind::H, GateKind::Cnot]
}

fn is_single_hadamard(kinds: &[GateKind], num_qubits: usize) -> bool {
    num_qubits == 1 && kinds == [GateKind::H]
}

fn has_pauli_x(kinds: &[GateKind], _num_qubits: usize) -> bool {
    kinds.contains(&GateKind::X)
}

/// Rules in priority order; the first match wins
const RULES: [(Predicate, &str); 3] = [
    (is_bell_pair, BELL_STATE),
    (is_single_hadamard, SUPERPOSITION),
    (has_pauli_x, QUBIT_FLIP),
];

/// Describe the expected outcome of a gate sequence
///
/// # Example
/// ```
/// use qcirc_core::{GateApplication, GateKind, QubitId};
/// use qcirc_sim::classifier::{classify, SUPERPOSITION};
///
/// let gates = [GateApplication::single(GateKind::H, QubitId::new(0))];
/// assert_eq!(classify(&gates, 1), SUPERPOSITION);
/// ```
pub fn classify(gates: &[GateApplication], num_qubits: usize) -> &'static str {
    let kinds: Vec<GateKind> = gates.iter().map(GateApplication::kind).collect();
    classify_kinds(&kinds, num_qubits)
}

/// Classify an already extracted gate-kind sequence
pub fn classify_kinds(kinds: &[GateKind], num_qubits: usize) -> &'static str {
    RULES
        .iter()
        .find(|(matches, _)| matches(kinds, num_qubits))
        .map(|&(_, text)| text)
        .unwrap_or(CUSTOM_CIRCUIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qcirc_core::QubitId;

    fn single(kind: GateKind, q: usize) -> GateApplication {
        GateApplication::single(kind, QubitId::new(q))
    }

    #[test]
    fn test_bell_state() {
        let gates = [
            single(GateKind::H, 0),
            GateApplication::cnot(QubitId::new(0), QubitId::new(1)),
        ];
        assert_eq!(classify(&gates, 2), BELL_STATE);
        // Wiring is ignored.
        let reversed = [
            single(GateKind::H, 1),
            GateApplication::cnot(QubitId::new(1), QubitId::new(0)),
        ];
        assert_eq!(classify(&reversed, 2), BELL_STATE);
    }

    #[test]
    fn test_bell_sequence_needs_two_qubits() {
        assert_eq!(
            classify_kinds(&[GateKind::H, GateKind::Cnot], 3),
            CUSTOM_CIRCUIT
        );
    }

    #[test]
    fn test_superposition() {
        assert_eq!(classify(&[single(GateKind::H, 0)], 1), SUPERPOSITION);
        assert_eq!(classify(&[single(GateKind::H, 0)], 2), CUSTOM_CIRCUIT);
    }

    #[test]
    fn test_flip_detected() {
        let gates = [single(GateKind::H, 0), single(GateKind::X, 1)];
        assert_eq!(classify(&gates, 2), QUBIT_FLIP);
        assert_eq!(classify_kinds(&[GateKind::X], 1), QUBIT_FLIP);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(classify(&[], 1), CUSTOM_CIRCUIT);
        assert_eq!(
            classify_kinds(&[GateKind::Y, GateKind::Z], 1),
            CUSTOM_CIRCUIT
        );
    }

    #[test]
    fn test_priority_order() {
        // Bell check runs before the X check, superposition before fallback.
        assert_eq!(
            classify_kinds(&[GateKind::H, GateKind::Cnot], 2),
            BELL_STATE
        );
        assert_eq!(
            classify_kinds(&[GateKind::X, GateKind::H, GateKind::Cnot], 2),
            QUBIT_FLIP
        );
    }
}
