//! Quantum circuit representation

use crate::{GateApplication, GateKind, QuantumError, QubitId, Result, MAX_QUBITS};
use serde::{Deserialize, Serialize};

/// A quantum circuit
///
/// An ordered list of gate applications over a fixed-size register.
///
/// # Example
/// ```
/// use qcirc_core::Circuit;
///
/// let mut circuit = Circuit::new(2).unwrap();
/// circuit.h(0).unwrap().cnot(0, 1).unwrap();
/// assert_eq!(circuit.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    #[serde(rename = "qubits")]
    num_qubits: usize,
    gates: Vec<GateApplication>,
}

impl Circuit {
    /// Create an empty circuit over `num_qubits` qubits
    ///
    /// # Errors
    /// Returns `InvalidDimension` if `num_qubits` is 0 or larger than a
    /// basis label can hold.
    pub fn new(num_qubits: usize) -> Result<Self> {
        check_dimension(num_qubits)?;
        Ok(Self {
            num_qubits,
            gates: Vec::new(),
        })
    }

    /// Create a circuit from an existing gate list
    pub fn from_gates(num_qubits: usize, gates: Vec<GateApplication>) -> Result<Self> {
        let circuit = Self { num_qubits, gates };
        circuit.validate()?;
        Ok(circuit)
    }

    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Append a gate application
    ///
    /// The gate's position is overwritten with its index in the circuit;
    /// any position set with [`GateApplication::with_position`] is discarded.
    ///
    /// # Errors
    /// Returns error if the gate does not fit the register
    pub fn add(&mut self, gate: GateApplication) -> Result<&mut Self> {
        gate.validate(self.num_qubits)?;
        let position = self.gates.len();
        self.gates.push(gate.with_position(position));
        Ok(self)
    }

    /// Append a Hadamard on `qubit`
    pub fn h(&mut self, qubit: usize) -> Result<&mut Self> {
        self.add(GateApplication::single(GateKind::H, QubitId::new(qubit)))
    }

    /// Append a Pauli-X on `qubit`
    pub fn x(&mut self, qubit: usize) -> Result<&mut Self> {
        self.add(GateApplication::single(GateKind::X, QubitId::new(qubit)))
    }

    /// Append a CNOT
    pub fn cnot(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        self.add(GateApplication::cnot(QubitId::new(control), QubitId::new(target)))
    }

    /// Gate applications in circuit order
    pub fn gates(&self) -> &[GateApplication] {
        &self.gates
    }

    /// Gate kinds in circuit order
    pub fn gate_kinds(&self) -> Vec<GateKind> {
        self.gates.iter().map(GateApplication::kind).collect()
    }

    /// Depth of the circuit
    ///
    /// Gates are executed one after another, so this is the gate count.
    pub fn depth(&self) -> usize {
        self.gates.len()
    }

    /// Whether every gate in the circuit changes the simulated state
    pub fn uses_only_simulated_gates(&self) -> bool {
        self.gates.iter().all(|g| g.kind().is_simulated())
    }

    /// Validate the register size and every gate
    pub fn validate(&self) -> Result<()> {
        check_dimension(self.num_qubits)?;
        for (i, gate) in self.gates.iter().enumerate() {
            gate.validate(self.num_qubits).map_err(|e| match e {
                QuantumError::MissingControl(_) => {
                    QuantumError::ValidationError(format!("Operation {} ({}): {}", i, gate, e))
                }
                other => other,
            })?;
        }
        Ok(())
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| QuantumError::SerializationError(e.to_string()))
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| QuantumError::SerializationError(e.to_string()))
    }

    /// Deserialize from JSON and validate the result
    pub fn from_json(json: &str) -> Result<Self> {
        let circuit: Circuit = serde_json::from_str(json)
            .map_err(|e| QuantumError::DeserializationError(e.to_string()))?;
        circuit.validate()?;
        Ok(circuit)
    }
}

fn check_dimension(num_qubits: usize) -> Result<()> {
    if num_qubits == 0 || num_qubits > MAX_QUBITS {
        return Err(QuantumError::InvalidDimension {
            num_qubits,
            max: MAX_QUBITS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_qubits() {
        assert!(matches!(
            Circuit::new(0),
            Err(QuantumError::InvalidDimension { num_qubits: 0, .. })
        ));
        assert!(Circuit::new(MAX_QUBITS + 1).is_err());
    }

    #[test]
    fn test_builder_assigns_positions() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.x(1).unwrap().h(0).unwrap().cnot(0, 1).unwrap();

        assert_eq!(circuit.depth(), 3);
        assert_eq!(
            circuit.gate_kinds(),
            vec![GateKind::X, GateKind::H, GateKind::Cnot]
        );
        let positions: Vec<_> = circuit.gates().iter().map(|g| g.position()).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert!(circuit.uses_only_simulated_gates());
    }

    #[test]
    fn test_add_overwrites_position() {
        let mut circuit = Circuit::new(1).unwrap();
        circuit.h(0).unwrap();
        circuit
            .add(GateApplication::single(GateKind::X, QubitId::new(0)).with_position(7))
            .unwrap();
        assert_eq!(circuit.gates()[1].position(), 1);
    }

    #[test]
    fn test_add_rejects_out_of_range() {
        let mut circuit = Circuit::new(2).unwrap();
        assert!(circuit.h(2).is_err());
        assert!(circuit.cnot(0, 0).is_err());
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.h(0).unwrap().cnot(0, 1).unwrap();
        circuit
            .add(GateApplication::single(GateKind::Ry, QubitId::new(1)).with_parameter(1.25))
            .unwrap();

        let json = circuit.to_json().unwrap();
        let back = Circuit::from_json(&json).unwrap();
        assert_eq!(back, circuit);
        assert!(!back.uses_only_simulated_gates());
    }

    #[test]
    fn test_from_json_validates() {
        let json = r#"{ "qubits": 1, "gates": [ { "type": "H", "qubitIndex": 3 } ] }"#;
        assert!(matches!(
            Circuit::from_json(json),
            Err(QuantumError::InvalidQubit(3, 1))
        ));

        let json = r#"{ "qubits": 2, "gates": [ { "type": "CNOT", "qubitIndex": 1 } ] }"#;
        assert!(matches!(
            Circuit::from_json(json),
            Err(QuantumError::ValidationError(_))
        ));

        assert!(matches!(
            Circuit::from_json("{ not json"),
            Err(QuantumError::DeserializationError(_))
        ));
    }
}
