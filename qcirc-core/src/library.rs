//! Built-in sample circuits
//!
//! Ready-made circuits for the textbook examples: Bell pair, single-qubit
//! superposition, Deutsch's algorithm and the n-qubit GHZ state.

use crate::{Circuit, Result};

/// A named sample circuit with its expected outcome
#[derive(Clone, Debug)]
pub struct CircuitTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub expected_output: String,
    pub circuit: Circuit,
}

/// Two-qubit Bell pair: H on q0, then CNOT q0 -> q1
pub fn bell_state() -> Result<CircuitTemplate> {
    let mut circuit = Circuit::new(2)?;
    circuit.h(0)?.cnot(0, 1)?;
    Ok(CircuitTemplate {
        name: "Bell State Creator",
        description: "Creates quantum entanglement between two qubits using Hadamard and CNOT gates",
        expected_output: "|00⟩ + |11⟩ (Entangled state)".to_string(),
        circuit,
    })
}

/// Single qubit in equal superposition
pub fn superposition() -> Result<CircuitTemplate> {
    let mut circuit = Circuit::new(1)?;
    circuit.h(0)?;
    Ok(CircuitTemplate {
        name: "Quantum Superposition",
        description: "Demonstrates superposition by applying Hadamard gate to single qubit",
        expected_output: "50% |0⟩ and 50% |1⟩".to_string(),
        circuit,
    })
}

/// Deutsch's algorithm preparation: X on q1, then H on both qubits
pub fn deutsch() -> Result<CircuitTemplate> {
    let mut circuit = Circuit::new(2)?;
    circuit.x(1)?.h(0)?.h(1)?;
    Ok(CircuitTemplate {
        name: "Deutsch Algorithm",
        description: "First quantum algorithm showing computational advantage over classical",
        expected_output: "Determines if function is constant or balanced".to_string(),
        circuit,
    })
}

/// GHZ state over `num_qubits` qubits: H on q0 followed by a CNOT chain
pub fn ghz(num_qubits: usize) -> Result<CircuitTemplate> {
    let mut circuit = Circuit::new(num_qubits)?;
    circuit.h(0)?;
    for i in 1..num_qubits {
        circuit.cnot(i - 1, i)?;
    }
    let zeros = "0".repeat(num_qubits);
    let ones = "1".repeat(num_qubits);
    Ok(CircuitTemplate {
        name: "GHZ State",
        description: "Entangles every qubit of the register into one shared superposition",
        expected_output: format!("|{}⟩ + |{}⟩ (Entangled state)", zeros, ones),
        circuit,
    })
}

/// Every fixed-size sample circuit
pub fn all() -> Result<Vec<CircuitTemplate>> {
    Ok(vec![bell_state()?, superposition()?, deutsch()?, ghz(3)?])
}
