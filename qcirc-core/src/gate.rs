//! Gate kinds and the gate catalog
//!
//! [`GateKind`] is the closed set of instructions a circuit can carry. Only
//! a subset of it is simulated (see [`GateKind::is_simulated`]); the rest is
//! accepted in circuits and passed through by the simulator unchanged.

use crate::QuantumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a gate instruction
///
/// Serialized as the short type code used by circuit records
/// (`"H"`, `"CNOT"`, `"Toffoli"`, ...).
///
/// Deserialization matches the codes exactly (plus `"CX"`), while
/// [`FromStr`] ignores case: `"h".parse()` succeeds but the JSON string
/// `"h"` is rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    /// Hadamard
    H,
    /// Pauli-X (NOT)
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z
    Z,
    /// Phase (π/2)
    S,
    /// π/4 phase
    T,
    /// Controlled-NOT
    #[serde(rename = "CNOT", alias = "CX")]
    Cnot,
    /// Swap two qubits
    #[serde(rename = "SWAP")]
    Swap,
    /// Doubly-controlled NOT
    Toffoli,
    /// Rotation about X
    #[serde(rename = "RX")]
    Rx,
    /// Rotation about Y
    #[serde(rename = "RY")]
    Ry,
    /// Rotation about Z
    #[serde(rename = "RZ")]
    Rz,
    /// Measurement
    #[serde(rename = "M")]
    Measure,
}

impl GateKind {
    /// Every gate kind, in palette order
    pub const ALL: [GateKind; 13] = [
        GateKind::H,
        GateKind::X,
        GateKind::Y,
        GateKind::Z,
        GateKind::S,
        GateKind::T,
        GateKind::Cnot,
        GateKind::Swap,
        GateKind::Toffoli,
        GateKind::Rx,
        GateKind::Ry,
        GateKind::Rz,
        GateKind::Measure,
    ];

    /// Short type code (`"H"`, `"CNOT"`, ...)
    pub const fn code(self) -> &'static str {
        match self {
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::S => "S",
            GateKind::T => "T",
            GateKind::Cnot => "CNOT",
            GateKind::Swap => "SWAP",
            GateKind::Toffoli => "Toffoli",
            GateKind::Rx => "RX",
            GateKind::Ry => "RY",
            GateKind::Rz => "RZ",
            GateKind::Measure => "M",
        }
    }

    /// Human-readable gate name
    pub const fn name(self) -> &'static str {
        match self {
            GateKind::H => "Hadamard",
            GateKind::X => "Pauli-X",
            GateKind::Y => "Pauli-Y",
            GateKind::Z => "Pauli-Z",
            GateKind::S => "Phase",
            GateKind::T => "T Gate",
            GateKind::Cnot => "Controlled-NOT",
            GateKind::Swap => "Swap",
            GateKind::Toffoli => "Toffoli",
            GateKind::Rx => "Rotation-X",
            GateKind::Ry => "Rotation-Y",
            GateKind::Rz => "Rotation-Z",
            GateKind::Measure => "Measurement",
        }
    }

    /// Circuit-diagram symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            GateKind::Cnot => "⊕",
            GateKind::Swap => "×",
            GateKind::Toffoli => "CCX",
            other => other.code(),
        }
    }

    /// One-line description of the gate's effect
    pub const fn description(self) -> &'static str {
        match self {
            GateKind::H => "Creates superposition - equal probability of |0⟩ and |1⟩",
            GateKind::X => "Quantum NOT gate - flips |0⟩ to |1⟩",
            GateKind::Y => "Rotation around Y-axis of Bloch sphere",
            GateKind::Z => "Phase flip gate - adds π phase to |1⟩",
            GateKind::S => "Adds π/2 phase shift",
            GateKind::T => "Adds π/4 phase shift",
            GateKind::Cnot => "Flips target qubit if control is |1⟩",
            GateKind::Swap => "Swaps states of two qubits",
            GateKind::Toffoli => "Flips target qubit if both controls are |1⟩",
            GateKind::Rx => "Rotates the qubit by an angle around the X-axis",
            GateKind::Ry => "Rotates the qubit by an angle around the Y-axis",
            GateKind::Rz => "Rotates the qubit by an angle around the Z-axis",
            GateKind::Measure => "Measures the qubit in the computational basis",
        }
    }

    /// Number of qubits the gate acts on
    pub const fn num_qubits(self) -> usize {
        match self {
            GateKind::Cnot | GateKind::Swap => 2,
            GateKind::Toffoli => 3,
            _ => 1,
        }
    }

    /// Whether the gate needs a control qubit in its application record
    pub const fn is_controlled(self) -> bool {
        matches!(self, GateKind::Cnot | GateKind::Toffoli)
    }

    /// Whether the gate takes an angle parameter
    pub const fn is_parameterized(self) -> bool {
        matches!(self, GateKind::Rx | GateKind::Ry | GateKind::Rz)
    }

    /// Whether the state simulator implements this gate
    ///
    /// All other kinds are accepted but leave the state unchanged.
    pub const fn is_simulated(self) -> bool {
        matches!(self, GateKind::H | GateKind::X | GateKind::Cnot)
    }

    /// Palette entries shown by circuit editors
    pub fn catalog() -> Vec<GateInfo> {
        Self::ALL[..8].iter().map(|&kind| GateInfo::from(kind)).collect()
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GateKind {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper == "CX" {
            return Ok(GateKind::Cnot);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.code().eq_ignore_ascii_case(&upper))
            .ok_or_else(|| QuantumError::UnknownGate(s.to_string()))
    }
}

/// Catalog entry describing a gate kind
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateInfo {
    pub kind: GateKind,
    pub name: &'static str,
    pub symbol: &'static str,
    pub description: &'static str,
}

impl From<GateKind> for GateInfo {
    fn from(kind: GateKind) -> Self {
        Self {
            kind,
            name: kind.name(),
            symbol: kind.symbol(),
            description: kind.description(),
        }
    }
}
