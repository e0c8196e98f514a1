//! Gate application records
//!
//! A [`GateApplication`] names a gate kind together with the qubits it acts
//! on. Records are immutable inputs: the simulator reads them and never
//! keeps or modifies them.

use crate::{GateKind, QuantumError, QubitId, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One gate instruction in a circuit
///
/// The serialized field names follow the circuit records produced by the
/// circuit-management layer (`type`, `qubitIndex`, `controlQubit`, ...).
///
/// # Example
/// ```
/// use qcirc_core::{GateApplication, GateKind, QubitId};
///
/// let h = GateApplication::single(GateKind::H, QubitId::new(0));
/// let cx = GateApplication::cnot(QubitId::new(0), QubitId::new(1));
/// assert_eq!(cx.to_string(), "CNOT(q0 -> q1)");
/// assert!(h.validate(1).is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GateApplication {
    #[serde(rename = "type")]
    kind: GateKind,
    #[serde(rename = "qubitIndex")]
    target: QubitId,
    #[serde(rename = "controlQubit", default, skip_serializing_if = "Option::is_none")]
    control: Option<QubitId>,
    #[serde(default)]
    position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parameter: Option<f64>,
}

impl GateApplication {
    /// Gate acting on a single target qubit
    pub fn single(kind: GateKind, target: QubitId) -> Self {
        Self {
            kind,
            target,
            control: None,
            position: 0,
            parameter: None,
        }
    }

    /// Gate with a control and a target qubit
    pub fn controlled(kind: GateKind, control: QubitId, target: QubitId) -> Self {
        Self {
            control: Some(control),
            ..Self::single(kind, target)
        }
    }

    /// Controlled-NOT
    pub fn cnot(control: QubitId, target: QubitId) -> Self {
        Self::controlled(GateKind::Cnot, control, target)
    }

    /// Set the column the gate occupies in a circuit diagram
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Set the rotation angle of a parameterized gate
    pub fn with_parameter(mut self, parameter: f64) -> Self {
        self.parameter = Some(parameter);
        self
    }

    #[inline]
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    #[inline]
    pub fn target(&self) -> QubitId {
        self.target
    }

    #[inline]
    pub fn control(&self) -> Option<QubitId> {
        self.control
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn parameter(&self) -> Option<f64> {
        self.parameter
    }

    /// Check the record against a register of `num_qubits` qubits
    ///
    /// # Errors
    /// - `InvalidQubit` if the target or control is out of range
    /// - `DuplicateQubit` if control and target coincide
    /// - `MissingControl` for a CNOT without a control
    pub fn validate(&self, num_qubits: usize) -> Result<()> {
        if self.target.index() >= num_qubits {
            return Err(QuantumError::invalid_qubit(self.target.index(), num_qubits));
        }

        match self.control {
            Some(control) if control.index() >= num_qubits => {
                Err(QuantumError::invalid_qubit(control.index(), num_qubits))
            }
            Some(control) if control == self.target => Err(QuantumError::DuplicateQubit(control)),
            // Toffoli records cannot carry both controls, so only CNOT insists on one.
            None if self.kind == GateKind::Cnot => {
                Err(QuantumError::MissingControl(self.kind.code().to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for GateApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind)?;
        if let Some(control) = self.control {
            write!(f, "{} -> ", control)?;
        }
        write!(f, "{}", self.target)?;
        if let Some(theta) = self.parameter {
            write!(f, ", {}", theta)?;
        }
        write!(f, ")")
    }
}
