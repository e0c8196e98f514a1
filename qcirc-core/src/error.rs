//! Error types for qcirc

use crate::QubitId;
use thiserror::Error;

/// Errors that can occur while building or validating circuits
#[derive(Debug, Error)]
pub enum QuantumError {
    /// Register size is zero or larger than a basis label can hold
    #[error("Invalid dimension: {num_qubits} qubits, supported range is 1..={max}")]
    InvalidDimension { num_qubits: usize, max: usize },

    /// Invalid qubit index used
    #[error("Invalid qubit index {0}: circuit has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// Control and target of a controlled gate are the same qubit
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(QubitId),

    /// Controlled gate kind recorded without a control qubit
    #[error("Gate '{0}' requires a control qubit")]
    MissingControl(String),

    /// Gate type code that is not part of the gate set
    #[error("Unknown gate type '{0}'")]
    UnknownGate(String),

    /// Generic circuit validation error
    #[error("Circuit validation failed: {0}")]
    ValidationError(String),

    /// Circuit could not be encoded
    #[error("Serialization failed: {0}")]
    SerializationError(String),

    /// Circuit could not be decoded
    #[error("Deserialization failed: {0}")]
    DeserializationError(String),
}

impl QuantumError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }

    /// True for the errors that describe a malformed register or index
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimension { .. } | Self::InvalidQubit(..) | Self::DuplicateQubit(_)
        )
    }
}
