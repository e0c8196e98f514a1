//! Error types for state map operations

use qcirc_core::QuantumError;
use thiserror::Error;

/// Errors that can occur during state map operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Register size is zero or wider than a basis label
    #[error("Invalid dimension: {num_qubits} qubits, supported range is 1..={max}")]
    InvalidDimension { num_qubits: usize, max: usize },

    /// Qubit or control index outside the register
    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Controlled gate whose control is also its target
    #[error("Qubit {index} used as both control and target")]
    DuplicateQubit { index: usize },

    /// Label width differs from the register size
    #[error("Label width mismatch: expected {expected}, got {actual}")]
    LabelWidthMismatch { expected: usize, actual: usize },

    /// Text that is not a bit-string
    #[error("Invalid basis label '{0}': expected only '0' and '1'")]
    InvalidLabel(String),

    /// Probability outside [0, 1]
    #[error("Invalid probability {0} for a basis label")]
    InvalidProbability(f64),

    /// Gate record that cannot be applied
    #[error("Malformed gate: {0}")]
    MalformedGate(String),
}

impl StateError {
    /// True for the errors that describe a malformed register or index
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimension { .. }
                | Self::InvalidQubitIndex { .. }
                | Self::DuplicateQubit { .. }
                | Self::LabelWidthMismatch { .. }
        )
    }
}

impl From<QuantumError> for StateError {
    fn from(err: QuantumError) -> Self {
        match err {
            QuantumError::InvalidDimension { num_qubits, max } => {
                StateError::InvalidDimension { num_qubits, max }
            }
            QuantumError::InvalidQubit(index, num_qubits) => {
                StateError::InvalidQubitIndex { index, num_qubits }
            }
            QuantumError::DuplicateQubit(qubit) => StateError::DuplicateQubit {
                index: qubit.index(),
            },
            other => StateError::MalformedGate(other.to_string()),
        }
    }
}

/// Result type for state map operations
pub type Result<T> = std::result::Result<T, StateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use qcirc_core::QubitId;

    #[test]
    fn test_from_quantum_error() {
        let err: StateError = QuantumError::invalid_qubit(4, 2).into();
        assert_eq!(
            err,
            StateError::InvalidQubitIndex {
                index: 4,
                num_qubits: 2
            }
        );
        assert!(err.is_invalid_dimension());

        let err: StateError = QuantumError::DuplicateQubit(QubitId::new(1)).into();
        assert!(err.is_invalid_dimension());

        let err: StateError = QuantumError::MissingControl("CNOT".to_string()).into();
        assert!(matches!(err, StateError::MalformedGate(_)));
        assert!(!err.is_invalid_dimension());
    }
}
