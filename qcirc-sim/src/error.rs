//! Error types for the simulator

use qcirc_state::StateError;
use std::fmt;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors that can occur during simulation
#[derive(Debug, Clone, PartialEq)]
pub enum SimulatorError {
    /// Invalid configuration
    InvalidConfig(String),

    /// Register size is zero or a gate addresses a qubit outside it
    InvalidDimension(StateError),

    /// Register larger than the configured ceiling
    TooManyQubits {
        num_qubits: usize,
        max_qubits: usize,
    },

    /// State operation failed outside of gate application
    InvalidState(StateError),

    /// Gate record that is well-addressed but cannot be applied
    GateApplicationFailed {
        gate_index: usize,
        reason: String,
    },

    /// Total probability drifted away from 1.0
    NormalizationDrift {
        total: f64,
        tolerance: f64,
    },
}

impl SimulatorError {
    /// True for register-size and qubit-index errors
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(self, SimulatorError::InvalidDimension(_))
    }
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::InvalidConfig(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            SimulatorError::InvalidDimension(err) => write!(f, "{}", err),
            SimulatorError::InvalidState(err) => write!(f, "Invalid state: {}", err),
            SimulatorError::TooManyQubits {
                num_qubits,
                max_qubits,
            } => {
                write!(
                    f,
                    "Too many qubits: circuit has {}, max supported is {}",
                    num_qubits, max_qubits
                )
            }
            SimulatorError::GateApplicationFailed { gate_index, reason } => {
                write!(f, "Gate {} application failed: {}", gate_index, reason)
            }
            SimulatorError::NormalizationDrift { total, tolerance } => {
                write!(
                    f,
                    "Normalization drift: probabilities sum to {}, tolerance {:e}",
                    total, tolerance
                )
            }
        }
    }
}

impl std::error::Error for SimulatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulatorError::InvalidDimension(err) | SimulatorError::InvalidState(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StateError> for SimulatorError {
    fn from(err: StateError) -> Self {
        if err.is_invalid_dimension() {
            SimulatorError::InvalidDimension(err)
        } else {
            SimulatorError::InvalidState(err)
        }
    }
}

impl From<qcirc_core::QuantumError> for SimulatorError {
    fn from(err: qcirc_core::QuantumError) -> Self {
        StateError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_state_error() {
        let err: SimulatorError = StateError::InvalidQubitIndex {
            index: 3,
            num_qubits: 2,
        }
        .into();
        assert!(err.is_invalid_dimension());
        assert!(err.to_string().contains("3"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_display() {
        let err = SimulatorError::TooManyQubits {
            num_qubits: 20,
            max_qubits: 16,
        };
        assert_eq!(
            err.to_string(),
            "Too many qubits: circuit has 20, max supported is 16"
        );
        assert!(!err.is_invalid_dimension());
    }

    #[test]
    fn test_from_state_error_without_gate_index() {
        let err: SimulatorError = StateError::InvalidLabel("0a".to_string()).into();
        assert!(matches!(err, SimulatorError::InvalidState(_)));
        assert!(!err.is_invalid_dimension());
        assert!(!err.to_string().contains("Gate"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_drift_tolerance_uses_exponent() {
        let err = SimulatorError::NormalizationDrift {
            total: 1.5,
            tolerance: 1e-9,
        };
        assert_eq!(
            err.to_string(),
            "Normalization drift: probabilities sum to 1.5, tolerance 1e-9"
        );
    }
}
