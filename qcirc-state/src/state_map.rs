//! Real-amplitude state map
//!
//! The state of an n-qubit register is kept as a sparse map from basis
//! label to a real amplitude. Only non-zero amplitudes are stored, so a
//! fresh register holds a single entry and grows as gates spread it out.
//!
//! Amplitudes carry no phase: gates that need complex coefficients are not
//! simulated and pass the state through unchanged.

use crate::error::{Result, StateError};
use crate::kernels::{self, Amplitudes};
use crate::label::BasisLabel;
use qcirc_core::{GateApplication, GateKind};
use std::fmt;
use tracing::{debug, warn};

/// Sparse map from basis label to real amplitude
///
/// Gate application is pure: [`StateMap::apply_gate`] returns a new map and
/// leaves `self` untouched.
///
/// # Example
///
/// ```
/// use qcirc_core::{GateApplication, QubitId};
/// use qcirc_state::StateMap;
///
/// let state = StateMap::initialize(2).unwrap();
/// let state = state
///     .apply_gate(&GateApplication::single(qcirc_core::GateKind::H, QubitId::new(0)))
///     .unwrap()
///     .apply_gate(&GateApplication::cnot(QubitId::new(0), QubitId::new(1)))
///     .unwrap();
///
/// assert_eq!(state.len(), 2);
/// assert!(state.is_normalized(1e-9));
/// ```
#[derive(Clone, PartialEq)]
pub struct StateMap {
    num_qubits: usize,
    amplitudes: Amplitudes,
}

impl StateMap {
    /// Create the all-zero state `|0...0⟩` with amplitude 1.0
    ///
    /// # Errors
    /// Returns `InvalidDimension` if `num_qubits` is 0 or wider than a label
    pub fn initialize(num_qubits: usize) -> Result<Self> {
        let zero = BasisLabel::zeros(num_qubits)?;
        let mut amplitudes = Amplitudes::new();
        amplitudes.insert(zero, 1.0);
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Build a state from explicit `(label, amplitude)` pairs
    ///
    /// Amplitudes for repeated labels are summed. The result is not
    /// normalized.
    ///
    /// # Errors
    /// Returns `LabelWidthMismatch` if any label is not `num_qubits` wide
    pub fn from_amplitudes<I>(num_qubits: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (BasisLabel, f64)>,
    {
        BasisLabel::zeros(num_qubits)?;
        let mut amplitudes = Amplitudes::new();
        for (label, amp) in entries {
            if label.width() != num_qubits {
                return Err(StateError::LabelWidthMismatch {
                    expected: num_qubits,
                    actual: label.width(),
                });
            }
            *amplitudes.entry(label).or_insert(0.0) += amp;
        }
        amplitudes.retain(|_, amp| *amp != 0.0);
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of stored (non-zero) amplitudes
    #[inline]
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Amplitude of `label` (0.0 if not stored)
    pub fn amplitude(&self, label: &BasisLabel) -> f64 {
        self.amplitudes.get(label).copied().unwrap_or(0.0)
    }

    /// Iterate stored amplitudes in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&BasisLabel, &f64)> {
        self.amplitudes.iter()
    }

    /// Stored amplitudes in lexicographic label order
    pub fn sorted(&self) -> Vec<(BasisLabel, f64)> {
        let mut entries: Vec<_> = self.amplitudes.iter().map(|(&l, &a)| (l, a)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Sum of squared amplitudes (1.0 for a normalized state)
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.values().map(|amp| amp * amp).sum()
    }

    /// Check if the squared norm is within `tolerance` of 1.0
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() <= tolerance
    }

    /// Apply one gate and return the evolved state
    ///
    /// Hadamard, Pauli-X and CNOT are simulated. Every other kind is a
    /// recognised instruction without a real-amplitude rule; it returns an
    /// unchanged copy of the state.
    ///
    /// # Errors
    /// - `InvalidQubitIndex` if the target or control is outside the register
    /// - `DuplicateQubit` if control and target coincide
    /// - `MalformedGate` for a CNOT without a control
    pub fn apply_gate(&self, gate: &GateApplication) -> Result<StateMap> {
        gate.validate(self.num_qubits)?;

        let target = gate.target().index();
        let amplitudes = match gate.kind() {
            GateKind::H => kernels::hadamard(&self.amplitudes, target),
            GateKind::X => kernels::pauli_x(&self.amplitudes, target),
            GateKind::Cnot => {
                // `validate` already rejects a CNOT without a control.
                let control = gate
                    .control()
                    .ok_or_else(|| StateError::MalformedGate(format!("{} has no control", gate)))?;
                kernels::cnot(&self.amplitudes, control.index(), target)
            }
            GateKind::Y
            | GateKind::Z
            | GateKind::S
            | GateKind::T
            | GateKind::Swap
            | GateKind::Toffoli
            | GateKind::Rx
            | GateKind::Ry
            | GateKind::Rz
            | GateKind::Measure => {
                warn!(gate = %gate, "gate kind not simulated, state passed through");
                return Ok(self.clone());
            }
        };

        debug!(gate = %gate, amplitudes = amplitudes.len(), "applied gate");
        Ok(StateMap {
            num_qubits: self.num_qubits,
            amplitudes,
        })
    }
}

/// Apply `gate` to `state`, checking that the state spans `num_qubits` qubits
///
/// # Errors
/// Returns `LabelWidthMismatch` if the state was built for a different
/// register size, otherwise the errors of [`StateMap::apply_gate`].
pub fn apply_gate(state: &StateMap, gate: &GateApplication, num_qubits: usize) -> Result<StateMap> {
    if state.num_qubits() != num_qubits {
        return Err(StateError::LabelWidthMismatch {
            expected: num_qubits,
            actual: state.num_qubits(),
        });
    }
    state.apply_gate(gate)
}

impl fmt::Debug for StateMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.sorted().iter().map(|(l, a)| (l.to_string(), a)))
            .finish()
    }
}

impl fmt::Display for StateMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, amp)) in self.sorted().iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{:.4}|{}⟩", amp, label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use qcirc_core::QubitId;

    fn label(s: &str) -> BasisLabel {
        s.parse().unwrap()
    }

    fn h(q: usize) -> GateApplication {
        GateApplication::single(GateKind::H, QubitId::new(q))
    }

    fn x(q: usize) -> GateApplication {
        GateApplication::single(GateKind::X, QubitId::new(q))
    }

    #[test]
    fn test_initialize() {
        let state = StateMap::initialize(3).unwrap();
        assert_eq!(state.num_qubits(), 3);
        assert_eq!(state.len(), 1);
        assert_eq!(state.amplitude(&label("000")), 1.0);
        assert_eq!(state.amplitude(&label("001")), 0.0);
    }

    #[test]
    fn test_initialize_rejects_zero_qubits() {
        let err = StateMap::initialize(0).unwrap_err();
        assert!(matches!(err, StateError::InvalidDimension { num_qubits: 0, .. }));
    }

    #[test]
    fn test_apply_gate_is_pure() {
        let state = StateMap::initialize(1).unwrap();
        let next = state.apply_gate(&h(0)).unwrap();
        assert_eq!(state.len(), 1);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_bell_state() {
        let state = StateMap::initialize(2)
            .unwrap()
            .apply_gate(&h(0))
            .unwrap()
            .apply_gate(&GateApplication::cnot(QubitId::new(0), QubitId::new(1)))
            .unwrap();

        assert_eq!(state.len(), 2);
        assert_abs_diff_eq!(state.amplitude(&label("00")), 0.5f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(state.amplitude(&label("11")), 0.5f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_x_flips_target_only() {
        let state = StateMap::initialize(3).unwrap().apply_gate(&x(1)).unwrap();
        assert_eq!(state.amplitude(&label("010")), 1.0);
    }

    #[test]
    fn test_unsupported_gates_pass_through() {
        let state = StateMap::initialize(2).unwrap().apply_gate(&h(0)).unwrap();
        for kind in [GateKind::Y, GateKind::Z, GateKind::S, GateKind::T, GateKind::Measure] {
            let next = state
                .apply_gate(&GateApplication::single(kind, QubitId::new(1)))
                .unwrap();
            assert_eq!(next, state, "{} changed the state", kind);
        }
        let swap = GateApplication::controlled(GateKind::Swap, QubitId::new(0), QubitId::new(1));
        assert_eq!(state.apply_gate(&swap).unwrap(), state);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let state = StateMap::initialize(2).unwrap();
        let err = state.apply_gate(&h(2)).unwrap_err();
        assert!(err.is_invalid_dimension());

        let err = state
            .apply_gate(&GateApplication::cnot(QubitId::new(5), QubitId::new(0)))
            .unwrap_err();
        assert_eq!(
            err,
            StateError::InvalidQubitIndex {
                index: 5,
                num_qubits: 2
            }
        );

        let err = state
            .apply_gate(&GateApplication::single(GateKind::Cnot, QubitId::new(1)))
            .unwrap_err();
        assert!(matches!(err, StateError::MalformedGate(_)));

        // Unknown instructions are tolerated, malformed ones are not.
        let err = state
            .apply_gate(&GateApplication::single(GateKind::T, QubitId::new(7)))
            .unwrap_err();
        assert!(err.is_invalid_dimension());
    }

    #[test]
    fn test_free_apply_gate_checks_width() {
        let state = StateMap::initialize(2).unwrap();
        assert!(apply_gate(&state, &h(0), 2).is_ok());
        assert!(matches!(
            apply_gate(&state, &h(0), 3),
            Err(StateError::LabelWidthMismatch { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_from_amplitudes() {
        let state = StateMap::from_amplitudes(
            2,
            vec![(label("00"), 0.6), (label("11"), 0.8), (label("01"), 0.0)],
        )
        .unwrap();
        assert_eq!(state.len(), 2);
        assert!(state.is_normalized(1e-12));

        assert!(StateMap::from_amplitudes(2, vec![(label("0"), 1.0)]).is_err());
    }

    #[test]
    fn test_display_sorted() {
        let state = StateMap::from_amplitudes(2, vec![(label("11"), 0.8), (label("00"), 0.6)])
            .unwrap();
        assert_eq!(state.to_string(), "0.6000|00⟩ + 0.8000|11⟩");
    }
}
