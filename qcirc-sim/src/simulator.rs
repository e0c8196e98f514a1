//! Core simulator implementation

use qcirc_core::{Circuit, GateApplication};
use qcirc_state::{ProbabilityMap, StateMap};
use std::time::Instant;
use tracing::{debug, warn};

use crate::{
    classifier,
    config::SimulatorConfig,
    error::{Result, SimulatorError},
    result::SimulationResult,
    statistics::ExecutionStatistics,
    visualization::Histogram,
};

/// Circuit simulator over real-amplitude state maps
///
/// Each call to [`Simulator::simulate`] starts from `|0...0⟩`, threads the
/// state through every gate in order, and returns the final state with its
/// probabilities and histogram. Nothing is shared between calls.
///
/// # Example
///
/// ```
/// use qcirc_core::Circuit;
/// use qcirc_sim::Simulator;
///
/// let simulator = Simulator::default();
///
/// let mut circuit = Circuit::new(2).unwrap();
/// circuit.h(0).unwrap().cnot(0, 1).unwrap();
///
/// let result = simulator.run(&circuit).unwrap();
/// assert_eq!(result.probabilities().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a new simulator with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate().map_err(SimulatorError::InvalidConfig)?;
        Ok(Self { config })
    }

    /// Get the simulator configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Simulate `gates` on a fresh `num_qubits`-qubit register
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `num_qubits` is 0, or a gate addresses a qubit outside the register
    ///   (`InvalidDimension`)
    /// - `num_qubits` exceeds the configured ceiling (`TooManyQubits`)
    /// - the final probabilities drift from 1.0 and the check is enabled
    ///   (`NormalizationDrift`)
    pub fn simulate(
        &self,
        num_qubits: usize,
        gates: &[GateApplication],
    ) -> Result<SimulationResult> {
        let total_start = Instant::now();

        if num_qubits > self.config.max_qubits {
            return Err(SimulatorError::TooManyQubits {
                num_qubits,
                max_qubits: self.config.max_qubits,
            });
        }
        if num_qubits >= self.config.warn_qubits {
            warn!(
                num_qubits,
                max_labels = 1u64 << num_qubits,
                "large register, state map may hold up to 2^n labels"
            );
        }

        let mut state = StateMap::initialize(num_qubits)?;
        let mut stats = ExecutionStatistics::new();

        let gate_start = Instant::now();
        for (gate_index, gate) in gates.iter().enumerate() {
            state = state.apply_gate(gate).map_err(|err| {
                if err.is_invalid_dimension() {
                    SimulatorError::InvalidDimension(err)
                } else {
                    SimulatorError::GateApplicationFailed {
                        gate_index,
                        reason: err.to_string(),
                    }
                }
            })?;

            if gate.kind().is_simulated() {
                stats.gates_applied += 1;
            } else {
                stats.skipped_gates.push(gate.kind());
            }
            stats.peak_amplitudes = stats.peak_amplitudes.max(state.len());
        }
        stats.gate_application_time = gate_start.elapsed();

        let probabilities = ProbabilityMap::from_state(&state);
        if self.config.check_normalization
            && !probabilities.is_normalized(self.config.normalization_tolerance)
        {
            warn!(total = probabilities.total(), "probabilities do not sum to 1");
            return Err(SimulatorError::NormalizationDrift {
                total: probabilities.total(),
                tolerance: self.config.normalization_tolerance,
            });
        }

        let histogram = Histogram::new(self.config.display_threshold, self.config.bar_scale);
        let visualization = histogram.render(&probabilities);

        stats.final_amplitudes = state.len();
        stats.peak_amplitudes = stats.peak_amplitudes.max(state.len());
        stats.total_time = total_start.elapsed();

        debug!(
            num_qubits,
            gates = gates.len(),
            applied = stats.gates_applied,
            skipped = stats.skipped_gates.len(),
            amplitudes = stats.final_amplitudes,
            "simulation finished"
        );

        let result = SimulationResult::new(state, probabilities, visualization);
        Ok(if self.config.collect_statistics {
            result.with_statistics(stats)
        } else {
            result
        })
    }

    /// Simulate a circuit
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult> {
        self.simulate(circuit.num_qubits(), circuit.gates())
    }

    /// Describe the expected outcome of a gate sequence
    ///
    /// See [`classifier::classify`].
    pub fn classify(&self, gates: &[GateApplication], num_qubits: usize) -> &'static str {
        classifier::classify(gates, num_qubits)
    }
}
