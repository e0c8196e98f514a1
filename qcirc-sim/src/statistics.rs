//! Execution statistics tracking

use qcirc_core::GateKind;
use std::time::Duration;

/// Execution statistics for a simulation run
#[derive(Debug, Clone, Default)]
pub struct ExecutionStatistics {
    /// Total execution time
    pub total_time: Duration,

    /// Time spent applying gates
    pub gate_application_time: Duration,

    /// Gates that changed the state (H, X, CNOT)
    pub gates_applied: usize,

    /// Kinds of the gates passed through unchanged, in circuit order
    pub skipped_gates: Vec<GateKind>,

    /// Stored amplitudes in the final state
    pub final_amplitudes: usize,

    /// Largest number of stored amplitudes seen during the run
    pub peak_amplitudes: usize,
}

impl ExecutionStatistics {
    /// Create a new statistics object
    pub fn new() -> Self {
        Self::default()
    }

    /// Total gates in the run
    pub fn total_gates(&self) -> usize {
        self.gates_applied + self.skipped_gates.len()
    }

    /// Fraction of the circuit that was not simulated
    pub fn skipped_ratio(&self) -> f64 {
        let total = self.total_gates();
        if total == 0 {
            0.0
        } else {
            self.skipped_gates.len() as f64 / total as f64
        }
    }

    /// Get the gate execution rate (gates per second)
    pub fn gates_per_second(&self) -> f64 {
        let secs = self.gate_application_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.total_gates() as f64 / secs
        }
    }
}

impl std::fmt::Display for ExecutionStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Execution Statistics:")?;
        writeln!(f, "  Total time:      {:?}", self.total_time)?;
        writeln!(f, "  Gate time:       {:?}", self.gate_application_time)?;
        writeln!(f, "  Gates applied:   {}", self.gates_applied)?;
        writeln!(f, "  Gates skipped:   {}", self.skipped_gates.len())?;
        writeln!(f, "  Final amplitudes: {}", self.final_amplitudes)?;
        writeln!(f, "  Peak amplitudes: {}", self.peak_amplitudes)?;
        Ok(())
    }
}
