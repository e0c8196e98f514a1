//! Simulation result types

use qcirc_state::{ProbabilityMap, StateMap};
use std::fmt;

use crate::statistics::ExecutionStatistics;

/// Result of one simulation run
///
/// Bundles the final state, its probabilities and the rendered histogram.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    state: StateMap,
    probabilities: ProbabilityMap,
    visualization: String,
    statistics: Option<ExecutionStatistics>,
}

impl SimulationResult {
    /// Create a new simulation result
    pub fn new(state: StateMap, probabilities: ProbabilityMap, visualization: String) -> Self {
        Self {
            state,
            probabilities,
            visualization,
            statistics: None,
        }
    }

    /// Add execution statistics to the result
    pub fn with_statistics(mut self, stats: ExecutionStatistics) -> Self {
        self.statistics = Some(stats);
        self
    }

    /// Final state map
    pub fn state(&self) -> &StateMap {
        &self.state
    }

    /// Measurement probabilities of the final state
    pub fn probabilities(&self) -> &ProbabilityMap {
        &self.probabilities
    }

    /// Rendered probability histogram
    pub fn visualization(&self) -> &str {
        &self.visualization
    }

    /// Execution statistics, if collection was enabled
    pub fn statistics(&self) -> Option<&ExecutionStatistics> {
        self.statistics.as_ref()
    }

    /// Get the number of qubits in the final state
    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// Split into state, probabilities and visualization
    pub fn into_parts(self) -> (StateMap, ProbabilityMap, String) {
        (self.state, self.probabilities, self.visualization)
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.visualization)
    }
}
