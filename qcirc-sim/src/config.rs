//! Simulator configuration

use qcirc_core::MAX_QUBITS;

/// Configuration for the circuit simulator
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Largest register the simulator accepts
    ///
    /// The state map can hold up to 2^n entries, so registers above this
    /// are rejected with `TooManyQubits`.
    ///
    /// Default: 16
    pub max_qubits: usize,

    /// Register size from which a warning is logged before simulating
    ///
    /// Default: 10
    pub warn_qubits: usize,

    /// Probabilities at or below this are left out of the histogram
    ///
    /// Purely cosmetic; the probability map keeps every entry.
    ///
    /// Default: 0.001
    pub display_threshold: f64,

    /// Histogram bar length for probability 1.0, in characters
    ///
    /// Default: 50
    pub bar_scale: usize,

    /// Allowed deviation of the total probability from 1.0
    ///
    /// Default: 1e-6
    pub normalization_tolerance: f64,

    /// Fail the run when total probability drifts beyond the tolerance
    ///
    /// Default: true
    pub check_normalization: bool,

    /// Enable execution statistics collection
    ///
    /// Default: false
    pub collect_statistics: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: 16,
            warn_qubits: 10,
            display_threshold: 0.001,
            bar_scale: 50,
            normalization_tolerance: 1e-6,
            check_normalization: true,
            collect_statistics: false,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Tight drift tolerance with statistics collection
    pub fn strict() -> Self {
        Self {
            normalization_tolerance: 1e-9,
            collect_statistics: true,
            ..Default::default()
        }
    }

    /// No normalization check
    pub fn lenient() -> Self {
        Self {
            check_normalization: false,
            ..Default::default()
        }
    }

    /// Set the hard qubit ceiling
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Set the qubit count that triggers a size warning
    pub fn with_warn_qubits(mut self, warn_qubits: usize) -> Self {
        self.warn_qubits = warn_qubits;
        self
    }

    /// Set the histogram display threshold
    pub fn with_display_threshold(mut self, threshold: f64) -> Self {
        self.display_threshold = threshold;
        self
    }

    /// Set the histogram bar scale
    pub fn with_bar_scale(mut self, scale: usize) -> Self {
        self.bar_scale = scale;
        self
    }

    /// Set the normalization tolerance
    pub fn with_normalization_tolerance(mut self, tolerance: f64) -> Self {
        self.normalization_tolerance = tolerance;
        self
    }

    /// Enable or disable the normalization check
    pub fn with_normalization_check(mut self, enabled: bool) -> Self {
        self.check_normalization = enabled;
        self
    }

    /// Enable statistics collection
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.collect_statistics = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_qubits == 0 || self.max_qubits > MAX_QUBITS {
            return Err(format!(
                "max_qubits must be in 1..={}, got {}",
                MAX_QUBITS, self.max_qubits
            ));
        }

        if self.warn_qubits > self.max_qubits {
            return Err(format!(
                "warn_qubits ({}) must not exceed max_qubits ({})",
                self.warn_qubits, self.max_qubits
            ));
        }

        if !(0.0..1.0).contains(&self.display_threshold) {
            return Err(format!(
                "display_threshold must be in [0,1), got {}",
                self.display_threshold
            ));
        }

        if self.bar_scale == 0 {
            return Err("bar_scale must be > 0".to_string());
        }

        if !(self.normalization_tolerance > 0.0) {
            return Err(format!(
                "normalization_tolerance must be > 0, got {}",
                self.normalization_tolerance
            ));
        }

        Ok(())
    }
}
