//! Circuit simulator for qcirc
//!
//! This crate runs gate sequences against a real-amplitude state map and
//! reports the outcome:
//!
//! - [`Simulator`]: initialization, gate application and measurement
//!   projection in one pass
//! - [`SimulationResult`]: final state, probabilities and histogram
//! - [`visualization`]: sorted text histogram of the probabilities
//! - [`classifier`]: canned descriptions for well-known gate sequences
//!
//! # Example
//!
//! ```
//! use qcirc_core::{GateApplication, GateKind, QubitId};
//! use qcirc_sim::{Simulator, SimulatorConfig};
//!
//! let simulator = Simulator::new(SimulatorConfig::default()).unwrap();
//! let gates = [
//!     GateApplication::single(GateKind::H, QubitId::new(0)),
//!     GateApplication::cnot(QubitId::new(0), QubitId::new(1)),
//! ];
//!
//! let result = simulator.simulate(2, &gates).unwrap();
//! println!("{}", result.visualization());
//! println!("{}", simulator.classify(&gates, 2));
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod result;
pub mod simulator;
pub mod statistics;
pub mod visualization;

pub use classifier::classify;
pub use config::SimulatorConfig;
pub use error::{Result, SimulatorError};
pub use result::SimulationResult;
pub use simulator::Simulator;
pub use statistics::ExecutionStatistics;
pub use visualization::{visualize, Histogram};

/// Simulate `gates` with the default configuration
pub fn simulate(
    num_qubits: usize,
    gates: &[qcirc_core::GateApplication],
) -> Result<SimulationResult> {
    Simulator::default().simulate(num_qubits, gates)
}
