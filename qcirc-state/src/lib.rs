//! Real-amplitude state maps for the qcirc simulator
//!
//! This crate holds the state side of a simulation:
//!
//! - [`BasisLabel`]: a fixed-width bit-string, one character per qubit
//! - [`StateMap`]: sparse map from label to real amplitude, evolved by
//!   pure gate application
//! - [`kernels`]: the Hadamard, Pauli-X and CNOT rules
//! - [`ProbabilityMap`]: squared amplitudes of a final state
//!
//! # Example
//!
//! ```
//! use qcirc_core::{GateApplication, GateKind, QubitId};
//! use qcirc_state::{ProbabilityMap, StateMap};
//!
//! let state = StateMap::initialize(1)
//!     .unwrap()
//!     .apply_gate(&GateApplication::single(GateKind::H, QubitId::new(0)))
//!     .unwrap();
//!
//! let probs = ProbabilityMap::from_state(&state);
//! assert!((probs.probability("1").unwrap() - 0.5).abs() < 1e-12);
//! ```

pub mod error;
pub mod kernels;
pub mod label;
pub mod probability;
pub mod state_map;

pub use error::{Result, StateError};
pub use label::BasisLabel;
pub use probability::ProbabilityMap;
pub use state_map::{apply_gate, StateMap};
