//! Core types for the qcirc circuit simulator
//!
//! This crate provides the fundamental types for describing circuits:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`GateKind`]: The closed set of gate instructions, with catalog metadata
//! - [`GateApplication`]: One gate applied to specific qubits
//! - [`Circuit`]: An ordered list of gate applications over a register
//!
//! # Example
//! ```
//! use qcirc_core::{Circuit, GateKind};
//!
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.h(0).unwrap().cnot(0, 1).unwrap();
//! assert_eq!(circuit.gate_kinds(), vec![GateKind::H, GateKind::Cnot]);
//! ```

pub mod application;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod library;
pub mod qubit;

pub use application::GateApplication;
pub use circuit::Circuit;
pub use error::QuantumError;
pub use gate::{GateInfo, GateKind};
pub use qubit::QubitId;

/// Widest register a basis label can describe
pub const MAX_QUBITS: usize = 63;

/// Type alias for results in qcirc-core
pub type Result<T> = std::result::Result<T, QuantumError>;
