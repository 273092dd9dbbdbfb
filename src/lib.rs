//! # Bridge Solver
//!
//! A nodal-analysis solver for a fixed-topology resistive bridge circuit.
//!
//! Given a source voltage E and six resistances R1..R6, the solver applies
//! Kirchhoff's current law at the three non-reference nodes, assembles the
//! 3×3 conductance system G·V = I, and solves it by LU factorization with
//! partial pivoting.
//!
//! ## Architecture
//!
//! - [`circuit`] - Circuit parameters, validation, and system assembly
//! - [`solver`] - Dense matrix stamping and the LU solve
//! - [`report`] - Human-readable result formatting
//! - [`error`] - Unified error type
//!
//! ## Usage
//!
//! ```
//! use bridge_solver::solve;
//!
//! let v = solve(12.0, 100.0, 200.0, 300.0, 400.0, 500.0, 600.0)?;
//! println!("V2 = {:.4} V", v.v2);
//! # Ok::<(), bridge_solver::BridgeError>(())
//! ```
//!
//! A degenerate circuit (singular conductance matrix) or a zero resistance
//! yields an explicit error instead of NaN or infinite voltages.

pub mod circuit;
pub mod error;
pub mod report;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{solve, BridgeCircuit, NodeVoltages};
pub use error::{BridgeError, Result};
