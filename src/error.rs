//! Error types for the bridge circuit solver.
//!
//! This module provides a unified error type [`BridgeError`] covering
//! parameter validation and the numerical solve.

use thiserror::Error;

/// Result type alias using [`BridgeError`].
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Unified error type for all solver operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    // ============ Parameter Errors ============
    /// A resistance of exactly zero makes its conductance undefined.
    #[error("Non-physical resistance: {name} = {value} Ohm (conductance 1/{name} is undefined)")]
    InvalidResistance { name: &'static str, value: f64 },

    /// NaN or infinite input parameter.
    #[error("Parameter {name} is not finite (value: {value})")]
    NonFiniteParameter { name: &'static str, value: f64 },

    // ============ Solve Errors ============
    /// Conductance matrix is singular and cannot be solved.
    #[error("Singular conductance matrix - the circuit has no unique steady-state node voltages")]
    SingularMatrix,
}

impl BridgeError {
    /// Create an invalid-resistance error.
    pub fn invalid_resistance(name: &'static str, value: f64) -> Self {
        Self::InvalidResistance { name, value }
    }

    /// Create a non-finite-parameter error.
    pub fn non_finite(name: &'static str, value: f64) -> Self {
        Self::NonFiniteParameter { name, value }
    }
}
