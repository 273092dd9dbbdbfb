//! Dense nodal solver.
//!
//! This module provides the numerical engine for the circuit solve.
//!
//! ## Nodal analysis
//!
//! Applying Kirchhoff's current law at each non-reference node yields a
//! linear system A·x = z where:
//! - A is the conductance matrix (one row per node equation)
//! - x is the vector of unknown node voltages
//! - z is the sum of current-source injections into each node
//!
//! The matrix is assembled by stamping each branch: a conductance G between
//! nodes i and j adds G to the diagonals A\[i,i\] and A\[j,j\] and -G to the
//! off-diagonals, so the assembled matrix is symmetric by construction.
//! The system is solved by LU factorization with partial pivoting.

mod dense;

pub use dense::NodalMatrix;

/// Minimum pivot magnitude before the matrix is treated as singular.
pub const PIVOT_TOLERANCE: f64 = 1e-15;
