//! Dense matrix assembly and solving.

use crate::error::{BridgeError, Result};

use super::PIVOT_TOLERANCE;

/// Nodal system A·x = z.
#[derive(Debug, Clone)]
pub struct NodalMatrix {
    /// System matrix A (row-major)
    pub a: Vec<f64>,
    /// Source vector z
    pub z: Vec<f64>,
    /// Solution vector x
    pub x: Vec<f64>,
    /// Matrix dimension
    pub size: usize,
    /// LU decomposition of A
    lu: Vec<f64>,
    /// Pivot indices for LU decomposition
    pivots: Vec<usize>,
}

impl NodalMatrix {
    /// Create a zeroed system of the given dimension.
    pub fn new(size: usize) -> Self {
        Self {
            a: vec![0.0; size * size],
            z: vec![0.0; size],
            x: vec![0.0; size],
            size,
            lu: vec![0.0; size * size],
            pivots: vec![0; size],
        }
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.a[row * self.size + col]
    }

    /// Add to matrix element at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        self.a[row * self.size + col] += value;
    }

    /// Add to source vector element.
    pub fn add_source(&mut self, row: usize, value: f64) {
        self.z[row] += value;
    }

    /// Stamp a conductance between two nodes (`None` is ground).
    /// For a conductance G between nodes n1 and n2:
    ///   A[n1,n1] += G
    ///   A[n2,n2] += G
    ///   A[n1,n2] -= G
    ///   A[n2,n1] -= G
    pub fn stamp_conductance(&mut self, n1: Option<usize>, n2: Option<usize>, g: f64) {
        if let Some(i) = n1 {
            self.add(i, i, g);
        }
        if let Some(j) = n2 {
            self.add(j, j, g);
        }
        if let (Some(i), Some(j)) = (n1, n2) {
            self.add(i, j, -g);
            self.add(j, i, -g);
        }
    }

    /// Stamp a current source between two nodes.
    /// Current flows from n+ to n-: it enters n- and leaves n+.
    pub fn stamp_current_source(&mut self, n_pos: Option<usize>, n_neg: Option<usize>, current: f64) {
        if let Some(i) = n_pos {
            self.add_source(i, -current);
        }
        if let Some(j) = n_neg {
            self.add_source(j, current);
        }
    }

    /// Perform LU decomposition with partial pivoting.
    pub fn factor(&mut self) -> Result<()> {
        let n = self.size;
        self.lu.copy_from_slice(&self.a);

        for i in 0..n {
            self.pivots[i] = i;
        }

        for k in 0..n {
            // Find pivot
            let mut max_val = self.lu[k * n + k].abs();
            let mut max_row = k;

            for i in (k + 1)..n {
                let val = self.lu[i * n + k].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_val < PIVOT_TOLERANCE {
                return Err(BridgeError::SingularMatrix);
            }

            // Swap rows if needed
            if max_row != k {
                self.pivots.swap(k, max_row);
                for j in 0..n {
                    self.lu.swap(k * n + j, max_row * n + j);
                }
            }

            // Eliminate
            let pivot = self.lu[k * n + k];
            for i in (k + 1)..n {
                let factor = self.lu[i * n + k] / pivot;
                self.lu[i * n + k] = factor;
                for j in (k + 1)..n {
                    self.lu[i * n + j] -= factor * self.lu[k * n + j];
                }
            }
        }

        Ok(())
    }

    /// Solve the system using the pre-computed LU decomposition.
    pub fn solve(&mut self) -> Result<()> {
        let n = self.size;

        // Apply pivot permutation to z
        let b = self.z.clone();
        for i in 0..n {
            self.x[i] = b[self.pivots[i]];
        }

        // Forward substitution (L * y = Pb)
        for i in 0..n {
            for j in 0..i {
                self.x[i] -= self.lu[i * n + j] * self.x[j];
            }
        }

        // Back substitution (U * x = y)
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                self.x[i] -= self.lu[i * n + j] * self.x[j];
            }
            let diag = self.lu[i * n + i];
            if diag.abs() < PIVOT_TOLERANCE {
                return Err(BridgeError::SingularMatrix);
            }
            self.x[i] /= diag;
        }

        Ok(())
    }

    /// Factor and solve in one step.
    pub fn factor_and_solve(&mut self) -> Result<()> {
        self.factor()?;
        self.solve()
    }

    /// Get the voltage at a node (`None` is ground).
    pub fn voltage(&self, node: Option<usize>) -> f64 {
        match node {
            Some(i) => self.x[i],
            None => 0.0, // Ground
        }
    }

    /// Maximum absolute residual of the current solution, max|A·x - z|.
    pub fn residual(&self) -> f64 {
        let n = self.size;
        let mut worst = 0.0f64;
        for i in 0..n {
            let mut row = 0.0;
            for j in 0..n {
                row += self.a[i * n + j] * self.x[j];
            }
            worst = worst.max((row - self.z[i]).abs());
        }
        worst
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_identity() {
        let mut m = NodalMatrix::new(3);
        for i in 0..3 {
            m.add(i, i, 1.0);
            m.add_source(i, (i + 1) as f64);
        }
        m.factor_and_solve().unwrap();
        assert_relative_eq!(m.x[0], 1.0);
        assert_relative_eq!(m.x[1], 2.0);
        assert_relative_eq!(m.x[2], 3.0);
    }

    #[test]
    fn test_solve_known_system() {
        // 2x + y = 5
        // x + 3y = 10
        let mut m = NodalMatrix::new(2);
        m.add(0, 0, 2.0);
        m.add(0, 1, 1.0);
        m.add(1, 0, 1.0);
        m.add(1, 1, 3.0);
        m.add_source(0, 5.0);
        m.add_source(1, 10.0);
        m.factor_and_solve().unwrap();
        assert_relative_eq!(m.x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(m.x[1], 3.0, epsilon = 1e-12);
        assert!(m.residual() < 1e-12);
    }

    #[test]
    fn test_pivoting_handles_zero_diagonal() {
        // Leading diagonal entry is zero; elimination without row swaps
        // would divide by zero.
        let mut m = NodalMatrix::new(2);
        m.add(0, 1, 1.0);
        m.add(1, 0, 1.0);
        m.add_source(0, 2.0);
        m.add_source(1, 3.0);
        m.factor_and_solve().unwrap();
        assert_relative_eq!(m.x[0], 3.0);
        assert_relative_eq!(m.x[1], 2.0);
    }

    #[test]
    fn test_singular_matrix_rejected() {
        // Second row is twice the first: rank 1.
        let mut m = NodalMatrix::new(2);
        m.add(0, 0, 1.0);
        m.add(0, 1, 2.0);
        m.add(1, 0, 2.0);
        m.add(1, 1, 4.0);
        m.add_source(0, 1.0);
        assert_eq!(m.factor(), Err(BridgeError::SingularMatrix));
    }

    #[test]
    fn test_stamp_conductance_symmetry() {
        let mut m = NodalMatrix::new(3);
        m.stamp_conductance(Some(0), Some(1), 0.5);
        m.stamp_conductance(Some(1), Some(2), 0.25);
        m.stamp_conductance(Some(2), None, 0.125);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
        // Grounded branch touches only the diagonal
        assert_relative_eq!(m.get(2, 2), 0.375);
    }

    #[test]
    fn test_current_source_signs() {
        let mut m = NodalMatrix::new(2);
        m.stamp_current_source(Some(0), Some(1), 1.5);
        assert_eq!(m.z[0], -1.5);
        assert_eq!(m.z[1], 1.5);
        // Ground side contributes nothing
        let mut m2 = NodalMatrix::new(2);
        m2.stamp_current_source(None, Some(0), 2.0);
        assert_eq!(m2.z[0], 2.0);
        assert_eq!(m2.z[1], 0.0);
    }
}
