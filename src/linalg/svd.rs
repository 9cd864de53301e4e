//! One-sided Jacobi SVD
//!
//! Orthogonalizes the columns of `A` (m × n) with plane rotations that are
//! accumulated into `V`. After convergence the column norms are the singular
//! values and the normalized columns form `U`, so `A = U Σ Vᵀ`.
//!
//! The number of sweeps is bounded; the result of the last sweep is returned
//! with `converged == false` when the bound is hit.

use ndarray::{Array1, Array2, ArrayView2, Axis};

/// Result of a decomposition
#[derive(Debug, Clone)]
pub struct Svd {
    /// Singular values, descending (length n)
    pub singular_values: Array1<f64>,
    /// Left singular vectors as columns (m × n); zero columns for σ = 0
    pub u: Array2<f64>,
    /// Right singular vectors as columns (n × n)
    pub v: Array2<f64>,
    /// Sweeps performed
    pub sweeps: usize,
    /// Whether the off-diagonal mass fell below tolerance
    pub converged: bool,
}

impl Svd {
    /// Numerical rank: singular values above `σ_max · max(m, n) · ε`
    pub fn rank(&self) -> usize {
        let Some(&largest) = self.singular_values.first() else {
            return 0;
        };
        if largest <= 0.0 {
            return 0;
        }
        let dims = self.u.nrows().max(self.v.nrows()) as f64;
        let cutoff = largest * dims * f64::EPSILON;
        self.singular_values.iter().filter(|&&s| s > cutoff).count()
    }
}

/// One-sided Jacobi SVD solver
#[derive(Debug, Clone, Copy)]
pub struct JacobiSvd {
    /// Maximum number of sweeps over all column pairs
    pub max_sweeps: usize,
    /// Relative orthogonality tolerance
    pub tolerance: f64,
}

impl Default for JacobiSvd {
    fn default() -> Self {
        Self {
            max_sweeps: 60,
            tolerance: 1e-10,
        }
    }
}

impl JacobiSvd {
    /// Create a solver with custom limits
    pub fn new(max_sweeps: usize, tolerance: f64) -> Self {
        Self {
            max_sweeps,
            tolerance,
        }
    }

    /// Decompose `matrix` (m × n)
    pub fn decompose(&self, matrix: ArrayView2<'_, f64>) -> Svd {
        let (m, n) = matrix.dim();
        let mut work = matrix.to_owned();
        let mut v = Array2::<f64>::eye(n);

        let mut sweeps = 0;
        let mut converged = n < 2;

        while !converged && sweeps < self.max_sweeps {
            sweeps += 1;
            let mut rotated = false;

            for p in 0..n {
                for q in (p + 1)..n {
                    let col_p = work.column(p);
                    let col_q = work.column(q);
                    let alpha = col_p.dot(&col_p);
                    let beta = col_q.dot(&col_q);
                    let gamma = col_p.dot(&col_q);

                    if gamma == 0.0 || gamma.abs() <= self.tolerance * (alpha * beta).sqrt() {
                        continue;
                    }
                    rotated = true;

                    let zeta = (beta - alpha) / (2.0 * gamma);
                    let t = zeta.signum() / (zeta.abs() + (1.0 + zeta * zeta).sqrt());
                    let c = 1.0 / (1.0 + t * t).sqrt();
                    let s = c * t;

                    rotate(&mut work, p, q, c, s);
                    rotate(&mut v, p, q, c, s);
                }
            }

            converged = !rotated;
        }

        let norms: Vec<f64> = work
            .axis_iter(Axis(1))
            .map(|col| col.dot(&col).sqrt())
            .collect();

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| norms[b].total_cmp(&norms[a]).then_with(|| a.cmp(&b)));

        let mut singular_values = Array1::<f64>::zeros(n);
        let mut u = Array2::<f64>::zeros((m, n));
        let mut v_sorted = Array2::<f64>::zeros((n, n));
        for (k, &j) in order.iter().enumerate() {
            let sigma = norms[j];
            singular_values[k] = sigma;
            if sigma > 0.0 {
                u.column_mut(k).assign(&(&work.column(j) / sigma));
            }
            v_sorted.column_mut(k).assign(&v.column(j));
        }

        Svd {
            singular_values,
            u,
            v: v_sorted,
            sweeps,
            converged,
        }
    }
}

/// Apply the rotation to columns `p` and `q`
fn rotate(matrix: &mut Array2<f64>, p: usize, q: usize, c: f64, s: f64) {
    for mut row in matrix.axis_iter_mut(Axis(0)) {
        let a_p = row[p];
        let a_q = row[q];
        row[p] = c * a_p - s * a_q;
        row[q] = s * a_p + c * a_q;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn reconstruct(svd: &Svd) -> Array2<f64> {
        let sigma = Array2::from_diag(&svd.singular_values);
        svd.u.dot(&sigma).dot(&svd.v.t())
    }

    fn assert_close(a: &Array2<f64>, b: &Array2<f64>) {
        assert_eq!(a.shape(), b.shape());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-8, "{x} != {y}");
        }
    }

    #[test]
    fn test_known_singular_values() {
        let a = array![[3.0, 0.0], [4.0, 5.0]];
        let svd = JacobiSvd::default().decompose(a.view());

        assert!(svd.converged);
        assert!((svd.singular_values[0] - 45.0_f64.sqrt()).abs() < 1e-10);
        assert!((svd.singular_values[1] - 5.0_f64.sqrt()).abs() < 1e-10);
        assert_eq!(svd.rank(), 2);
        assert_close(&reconstruct(&svd), &a);
    }

    #[test]
    fn test_tall_matrix_reconstructs() {
        let a = array![
            [1.0, 0.0, 2.0],
            [0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 0.0, 3.0]
        ];
        let svd = JacobiSvd::default().decompose(a.view());

        assert!(svd.converged);
        assert_close(&reconstruct(&svd), &a);

        // Right singular vectors are orthonormal
        let vtv = svd.v.t().dot(&svd.v);
        assert_close(&vtv, &Array2::eye(3));

        // Descending
        let s = &svd.singular_values;
        assert!(s[0] >= s[1] && s[1] >= s[2]);
    }

    #[test]
    fn test_wide_and_rank_deficient() {
        // Second column is twice the first
        let a = array![[1.0, 2.0, 0.0], [1.0, 2.0, 1.0]];
        let svd = JacobiSvd::default().decompose(a.view());

        assert_eq!(svd.rank(), 2);
        assert!(svd.singular_values[2].abs() < 1e-10);
        assert_close(&reconstruct(&svd), &a);
    }

    #[test]
    fn test_zero_and_empty_matrices() {
        let zero = Array2::<f64>::zeros((3, 2));
        let svd = JacobiSvd::default().decompose(zero.view());
        assert_eq!(svd.rank(), 0);
        assert!(svd.u.iter().all(|&x| x == 0.0));

        let empty = Array2::<f64>::zeros((0, 0));
        let svd = JacobiSvd::default().decompose(empty.view());
        assert_eq!(svd.rank(), 0);
        assert!(svd.converged);
    }

    #[test]
    fn test_sweep_bound() {
        let a = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let svd = JacobiSvd::new(0, 1e-12).decompose(a.view());
        assert_eq!(svd.sweeps, 0);
        assert!(!svd.converged);
    }
}
