//! Gaussian elimination with partial pivoting.

use crate::error::{NodalError, Result};

use super::PIVOT_TOLERANCE;

/// Solve the `n x (n + 1)` row-major augmented system `[A | b]`.
///
/// Pivot selection keeps the lowest row among equal magnitudes, so the
/// same input always takes the same elimination path. Fails with
/// [`NodalError::SingularMatrix`] as soon as a pivot's magnitude drops
/// below [`PIVOT_TOLERANCE`]; no partial solution is returned.
pub fn solve_augmented(mut aug: Vec<f64>, n: usize) -> Result<Vec<f64>> {
    let width = n + 1;
    debug_assert_eq!(aug.len(), n * width, "augmented matrix has wrong shape");

    // Forward elimination
    for i in 0..n {
        let max_row = pivot_row(&aug, n, i);
        if max_row != i {
            for j in 0..width {
                aug.swap(i * width + j, max_row * width + j);
            }
        }

        let pivot = aug[i * width + i];
        if pivot.abs() < PIVOT_TOLERANCE {
            log::debug!("Pivot {} is {:e}, system is singular", i, pivot);
            return Err(NodalError::SingularMatrix { pivot: i });
        }

        for j in i..width {
            aug[i * width + j] /= pivot;
        }

        for k in (i + 1)..n {
            let factor = aug[k * width + i];
            for j in i..width {
                aug[k * width + j] -= factor * aug[i * width + j];
            }
        }
    }

    // Back substitution
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut value = aug[i * width + n];
        for j in (i + 1)..n {
            value -= aug[i * width + j] * x[j];
        }
        x[i] = value;
    }

    Ok(x)
}

/// Row at or below `col` with the largest magnitude in column `col`.
///
/// Only a strictly larger magnitude displaces the current candidate, so
/// ties go to the lowest row.
fn pivot_row(aug: &[f64], n: usize, col: usize) -> usize {
    let width = n + 1;
    let mut max_row = col;
    let mut max_val = aug[col * width + col].abs();
    for k in (col + 1)..n {
        let val = aug[k * width + col].abs();
        if val > max_val {
            max_val = val;
            max_row = k;
        }
    }
    max_row
}
