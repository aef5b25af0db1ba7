//! Determinant family: minors, cofactors, inverse, trace, triangularity.
//!
//! Model
//! - `determinant` takes the diagonal-product shortcut when `is_triangular`
//!   holds (square, `m > 2`), uses `ad - bc` for 2×2 and otherwise expands
//!   along row 1: `Σ_j parity(1, j) · a_1j · det(minor(1, j))`.
//! - The expansion is O(n!). It is kept as the reference contract; callers
//!   with large matrices should convert via `to_dmatrix` and use nalgebra.

use tracing::debug;

use super::Matrix2D;
use crate::error::LinalgError;

impl Matrix2D {
    fn require_square(&self) -> Result<(), LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::not_square(self.m, self.n));
        }
        Ok(())
    }

    #[inline]
    fn diagonal(&self) -> impl Iterator<Item = f64> + '_ {
        (1..=self.m).map(move |k| self.item(k, k))
    }

    /// Determinant of a square matrix.
    pub fn determinant(&self) -> Result<f64, LinalgError> {
        if self.is_triangular() == Some(true) {
            debug!(n = self.m, "determinant via triangular shortcut");
            return Ok(self.diagonal().product());
        }
        if self.m > 2 && self.is_square() {
            debug!(n = self.m, "determinant via cofactor expansion");
        }
        self.det_rec()
    }

    fn det_rec(&self) -> Result<f64, LinalgError> {
        if self.is_triangular() == Some(true) {
            return Ok(self.diagonal().product());
        }
        self.require_square()?;
        match self.m {
            1 => Ok(self.items[0]),
            2 => {
                let (a, b, c, d) = (self.items[0], self.items[1], self.items[2], self.items[3]);
                Ok(a * d - b * c)
            }
            _ => {
                let mut total = 0.0;
                for j in 1..=self.n {
                    let scalar = Self::parity(1, j) * self.item(1, j);
                    total += scalar * self.minor_of_square(1, j).det_rec()?;
                }
                Ok(total)
            }
        }
    }

    /// Removes row `i` and column `j`. Caller guarantees square, `m >= 2`, indices in range.
    fn minor_of_square(&self, i: usize, j: usize) -> Matrix2D {
        let size = self.m - 1;
        let mut items = Vec::with_capacity(size * size);
        for (r, row) in self.items.chunks(self.n).enumerate() {
            if r + 1 == i {
                continue;
            }
            items.extend(
                row.iter()
                    .enumerate()
                    .filter(|(c, _)| c + 1 != j)
                    .map(|(_, x)| *x),
            );
        }
        Matrix2D {
            m: size,
            n: size,
            items,
        }
    }

    /// Submatrix with row `i` and column `j` removed.
    ///
    /// `None` unless the matrix is square, at least 2×2, and `(i, j)` is in range.
    pub fn minor(&self, i: usize, j: usize) -> Option<Matrix2D> {
        if !self.is_square() || self.m < 2 {
            return None;
        }
        if !(1..=self.m).contains(&i) || !(1..=self.n).contains(&j) {
            return None;
        }
        Some(self.minor_of_square(i, j))
    }

    /// Matrix of signed minor determinants `parity(i, j) · det(minor(i, j))`.
    pub fn cofactor_matrix(&self) -> Result<Matrix2D, LinalgError> {
        self.require_square()?;
        if self.m == 1 {
            return Ok(Matrix2D::identity(1));
        }
        let mut out = Matrix2D::square(self.m);
        for i in 1..=self.m {
            for j in 1..=self.n {
                let det = self.minor_of_square(i, j).det_rec()?;
                out.set_item(i, j, Self::parity(i, j) * det);
            }
        }
        Ok(out)
    }

    /// Adjugate scaled by `1 / determinant`.
    ///
    /// A singular matrix is not rejected: the scaling produces `inf`/`NaN`.
    pub fn inverse(&self) -> Result<Matrix2D, LinalgError> {
        let det = self.determinant()?;
        let mut adj = self.cofactor_matrix()?;
        adj.transpose();
        if det == 0.0 {
            debug!(n = self.m, "inverting a singular matrix");
        }
        let s = 1.0 / det;
        for a in &mut adj.items {
            *a *= s;
        }
        Ok(adj)
    }

    /// `determinant() != 0`.
    pub fn has_inverse(&self) -> Result<bool, LinalgError> {
        Ok(self.determinant()? != 0.0)
    }

    /// Sum of the main diagonal.
    pub fn trace(&self) -> Result<f64, LinalgError> {
        self.require_square()?;
        Ok(self.diagonal().sum())
    }

    /// Product of the main diagonal.
    pub fn main_diagonal_product(&self) -> Result<f64, LinalgError> {
        self.require_square()?;
        Ok(self.diagonal().product())
    }

    /// Upper/lower triangularity test for square matrices with `m > 2`.
    ///
    /// Heuristic: when `(1, 2)` is nonzero the matrix cannot be lower
    /// triangular, so its transpose is checked instead; the checked view
    /// must then have only zeros strictly above its diagonal. A `true` answer
    /// is always correct. Upper triangular matrices whose `(1, 2)` entry is
    /// zero but that have other nonzero entries above the diagonal report
    /// `false`. `None` when the size precondition fails.
    pub fn is_triangular(&self) -> Option<bool> {
        if !self.is_square() || self.m <= 2 {
            return None;
        }
        // read the transposed view in place instead of transposing a copy
        let transposed = self.item(1, 2) != 0.0;
        for j in 2..=self.n {
            for i in 1..j {
                let x = if transposed {
                    self.item(j, i)
                } else {
                    self.item(i, j)
                };
                if x != 0.0 {
                    return Some(false);
                }
            }
        }
        Some(true)
    }
}
