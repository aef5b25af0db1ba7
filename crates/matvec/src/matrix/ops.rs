//! Element-wise and scalar arithmetic, plus the matrix product.

use super::Matrix2D;
use crate::error::{Extent, LinalgError};

impl Matrix2D {
    fn check_same_shape(&self, other: &Matrix2D) -> Result<(), LinalgError> {
        if self.shape() != other.shape() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.shape(),
                found: Extent::Shape(other.m, other.n),
            });
        }
        Ok(())
    }

    /// `self += other`, element-wise.
    pub fn add(&mut self, other: &Matrix2D) -> Result<(), LinalgError> {
        self.check_same_shape(other)?;
        for (a, b) in self.items.iter_mut().zip(&other.items) {
            *a += b;
        }
        Ok(())
    }

    /// `self -= other`, element-wise.
    pub fn sub(&mut self, other: &Matrix2D) -> Result<(), LinalgError> {
        self.check_same_shape(other)?;
        for (a, b) in self.items.iter_mut().zip(&other.items) {
            *a -= b;
        }
        Ok(())
    }

    /// Scale every entry by `scalar`.
    ///
    /// Rejects NaN only; `±inf` is accepted so that `div(0.0)` degrades to
    /// infinities instead of failing.
    pub fn mult(&mut self, scalar: f64) -> Result<(), LinalgError> {
        if scalar.is_nan() {
            return Err(LinalgError::NotANumber { value: scalar });
        }
        for a in &mut self.items {
            *a *= scalar;
        }
        Ok(())
    }

    /// `mult(1 / scalar)`. Division by zero yields `inf`/`NaN` entries.
    #[inline]
    pub fn div(&mut self, scalar: f64) -> Result<(), LinalgError> {
        self.mult(1.0 / scalar)
    }

    /// Standard product `a · b`; `a.cols()` must equal `b.rows()`.
    pub fn matmul(a: &Matrix2D, b: &Matrix2D) -> Result<Matrix2D, LinalgError> {
        if a.n != b.m {
            return Err(LinalgError::IncompatibleDimensions {
                left: a.shape(),
                right: b.shape(),
            });
        }
        let mut out = Matrix2D::new(a.m, b.n);
        for i in 0..a.m {
            let row = &a.items[i * a.n..(i + 1) * a.n];
            for j in 0..b.n {
                out.items[i * b.n + j] = row
                    .iter()
                    .enumerate()
                    .map(|(k, x)| x * b.items[k * b.n + j])
                    .sum();
            }
        }
        Ok(out)
    }
}
