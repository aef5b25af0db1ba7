//! Dense `m × n` matrix of `f64`, stored as a flat row-major `Vec`.
//!
//! - Addressing is 1-indexed: entry `(i, j)` lives at flat index
//!   `(i - 1) * n + (j - 1)` for both reads and writes.
//! - In-place mutators: `add`, `sub`, `mult`, `div`, `transpose`,
//!   `swap_with_transpose`, `set_item`. Everything else returns a new matrix.
//! - Determinant uses recursive cofactor expansion (O(n!)), so keep sizes small.
//!
//! Code cross-refs: `det` (determinant family), `ops` (arithmetic), `LinalgError`.

mod det;
mod ops;

use std::fmt;

use nalgebra::DMatrix;

use crate::cfg::APPROX_EPS;
use crate::error::{Extent, LinalgError};

/// Row-major dense matrix.
///
/// Invariants:
/// - `rows >= 1`, `cols >= 1`.
/// - `items.len() == rows * cols` after every operation completes.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix2D {
    m: usize,
    n: usize,
    items: Vec<f64>,
}

impl Matrix2D {
    /// Zero-filled `m × n` matrix.
    ///
    /// Panics if either dimension is zero.
    pub fn new(m: usize, n: usize) -> Self {
        assert!(m > 0 && n > 0, "matrix dimensions must be positive, got {m}x{n}");
        Self {
            m,
            n,
            items: vec![0.0; m * n],
        }
    }

    /// Zero-filled `m × m` matrix.
    #[inline]
    pub fn square(m: usize) -> Self {
        Self::new(m, m)
    }

    /// Wrap a row-major item sequence as an `m × n` matrix.
    ///
    /// Takes ownership of `items`; pass a clone to keep using the original.
    pub fn from_array(items: Vec<f64>, m: usize, n: usize) -> Result<Self, LinalgError> {
        if m == 0 || n == 0 || items.len() != m * n {
            return Err(LinalgError::DimensionMismatch {
                expected: (m, n),
                found: Extent::Len(items.len()),
            });
        }
        Ok(Self { m, n, items })
    }

    /// `n × n` identity.
    pub fn identity(n: usize) -> Self {
        let mut out = Self::square(n);
        for k in 0..n {
            out.items[k * (n + 1)] = 1.0;
        }
        out
    }

    /// Cofactor sign `(-1)^(i+j)`.
    #[inline]
    pub fn parity(i: usize, j: usize) -> f64 {
        if (i + j) % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.m
    }
    #[inline]
    pub fn cols(&self) -> usize {
        self.n
    }
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.m, self.n)
    }
    #[inline]
    pub fn is_square(&self) -> bool {
        self.m == self.n
    }
    /// Row-major items.
    #[inline]
    pub fn items(&self) -> &[f64] {
        &self.items
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            (1..=self.m).contains(&i) && (1..=self.n).contains(&j),
            "index ({i}, {j}) out of range for {}x{} matrix",
            self.m,
            self.n
        );
        (i - 1) * self.n + (j - 1)
    }

    /// Entry at row `i`, column `j` (1-indexed). Panics when out of range.
    #[inline]
    pub fn item(&self, i: usize, j: usize) -> f64 {
        self.items[self.offset(i, j)]
    }

    /// Overwrite entry `(i, j)` (1-indexed). Panics when out of range.
    #[inline]
    pub fn set_item(&mut self, i: usize, j: usize, value: f64) {
        let k = self.offset(i, j);
        self.items[k] = value;
    }

    /// Exchange entries `(i, j)` and `(j, i)`. Both must be in range.
    pub fn swap_with_transpose(&mut self, i: usize, j: usize) {
        let a = self.offset(i, j);
        let b = self.offset(j, i);
        self.items.swap(a, b);
    }

    /// Transpose in place.
    ///
    /// Square matrices swap symmetric pairs without reallocating; otherwise
    /// the items are rebuilt in transposed order and `rows`/`cols` exchange.
    pub fn transpose(&mut self) {
        if self.is_square() {
            for i in 2..=self.m {
                for j in 1..i {
                    self.swap_with_transpose(i, j);
                }
            }
            return;
        }
        let mut items = Vec::with_capacity(self.items.len());
        for j in 1..=self.n {
            for i in 1..=self.m {
                items.push(self.item(i, j));
            }
        }
        std::mem::swap(&mut self.m, &mut self.n);
        self.items = items;
    }

    /// Element-wise comparison with max-abs tolerance `eps`. Shapes must match.
    pub fn approx_eq(&self, other: &Matrix2D, eps: f64) -> bool {
        self.shape() == other.shape()
            && self
                .items
                .iter()
                .zip(&other.items)
                .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// `approx_eq` with the crate default tolerance.
    #[inline]
    pub fn approx_eq_default(&self, other: &Matrix2D) -> bool {
        self.approx_eq(other, APPROX_EPS)
    }

    /// Row-bracketed, comma-separated text, one row per line. Diagnostic only.
    ///
    /// `[[1, 2], [3, 4]]` renders as `"[1, 2]\n[3, 4]\n"`.
    pub fn print_matrix(&self) -> String {
        let mut s = String::new();
        for row in self.items.chunks(self.n) {
            let cells: Vec<String> = row.iter().map(|x| x.to_string()).collect();
            s.push('[');
            s.push_str(&cells.join(", "));
            s.push_str("]\n");
        }
        s
    }

    /// Column-major nalgebra copy.
    pub fn to_dmatrix(&self) -> DMatrix<f64> {
        DMatrix::from_row_slice(self.m, self.n, &self.items)
    }

    /// Row-major copy of a nalgebra matrix. `None` for an empty matrix.
    pub fn from_dmatrix(mat: &DMatrix<f64>) -> Option<Self> {
        let (m, n) = mat.shape();
        if m == 0 || n == 0 {
            return None;
        }
        let items = mat.transpose().as_slice().to_vec();
        Some(Self { m, n, items })
    }
}

impl fmt::Display for Matrix2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print_matrix())
    }
}
