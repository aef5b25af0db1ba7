//! Error taxonomy for matrix operations.
//!
//! Only shape violations and NaN scalars are errors. Division by zero,
//! singular inversion and zero-vector normalization degrade to `inf`/`NaN`.

use std::fmt;

/// Errors surfaced by `Matrix2D` operations.
#[derive(Clone, Debug, PartialEq)]
pub enum LinalgError {
    /// Operand shape (or flat item count) disagrees with the required shape.
    DimensionMismatch {
        expected: (usize, usize),
        found: Extent,
    },
    /// Square-only operation invoked on an `m × n` matrix with `m != n`.
    NotSquare { rows: usize, cols: usize },
    /// Matrix product with `left.cols != right.rows`.
    IncompatibleDimensions {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Scalar multiply/divide given a NaN scalar.
    NotANumber { value: f64 },
}

/// What was supplied where a shape was required.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extent {
    /// Another matrix, `rows × cols`.
    Shape(usize, usize),
    /// A flat item sequence of this length.
    Len(usize),
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Shape(m, n) => write!(f, "{m}x{n}"),
            Extent::Len(len) => write!(f, "{len} items"),
        }
    }
}

impl LinalgError {
    pub(crate) fn not_square(rows: usize, cols: usize) -> Self {
        Self::NotSquare { rows, cols }
    }
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "invalid matrix size: expected {}x{}, found {found}",
                expected.0, expected.1
            ),
            Self::NotSquare { rows, cols } => {
                write!(f, "matrix must be square, got {rows}x{cols}")
            }
            Self::IncompatibleDimensions { left, right } => write!(
                f,
                "incompatible matrices: {}x{} times {}x{}",
                left.0, left.1, right.0, right.1
            ),
            Self::NotANumber { value } => write!(f, "scalar is not a number: {value}"),
        }
    }
}

impl std::error::Error for LinalgError {}
