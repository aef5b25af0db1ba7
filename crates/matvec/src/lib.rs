//! Small dense linear algebra: a row-major `Matrix2D` and a 3-component `Vector`.
//!
//! Layout
//! - `matrix`: arithmetic, transposition, determinant/minor/cofactor/inverse.
//! - `vector`: dot/cross products, projections, angles, constructors.
//! - `error`: the shared `LinalgError` taxonomy for fallible matrix ops.
//!
//! Conventions
//! - Matrix addressing is 1-indexed (`item(1, 1)` is the top-left entry).
//! - Numeric degradation (division by zero, singular inversion, normalizing
//!   the zero vector) propagates `inf`/`NaN` instead of returning an error.
//! - The two types are independent; neither module imports the other.

pub(crate) mod cfg;
pub mod error;
pub mod matrix;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Extent, LinalgError};
pub use matrix::Matrix2D;
pub use vector::Vector;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Extent, LinalgError};
    pub use crate::matrix::Matrix2D;
    pub use crate::vector::Vector;
}
