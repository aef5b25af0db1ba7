//! Tolerance defaults (internal).
//!
//! Policy
//! - One fixed constant shared by the `approx_eq` helpers and tests. Callers
//!   that need a different tolerance pass it explicitly.

/// Default max-abs tolerance for element-wise approximate comparison.
pub(crate) const APPROX_EPS: f64 = 1e-9;
