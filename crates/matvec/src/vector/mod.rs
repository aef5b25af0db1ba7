//! 3-component real vector with the usual vector algebra.
//!
//! - `z` defaults to 0 through `new_2d` for planar use.
//! - In-place mutators: `add`, `sub`, `mult`. Everything else returns a new value.
//! - Associated helpers `sum`/`difference` are pure; they never touch their inputs.
//! - `unit()` of the zero vector yields NaN components (no error).
//!
//! Code cross-refs: `rand` (random constructors).

mod rand;

use std::fmt;

use nalgebra::Vector3;

use crate::cfg::APPROX_EPS;

/// Vector `x·i + y·j + z·k`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
    /// Planar vector, `z = 0`.
    #[inline]
    pub fn new_2d(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
    #[inline]
    pub fn unit_i() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
    #[inline]
    pub fn unit_j() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }
    #[inline]
    pub fn unit_k() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Polar construction in the xy-plane: `mag · (cos θ, sin θ, 0)`.
    pub fn from_angle_2d(theta: f64, mag: f64) -> Self {
        Self::new(theta.cos() * mag, theta.sin() * mag, 0.0)
    }

    /// Spherical construction with azimuth `theta` in the xz-plane and
    /// elevation `alpha` towards +y:
    /// `mag · (cos θ cos α, sin α, sin θ cos α)`.
    pub fn from_angle_3d(theta: f64, alpha: f64, mag: f64) -> Self {
        Self::new(
            theta.cos() * alpha.cos() * mag,
            alpha.sin() * mag,
            theta.sin() * alpha.cos() * mag,
        )
    }

    /// `self += other`.
    #[inline]
    pub fn add(&mut self, other: &Vector) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
    /// `self -= other`.
    #[inline]
    pub fn sub(&mut self, other: &Vector) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
    /// `self *= scalar`.
    #[inline]
    pub fn mult(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }

    /// `a + b` without mutating either input.
    #[inline]
    pub fn sum(a: &Vector, b: &Vector) -> Vector {
        Vector::new(a.x + b.x, a.y + b.y, a.z + b.z)
    }
    /// `a - b` without mutating either input.
    #[inline]
    pub fn difference(a: &Vector, b: &Vector) -> Vector {
        Vector::new(a.x - b.x, a.y - b.y, a.z - b.z)
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Length of the displacement from point `p` to point `q`.
    #[inline]
    pub fn distance(p: &Vector, q: &Vector) -> f64 {
        Vector::difference(q, p).magnitude()
    }

    /// Dot product. Also usable as `Vector::dot(&a, &b)`.
    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`.
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Scalar projection.
    ///
    /// - `theta = None`: `self·other / |self|`. Note the divisor is the norm of
    ///   `self`, so this is the length of `other` projected onto `self`.
    /// - `theta = Some(t)`: `|self| · cos t`.
    pub fn scalar_projection(&self, other: &Vector, theta: Option<f64>) -> f64 {
        match theta {
            None => self.dot(other) / self.magnitude(),
            Some(t) => self.magnitude() * t.cos(),
        }
    }

    /// Projection of `self` onto the direction of `other`.
    ///
    /// With `theta = None` the length is `self·b̂`; otherwise
    /// `scalar_projection(other, theta)`.
    pub fn vector_projection(&self, other: &Vector, theta: Option<f64>) -> Vector {
        let b_hat = other.unit();
        let len = match theta {
            None => self.dot(&b_hat),
            Some(_) => self.scalar_projection(other, theta),
        };
        b_hat * len
    }

    /// Direction-preserving vector of length 1. NaN components for the zero vector.
    pub fn unit(&self) -> Vector {
        let mag = self.magnitude();
        Vector::new(self.x / mag, self.y / mag, self.z / mag)
    }

    /// Angle in `[0, π]` between `self` and `other`. Also usable as `Vector::angle(&a, &b)`.
    ///
    /// NaN when either vector is zero. The cosine is clamped to `[-1, 1]` so
    /// rounding on (anti)parallel inputs cannot push `acos` out of its domain.
    pub fn angle(&self, other: &Vector) -> f64 {
        (self.dot(other) / (self.magnitude() * other.magnitude()))
            .clamp(-1.0, 1.0)
            .acos()
    }

    /// `-self`.
    #[inline]
    pub fn reverse(&self) -> Vector {
        let mut out = *self;
        out.mult(-1.0);
        out
    }

    /// Component-wise comparison with max-abs tolerance `eps`.
    pub fn approx_eq(&self, other: &Vector, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.z - other.z).abs() <= eps
    }

    /// `approx_eq` with the crate default tolerance.
    #[inline]
    pub fn approx_eq_default(&self, other: &Vector) -> bool {
        self.approx_eq(other, APPROX_EPS)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}i + {}j + {}k", self.x, self.y, self.z)
    }
}

impl std::ops::Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Self::Output {
        Vector::sum(&self, &rhs)
    }
}
impl std::ops::Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Self::Output {
        Vector::difference(&self, &rhs)
    }
}
impl std::ops::Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Self::Output {
        self.reverse()
    }
}
impl std::ops::Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Vector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(v: Vector3<f64>) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}
impl From<Vector> for Vector3<f64> {
    fn from(v: Vector) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests;
