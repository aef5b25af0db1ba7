//! Random vectors with components drawn uniformly from `[0, 1)`.
//!
//! The `_with` variants take the RNG explicitly so callers can seed
//! (`StdRng::seed_from_u64`) for reproducible draws.

use rand::Rng;

use super::Vector;

impl Vector {
    /// Random planar vector (`z = 0`) from the thread-local RNG.
    pub fn random_2d() -> Vector {
        Self::random_2d_with(&mut rand::thread_rng())
    }

    /// Random 3D vector from the thread-local RNG.
    pub fn random_3d() -> Vector {
        Self::random_3d_with(&mut rand::thread_rng())
    }

    pub fn random_2d_with<R: Rng>(rng: &mut R) -> Vector {
        Vector::new(rng.gen::<f64>(), rng.gen::<f64>(), 0.0)
    }

    pub fn random_3d_with<R: Rng>(rng: &mut R) -> Vector {
        Vector::new(rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>())
    }
}
