use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{NnError, Result};
use crate::math::matrix::Matrix;

/// A generator seeded from OS entropy, so each process run starts from
/// different weights.
pub fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

/// A generator with a fixed seed for reproducible initialization.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Fan-in scaled uniform initialization: every entry is drawn independently
/// from U[-1/sqrt(fan_in), 1/sqrt(fan_in)].
///
/// Shape: (rows, cols). `fan_in` is the width of the layer feeding the weights.
pub fn initialize_weights<R>(rows: usize, cols: usize, fan_in: usize, rng: &mut R) -> Result<Matrix>
where
    R: Rng + ?Sized,
{
    if fan_in == 0 {
        return Err(NnError::InvalidConfiguration("fan-in must be at least 1".into()));
    }

    let bound = 1.0 / (fan_in as f64).sqrt();
    let dist = Uniform::new_inclusive(-bound, bound);

    Ok(Matrix::from_fn(rows, cols, |_, _| dist.sample(&mut *rng)))
}
