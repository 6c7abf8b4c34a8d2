//! Inputs for the smoothed-particle kernel expression.
//!
//! The scenario evaluates `vf = m*w/rho + (m+rho)*w/m` where `rho` is a
//! field of ones, `m` a field of halves, and `w` a Gaussian kernel weight of
//! randomly sampled radii.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{Field, ScenarioOptions};

/// Gaussian kernel weight `exp(-(0.01 * x)^2)`.
pub fn weight(x: f64) -> f64 {
    (-(1e-2 * x).powi(2)).exp()
}

/// Samples `len` radii uniformly from `[0, 1)`.
pub fn sample_radii<R: Rng>(len: usize, rng: &mut R) -> Field<f64> {
    Field::from_fn(len, |_| rng.gen_range(0.0..1.0))
}

/// The three leaf fields of the kernel expression.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelInputs {
    pub rho: Field<f64>,
    pub m: Field<f64>,
    pub w: Field<f64>,
}

impl KernelInputs {
    /// Builds inputs for the given radii: `rho = 1`, `m = 0.5`,
    /// `w[i] = weight(r[i])`.
    pub fn from_radii(radii: &Field<f64>) -> Self {
        let len = radii.len();
        Self {
            rho: Field::with_value(len, 1.0),
            m: Field::with_value(len, 0.5),
            w: radii.map(weight),
        }
    }

    /// Samples radii with a seeded generator and builds inputs from them.
    pub fn random(options: &ScenarioOptions) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
        let radii = sample_radii(options.len, &mut rng);
        tracing::debug!(len = options.len, seed = options.seed, "sampled kernel radii");
        Self::from_radii(&radii)
    }

    pub fn len(&self) -> usize {
        self.rho.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rho.is_empty()
    }

    /// Closed-form value of element `index`, computed directly from the
    /// leaves without any intermediate fields.
    pub fn expected(&self, index: usize) -> f64 {
        let (rho, m, w) = (self.rho[index], self.m[index], self.w[index]);
        m * w / rho + (m + rho) * w / m
    }
}
