use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

use super::error::ProfileError;

/// Random variation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseConfig {
    /// Standard deviation of the noise, as a percentage of the
    /// instantaneous load. `0` disables noise entirely.
    pub random_pct: f64,
    /// Seed for a reproducible series. `None` or `Some(0)` draws from OS
    /// entropy.
    pub seed: Option<u64>,
}

impl NoiseConfig {
    pub fn new(random_pct: f64, seed: Option<u64>) -> Self {
        Self { random_pct, seed }
    }

    /// No random variation.
    pub fn disabled() -> Self {
        Self {
            random_pct: 0.0,
            seed: None,
        }
    }

    /// Seed actually used, with the `0` sentinel folded into `None`.
    pub fn effective_seed(&self) -> Option<u64> {
        self.seed.filter(|&s| s != 0)
    }

    /// Checks that the percentage is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidLoad`] otherwise.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !self.random_pct.is_finite() || self.random_pct < 0.0 {
            return Err(ProfileError::InvalidLoad(format!(
                "random variation must be a non-negative percentage, got {}",
                self.random_pct
            )));
        }
        Ok(())
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            random_pct: 5.0,
            seed: None,
        }
    }
}

/// Per-call Gaussian noise source.
///
/// Owns its own RNG so concurrent generations never share random state.
/// The RNG only advances in [`NoiseSource::perturb`] and only when noise is
/// enabled, which keeps seeded series reproducible.
#[derive(Debug, Clone)]
pub struct NoiseSource {
    rng: StdRng,
    /// `None` when `random_pct == 0`.
    normal: Option<Normal<f64>>,
}

impl NoiseSource {
    /// Creates the source for one generation run.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidLoad`] for a negative or non-finite
    /// percentage.
    pub fn new(config: &NoiseConfig) -> Result<Self, ProfileError> {
        config.validate()?;
        let rng = match config.effective_seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let normal = if config.random_pct > 0.0 {
            let dist = Normal::new(0.0, config.random_pct / 100.0)
                .map_err(|e| ProfileError::InvalidLoad(format!("random variation: {e}")))?;
            Some(dist)
        } else {
            None
        };
        Ok(Self { rng, normal })
    }

    pub fn is_enabled(&self) -> bool {
        self.normal.is_some()
    }

    /// Applies one noise draw to `load_kw`.
    ///
    /// The draw is scaled by `load_kw` itself and the result is clamped at
    /// zero. With noise disabled the load is returned unchanged and no draw
    /// is made.
    pub fn perturb(&mut self, load_kw: f64) -> f64 {
        match &self.normal {
            Some(normal) => {
                let noise = normal.sample(&mut self.rng) * load_kw;
                (load_kw + noise).max(0.0)
            }
            None => load_kw,
        }
    }
}
