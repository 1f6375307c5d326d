//! Autoregressive Gaussian emission.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::EmissionError;
use crate::model::EmissionModel;

/// Gaussian noise parameters for one regime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseSpec {
    /// Mean of the noise term.
    pub mean: f64,
    /// Standard deviation of the noise term. Zero is allowed and makes the
    /// noise a point mass at `mean`.
    pub std_dev: f64,
}

/// Lag coefficients and noise parameters for one regime.
///
/// Coefficients are ordered most-recent-lag first: position 0 multiplies
/// the immediately preceding observation (lag 1), position `p - 1` the
/// observation `p` steps back.
#[derive(Debug, Clone, PartialEq)]
pub struct Regime {
    /// Lag coefficients, most-recent first. May be empty (pure noise).
    pub coefficients: Vec<f64>,
    /// Gaussian noise parameters.
    pub noise: NoiseSpec,
}

impl Regime {
    /// Constructs a regime from coefficients and noise parameters.
    pub fn new(coefficients: Vec<f64>, mean: f64, std_dev: f64) -> Self {
        Self {
            coefficients,
            noise: NoiseSpec { mean, std_dev },
        }
    }

    /// Returns the lag order of this regime.
    pub fn lag_order(&self) -> usize {
        self.coefficients.len()
    }
}

/// Per-state autoregressive emission with Gaussian noise.
///
/// The emitted value is a linear combination of the most recent
/// observations, weighted by the active regime's coefficients, plus a draw
/// from the regime's noise distribution. Early in a sequence the available
/// history may be shorter than the lag order; the unmatched coefficient
/// positions simply contribute no terms.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoregressiveEmission {
    regimes: Vec<Regime>,
}

impl AutoregressiveEmission {
    /// Constructs a model from per-state regimes.
    pub fn new(regimes: Vec<Regime>) -> Self {
        Self { regimes }
    }

    /// Returns the number of states the model has regimes for.
    pub fn n_states(&self) -> usize {
        self.regimes.len()
    }

    /// Validates eagerly against an expected state count.
    ///
    /// Checks the regime count and each regime's noise parameters. Lag
    /// orders are free to differ per regime.
    pub fn validate(&self, n_states: usize) -> Result<(), EmissionError> {
        if self.regimes.len() != n_states {
            return Err(EmissionError::RowCount {
                expected: n_states,
                got: self.regimes.len(),
            });
        }
        for (j, regime) in self.regimes.iter().enumerate() {
            let sd = regime.noise.std_dev;
            if !sd.is_finite() || sd < 0.0 {
                return Err(EmissionError::InvalidNoise {
                    state: j,
                    std_dev: sd,
                });
            }
        }
        Ok(())
    }
}

impl EmissionModel for AutoregressiveEmission {
    type Observation = f64;

    fn emit<R: Rng>(
        &self,
        state: usize,
        history: &[f64],
        rng: &mut R,
    ) -> Result<f64, EmissionError> {
        let regime = self
            .regimes
            .get(state)
            .ok_or(EmissionError::StateOutOfRange {
                state,
                n_states: self.regimes.len(),
            })?;

        // Walk the history newest-to-oldest so that coefficient position 0
        // pairs with lag 1, position 1 with lag 2, and so on. `zip` stops at
        // the shorter side, which handles both a short early history and a
        // lag order smaller than the history.
        let recursion: f64 = history
            .iter()
            .rev()
            .zip(&regime.coefficients)
            .map(|(obs, coef)| obs * coef)
            .sum();

        let NoiseSpec { mean, std_dev } = regime.noise;
        let normal = Normal::new(mean, std_dev).map_err(|_| EmissionError::InvalidNoise {
            state,
            std_dev,
        })?;

        Ok(recursion + normal.sample(rng))
    }
}
