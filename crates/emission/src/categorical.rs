//! Categorical symbol emission.

use hermes_sampler::sample_index;
use rand::Rng;

use crate::error::EmissionError;
use crate::model::EmissionModel;

/// Per-state categorical symbol distributions.
///
/// Row `j` contains the selection weights for each of the `M` symbols while
/// in hidden state `j`. Emitted observations are symbol indices in
/// `[0, M)`. Weights need not be normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalEmission {
    symbol_weights: Vec<Vec<f64>>,
}

impl CategoricalEmission {
    /// Constructs a model from per-state symbol weight rows.
    pub fn new(symbol_weights: Vec<Vec<f64>>) -> Self {
        Self { symbol_weights }
    }

    /// Returns the number of states the model has rows for.
    pub fn n_states(&self) -> usize {
        self.symbol_weights.len()
    }

    /// Validates dimensions eagerly against an expected state count.
    ///
    /// Checks that there is one row per state and that every row has the
    /// same symbol count as row 0. Weight values themselves are not
    /// inspected.
    pub fn validate(&self, n_states: usize) -> Result<(), EmissionError> {
        if self.symbol_weights.len() != n_states {
            return Err(EmissionError::RowCount {
                expected: n_states,
                got: self.symbol_weights.len(),
            });
        }
        if let Some(first) = self.symbol_weights.first() {
            let n_symbols = first.len();
            for (j, row) in self.symbol_weights.iter().enumerate() {
                if row.len() != n_symbols {
                    return Err(EmissionError::RowLength {
                        row: j,
                        expected: n_symbols,
                        got: row.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl EmissionModel for CategoricalEmission {
    type Observation = usize;

    fn emit<R: Rng>(
        &self,
        state: usize,
        _history: &[usize],
        rng: &mut R,
    ) -> Result<usize, EmissionError> {
        let row = self
            .symbol_weights
            .get(state)
            .ok_or(EmissionError::StateOutOfRange {
                state,
                n_states: self.symbol_weights.len(),
            })?;
        Ok(sample_index(row, rng)?)
    }
}
