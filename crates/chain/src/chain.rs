//! Markov chain state transitions.

use hermes_sampler::sample_index;
use rand::Rng;

use crate::error::ChainError;

/// A first-order Markov chain over `n_states` discrete states.
///
/// Row `i` of the transition matrix contains the weights for moving from
/// state `i` to each of the `n_states` states. Weights need not be
/// normalized; draws are proportional to the supplied values.
///
/// Dimension mismatches surface at the first use of the offending row.
/// Call [`MarkovChain::validate()`] to check all dimensions eagerly instead.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkovChain {
    transition: Vec<Vec<f64>>,
    initial: Vec<f64>,
    n_states: usize,
}

impl MarkovChain {
    /// Constructs a chain from a transition-weight matrix and an
    /// initial-state distribution.
    ///
    /// The state count is taken from the number of transition rows.
    pub fn new(transition: Vec<Vec<f64>>, initial: Vec<f64>) -> Self {
        let n_states = transition.len();
        Self {
            transition,
            initial,
            n_states,
        }
    }

    /// Returns the number of states.
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Returns the transition-weight row for a state, checking its dimensions.
    fn row(&self, state: usize) -> Result<&[f64], ChainError> {
        if state >= self.n_states {
            return Err(ChainError::StateOutOfRange {
                state,
                n_states: self.n_states,
            });
        }
        let row = &self.transition[state];
        if row.len() != self.n_states {
            return Err(ChainError::RowLength {
                row: state,
                expected: self.n_states,
                got: row.len(),
            });
        }
        Ok(row)
    }

    /// Samples the first hidden state from the initial distribution.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InitialLength`] if the initial distribution
    /// length does not match the state count, or [`ChainError::Sampler`] if
    /// it has no positive mass.
    pub fn initial_state(&self, rng: &mut impl Rng) -> Result<usize, ChainError> {
        if self.initial.len() != self.n_states {
            return Err(ChainError::InitialLength {
                expected: self.n_states,
                got: self.initial.len(),
            });
        }
        Ok(sample_index(&self.initial, rng)?)
    }

    /// Samples the next hidden state given the current one.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::StateOutOfRange`] if `current` is not a valid
    /// state, [`ChainError::RowLength`] if the row for `current` has the
    /// wrong length, or [`ChainError::Sampler`] if the row has no positive
    /// mass.
    pub fn next_state(&self, current: usize, rng: &mut impl Rng) -> Result<usize, ChainError> {
        let row = self.row(current)?;
        Ok(sample_index(row, rng)?)
    }

    /// Validates all dimensions eagerly.
    ///
    /// Checks that every transition row and the initial distribution have
    /// length `n_states`. Does not inspect the weights themselves: weight
    /// vectors are allowed to be unnormalized, and mass problems surface on
    /// the draw that hits them.
    pub fn validate(&self) -> Result<(), ChainError> {
        for (i, row) in self.transition.iter().enumerate() {
            if row.len() != self.n_states {
                return Err(ChainError::RowLength {
                    row: i,
                    expected: self.n_states,
                    got: row.len(),
                });
            }
        }
        if self.initial.len() != self.n_states {
            return Err(ChainError::InitialLength {
                expected: self.n_states,
                got: self.initial.len(),
            });
        }
        Ok(())
    }
}
