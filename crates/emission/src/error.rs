//! Error types for the hermes-emission crate.

use hermes_sampler::SamplerError;

/// Error type for all fallible operations in the hermes-emission crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmissionError {
    /// Returned when no emission parameters exist for a hidden state.
    #[error("no emission parameters for state {state} ({n_states} state(s) configured)")]
    StateOutOfRange {
        /// The offending state index.
        state: usize,
        /// Number of states the model has parameters for.
        n_states: usize,
    },

    /// Returned when the per-state parameter count does not match the
    /// chain's state count.
    #[error("emission model has parameters for {got} state(s), expected {expected}")]
    RowCount {
        /// Expected number of per-state parameter rows.
        expected: usize,
        /// Actual number of rows.
        got: usize,
    },

    /// Returned when an emission row length does not match the symbol count.
    #[error("emission row {row} has {got} entries, expected {expected}")]
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Expected row length (the symbol count).
        expected: usize,
        /// Actual row length.
        got: usize,
    },

    /// Returned when a regime's noise standard deviation is negative or
    /// non-finite.
    #[error("invalid noise for state {state}: std_dev {std_dev} must be finite and non-negative")]
    InvalidNoise {
        /// The offending state index.
        state: usize,
        /// The rejected standard deviation.
        std_dev: f64,
    },

    /// Returned when an emission weight row has no positive mass.
    #[error("weighted draw failed: {0}")]
    Sampler(#[from] SamplerError),
}
