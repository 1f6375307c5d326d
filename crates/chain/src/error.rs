//! Error types for the hermes-chain crate.

use hermes_sampler::SamplerError;

/// Error type for all fallible operations in the hermes-chain crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChainError {
    /// Returned when a transition row length does not match the number of
    /// states.
    #[error("transition row {row} has {got} entries, expected {expected}")]
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Expected row length (the state count).
        expected: usize,
        /// Actual row length.
        got: usize,
    },

    /// Returned when the initial distribution length does not match the
    /// number of states.
    #[error("initial distribution has {got} entries, expected {expected}")]
    InitialLength {
        /// Expected length (the state count).
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when a state index is outside `[0, n_states)`.
    #[error("state {state} out of range for chain with {n_states} state(s)")]
    StateOutOfRange {
        /// The offending state index.
        state: usize,
        /// Number of states in the chain.
        n_states: usize,
    },

    /// Returned when a weight row has no positive mass to sample from.
    #[error("weighted draw failed: {0}")]
    Sampler(#[from] SamplerError),
}
