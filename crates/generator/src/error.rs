//! Error types for the hermes-generator crate.

use hermes_chain::ChainError;
use hermes_emission::EmissionError;

/// Error type for all fallible operations in the hermes-generator crate.
///
/// Every error aborts the current `generate` call: generation is pure given
/// its random source, so a failure always means malformed parameters and
/// there is no partial-result or retry path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// Returned when fewer than one timestep is requested.
    #[error("timesteps must be at least 1, got {got}")]
    InvalidTimesteps {
        /// The rejected timestep count.
        got: usize,
    },

    /// A hidden-state draw failed.
    #[error(transparent)]
    Chain(#[from] ChainError),

    /// An observation draw failed.
    #[error(transparent)]
    Emission(#[from] EmissionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_timesteps_message() {
        let e = GenerateError::InvalidTimesteps { got: 0 };
        assert_eq!(e.to_string(), "timesteps must be at least 1, got 0");
    }

    #[test]
    fn chain_error_wraps() {
        let e: GenerateError = ChainError::StateOutOfRange { state: 9, n_states: 2 }.into();
        assert!(matches!(e, GenerateError::Chain(_)));
    }

    #[test]
    fn emission_error_wraps() {
        let e: GenerateError = EmissionError::StateOutOfRange { state: 9, n_states: 2 }.into();
        assert!(matches!(e, GenerateError::Emission(_)));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<GenerateError>();
    }
}
