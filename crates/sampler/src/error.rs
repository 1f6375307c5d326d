//! Error types for the hermes-sampler crate.

/// Error type for all fallible operations in the hermes-sampler crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplerError {
    /// Returned when a weight vector has no positive mass to select from.
    #[error("invalid distribution: {len} weight(s) with total mass {total}")]
    InvalidDistribution {
        /// Number of weights supplied.
        len: usize,
        /// Sum of the supplied weights.
        total: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_distribution_message() {
        let e = SamplerError::InvalidDistribution { len: 3, total: 0.0 };
        assert_eq!(e.to_string(), "invalid distribution: 3 weight(s) with total mass 0");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SamplerError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SamplerError>();
    }
}
