//! Error types for the hermes-io crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the hermes-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when writing an output file fails.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Path of the file being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_message_includes_path() {
        let e = IoError::Write {
            path: PathBuf::from("/tmp/out.csv"),
            source: std::io::Error::other("disk gone"),
        };
        assert_eq!(e.to_string(), "failed to write /tmp/out.csv: disk gone");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<IoError>();
    }
}
