//! Plain-text serialization of generated sequences.
//!
//! Observations are rendered with their `Display` form in one of three
//! formats. None of the formats escape delimiter characters; the values
//! this workspace produces (integer symbol indices and plain floats) never
//! contain them.

pub mod error;
pub mod format;
pub mod writer;

pub use error::IoError;
pub use format::OutputFormat;
pub use writer::{write_csv, write_lines, write_observations, write_two_row};
