//! Weighted categorical sampling.
//!
//! This crate provides the one sampling primitive the rest of the workspace
//! is built on: drawing a single index from a vector of non-negative weights.
//! Weights do not need to sum to 1; any positive scaling of the vector
//! selects identically.

pub mod error;
pub mod weighted;

pub use error::SamplerError;
pub use weighted::sample_index;
