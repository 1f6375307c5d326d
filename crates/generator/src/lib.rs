//! Forward sampling of synthetic hidden-state and observation sequences.
//!
//! A [`SequenceGenerator`] drives a [`hermes_chain::MarkovChain`] for the
//! hidden-state process and an [`hermes_emission::EmissionModel`] for the
//! observations, producing two aligned sequences of the requested length.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │   chain       │────▶│   emission     │────▶│ GeneratedSequence │
//!  │ (draw states) │     │ (draw values)  │     │ (aligned output)  │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use hermes_chain::MarkovChain;
//! use hermes_emission::CategoricalEmission;
//! use hermes_generator::SequenceGenerator;
//!
//! let chain = MarkovChain::new(
//!     vec![vec![0.7, 0.3], vec![0.4, 0.6]],
//!     vec![0.8, 0.2],
//! );
//! let emission = CategoricalEmission::new(vec![
//!     vec![0.5, 0.4, 0.1],
//!     vec![0.1, 0.3, 0.6],
//! ]);
//!
//! let mut generator = SequenceGenerator::seeded(chain, emission, 42);
//! let sequence = generator.generate(100).unwrap();
//! assert_eq!(sequence.len(), 100);
//! ```

pub mod error;
pub mod generator;
pub mod sequence;

pub use error::GenerateError;
pub use generator::{ArHmmGenerator, HmmGenerator, SequenceGenerator};
pub use sequence::GeneratedSequence;
