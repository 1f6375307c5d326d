//! Discrete-state Markov transition process.
//!
//! A [`MarkovChain`] holds a transition-weight matrix and an initial-state
//! distribution and draws hidden states from them. It keeps no history: each
//! draw is a pure function of the supplied parameters, the current state,
//! and the random source.
//!
//! # Quick start
//!
//! ```rust
//! use hermes_chain::MarkovChain;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let chain = MarkovChain::new(
//!     vec![vec![0.7, 0.3], vec![0.4, 0.6]],
//!     vec![0.8, 0.2],
//! );
//! assert!(chain.validate().is_ok());
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let s0 = chain.initial_state(&mut rng).unwrap();
//! let s1 = chain.next_state(s0, &mut rng).unwrap();
//! assert!(s1 < chain.n_states());
//! ```

pub mod chain;
pub mod error;

pub use chain::MarkovChain;
pub use error::ChainError;
