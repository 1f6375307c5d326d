//! Sequence generation loop.

use hermes_chain::MarkovChain;
use hermes_emission::{AutoregressiveEmission, CategoricalEmission, EmissionModel};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::error::GenerateError;
use crate::sequence::GeneratedSequence;

/// Generates aligned hidden-state and observation sequences.
///
/// Each generator owns its random source, so concurrent instances never
/// interfere and a fixed seed makes a run exactly reproducible. Parameters
/// are supplied at construction and never mutated.
#[derive(Debug, Clone)]
pub struct SequenceGenerator<E: EmissionModel> {
    chain: MarkovChain,
    emission: E,
    rng: StdRng,
}

/// Generator for the hidden Markov model variant (categorical symbols).
pub type HmmGenerator = SequenceGenerator<CategoricalEmission>;

/// Generator for the autoregressive variant (regime-switching real values).
pub type ArHmmGenerator = SequenceGenerator<AutoregressiveEmission>;

impl<E: EmissionModel> SequenceGenerator<E> {
    /// Constructs a generator with an explicitly seeded random source.
    pub fn seeded(chain: MarkovChain, emission: E, seed: u64) -> Self {
        Self {
            chain,
            emission,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Constructs a generator seeded from operating-system entropy.
    pub fn from_os_rng(chain: MarkovChain, emission: E) -> Self {
        Self {
            chain,
            emission,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Returns the chain driving the hidden-state process.
    pub fn chain(&self) -> &MarkovChain {
        &self.chain
    }

    /// Generates exactly `timesteps` (hidden state, observation) pairs.
    ///
    /// The first state is drawn from the initial distribution and each
    /// subsequent state from the transition row of its predecessor; the
    /// observation for a step is emitted immediately after its state, seeing
    /// every observation produced before it.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidTimesteps`] if `timesteps < 1`, or a
    /// wrapped chain/emission error on the first draw that hits malformed
    /// parameters.
    pub fn generate(
        &mut self,
        timesteps: usize,
    ) -> Result<GeneratedSequence<E::Observation>, GenerateError> {
        if timesteps < 1 {
            return Err(GenerateError::InvalidTimesteps { got: timesteps });
        }
        debug!(timesteps, n_states = self.chain.n_states(), "generating sequence");

        let mut states = Vec::with_capacity(timesteps);
        let mut observations: Vec<E::Observation> = Vec::with_capacity(timesteps);

        let mut state = self.chain.initial_state(&mut self.rng)?;
        states.push(state);
        let obs = self.emission.emit(state, &observations, &mut self.rng)?;
        observations.push(obs);

        for _ in 1..timesteps {
            state = self.chain.next_state(state, &mut self.rng)?;
            states.push(state);
            let obs = self.emission.emit(state, &observations, &mut self.rng)?;
            observations.push(obs);
        }

        Ok(GeneratedSequence::new(states, observations))
    }
}
