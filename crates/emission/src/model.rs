//! The emission capability shared by both model variants.

use rand::Rng;

use crate::error::EmissionError;

/// One observation per hidden state per timestep.
///
/// `history` holds every observation produced so far, in chronological
/// order; it is empty at the first timestep. The categorical variant
/// ignores it, the autoregressive variant reads its tail.
pub trait EmissionModel {
    /// The observation type this model produces.
    type Observation;

    /// Emits one observation for `state` given the observations so far.
    ///
    /// # Errors
    ///
    /// Returns [`EmissionError`] if `state` has no parameters or the
    /// parameters for it are unusable.
    fn emit<R: Rng>(
        &self,
        state: usize,
        history: &[Self::Observation],
        rng: &mut R,
    ) -> Result<Self::Observation, EmissionError>;
}
