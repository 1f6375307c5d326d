//! Weighted index sampling.

use rand::Rng;

use crate::error::SamplerError;

/// Draws a single index from a vector of non-negative weights.
///
/// Equivalent to inverse-CDF sampling: a uniform value is drawn in
/// `[0, total)` where `total` is the sum of the weights, then the vector is
/// scanned in order, subtracting each weight, and the index at which the
/// running remainder first goes negative is returned. The weights need not
/// be normalized.
///
/// Floating-point rounding can leave a small positive remainder after the
/// full scan; the draw then falls on the last index. The function therefore
/// always returns an index for a vector with positive mass.
///
/// # Arguments
///
/// * `weights` - Non-negative selection weights, one per outcome.
/// * `rng` - Random number generator.
///
/// # Errors
///
/// Returns [`SamplerError::InvalidDistribution`] if `weights` is empty or
/// its total mass is not positive.
pub fn sample_index(weights: &[f64], rng: &mut impl Rng) -> Result<usize, SamplerError> {
    let total: f64 = weights.iter().sum();
    if weights.is_empty() || total <= 0.0 {
        return Err(SamplerError::InvalidDistribution {
            len: weights.len(),
            total,
        });
    }

    let mut remainder = rng.random::<f64>() * total;
    for (i, &w) in weights.iter().enumerate() {
        remainder -= w;
        if remainder < 0.0 {
            return Ok(i);
        }
    }
    // Rounding residual: the scan never went negative.
    Ok(weights.len() - 1)
}
